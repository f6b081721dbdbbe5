use reqwest::Error as HttpError;
use serde_json::Error as JsonError;
use crate::data::models::FetchError;

impl From<HttpError> for FetchError {
    fn from(err: HttpError) -> Self {
        FetchError::NetworkError(err.to_string())
    }
}

impl From<JsonError> for FetchError {
    fn from(err: JsonError) -> Self {
        FetchError::ParseError(err.to_string())
    }
}
