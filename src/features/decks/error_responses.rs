use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use crate::data::models::DeckApiError;

impl IntoResponse for DeckApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            DeckApiError::InvalidTier(_) | DeckApiError::UnparsableTier(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
        };

        let body = json!({
            "error": message,
            "status": status.as_u16()
        });

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_tier_is_bad_request() {
        let response = DeckApiError::InvalidTier(9).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_unparsable_tier_is_bad_request() {
        let response = DeckApiError::UnparsableTier("abc".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
