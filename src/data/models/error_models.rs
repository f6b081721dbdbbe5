use thiserror::Error;

// Failures while retrieving a word list; never surfaced to deck consumers
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("{0}")]
    NetworkError(String),
    #[error("Invalid vocabulary JSON: {0}")]
    ParseError(String),
}

// Errors returned by the HTTP API
#[derive(Error, Debug)]
pub enum DeckApiError {
    #[error("Unknown HSK level: {0}")]
    InvalidTier(u8),
    #[error("Unknown HSK level: {0}")]
    UnparsableTier(String),
}
