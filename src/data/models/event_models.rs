use serde::Serialize;

use crate::data::models::Tier;

/// Published once per finished load attempt, remote or fallback
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierLoaded {
    pub tier: Tier,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>, // Failure reason when the fallback deck was used
}

/// Load bookkeeping exposed by the status endpoint
#[derive(Debug, Serialize)]
pub struct DeckStatus {
    pub loaded: Vec<Tier>,
    pub loading: Vec<Tier>,
}

/// Standard API response format
#[derive(Serialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
}
