use serde::{Deserialize, Serialize};
use crate::models::domain::{MatchMap, MatchSummary};

/// Response for the pairing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse {
    #[serde(rename = "runId")]
    pub run_id: String,
    pub matches: MatchMap,
    #[serde(flatten)]
    pub summary: MatchSummary,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
