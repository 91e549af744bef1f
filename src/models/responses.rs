use crate::models::domain::{DimensionScores, MatchResult};
use serde::{Deserialize, Serialize};

/// Response for the match ranking endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchListResponse {
    pub user_id: String,
    pub matches: Vec<MatchResult>,
    pub total_candidates: usize,
}

/// Response for the pairwise compatibility endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibilityResponse {
    pub user1_id: String,
    pub user2_id: String,
    pub compatibility_score: f64,
    pub breakdown: DimensionScores,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Root welcome response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WelcomeResponse {
    pub message: String,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
