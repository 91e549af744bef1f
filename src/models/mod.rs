// Model exports
pub mod domain;
pub mod responses;

pub use domain::{DimensionScores, DimensionWeights, MatchResult, Profile, ScoringParams};
pub use responses::{
    CompatibilityResponse, ErrorResponse, HealthResponse, MatchListResponse, WelcomeResponse,
};
