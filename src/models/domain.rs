use serde::{Deserialize, Serialize};
use validator::Validate;

/// User profile loaded from the static dataset
///
/// Profiles are immutable for the process lifetime; every scoring field is
/// required at load time so malformed entries fail deserialization instead
/// of silently scoring as empty.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Profile {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 1))]
    pub age: u8,
    pub gender: String,
    pub interested_in: String,
    pub location: String,
    pub hobbies: Vec<String>,
    pub interests: Vec<String>,
    pub occupation: String,
    pub education_level: String,
    pub personality_traits: Vec<String>,
}

/// Ranked match result, produced per ranking call and never persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub user_id: String,
    pub name: String,
    pub compatibility_score: f64,
    pub common_interests: Vec<String>,
    pub common_hobbies: Vec<String>,
}

/// Per-dimension sub-scores, each in [0, 1]
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DimensionScores {
    pub interests: f64,
    pub hobbies: f64,
    pub education: f64,
    pub personality: f64,
    pub location: f64,
    pub age: f64,
}

/// Per-dimension scoring weights
///
/// The defaults sum to 1.0; interests/hobbies/location shift together by
/// distance band while education/personality/age stay fixed.
#[derive(Debug, Clone, Copy)]
pub struct DimensionWeights {
    pub interests: f64,
    pub hobbies: f64,
    pub education: f64,
    pub personality: f64,
    pub location: f64,
    pub age: f64,
}

impl Default for DimensionWeights {
    fn default() -> Self {
        Self {
            interests: 0.25,
            hobbies: 0.15,
            education: 0.10,
            personality: 0.15,
            location: 0.25,
            age: 0.10,
        }
    }
}

/// Tunable scoring parameters
#[derive(Debug, Clone)]
pub struct ScoringParams {
    /// Hobbies that earn a bonus on top of the Jaccard base when shared
    pub high_value_hobbies: Vec<String>,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            high_value_hobbies: vec![
                "photography".to_string(),
                "hiking".to_string(),
                "cooking".to_string(),
            ],
        }
    }
}
