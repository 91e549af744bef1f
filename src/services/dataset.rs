use crate::models::Profile;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use validator::Validate;

/// Errors that can occur while loading the profile dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse dataset JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid profile '{id}': {source}")]
    Invalid {
        id: String,
        source: validator::ValidationErrors,
    },

    #[error("Duplicate profile id: {0}")]
    DuplicateId(String),
}

/// Top-level dataset file format: `{"users": [...]}`
#[derive(Debug, Deserialize)]
struct DatasetFile {
    users: Vec<Profile>,
}

/// In-memory read-only profile store
///
/// Loaded once at startup and never mutated, so request handlers share it
/// behind an `Arc` without synchronization. Every profile is validated on
/// load; a malformed entry aborts the load instead of scoring as empty.
#[derive(Debug)]
pub struct ProfileStore {
    profiles: Vec<Profile>,
    by_id: HashMap<String, usize>,
}

impl ProfileStore {
    /// Load and validate the dataset from a JSON file
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Build a store from raw dataset JSON
    pub fn from_json(raw: &str) -> Result<Self, DatasetError> {
        let file: DatasetFile = serde_json::from_str(raw)?;
        Self::from_profiles(file.users)
    }

    fn from_profiles(profiles: Vec<Profile>) -> Result<Self, DatasetError> {
        let mut by_id = HashMap::with_capacity(profiles.len());

        for (index, profile) in profiles.iter().enumerate() {
            profile.validate().map_err(|source| DatasetError::Invalid {
                id: profile.id.clone(),
                source,
            })?;

            if by_id.insert(profile.id.clone(), index).is_some() {
                return Err(DatasetError::DuplicateId(profile.id.clone()));
            }
        }

        tracing::debug!("Validated {} profiles", profiles.len());

        Ok(Self { profiles, by_id })
    }

    /// Look up a profile by id; absence maps to the NotFound condition at
    /// the API layer
    pub fn get(&self, id: &str) -> Option<&Profile> {
        self.by_id.get(id).map(|&index| &self.profiles[index])
    }

    /// All profiles in dataset order
    pub fn all(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
