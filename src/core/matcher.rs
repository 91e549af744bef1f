use crate::core::filters::common_elements;
use crate::core::scoring::compatibility_score;
use crate::models::{MatchResult, Profile, ScoringParams};

/// Result of a ranking pass
#[derive(Debug)]
pub struct RankOutcome {
    pub matches: Vec<MatchResult>,
    pub total_candidates: usize,
}

/// Match ranking orchestrator
///
/// # Pipeline stages
/// 1. Self-exclusion by profile id
/// 2. Compatibility scoring (gender gate included)
/// 3. Zero-score omission
/// 4. Stable descending sort by score
#[derive(Debug, Clone)]
pub struct Matcher {
    params: ScoringParams,
}

impl Matcher {
    pub fn new(params: ScoringParams) -> Self {
        Self { params }
    }

    pub fn with_default_params() -> Self {
        Self {
            params: ScoringParams::default(),
        }
    }

    pub fn params(&self) -> &ScoringParams {
        &self.params
    }

    /// Rank candidates for a subject profile
    ///
    /// Candidates with a zero score (gender-gate failures included) are
    /// omitted entirely rather than returned with score 0. The sort is
    /// stable, so equal scores keep their dataset order; no secondary
    /// tie-break key exists. Pure function of its inputs and the static
    /// lookup tables.
    ///
    /// # Arguments
    /// * `subject` - The profile to rank candidates against
    /// * `candidates` - The full candidate list (the subject may be present
    ///   and is skipped)
    ///
    /// # Returns
    /// RankOutcome with matches sorted by descending compatibility score
    pub fn rank(&self, subject: &Profile, candidates: &[Profile]) -> RankOutcome {
        let total_candidates = candidates.len();

        let mut matches: Vec<MatchResult> = candidates
            .iter()
            .filter(|candidate| candidate.id != subject.id)
            .filter_map(|candidate| {
                let score = compatibility_score(subject, candidate, &self.params);

                if score > 0.0 {
                    Some(MatchResult {
                        user_id: candidate.id.clone(),
                        name: candidate.name.clone(),
                        compatibility_score: score,
                        common_interests: common_elements(&subject.interests, &candidate.interests),
                        common_hobbies: common_elements(&subject.hobbies, &candidate.hobbies),
                    })
                } else {
                    None
                }
            })
            .collect();

        // sort_by is stable: ties retain candidate order
        matches.sort_by(|a, b| {
            b.compatibility_score
                .partial_cmp(&a.compatibility_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        RankOutcome {
            matches,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_params()
    }
}
