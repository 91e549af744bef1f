use crate::core::distance::{distance_between, location_score, weights_for_distance};
use crate::core::filters::mutual_gender_match;
use crate::models::{DimensionScores, Profile, ScoringParams};
use std::collections::HashSet;

/// Calculate a compatibility score (0-1) between two profiles
///
/// Scoring formula:
/// score = (
///     interest_score * 0.25 +      # Jaccard over interests, tiered
///     hobby_score * 0.15 +         # Jaccard plus high-value hobby bonus
///     education_score * 0.10 +     # Ordinal level proximity
///     personality_score * 0.15 +   # Jaccard plus complementary-trait bonus
///     location_score * 0.25 +      # City distance tiers
///     age_score * 0.10             # Age gap tiers
/// ) * boost
///
/// Interests/hobbies/location weights shift by distance band (see
/// `weights_for_distance`), and the weighted sum is boosted by 1.2 when both
/// the interest and hobby sub-scores exceed 0.7. Pairs that fail the mutual
/// gender-preference gate score exactly 0.0 with no further computation.
/// The result is capped at 1.0 and rounded to two decimals.
pub fn compatibility_score(a: &Profile, b: &Profile, params: &ScoringParams) -> f64 {
    if !mutual_gender_match(a, b) {
        return 0.0;
    }

    let scores = score_breakdown(a, b, params);

    // The band lookup is directed, so score(a, b) and score(b, a) can land
    // in different bands when the table only knows one direction.
    let weights = weights_for_distance(distance_between(&a.location, &b.location));

    let boost = if scores.interests > 0.7 && scores.hobbies > 0.7 {
        1.2
    } else {
        1.0
    };

    let weighted = scores.interests * weights.interests
        + scores.hobbies * weights.hobbies
        + scores.education * weights.education
        + scores.personality * weights.personality
        + scores.location * weights.location
        + scores.age * weights.age;

    round_score((weighted * boost).min(1.0))
}

/// Per-dimension sub-score breakdown
///
/// Does not apply the gender-preference gate; callers that need the hard
/// zero use `compatibility_score`.
pub fn score_breakdown(a: &Profile, b: &Profile, params: &ScoringParams) -> DimensionScores {
    DimensionScores {
        interests: interest_score(&a.interests, &b.interests),
        hobbies: hobby_score(&a.hobbies, &b.hobbies, &params.high_value_hobbies),
        education: education_score(&a.education_level, &b.education_level),
        personality: personality_score(&a.personality_traits, &b.personality_traits),
        location: location_score(&a.location, &b.location),
        age: age_score(a.age, b.age),
    }
}

/// Tiered interest similarity (0-1)
///
/// The Jaccard ratio is bucketed into fixed tiers so small sets don't swing
/// the score on a single shared interest.
#[inline]
fn interest_score(interests1: &[String], interests2: &[String]) -> f64 {
    let a: HashSet<&str> = interests1.iter().map(String::as_str).collect();
    let b: HashSet<&str> = interests2.iter().map(String::as_str).collect();

    let union = a.union(&b).count();
    if union == 0 {
        return 0.0;
    }

    let ratio = a.intersection(&b).count() as f64 / union as f64;

    if ratio >= 0.8 {
        1.0
    } else if ratio >= 0.6 {
        0.8
    } else if ratio >= 0.4 {
        0.6
    } else if ratio >= 0.2 {
        0.4
    } else {
        0.2
    }
}

/// Hobby similarity (0-1): Jaccard base plus a bonus for shared
/// high-value hobbies, capped at 1.0
#[inline]
fn hobby_score(hobbies1: &[String], hobbies2: &[String], high_value: &[String]) -> f64 {
    let a: HashSet<&str> = hobbies1.iter().map(String::as_str).collect();
    let b: HashSet<&str> = hobbies2.iter().map(String::as_str).collect();

    let union = a.union(&b).count();
    if union == 0 {
        return 0.0;
    }

    let common: HashSet<&str> = a.intersection(&b).copied().collect();
    let base = common.len() as f64 / union as f64;

    let high_value_set: HashSet<&str> = high_value.iter().map(String::as_str).collect();
    let bonus = if high_value_set.is_empty() {
        0.0
    } else {
        let shared_high_value = common.intersection(&high_value_set).count();
        0.2 * (shared_high_value as f64 / high_value_set.len() as f64)
    };

    (base + bonus).min(1.0)
}

/// Ordinal for a named education level; unranked values map to 0
#[inline]
fn education_ordinal(level: &str) -> u8 {
    match level {
        "Bachelors" => 1,
        "Masters" => 2,
        "PhD" => 3,
        _ => 0,
    }
}

/// Education compatibility (0-1): equal levels 1.0, adjacent 0.8, else 0.6
#[inline]
fn education_score(level1: &str, level2: &str) -> f64 {
    let ordinal1 = education_ordinal(level1);
    let ordinal2 = education_ordinal(level2);

    if ordinal1 == ordinal2 {
        1.0
    } else if ordinal1.abs_diff(ordinal2) == 1 {
        0.8
    } else {
        0.6
    }
}

/// Complementary traits for a given trait; the mapping is directed
#[inline]
fn complementary_traits(trait_name: &str) -> &'static [&'static str] {
    match trait_name {
        "creative" => &["analytical"],
        "outgoing" => &["independent"],
        "ambitious" => &["empathetic"],
        _ => &[],
    }
}

/// Personality compatibility (0-1): Jaccard over trait sets plus a
/// complementary-pair bonus, capped at 1.0
///
/// The bonus walks both raw trait sequences, so duplicated traits count
/// more than once, and divides by the subject's sequence length. A subject
/// with no traits gets no bonus.
fn personality_score(traits1: &[String], traits2: &[String]) -> f64 {
    let a: HashSet<&str> = traits1.iter().map(String::as_str).collect();
    let b: HashSet<&str> = traits2.iter().map(String::as_str).collect();

    let union = a.union(&b).count();
    let base = if union == 0 {
        0.0
    } else {
        a.intersection(&b).count() as f64 / union as f64
    };

    if traits1.is_empty() {
        return base;
    }

    let mut complementary_count = 0usize;
    for t1 in traits1 {
        let complements = complementary_traits(t1);
        for t2 in traits2 {
            if complements.contains(&t2.as_str()) {
                complementary_count += 1;
            }
        }
    }

    let bonus = 0.2 * (complementary_count as f64 / traits1.len() as f64);

    (base + bonus).min(1.0)
}

/// Age compatibility (0-1), tiered by absolute age difference
#[inline]
fn age_score(age1: u8, age2: u8) -> f64 {
    match age1.abs_diff(age2) {
        0..=2 => 1.0,
        3..=5 => 0.8,
        6..=10 => 0.6,
        _ => 0.4,
    }
}

/// Round to two decimal places
#[inline]
fn round_score(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
