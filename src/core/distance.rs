use crate::models::DimensionWeights;

/// Distance assigned to city pairs absent from the lookup table
pub const UNKNOWN_DISTANCE: u32 = 1000;

/// Directed distance lookup between named cities
///
/// The table is directed on purpose: some pairs carry different values per
/// direction (New York -> Boston is 10, Boston -> New York is 16), and a
/// pair missing in one direction falls back to [`UNKNOWN_DISTANCE`]. The
/// asymmetry is part of the scoring contract, not a data error.
#[inline]
pub fn distance_between(from: &str, to: &str) -> u32 {
    match (from, to) {
        ("New York", "Boston") => 10,
        ("Boston", "New York") => 16,
        ("Boston", "Chicago") => 30,
        ("San Francisco", "Seattle") => 51,
        ("Seattle", "San Francisco") => 63,
        ("New York", "Seattle") => 20,
        ("New York", "San Francisco") => 80,
        ("San Francisco", "New York") => 100,
        _ => UNKNOWN_DISTANCE,
    }
}

/// Location sub-score (0-1)
///
/// Identical city names score 1.0 without touching the table; everything
/// else is tiered by the directed distance.
#[inline]
pub fn location_score(location1: &str, location2: &str) -> f64 {
    if location1 == location2 {
        return 1.0;
    }

    match distance_between(location1, location2) {
        0..=20 => 1.0,
        21..=30 => 0.8,
        31..=50 => 0.6,
        51..=100 => 0.4,
        101..=150 => 0.2,
        _ => 0.0,
    }
}

/// Weight schedule for a candidate pair's distance band
///
/// Inside the (20, 50] range, emphasis moves from proximity toward shared
/// interests and hobbies; education, personality, and age weights are the
/// same in every band.
pub fn weights_for_distance(distance: u32) -> DimensionWeights {
    let mut weights = DimensionWeights::default();

    match distance {
        21..=30 => {
            weights.interests = 0.30;
            weights.hobbies = 0.20;
            weights.location = 0.15;
        }
        31..=40 => {
            weights.interests = 0.29;
            weights.hobbies = 0.19;
            weights.location = 0.17;
        }
        41..=50 => {
            weights.interests = 0.28;
            weights.hobbies = 0.18;
            weights.location = 0.19;
        }
        _ => {}
    }

    weights
}
