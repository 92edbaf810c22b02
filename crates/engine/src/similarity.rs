use carmatch_catalog::{Dimension, DimensionVector};

/// User values at or beyond these bounds are strong stated preferences
const EXTREME_LOW: f32 = 2.0;
const EXTREME_HIGH: f32 = 9.0;

/// User values inside this band carry little discriminating power
const NEUTRAL_LOW: f32 = 4.0;
const NEUTRAL_HIGH: f32 = 6.0;

const EXTREME_WEIGHT: f32 = 1.5;
const NEUTRAL_WEIGHT: f32 = 0.5;
const DEFAULT_WEIGHT: f32 = 1.0;

/// Largest per-dimension gap on the shared 1-10 scale (vehicle scores may
/// bottom out at 0 when a catalog entry omits a dimension)
const MAX_GAP: f32 = 10.0;

/// How much a dimension counts toward the similarity, given how strongly the
/// user stated the preference
fn dimension_weight(user_value: f32) -> f32 {
    if user_value <= EXTREME_LOW || user_value >= EXTREME_HIGH {
        EXTREME_WEIGHT
    } else if (NEUTRAL_LOW..=NEUTRAL_HIGH).contains(&user_value) {
        NEUTRAL_WEIGHT
    } else {
        DEFAULT_WEIGHT
    }
}

/// Lifestyle similarity between a profile and a vehicle's scores, 0-100.
///
/// Normalized inverse weighted Euclidean distance: moving any vehicle
/// dimension toward the profile's value never lowers the score, which keeps
/// the ranking's monotonicity guarantee. A cosine over raw vectors does not:
/// pulling a component of an already-parallel vector toward the profile can
/// reduce alignment.
pub(crate) fn lifestyle_match(profile: &DimensionVector, vehicle_scores: &DimensionVector) -> f32 {
    let mut weighted_gap_sq = 0.0;
    let mut max_gap_sq = 0.0;

    for dimension in Dimension::ALL {
        let weight = dimension_weight(profile.get(dimension));
        let gap = profile.get(dimension) - vehicle_scores.get(dimension);
        weighted_gap_sq += weight * gap * gap;
        max_gap_sq += weight * MAX_GAP * MAX_GAP;
    }

    if max_gap_sq <= 0.0 {
        return 0.0;
    }
    let distance = (weighted_gap_sq / max_gap_sq).sqrt();
    ((1.0 - distance) * 100.0).clamp(0.0, 100.0)
}
