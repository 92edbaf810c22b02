use carmatch_catalog::Vehicle;
use serde::Serialize;

/// One scored catalog vehicle with its explanation
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MatchResult {
    pub vehicle: Vehicle,

    /// Composite score, 0-100, rounded to two decimals
    pub match_score: f32,

    pub score_breakdown: ScoreBreakdown,

    /// Short human-readable phrases, most significant first
    pub match_reasons: Vec<String>,
}

/// The four independently computed sub-scores, each 0-100
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct ScoreBreakdown {
    pub lifestyle_match: f32,
    pub budget_fit: f32,
    pub feature_quality: f32,
    pub value_score: f32,
}

/// Round to two decimals so equal-looking scores compare equal and the
/// ranking tie-breaks are reachable
#[must_use]
pub(crate) fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
