use crate::result::ScoreBreakdown;
use carmatch_catalog::{DimensionVector, Vehicle};

/// Cap on rendered reasons; the strongest signals win
const MAX_REASONS: usize = 4;

/// A profile dimension and a vehicle score both at or above this align
const STRONG_DIMENSION: f32 = 7.0;

/// Sub-scores at or above this are worth calling out
const STRONG_SUBSCORE: f32 = 85.0;

const HIGH_MPG: f32 = 35.0;
const HIGH_HORSEPOWER: u32 = 300;
const SAFETY_RICH: usize = 5;
const VALUE_PRICE_CAP: u64 = 30_000;
const PREMIUM_PRICE_FLOOR: u64 = 50_000;

/// Render short human-readable reasons for a match, most significant first.
///
/// Ordering: aligned lifestyle dimensions (strongest user preference first),
/// then high sub-scores, then spec callouts.
pub(crate) fn match_reasons(
    vehicle: &Vehicle,
    profile: &DimensionVector,
    breakdown: &ScoreBreakdown,
    has_budget: bool,
) -> Vec<String> {
    let mut reasons = Vec::new();

    for dimension in profile.ranked().into_iter().take(3) {
        if profile.get(dimension) < STRONG_DIMENSION {
            break;
        }
        if vehicle.lifestyle_scores.get(dimension) >= STRONG_DIMENSION {
            reasons.push(format!("Strong {} match", dimension.label()));
        }
    }

    if has_budget && breakdown.budget_fit >= STRONG_SUBSCORE {
        reasons.push("Fits your budget".to_string());
    }
    if breakdown.feature_quality >= STRONG_SUBSCORE {
        reasons.push("Well equipped across every category".to_string());
    }
    if breakdown.value_score >= STRONG_SUBSCORE {
        reasons.push("Excellent value for money".to_string());
    }

    let info = &vehicle.basic_info;
    let specs = &vehicle.specifications;
    if info.msrp < VALUE_PRICE_CAP {
        reasons.push("Great value".to_string());
    } else if info.msrp > PREMIUM_PRICE_FLOOR {
        reasons.push("Premium features".to_string());
    }
    if specs.mpg_combined > HIGH_MPG {
        reasons.push("Excellent fuel economy".to_string());
    }
    if specs.horsepower > HIGH_HORSEPOWER {
        reasons.push("High performance".to_string());
    }
    if vehicle.features.safety.len() > SAFETY_RICH {
        reasons.push("Advanced safety tech".to_string());
    }

    reasons.truncate(MAX_REASONS);
    reasons
}

#[cfg(test)]
mod tests {
    use super::*;
    use carmatch_catalog::Dimension;

    fn vehicle(msrp: u64, mpg: f32, horsepower: u32) -> Vehicle {
        serde_json::from_str(&format!(
            r#"{{
                "id": "test",
                "basic_info": {{"make": "Test", "model": "Car", "year": 2024, "body_type": "Sedan", "msrp": {msrp}}},
                "specifications": {{"engine": "2.0L I4", "horsepower": {horsepower}, "mpg_combined": {mpg}, "seating_capacity": 5}},
                "lifestyle_scores": {{"eco_conscious": 9, "commuter": 8}},
                "features": {{"safety": ["a"]}},
                "costs": {{"insurance_annual_estimate": 1200, "maintenance_annual_estimate": 400}}
            }}"#
        ))
        .unwrap()
    }

    fn neutral_breakdown() -> ScoreBreakdown {
        ScoreBreakdown {
            lifestyle_match: 70.0,
            budget_fit: 70.0,
            feature_quality: 50.0,
            value_score: 50.0,
        }
    }

    #[test]
    fn test_aligned_dimension_leads() {
        let mut profile = DimensionVector::uniform(5.0);
        profile.set(Dimension::EcoConscious, 9.0);

        let reasons = match_reasons(&vehicle(28_000, 40.0, 180), &profile, &neutral_breakdown(), false);
        assert_eq!(reasons[0], "Strong Eco Conscious match");
    }

    #[test]
    fn test_budget_reason_needs_a_budget() {
        let profile = DimensionVector::uniform(5.0);
        let breakdown = ScoreBreakdown {
            budget_fit: 100.0,
            ..neutral_breakdown()
        };

        let with_budget = match_reasons(&vehicle(28_000, 30.0, 180), &profile, &breakdown, true);
        assert!(with_budget.contains(&"Fits your budget".to_string()));

        let without_budget = match_reasons(&vehicle(28_000, 30.0, 180), &profile, &breakdown, false);
        assert!(!without_budget.contains(&"Fits your budget".to_string()));
    }

    #[test]
    fn test_spec_callouts() {
        let profile = DimensionVector::uniform(5.0);
        let reasons = match_reasons(&vehicle(55_000, 20.0, 400), &profile, &neutral_breakdown(), false);
        assert!(reasons.contains(&"Premium features".to_string()));
        assert!(reasons.contains(&"High performance".to_string()));
    }

    #[test]
    fn test_capped_at_four() {
        let mut profile = DimensionVector::uniform(5.0);
        profile.set(Dimension::EcoConscious, 9.0);
        profile.set(Dimension::Commuter, 8.0);
        let breakdown = ScoreBreakdown {
            lifestyle_match: 95.0,
            budget_fit: 95.0,
            feature_quality: 95.0,
            value_score: 95.0,
        };

        let reasons = match_reasons(&vehicle(25_000, 45.0, 320), &profile, &breakdown, true);
        assert_eq!(reasons.len(), MAX_REASONS);
    }
}
