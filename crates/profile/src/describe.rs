use carmatch_catalog::{Dimension, DimensionVector};

/// A dimension this strong is worth calling out in the summary
const STRONG_TRAIT_THRESHOLD: f32 = 7.0;

fn trait_description(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::FamilyFriendly => "family-oriented with focus on safety and space",
        Dimension::Adventure => "adventurous and outdoor-focused",
        Dimension::EcoConscious => "environmentally conscious",
        Dimension::Luxury => "appreciative of premium features and comfort",
        Dimension::Performance => "performance-driven and dynamic",
        Dimension::BudgetConscious => "value-focused and practical",
        Dimension::CityDriving => "urban lifestyle with compact needs",
        Dimension::Commuter => "a commuter prioritizing efficiency",
        Dimension::TechEnthusiast => "technology-forward",
        Dimension::SafetyFocused => "safety-conscious",
    }
}

/// Render a short human-readable summary of the profile's strongest traits
#[must_use]
pub fn describe(profile: &DimensionVector) -> String {
    let parts: Vec<&str> = profile
        .ranked()
        .into_iter()
        .take(3)
        .filter(|&d| profile.get(d) >= STRONG_TRAIT_THRESHOLD)
        .map(trait_description)
        .collect();

    if parts.is_empty() {
        "You have balanced priorities across different vehicle aspects.".to_string()
    } else {
        format!("You appear to be {}.", parts.join(", "))
    }
}
