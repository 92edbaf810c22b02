use carmatch_catalog::{FeatureSet, Vehicle, VehicleCatalog};

/// Blend between depth (per-category counts) and breadth (categories covered)
const RATIO_BLEND: f32 = 0.7;
const BREADTH_BLEND: f32 = 0.3;

/// Feature density points per feature-per-$10k
const FEATURE_DENSITY_SCALE: f32 = 15.0;

/// Assumed annual mileage and pump price for the fuel estimate
const ANNUAL_MILES: f32 = 15_000.0;
const FUEL_PRICE_PER_GALLON: f32 = 3.50;

/// Annual ownership cost scoring 100, and dollars per lost point
const COST_BASELINE: f32 = 2_000.0;
const COST_PER_POINT: f32 = 50.0;

/// MPG-per-$10k points scale
const MPG_VALUE_SCALE: f32 = 20.0;

const FEATURE_BLEND: f32 = 0.4;
const COST_BLEND: f32 = 0.3;
const MPG_BLEND: f32 = 0.3;

/// Catalog-wide feature norms, computed once per engine.
///
/// Feature quality is relative: a vehicle is judged against the best-equipped
/// vehicle in the same catalog, category by category, so the sub-score stays
/// meaningful whether the catalog lists five features per car or fifty.
#[derive(Debug, Clone)]
pub(crate) struct FeatureNorms {
    max_per_category: [usize; FeatureSet::CATEGORY_COUNT],
}

impl FeatureNorms {
    pub(crate) fn from_catalog(catalog: &VehicleCatalog) -> Self {
        let mut max_per_category = [0usize; FeatureSet::CATEGORY_COUNT];
        for vehicle in catalog.iter() {
            for (slot, count) in max_per_category
                .iter_mut()
                .zip(vehicle.features.category_counts())
            {
                *slot = (*slot).max(count);
            }
        }
        log::debug!("Catalog feature norms: {max_per_category:?}");
        Self { max_per_category }
    }

    /// Feature quality, 0-100: mean per-category ratio against the catalog
    /// maximum, blended with breadth so coverage across categories beats a
    /// pile-up in one
    pub(crate) fn feature_quality(&self, features: &FeatureSet) -> f32 {
        let counts = features.category_counts();
        let mut ratio_sum = 0.0;
        for (count, max) in counts.iter().zip(self.max_per_category) {
            if max > 0 {
                ratio_sum += (*count as f32 / max as f32).min(1.0);
            }
        }
        let ratio = ratio_sum / FeatureSet::CATEGORY_COUNT as f32;
        let breadth = features.breadth() as f32 / FeatureSet::CATEGORY_COUNT as f32;
        (RATIO_BLEND * ratio + BREADTH_BLEND * breadth) * 100.0
    }
}

/// Estimated annual fuel spend for a combined MPG figure
pub(crate) fn annual_fuel_cost(mpg_combined: f32) -> f32 {
    if mpg_combined <= 0.0 {
        return 0.0;
    }
    ANNUAL_MILES / mpg_combined * FUEL_PRICE_PER_GALLON
}

/// Value for money, 0-100: feature density per dollar, operating-cost
/// efficiency, and fuel economy per dollar
pub(crate) fn value_score(vehicle: &Vehicle) -> f32 {
    let price_per_10k = (vehicle.basic_info.msrp as f32 / 10_000.0).max(0.1);

    let feature_density = vehicle.features.total() as f32 / price_per_10k;
    let feature_score = (feature_density * FEATURE_DENSITY_SCALE).min(100.0);

    let annual_cost = vehicle.costs.insurance_annual_estimate as f32
        + vehicle.costs.maintenance_annual_estimate as f32
        + annual_fuel_cost(vehicle.specifications.mpg_combined);
    let cost_efficiency = (100.0 - (annual_cost - COST_BASELINE) / COST_PER_POINT).clamp(0.0, 100.0);

    let mpg_value = (vehicle.specifications.mpg_combined / price_per_10k * MPG_VALUE_SCALE).min(100.0);

    feature_score * FEATURE_BLEND + cost_efficiency * COST_BLEND + mpg_value * MPG_BLEND
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn vehicle_json(id: &str, msrp: u64, mpg: f32, features: &str) -> String {
        format!(
            r#"{{
                "id": "{id}",
                "basic_info": {{"make": "Test", "model": "{id}", "year": 2024, "body_type": "Sedan", "msrp": {msrp}}},
                "specifications": {{"engine": "2.0L I4", "horsepower": 200, "mpg_combined": {mpg}, "seating_capacity": 5}},
                "lifestyle_scores": {{}},
                "features": {features},
                "costs": {{"insurance_annual_estimate": 1200, "maintenance_annual_estimate": 400}}
            }}"#
        )
    }

    fn catalog(features_a: &str, features_b: &str) -> VehicleCatalog {
        let json = format!(
            r#"{{"vehicles": [{}, {}]}}"#,
            vehicle_json("a", 25_000, 30.0, features_a),
            vehicle_json("b", 25_000, 30.0, features_b),
        );
        VehicleCatalog::from_json_str(&json).unwrap()
    }

    #[test]
    fn test_best_equipped_vehicle_scores_full_ratio() {
        let catalog = catalog(
            r#"{"safety": ["a", "b"], "technology": ["c"], "comfort": ["d"], "entertainment": ["e"]}"#,
            r#"{"safety": ["a"]}"#,
        );
        let norms = FeatureNorms::from_catalog(&catalog);

        let full = norms.feature_quality(&catalog.get("a").unwrap().features);
        assert_eq!(full, 100.0);
    }

    #[test]
    fn test_breadth_beats_single_category_pileup() {
        let catalog = catalog(
            r#"{"safety": ["a", "b", "c", "d"]}"#,
            r#"{"safety": ["a"], "technology": ["b"], "comfort": ["c"], "entertainment": ["d"]}"#,
        );
        let norms = FeatureNorms::from_catalog(&catalog);

        let piled = norms.feature_quality(&catalog.get("a").unwrap().features);
        let broad = norms.feature_quality(&catalog.get("b").unwrap().features);
        assert!(broad > piled);
    }

    #[test]
    fn test_no_features_scores_zero() {
        let catalog = catalog(r#"{"safety": ["a"]}"#, r#"{}"#);
        let norms = FeatureNorms::from_catalog(&catalog);
        assert_eq!(norms.feature_quality(&catalog.get("b").unwrap().features), 0.0);
    }

    #[test]
    fn test_value_rewards_cheaper_comparable_vehicle() {
        let features = r#"{"safety": ["a", "b"], "technology": ["c", "d"]}"#;
        let json = format!(
            r#"{{"vehicles": [{}, {}]}}"#,
            vehicle_json("cheap", 20_000, 32.0, features),
            vehicle_json("dear", 45_000, 32.0, features),
        );
        let catalog = VehicleCatalog::from_json_str(&json).unwrap();

        let cheap = value_score(catalog.get("cheap").unwrap());
        let dear = value_score(catalog.get("dear").unwrap());
        assert!(cheap > dear);
    }

    #[test]
    fn test_annual_fuel_cost() {
        assert!((annual_fuel_cost(30.0) - 1750.0).abs() < 1e-3);
        assert_eq!(annual_fuel_cost(0.0), 0.0);
    }

    #[test]
    fn test_value_score_bounded() {
        let json = format!(
            r#"{{"vehicles": [{}]}}"#,
            vehicle_json("tiny", 1, 80.0, r#"{"safety": ["a","b","c","d","e","f"]}"#)
        );
        let catalog = VehicleCatalog::from_json_str(&json).unwrap();
        let score = value_score(catalog.get("tiny").unwrap());
        assert!((0.0..=100.0).contains(&score));
    }
}
