use crate::error::{EngineError, Result};
use carmatch_catalog::{FeatureSet, Specifications, Vehicle, VehicleCatalog};
use serde::Serialize;

/// Side-by-side comparison of a handful of vehicles
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Comparison {
    pub entries: Vec<ComparisonEntry>,
    pub metrics: ComparisonMetrics,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ComparisonEntry {
    pub id: String,
    pub name: String,
    pub price: u64,
    pub specifications: Specifications,
    pub features: FeatureSet,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

/// Per-metric columns, one point per compared vehicle, in request order
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ComparisonMetrics {
    pub price: Vec<MetricPoint>,
    pub fuel_economy: Vec<MetricPoint>,
    pub horsepower: Vec<MetricPoint>,
    pub seating: Vec<MetricPoint>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MetricPoint {
    pub vehicle: String,
    pub value: f64,
}

fn metric(vehicle: &Vehicle, value: f64) -> MetricPoint {
    MetricPoint {
        vehicle: vehicle.display_name(),
        value,
    }
}

/// Assemble a comparison; any unknown id fails the whole request
pub(crate) fn build(catalog: &VehicleCatalog, ids: &[String]) -> Result<Comparison> {
    let mut entries = Vec::with_capacity(ids.len());
    let mut price = Vec::with_capacity(ids.len());
    let mut fuel_economy = Vec::with_capacity(ids.len());
    let mut horsepower = Vec::with_capacity(ids.len());
    let mut seating = Vec::with_capacity(ids.len());

    for id in ids {
        let vehicle = catalog
            .get(id)
            .ok_or_else(|| EngineError::VehicleNotFound(id.clone()))?;

        entries.push(ComparisonEntry {
            id: vehicle.id.clone(),
            name: vehicle.display_name(),
            price: vehicle.basic_info.msrp,
            specifications: vehicle.specifications.clone(),
            features: vehicle.features.clone(),
            pros: vehicle.pros.clone(),
            cons: vehicle.cons.clone(),
        });
        price.push(metric(vehicle, vehicle.basic_info.msrp as f64));
        fuel_economy.push(metric(vehicle, f64::from(vehicle.specifications.mpg_combined)));
        horsepower.push(metric(vehicle, f64::from(vehicle.specifications.horsepower)));
        seating.push(metric(vehicle, f64::from(vehicle.specifications.seating_capacity)));
    }

    Ok(Comparison {
        entries,
        metrics: ComparisonMetrics {
            price,
            fuel_economy,
            horsepower,
            seating,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn catalog() -> VehicleCatalog {
        VehicleCatalog::from_json_str(
            r#"{"vehicles": [
                {
                    "id": "corolla",
                    "basic_info": {"make": "Toyota", "model": "Corolla", "year": 2024, "body_type": "Sedan", "msrp": 23000},
                    "specifications": {"engine": "2.0L I4", "horsepower": 169, "mpg_combined": 35, "seating_capacity": 5},
                    "lifestyle_scores": {},
                    "features": {},
                    "costs": {"insurance_annual_estimate": 1200, "maintenance_annual_estimate": 350},
                    "pros": ["Reliable"],
                    "cons": ["Modest power"]
                },
                {
                    "id": "x3",
                    "basic_info": {"make": "BMW", "model": "X3", "year": 2024, "body_type": "SUV", "msrp": 48000},
                    "specifications": {"engine": "2.0L Turbo I4", "horsepower": 248, "mpg_combined": 26, "seating_capacity": 5},
                    "lifestyle_scores": {},
                    "features": {},
                    "costs": {"insurance_annual_estimate": 1900, "maintenance_annual_estimate": 1000}
                }
            ]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_entries_follow_request_order() {
        let comparison = build(&catalog(), &["x3".to_string(), "corolla".to_string()]).unwrap();
        assert_eq!(comparison.entries[0].name, "BMW X3");
        assert_eq!(comparison.entries[1].name, "Toyota Corolla");
        assert_eq!(comparison.metrics.price[0].value, 48000.0);
        assert_eq!(comparison.metrics.horsepower[1].value, 169.0);
    }

    #[test]
    fn test_unknown_id_fails_whole_request() {
        let err = build(&catalog(), &["corolla".to_string(), "edsel".to_string()]).unwrap_err();
        assert!(matches!(err, EngineError::VehicleNotFound(id) if id == "edsel"));
    }
}
