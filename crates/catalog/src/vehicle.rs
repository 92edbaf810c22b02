use crate::dimension::DimensionVector;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A catalog vehicle. Immutable for the lifetime of the process once the
/// catalog is loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vehicle {
    /// Unique catalog id
    pub id: String,

    pub basic_info: BasicInfo,

    pub specifications: Specifications,

    /// How well the vehicle fits each lifestyle dimension, fixed at load time
    pub lifestyle_scores: DimensionVector,

    pub features: FeatureSet,

    pub costs: OwnershipCosts,

    /// Selling points, strongest first
    #[serde(default)]
    pub pros: Vec<String>,

    /// Known drawbacks, most significant first
    #[serde(default)]
    pub cons: Vec<String>,
}

impl Vehicle {
    /// "Make Model" name used in comparisons and summaries
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.basic_info.make, self.basic_info.model)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BasicInfo {
    pub make: String,
    pub model: String,
    pub year: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trim: Option<String>,
    pub body_type: String,
    /// MSRP in whole currency units
    pub msrp: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Specifications {
    pub engine: String,
    pub horsepower: u32,
    /// Combined city/highway fuel economy (MPG)
    pub mpg_combined: f32,
    pub seating_capacity: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drivetrain: Option<String>,
    /// Open-ended extra fields (cargo space, towing, range, ...) carried
    /// through untouched
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Feature lists in the four fixed categories
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FeatureSet {
    #[serde(default)]
    pub safety: Vec<String>,
    #[serde(default)]
    pub technology: Vec<String>,
    #[serde(default)]
    pub comfort: Vec<String>,
    #[serde(default)]
    pub entertainment: Vec<String>,
}

impl FeatureSet {
    pub const CATEGORY_COUNT: usize = 4;

    /// Per-category counts, in safety/technology/comfort/entertainment order
    #[must_use]
    pub fn category_counts(&self) -> [usize; Self::CATEGORY_COUNT] {
        [
            self.safety.len(),
            self.technology.len(),
            self.comfort.len(),
            self.entertainment.len(),
        ]
    }

    /// Total number of listed features across all categories
    #[must_use]
    pub fn total(&self) -> usize {
        self.category_counts().iter().sum()
    }

    /// Number of categories with at least one feature
    #[must_use]
    pub fn breadth(&self) -> usize {
        self.category_counts().iter().filter(|&&n| n > 0).count()
    }
}

/// Estimated annual ownership costs in whole currency units
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OwnershipCosts {
    pub insurance_annual_estimate: u32,
    pub maintenance_annual_estimate: u32,
}
