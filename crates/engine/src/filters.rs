use carmatch_catalog::Vehicle;
use serde::{Deserialize, Serialize};

/// Structured constraints supplied by the chat collaborator.
///
/// These arrive already parsed and validated; the engine never inspects free
/// text. A vehicle failing any populated hint is excluded before scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterHints {
    /// Required body type, matched case-insensitively
    pub body_type: Option<String>,

    /// Body types to exclude, matched case-insensitively
    pub exclude_body_types: Vec<String>,

    /// Required powertrain kind, matched against the engine description
    pub fuel: Option<FuelRequirement>,

    /// Required drivetrain, e.g. "AWD", matched as a case-insensitive
    /// substring of the vehicle's drivetrain
    pub drivetrain: Option<String>,

    pub min_mpg: Option<f32>,
    pub min_horsepower: Option<u32>,
    pub min_seating: Option<u8>,

    /// Hard price cap, unlike the soft budget affinity
    pub max_price: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuelRequirement {
    Hybrid,
    Electric,
}

impl FuelRequirement {
    fn matches_engine(self, engine: &str) -> bool {
        let engine = engine.to_ascii_lowercase();
        match self {
            Self::Hybrid => engine.contains("hybrid"),
            Self::Electric => {
                engine.contains("electric") || engine.split_whitespace().any(|word| word == "ev")
            }
        }
    }
}

impl FilterHints {
    /// True when no hint is populated
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Does the vehicle satisfy every populated hint?
    #[must_use]
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        let info = &vehicle.basic_info;
        let specs = &vehicle.specifications;

        if let Some(required) = &self.body_type {
            if !info.body_type.eq_ignore_ascii_case(required) {
                return false;
            }
        }
        if self
            .exclude_body_types
            .iter()
            .any(|excluded| info.body_type.eq_ignore_ascii_case(excluded))
        {
            return false;
        }
        if let Some(fuel) = self.fuel {
            if !fuel.matches_engine(&specs.engine) {
                return false;
            }
        }
        if let Some(required) = &self.drivetrain {
            let Some(drivetrain) = &specs.drivetrain else {
                return false;
            };
            if !drivetrain
                .to_ascii_lowercase()
                .contains(&required.to_ascii_lowercase())
            {
                return false;
            }
        }
        if let Some(min) = self.min_mpg {
            if specs.mpg_combined < min {
                return false;
            }
        }
        if let Some(min) = self.min_horsepower {
            if specs.horsepower < min {
                return false;
            }
        }
        if let Some(min) = self.min_seating {
            if specs.seating_capacity < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if info.msrp > max {
                return false;
            }
        }

        true
    }
}
