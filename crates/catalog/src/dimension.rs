use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Number of lifestyle dimensions
pub const DIMENSION_COUNT: usize = 10;

/// One of the ten lifestyle axes shared by user profiles and vehicle scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum Dimension {
    FamilyFriendly,
    Adventure,
    EcoConscious,
    Luxury,
    Performance,
    BudgetConscious,
    CityDriving,
    Commuter,
    TechEnthusiast,
    SafetyFocused,
}

impl Dimension {
    /// All dimensions, in wire order
    pub const ALL: [Self; DIMENSION_COUNT] = [
        Self::FamilyFriendly,
        Self::Adventure,
        Self::EcoConscious,
        Self::Luxury,
        Self::Performance,
        Self::BudgetConscious,
        Self::CityDriving,
        Self::Commuter,
        Self::TechEnthusiast,
        Self::SafetyFocused,
    ];

    /// Stable snake_case wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FamilyFriendly => "family_friendly",
            Self::Adventure => "adventure",
            Self::EcoConscious => "eco_conscious",
            Self::Luxury => "luxury",
            Self::Performance => "performance",
            Self::BudgetConscious => "budget_conscious",
            Self::CityDriving => "city_driving",
            Self::Commuter => "commuter",
            Self::TechEnthusiast => "tech_enthusiast",
            Self::SafetyFocused => "safety_focused",
        }
    }

    /// Human-readable label used in match reasons and summaries
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FamilyFriendly => "Family Friendly",
            Self::Adventure => "Adventure",
            Self::EcoConscious => "Eco Conscious",
            Self::Luxury => "Luxury",
            Self::Performance => "Performance",
            Self::BudgetConscious => "Budget Conscious",
            Self::CityDriving => "City Driving",
            Self::Commuter => "Commuter",
            Self::TechEnthusiast => "Tech Enthusiast",
            Self::SafetyFocused => "Safety Focused",
        }
    }

    /// Position in [`Dimension::ALL`] and in a [`DimensionVector`]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Parse a wire name back to a dimension
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|d| d.as_str() == name)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dense vector over the ten lifestyle dimensions.
///
/// Serializes as a JSON map keyed by dimension name with every key present.
/// On input, missing keys default to 0.0 (sparse per-option deltas) and
/// unknown keys are rejected, so a typo in a catalog file fails at load time
/// instead of silently contributing nothing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DimensionVector([f32; DIMENSION_COUNT]);

impl DimensionVector {
    /// Zero vector
    #[must_use]
    pub const fn new() -> Self {
        Self([0.0; DIMENSION_COUNT])
    }

    /// Vector with the same value on every dimension
    #[must_use]
    pub const fn uniform(value: f32) -> Self {
        Self([value; DIMENSION_COUNT])
    }

    #[must_use]
    pub const fn get(&self, dimension: Dimension) -> f32 {
        self.0[dimension.index()]
    }

    pub fn set(&mut self, dimension: Dimension, value: f32) {
        self.0[dimension.index()] = value;
    }

    /// Iterate dimensions with their values, in wire order
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f32)> + '_ {
        Dimension::ALL.iter().map(move |&d| (d, self.0[d.index()]))
    }

    /// Raw values, indexed by [`Dimension::index`]
    #[must_use]
    pub const fn values(&self) -> &[f32; DIMENSION_COUNT] {
        &self.0
    }

    /// Dimensions sorted by value, highest first; equal values keep wire order
    #[must_use]
    pub fn ranked(&self) -> [Dimension; DIMENSION_COUNT] {
        let mut dims = Dimension::ALL;
        dims.sort_by(|a, b| {
            self.get(*b)
                .partial_cmp(&self.get(*a))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        dims
    }
}

impl From<[f32; DIMENSION_COUNT]> for DimensionVector {
    fn from(values: [f32; DIMENSION_COUNT]) -> Self {
        Self(values)
    }
}

impl Index<Dimension> for DimensionVector {
    type Output = f32;

    fn index(&self, dimension: Dimension) -> &f32 {
        &self.0[dimension.index()]
    }
}

impl IndexMut<Dimension> for DimensionVector {
    fn index_mut(&mut self, dimension: Dimension) -> &mut f32 {
        &mut self.0[dimension.index()]
    }
}

impl Serialize for DimensionVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(DIMENSION_COUNT))?;
        for (dimension, value) in self.iter() {
            map.serialize_entry(dimension.as_str(), &value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for DimensionVector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct VectorVisitor;

        impl<'de> Visitor<'de> for VectorVisitor {
            type Value = DimensionVector;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map from lifestyle dimension name to number")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut vector = DimensionVector::new();
                while let Some((key, value)) = access.next_entry::<String, f32>()? {
                    let Some(dimension) = Dimension::parse(&key) else {
                        return Err(serde::de::Error::custom(format!(
                            "unknown lifestyle dimension '{key}'"
                        )));
                    };
                    vector.set(dimension, value);
                }
                Ok(vector)
            }
        }

        deserializer.deserialize_map(VectorVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wire_names_round_trip() {
        for dimension in Dimension::ALL {
            assert_eq!(Dimension::parse(dimension.as_str()), Some(dimension));
        }
        assert_eq!(Dimension::parse("offroad"), None);
    }

    #[test]
    fn test_index_matches_all_order() {
        for (position, dimension) in Dimension::ALL.iter().enumerate() {
            assert_eq!(dimension.index(), position);
        }
    }

    #[test]
    fn test_serialize_emits_every_dimension() {
        let mut vector = DimensionVector::uniform(5.0);
        vector.set(Dimension::EcoConscious, 8.0);

        let json = serde_json::to_value(vector).unwrap();
        let map = json.as_object().unwrap();
        assert_eq!(map.len(), DIMENSION_COUNT);
        assert_eq!(map["eco_conscious"], 8.0);
        assert_eq!(map["luxury"], 5.0);
    }

    #[test]
    fn test_deserialize_sparse_map_defaults_to_zero() {
        let vector: DimensionVector =
            serde_json::from_str(r#"{"commuter": 4, "eco_conscious": 2}"#).unwrap();
        assert_eq!(vector.get(Dimension::Commuter), 4.0);
        assert_eq!(vector.get(Dimension::EcoConscious), 2.0);
        assert_eq!(vector.get(Dimension::Luxury), 0.0);
    }

    #[test]
    fn test_deserialize_rejects_unknown_dimension() {
        let result: Result<DimensionVector, _> =
            serde_json::from_str(r#"{"towing_capacity": 9}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_ranked_orders_by_value() {
        let mut vector = DimensionVector::uniform(5.0);
        vector.set(Dimension::Performance, 9.0);
        vector.set(Dimension::Luxury, 7.0);

        let ranked = vector.ranked();
        assert_eq!(ranked[0], Dimension::Performance);
        assert_eq!(ranked[1], Dimension::Luxury);
    }
}
