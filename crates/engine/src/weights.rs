use crate::error::{EngineError, Result};
use crate::result::ScoreBreakdown;
use serde::{Deserialize, Serialize};

const WEIGHT_SUM_TOLERANCE: f32 = 1e-3;

/// Relative weight of each sub-score in the composite match score.
///
/// The same weight set applies to every vehicle within one ranking call, so
/// match scores are comparable across the result list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoreWeights {
    pub lifestyle: f32,
    pub budget: f32,
    pub feature: f32,
    pub value: f32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            lifestyle: 0.40,
            budget: 0.30,
            feature: 0.20,
            value: 0.10,
        }
    }
}

impl ScoreWeights {
    /// Weights must be non-negative and sum to 1
    pub fn validate(&self) -> Result<()> {
        let parts = [
            ("lifestyle", self.lifestyle),
            ("budget", self.budget),
            ("feature", self.feature),
            ("value", self.value),
        ];
        for (name, weight) in parts {
            if !weight.is_finite() || weight < 0.0 {
                return Err(EngineError::InvalidWeights(format!(
                    "{name} weight must be a non-negative number, got {weight}"
                )));
            }
        }
        let sum: f32 = parts.iter().map(|(_, w)| w).sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(EngineError::InvalidWeights(format!(
                "weights must sum to 1, got {sum}"
            )));
        }
        Ok(())
    }

    /// Parse and validate a TOML weight table
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let weights: Self = toml::from_str(text)?;
        weights.validate()?;
        Ok(weights)
    }

    /// Composite match score for one vehicle's sub-scores
    #[must_use]
    pub(crate) fn combine(&self, breakdown: &ScoreBreakdown) -> f32 {
        breakdown.lifestyle_match * self.lifestyle
            + breakdown.budget_fit * self.budget
            + breakdown.feature_quality * self.feature
            + breakdown.value_score * self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_weights_validate() {
        ScoreWeights::default().validate().unwrap();
    }

    #[test]
    fn test_rejects_bad_sum() {
        let weights = ScoreWeights {
            lifestyle: 0.5,
            budget: 0.5,
            feature: 0.5,
            value: 0.5,
        };
        assert!(matches!(
            weights.validate(),
            Err(EngineError::InvalidWeights(_))
        ));
    }

    #[test]
    fn test_rejects_negative_weight() {
        let weights = ScoreWeights {
            lifestyle: 1.2,
            budget: -0.2,
            feature: 0.0,
            value: 0.0,
        };
        assert!(weights.validate().is_err());
    }

    #[test]
    fn test_from_toml_fills_missing_fields_from_defaults() {
        let weights = ScoreWeights::from_toml_str("lifestyle = 0.4\nbudget = 0.3\nfeature = 0.2\nvalue = 0.1\n")
            .unwrap();
        assert_eq!(weights, ScoreWeights::default());

        // Partial tables keep the documented defaults for the rest.
        let weights = ScoreWeights::from_toml_str("").unwrap();
        assert_eq!(weights, ScoreWeights::default());
    }

    #[test]
    fn test_from_toml_rejects_unknown_keys() {
        assert!(ScoreWeights::from_toml_str("sportiness = 1.0").is_err());
    }

    #[test]
    fn test_combine_is_weighted_sum() {
        let breakdown = ScoreBreakdown {
            lifestyle_match: 100.0,
            budget_fit: 50.0,
            feature_quality: 0.0,
            value_score: 0.0,
        };
        let combined = ScoreWeights::default().combine(&breakdown);
        assert!((combined - 55.0).abs() < 1e-4);
    }
}
