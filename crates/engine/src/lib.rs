//! # CarMatch Engine
//!
//! Scores every catalog vehicle against a lifestyle profile, an optional
//! budget, and optional structured filter hints, producing a ranked and
//! explained result list.
//!
//! Four sub-scores (lifestyle match, budget fit, feature quality, value) are
//! computed independently in `[0, 100]` and combined with a fixed,
//! configurable weight set ([`ScoreWeights`]). The engine never mutates the
//! catalog or the profile; every ranking call produces a fresh result list,
//! so independent sessions can score concurrently without coordination.

mod budget;
mod compare;
mod engine;
mod error;
mod filters;
mod finance;
mod quality;
mod reasons;
mod result;
mod similarity;
mod weights;

pub use compare::{Comparison, ComparisonEntry, ComparisonMetrics, MetricPoint};
pub use engine::MatchEngine;
pub use error::{EngineError, Result};
pub use filters::{FilterHints, FuelRequirement};
pub use finance::{AnnualCosts, CostEstimate, FinanceTerms, FinancingBreakdown};
pub use result::{MatchResult, ScoreBreakdown};
pub use weights::ScoreWeights;
