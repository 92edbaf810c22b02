use crate::budget::budget_fit;
use crate::compare::{self, Comparison};
use crate::error::{EngineError, Result};
use crate::filters::FilterHints;
use crate::finance::{self, CostEstimate, FinanceTerms};
use crate::quality::{value_score, FeatureNorms};
use crate::reasons::match_reasons;
use crate::result::{round2, MatchResult, ScoreBreakdown};
use crate::similarity::lifestyle_match;
use crate::weights::ScoreWeights;
use carmatch_catalog::{DimensionVector, Vehicle, VehicleCatalog};
use std::cmp::Ordering;
use std::sync::Arc;

/// Scores and ranks the vehicle catalog against lifestyle profiles.
///
/// The engine holds the shared read-only catalog, the weight configuration,
/// and the precomputed catalog feature norms. [`MatchEngine::rank`] performs
/// no mutation and allocates a fresh result list per call.
pub struct MatchEngine {
    catalog: Arc<VehicleCatalog>,
    weights: ScoreWeights,
    norms: FeatureNorms,
}

impl MatchEngine {
    /// Engine with the default weight set
    pub fn new(catalog: Arc<VehicleCatalog>) -> Result<Self> {
        Self::with_weights(catalog, ScoreWeights::default())
    }

    /// Engine with a custom, validated weight set
    pub fn with_weights(catalog: Arc<VehicleCatalog>, weights: ScoreWeights) -> Result<Self> {
        weights.validate()?;
        let norms = FeatureNorms::from_catalog(&catalog);
        Ok(Self {
            catalog,
            weights,
            norms,
        })
    }

    #[must_use]
    pub fn catalog(&self) -> &VehicleCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn weights(&self) -> ScoreWeights {
        self.weights
    }

    /// Look up a vehicle, failing with [`EngineError::VehicleNotFound`]
    pub fn vehicle(&self, id: &str) -> Result<&Vehicle> {
        self.catalog
            .get(id)
            .ok_or_else(|| EngineError::VehicleNotFound(id.to_string()))
    }

    /// Score every catalog vehicle against the profile and return the full
    /// ranking, highest match first.
    ///
    /// Ties break by ascending MSRP, then catalog insertion order, so
    /// repeated calls with identical inputs return byte-identical order.
    /// Filter hints excluding every vehicle yields an empty list, not an
    /// error; an empty catalog is an error.
    pub fn rank(
        &self,
        profile: &DimensionVector,
        budget: Option<u64>,
        hints: Option<&FilterHints>,
    ) -> Result<Vec<MatchResult>> {
        if self.catalog.is_empty() {
            return Err(EngineError::EmptyCatalog);
        }

        let mut scored: Vec<(usize, MatchResult)> = Vec::with_capacity(self.catalog.len());
        for (idx, vehicle) in self.catalog.iter().enumerate() {
            if let Some(hints) = hints {
                if !hints.matches(vehicle) {
                    continue;
                }
            }

            let breakdown = ScoreBreakdown {
                lifestyle_match: round2(lifestyle_match(profile, &vehicle.lifestyle_scores)),
                budget_fit: round2(budget_fit(vehicle.basic_info.msrp, budget)),
                feature_quality: round2(self.norms.feature_quality(&vehicle.features)),
                value_score: round2(value_score(vehicle)),
            };
            let match_score = round2(self.weights.combine(&breakdown));
            let match_reasons = match_reasons(vehicle, profile, &breakdown, budget.is_some());

            scored.push((
                idx,
                MatchResult {
                    vehicle: vehicle.clone(),
                    match_score,
                    score_breakdown: breakdown,
                    match_reasons,
                },
            ));
        }

        scored.sort_by(|(idx_a, a), (idx_b, b)| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.vehicle.basic_info.msrp.cmp(&b.vehicle.basic_info.msrp))
                .then_with(|| idx_a.cmp(idx_b))
        });

        log::debug!(
            "Ranked {} of {} vehicles (budget: {:?})",
            scored.len(),
            self.catalog.len(),
            budget
        );
        Ok(scored.into_iter().map(|(_, result)| result).collect())
    }

    /// Ranking truncated to the top `limit` results
    pub fn rank_top(
        &self,
        profile: &DimensionVector,
        budget: Option<u64>,
        hints: Option<&FilterHints>,
        limit: usize,
    ) -> Result<Vec<MatchResult>> {
        let mut results = self.rank(profile, budget, hints)?;
        results.truncate(limit);
        Ok(results)
    }

    /// Side-by-side comparison; any unknown id fails the whole request
    pub fn compare(&self, ids: &[String]) -> Result<Comparison> {
        compare::build(&self.catalog, ids)
    }

    /// Financing and annual ownership costs for one vehicle
    pub fn estimate(&self, id: &str, terms: FinanceTerms) -> Result<CostEstimate> {
        Ok(finance::estimate(self.vehicle(id)?, terms))
    }
}
