/// Sub-score when the session has no budget. Identical for every vehicle, so
/// ranking is driven entirely by the other sub-scores.
pub(crate) const NEUTRAL_BUDGET_FIT: f32 = 85.0;

/// Score at the edge of the tolerable over-budget band
const OVER_BUDGET_FLOOR: f32 = 25.0;

/// Price ratio where the decay reaches the floor (20% over budget)
const FLOOR_RATIO: f32 = 1.2;

/// Price ratio where the score bottoms out at zero (40% over budget)
const ZERO_RATIO: f32 = 1.4;

/// Budget affinity, 0-100. At or under budget scores 100; over budget the
/// score decays linearly to [`OVER_BUDGET_FLOOR`] at 20% over, then on toward
/// zero. No cliff: a vehicle slightly over budget stays competitive.
pub(crate) fn budget_fit(msrp: u64, budget: Option<u64>) -> f32 {
    let Some(budget) = budget.filter(|&b| b > 0) else {
        return NEUTRAL_BUDGET_FIT;
    };

    let ratio = msrp as f32 / budget as f32;
    if ratio <= 1.0 {
        100.0
    } else if ratio <= FLOOR_RATIO {
        100.0 - (ratio - 1.0) * (100.0 - OVER_BUDGET_FLOOR) / (FLOOR_RATIO - 1.0)
    } else {
        let past_floor = (ratio - FLOOR_RATIO) * OVER_BUDGET_FLOOR / (ZERO_RATIO - FLOOR_RATIO);
        (OVER_BUDGET_FLOOR - past_floor).max(0.0)
    }
}
