use crate::quality::annual_fuel_cost;
use carmatch_catalog::Vehicle;
use serde::{Deserialize, Serialize};

/// Default annual percentage rate for financing estimates
const DEFAULT_APR: f64 = 0.065;
const DEFAULT_TERM_MONTHS: u32 = 60;

/// Loan terms for an ownership-cost estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FinanceTerms {
    pub down_payment: u64,
    pub trade_in_value: u64,
    pub loan_term_months: u32,
    /// Annual percentage rate as a fraction (0.065 = 6.5%)
    pub apr: f64,
}

impl Default for FinanceTerms {
    fn default() -> Self {
        Self {
            down_payment: 0,
            trade_in_value: 0,
            loan_term_months: DEFAULT_TERM_MONTHS,
            apr: DEFAULT_APR,
        }
    }
}

/// Financing plus annual ownership costs for one vehicle
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CostEstimate {
    pub vehicle_id: String,
    pub vehicle_name: String,
    pub msrp: u64,
    pub financing: FinancingBreakdown,
    pub annual_costs: AnnualCosts,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FinancingBreakdown {
    pub down_payment: u64,
    pub trade_in_value: u64,
    pub loan_amount: f64,
    pub apr: f64,
    pub loan_term_months: u32,
    pub monthly_payment: f64,
    pub total_interest: f64,
    pub total_cost: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AnnualCosts {
    pub insurance: u32,
    pub maintenance: u32,
    pub fuel_estimate: f64,
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Standard amortization: `P * r * (1+r)^n / ((1+r)^n - 1)`
fn monthly_payment(loan_amount: f64, apr: f64, term_months: u32) -> f64 {
    if loan_amount <= 0.0 || term_months == 0 {
        return 0.0;
    }
    let n = f64::from(term_months);
    let monthly_rate = apr / 12.0;
    if monthly_rate == 0.0 {
        return loan_amount / n;
    }
    let growth = (1.0 + monthly_rate).powf(n);
    loan_amount * monthly_rate * growth / (growth - 1.0)
}

pub(crate) fn estimate(vehicle: &Vehicle, terms: FinanceTerms) -> CostEstimate {
    let price = vehicle.basic_info.msrp as f64;
    let loan_amount = (price - terms.trade_in_value as f64 - terms.down_payment as f64).max(0.0);
    let monthly = monthly_payment(loan_amount, terms.apr, terms.loan_term_months);
    let total_cost = monthly * f64::from(terms.loan_term_months) + terms.down_payment as f64;
    let total_interest = (total_cost - price + terms.trade_in_value as f64).max(0.0);

    CostEstimate {
        vehicle_id: vehicle.id.clone(),
        vehicle_name: vehicle.display_name(),
        msrp: vehicle.basic_info.msrp,
        financing: FinancingBreakdown {
            down_payment: terms.down_payment,
            trade_in_value: terms.trade_in_value,
            loan_amount: round_cents(loan_amount),
            apr: terms.apr,
            loan_term_months: terms.loan_term_months,
            monthly_payment: round_cents(monthly),
            total_interest: round_cents(total_interest),
            total_cost: round_cents(total_cost),
        },
        annual_costs: AnnualCosts {
            insurance: vehicle.costs.insurance_annual_estimate,
            maintenance: vehicle.costs.maintenance_annual_estimate,
            fuel_estimate: round_cents(f64::from(annual_fuel_cost(
                vehicle.specifications.mpg_combined,
            ))),
        },
    }
}
