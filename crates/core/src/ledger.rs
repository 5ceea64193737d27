//! Material ledger accounting.
//!
//! Purchases are an append-only log per project. Every figure here is
//! derived from that log and the project's current value; nothing is cached.

use serde::Serialize;

use crate::error::CoreError;
use crate::fields::{require_amount, require_text, MAX_SHORT_TEXT_LEN};

/// Burn rate (percent) above which a project is flagged as a warning.
pub const BURN_WARNING_THRESHOLD: f64 = 80.0;

/// Burn rate (percent) above which a project is over budget.
pub const BURN_OVER_BUDGET_THRESHOLD: f64 = 100.0;

/// Validate a purchase and compute its total cost.
///
/// Quantity and unit cost must be finite and non-negative
/// ([`CoreError::InvalidAmount`]); item and supplier must be non-empty.
/// The returned total is always `quantity * unit_cost`; a caller-supplied
/// total is never trusted.
pub fn price_purchase(
    item: &str,
    quantity: f64,
    unit_cost: f64,
    supplier: &str,
) -> Result<f64, CoreError> {
    require_amount("quantity", quantity)?;
    require_amount("unit_cost", unit_cost)?;
    require_text("item", item, MAX_SHORT_TEXT_LEN)?;
    require_text("supplier", supplier, MAX_SHORT_TEXT_LEN)?;

    let total = quantity * unit_cost;
    if !total.is_finite() {
        return Err(CoreError::InvalidAmount(format!(
            "total_cost overflows for quantity {quantity} x unit_cost {unit_cost}"
        )));
    }
    Ok(total)
}

/// Sum of purchase totals, in log order. Zero for an empty log.
///
/// Saturates at `f64::MAX` so the figure always serializes as a number.
pub fn spend<I>(totals: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    saturate(totals.into_iter().fold(0.0, |acc, t| acc + t))
}

/// Project value minus spend. Negative when over budget; never clamped.
pub fn remaining(project_value: f64, spend: f64) -> f64 {
    project_value - spend
}

/// Spend as a percentage of project value; zero when the value is not positive.
///
/// Saturates at `f64::MAX` when a tiny value meets a large spend.
pub fn burn_rate(project_value: f64, spend: f64) -> f64 {
    if project_value > 0.0 {
        saturate(spend / project_value * 100.0)
    } else {
        0.0
    }
}

fn saturate(x: f64) -> f64 {
    if x.is_finite() {
        x
    } else if x.is_nan() {
        0.0
    } else {
        x.signum() * f64::MAX
    }
}

/// Coarse budget state used by dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetHealth {
    OnTrack,
    Warning,
    OverBudget,
}

impl BudgetHealth {
    pub fn from_burn_rate(burn_rate: f64) -> Self {
        if burn_rate > BURN_OVER_BUDGET_THRESHOLD {
            BudgetHealth::OverBudget
        } else if burn_rate > BURN_WARNING_THRESHOLD {
            BudgetHealth::Warning
        } else {
            BudgetHealth::OnTrack
        }
    }
}

/// Budget figures for one project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetSummary {
    pub project_value: f64,
    pub spend: f64,
    pub remaining: f64,
    pub burn_rate: f64,
    pub health: BudgetHealth,
    pub purchase_count: usize,
}

impl BudgetSummary {
    /// Build a summary from the project value and its purchase totals.
    pub fn from_totals<I>(project_value: f64, totals: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut count = 0usize;
        let spend = spend(totals.into_iter().inspect(|_| count += 1));
        let burn = burn_rate(project_value, spend);
        Self {
            project_value,
            spend,
            remaining: remaining(project_value, spend),
            burn_rate: burn,
            health: BudgetHealth::from_burn_rate(burn),
            purchase_count: count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn total_is_quantity_times_unit_cost() {
        let total = price_purchase("wire", 100.0, 1.5, "City Electric").unwrap();
        assert_eq!(total, 100.0 * 1.5);

        let total = price_purchase("conduit", 3.3, 7.77, "Graybar").unwrap();
        assert_eq!(total, 3.3 * 7.77);
    }

    #[test]
    fn zero_quantity_is_allowed() {
        assert_eq!(price_purchase("breaker", 0.0, 45.0, "Graybar").unwrap(), 0.0);
    }

    #[test]
    fn negative_or_non_finite_amounts_rejected() {
        for (qty, cost) in [(-1.0, 1.0), (1.0, -1.0), (f64::NAN, 1.0), (1.0, f64::INFINITY)] {
            assert!(matches!(
                price_purchase("wire", qty, cost, "Graybar"),
                Err(CoreError::InvalidAmount(_))
            ));
        }
    }

    #[test]
    fn overflowing_total_rejected() {
        assert!(matches!(
            price_purchase("wire", f64::MAX, 10.0, "Graybar"),
            Err(CoreError::InvalidAmount(_))
        ));
    }

    #[test]
    fn blank_item_or_supplier_rejected() {
        assert!(matches!(
            price_purchase("", 1.0, 1.0, "Graybar"),
            Err(CoreError::InvalidInput(_))
        ));
        assert!(matches!(
            price_purchase("wire", 1.0, 1.0, " "),
            Err(CoreError::InvalidInput(_))
        ));
    }

    #[test]
    fn spend_of_empty_log_is_zero() {
        assert_eq!(spend(Vec::<f64>::new()), 0.0);
    }

    #[test]
    fn spend_sums_totals() {
        assert_eq!(spend([150.0, 25.5, 0.0]), 175.5);
    }

    #[test]
    fn remaining_can_go_negative() {
        assert_eq!(remaining(100.0, 250.0), -150.0);
    }

    #[test]
    fn burn_rate_zero_for_zero_value() {
        assert_eq!(burn_rate(0.0, 0.0), 0.0);
        assert_eq!(burn_rate(0.0, 5_000.0), 0.0);
    }

    #[test]
    fn burn_rate_stays_finite_for_tiny_value() {
        let rate = burn_rate(f64::MIN_POSITIVE, 1.0e300);
        assert!(rate.is_finite());
        assert_eq!(rate, f64::MAX);
        assert_eq!(BudgetHealth::from_burn_rate(rate), BudgetHealth::OverBudget);
    }

    #[test]
    fn spend_saturates_instead_of_overflowing() {
        assert_eq!(spend([f64::MAX, f64::MAX]), f64::MAX);
    }

    #[test]
    fn extreme_summary_serializes_as_numbers() {
        let summary = BudgetSummary::from_totals(f64::MIN_POSITIVE, [1.0e300, 1.0e300]);
        let json = serde_json::to_value(&summary).unwrap();
        assert!(json["burn_rate"].is_f64());
        assert!(json["spend"].is_f64());
        assert!(json["remaining"].is_f64());
    }

    #[test]
    fn health_thresholds() {
        assert_eq!(BudgetHealth::from_burn_rate(0.0), BudgetHealth::OnTrack);
        assert_eq!(BudgetHealth::from_burn_rate(80.0), BudgetHealth::OnTrack);
        assert_eq!(BudgetHealth::from_burn_rate(80.1), BudgetHealth::Warning);
        assert_eq!(BudgetHealth::from_burn_rate(100.0), BudgetHealth::Warning);
        assert_eq!(BudgetHealth::from_burn_rate(100.5), BudgetHealth::OverBudget);
    }

    #[test]
    fn wire_purchase_scenario() {
        let total = price_purchase("wire", 100.0, 1.5, "City Electric").unwrap();
        let summary = BudgetSummary::from_totals(10_000.0, [total]);
        assert_eq!(summary.spend, 150.0);
        assert_eq!(summary.remaining, 9_850.0);
        assert!((summary.burn_rate - 1.5).abs() < EPS);
        assert_eq!(summary.health, BudgetHealth::OnTrack);
        assert_eq!(summary.purchase_count, 1);

        // An approved 500 change order raises the value; spend is unchanged.
        let summary = BudgetSummary::from_totals(10_500.0, [total]);
        assert_eq!(summary.remaining, 10_350.0);
    }

    #[test]
    fn summary_of_empty_log() {
        let summary = BudgetSummary::from_totals(0.0, Vec::<f64>::new());
        assert_eq!(summary.spend, 0.0);
        assert_eq!(summary.remaining, 0.0);
        assert_eq!(summary.burn_rate, 0.0);
        assert_eq!(summary.purchase_count, 0);
    }

    #[test]
    fn over_budget_summary() {
        let summary = BudgetSummary::from_totals(1_000.0, [600.0, 700.0]);
        assert_eq!(summary.remaining, -300.0);
        assert_eq!(summary.health, BudgetHealth::OverBudget);
    }
}
