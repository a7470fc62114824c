//! Scenario calculator
//!
//! Maps a baseline plus a lever adjustment to the derived metrics shown on the
//! dashboard. The calculation is pure: the same inputs always give the same
//! result and nothing is cached between calls.

use serde::Serialize;

use crate::models::{BaselineFinancials, ScenarioAdjustment};
use crate::utils::{format_currency, group_thousands, round_half_up, sign_prefix};

/// Monthly cost of one additional employee
pub const EMPLOYEE_COST: f64 = 8000.0;

/// Months of new hiring cost committed against the budget
pub const PROJECTION_MONTHS: f64 = 6.0;

/// Narrative used when no lever is moved
pub const CURRENT_STATE_IMPACT: &str = "Current state - maintaining runway and budget allocation";

/// Months of runway under a scenario
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Runway {
    Months(f64),
    /// Scenario burn is zero or negative, so the budget is never exhausted
    Unbounded,
}

impl Runway {
    fn from_budget_and_burn(budget: f64, monthly_burn: f64) -> Self {
        if monthly_burn > 0.0 {
            Runway::Months(budget / monthly_burn)
        } else {
            Runway::Unbounded
        }
    }

    /// Fractional months, or `None` when unbounded
    pub fn months(&self) -> Option<f64> {
        match self {
            Runway::Months(m) => Some(*m),
            Runway::Unbounded => None,
        }
    }

    /// Strictly shorter than the given number of months
    pub fn is_shorter_than(&self, months: f64) -> bool {
        matches!(self, Runway::Months(m) if *m < months)
    }

    /// Strictly longer than the given number of months
    pub fn is_longer_than(&self, months: f64) -> bool {
        match self {
            Runway::Months(m) => *m > months,
            Runway::Unbounded => true,
        }
    }

    /// Whole months for display, e.g. `"9 months"`
    pub fn display_months(&self) -> String {
        match self {
            Runway::Months(m) => format!("{} months", round_half_up(*m)),
            Runway::Unbounded => "unlimited".to_string(),
        }
    }
}

/// Metrics derived from one (baseline, adjustment) pair
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResult {
    pub runway: Runway,
    /// Baseline budget, carried for display
    pub budget: f64,
    /// Net monthly cash flow under the scenario
    pub profit_loss: f64,
    pub impact: String,
    /// Budget remaining after six months of new spend
    pub budget_left: f64,
    pub new_monthly_burn: f64,
    pub new_revenue: f64,
}

/// Compute the scenario result for a baseline and a set of lever values
pub fn compute(baseline: &BaselineFinancials, adjustment: ScenarioAdjustment) -> ScenarioResult {
    let additional_employees = f64::from(adjustment.additional_employees());
    let marketing_adjustment = adjustment.marketing_adjustment() as f64;
    let price_adjustment = adjustment.price_adjustment() as f64;

    let new_employee_cost = additional_employees * EMPLOYEE_COST;
    let new_marketing_spend = baseline.marketing_spend + marketing_adjustment;

    let price_multiplier = 1.0 + price_adjustment / 100.0;
    let new_revenue = baseline.revenue * price_multiplier;

    let new_monthly_burn = baseline.monthly_burn + new_employee_cost + marketing_adjustment;
    let profit_loss = new_revenue - new_monthly_burn;
    let runway = Runway::from_budget_and_burn(baseline.current_budget, new_monthly_burn);

    let budget_left = baseline.current_budget
        - (new_marketing_spend + additional_employees * EMPLOYEE_COST * PROJECTION_MONTHS);

    let impact = describe_impact(baseline, adjustment, runway, budget_left, new_revenue);

    ScenarioResult {
        runway,
        budget: baseline.current_budget,
        profit_loss,
        impact,
        budget_left,
        new_monthly_burn,
        new_revenue,
    }
}

/// Build the narrative: one sentence per moved lever, in hiring, marketing,
/// price order.
fn describe_impact(
    baseline: &BaselineFinancials,
    adjustment: ScenarioAdjustment,
    runway: Runway,
    budget_left: f64,
    new_revenue: f64,
) -> String {
    let mut impact = String::new();

    let hires = adjustment.additional_employees();
    if hires > 0 {
        match runway {
            Runway::Months(months) => {
                // Equal runway reads as "increases"
                let direction = if runway.is_shorter_than(baseline.current_runway) {
                    "reduces"
                } else {
                    "increases"
                };
                impact.push_str(&format!(
                    "With {} more engineers, runway {} to {} months. ",
                    hires,
                    direction,
                    round_half_up(months)
                ));
            }
            Runway::Unbounded => {
                impact.push_str(&format!(
                    "With {} more engineers, runway becomes unbounded. ",
                    hires
                ));
            }
        }
    }

    let marketing = adjustment.marketing_adjustment();
    if marketing != 0 {
        let marketing = marketing as f64;
        impact.push_str(&format!(
            "With {}{} marketing, you have {} left for other expenses. ",
            sign_prefix(marketing),
            format_currency(marketing),
            format_currency(budget_left)
        ));
    }

    let price = adjustment.price_adjustment();
    if price != 0 {
        impact.push_str(&format!(
            "{}{}% price change affects monthly revenue by {}.",
            sign_prefix(price as f64),
            price,
            format_currency(new_revenue - baseline.revenue)
        ));
    }

    if impact.is_empty() {
        impact.push_str(CURRENT_STATE_IMPACT);
    }

    impact
}

/// Format a signed monthly amount with an explicit `+` for gains, e.g. `+₹5,000`
pub fn format_profit_loss(profit_loss: f64) -> String {
    let sign = if profit_loss >= 0.0 { "+" } else { "" };
    format!("{}{}", sign, format_currency(profit_loss))
}

/// Runway to two decimals, for the text report
pub fn format_runway_precise(runway: Runway) -> String {
    match runway {
        Runway::Months(m) => format!("{} months", group_thousands((m * 100.0).round() / 100.0)),
        Runway::Unbounded => "unlimited".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn baseline() -> BaselineFinancials {
        BaselineFinancials::default()
    }

    #[test]
    fn test_zero_adjustment_keeps_baseline() {
        let b = baseline();
        let result = compute(&b, ScenarioAdjustment::default());

        assert_eq!(result.profit_loss, b.revenue - b.monthly_burn);
        assert_eq!(result.runway, Runway::Months(b.current_budget / b.monthly_burn));
        assert_eq!(result.budget_left, b.current_budget - b.marketing_spend);
        assert_eq!(result.budget, b.current_budget);
        assert_eq!(result.impact, CURRENT_STATE_IMPACT);
    }

    #[test]
    fn test_two_hires_scenario() {
        let result = compute(&baseline(), ScenarioAdjustment::new(2, 0, 0));

        assert_eq!(result.new_monthly_burn, 58_000.0);
        assert_relative_eq!(result.runway.months().unwrap(), 8.62, epsilon = 0.01);
        assert_eq!(result.budget_left, 389_000.0);
        assert_eq!(result.profit_loss, -33_000.0);
        assert_eq!(
            result.impact,
            "With 2 more engineers, runway reduces to 9 months. "
        );
    }

    #[test]
    fn test_marketing_scenario() {
        let result = compute(&baseline(), ScenarioAdjustment::new(0, 10_000, 0));

        assert_eq!(result.new_monthly_burn, 52_000.0);
        assert_eq!(result.budget_left, 475_000.0);
        assert!(result.impact.contains("+₹10,000"));
        assert!(result.impact.contains("₹475,000"));
        assert_eq!(
            result.impact,
            "With +₹10,000 marketing, you have ₹475,000 left for other expenses. "
        );
    }

    #[test]
    fn test_negative_marketing_has_no_plus_sign() {
        let result = compute(&baseline(), ScenarioAdjustment::new(0, -5_000, 0));

        assert_eq!(result.budget_left, 490_000.0);
        assert_eq!(
            result.impact,
            "With ₹-5,000 marketing, you have ₹490,000 left for other expenses. "
        );
    }

    #[test]
    fn test_price_scenario() {
        let result = compute(&baseline(), ScenarioAdjustment::new(0, 0, 20));

        assert_relative_eq!(result.new_revenue, 30_000.0, epsilon = 1e-6);
        assert_relative_eq!(result.profit_loss, -12_000.0, epsilon = 1e-6);
        assert!(result.impact.starts_with("+20% price change"));
        assert!(result.impact.contains("₹5,000"));
    }

    #[test]
    fn test_negative_price_scenario() {
        let result = compute(&baseline(), ScenarioAdjustment::new(0, 0, -10));

        assert_eq!(
            result.impact,
            "-10% price change affects monthly revenue by ₹-2,500."
        );
    }

    #[test]
    fn test_all_levers_in_fixed_order() {
        let result = compute(&baseline(), ScenarioAdjustment::new(1, 2_000, 5));

        let hiring = result.impact.find("more engineers").unwrap();
        let marketing = result.impact.find("marketing, you have").unwrap();
        let price = result.impact.find("price change").unwrap();
        assert!(hiring < marketing && marketing < price);
    }

    #[test]
    fn test_equal_runway_reads_as_increase() {
        // 480000 / (40000 + 8000) == 10 exactly
        let b = BaselineFinancials {
            current_runway: 10.0,
            current_budget: 480_000.0,
            monthly_burn: 40_000.0,
            ..baseline()
        };
        let result = compute(&b, ScenarioAdjustment::new(1, 0, 0));

        assert_eq!(result.runway, Runway::Months(10.0));
        assert!(result.impact.contains("runway increases to 10 months"));
    }

    #[test]
    fn test_zero_burn_is_unbounded() {
        let b = BaselineFinancials {
            monthly_burn: 7_000.0,
            ..baseline()
        };
        // 7000 + 8000 - 15000 == 0
        let result = compute(&b, ScenarioAdjustment::new(1, -15_000, 0));

        assert_eq!(result.new_monthly_burn, 0.0);
        assert_eq!(result.runway, Runway::Unbounded);
        assert!(result.impact.starts_with("With 1 more engineers, runway becomes unbounded. "));
    }

    #[test]
    fn test_negative_burn_is_unbounded() {
        let b = BaselineFinancials {
            monthly_burn: 5_000.0,
            ..baseline()
        };
        let result = compute(&b, ScenarioAdjustment::new(0, -15_000, 0));

        assert_eq!(result.new_monthly_burn, -10_000.0);
        assert_eq!(result.runway, Runway::Unbounded);
        assert_eq!(result.runway.months(), None);

        let json = serde_json::to_value(&result).unwrap();
        assert!(json["runway"].is_null());
    }

    #[test]
    fn test_negative_burn_with_hires_never_reduces() {
        let b = BaselineFinancials {
            monthly_burn: 5_000.0,
            ..baseline()
        };
        // 5000 + 8000 - 15000 == -2000
        let result = compute(&b, ScenarioAdjustment::new(1, -15_000, 0));

        assert_eq!(result.new_monthly_burn, -2_000.0);
        assert_eq!(result.runway, Runway::Unbounded);
        assert!(result.impact.contains("runway becomes unbounded"));
        assert!(!result.impact.contains("reduces"));
    }

    #[test]
    fn test_runway_ordering_helpers() {
        assert!(Runway::Months(9.0).is_longer_than(8.0));
        assert!(!Runway::Months(8.0).is_longer_than(8.0));
        assert!(Runway::Unbounded.is_longer_than(1_000.0));
        assert!(Runway::Months(7.5).is_shorter_than(8.0));
        assert!(!Runway::Unbounded.is_shorter_than(1_000.0));
    }

    #[test]
    fn test_runway_serializes_unbounded_as_null() {
        let json = serde_json::to_value(Runway::Unbounded).unwrap();
        assert!(json.is_null());
        let json = serde_json::to_value(Runway::Months(8.5)).unwrap();
        assert_eq!(json, serde_json::json!(8.5));
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = compute(&baseline(), ScenarioAdjustment::default());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["budgetLeft"], serde_json::json!(485_000.0));
        assert_eq!(json["profitLoss"], serde_json::json!(-17_000.0));
    }

    #[test]
    fn test_runway_display() {
        assert_eq!(Runway::Months(8.62).display_months(), "9 months");
        assert_eq!(Runway::Unbounded.display_months(), "unlimited");
        assert_eq!(format_runway_precise(Runway::Months(8.6206)), "8.62 months");
    }

    #[test]
    fn test_format_profit_loss() {
        assert_eq!(format_profit_loss(-33_000.0), "₹-33,000");
        assert_eq!(format_profit_loss(0.0), "+₹0");
        assert_eq!(format_profit_loss(1_500.0), "+₹1,500");
    }

    fn adjustment_strategy() -> impl Strategy<Value = (i64, i64, i64)> {
        (0i64..=10, -15_000i64..=50_000, -50i64..=100)
    }

    proptest! {
        #[test]
        fn prop_compute_is_idempotent((h, m, p) in adjustment_strategy()) {
            let adj = ScenarioAdjustment::new(h, m, p);
            let b = baseline();
            prop_assert_eq!(compute(&b, adj), compute(&b, adj));
        }

        #[test]
        fn prop_more_hires_cost_more((h, m, p) in (0i64..10, -15_000i64..=50_000, -50i64..=100)) {
            let b = baseline();
            let fewer = compute(&b, ScenarioAdjustment::new(h, m, p));
            let more = compute(&b, ScenarioAdjustment::new(h + 1, m, p));

            prop_assert!(more.budget_left < fewer.budget_left);
            prop_assert_eq!(fewer.budget_left - more.budget_left, EMPLOYEE_COST * PROJECTION_MONTHS);
            prop_assert!(more.new_monthly_burn > fewer.new_monthly_burn);
        }

        #[test]
        fn prop_higher_price_raises_profit((h, m, p) in (0i64..=10, -15_000i64..=50_000, -50i64..100)) {
            let b = baseline();
            let low = compute(&b, ScenarioAdjustment::new(h, m, p));
            let high = compute(&b, ScenarioAdjustment::new(h, m, p + 1));

            prop_assert!(high.new_revenue > low.new_revenue);
            prop_assert!(high.profit_loss > low.profit_loss);
        }

        #[test]
        fn prop_zero_adjustment_matches_baseline(
            budget in 0.0f64..10_000_000.0,
            burn in 1.0f64..1_000_000.0,
            revenue in 0.0f64..1_000_000.0,
            marketing in 0.0f64..100_000.0,
        ) {
            let b = BaselineFinancials {
                current_budget: budget,
                monthly_burn: burn,
                revenue,
                marketing_spend: marketing,
                ..baseline()
            };
            let result = compute(&b, ScenarioAdjustment::default());

            prop_assert_eq!(result.profit_loss, revenue - burn);
            prop_assert_eq!(result.runway, Runway::Months(budget / burn));
            prop_assert_eq!(result.budget_left, budget - marketing);
            prop_assert_eq!(result.impact.as_str(), CURRENT_STATE_IMPACT);
        }
    }
}
