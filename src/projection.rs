//! Display-ready figures derived from a scenario.
//!
//! The renderers and the text report both read from here so the dashboard and
//! `--summary` output never disagree.

use crate::models::{BaselineFinancials, ScenarioAdjustment};
use crate::scenario::{format_profit_loss, Runway, ScenarioResult, EMPLOYEE_COST, PROJECTION_MONTHS};
use crate::utils::{round_half_up, to_fixed, CURRENCY};

/// One bar/point in the Current vs Scenario comparison charts
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonPoint {
    pub name: &'static str,
    pub runway: Runway,
    /// Budget in thousands
    pub budget_k: f64,
    pub employees: u32,
}

/// Current and scenario points, in that order
pub fn comparison_points(
    baseline: &BaselineFinancials,
    adjustment: ScenarioAdjustment,
    result: &ScenarioResult,
) -> [ComparisonPoint; 2] {
    [
        ComparisonPoint {
            name: "Current",
            runway: Runway::Months(baseline.current_runway),
            budget_k: baseline.current_budget / 1000.0,
            employees: baseline.employees,
        },
        ComparisonPoint {
            name: "Scenario",
            runway: result.runway,
            budget_k: result.budget_left / 1000.0,
            employees: baseline.employees + adjustment.additional_employees(),
        },
    ]
}

/// Which budget bucket a slice represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceKind {
    Available,
    Marketing,
    Employees,
}

/// One slice of the budget allocation chart
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationSlice {
    pub kind: SliceKind,
    pub name: &'static str,
    pub value: f64,
    /// Fraction of the positive total, 0.0..=1.0
    pub share: f64,
}

impl AllocationSlice {
    /// Chart label, e.g. `"Marketing Spend 3%"`
    pub fn label(&self) -> String {
        format!("{} {}%", self.name, to_fixed(self.share * 100.0, 0))
    }
}

/// Budget allocation: available budget, marketing and six months of payroll
pub fn allocation_slices(
    baseline: &BaselineFinancials,
    adjustment: ScenarioAdjustment,
    result: &ScenarioResult,
) -> Vec<AllocationSlice> {
    let headcount = f64::from(baseline.employees + adjustment.additional_employees());
    let raw = [
        (SliceKind::Available, "Available Budget", result.budget_left),
        (
            SliceKind::Marketing,
            "Marketing Spend",
            baseline.marketing_spend + adjustment.marketing_adjustment() as f64,
        ),
        (
            SliceKind::Employees,
            "Employee Costs",
            headcount * EMPLOYEE_COST * PROJECTION_MONTHS,
        ),
    ];

    // Negative buckets cannot take up a share of the chart
    let total: f64 = raw.iter().map(|(_, _, v)| v.max(0.0)).sum();

    raw.into_iter()
        .map(|(kind, name, value)| AllocationSlice {
            kind,
            name,
            value,
            share: if total > 0.0 { value.max(0.0) / total } else { 0.0 },
        })
        .collect()
}

/// Visual tone of a summary card headline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Positive,
    Negative,
}

/// Headline and caption of one summary card
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCard {
    pub title: &'static str,
    pub headline: String,
    pub caption: String,
    pub tone: Tone,
}

/// The four key-metric cards: runway, available budget, monthly P&L, team size
pub fn summary_cards(
    baseline: &BaselineFinancials,
    adjustment: ScenarioAdjustment,
    result: &ScenarioResult,
) -> [SummaryCard; 4] {
    let runway_caption = match result.runway {
        Runway::Months(months) => {
            let delta = months - baseline.current_runway;
            let sign = if result.runway.is_longer_than(baseline.current_runway) {
                "+"
            } else {
                ""
            };
            format!("{}{} from baseline", sign, to_fixed(delta, 1))
        }
        Runway::Unbounded => "no burn under this scenario".to_string(),
    };

    let budget_caption = if result.budget_left < baseline.current_budget {
        "Allocated for growth"
    } else {
        "Available for growth"
    };

    let profitable = result.profit_loss >= 0.0;

    let hires = adjustment.additional_employees();
    let team_caption = if hires > 0 {
        format!("+{} new hires", hires)
    } else {
        "Current team".to_string()
    };

    [
        SummaryCard {
            title: "Current Runway",
            headline: result.runway.display_months(),
            caption: runway_caption,
            tone: Tone::Neutral,
        },
        SummaryCard {
            title: "Available Budget",
            headline: format!("{}{}K", CURRENCY, to_fixed(result.budget_left / 1000.0, 0)),
            caption: budget_caption.to_string(),
            tone: Tone::Neutral,
        },
        SummaryCard {
            title: "Monthly P&L",
            headline: format_profit_loss(result.profit_loss),
            caption: if profitable {
                "Profitable monthly".to_string()
            } else {
                "Burning monthly".to_string()
            },
            tone: if profitable { Tone::Positive } else { Tone::Negative },
        },
        SummaryCard {
            title: "Team Size",
            headline: (baseline.employees + hires).to_string(),
            caption: team_caption,
            tone: Tone::Neutral,
        },
    ]
}

/// Runway rounded to whole months for chart bars; unbounded maps to `None`
pub fn runway_bar_months(runway: Runway) -> Option<f64> {
    runway.months().map(round_half_up)
}
