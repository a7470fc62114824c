//! Plain-text and JSON scenario reports for `--summary`.

use std::fmt;

use serde::Serialize;

use crate::models::{BaselineFinancials, Lever, ScenarioAdjustment};
use crate::projection::{allocation_slices, summary_cards};
use crate::scenario::{format_runway_precise, ScenarioResult};
use crate::ui::format_lever_value;
use crate::utils::format_currency;

/// Everything `--summary --json` prints
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonReport<'a> {
    pub baseline: &'a BaselineFinancials,
    pub adjustment: ScenarioAdjustment,
    pub result: &'a ScenarioResult,
}

/// Pretty-printed JSON of the baseline, levers and result
pub fn json_report(
    baseline: &BaselineFinancials,
    adjustment: ScenarioAdjustment,
    result: &ScenarioResult,
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        baseline,
        adjustment,
        result,
    })
}

/// Human-readable report mirroring the dashboard cards
pub fn text_report(
    baseline: &BaselineFinancials,
    adjustment: ScenarioAdjustment,
    result: &ScenarioResult,
) -> String {
    let mut out = String::new();
    // Only the writer can fail, and a String never does
    if write_report(&mut out, baseline, adjustment, result).is_err() {
        tracing::warn!("text report truncated");
    }
    out
}

/// Write the summary sections to any `fmt::Write` sink
pub fn write_report<W: fmt::Write>(
    out: &mut W,
    baseline: &BaselineFinancials,
    adjustment: ScenarioAdjustment,
    result: &ScenarioResult,
) -> fmt::Result {
    writeln!(out, "CFO Helper - Scenario Summary")?;
    writeln!(out, "=============================")?;
    writeln!(out)?;

    writeln!(out, "Levers:")?;
    for lever in Lever::ALL {
        writeln!(
            out,
            "  {:32} {}",
            lever.label(),
            format_lever_value(lever, adjustment.get(lever))
        )?;
    }
    writeln!(out)?;

    writeln!(out, "Key metrics:")?;
    for card in summary_cards(baseline, adjustment, result) {
        writeln!(out, "  {:18} {:>14}   {}", card.title, card.headline, card.caption)?;
    }
    writeln!(out)?;

    writeln!(out, "Details:")?;
    writeln!(out, "  {:18} {}", "Runway", format_runway_precise(result.runway))?;
    writeln!(out, "  {:18} {}", "Monthly burn", format_currency(result.new_monthly_burn))?;
    writeln!(out, "  {:18} {}", "Monthly revenue", format_currency(result.new_revenue))?;
    writeln!(out, "  {:18} {}", "Budget", format_currency(result.budget))?;
    writeln!(out, "  {:18} {}", "Budget left", format_currency(result.budget_left))?;
    writeln!(out)?;

    writeln!(out, "Budget allocation:")?;
    for slice in allocation_slices(baseline, adjustment, result) {
        writeln!(out, "  {:24} {}", slice.label(), format_currency(slice.value))?;
    }
    writeln!(out)?;

    writeln!(out, "Impact:")?;
    writeln!(out, "  {}", result.impact.trim_end())
}
