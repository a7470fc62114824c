//! CLI argument parsing and configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::models::ScenarioAdjustment;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// CFO Helper - financial scenario planning with real-time impact analysis
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "cfo-helper")]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    /// Baseline financials (JSON with camelCase keys); built-in defaults if omitted
    #[arg(short, long, value_name = "FILE", env = "CFO_HELPER_BASELINE")]
    pub baseline: Option<PathBuf>,

    /// Initial number of additional engineers (0 to 10)
    #[arg(long, value_name = "N", default_value_t = 0, allow_negative_numbers = true)]
    pub hires: i64,

    /// Initial marketing spend adjustment (-15000 to 50000)
    #[arg(long, value_name = "AMOUNT", default_value_t = 0, allow_negative_numbers = true)]
    pub marketing: i64,

    /// Initial product price adjustment in percent (-50 to 100)
    #[arg(long, value_name = "PERCENT", default_value_t = 0, allow_negative_numbers = true)]
    pub price: i64,

    /// Print the scenario summary and exit instead of opening the dashboard
    #[arg(short, long)]
    pub summary: bool,

    /// With --summary, print the result as JSON
    #[arg(long, requires = "summary")]
    pub json: bool,

    /// Log file (default: <cache dir>/cfo-helper/cfo-helper.log)
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); CFO_HELPER_LOG overrides
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    pub log_level: String,
}

impl CliArgs {
    /// Initial lever values, clamped into their slider ranges
    pub fn adjustment(&self) -> ScenarioAdjustment {
        ScenarioAdjustment::new(self.hires, self.marketing, self.price)
    }
}

/// Parse CLI arguments from the process environment
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("cfo-helper").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        assert!(!args.summary);
        assert!(!args.json);
        assert_eq!(args.log_level, "info");
        assert!(args.adjustment().is_zero());
    }

    #[test]
    fn test_levers_accept_negative_values() {
        let args = parse(&["--hires", "2", "--marketing", "-5000", "--price", "-10"]);
        assert_eq!(args.adjustment(), ScenarioAdjustment::new(2, -5_000, -10));
    }

    #[test]
    fn test_levers_are_clamped() {
        let args = parse(&["--hires", "50", "--marketing", "-99999", "--price", "250"]);
        assert_eq!(args.adjustment(), ScenarioAdjustment::new(10, -15_000, 100));
    }

    #[test]
    fn test_summary_json() {
        let args = parse(&["-s", "--json", "-b", "plan.json"]);
        assert!(args.summary);
        assert!(args.json);
        assert_eq!(args.baseline, Some(PathBuf::from("plan.json")));
    }

    #[test]
    fn test_json_requires_summary() {
        let result = CliArgs::try_parse_from(["cfo-helper", "--json"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_non_numeric_lever() {
        let result = CliArgs::try_parse_from(["cfo-helper", "--hires", "lots"]);
        assert!(result.is_err());
    }
}
