//! CLI argument parsing and non-interactive reports for CFO Helper.

mod args;
mod report;

pub use args::{parse_args, CliArgs, VERSION};
pub use report::{json_report, text_report};
