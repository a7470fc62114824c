//! Error types for CFO Helper.
//!
//! The calculator itself never fails; errors only come from loading a baseline
//! file, driving the terminal, or serialising the report.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Problems with a baseline financials file
#[derive(Debug, Error)]
pub enum BaselineError {
    #[error("failed to read baseline file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse baseline file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("baseline field `{field}` must be a finite number")]
    NonFinite { field: &'static str },

    #[error("baseline field `{field}` must be non-negative (got {value})")]
    Negative { field: &'static str, value: f64 },

    #[error("baseline monthly burn must be greater than zero (got {0})")]
    NonPositiveBurn(f64),
}

/// Top-level application error
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Baseline(#[from] BaselineError),

    #[error("failed to serialise report: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_error_messages() {
        let err = BaselineError::Negative {
            field: "revenue",
            value: -1.0,
        };
        assert_eq!(
            err.to_string(),
            "baseline field `revenue` must be non-negative (got -1)"
        );
        assert_eq!(
            BaselineError::NonPositiveBurn(0.0).to_string(),
            "baseline monthly burn must be greater than zero (got 0)"
        );
    }

    #[test]
    fn test_app_error_is_transparent_for_baseline() {
        let err: AppError = BaselineError::NonFinite { field: "currentBudget" }.into();
        assert_eq!(
            err.to_string(),
            "baseline field `currentBudget` must be a finite number"
        );
    }
}
