//! Baseline financial state
//!
//! The baseline is set once per session, either from the built-in defaults or
//! from a JSON file with camelCase keys.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::BaselineError;

/// Company financials before any scenario lever is applied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BaselineFinancials {
    /// Runway in months as reported by the company
    pub current_runway: f64,
    pub current_budget: f64,
    /// Monthly cash outflow; must be positive
    pub monthly_burn: f64,
    /// Monthly revenue
    pub revenue: f64,
    pub employees: u32,
    /// Monthly marketing spend
    pub marketing_spend: f64,
    pub product_price: f64,
}

impl Default for BaselineFinancials {
    fn default() -> Self {
        Self {
            current_runway: 12.0,
            current_budget: 500_000.0,
            monthly_burn: 42_000.0,
            revenue: 25_000.0,
            employees: 8,
            marketing_spend: 15_000.0,
            product_price: 99.0,
        }
    }
}

impl BaselineFinancials {
    /// Load a baseline from a JSON file and validate it.
    ///
    /// Keys missing from the file keep their default values.
    pub fn load(path: &Path) -> Result<Self, BaselineError> {
        let content = std::fs::read_to_string(path).map_err(|source| BaselineError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let baseline: Self =
            serde_json::from_str(&content).map_err(|source| BaselineError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        baseline.validate()?;
        Ok(baseline)
    }

    /// Check that every amount is finite and non-negative and that burn is positive
    pub fn validate(&self) -> Result<(), BaselineError> {
        let fields = [
            ("currentRunway", self.current_runway),
            ("currentBudget", self.current_budget),
            ("monthlyBurn", self.monthly_burn),
            ("revenue", self.revenue),
            ("marketingSpend", self.marketing_spend),
            ("productPrice", self.product_price),
        ];

        for (field, value) in fields {
            if !value.is_finite() {
                return Err(BaselineError::NonFinite { field });
            }
            if value < 0.0 {
                return Err(BaselineError::Negative { field, value });
            }
        }

        // Used as a divisor by the runway calculation
        if self.monthly_burn <= 0.0 {
            return Err(BaselineError::NonPositiveBurn(self.monthly_burn));
        }

        Ok(())
    }
}
