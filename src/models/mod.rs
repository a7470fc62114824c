//! Data models for CFO Helper
//!
//! This module contains the core data structures:
//! - Baseline financials and their JSON loading
//! - Scenario lever adjustments
//! - Enums for levers and input modes

pub mod adjustment;
pub mod enums;
pub mod financials;

// Re-exports for convenient access
pub use adjustment::{parse_lever_input, ScenarioAdjustment};
pub use enums::{Lever, Mode};
pub use financials::BaselineFinancials;
