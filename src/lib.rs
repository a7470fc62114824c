//! CFO Helper: startup financial scenario planning.
//!
//! The [`scenario::compute`] function turns a baseline and three lever values
//! into runway, remaining budget, monthly P&L and a narrative summary. The
//! rest of the crate presents that result as a terminal dashboard or a
//! one-shot report.

pub mod app;
pub mod cli;
pub mod error;
pub mod logging;
pub mod models;
pub mod projection;
pub mod scenario;
pub mod theme;
pub mod ui;
pub mod utils;
