//! UI module for cfo-helper
//!
//! This module contains the rendering functions for the dashboard: summary
//! cards, the lever control panel, the allocation and comparison charts.

mod charts;
mod controls;
mod render;
mod stats;
mod terminal;

pub use controls::{format_lever_value, slider_ratio};
pub use render::{key_hints, render_dashboard};
pub use terminal::restore_terminal;
