//! Enums used throughout CFO Helper
//!
//! This module contains the lever identifiers with their slider ranges and the
//! input mode of the dashboard.

/// Mode for modal input system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Navigate, // Default mode - arrows move focus and step levers
    Edit,     // Typing a value for the focused lever
}

/// One of the three user-adjustable scenario inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lever {
    #[default]
    Hiring,
    Marketing,
    Price,
}

impl Lever {
    /// All levers in display order
    pub const ALL: [Lever; 3] = [Lever::Hiring, Lever::Marketing, Lever::Price];

    /// Inclusive slider range for this lever
    pub fn range(&self) -> (i64, i64) {
        match self {
            Lever::Hiring => (0, 10),
            Lever::Marketing => (-15_000, 50_000),
            Lever::Price => (-50, 100),
        }
    }

    pub fn min(&self) -> i64 {
        self.range().0
    }

    pub fn max(&self) -> i64 {
        self.range().1
    }

    /// Slider step size
    pub fn step(&self) -> i64 {
        match self {
            Lever::Hiring => 1,
            Lever::Marketing => 1_000,
            Lever::Price => 5,
        }
    }

    /// Clamp a raw value into this lever's range
    pub fn clamp(&self, value: i64) -> i64 {
        value.clamp(self.min(), self.max())
    }

    pub fn label(&self) -> &'static str {
        match self {
            Lever::Hiring => "Additional Engineers",
            Lever::Marketing => "Marketing Spend Adjustment (₹)",
            Lever::Price => "Product Price Adjustment (%)",
        }
    }

    /// Next lever in display order, wrapping around
    pub fn next(&self) -> Self {
        match self {
            Lever::Hiring => Lever::Marketing,
            Lever::Marketing => Lever::Price,
            Lever::Price => Lever::Hiring,
        }
    }

    /// Previous lever in display order, wrapping around
    pub fn prev(&self) -> Self {
        match self {
            Lever::Hiring => Lever::Price,
            Lever::Marketing => Lever::Hiring,
            Lever::Price => Lever::Marketing,
        }
    }
}
