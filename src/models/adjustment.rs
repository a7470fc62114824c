//! Scenario lever adjustments
//!
//! A `ScenarioAdjustment` is an immutable value: every change produces a new
//! value which is then handed to the calculator by copy.

use serde::Serialize;

use super::enums::Lever;

/// The three lever values of a scenario, always within their slider ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioAdjustment {
    additional_employees: u32,
    marketing_adjustment: i64,
    price_adjustment: i64,
}

impl ScenarioAdjustment {
    /// Build an adjustment, clamping each lever into its range
    pub fn new(additional_employees: i64, marketing_adjustment: i64, price_adjustment: i64) -> Self {
        Self::default()
            .with(Lever::Hiring, additional_employees)
            .with(Lever::Marketing, marketing_adjustment)
            .with(Lever::Price, price_adjustment)
    }

    pub fn additional_employees(&self) -> u32 {
        self.additional_employees
    }

    pub fn marketing_adjustment(&self) -> i64 {
        self.marketing_adjustment
    }

    pub fn price_adjustment(&self) -> i64 {
        self.price_adjustment
    }

    /// True when every lever sits at its default of zero
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Current value of one lever
    pub fn get(&self, lever: Lever) -> i64 {
        match lever {
            Lever::Hiring => i64::from(self.additional_employees),
            Lever::Marketing => self.marketing_adjustment,
            Lever::Price => self.price_adjustment,
        }
    }

    /// Copy of this adjustment with one lever replaced (clamped)
    pub fn with(self, lever: Lever, value: i64) -> Self {
        let value = lever.clamp(value);
        match lever {
            // Range is 0..=10 after clamping
            Lever::Hiring => Self {
                additional_employees: value as u32,
                ..self
            },
            Lever::Marketing => Self {
                marketing_adjustment: value,
                ..self
            },
            Lever::Price => Self {
                price_adjustment: value,
                ..self
            },
        }
    }

    /// Move one lever by `steps` slider steps (negative steps move down)
    pub fn step(self, lever: Lever, steps: i64) -> Self {
        let next = self.get(lever).saturating_add(steps.saturating_mul(lever.step()));
        self.with(lever, next)
    }
}

/// Coerce typed text into a lever value the way a number input does.
///
/// Leading whitespace and an optional sign are accepted, then as many decimal
/// digits as follow. Anything else (including an empty string) yields 0, and
/// trailing garbage after the digits is ignored: `"12abc"` is 12, `"3.7"` is 3.
pub fn parse_lever_input(text: &str) -> i64 {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return 0;
    }

    // Out-of-range magnitudes saturate; the lever clamp brings them back
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    if negative { -magnitude } else { magnitude }
}
