//! Theme module for cfo-helper
//!
//! Centralized color palette and styling constants for the dashboard. Chart
//! series share their colors with the cards they summarise.

use ratatui::style::Color;

use crate::projection::{SliceKind, Tone};

// ============================================================================
// Background Colors
// ============================================================================

/// Primary background color (#0b1120)
pub const BG_PRIMARY: Color = Color::Rgb(11, 17, 32);

/// Card background color (#131b2e)
pub const BG_CARD: Color = Color::Rgb(19, 27, 46);

/// Highlighted control background (#1c2740)
pub const BG_FOCUS: Color = Color::Rgb(28, 39, 64);

/// Subtle border color (#26324a)
pub const BORDER_SUBTLE: Color = Color::Rgb(38, 50, 74);

// ============================================================================
// Accent Colors
// ============================================================================

/// Primary accent, used for runway and marketing (#38bdf8)
pub const PRIMARY: Color = Color::Rgb(56, 189, 248);

/// Green for available budget and profit (#4ade80)
pub const SUCCESS: Color = Color::Rgb(74, 222, 128);

/// Amber for payroll costs (#fbbf24)
pub const WARNING: Color = Color::Rgb(251, 191, 36);

/// Red for monthly losses (#f87171)
pub const DESTRUCTIVE: Color = Color::Rgb(248, 113, 113);

// ============================================================================
// Text Colors
// ============================================================================

/// Primary text color (#e2e8f0)
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240);

/// Muted text color - for labels and hints (#64748b)
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);

/// Headline color for a card tone
pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Neutral => TEXT_PRIMARY,
        Tone::Positive => SUCCESS,
        Tone::Negative => DESTRUCTIVE,
    }
}

/// Chart color for a budget allocation slice
pub fn slice_color(kind: SliceKind) -> Color {
    match kind {
        SliceKind::Available => SUCCESS,
        SliceKind::Marketing => PRIMARY,
        SliceKind::Employees => WARNING,
    }
}
