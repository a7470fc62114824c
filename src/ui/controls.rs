//! Scenario control panel: one slider per lever

use ratatui::{
    prelude::*,
    widgets::{Gauge, Paragraph},
};

use crate::app::App;
use crate::models::{Lever, Mode};
use crate::theme::{BG_FOCUS, BG_PRIMARY, PRIMARY, TEXT_MUTED, TEXT_PRIMARY, WARNING};
use crate::utils::group_thousands;

use super::stats::card_block;

/// Rows used by one lever: label, slider, range hint
const LEVER_HEIGHT: u16 = 3;

/// Position of a value within its lever range, 0.0..=1.0
pub fn slider_ratio(lever: Lever, value: i64) -> f64 {
    let (min, max) = lever.range();
    if max <= min {
        return 0.0;
    }
    ((value - min) as f64 / (max - min) as f64).clamp(0.0, 1.0)
}

/// Render the lever controls inside a card
pub fn render_controls(area: Rect, app: &App, frame: &mut Frame) {
    let block = card_block(" Scenario Controls ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(Lever::ALL.iter().map(|_| Constraint::Length(LEVER_HEIGHT)))
        .split(inner);

    for (lever, row) in Lever::ALL.iter().zip(rows.iter()) {
        render_lever(*row, *lever, app, frame);
    }
}

fn render_lever(area: Rect, lever: Lever, app: &App, frame: &mut Frame) {
    let focused = app.focused == lever;
    let editing = focused && app.mode == Mode::Edit;
    let value = app.adjustment.get(lever);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Label and value
            Constraint::Length(1), // Slider
            Constraint::Length(1), // Range hint
        ])
        .split(area);

    let marker = if focused { "▶ " } else { "  " };
    let label_style = if focused {
        Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT_PRIMARY)
    };

    // While editing, show the raw buffer with a cursor instead of the value
    let value_span = if editing {
        Span::styled(
            format!("[{}▏]", app.edit_buffer),
            Style::default().fg(WARNING).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(format_lever_value(lever, value), label_style)
    };

    let label_line = Line::from(vec![
        Span::styled(marker, Style::default().fg(PRIMARY)),
        Span::styled(format!("{}: ", lever.label()), label_style),
        value_span,
    ]);
    frame.render_widget(Paragraph::new(label_line), parts[0]);

    let gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(if focused { PRIMARY } else { TEXT_MUTED })
                .bg(if focused { BG_FOCUS } else { BG_PRIMARY }),
        )
        .ratio(slider_ratio(lever, value))
        .label("");
    frame.render_widget(gauge, parts[1]);

    let hint = Line::from(Span::styled(
        format!(
            "{} … {}  (step {})",
            format_lever_value(lever, lever.min()),
            format_lever_value(lever, lever.max()),
            group_thousands(lever.step() as f64)
        ),
        Style::default().fg(TEXT_MUTED),
    ));
    frame.render_widget(Paragraph::new(hint), parts[2]);
}

/// Lever value with its unit, e.g. `2`, `+₹10,000`, `-15%`
pub fn format_lever_value(lever: Lever, value: i64) -> String {
    let sign = if value > 0 && lever != Lever::Hiring { "+" } else { "" };
    match lever {
        Lever::Hiring => value.to_string(),
        Lever::Marketing => format!("{}₹{}", sign, group_thousands(value as f64)),
        Lever::Price => format!("{}{}%", sign, value),
    }
}
