//! Top-level dashboard layout

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::Mode;
use crate::projection::{allocation_slices, comparison_points, summary_cards};
use crate::theme::{BG_PRIMARY, PRIMARY, TEXT_MUTED, TEXT_PRIMARY};

use super::charts::{render_allocation, render_projection, render_runway_comparison};
use super::controls::render_controls;
use super::stats::{card_block, render_summary_cards, CARD_HEIGHT};

/// Draw the whole dashboard for the current application state
pub fn render_dashboard(app: &App, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(BG_PRIMARY)), area);

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),           // Header
            Constraint::Length(CARD_HEIGHT), // Key metrics
            Constraint::Length(11),          // Controls + allocation
            Constraint::Length(4),           // Impact summary
            Constraint::Min(8),              // Charts
            Constraint::Length(1),           // Bottom bar (single line)
        ])
        .split(area);

    render_header(main_layout[0], frame);

    let cards = summary_cards(&app.baseline, app.adjustment, &app.result);
    render_summary_cards(main_layout[1], &cards, frame);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_layout[2]);
    render_controls(middle[0], app, frame);
    let slices = allocation_slices(&app.baseline, app.adjustment, &app.result);
    render_allocation(middle[1], &slices, frame);

    let impact = Paragraph::new(app.result.impact.trim_end())
        .style(Style::default().fg(TEXT_PRIMARY))
        .wrap(Wrap { trim: true })
        .block(card_block(" Scenario Impact "));
    frame.render_widget(impact, main_layout[3]);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_layout[4]);
    let points = comparison_points(&app.baseline, app.adjustment, &app.result);
    render_runway_comparison(charts[0], &points, frame);
    render_projection(charts[1], &points, frame);

    render_key_hints(main_layout[5], app.mode, frame);
}

fn render_header(area: Rect, frame: &mut Frame) {
    let header = vec![
        Line::from(Span::styled(
            "CFO Helper",
            Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Financial scenario planning with real-time impact analysis",
            Style::default().fg(TEXT_MUTED),
        )),
    ];
    frame.render_widget(Paragraph::new(header).alignment(Alignment::Center), area);
}

/// Keybinding hints for the current mode
pub fn key_hints(mode: Mode) -> &'static str {
    match mode {
        Mode::Navigate => {
            " ↑/↓: Lever | ←/→: Adjust | Home/End: Min/Max | 0: Zero | Enter: Type value | r: Reset | q: Quit "
        }
        Mode::Edit => " Type a number | Enter: Apply | Backspace: Delete | Esc: Cancel ",
    }
}

fn render_key_hints(area: Rect, mode: Mode, frame: &mut Frame) {
    let keybindings = Paragraph::new(key_hints(mode))
        .style(Style::default().fg(Color::Black).bg(PRIMARY));
    frame.render_widget(keybindings, area);
}
