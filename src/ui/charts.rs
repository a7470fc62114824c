//! Chart rendering: budget allocation, runway comparison, financial projection

use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{Axis, Bar, BarChart, BarGroup, Chart, Dataset, GraphType, Paragraph},
};

use crate::projection::{runway_bar_months, AllocationSlice, ComparisonPoint};
use crate::theme::{slice_color, PRIMARY, SUCCESS, TEXT_MUTED, TEXT_PRIMARY};
use crate::utils::{format_currency, group_thousands};

use super::stats::card_block;

/// Budget allocation as horizontal bars labelled with their share
pub fn render_allocation(area: Rect, slices: &[AllocationSlice], frame: &mut Frame) {
    let bars: Vec<Bar> = slices
        .iter()
        .map(|slice| {
            Bar::default()
                .value(slice.value.max(0.0) as u64)
                .label(Line::from(slice.label()))
                .text_value(format_currency(slice.value))
                .style(Style::default().fg(slice_color(slice.kind)))
                .value_style(Style::default().fg(TEXT_PRIMARY).bg(slice_color(slice.kind)))
        })
        .collect();

    let chart = BarChart::default()
        .block(card_block(" Budget Allocation "))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(1)
        .label_style(Style::default().fg(TEXT_MUTED))
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

/// Current vs scenario runway as vertical bars (whole months)
pub fn render_runway_comparison(area: Rect, points: &[ComparisonPoint], frame: &mut Frame) {
    let bars: Vec<Bar> = points
        .iter()
        .map(|point| {
            let (value, text) = match runway_bar_months(point.runway) {
                Some(months) => (months.max(0.0) as u64, format!("{} mo", months)),
                None => (0, "unlimited".to_string()),
            };
            Bar::default()
                .value(value)
                .label(Line::from(point.name))
                .text_value(text)
                .style(Style::default().fg(PRIMARY))
                .value_style(Style::default().fg(TEXT_PRIMARY).bg(PRIMARY))
        })
        .collect();

    let chart = BarChart::default()
        .block(card_block(" Runway Comparison "))
        .bar_width(10)
        .bar_gap(4)
        .label_style(Style::default().fg(TEXT_MUTED))
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

/// Y-axis bounds covering every value, always including zero
pub fn projection_bounds(values: &[f64]) -> [f64; 2] {
    let min = values.iter().copied().fold(0.0_f64, f64::min);
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    let pad = ((max - min) * 0.1).max(1.0);
    [if min < 0.0 { min - pad } else { 0.0 }, max + pad]
}

/// Budget in thousands, current vs scenario, as a line
pub fn render_projection(area: Rect, points: &[ComparisonPoint], frame: &mut Frame) {
    let data: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .map(|(i, point)| (i as f64, point.budget_k))
        .collect();

    if data.len() < 2 {
        frame.render_widget(
            Paragraph::new("Not enough data").block(card_block(" Financial Projection ")),
            area,
        );
        return;
    }

    let values: Vec<f64> = data.iter().map(|(_, y)| *y).collect();
    let [y_min, y_max] = projection_bounds(&values);

    let dataset = Dataset::default()
        .name("Budget (₹K)")
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(SUCCESS))
        .data(&data);

    let x_labels: Vec<Span> = points
        .iter()
        .map(|p| Span::styled(p.name, Style::default().fg(TEXT_MUTED)))
        .collect();
    let y_labels: Vec<Span> = [y_min, (y_min + y_max) / 2.0, y_max]
        .iter()
        .map(|v| Span::styled(format!("{}K", group_thousands(v.round())), Style::default().fg(TEXT_MUTED)))
        .collect();

    let chart = Chart::new(vec![dataset])
        .block(card_block(" Financial Projection "))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(TEXT_MUTED))
                .bounds([0.0, (data.len() - 1) as f64])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(TEXT_MUTED))
                .bounds([y_min, y_max])
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}
