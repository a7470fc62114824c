//! Summary card rendering functions

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::projection::SummaryCard;
use crate::theme::{tone_color, BG_CARD, BORDER_SUBTLE, TEXT_MUTED};

/// Height of a summary card: border + headline + caption + border
pub const CARD_HEIGHT: u16 = 4;

/// Card container shared by every panel on the dashboard
pub fn card_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_CARD))
}

/// Render the key-metric cards side by side in the given area
pub fn render_summary_cards(area: Rect, cards: &[SummaryCard], frame: &mut Frame) {
    if cards.is_empty() {
        return;
    }

    let share = 100 / cards.len() as u16;
    let card_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(cards.iter().map(|_| Constraint::Percentage(share)))
        .split(area);

    for (card, card_area) in cards.iter().zip(card_layout.iter()) {
        let title = format!(" {} ", card.title);
        let content = vec![
            Line::from(Span::styled(
                card.headline.clone(),
                Style::default()
                    .fg(tone_color(card.tone))
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                card.caption.clone(),
                Style::default().fg(TEXT_MUTED),
            )),
        ];

        let paragraph = Paragraph::new(content)
            .block(card_block(&title))
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, *card_area);
    }
}
