//! Quote box: quote text, author and the running counter
//!
//! The box has only a left border, drawn in the colour the renderer last
//! published to the `quote-box` slot. Before the first render (or if the slot
//! is missing) the border falls back to the normal border colour.

use crate::page::{Page, SlotId};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Render the quote box and the counter line below it.
///
/// Records the drawn areas of the quote, author, counter and box slots.
pub fn render_quote_pane(frame: &mut Frame, area: Rect, page: &mut Page) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);
    let box_area = chunks[0];
    let counter_area = chunks[1];

    let border_color = page
        .element(SlotId::QuoteBox)
        .ok()
        .and_then(|e| e.border_left_color)
        .map(Color::from)
        .unwrap_or(DEFAULT_THEME.border_normal);

    let block = Block::default()
        .borders(Borders::LEFT)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(border_color))
        .padding(Padding::new(2, 2, 1, 0));
    let inner = block.inner(box_area);

    let lines = vec![
        Line::from(Span::styled(
            page.text(SlotId::Quote).to_string(),
            Style::default()
                .fg(DEFAULT_THEME.quote)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("- {}", page.text(SlotId::Author)),
            Style::default()
                .fg(DEFAULT_THEME.author)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Right),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, box_area);

    let counter = Paragraph::new(Line::from(vec![
        Span::styled(" Quotes shown: ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(
            page.text(SlotId::Counter).to_string(),
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    frame.render_widget(counter, counter_area);

    page.set_area(SlotId::QuoteBox, box_area);
    page.set_area(SlotId::Quote, inner);
    page.set_area(SlotId::Author, inner);
    page.set_area(SlotId::Counter, counter_area);
}
