//! "Next quote" button and the note field

use crate::page::{Page, SlotId, Transform};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const BUTTON_WIDTH: u16 = 18;

/// Render the controls row and record where the button and field landed
pub fn render_controls(frame: &mut Frame, area: Rect, page: &mut Page) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(2),
            Constraint::Min(10),
        ])
        .split(area);

    if let Ok(button) = page.element(SlotId::Next) {
        let focused = page.focused() == Some(SlotId::Next);
        render_button(frame, columns[0], &button.text, button.transform, focused);
        page.set_area(SlotId::Next, columns[0]);
    }

    if let Ok(field) = page.element(SlotId::Note) {
        let focused = page.focused() == Some(SlotId::Note);
        render_note_field(frame, columns[2], &field.text, focused);
        page.set_area(SlotId::Note, columns[2]);
    }
}

/// Pressed buttons shrink by one column on each side
fn pressed_area(area: Rect) -> Rect {
    if area.width <= 4 {
        return area;
    }
    Rect::new(area.x + 1, area.y, area.width - 2, area.height)
}

fn render_button(frame: &mut Frame, area: Rect, label: &str, transform: Transform, focused: bool) {
    let (draw_area, style) = match transform {
        Transform::Normal => (
            area,
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Transform::Pressed => (
            pressed_area(area),
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
    };

    let border_style = if focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let button = Paragraph::new(label.to_string())
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_style(border_style));
    frame.render_widget(button, draw_area);
}

fn render_note_field(frame: &mut Frame, area: Rect, text: &str, focused: bool) {
    let border_style = if focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Note ")
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);

    // Keep the tail of long input visible
    let visible_width = inner.width.saturating_sub(1) as usize;
    let char_count = text.chars().count();
    let shown: String = text
        .chars()
        .skip(char_count.saturating_sub(visible_width))
        .collect();

    let (content, content_style) = if text.is_empty() && !focused {
        (
            "(Tab to type a note)".to_string(),
            Style::default().fg(DEFAULT_THEME.comment),
        )
    } else {
        (shown.clone(), Style::default().fg(DEFAULT_THEME.fg))
    };

    let paragraph = Paragraph::new(content)
        .style(content_style.bg(DEFAULT_THEME.field_bg))
        .block(block);
    frame.render_widget(paragraph, area);

    if focused && inner.width > 0 && inner.height > 0 {
        let cursor_x = inner.x + (shown.chars().count() as u16).min(inner.width - 1);
        frame.set_cursor_position((cursor_x, inner.y));
    }
}
