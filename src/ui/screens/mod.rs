//! Per-route body renderers. Each one matches every `UiState` variant.

pub mod cart;
pub mod detail;
pub mod home;
pub mod profile;

use crate::ui::theme::{GLOBAL_BORDER, MUTED_TEXT, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

fn body_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

fn render_loading(frame: &mut Frame<'_>, area: Rect, what: &str) {
    let widget = Paragraph::new(Line::from(format!("Loading {what}...")))
        .style(Style::default().fg(MUTED_TEXT))
        .alignment(Alignment::Center)
        .block(body_block());
    frame.render_widget(widget, area);
}

fn render_error(frame: &mut Frame<'_>, area: Rect, message: &str) {
    let lines = vec![
        Line::from(message.to_string()).style(Style::default().fg(STATUS_ERROR)),
        Line::from(""),
        Line::from("Press r to retry").style(Style::default().fg(MUTED_TEXT)),
    ];
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(body_block());
    frame.render_widget(widget, area);
}

fn render_message(frame: &mut Frame<'_>, area: Rect, message: &str) {
    let widget = Paragraph::new(Line::from(message.to_string()))
        .style(Style::default().fg(MUTED_TEXT))
        .alignment(Alignment::Center)
        .block(body_block());
    frame.render_widget(widget, area);
}
