use super::body_block;
use crate::config::ProfileConfig;
use crate::ui::theme::{HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub fn render(frame: &mut Frame<'_>, area: Rect, profile: &ProfileConfig) {
    let lines = vec![
        Line::from(""),
        Line::from("◉").style(Style::default().fg(MUTED_TEXT)),
        Line::from(""),
        Line::from(profile.name.clone())
            .style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD)),
        Line::from(profile.email.clone()).style(Style::default().fg(MUTED_TEXT)),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(body_block()),
        area,
    );
}
