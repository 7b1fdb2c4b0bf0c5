use super::{body_block, render_error, render_loading, render_message};
use crate::data::OrderReward;
use crate::ui::common::UiState;
use crate::ui::theme::{ACCENT, HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

const NOT_FOUND: &str = "Reward not found";

pub fn render(
    frame: &mut Frame<'_>,
    area: Rect,
    reward_id: i64,
    state: &UiState<OrderReward>,
    count: u32,
) {
    if reward_id < 0 {
        render_message(frame, area, NOT_FOUND);
        return;
    }
    match state {
        UiState::Loading => render_loading(frame, area, "reward"),
        UiState::Error(message) => render_error(frame, area, message),
        UiState::Success(order) => render_reward(frame, area, order, count),
    }
}

fn render_reward(frame: &mut Frame<'_>, area: Rect, order: &OrderReward, count: u32) {
    let reward = &order.reward;
    let add_style = if count > 0 {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM)
    };
    let lines = vec![
        Line::from(Span::styled(
            reward.title.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("[{}]", reward.image),
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("Required points: "),
            Span::styled(reward.required_point.to_string(), Style::default().fg(ACCENT)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw("Quantity:  "),
            Span::styled("[-]", Style::default().fg(MUTED_TEXT)),
            Span::styled(format!(" {count} "), Style::default().fg(HEADER_TEXT)),
            Span::styled("[+]", Style::default().fg(MUTED_TEXT)),
        ]),
        Line::from(""),
        Line::from(Span::styled("[ Add to cart ]", add_style)),
    ];
    let widget = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        body_block().title_bottom(
            Line::from(" +/-: Quantity  Enter: Add to cart  Esc: Back ")
                .style(Style::default().fg(MUTED_TEXT)),
        ),
    );
    frame.render_widget(widget, area);
}
