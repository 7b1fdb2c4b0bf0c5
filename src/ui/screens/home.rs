use super::{body_block, render_error, render_loading};
use crate::data::OrderReward;
use crate::navigation::ScreenMemo;
use crate::ui::common::UiState;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState};
use ratatui::Frame;

pub fn render(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &UiState<Vec<OrderReward>>,
    memo: ScreenMemo,
) {
    match state {
        UiState::Loading => render_loading(frame, area, "rewards"),
        UiState::Error(message) => render_error(frame, area, message),
        UiState::Success(orders) => render_rewards(frame, area, orders, memo),
    }
}

fn render_rewards(frame: &mut Frame<'_>, area: Rect, orders: &[OrderReward], memo: ScreenMemo) {
    let items: Vec<ListItem> = orders
        .iter()
        .map(|order| {
            ListItem::new(Line::from(vec![
                Span::styled(order.reward.title.clone(), Style::default().fg(HEADER_TEXT)),
                Span::raw("  "),
                Span::styled(
                    format!("{} pts", order.reward.required_point),
                    Style::default().fg(ACCENT),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            body_block().title_bottom(
                Line::from(" Enter: Detail  ↑↓: Move ").style(Style::default().fg(MUTED_TEXT)),
            ),
        )
        .highlight_style(
            Style::default()
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default()
        .with_offset(memo.scroll)
        .with_selected(Some(memo.selected.min(orders.len().saturating_sub(1))));
    frame.render_stateful_widget(list, area, &mut list_state);
}
