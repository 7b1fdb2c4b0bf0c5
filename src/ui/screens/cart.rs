use super::{body_block, render_error, render_loading, render_message};
use crate::data::OrderReward;
use crate::navigation::ScreenMemo;
use crate::ui::common::UiState;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{List, ListItem, ListState};
use ratatui::Frame;

pub fn render(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &UiState<Vec<OrderReward>>,
    memo: ScreenMemo,
) {
    match state {
        UiState::Loading => render_loading(frame, area, "cart"),
        UiState::Error(message) => render_error(frame, area, message),
        UiState::Success(orders) if orders.is_empty() => {
            render_message(frame, area, "Your cart is empty")
        }
        UiState::Success(orders) => {
            let items: Vec<ListItem> = orders
                .iter()
                .map(|order| {
                    ListItem::new(Line::from(format!(
                        "{:>3} x {}",
                        order.count, order.reward.title
                    )))
                    .style(Style::default().fg(HEADER_TEXT))
                })
                .collect();
            let list = List::new(items)
                .block(body_block().title_bottom(
                    Line::from(" o/Enter: Order ").style(Style::default().fg(MUTED_TEXT)),
                ))
                .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT));
            let mut list_state = ListState::default()
                .with_offset(memo.scroll)
                .with_selected(Some(memo.selected.min(orders.len() - 1)));
            frame.render_stateful_widget(list, area, &mut list_state);
        }
    }
}
