use crate::navigation::{selected_item, Route, BOTTOM_BAR_ITEMS};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Tabs};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Bottom navigation bar. The item matching the current route is selected.
pub struct BottomBar {
    route: Route,
}

impl BottomBar {
    pub fn new(route: Route) -> Self {
        Self { route }
    }

    pub fn widget(&self) -> Tabs<'static> {
        let titles: Vec<Line<'static>> = BOTTOM_BAR_ITEMS
            .iter()
            .enumerate()
            .map(|(index, item)| {
                Line::from(format!(" {} {} {} ", index + 1, item.icon.glyph(), item.title))
            })
            .collect();

        let mut tabs = Tabs::new(titles)
            .style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM))
            .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
            .divider("│")
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER))
                    .title_bottom(Line::from(format!(" v{VERSION} ")).right_aligned()),
            );
        if let Some(index) = selected_item(&self.route) {
            tabs = tabs.select(index);
        }
        tabs
    }
}
