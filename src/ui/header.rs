use crate::navigation::Route;
use crate::strings::{APP_NAME, DETAIL_TITLE, MENU_CART, MENU_PROFILE};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Title shown in the top bar for a route.
pub fn screen_title(route: &Route) -> &'static str {
    match route {
        Route::Home => APP_NAME,
        Route::Cart => MENU_CART,
        Route::Profile => MENU_PROFILE,
        Route::RewardDetail { .. } => DETAIL_TITLE,
    }
}

/// Top bar: screen title on the left, transient status on the right.
pub struct Header<'a> {
    route: Route,
    status: Option<&'a str>,
}

impl<'a> Header<'a> {
    pub fn new(route: Route, status: Option<&'a str>) -> Self {
        Self { route, status }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let title = screen_title(&self.route);
        let back_hint = if self.route.is_tab() { "" } else { "← " };
        let left = format!("  {back_hint}{title}");
        let right = self.status.map(|s| format!("{s}  ")).unwrap_or_default();

        // Char count, not byte count (for Unicode)
        let content_width = area.width as usize;
        let padding = content_width
            .saturating_sub(left.chars().count())
            .saturating_sub(right.chars().count());

        let line = Line::from(vec![
            Span::styled(
                left,
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ".repeat(padding)),
            Span::styled(right, Style::default().fg(ACCENT)),
        ]);

        Paragraph::new(line).style(Style::default().fg(MUTED_TEXT)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
