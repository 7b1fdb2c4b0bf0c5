use crate::navigation::Route;
use crate::ui::app::App;
use crate::ui::bottom_bar::BottomBar;
use crate::ui::chooser::ChooserState;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::screens;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, BRAND, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, STATUS_ERROR,
    STATUS_OK,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

const POPUP_WIDTH: u16 = 44;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header_area, body_area, bottom_area) = layout_regions(area, app.shows_bottom_bar());
    let route = app.current_route();

    let header = Header::new(route, app.status());
    frame.render_widget(header.widget(header_area), header_area);

    match route {
        Route::Home => screens::home::render(frame, body_area, app.home_state(), app.memo()),
        Route::Cart => screens::cart::render(frame, body_area, app.cart_state(), app.memo()),
        Route::Profile => screens::profile::render(frame, body_area, app.profile()),
        Route::RewardDetail { reward_id } => screens::detail::render(
            frame,
            body_area,
            reward_id,
            app.detail_state(),
            app.detail_count(),
        ),
    }

    if let Some(bottom_area) = bottom_area {
        frame.render_widget(BottomBar::new(route).widget(), bottom_area);
    }

    if app.chooser().is_visible() {
        render_chooser(frame, area, app.chooser());
    }
}

fn popup_block(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER))
        .style(Style::default().bg(BRAND))
        .title(Line::from(format!(" {title} ")).style(Style::default().fg(ACCENT)))
}

fn render_chooser(frame: &mut Frame<'_>, area: Rect, chooser: &ChooserState) {
    match chooser {
        ChooserState::Hidden => {}
        ChooserState::Choosing {
            title,
            options,
            selected,
            ..
        } => {
            let height = u16::try_from(options.len()).unwrap_or(u16::MAX).saturating_add(4);
            let popup = centered_rect_by_size(area, POPUP_WIDTH, height);
            frame.render_widget(Clear, popup);

            let items: Vec<ListItem> = options
                .iter()
                .map(|option| {
                    ListItem::new(Line::from(format!(" {}", option.name)))
                        .style(Style::default().fg(HEADER_TEXT))
                })
                .collect();
            let list = List::new(items)
                .block(popup_block(title).title_bottom(
                    Line::from(" Enter: Share  Esc: Cancel ")
                        .style(Style::default().fg(MUTED_TEXT)),
                ))
                .highlight_style(
                    Style::default()
                        .bg(ACTIVE_HIGHLIGHT)
                        .fg(STATUS_OK)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("▶");
            let mut state = ListState::default().with_selected(Some(*selected));
            frame.render_stateful_widget(list, popup, &mut state);
        }
        ChooserState::NoHandler { title } => {
            let popup = centered_rect_by_size(area, POPUP_WIDTH, 5);
            frame.render_widget(Clear, popup);
            let message = Paragraph::new(vec![
                Line::from("No app can handle this action")
                    .style(Style::default().fg(STATUS_ERROR)),
                Line::from("Esc: Close").style(Style::default().fg(MUTED_TEXT)),
            ])
            .alignment(Alignment::Center)
            .block(popup_block(title));
            frame.render_widget(message, popup);
        }
    }
}
