use ratatui::layout::Rect;

/// Split the screen into top bar, body and (when shown) bottom bar.
pub fn layout_regions(area: Rect, bottom_bar: bool) -> (Rect, Rect, Option<Rect>) {
    let header_height = area.height.min(3);
    let footer_height = if bottom_bar {
        3.min(area.height.saturating_sub(header_height))
    } else {
        0
    };
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, bottom_bar.then_some(footer))
}

/// Body height of a `rows`-high screen on a tab. Only tabs show lists, so
/// this is the height lists scroll in whatever the current route is.
pub fn tab_body_height(rows: u16) -> u16 {
    layout_regions(Rect::new(0, 0, 1, rows), true).1.height
}

/// Rect of the given size centered in `area`, clamped to fit.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
