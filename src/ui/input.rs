use crate::navigation::Route;
use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key press to an app action.
///
/// | key                 | action                                  |
/// |---------------------|-----------------------------------------|
/// | `q`, Ctrl+C         | quit                                    |
/// | Esc, Backspace      | close chooser / navigate back           |
/// | `1` `2` `3`, Tab    | bottom-bar tabs                         |
/// | Up/Down, `k`/`j`    | move highlight                          |
/// | Enter               | open / add to cart / order / share      |
/// | `+` `-`, Right/Left | change count on the detail screen       |
/// | `o`                 | order from the cart                     |
/// | `r`                 | retry a failed load                     |
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || matches!(key.code, KeyCode::Char('q')) {
        app.request_quit();
        return;
    }

    if matches!(key.code, KeyCode::Esc | KeyCode::Backspace) {
        app.navigate_back();
        return;
    }

    if app.chooser().is_visible() {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
            KeyCode::Enter => app.confirm_chooser(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char(ch @ '1'..='3') => {
            let index = ch.to_digit(10).unwrap_or(1) as usize - 1;
            app.select_tab(index);
        }
        KeyCode::Tab => {
            app.next_tab();
        }
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Char('r') => {
            app.retry();
        }
        KeyCode::Char('o') => {
            app.order();
        }
        KeyCode::Char('+') | KeyCode::Right => app.adjust_count(1),
        KeyCode::Char('-') | KeyCode::Left => app.adjust_count(-1),
        KeyCode::Enter => match app.current_route() {
            Route::Home => {
                app.open_selected_reward();
            }
            Route::RewardDetail { .. } => {
                app.add_to_cart();
            }
            Route::Cart => {
                app.order();
            }
            Route::Profile => {}
        },
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
