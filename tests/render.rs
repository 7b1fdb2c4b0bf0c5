//! Screen rendering against ratatui's test backend.

mod common;

use common::{settle, small_catalog, test_app, test_app_with};
use jetreward::data::RewardRepository;
use jetreward::ui::app::App;
use jetreward::ui::render::draw;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn screen(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[tokio::test]
async fn home_shows_loading_then_rewards() {
    let mut t = test_app();
    assert!(screen(&t.app).contains("Loading rewards"));

    settle(&mut t.app, |app| app.home_state().data().is_some()).await;
    let text = screen(&t.app);
    assert!(text.contains("JetReward"));
    assert!(text.contains("Hoodie"));
    assert!(text.contains("7500 pts"));
    assert!(text.contains("Home"));
    assert!(text.contains("Cart"));
    assert!(text.contains("Profile"));
}

#[tokio::test]
async fn detail_hides_bottom_bar() {
    let mut t = test_app();
    t.app.open_detail(Some(2));
    settle(&mut t.app, |app| app.detail_state().data().is_some()).await;
    t.app.adjust_count(1);

    let text = screen(&t.app);
    assert!(text.contains("Reward Detail"));
    assert!(text.contains("Tumbler"));
    assert!(text.contains("Required points: 3000"));
    assert!(text.contains(" 1 "));
    assert!(text.contains("Add to cart"));
    assert!(!text.contains("Profile"));
}

#[tokio::test]
async fn sentinel_detail_shows_not_found() {
    let mut t = test_app();
    t.app.open_detail(None);
    assert!(screen(&t.app).contains("Reward not found"));
}

#[tokio::test]
async fn error_offers_retry() {
    let mut t = test_app();
    t.repository.set_failing(true);
    t.app.select_tab(1);
    settle(&mut t.app, |app| app.cart_state().error_message().is_some()).await;

    let text = screen(&t.app);
    assert!(text.contains("offline"));
    assert!(text.contains("Press r to retry"));
}

#[tokio::test]
async fn empty_cart_message() {
    let mut t = test_app();
    t.app.select_tab(1);
    settle(&mut t.app, |app| app.cart_state().data().is_some()).await;
    assert!(screen(&t.app).contains("Your cart is empty"));
}

#[tokio::test]
async fn profile_shows_configured_identity() {
    let mut t = test_app();
    t.app.select_tab(2);
    let text = screen(&t.app);
    assert!(text.contains("Jetpack Compose Learner"));
    assert!(text.contains("learner@dicoding.com"));
}

#[tokio::test]
async fn chooser_popup_lists_handlers() {
    let mut t = test_app();
    t.repository.update_order_reward(0, 2).unwrap();
    t.app.select_tab(1);
    settle(&mut t.app, |app| app.cart_state().data().is_some()).await;
    assert!(screen(&t.app).contains("2 x Hoodie"));

    t.app.order();
    let text = screen(&t.app);
    assert!(text.contains("Dicoding Reward"));
    assert!(text.contains("Recorder"));
}

#[tokio::test]
async fn no_handler_popup() {
    let mut t = test_app_with(small_catalog(), false);
    t.repository.update_order_reward(0, 1).unwrap();
    t.app.select_tab(1);
    settle(&mut t.app, |app| app.cart_state().data().is_some()).await;
    t.app.order();
    assert!(screen(&t.app).contains("No app can handle this action"));
}
