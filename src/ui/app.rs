use crate::config::ProfileConfig;
use crate::data::{OrderReward, RewardRepository};
use crate::navigation::{selected_item, NavController, Route, RouteError, ScreenMemo, BOTTOM_BAR_ITEMS};
use crate::share::{order_summary, ShareRequest, ShareSheet};
use crate::strings::DICODING_REWARD;
use crate::ui::chooser::{ChooserIntent, ChooserReducer, ChooserState};
use crate::ui::common::{UiState, ViewStateStore, Wake};
use crate::ui::layout::tab_body_height;
use crate::ui::mvi::Reducer;
use std::sync::Arc;
use tokio::runtime::Handle;

const MAX_ORDER_COUNT: u32 = 99;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Collaborators handed to the [`App`] at construction.
pub struct AppContext {
    pub runtime: Handle,
    pub repository: Arc<dyn RewardRepository>,
    pub share_sheet: ShareSheet,
    pub profile: ProfileConfig,
    /// Called from fetch tasks when a result is ready to be pumped.
    pub wake: Option<Wake>,
}

/// Application state: navigation, per-screen stores and the share chooser.
///
/// The Home store lives as long as the app. Cart and Detail stores belong
/// to their screens and are disposed when the screen leaves the top of the
/// back stack.
pub struct App {
    should_quit: bool,
    nav: NavController,
    mounted: Route,
    runtime: Handle,
    repository: Arc<dyn RewardRepository>,
    home: ViewStateStore<Vec<OrderReward>>,
    cart: ViewStateStore<Vec<OrderReward>>,
    detail: ViewStateStore<OrderReward>,
    /// Count picked on the detail screen; `None` until the user changes it.
    detail_count: Option<u32>,
    chooser: ChooserState,
    share_sheet: ShareSheet,
    profile: ProfileConfig,
    status: Option<String>,
    list_rows: usize,
}

impl App {
    pub fn new(context: AppContext) -> Self {
        let AppContext {
            runtime,
            repository,
            share_sheet,
            profile,
            wake,
        } = context;
        let mut app = Self {
            should_quit: false,
            nav: NavController::new(),
            mounted: Route::START,
            runtime,
            repository,
            home: ViewStateStore::new("home").with_wake(wake.clone()),
            cart: ViewStateStore::new("cart").with_wake(wake.clone()),
            detail: ViewStateStore::new("detail").with_wake(wake),
            detail_count: None,
            chooser: ChooserState::default(),
            share_sheet,
            profile,
            status: None,
            list_rows: usize::MAX,
        };
        app.mount(Route::START);
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn nav(&self) -> &NavController {
        &self.nav
    }

    /// Mutable access for observers; route changes made through it are
    /// picked up by the next [`App::on_tick`].
    pub fn nav_mut(&mut self) -> &mut NavController {
        &mut self.nav
    }

    pub fn current_route(&self) -> Route {
        self.nav.current_route()
    }

    pub fn shows_bottom_bar(&self) -> bool {
        self.nav.shows_bottom_bar()
    }

    pub fn memo(&self) -> ScreenMemo {
        self.nav.current_memo()
    }

    pub fn home_state(&self) -> &UiState<Vec<OrderReward>> {
        self.home.state()
    }

    pub fn cart_state(&self) -> &UiState<Vec<OrderReward>> {
        self.cart.state()
    }

    pub fn detail_state(&self) -> &UiState<OrderReward> {
        self.detail.state()
    }

    /// Count shown on the detail screen: the user's pick, else the count
    /// already stored for the reward.
    pub fn detail_count(&self) -> u32 {
        self.detail_count
            .or_else(|| self.detail.state().data().map(|order| order.count))
            .unwrap_or(0)
    }

    pub fn chooser(&self) -> &ChooserState {
        &self.chooser
    }

    pub fn profile(&self) -> &ProfileConfig {
        &self.profile
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Apply fetch results that have arrived and follow route changes.
    pub fn on_tick(&mut self) {
        self.sync_route();
        self.on_data_ready();
    }

    pub fn on_data_ready(&mut self) {
        self.home.pump();
        self.cart.pump();
        self.detail.pump();
    }

    /// Record how many list rows fit on a terminal `rows` high.
    pub fn on_resize(&mut self, rows: u16) {
        // Borders take two rows.
        self.list_rows = usize::from(tab_body_height(rows).saturating_sub(2)).max(1);
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Switch to the bottom-bar item at `index`. Ignored while the bar is hidden.
    pub fn select_tab(&mut self, index: usize) -> bool {
        if !self.shows_bottom_bar() {
            return false;
        }
        let Some(item) = BOTTOM_BAR_ITEMS.get(index) else {
            return false;
        };
        self.status = None;
        self.nav.navigate_to(item.target);
        self.sync_route();
        true
    }

    pub fn next_tab(&mut self) -> bool {
        let current = selected_item(&self.current_route()).unwrap_or(0);
        self.select_tab((current + 1) % BOTTOM_BAR_ITEMS.len())
    }

    /// Open the detail screen for the highlighted reward on Home.
    pub fn open_selected_reward(&mut self) -> bool {
        if self.current_route() != Route::Home {
            return false;
        }
        let selected = self.memo().selected;
        let Some(reward_id) = self
            .home
            .state()
            .data()
            .and_then(|orders| orders.get(selected))
            .map(|order| order.reward.id)
        else {
            return false;
        };
        self.open_detail(Some(reward_id));
        true
    }

    pub fn open_detail(&mut self, reward_id: Option<i64>) {
        self.status = None;
        self.nav.navigate_to_detail(reward_id);
        self.sync_route();
    }

    /// Back: closes the chooser first, then pops the stack. At the start
    /// destination there is nothing to pop and the app exits.
    pub fn navigate_back(&mut self) {
        if self.chooser.is_visible() {
            self.dispatch_chooser(ChooserIntent::Close);
            return;
        }
        self.status = None;
        if !self.nav.navigate_back() {
            tracing::info!("back at start destination, exiting");
            self.request_quit();
            return;
        }
        self.sync_route();
    }

    pub fn open_deep_link(&mut self, path: &str) -> Result<Route, RouteError> {
        let route = self.nav.open_deep_link(path)?;
        self.sync_route();
        Ok(route)
    }

    // ========================================================================
    // Screen actions
    // ========================================================================

    /// Move the highlight in the chooser or the current list, wrapping around.
    pub fn move_selection(&mut self, delta: isize) {
        if self.chooser.is_visible() {
            let intent = if delta < 0 {
                ChooserIntent::MoveUp
            } else {
                ChooserIntent::MoveDown
            };
            self.dispatch_chooser(intent);
            return;
        }

        let len = match self.current_route() {
            Route::Home => self.home.state().data().map_or(0, Vec::len),
            Route::Cart => self.cart.state().data().map_or(0, Vec::len),
            Route::Profile | Route::RewardDetail { .. } => 0,
        };
        if len == 0 {
            return;
        }

        let memo = self.memo();
        let current = memo.selected.min(len - 1) as isize;
        let selected = (current + delta).rem_euclid(len as isize) as usize;
        let scroll = if selected < memo.scroll {
            selected
        } else if selected >= memo.scroll.saturating_add(self.list_rows) {
            selected + 1 - self.list_rows
        } else {
            memo.scroll
        };
        self.nav.update_memo(ScreenMemo { selected, scroll });
    }

    /// Change the order count on the detail screen.
    pub fn adjust_count(&mut self, delta: i32) {
        if self.detail.state().data().is_none() {
            return;
        }
        let count = (i64::from(self.detail_count()) + i64::from(delta))
            .clamp(0, i64::from(MAX_ORDER_COUNT));
        self.detail_count = Some(count as u32);
    }

    /// Store the picked count and go to the cart, leaving Detail out of history.
    pub fn add_to_cart(&mut self) -> bool {
        let count = self.detail_count();
        let Some(reward_id) = self.detail.state().data().map(|order| order.reward.id) else {
            return false;
        };
        if count == 0 {
            return false;
        }
        match self.repository.update_order_reward(reward_id, count) {
            Ok(true) => {
                self.nav.navigate_to_cart_from_detail();
                self.sync_route();
                true
            }
            Ok(false) => {
                self.status = Some(format!("Reward {reward_id} no longer exists"));
                false
            }
            Err(err) => {
                tracing::warn!(reward_id, error = %err, "failed to update cart");
                self.status = Some(err.to_string());
                false
            }
        }
    }

    /// Share the cart's order summary through the share chooser.
    pub fn order(&mut self) -> bool {
        if self.current_route() != Route::Cart {
            return false;
        }
        let Some(orders) = self.cart.state().data() else {
            return false;
        };
        if orders.is_empty() {
            return false;
        }
        let request = ShareRequest::order_summary(&order_summary(orders));
        let options = self.share_sheet.chooser_for(&request);
        self.dispatch_chooser(ChooserIntent::Open {
            title: DICODING_REWARD.to_string(),
            request,
            options,
        });
        true
    }

    /// Deliver the request to the highlighted handler and close the chooser.
    pub fn confirm_chooser(&mut self) {
        if let Some((handler, request)) = self.chooser.selection() {
            let request = request.clone();
            self.status = Some(match self.share_sheet.deliver(handler, &request) {
                Ok(name) => format!("Shared via {name}"),
                Err(err) => {
                    tracing::warn!(error = %err, "share failed");
                    err.to_string()
                }
            });
        }
        self.dispatch_chooser(ChooserIntent::Close);
    }

    /// Re-run the current screen's fetch after an error.
    pub fn retry(&mut self) -> bool {
        match self.current_route() {
            Route::Home if self.home.state().error_message().is_some() => {
                self.load_home();
                true
            }
            Route::Cart if self.cart.state().error_message().is_some() => {
                self.load_cart();
                true
            }
            Route::RewardDetail { reward_id } if self.detail.state().error_message().is_some() => {
                self.load_detail(reward_id);
                true
            }
            _ => false,
        }
    }

    // ========================================================================
    // Screen lifecycle
    // ========================================================================

    fn sync_route(&mut self) {
        let route = self.nav.current_route();
        if route == self.mounted {
            return;
        }
        let previous = std::mem::replace(&mut self.mounted, route);
        self.unmount(previous);
        self.mount(route);
    }

    fn mount(&mut self, route: Route) {
        tracing::debug!(%route, "screen mounted");
        match route {
            Route::Home => {
                if self.home.state().is_loading() && !self.home.is_pending() {
                    self.load_home();
                }
            }
            Route::Cart => self.load_cart(),
            Route::RewardDetail { reward_id } => self.load_detail(reward_id),
            Route::Profile => {}
        }
    }

    fn unmount(&mut self, route: Route) {
        match route {
            Route::Cart => self.cart.dispose(),
            Route::RewardDetail { .. } => {
                self.detail.dispose();
                self.detail_count = None;
            }
            Route::Home | Route::Profile => {}
        }
    }

    fn load_home(&mut self) {
        self.home
            .load(&self.runtime, self.repository.get_all_rewards());
    }

    fn load_cart(&mut self) {
        self.cart
            .load(&self.runtime, self.repository.get_added_order_rewards());
    }

    fn load_detail(&mut self, reward_id: i64) {
        // The sentinel id is rendered as "not found" without a fetch.
        if reward_id < 0 {
            return;
        }
        self.detail.load(
            &self.runtime,
            self.repository.get_order_reward_by_id(reward_id),
        );
    }

    fn dispatch_chooser(&mut self, intent: ChooserIntent) {
        dispatch_mvi!(self, chooser, ChooserReducer, intent);
    }
}
