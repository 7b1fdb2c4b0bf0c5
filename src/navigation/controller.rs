use crate::navigation::intent::NavIntent;
use crate::navigation::reducer::NavReducer;
use crate::navigation::route::{bottom_bar_visible, Route, RouteError};
use crate::navigation::state::{NavState, ScreenMemo};
use crate::ui::common::{Observable, SubscriptionId};
use crate::ui::mvi::Reducer;

/// Owns the back stack and applies navigation requests to it.
///
/// Every request goes through [`NavReducer`]; subscribers are notified once
/// per request, after the new stack is in place.
#[derive(Default)]
pub struct NavController {
    state: Observable<NavState>,
}

impl NavController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &NavState {
        self.state.get()
    }

    pub fn current_route(&self) -> Route {
        self.state.get().current_route()
    }

    pub fn back_stack(&self) -> Vec<Route> {
        self.state.get().routes()
    }

    pub fn current_memo(&self) -> ScreenMemo {
        self.state.get().current().memo
    }

    pub fn shows_bottom_bar(&self) -> bool {
        bottom_bar_visible(&self.current_route())
    }

    pub fn navigate_to(&mut self, route: Route) {
        self.dispatch(NavIntent::NavigateTo(route));
    }

    pub fn navigate_to_detail(&mut self, reward_id: Option<i64>) {
        self.dispatch(NavIntent::NavigateToDetail(reward_id));
    }

    /// Pop the current screen. Returns false when only the start
    /// destination is left, in which case the host decides what to do.
    pub fn navigate_back(&mut self) -> bool {
        if self.state.get().depth() <= 1 {
            return false;
        }
        self.dispatch(NavIntent::Back);
        true
    }

    pub fn navigate_to_cart_from_detail(&mut self) {
        self.dispatch(NavIntent::CartFromDetail);
    }

    /// Navigate to a string route such as `detailreward/3`.
    pub fn open_deep_link(&mut self, path: &str) -> Result<Route, RouteError> {
        let route: Route = path.parse()?;
        match route {
            Route::RewardDetail { reward_id } => self.navigate_to_detail(Some(reward_id)),
            other => self.navigate_to(other),
        }
        Ok(route)
    }

    pub fn update_memo(&mut self, memo: ScreenMemo) {
        if self.current_memo() != memo {
            self.dispatch(NavIntent::UpdateMemo(memo));
        }
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&NavState) + Send + 'static) -> SubscriptionId {
        self.state.subscribe(observer)
    }

    /// Like [`subscribe`](Self::subscribe), but only called when the
    /// current route changes. Memo updates and no-op tab presses are skipped.
    pub fn subscribe_route(
        &mut self,
        mut observer: impl FnMut(Route) + Send + 'static,
    ) -> SubscriptionId {
        let mut last = self.current_route();
        self.state.subscribe(move |state| {
            let route = state.current_route();
            if route != last {
                last = route;
                observer(route);
            }
        })
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.state.unsubscribe(id)
    }

    fn dispatch(&mut self, intent: NavIntent) {
        tracing::debug!(?intent, "navigation request");
        self.state.update(|state| NavReducer::reduce(state, intent));
        tracing::debug!(route = %self.current_route(), depth = self.state.get().depth(), "navigated");
    }
}
