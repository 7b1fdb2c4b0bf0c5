use crate::navigation::intent::NavIntent;
use crate::navigation::route::Route;
use crate::navigation::state::{BackStackEntry, NavState};
use crate::ui::mvi::Reducer;

pub struct NavReducer;

impl Reducer for NavReducer {
    type State = NavState;
    type Intent = NavIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NavIntent::NavigateTo(route) if route.is_tab() => navigate_single_top(state, route),
            NavIntent::NavigateTo(route) => push(state, route),
            NavIntent::NavigateToDetail(reward_id) => push(state, Route::detail(reward_id)),
            NavIntent::Back => pop(state),
            NavIntent::CartFromDetail => {
                let state = if matches!(state.current_route(), Route::RewardDetail { .. }) {
                    pop(state)
                } else {
                    state
                };
                navigate_single_top(state, Route::Cart)
            }
            NavIntent::UpdateMemo(memo) => {
                let mut state = state;
                if let Some(top) = state.back_stack.last_mut() {
                    top.memo = memo;
                }
                state
            }
        }
    }
}

fn push(mut state: NavState, route: Route) -> NavState {
    state.back_stack.push(BackStackEntry::new(route));
    state
}

fn pop(mut state: NavState) -> NavState {
    if state.back_stack.len() > 1 {
        state.back_stack.pop();
    }
    state
}

/// Pop everything above the start destination, saving the memos of popped
/// tabs, then put `route` on top unless it already is the start destination.
///
/// Only tabs are saved: pushes never restore, so a detail memo would never
/// be read back.
fn navigate_single_top(mut state: NavState, route: Route) -> NavState {
    for popped in state.back_stack.drain(1..) {
        if popped.route.is_tab() {
            state.saved.insert(popped.route, popped.memo);
        }
    }

    if state.back_stack[0].route == route {
        return state;
    }

    let memo = state.saved.remove(&route).unwrap_or_default();
    state.back_stack.push(BackStackEntry { route, memo });
    state
}
