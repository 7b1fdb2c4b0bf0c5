//! Routes, back stack and the navigation controller.
//!
//! Navigation follows the MVI pattern:
//! - `state.rs` - back stack with per-entry memos
//! - `intent.rs` - navigation requests
//! - `reducer.rs` - stack transitions (pure)
//! - `controller.rs` - owns the state and notifies subscribers

mod controller;
mod intent;
mod item;
mod reducer;
mod route;
mod state;

pub use controller::NavController;
pub use intent::NavIntent;
pub use item::{selected_item, Icon, NavigationItem, BOTTOM_BAR_ITEMS};
pub use reducer::NavReducer;
pub use route::{bottom_bar_visible, Route, RouteError, SENTINEL_REWARD_ID};
pub use state::{BackStackEntry, NavState, ScreenMemo};
