//! Building blocks shared by every screen: the tri-state `UiState`, the
//! observable holder and the fetch-driven store.

mod observable;
mod store;
mod ui_state;

pub use observable::{Observable, SubscriptionId};
pub use store::{ViewStateStore, Wake};
pub use ui_state::{LoadIntent, LoadReducer, UiState};
