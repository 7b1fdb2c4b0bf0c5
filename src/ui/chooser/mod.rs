//! Share chooser popup (MVI).

mod intent;
mod reducer;
mod state;

pub use intent::ChooserIntent;
pub use reducer::ChooserReducer;
pub use state::ChooserState;
