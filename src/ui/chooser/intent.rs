use crate::share::{ChooserOption, ShareRequest};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ChooserIntent {
    /// Present the handlers able to take `request`.
    Open {
        title: String,
        request: ShareRequest,
        options: Vec<ChooserOption>,
    },
    MoveUp,
    MoveDown,
    Close,
}

impl Intent for ChooserIntent {}
