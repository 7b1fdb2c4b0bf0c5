use crate::share::{ChooserOption, ShareRequest};
use crate::ui::mvi::State;

/// Share chooser popup.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ChooserState {
    #[default]
    Hidden,
    /// Picking a handler for `request`.
    Choosing {
        title: String,
        request: ShareRequest,
        options: Vec<ChooserOption>,
        selected: usize,
    },
    /// Nothing can take the request.
    NoHandler { title: String },
}

impl State for ChooserState {}

impl ChooserState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// Handler index and request currently highlighted.
    pub fn selection(&self) -> Option<(usize, &ShareRequest)> {
        match self {
            Self::Choosing {
                request,
                options,
                selected,
                ..
            } => options
                .get(*selected)
                .map(|option| (option.handler, request)),
            _ => None,
        }
    }
}
