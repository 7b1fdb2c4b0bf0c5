use crate::ui::chooser::intent::ChooserIntent;
use crate::ui::chooser::state::ChooserState;
use crate::ui::mvi::Reducer;

pub struct ChooserReducer;

impl Reducer for ChooserReducer {
    type State = ChooserState;
    type Intent = ChooserIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ChooserIntent::Open {
                title,
                request,
                options,
            } => {
                if options.is_empty() {
                    ChooserState::NoHandler { title }
                } else {
                    ChooserState::Choosing {
                        title,
                        request,
                        options,
                        selected: 0,
                    }
                }
            }
            ChooserIntent::Close => ChooserState::Hidden,
            ChooserIntent::MoveUp => match state {
                ChooserState::Choosing {
                    title,
                    request,
                    options,
                    selected,
                } => {
                    let selected = if selected == 0 {
                        options.len().saturating_sub(1)
                    } else {
                        selected - 1
                    };
                    ChooserState::Choosing {
                        title,
                        request,
                        options,
                        selected,
                    }
                }
                other => other,
            },
            ChooserIntent::MoveDown => match state {
                ChooserState::Choosing {
                    title,
                    request,
                    options,
                    selected,
                } => {
                    let selected = if selected + 1 >= options.len() {
                        0
                    } else {
                        selected + 1
                    };
                    ChooserState::Choosing {
                        title,
                        request,
                        options,
                        selected,
                    }
                }
                other => other,
            },
        }
    }
}
