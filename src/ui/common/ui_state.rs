//! Tri-state wrapper for one asynchronous load.

use crate::ui::mvi::{Intent, Reducer, State};
use std::marker::PhantomData;

/// Lifecycle of a screen's data fetch.
///
/// Exactly one variant is active. A fresh store starts in `Loading`; a fetch
/// ends in `Success` or `Error`, and a re-fetch goes back to `Loading`.
#[derive(Debug, Clone, PartialEq)]
pub enum UiState<T> {
    Loading,
    Success(T),
    Error(String),
}

// Manual impl: `Loading` needs no `T: Default`.
impl<T> Default for UiState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T: Clone + PartialEq + Send + 'static> State for UiState<T> {}

impl<T> UiState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Short label used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Success(_) => "success",
            Self::Error(_) => "error",
        }
    }
}

/// Events that drive a [`UiState`].
#[derive(Debug, Clone, PartialEq)]
pub enum LoadIntent<T> {
    /// A fetch is starting (or restarting).
    Started,
    /// The source produced a value.
    Loaded(T),
    /// The source failed with a message.
    Failed(String),
}

impl<T: Send + 'static> Intent for LoadIntent<T> {}

/// Reducer for [`UiState`], generic over the loaded value.
pub struct LoadReducer<T>(PhantomData<T>);

impl<T: Clone + PartialEq + Send + 'static> Reducer for LoadReducer<T> {
    type State = UiState<T>;
    type Intent = LoadIntent<T>;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LoadIntent::Started => UiState::Loading,
            LoadIntent::Loaded(value) => UiState::Success(value),
            LoadIntent::Failed(message) => UiState::Error(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Reducer = LoadReducer<Vec<u32>>;

    #[test]
    fn loading_is_default() {
        assert_eq!(UiState::<u32>::default(), UiState::Loading);
    }

    #[test]
    fn loaded_moves_to_success() {
        let state = <Reducer as crate::ui::mvi::Reducer>::reduce(
            UiState::Loading,
            LoadIntent::Loaded(vec![1, 2]),
        );
        assert_eq!(state.data(), Some(&vec![1, 2]));
        assert_eq!(state.error_message(), None);
    }

    #[test]
    fn failed_moves_to_error() {
        let state = <Reducer as crate::ui::mvi::Reducer>::reduce(
            UiState::Loading,
            LoadIntent::Failed("offline".to_string()),
        );
        assert_eq!(state.error_message(), Some("offline"));
        assert!(state.data().is_none());
    }

    #[test]
    fn restart_resets_to_loading() {
        let state = <Reducer as crate::ui::mvi::Reducer>::reduce(
            UiState::Error("offline".to_string()),
            LoadIntent::Started,
        );
        assert!(state.is_loading());
    }

    #[test]
    fn labels() {
        assert_eq!(UiState::<u8>::Loading.label(), "loading");
        assert_eq!(UiState::Success(1u8).label(), "success");
        assert_eq!(UiState::<u8>::Error(String::new()).label(), "error");
    }
}
