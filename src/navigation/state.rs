use crate::navigation::route::Route;
use crate::ui::mvi::State;
use std::collections::HashMap;

/// Per-screen view memory kept on the back stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenMemo {
    /// Highlighted row in the screen's list.
    pub selected: usize,
    /// First visible row.
    pub scroll: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackStackEntry {
    pub route: Route,
    pub memo: ScreenMemo,
}

impl BackStackEntry {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            memo: ScreenMemo::default(),
        }
    }
}

/// Back stack plus memos saved by tab navigation.
///
/// The stack is never empty: its first entry is the start destination and
/// the last entry is the current screen.
#[derive(Debug, Clone, PartialEq)]
pub struct NavState {
    pub(crate) back_stack: Vec<BackStackEntry>,
    pub(crate) saved: HashMap<Route, ScreenMemo>,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            back_stack: vec![BackStackEntry::new(Route::START)],
            saved: HashMap::new(),
        }
    }
}

impl State for NavState {}

impl NavState {
    pub fn current(&self) -> &BackStackEntry {
        // The stack always holds the start destination.
        &self.back_stack[self.back_stack.len() - 1]
    }

    pub fn current_route(&self) -> Route {
        self.current().route
    }

    pub fn routes(&self) -> Vec<Route> {
        self.back_stack.iter().map(|entry| entry.route).collect()
    }

    pub fn depth(&self) -> usize {
        self.back_stack.len()
    }

    /// Memo saved for a destination that is not currently on the stack.
    pub fn saved_memo(&self, route: &Route) -> Option<ScreenMemo> {
        self.saved.get(route).copied()
    }
}
