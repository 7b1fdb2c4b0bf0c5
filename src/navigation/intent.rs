use crate::navigation::route::Route;
use crate::navigation::state::ScreenMemo;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum NavIntent {
    /// Go to a route. Tab destinations navigate single-top.
    NavigateTo(Route),
    /// Open the detail screen; `None` or a negative id means "no usable id".
    NavigateToDetail(Option<i64>),
    /// Pop one entry unless only the start destination is left.
    Back,
    /// Drop the detail entry, then go to the Cart tab.
    CartFromDetail,
    /// Remember the current screen's selection and scroll.
    UpdateMemo(ScreenMemo),
}

impl Intent for NavIntent {}
