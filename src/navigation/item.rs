use crate::navigation::route::Route;
use crate::strings::{MENU_CART, MENU_HOME, MENU_PROFILE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Home,
    ShoppingCart,
    AccountCircle,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Home => "⌂",
            Icon::ShoppingCart => "🛒",
            Icon::AccountCircle => "◉",
        }
    }
}

/// One bottom-bar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationItem {
    pub title: &'static str,
    pub icon: Icon,
    pub target: Route,
}

/// Bottom-bar entries, left to right.
pub const BOTTOM_BAR_ITEMS: [NavigationItem; 3] = [
    NavigationItem {
        title: MENU_HOME,
        icon: Icon::Home,
        target: Route::Home,
    },
    NavigationItem {
        title: MENU_CART,
        icon: Icon::ShoppingCart,
        target: Route::Cart,
    },
    NavigationItem {
        title: MENU_PROFILE,
        icon: Icon::AccountCircle,
        target: Route::Profile,
    },
];

/// Index of the bottom-bar item for `route`, if it is a tab.
pub fn selected_item(route: &Route) -> Option<usize> {
    BOTTOM_BAR_ITEMS
        .iter()
        .position(|item| item.target == *route)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_item_targets_a_tab() {
        assert!(BOTTOM_BAR_ITEMS.iter().all(|item| item.target.is_tab()));
    }

    #[test]
    fn selected_item_matches_route() {
        assert_eq!(selected_item(&Route::Home), Some(0));
        assert_eq!(selected_item(&Route::Profile), Some(2));
        assert_eq!(selected_item(&Route::detail(Some(3))), None);
    }
}
