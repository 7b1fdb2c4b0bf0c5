//! User-facing text.

pub const APP_NAME: &str = "JetReward";
pub const MENU_HOME: &str = "Home";
pub const MENU_CART: &str = "Cart";
pub const MENU_PROFILE: &str = "Profile";
pub const DETAIL_TITLE: &str = "Reward Detail";

/// Subject of shared orders and title of the share chooser.
pub const DICODING_REWARD: &str = "Dicoding Reward";
