use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Reward id used when a detail route arrives without a usable id.
pub const SENTINEL_REWARD_ID: i64 = -1;

const DETAIL_PREFIX: &str = "detailreward";

/// A navigable screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Cart,
    Profile,
    RewardDetail { reward_id: i64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("Unknown route '{0}'")]
    Unknown(String),
}

impl Route {
    /// Destination at the base of the back stack.
    pub const START: Route = Route::Home;

    /// Route pattern for the detail screen.
    pub const DETAIL_PATTERN: &'static str = "detailreward/{rewardId}";

    /// Detail route for an optional id. Missing or negative ids become
    /// [`SENTINEL_REWARD_ID`].
    pub fn detail(reward_id: Option<i64>) -> Self {
        let reward_id = reward_id
            .filter(|id| *id >= 0)
            .unwrap_or(SENTINEL_REWARD_ID);
        Route::RewardDetail { reward_id }
    }

    /// Concrete path, e.g. `detailreward/4`.
    pub fn path(&self) -> String {
        match self {
            Route::RewardDetail { reward_id } => format!("{DETAIL_PREFIX}/{reward_id}"),
            other => other.pattern().to_string(),
        }
    }

    /// Route key with parameters left as placeholders.
    pub fn pattern(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Cart => "cart",
            Route::Profile => "profile",
            Route::RewardDetail { .. } => Self::DETAIL_PATTERN,
        }
    }

    /// Bottom-bar destinations navigate single-top.
    pub fn is_tab(&self) -> bool {
        matches!(self, Route::Home | Route::Cart | Route::Profile)
    }

    pub fn reward_id(&self) -> Option<i64> {
        match self {
            Route::RewardDetail { reward_id } => Some(*reward_id),
            _ => None,
        }
    }
}

/// Bottom bar is hidden on the detail screen and shown everywhere else.
pub fn bottom_bar_visible(route: &Route) -> bool {
    !matches!(route, Route::RewardDetail { .. })
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let path = path.trim().trim_matches('/');
        let (head, argument) = match path.split_once('/') {
            Some((head, argument)) => (head, Some(argument)),
            None => (path, None),
        };

        match (head, argument) {
            ("home", None) => Ok(Route::Home),
            ("cart", None) => Ok(Route::Cart),
            ("profile", None) => Ok(Route::Profile),
            (DETAIL_PREFIX, argument) => {
                let reward_id = argument.and_then(|raw| raw.parse::<i64>().ok());
                Ok(Route::detail(reward_id))
            }
            _ => Err(RouteError::Unknown(path.to_string())),
        }
    }
}
