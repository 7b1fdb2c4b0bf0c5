use serde::{Deserialize, Serialize};

/// A redeemable reward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub id: i64,
    /// Image resource name.
    pub image: String,
    pub title: String,
    pub required_point: u32,
}

/// A reward together with how many of it are in the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderReward {
    pub reward: Reward,
    pub count: u32,
}

impl OrderReward {
    pub fn new(reward: Reward) -> Self {
        Self { reward, count: 0 }
    }

    pub fn in_cart(&self) -> bool {
        self.count > 0
    }
}
