//! Reward data: model types, the repository seam and its in-memory source.

mod catalog;
mod model;
mod repository;

pub use catalog::default_catalog;
pub use model::{OrderReward, Reward};
pub use repository::{InMemoryRewardRepository, RepositoryError, RewardRepository, RewardStream};
