use crate::data::catalog::default_catalog;
use crate::data::model::{OrderReward, Reward};
use futures::stream::{self, BoxStream, StreamExt};
use parking_lot::RwLock;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("Reward {reward_id} not found")]
    NotFound { reward_id: i64 },

    #[error("{0}")]
    Unavailable(String),
}

/// Lazy, single-shot result of a repository query.
pub type RewardStream<T> = BoxStream<'static, Result<T, RepositoryError>>;

/// Source of reward data.
///
/// Queries return streams that do nothing until polled and yield one
/// value or one error.
pub trait RewardRepository: Send + Sync {
    fn get_all_rewards(&self) -> RewardStream<Vec<OrderReward>>;

    fn get_order_reward_by_id(&self, reward_id: i64) -> RewardStream<OrderReward>;

    /// Rewards with a non-zero count.
    fn get_added_order_rewards(&self) -> RewardStream<Vec<OrderReward>>;

    /// Set the cart count of a reward. Returns whether the reward exists.
    fn update_order_reward(&self, reward_id: i64, count: u32) -> Result<bool, RepositoryError>;
}

/// Repository backed by an in-memory catalog.
///
/// `latency` is slept before every query resolves; `failure`, when set,
/// turns every query into an `Unavailable` error.
#[derive(Clone)]
pub struct InMemoryRewardRepository {
    orders: Arc<RwLock<Vec<OrderReward>>>,
    latency: Duration,
    failure: Option<String>,
}

impl InMemoryRewardRepository {
    pub fn new(catalog: Vec<Reward>) -> Self {
        let catalog = if catalog.is_empty() {
            default_catalog()
        } else {
            catalog
        };
        Self {
            orders: Arc::new(RwLock::new(
                catalog.into_iter().map(OrderReward::new).collect(),
            )),
            latency: Duration::ZERO,
            failure: None,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_failure(mut self, failure: Option<String>) -> Self {
        self.failure = failure;
        self
    }

    fn query<T, F, Fut>(&self, f: F) -> RewardStream<T>
    where
        T: Send + 'static,
        F: FnOnce(Arc<RwLock<Vec<OrderReward>>>) -> Fut + Send + 'static,
        Fut: Future<Output = Result<T, RepositoryError>> + Send + 'static,
    {
        let orders = Arc::clone(&self.orders);
        let latency = self.latency;
        let failure = self.failure.clone();
        stream::once(async move {
            if !latency.is_zero() {
                tokio::time::sleep(latency).await;
            }
            if let Some(message) = failure {
                return Err(RepositoryError::Unavailable(message));
            }
            f(orders).await
        })
        .boxed()
    }
}

impl Default for InMemoryRewardRepository {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl RewardRepository for InMemoryRewardRepository {
    fn get_all_rewards(&self) -> RewardStream<Vec<OrderReward>> {
        self.query(|orders| async move {
            let rewards = orders.read().clone();
            Ok(rewards)
        })
    }

    fn get_order_reward_by_id(&self, reward_id: i64) -> RewardStream<OrderReward> {
        self.query(move |orders| async move {
            let found = orders
                .read()
                .iter()
                .find(|order| order.reward.id == reward_id)
                .cloned();
            found.ok_or(RepositoryError::NotFound { reward_id })
        })
    }

    fn get_added_order_rewards(&self) -> RewardStream<Vec<OrderReward>> {
        self.query(|orders| async move {
            let added: Vec<OrderReward> = orders
                .read()
                .iter()
                .filter(|order| order.in_cart())
                .cloned()
                .collect();
            Ok(added)
        })
    }

    fn update_order_reward(&self, reward_id: i64, count: u32) -> Result<bool, RepositoryError> {
        let mut orders = self.orders.write();
        let Some(order) = orders.iter_mut().find(|order| order.reward.id == reward_id) else {
            return Ok(false);
        };
        order.count = count;
        tracing::info!(reward_id, count, "order count updated");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repository() -> InMemoryRewardRepository {
        InMemoryRewardRepository::new(vec![
            Reward {
                id: 0,
                image: "a".to_string(),
                title: "Hoodie".to_string(),
                required_point: 7500,
            },
            Reward {
                id: 1,
                image: "b".to_string(),
                title: "Sticker".to_string(),
                required_point: 250,
            },
        ])
    }

    #[tokio::test]
    async fn all_rewards_yield_once() {
        let items: Vec<_> = repository().get_all_rewards().collect().await;
        assert_eq!(items.len(), 1);
        let rewards = items[0].as_ref().unwrap();
        assert_eq!(rewards.len(), 2);
        assert!(rewards.iter().all(|order| order.count == 0));
    }

    #[tokio::test]
    async fn empty_catalog_uses_default() {
        let mut stream = InMemoryRewardRepository::default().get_all_rewards();
        let rewards = stream.next().await.unwrap().unwrap();
        assert_eq!(rewards.len(), default_catalog().len());
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let mut stream = repository().get_order_reward_by_id(42);
        assert_eq!(
            stream.next().await,
            Some(Err(RepositoryError::NotFound { reward_id: 42 }))
        );
    }

    #[tokio::test]
    async fn update_shows_in_added_rewards() {
        let repository = repository();
        assert_eq!(repository.update_order_reward(1, 3), Ok(true));
        assert_eq!(repository.update_order_reward(9, 3), Ok(false));

        let added = repository
            .get_added_order_rewards()
            .next()
            .await
            .unwrap()
            .unwrap();
        assert_eq!(added.len(), 1);
        assert_eq!(added[0].reward.title, "Sticker");
        assert_eq!(added[0].count, 3);
    }

    #[tokio::test]
    async fn failure_applies_to_every_query() {
        let repository = repository().with_failure(Some("offline".to_string()));
        let mut stream = repository.get_all_rewards();
        assert_eq!(
            stream.next().await,
            Some(Err(RepositoryError::Unavailable("offline".to_string())))
        );
        assert!(stream.next().await.is_none());
    }

    #[tokio::test]
    async fn stream_is_lazy() {
        let repository = repository();
        let stream = repository.get_all_rewards();
        repository.update_order_reward(0, 2).unwrap();
        let rewards: Vec<_> = stream.collect().await;
        assert_eq!(rewards[0].as_ref().unwrap()[0].count, 2);
    }
}
