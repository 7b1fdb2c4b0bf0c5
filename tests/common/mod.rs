//! Shared test utilities: an app wired to an instant in-memory repository
//! and a share handler that records what it receives.

#![allow(dead_code, unused_imports)]

use futures::StreamExt;
use jetreward::config::ProfileConfig;
use jetreward::data::{
    InMemoryRewardRepository, OrderReward, RepositoryError, Reward, RewardRepository,
    RewardStream,
};
use jetreward::share::{ShareError, ShareHandler, ShareRequest, ShareSheet};
use jetreward::ui::app::{App, AppContext};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

pub fn reward(id: i64, title: &str, required_point: u32) -> Reward {
    Reward {
        id,
        image: format!("reward_{id}"),
        title: title.to_string(),
        required_point,
    }
}

pub fn small_catalog() -> Vec<Reward> {
    vec![
        reward(0, "Hoodie", 7500),
        reward(1, "Sticker", 250),
        reward(2, "Tumbler", 3000),
    ]
}

/// Repository whose queries can be switched to fail at runtime.
#[derive(Clone)]
pub struct FlakyRepository {
    inner: InMemoryRewardRepository,
    failing: Arc<AtomicBool>,
}

impl FlakyRepository {
    pub fn new(catalog: Vec<Reward>) -> Self {
        Self {
            inner: InMemoryRewardRepository::new(catalog),
            failing: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn guard<T: Send + 'static>(&self, stream: RewardStream<T>) -> RewardStream<T> {
        if self.failing.load(Ordering::SeqCst) {
            futures::stream::iter([Err(RepositoryError::Unavailable("offline".to_string()))])
                .boxed()
        } else {
            stream
        }
    }
}

impl RewardRepository for FlakyRepository {
    fn get_all_rewards(&self) -> RewardStream<Vec<OrderReward>> {
        self.guard(self.inner.get_all_rewards())
    }

    fn get_order_reward_by_id(&self, reward_id: i64) -> RewardStream<OrderReward> {
        self.guard(self.inner.get_order_reward_by_id(reward_id))
    }

    fn get_added_order_rewards(&self) -> RewardStream<Vec<OrderReward>> {
        self.guard(self.inner.get_added_order_rewards())
    }

    fn update_order_reward(&self, reward_id: i64, count: u32) -> Result<bool, RepositoryError> {
        self.inner.update_order_reward(reward_id, count)
    }
}

/// Share handler that keeps every delivered request.
pub struct RecordingHandler {
    pub received: Arc<Mutex<Vec<ShareRequest>>>,
}

impl ShareHandler for RecordingHandler {
    fn name(&self) -> &str {
        "Recorder"
    }

    fn accepts(&self, request: &ShareRequest) -> bool {
        request.is_plain_text()
    }

    fn deliver(&mut self, request: &ShareRequest) -> Result<(), ShareError> {
        self.received.lock().push(request.clone());
        Ok(())
    }
}

pub struct TestApp {
    pub app: App,
    pub repository: FlakyRepository,
    pub shared: Arc<Mutex<Vec<ShareRequest>>>,
}

/// App on the current runtime with a recording share handler.
pub fn test_app() -> TestApp {
    test_app_with(small_catalog(), true)
}

pub fn test_app_with(catalog: Vec<Reward>, with_handler: bool) -> TestApp {
    let repository = FlakyRepository::new(catalog);
    let shared = Arc::new(Mutex::new(Vec::new()));
    let mut share_sheet = ShareSheet::new();
    if with_handler {
        share_sheet.register(Box::new(RecordingHandler {
            received: Arc::clone(&shared),
        }));
    }
    let app = App::new(AppContext {
        runtime: Handle::current(),
        repository: Arc::new(repository.clone()),
        share_sheet,
        profile: ProfileConfig::default(),
        wake: None,
    });
    TestApp {
        app,
        repository,
        shared,
    }
}

/// Pump results into the app until `done` holds. Panics after two seconds.
pub async fn settle(app: &mut App, mut done: impl FnMut(&App) -> bool) {
    tokio::time::timeout(Duration::from_secs(2), async {
        loop {
            app.on_data_ready();
            if done(app) {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("app did not settle in time");
}
