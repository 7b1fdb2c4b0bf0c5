//! Per-screen view-state store driven by one asynchronous fetch.

use crate::ui::common::observable::{Observable, SubscriptionId};
use crate::ui::common::ui_state::{LoadIntent, LoadReducer, UiState};
use crate::ui::mvi::Reducer;
use futures::stream::BoxStream;
use futures::StreamExt;
use std::fmt::Display;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Callback used by fetch tasks to tell the UI loop a completion is waiting.
pub type Wake = Arc<dyn Fn() + Send + Sync>;

struct Completion<T> {
    generation: u64,
    intent: LoadIntent<T>,
}

/// Holds a [`UiState`] for one screen and runs its fetch.
///
/// The fetch runs on the tokio runtime; its results travel back over a
/// channel and are only applied to the state by [`pump`](Self::pump) or
/// [`wait_for_update`](Self::wait_for_update), both called from the thread
/// that owns the store. Each `load` bumps a generation counter, so results
/// from an aborted or superseded fetch are dropped instead of applied.
pub struct ViewStateStore<T: Clone + PartialEq + Send + 'static> {
    name: &'static str,
    state: Observable<UiState<T>>,
    generation: u64,
    pending: bool,
    fetch: Option<JoinHandle<()>>,
    tx: mpsc::UnboundedSender<Completion<T>>,
    rx: mpsc::UnboundedReceiver<Completion<T>>,
    wake: Option<Wake>,
}

impl<T: Clone + PartialEq + Send + 'static> ViewStateStore<T> {
    pub fn new(name: &'static str) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            name,
            state: Observable::default(),
            generation: 0,
            pending: false,
            fetch: None,
            tx,
            rx,
            wake: None,
        }
    }

    pub fn with_wake(mut self, wake: Option<Wake>) -> Self {
        self.wake = wake;
        self
    }

    pub fn state(&self) -> &UiState<T> {
        self.state.get()
    }

    /// True between `load` and the first result of that fetch.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn subscribe(
        &mut self,
        observer: impl FnMut(&UiState<T>) + Send + 'static,
    ) -> SubscriptionId {
        self.state.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.state.unsubscribe(id)
    }

    /// Start a fetch from `source`.
    ///
    /// Every `Ok` item becomes `Success`; the first `Err` becomes `Error`
    /// and ends the fetch. A fetch still in flight is aborted first.
    pub fn load<E>(&mut self, runtime: &Handle, source: BoxStream<'static, Result<T, E>>)
    where
        E: Display + Send + 'static,
    {
        self.cancel_fetch();
        self.generation += 1;
        self.pending = true;
        self.dispatch(LoadIntent::Started);

        let generation = self.generation;
        let tx = self.tx.clone();
        let wake = self.wake.clone();
        let name = self.name;
        self.fetch = Some(runtime.spawn(async move {
            let mut source = source;
            while let Some(item) = source.next().await {
                let (intent, done) = match item {
                    Ok(value) => (LoadIntent::Loaded(value), false),
                    Err(err) => {
                        tracing::warn!(store = name, error = %err, "fetch failed");
                        (LoadIntent::Failed(err.to_string()), true)
                    }
                };
                if tx.send(Completion { generation, intent }).is_err() {
                    return;
                }
                if let Some(wake) = &wake {
                    wake();
                }
                if done {
                    break;
                }
            }
        }));
    }

    /// Apply every completion already received. Returns how many changed the state.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(completion) = self.rx.try_recv() {
            if self.apply(completion) {
                applied += 1;
            }
        }
        applied
    }

    /// Wait until the current fetch produces a result and apply it.
    ///
    /// Never returns if nothing is in flight.
    pub async fn wait_for_update(&mut self) {
        while let Some(completion) = self.rx.recv().await {
            if self.apply(completion) {
                return;
            }
        }
    }

    /// Tear the store down to its initial state: abort the fetch, drop
    /// undelivered results and go back to `Loading`.
    pub fn dispose(&mut self) {
        self.cancel_fetch();
        self.generation += 1;
        self.pending = false;
        while self.rx.try_recv().is_ok() {}
        if !self.state.get().is_loading() {
            self.dispatch(LoadIntent::Started);
        }
    }

    fn apply(&mut self, completion: Completion<T>) -> bool {
        if completion.generation != self.generation {
            tracing::trace!(store = self.name, "dropping stale fetch result");
            return false;
        }
        self.pending = false;
        self.dispatch(completion.intent);
        true
    }

    fn dispatch(&mut self, intent: LoadIntent<T>) {
        self.state
            .update(|state| LoadReducer::<T>::reduce(state, intent));
        tracing::debug!(
            store = self.name,
            state = self.state.get().label(),
            "view state changed"
        );
    }

    fn cancel_fetch(&mut self) {
        if let Some(fetch) = self.fetch.take() {
            fetch.abort();
        }
    }
}

impl<T: Clone + PartialEq + Send + 'static> Drop for ViewStateStore<T> {
    fn drop(&mut self) {
        self.cancel_fetch();
    }
}
