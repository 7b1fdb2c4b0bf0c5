//! Observable state holder with explicit subscriptions.

use crate::ui::mvi::State;

/// Handle returned by [`Observable::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer<S> = Box<dyn FnMut(&S) + Send>;

/// Holds a value and calls every registered observer after each mutation.
///
/// Observers run synchronously on the mutating thread, in registration
/// order. Subscribing does not replay the current value; read it with
/// [`Observable::get`].
pub struct Observable<S> {
    value: S,
    next_id: u64,
    observers: Vec<(SubscriptionId, Observer<S>)>,
}

impl<S: State> Observable<S> {
    pub fn new(value: S) -> Self {
        Self {
            value,
            next_id: 0,
            observers: Vec::new(),
        }
    }

    pub fn get(&self) -> &S {
        &self.value
    }

    /// Replace the value and notify observers.
    pub fn set(&mut self, value: S) {
        self.value = value;
        self.notify();
    }

    /// Transform the value in place and notify observers.
    pub fn update(&mut self, f: impl FnOnce(S) -> S) {
        let current = std::mem::take(&mut self.value);
        self.value = f(current);
        self.notify();
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&S) + Send + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns false if the id was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }

    fn notify(&mut self) {
        let value = &self.value;
        for (_, observer) in self.observers.iter_mut() {
            observer(value);
        }
    }
}

impl<S: State> Default for Observable<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Debug, Clone, PartialEq, Default)]
    struct Counter(u32);

    impl State for Counter {}

    fn recorder() -> (Arc<Mutex<Vec<u32>>>, impl FnMut(&Counter) + Send + 'static) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        (seen, move |c: &Counter| sink.lock().push(c.0))
    }

    #[test]
    fn observers_see_every_mutation_in_order() {
        let mut observable = Observable::new(Counter(0));
        let (seen, observer) = recorder();
        observable.subscribe(observer);

        observable.set(Counter(1));
        observable.update(|c| Counter(c.0 + 1));
        observable.set(Counter(2));

        assert_eq!(*seen.lock(), vec![1, 2, 2]);
    }

    #[test]
    fn subscribe_does_not_replay() {
        let mut observable = Observable::new(Counter(7));
        let (seen, observer) = recorder();
        observable.subscribe(observer);
        assert!(seen.lock().is_empty());
        assert_eq!(observable.get(), &Counter(7));
    }

    #[test]
    fn unsubscribed_observer_is_not_called() {
        let mut observable = Observable::new(Counter(0));
        let (first, first_observer) = recorder();
        let (second, second_observer) = recorder();
        let id = observable.subscribe(first_observer);
        observable.subscribe(second_observer);

        assert!(observable.unsubscribe(id));
        assert!(!observable.unsubscribe(id));
        observable.set(Counter(3));

        assert!(first.lock().is_empty());
        assert_eq!(*second.lock(), vec![3]);
        assert_eq!(observable.subscriber_count(), 1);
    }
}
