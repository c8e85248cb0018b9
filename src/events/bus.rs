//! Observer registry.
//!
//! Observers subscribe to one field or to every field. The bus indexes
//! subscriptions by field for lookup and dispatches each event to its
//! observers in subscription order.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::event::{StateEvent, StateField};

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubscriptionId(pub u32);

impl SubscriptionId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Subscription({})", self.0)
    }
}

/// Receives state-changed events.
///
/// Implemented for any `FnMut(&StateEvent) + Send`, so closures can be
/// subscribed directly.
pub trait StateObserver: Send {
    fn on_event(&mut self, event: &StateEvent);
}

impl<F> StateObserver for F
where
    F: FnMut(&StateEvent) + Send,
{
    fn on_event(&mut self, event: &StateEvent) {
        self(event);
    }
}

/// Registry of observers.
#[derive(Default)]
pub struct EventBus {
    observers: FxHashMap<SubscriptionId, Box<dyn StateObserver>>,

    /// Index by field. Observers of every field are listed under each one.
    by_field: FxHashMap<StateField, Vec<SubscriptionId>>,

    next_id: u32,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to changes of a single field.
    pub fn subscribe<O>(&mut self, field: StateField, observer: O) -> SubscriptionId
    where
        O: StateObserver + 'static,
    {
        self.insert(&[field], Box::new(observer))
    }

    /// Subscribe to changes of every field.
    pub fn subscribe_all<O>(&mut self, observer: O) -> SubscriptionId
    where
        O: StateObserver + 'static,
    {
        self.insert(&StateField::ALL, Box::new(observer))
    }

    fn insert(&mut self, fields: &[StateField], observer: Box<dyn StateObserver>) -> SubscriptionId {
        let id = SubscriptionId::new(self.next_id);
        self.next_id += 1;

        for field in fields {
            self.by_field.entry(*field).or_default().push(id);
        }
        self.observers.insert(id, observer);
        id
    }

    /// Remove a subscription. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        if self.observers.remove(&id).is_none() {
            return false;
        }
        self.by_field.retain(|_, ids| {
            ids.retain(|&sid| sid != id);
            !ids.is_empty()
        });
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Deliver each event to the observers of its field.
    pub fn publish(&mut self, events: &[StateEvent]) {
        if self.observers.is_empty() {
            return;
        }
        for event in events {
            let Some(ids) = self.by_field.get(&event.field()) else {
                continue;
            };
            for id in ids {
                if let Some(observer) = self.observers.get_mut(id) {
                    observer.on_event(event);
                }
            }
        }
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut ids: Vec<_> = self.observers.keys().copied().collect();
        ids.sort_unstable();
        f.debug_struct("EventBus")
            .field("subscriptions", &ids)
            .field("next_id", &self.next_id)
            .finish()
    }
}
