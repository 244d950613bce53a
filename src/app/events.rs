//! Change notification
//!
//! Subscribers are called synchronously, in registration order, after each
//! successful mutation has been applied and persisted.

use std::fmt;

/// What changed in the store
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreEvent {
    SchemaChanged,
    DataChanged,
    ChartAdded(String),
    ChartUpdated(String),
    ChartRemoved(String),
    ActiveChartChanged(Option<String>),
    /// State was replaced from session storage
    Restored,
}

impl StoreEvent {
    /// Whether every chart needs to be recomputed
    pub fn affects_all_charts(&self) -> bool {
        matches!(
            self,
            StoreEvent::SchemaChanged | StoreEvent::DataChanged | StoreEvent::Restored
        )
    }

    /// The single chart this event concerns, if any
    pub fn chart_id(&self) -> Option<&str> {
        match self {
            StoreEvent::ChartAdded(id) | StoreEvent::ChartUpdated(id) | StoreEvent::ChartRemoved(id) => {
                Some(id)
            }
            _ => None,
        }
    }
}

/// Handle returned by `Playground::subscribe`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&StoreEvent) + Send>;

#[derive(Default)]
pub(crate) struct Subscribers {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.listeners.len())
            .finish()
    }
}

impl Subscribers {
    pub(crate) fn add(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }

    pub(crate) fn emit(&mut self, event: &StoreEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(event);
        }
    }
}
