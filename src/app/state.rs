//! Playground state - the store struct and its read-only accessors

use super::events::{StoreEvent, Subscribers, SubscriptionId};
use crate::data::{ChartStore, RowStore, Schema};
use crate::session::SessionPersistence;
use crate::types::{ChartConfig, DataRow, SchemaField, SessionSnapshot};

/// The explicit store for one playground session.
///
/// Owns schema, rows and chart configs. Every mutating method validates,
/// applies, persists the full snapshot, then notifies subscribers. A
/// rejected mutation changes nothing, persists nothing and notifies no one.
#[derive(Debug, Default)]
pub struct Playground {
    pub(crate) schema: Schema,
    pub(crate) rows: RowStore,
    pub(crate) charts: ChartStore,
    pub(crate) persistence: Option<SessionPersistence>,
    pub(crate) subscribers: Subscribers,
    /// Bumped whenever schema or rows change
    pub(crate) data_revision: u64,
}

impl Playground {
    // ========================================================================
    // Read access
    // ========================================================================

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn fields(&self) -> &[SchemaField] {
        self.schema.fields()
    }

    pub fn rows(&self) -> &[DataRow] {
        self.rows.rows()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn chart_store(&self) -> &ChartStore {
        &self.charts
    }

    pub fn charts(&self) -> &[ChartConfig] {
        self.charts.charts()
    }

    pub fn chart(&self, id: &str) -> Option<&ChartConfig> {
        self.charts.get(id)
    }

    /// Raw selection, possibly naming a deleted chart
    pub fn active_chart_id(&self) -> Option<&str> {
        self.charts.active_id()
    }

    /// The selected chart, or `None` when the selection is empty or stale
    pub fn active_chart(&self) -> Option<&ChartConfig> {
        self.charts.active_chart()
    }

    pub fn data_revision(&self) -> u64 {
        self.data_revision
    }

    pub fn is_persistent(&self) -> bool {
        self.persistence.is_some()
    }

    /// Whether there is anything to chart (a schema and at least one row)
    pub fn has_chartable_data(&self) -> bool {
        !self.schema.is_empty() && !self.rows.is_empty()
    }

    /// Complete state as written to session storage
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            schema: self.schema.fields().to_vec(),
            data: self.rows.rows().to_vec(),
            charts: self.charts.charts().to_vec(),
            active_chart: self.charts.active_id().map(str::to_string),
        }
    }

    // ========================================================================
    // Subscriptions
    // ========================================================================

    /// Register a listener called after every successful mutation
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreEvent) + Send + 'static) -> SubscriptionId {
        self.subscribers.add(Box::new(listener))
    }

    /// Returns whether the subscription existed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Persist the snapshot, then deliver `events` in order
    pub(crate) fn commit(&mut self, events: Vec<StoreEvent>) {
        if events.iter().any(StoreEvent::affects_all_charts) {
            self.data_revision += 1;
        }

        if let Some(persistence) = &self.persistence {
            persistence.save(&self.snapshot());
        }

        for event in &events {
            tracing::debug!(?event, "Store changed");
            self.subscribers.emit(event);
        }
    }
}
