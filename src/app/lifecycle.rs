//! Session lifecycle - construction, restore and teardown

use super::events::StoreEvent;
use crate::app::Playground;
use crate::data::{ChartStore, RowStore, Schema};
use crate::session::SessionPersistence;
use crate::types::SessionSnapshot;

impl Playground {
    /// Empty, ephemeral store (nothing is persisted)
    pub fn new() -> Self {
        Self::default()
    }

    /// Store backed by session storage, restoring any saved snapshot
    pub fn with_persistence(persistence: SessionPersistence) -> Self {
        let mut playground = Self::new();
        if let Some(snapshot) = persistence.load() {
            tracing::info!(
                fields = snapshot.schema.len(),
                rows = snapshot.data.len(),
                charts = snapshot.charts.len(),
                "Restored session"
            );
            playground.replace_state(snapshot);
        }
        playground.persistence = Some(persistence);
        playground
    }

    /// Ephemeral store seeded from a snapshot
    pub fn from_snapshot(snapshot: SessionSnapshot) -> Self {
        let mut playground = Self::new();
        playground.replace_state(snapshot);
        playground
    }

    /// Re-read session storage, replacing in-memory state if a snapshot
    /// exists. Returns whether anything was restored.
    pub fn reload(&mut self) -> bool {
        let Some(snapshot) = self.persistence.as_ref().and_then(SessionPersistence::load) else {
            return false;
        };
        self.replace_state(snapshot);
        self.data_revision += 1;
        tracing::debug!("Store reloaded from session storage");
        self.subscribers.emit(&StoreEvent::Restored);
        true
    }

    /// End the session: clear persisted state and drop the store
    pub fn end_session(self) {
        if let Some(persistence) = &self.persistence {
            persistence.clear();
        }
        tracing::info!("Session ended");
    }

    fn replace_state(&mut self, snapshot: SessionSnapshot) {
        self.schema = Schema::from_fields(snapshot.schema);
        self.rows = RowStore::from_rows(snapshot.data);
        self.charts = ChartStore::from_parts(snapshot.charts, snapshot.active_chart);
    }
}
