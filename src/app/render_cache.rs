//! Per-chart render cache with explicit dependency tracking.
//!
//! An entry is reused only while its chart config, the store's data
//! revision and the surface are all unchanged. Entries are independent:
//! recomputing one chart never touches another.

use crate::app::Playground;
use crate::render::{self, RenderedChart, Surface};
use crate::types::ChartConfig;
use std::collections::HashMap;

#[derive(Clone, Debug)]
struct CacheEntry {
    config: ChartConfig,
    data_revision: u64,
    surface: Surface,
    chart: RenderedChart,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

#[derive(Debug, Default)]
pub struct RenderCache {
    entries: HashMap<String, CacheEntry>,
    stats: CacheStats,
}

impl RenderCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered chart `id`, redrawn only when one of its inputs changed.
    ///
    /// A failed draw is logged and leaves no entry behind.
    pub fn chart_for(
        &mut self,
        store: &Playground,
        id: &str,
        surface: &Surface,
    ) -> Option<&RenderedChart> {
        let config = store.chart(id)?;
        let revision = store.data_revision();

        let fresh = self.entries.get(id).is_some_and(|entry| {
            entry.data_revision == revision && entry.surface == *surface && entry.config == *config
        });

        if fresh {
            self.stats.hits += 1;
        } else {
            self.stats.misses += 1;
            let chart = match render::render_chart(store.schema(), store.rows(), config, surface) {
                Ok(chart) => chart,
                Err(e) => {
                    tracing::error!("Failed to render chart {}: {}", id, e);
                    self.entries.remove(id);
                    return None;
                }
            };
            tracing::trace!(chart = id, revision, "Redrew chart");
            self.entries.insert(
                id.to_string(),
                CacheEntry {
                    config: config.clone(),
                    data_revision: revision,
                    surface: *surface,
                    chart,
                },
            );
        }

        self.entries.get(id).map(|entry| &entry.chart)
    }

    /// Whether chart `id` has a cached render matching the store's current state
    pub fn is_fresh(&self, store: &Playground, id: &str, surface: &Surface) -> bool {
        match (self.entries.get(id), store.chart(id)) {
            (Some(entry), Some(config)) => {
                entry.data_revision == store.data_revision()
                    && entry.surface == *surface
                    && entry.config == *config
            }
            _ => false,
        }
    }

    pub fn invalidate(&mut self, id: &str) {
        self.entries.remove(id);
    }

    /// Drop entries for charts that no longer exist
    pub fn prune(&mut self, store: &Playground) {
        self.entries.retain(|id, _| store.chart(id).is_some());
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}
