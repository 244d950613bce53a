//! Chart configuration store
//!
//! Ordered list of independent chart configs plus the active selection.
//! Charts reference schema fields by name only; nothing here checks that
//! those names exist.

use crate::types::{ChartConfig, ChartConfigUpdate};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartStore {
    charts: Vec<ChartConfig>,
    active: Option<String>,
}

impl ChartStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(charts: Vec<ChartConfig>, active: Option<String>) -> Self {
        Self { charts, active }
    }

    pub fn charts(&self) -> &[ChartConfig] {
        &self.charts
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ChartConfig> {
        self.charts.iter().find(|c| c.id == id)
    }

    /// Raw selection state, which may name a chart that no longer exists
    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// The active chart, or `None` when nothing (valid) is selected
    pub fn active_chart(&self) -> Option<&ChartConfig> {
        self.active.as_deref().and_then(|id| self.get(id))
    }

    /// Append a chart and make it active
    pub fn add_chart(&mut self, config: ChartConfig) {
        self.active = Some(config.id.clone());
        self.charts.push(config);
    }

    /// Merge `update` into the chart with `id`.
    ///
    /// Unknown ids are ignored (a chart deleted mid-edit is expected).
    /// Returns whether a chart was updated.
    pub fn update_chart(&mut self, id: &str, update: &ChartConfigUpdate) -> bool {
        match self.charts.iter_mut().find(|c| c.id == id) {
            Some(chart) => {
                chart.apply(update);
                true
            }
            None => false,
        }
    }

    /// Remove the chart with `id`.
    ///
    /// If it was active, the first remaining chart becomes active (or none).
    pub fn remove_chart(&mut self, id: &str) -> Option<ChartConfig> {
        let position = self.charts.iter().position(|c| c.id == id)?;
        let removed = self.charts.remove(position);
        if self.active.as_deref() == Some(id) {
            self.active = self.charts.first().map(|c| c.id.clone());
        }
        Some(removed)
    }

    /// Pure selection state; `id` is not validated
    pub fn set_active_chart(&mut self, id: Option<String>) {
        self.active = id;
    }

    pub fn set_charts(&mut self, charts: Vec<ChartConfig>, active: Option<String>) {
        self.charts = charts;
        self.active = active;
    }
}
