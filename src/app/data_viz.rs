//! Data visualization methods - chart configs, selection and rendering

use super::events::StoreEvent;
use crate::app::Playground;
use crate::data::{DataError, DataResult};
use crate::render::{self, RenderedChart, Surface};
use crate::types::{ChartConfig, ChartConfigUpdate, ChartType};

impl Playground {
    /// Append a chart and make it active
    pub fn add_chart(&mut self, config: ChartConfig) {
        let id = config.id.clone();
        self.charts.add_chart(config);
        self.commit(vec![
            StoreEvent::ChartAdded(id.clone()),
            StoreEvent::ActiveChartChanged(Some(id)),
        ]);
    }

    /// Config for a new chart: bar, `Chart N`, x on the first field and y on
    /// the first number field
    pub fn default_chart_config(&self) -> ChartConfig {
        let x_axis = self.schema.get(0).map(|f| f.name.clone()).unwrap_or_default();
        let y_axis = self
            .schema
            .number_fields()
            .next()
            .map(|f| f.name.clone())
            .unwrap_or_default();

        ChartConfig::new(ChartConfig::generate_id(), ChartType::Bar)
            .with_title(format!("Chart {}", self.charts.len() + 1))
            .with_axes(x_axis, y_axis)
    }

    /// Add a chart with default settings; returns its id.
    ///
    /// Refused until there is a schema and at least one row.
    pub fn add_default_chart(&mut self) -> DataResult<String> {
        if !self.has_chartable_data() {
            return Err(DataError::NothingToChart);
        }
        let config = self.default_chart_config();
        let id = config.id.clone();
        self.add_chart(config);
        Ok(id)
    }

    /// Add a default chart if there is data to chart but no chart yet
    pub fn ensure_default_chart(&mut self) -> Option<String> {
        if self.charts.is_empty() && self.has_chartable_data() {
            self.add_default_chart().ok()
        } else {
            None
        }
    }

    /// Merge `update` into chart `id`. Unknown ids are ignored.
    pub fn update_chart(&mut self, id: &str, update: &ChartConfigUpdate) -> bool {
        let updated = self.charts.update_chart(id, update);
        if updated {
            self.commit(vec![StoreEvent::ChartUpdated(id.to_string())]);
        } else {
            tracing::debug!(chart = id, "Ignoring update for unknown chart");
        }
        updated
    }

    /// Remove chart `id`; the first remaining chart becomes active if the
    /// removed one was
    pub fn remove_chart(&mut self, id: &str) -> Option<ChartConfig> {
        let previous_active = self.charts.active_id().map(str::to_string);
        let removed = self.charts.remove_chart(id)?;

        let mut events = vec![StoreEvent::ChartRemoved(id.to_string())];
        let active = self.charts.active_id().map(str::to_string);
        if active != previous_active {
            events.push(StoreEvent::ActiveChartChanged(active));
        }
        self.commit(events);
        Some(removed)
    }

    /// Select a chart. The id is not validated; a stale selection renders
    /// nothing.
    pub fn set_active_chart(&mut self, id: Option<String>) {
        self.charts.set_active_chart(id.clone());
        self.commit(vec![StoreEvent::ActiveChartChanged(id)]);
    }

    /// Render chart `id` on `surface`
    pub fn render_chart(&self, id: &str, surface: &Surface) -> Option<RenderedChart> {
        let config = self.charts.get(id)?;
        self.draw(config, surface)
    }

    /// Render the active chart; `None` when nothing valid is selected
    pub fn render_active(&self, surface: &Surface) -> Option<RenderedChart> {
        let config = self.charts.active_chart()?;
        self.draw(config, surface)
    }

    /// SVG document and download file name for chart `id`
    pub fn export_chart_svg(&self, id: &str, surface: &Surface) -> Option<(String, String)> {
        let config = self.charts.get(id)?;
        let chart = self.draw(config, surface)?;
        Some((render::svg_file_name(config), chart.svg))
    }

    fn draw(&self, config: &ChartConfig, surface: &Surface) -> Option<RenderedChart> {
        match render::render_chart(&self.schema, self.rows.rows(), config, surface) {
            Ok(chart) => Some(chart),
            Err(e) => {
                tracing::error!("Failed to render chart {}: {}", config.id, e);
                None
            }
        }
    }
}
