//! Rendering: chart data drawn through plotters into SVG documents.
//!
//! [`render_chart`] is the pure entry point: `(schema, rows, config,
//! surface)` in, [`RenderedChart`] out. It never mutates its inputs; the
//! only failure is the drawing backend itself.

mod cartesian;
mod color;
mod error;
mod radial;
mod surface;
pub mod svg;

pub use color::parse_color;
pub use error::{RenderError, RenderResult};
pub use surface::{Margin, Surface};
pub use svg::{svg_file_name, with_entrance_animation};

use crate::constants::{CHART_FONT, TITLE_FONT_SIZE};
use crate::data::{ChartData, Schema, process_chart_data};
use crate::types::{ChartConfig, ChartType, DataRow};
use plotters::coord::Shift;
use plotters::prelude::*;

/// Processed chart data together with its drawn SVG document
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedChart {
    pub data: ChartData,
    pub svg: String,
}

impl RenderedChart {
    /// True when the chart drew at least one bar, point, slice or gauge
    pub fn has_marks(&self) -> bool {
        !self.data.is_empty()
    }
}

/// Process and draw one chart
pub fn render_chart(
    schema: &Schema,
    rows: &[DataRow],
    config: &ChartConfig,
    surface: &Surface,
) -> RenderResult<RenderedChart> {
    let data = process_chart_data(schema, rows, config);
    let svg = draw_svg(&data, config, surface)?;
    Ok(RenderedChart { data, svg })
}

/// Draw processed chart data as a standalone SVG document
pub fn draw_svg(data: &ChartData, config: &ChartConfig, surface: &Surface) -> RenderResult<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, surface.pixel_size()).into_drawing_area();
        root.fill(&WHITE)?;
        draw_chart(&root, data, config, surface)?;
        root.present()?;
    }

    if config.animation {
        svg = with_entrance_animation(&svg);
    }
    Ok(svg)
}

/// Draw processed chart data onto any plotters drawing area
pub fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    data: &ChartData,
    config: &ChartConfig,
    surface: &Surface,
) -> RenderResult<()> {
    if data.is_empty() {
        // Nothing resolved: title only
        if !data.title.is_empty() {
            root.titled(&data.title, (CHART_FONT, TITLE_FONT_SIZE).into_font())?;
        }
        return Ok(());
    }

    match data.chart_type {
        ChartType::Bar | ChartType::Line | ChartType::Area => {
            cartesian::draw_category_chart(root, data, config, surface)
        }
        ChartType::HorizontalBar => cartesian::draw_horizontal_bars(root, data, config, surface),
        ChartType::Scatter => cartesian::draw_scatter(root, data, config, surface),
        ChartType::Pie | ChartType::Donut | ChartType::Gauge => {
            radial::draw_radial(root, data, config, surface)
        }
    }
}
