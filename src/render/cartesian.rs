//! Cartesian charts: bar, horizontal bar, line, area and scatter.
//!
//! Every value axis runs over `[0, max]`. Categorical axes use one
//! segment per distinct label; rows sharing a label share a segment.

use crate::constants::{
    AREA_FILL_OPACITY, AREA_POINT_RADIUS, AXIS_TICK_COUNT, BAR_GAP, CHART_FONT, GRID_OPACITY,
    LINE_FILL_OPACITY, LINE_POINT_RADIUS, LINE_STROKE_WIDTH, MARK_OPACITY, SCATTER_OPACITY,
    SCATTER_POINT_RADIUS, TITLE_FONT_SIZE,
};
use crate::data::{ChartData, NumericDomain, XDomain};
use crate::render::color::parse_color;
use crate::render::error::RenderResult;
use crate::render::surface::{Surface, px};
use crate::types::{ChartConfig, ChartType};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;

// ============================================================================
// Shared helpers
// ============================================================================

/// Upper bound of a value axis; a flat or missing domain still gets `[0, 1]`
fn axis_max(domain: Option<NumericDomain>) -> f64 {
    domain.map(|d| d.max).filter(|max| *max > 0.0).unwrap_or(1.0)
}

/// Index range whose segmented coordinate yields exactly `count` bands
/// (two when there is a single category)
fn segment_range(count: usize) -> Range<u32> {
    let count = u32::try_from(count).unwrap_or(u32::MAX);
    0..count.saturating_sub(1).max(1)
}

fn category_index(categories: &[&str], label: &str) -> u32 {
    let index = categories.iter().position(|c| *c == label).unwrap_or(0);
    u32::try_from(index).unwrap_or(u32::MAX)
}

fn label_at(categories: &[&str], value: &SegmentValue<u32>) -> String {
    match value {
        SegmentValue::CenterOf(index) => categories
            .get(*index as usize)
            .map(|label| label.to_string())
            .unwrap_or_default(),
        _ => String::new(),
    }
}

fn chart_builder<'a, DB: DrawingBackend>(
    root: &'a DrawingArea<DB, Shift>,
    title: &str,
    surface: &Surface,
) -> ChartBuilder<'a, 'static, DB> {
    let mut builder = ChartBuilder::on(root);
    builder
        .margin_top(px(surface.margin.top))
        .margin_right(px(surface.margin.right))
        .x_label_area_size(px(surface.margin.bottom))
        .y_label_area_size(px(surface.margin.left));
    if !title.is_empty() {
        builder.caption(title, (CHART_FONT, TITLE_FONT_SIZE).into_font());
    }
    builder
}

// ============================================================================
// Bar, line and area
// ============================================================================

/// Vertical bars, or a line/area through the category band centers
pub fn draw_category_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    data: &ChartData,
    config: &ChartConfig,
    surface: &Surface,
) -> RenderResult<()> {
    let categories = data.categories();
    let color = parse_color(data.points().first().map_or("#000", |p| p.color));

    let mut chart = chart_builder(root, &data.title, surface).build_cartesian_2d(
        segment_range(categories.len()).into_segmented(),
        0f64..axis_max(data.y_domain()),
    )?;

    let x_formatter = |value: &SegmentValue<u32>| label_at(&categories, value);
    let mut mesh = chart.configure_mesh();
    mesh.disable_x_mesh()
        .x_labels(categories.len().max(1))
        .x_label_formatter(&x_formatter)
        .y_labels(AXIS_TICK_COUNT)
        .bold_line_style(BLACK.mix(GRID_OPACITY))
        .light_line_style(WHITE.mix(0.0));
    if !config.show_grid {
        mesh.disable_mesh();
    }
    if config.show_labels {
        mesh.x_desc(data.x_label.as_str()).y_desc(data.y_label.as_str());
    }
    mesh.draw()?;

    let coords: Vec<(SegmentValue<u32>, f64)> = data
        .points()
        .iter()
        .map(|point| {
            let index = category_index(&categories, &point.label);
            (SegmentValue::CenterOf(index), point.value)
        })
        .collect();

    match data.chart_type {
        ChartType::Line | ChartType::Area => {
            let (fill, radius) = if data.chart_type == ChartType::Line {
                (LINE_FILL_OPACITY, LINE_POINT_RADIUS)
            } else {
                (AREA_FILL_OPACITY, AREA_POINT_RADIUS)
            };
            chart.draw_series(
                AreaSeries::new(coords.iter().cloned(), 0.0, color.mix(fill))
                    .border_style(color.stroke_width(LINE_STROKE_WIDTH)),
            )?;
            chart.draw_series(
                coords
                    .iter()
                    .map(|coord| Circle::new(coord.clone(), radius, color.filled())),
            )?;
        }
        _ => {
            let style = color.mix(MARK_OPACITY).filled();
            chart.draw_series(data.points().iter().map(|point| {
                let index = category_index(&categories, &point.label);
                let mut bar = Rectangle::new(
                    [
                        (SegmentValue::Exact(index), 0.0),
                        (SegmentValue::Exact(index + 1), point.value),
                    ],
                    style,
                );
                bar.set_margin(0, 0, BAR_GAP, BAR_GAP);
                bar
            }))?;
        }
    }

    Ok(())
}

// ============================================================================
// Horizontal bar
// ============================================================================

/// Bars growing right from a categorical y axis, first row at the top
pub fn draw_horizontal_bars<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    data: &ChartData,
    config: &ChartConfig,
    surface: &Surface,
) -> RenderResult<()> {
    let categories = data.categories();
    let last = u32::try_from(categories.len().max(1) - 1).unwrap_or(0);
    let color = parse_color(data.points().first().map_or("#000", |p| p.color));

    let mut chart = chart_builder(root, &data.title, surface).build_cartesian_2d(
        0f64..axis_max(data.y_domain()),
        segment_range(categories.len()).into_segmented(),
    )?;

    // Band 0 sits at the bottom, so bands count down from the last category
    let y_formatter = |value: &SegmentValue<u32>| match value {
        SegmentValue::CenterOf(band) if *band <= last => {
            label_at(&categories, &SegmentValue::CenterOf(last - band))
        }
        _ => String::new(),
    };
    let mut mesh = chart.configure_mesh();
    mesh.disable_y_mesh()
        .x_labels(AXIS_TICK_COUNT)
        .y_labels(categories.len().max(1))
        .y_label_formatter(&y_formatter)
        .bold_line_style(BLACK.mix(GRID_OPACITY))
        .light_line_style(WHITE.mix(0.0));
    if !config.show_grid {
        mesh.disable_mesh();
    }
    if config.show_labels {
        mesh.x_desc(data.y_label.as_str()).y_desc(data.x_label.as_str());
    }
    mesh.draw()?;

    let style = color.mix(MARK_OPACITY).filled();
    chart.draw_series(data.points().iter().map(|point| {
        let band = last - category_index(&categories, &point.label).min(last);
        let mut bar = Rectangle::new(
            [
                (0.0, SegmentValue::Exact(band)),
                (point.value, SegmentValue::Exact(band + 1)),
            ],
            style,
        );
        bar.set_margin(BAR_GAP, BAR_GAP, 0, 0);
        bar
    }))?;

    Ok(())
}

// ============================================================================
// Scatter
// ============================================================================

/// Points on two numeric axes
pub fn draw_scatter<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    data: &ChartData,
    config: &ChartConfig,
    surface: &Surface,
) -> RenderResult<()> {
    let x_max = match data.x_domain() {
        Some(XDomain::Numeric(domain)) => axis_max(Some(*domain)),
        _ => 1.0,
    };
    let color = parse_color(data.points().first().map_or("#000", |p| p.color));

    let mut chart = chart_builder(root, &data.title, surface)
        .build_cartesian_2d(0f64..x_max, 0f64..axis_max(data.y_domain()))?;

    let mut mesh = chart.configure_mesh();
    mesh.x_labels(AXIS_TICK_COUNT)
        .y_labels(AXIS_TICK_COUNT)
        .bold_line_style(BLACK.mix(GRID_OPACITY))
        .light_line_style(WHITE.mix(0.0));
    if !config.show_grid {
        mesh.disable_mesh();
    }
    if config.show_labels {
        mesh.x_desc(data.x_label.as_str()).y_desc(data.y_label.as_str());
    }
    mesh.draw()?;

    let style = color.mix(SCATTER_OPACITY).filled();
    chart.draw_series(
        data.points()
            .iter()
            .map(|point| Circle::new((point.x, point.value), SCATTER_POINT_RADIUS, style)),
    )?;

    Ok(())
}
