//! Radial charts: pie, donut and gauge.
//!
//! Drawn in pixel coordinates on the plot area. Angles come from
//! [`ChartData`] and run clockwise from 12 o'clock.

use crate::constants::{
    ARC_STEP, CHART_FONT, DONUT_INNER_RATIO, GAUGE_HUB_RATIO, GAUGE_INNER_RATIO,
    GAUGE_NEEDLE_COLOR, GAUGE_OUTER_RATIO, GAUGE_TRACK_COLOR, LABEL_FONT_SIZE, LEGEND_ROW_HEIGHT,
    LEGEND_SWATCH_SIZE, LEGEND_WIDTH, MARK_OPACITY, PIE_LABEL_RATIO, PIE_OUTER_RATIO,
    TITLE_FONT_SIZE,
};
use crate::data::{ChartData, GaugeReading, Slice};
use crate::render::color::parse_color;
use crate::render::error::RenderResult;
use crate::render::surface::{Surface, px};
use crate::types::{ChartConfig, ChartType};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontStyle;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::f64::consts::{FRAC_PI_2, PI};

type Point = (i32, i32);

// ============================================================================
// Geometry
// ============================================================================

/// Point at `radius` from the center, `angle` radians clockwise from 12 o'clock
fn polar(center: (f64, f64), radius: f64, angle: f64) -> (f64, f64) {
    (center.0 + radius * angle.sin(), center.1 - radius * angle.cos())
}

fn to_point((x, y): (f64, f64)) -> Point {
    (x.round() as i32, y.round() as i32)
}

/// Outline of an annular sector; `inner == 0` closes it at the center
fn sector(center: (f64, f64), inner: f64, outer: f64, start: f64, end: f64) -> Vec<Point> {
    let sweep = end - start;
    let steps = ((sweep.abs() / ARC_STEP).ceil() as usize).max(1);
    let angle_at = |i: usize| start + sweep * i as f64 / steps as f64;

    let mut points: Vec<Point> = (0..=steps)
        .map(|i| to_point(polar(center, outer, angle_at(i))))
        .collect();
    if inner > 0.0 {
        points.extend((0..=steps).rev().map(|i| to_point(polar(center, inner, angle_at(i)))));
    } else {
        points.push(to_point(center));
    }
    points
}

fn text_style(size: f64, h_pos: HPos) -> TextStyle<'static> {
    TextStyle::from((CHART_FONT, size).into_font()).pos(Pos::new(h_pos, VPos::Center))
}

// ============================================================================
// Entry point
// ============================================================================

pub fn draw_radial<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    data: &ChartData,
    config: &ChartConfig,
    surface: &Surface,
) -> RenderResult<()> {
    let titled = if data.title.is_empty() {
        root.clone()
    } else {
        root.titled(&data.title, (CHART_FONT, TITLE_FONT_SIZE).into_font())?
    };
    let plot = titled.margin(
        px(surface.margin.top),
        px(surface.margin.bottom),
        px(surface.margin.left),
        px(surface.margin.right),
    );

    match (data.chart_type, data.gauge()) {
        (ChartType::Gauge, Some(reading)) => draw_gauge(&plot, data, reading),
        (chart_type, _) => draw_slices(&plot, data, config, chart_type == ChartType::Donut),
    }
}

fn frame<DB: DrawingBackend>(plot: &DrawingArea<DB, Shift>) -> ((f64, f64), f64) {
    let (width, height) = plot.dim_in_pixel();
    let (width, height) = (width as f64, height as f64);
    ((width / 2.0, height / 2.0), width.min(height) / 2.0)
}

// ============================================================================
// Pie and donut
// ============================================================================

fn draw_slices<DB: DrawingBackend>(
    plot: &DrawingArea<DB, Shift>,
    data: &ChartData,
    config: &ChartConfig,
    donut: bool,
) -> RenderResult<()> {
    let (center, radius) = frame(plot);
    let outer = radius * PIE_OUTER_RATIO;
    let inner = if donut { radius * DONUT_INNER_RATIO } else { 0.0 };
    let slices = data.slices();

    for slice in slices {
        let color = parse_color(slice.color);
        let mut outline = sector(center, inner, outer, slice.start_angle, slice.end_angle);
        plot.draw(&Polygon::new(outline.clone(), color.mix(MARK_OPACITY).filled()))?;
        if let Some(first) = outline.first().copied() {
            outline.push(first);
        }
        plot.draw(&PathElement::new(outline, WHITE.stroke_width(2)))?;
    }

    if donut {
        plot.draw(&Text::new(
            data.x_label.clone(),
            to_point(center),
            text_style(16.0, HPos::Center),
        ))?;
    }

    if config.show_labels {
        for slice in slices {
            draw_slice_label(plot, center, radius, inner, outer, slice)?;
        }
    }

    if config.show_legend {
        let (width, _) = plot.dim_in_pixel();
        let x = width as i32 - LEGEND_WIDTH;
        for (i, slice) in slices.iter().enumerate() {
            let y = i as i32 * LEGEND_ROW_HEIGHT;
            plot.draw(&Rectangle::new(
                [(x, y), (x + LEGEND_SWATCH_SIZE, y + LEGEND_SWATCH_SIZE)],
                parse_color(slice.color).filled(),
            ))?;
            plot.draw(&Text::new(
                format!("{} ({})", slice.label, slice.count),
                (x + LEGEND_SWATCH_SIZE + 8, y + LEGEND_SWATCH_SIZE / 2),
                text_style(LABEL_FONT_SIZE, HPos::Left),
            ))?;
        }
    }

    Ok(())
}

/// Label outside the pie with a leader from the slice centroid
fn draw_slice_label<DB: DrawingBackend>(
    plot: &DrawingArea<DB, Shift>,
    center: (f64, f64),
    radius: f64,
    inner: f64,
    outer: f64,
    slice: &Slice,
) -> RenderResult<()> {
    let mid = slice.mid_angle();
    let (side, h_pos) = if mid < PI {
        (1.0, HPos::Left)
    } else {
        (-1.0, HPos::Right)
    };
    let centroid = polar(center, (inner + outer) / 2.0, mid);
    let elbow = polar(center, radius * PIE_LABEL_RATIO, mid);
    let label_x = center.0 + radius * side;

    plot.draw(&PathElement::new(
        vec![
            to_point(centroid),
            to_point(elbow),
            to_point((center.0 + radius * 0.95 * side, elbow.1)),
        ],
        BLACK.mix(0.5).stroke_width(1),
    ))?;
    plot.draw(&Text::new(
        slice.label.clone(),
        to_point((label_x, elbow.1)),
        text_style(LABEL_FONT_SIZE, h_pos),
    ))?;
    Ok(())
}

// ============================================================================
// Gauge
// ============================================================================

fn draw_gauge<DB: DrawingBackend>(
    plot: &DrawingArea<DB, Shift>,
    data: &ChartData,
    reading: &GaugeReading,
) -> RenderResult<()> {
    let (center, radius) = frame(plot);
    let inner = radius * GAUGE_INNER_RATIO;
    let outer = radius * GAUGE_OUTER_RATIO;
    let needle_color = parse_color(GAUGE_NEEDLE_COLOR);

    plot.draw(&Polygon::new(
        sector(center, inner, outer, -FRAC_PI_2, FRAC_PI_2),
        parse_color(GAUGE_TRACK_COLOR).filled(),
    ))?;
    if reading.angle > -FRAC_PI_2 {
        plot.draw(&Polygon::new(
            sector(center, inner, outer, -FRAC_PI_2, reading.angle),
            parse_color(reading.color).filled(),
        ))?;
    }

    plot.draw(&PathElement::new(
        vec![to_point(center), to_point(polar(center, outer, reading.angle))],
        needle_color.stroke_width(2),
    ))?;
    plot.draw(&Circle::new(
        to_point(center),
        px(radius * GAUGE_HUB_RATIO).max(2),
        needle_color.filled(),
    ))?;

    let at = |dx: f64, dy: f64| to_point((center.0 + radius * dx, center.1 + radius * dy));
    let labels = [
        ("0".to_string(), at(-0.6, 0.2), text_style(LABEL_FONT_SIZE, HPos::Center)),
        (
            format!("{:.0}", reading.max),
            at(0.6, 0.2),
            text_style(LABEL_FONT_SIZE, HPos::Center),
        ),
        (
            format!("{:.1}", reading.mean),
            at(0.0, 0.4),
            TextStyle::from((CHART_FONT, 24.0).into_font().style(FontStyle::Bold))
                .pos(Pos::new(HPos::Center, VPos::Center)),
        ),
        (data.y_label.clone(), at(0.0, 0.6), text_style(14.0, HPos::Center)),
    ];
    for (content, position, style) in labels {
        plot.draw(&Text::new(content, position, style))?;
    }
    Ok(())
}
