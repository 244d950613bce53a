//! Chart data processing engine
//!
//! Maps `(schema, rows, config)` to chart-ready data: resolved fields,
//! coerced values, domains, slice weights and color assignments. Geometry
//! lives in [`crate::render`]; nothing here knows about pixels.
//!
//! The engine has no error channel. Dangling field references, empty
//! datasets and non-numeric text all degrade to an empty or zero-valued
//! chart.

use crate::data::schema::Schema;
use crate::types::{ChartConfig, ChartType, ColorScheme, DataRow, FieldType};
use std::collections::HashMap;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

// ============================================================================
// Palettes
// ============================================================================

pub const PURPLE_PALETTE: [&str; 7] = [
    "hsl(262, 83%, 58%)",
    "hsl(262, 83%, 68%)",
    "hsl(262, 83%, 78%)",
    "hsl(262, 83%, 48%)",
    "hsl(282, 83%, 58%)",
    "hsl(242, 83%, 58%)",
    "hsl(302, 83%, 58%)",
];

pub const BLUE_PALETTE: [&str; 5] = ["#0ea5e9", "#0284c7", "#0369a1", "#075985", "#0c4a6e"];

pub const GREEN_PALETTE: [&str; 5] = ["#10b981", "#059669", "#047857", "#065f46", "#064e3b"];

pub const ORANGE_PALETTE: [&str; 5] = ["#f97316", "#ea580c", "#c2410c", "#9a3412", "#7c2d12"];

pub const RAINBOW_PALETTE: [&str; 7] = [
    "#ef4444", "#f97316", "#eab308", "#10b981", "#0ea5e9", "#8b5cf6", "#ec4899",
];

/// Ordered palette for a color scheme
pub fn palette(scheme: ColorScheme) -> &'static [&'static str] {
    match scheme {
        ColorScheme::Purple => &PURPLE_PALETTE,
        ColorScheme::Blue => &BLUE_PALETTE,
        ColorScheme::Green => &GREEN_PALETTE,
        ColorScheme::Orange => &ORANGE_PALETTE,
        ColorScheme::Rainbow => &RAINBOW_PALETTE,
    }
}

/// Palette entry for `index`, cycling modulo the palette length
pub fn palette_color(scheme: ColorScheme, index: usize) -> &'static str {
    let colors = palette(scheme);
    colors[index % colors.len()]
}

// ============================================================================
// Field resolution & coercion
// ============================================================================

/// Result of resolving a chart's field reference at render time
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldRef<'a> {
    /// The name is known; `field_type` is `None` for undeclared row keys
    Resolved {
        name: &'a str,
        field_type: Option<FieldType>,
    },
    /// Nothing answers to this name
    Unresolved,
}

impl<'a> FieldRef<'a> {
    pub fn is_resolved(&self) -> bool {
        matches!(self, FieldRef::Resolved { .. })
    }

    pub fn name(&self) -> Option<&'a str> {
        match self {
            FieldRef::Resolved { name, .. } => Some(name),
            FieldRef::Unresolved => None,
        }
    }
}

/// Resolve `name` against the schema, falling back to the rows' own keys
pub fn resolve_field<'a>(schema: &Schema, rows: &[DataRow], name: &'a str) -> FieldRef<'a> {
    if name.is_empty() {
        return FieldRef::Unresolved;
    }
    if let Some(field) = schema.find(name) {
        return FieldRef::Resolved {
            name,
            field_type: Some(field.field_type),
        };
    }
    if rows.iter().any(|row| row.contains(name)) {
        return FieldRef::Resolved {
            name,
            field_type: None,
        };
    }
    FieldRef::Unresolved
}

/// Parse text as a number, defaulting to 0.
///
/// Never fails and never skips: blank, malformed or non-finite text all
/// contribute zero.
pub fn coerce_number(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => 0.0,
    }
}

// ============================================================================
// Derived chart data
// ============================================================================

/// Numeric axis domain. The lower bound is always zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NumericDomain {
    pub min: f64,
    pub max: f64,
}

impl NumericDomain {
    /// `[0, max(values)]`, never negative; empty input gives `[0, 0]`
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            min: 0.0,
            max: values.into_iter().fold(0.0, f64::max),
        }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Position of `value` within the domain as a fraction (0 for a
    /// degenerate domain)
    pub fn fraction(&self, value: f64) -> f64 {
        if self.span() <= 0.0 {
            0.0
        } else {
            (value - self.min) / self.span()
        }
    }
}

/// Domain of the independent axis
#[derive(Clone, Debug, PartialEq)]
pub enum XDomain {
    /// Distinct labels in first-seen order
    Categorical(Vec<String>),
    /// Scatter plots coerce x to numbers
    Numeric(NumericDomain),
}

/// One plotted row
#[derive(Clone, Debug, PartialEq)]
pub struct ChartPoint {
    /// Position of the source row in the row store
    pub row_index: usize,
    /// Raw x text
    pub label: String,
    /// Coerced x (scatter only, zero otherwise)
    pub x: f64,
    /// Coerced y
    pub value: f64,
    pub color: &'static str,
}

/// One pie/donut slice. Angles are radians clockwise from 12 o'clock.
#[derive(Clone, Debug, PartialEq)]
pub struct Slice {
    pub label: String,
    pub count: usize,
    pub start_angle: f64,
    pub end_angle: f64,
    pub color: &'static str,
}

impl Slice {
    pub fn mid_angle(&self) -> f64 {
        self.start_angle + (self.end_angle - self.start_angle) / 2.0
    }
}

/// Aggregate reading for a gauge
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaugeReading {
    pub mean: f64,
    pub max: f64,
    /// Needle angle in radians, `-π/2` (left) through `π/2` (right)
    pub angle: f64,
    pub color: &'static str,
}

impl GaugeReading {
    pub fn from_values(values: &[f64], color: &'static str) -> Self {
        let mean = if values.is_empty() {
            0.0
        } else {
            values.iter().sum::<f64>() / values.len() as f64
        };
        let domain = NumericDomain::from_values(values.iter().copied());
        let fraction = domain.fraction(mean).clamp(0.0, 1.0);
        Self {
            mean,
            max: domain.max,
            angle: -FRAC_PI_2 + fraction * PI,
            color,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ChartBody {
    /// A required field reference did not resolve
    Empty,
    /// Bar, horizontal bar, line, area, scatter
    Series {
        points: Vec<ChartPoint>,
        x_domain: XDomain,
        y_domain: NumericDomain,
    },
    /// Pie and donut
    Slices { slices: Vec<Slice>, total: usize },
    Gauge(GaugeReading),
}

/// Processed chart data ready for layout
#[derive(Clone, Debug, PartialEq)]
pub struct ChartData {
    pub chart_type: ChartType,
    pub title: String,
    /// X-axis field name
    pub x_label: String,
    /// Y-axis field name
    pub y_label: String,
    pub color_scheme: ColorScheme,
    pub body: ChartBody,
}

impl ChartData {
    /// True when there is nothing to draw besides chrome
    pub fn is_empty(&self) -> bool {
        match &self.body {
            ChartBody::Empty => true,
            ChartBody::Series { points, .. } => points.is_empty(),
            ChartBody::Slices { slices, .. } => slices.is_empty(),
            ChartBody::Gauge(_) => false,
        }
    }

    pub fn points(&self) -> &[ChartPoint] {
        match &self.body {
            ChartBody::Series { points, .. } => points,
            _ => &[],
        }
    }

    pub fn slices(&self) -> &[Slice] {
        match &self.body {
            ChartBody::Slices { slices, .. } => slices,
            _ => &[],
        }
    }

    pub fn y_domain(&self) -> Option<NumericDomain> {
        match &self.body {
            ChartBody::Series { y_domain, .. } => Some(*y_domain),
            ChartBody::Gauge(reading) => Some(NumericDomain {
                min: 0.0,
                max: reading.max,
            }),
            _ => None,
        }
    }

    pub fn x_domain(&self) -> Option<&XDomain> {
        match &self.body {
            ChartBody::Series { x_domain, .. } => Some(x_domain),
            _ => None,
        }
    }

    /// Category labels of a categorical x domain, or slice labels
    pub fn categories(&self) -> Vec<&str> {
        match &self.body {
            ChartBody::Series {
                x_domain: XDomain::Categorical(labels),
                ..
            } => labels.iter().map(String::as_str).collect(),
            ChartBody::Slices { slices, .. } => slices.iter().map(|s| s.label.as_str()).collect(),
            _ => Vec::new(),
        }
    }

    pub fn gauge(&self) -> Option<&GaugeReading> {
        match &self.body {
            ChartBody::Gauge(reading) => Some(reading),
            _ => None,
        }
    }
}

/// Group x values by exact string equality and count them, keeping
/// first-seen order
pub fn count_categories<'a>(labels: impl IntoIterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut group_order: Vec<String> = Vec::new();
    let mut counts: HashMap<&'a str, usize> = HashMap::new();

    for label in labels {
        let count = counts.entry(label).or_insert(0);
        if *count == 0 {
            group_order.push(label.to_string());
        }
        *count += 1;
    }

    group_order
        .into_iter()
        .map(|label| {
            let count = counts.get(label.as_str()).copied().unwrap_or(0);
            (label, count)
        })
        .collect()
}

/// Distinct labels in first-seen order
fn distinct_labels<'a>(labels: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    count_categories(labels)
        .into_iter()
        .map(|(label, _)| label)
        .collect()
}

/// Process rows into chart-ready data for one config.
///
/// This performs:
/// 1. Field resolution (unresolved → empty body)
/// 2. Ordering (line/area re-sort by raw x text)
/// 3. Numeric coercion of y (and x for scatter)
/// 4. Categorical counting for pie/donut
/// 5. Domain derivation and color assignment
///
/// The output depends only on the inputs, so identical inputs always give
/// identical domains, slice order and colors.
pub fn process_chart_data(schema: &Schema, rows: &[DataRow], config: &ChartConfig) -> ChartData {
    let x_ref = resolve_field(schema, rows, &config.x_axis);
    let y_ref = resolve_field(schema, rows, &config.y_axis);

    let body = match config.chart_type {
        ChartType::Pie | ChartType::Donut => match x_ref.name() {
            Some(x) => slice_body(rows, x, config.color_scheme),
            None => ChartBody::Empty,
        },
        ChartType::Gauge => {
            let values: Vec<f64> = match y_ref.name() {
                Some(y) => rows.iter().map(|r| coerce_number(r.get(y))).collect(),
                None => Vec::new(),
            };
            ChartBody::Gauge(GaugeReading::from_values(
                &values,
                palette_color(config.color_scheme, 0),
            ))
        }
        chart_type => match (x_ref.name(), y_ref.name()) {
            (Some(x), Some(y)) => series_body(rows, x, y, chart_type, config.color_scheme),
            _ => ChartBody::Empty,
        },
    };

    tracing::trace!(
        chart = %config.id,
        chart_type = config.chart_type.as_str(),
        rows = rows.len(),
        "Processed chart data"
    );

    ChartData {
        chart_type: config.chart_type,
        title: config.title.clone(),
        x_label: config.x_axis.clone(),
        y_label: config.y_axis.clone(),
        color_scheme: config.color_scheme,
        body,
    }
}

fn series_body(
    rows: &[DataRow],
    x: &str,
    y: &str,
    chart_type: ChartType,
    scheme: ColorScheme,
) -> ChartBody {
    let mut ordered: Vec<(usize, &DataRow)> = rows.iter().enumerate().collect();
    if chart_type.sorts_by_label() {
        // Raw text comparison: "10" sorts before "2". Stable for ties.
        ordered.sort_by(|a, b| a.1.get(x).cmp(b.1.get(x)));
    }

    let color = palette_color(scheme, 0);
    let is_scatter = chart_type == ChartType::Scatter;

    let points: Vec<ChartPoint> = ordered
        .iter()
        .map(|(row_index, row)| ChartPoint {
            row_index: *row_index,
            label: row.get(x).to_string(),
            x: if is_scatter { coerce_number(row.get(x)) } else { 0.0 },
            value: coerce_number(row.get(y)),
            color,
        })
        .collect();

    let x_domain = if is_scatter {
        XDomain::Numeric(NumericDomain::from_values(points.iter().map(|p| p.x)))
    } else {
        XDomain::Categorical(distinct_labels(points.iter().map(|p| p.label.as_str())))
    };
    let y_domain = NumericDomain::from_values(points.iter().map(|p| p.value));

    ChartBody::Series {
        points,
        x_domain,
        y_domain,
    }
}

fn slice_body(rows: &[DataRow], x: &str, scheme: ColorScheme) -> ChartBody {
    let counts = count_categories(rows.iter().map(|r| r.get(x)));
    let total: usize = counts.iter().map(|(_, c)| c).sum();
    if total == 0 {
        return ChartBody::Slices {
            slices: Vec::new(),
            total: 0,
        };
    }

    let mut angle = 0.0;
    let slices = counts
        .into_iter()
        .enumerate()
        .map(|(i, (label, count))| {
            let sweep = TAU * count as f64 / total as f64;
            let slice = Slice {
                label,
                count,
                start_angle: angle,
                end_angle: angle + sweep,
                color: palette_color(scheme, i),
            };
            angle += sweep;
            slice
        })
        .collect();

    ChartBody::Slices { slices, total }
}
