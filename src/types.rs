//! Core types for the data playground.
//!
//! This module defines the serializable data structures shared by the data
//! model, the chart engine, the JSON codec and the session snapshot. The JSON
//! shapes here are the persisted/exported wire format, so field renames are
//! load-bearing.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Schema Types
// ============================================================================

/// Declared type of a schema field.
///
/// Values are always stored as text; the type only drives validation and
/// how the chart engine interprets a column.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    Text,
    Number,
    Date,
}

impl FieldType {
    pub fn label(&self) -> &'static str {
        match self {
            FieldType::Text => "Text",
            FieldType::Number => "Number",
            FieldType::Date => "Date",
        }
    }

    /// Wire name used in JSON documents
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Number => "number",
            FieldType::Date => "date",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "text" => Some(FieldType::Text),
            "number" => Some(FieldType::Number),
            "date" => Some(FieldType::Date),
            _ => None,
        }
    }

    pub fn all() -> &'static [FieldType] {
        &[FieldType::Text, FieldType::Number, FieldType::Date]
    }

    /// Whether a row must carry a non-empty value for a field of this type
    pub fn is_required(&self) -> bool {
        !matches!(self, FieldType::Number)
    }
}

/// A single named, typed column definition
#[derive(Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

impl SchemaField {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
        }
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Text)
    }

    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Number)
    }

    pub fn date(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Date)
    }
}

// ============================================================================
// Row Types
// ============================================================================

/// One record, keyed by field name. Every value is text.
///
/// Rows are sparse: a missing key reads as the empty string, and keys that
/// the schema does not declare are carried along untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataRow {
    values: BTreeMap<String, String>,
}

impl DataRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a row from `(field, value)` pairs
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Value for `field`, or `""` when the row lacks the key
    pub fn get(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.values.insert(field.into(), value.into());
    }

    pub fn contains(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.values.remove(field)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

// ============================================================================
// Chart Types
// ============================================================================

/// Types of charts available
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartType {
    #[default]
    Bar,
    Pie,
    Line,
    Scatter,
    Area,
    Donut,
    HorizontalBar,
    Gauge,
}

impl ChartType {
    pub fn label(&self) -> &'static str {
        match self {
            ChartType::Bar => "Bar",
            ChartType::Pie => "Pie",
            ChartType::Line => "Line",
            ChartType::Scatter => "Scatter",
            ChartType::Area => "Area",
            ChartType::Donut => "Donut",
            ChartType::HorizontalBar => "Horizontal Bar",
            ChartType::Gauge => "Gauge",
        }
    }

    /// Wire name used in the session document
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::Bar => "bar",
            ChartType::Pie => "pie",
            ChartType::Line => "line",
            ChartType::Scatter => "scatter",
            ChartType::Area => "area",
            ChartType::Donut => "donut",
            ChartType::HorizontalBar => "horizontal-bar",
            ChartType::Gauge => "gauge",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::all().iter().copied().find(|t| t.as_str() == value)
    }

    pub fn all() -> &'static [ChartType] {
        &[
            ChartType::Bar,
            ChartType::HorizontalBar,
            ChartType::Line,
            ChartType::Area,
            ChartType::Scatter,
            ChartType::Pie,
            ChartType::Donut,
            ChartType::Gauge,
        ]
    }

    /// Pie and donut count occurrences of x values instead of plotting y
    pub fn is_categorical(&self) -> bool {
        matches!(self, ChartType::Pie | ChartType::Donut)
    }

    /// Line and area re-sort rows by the raw x text before drawing
    pub fn sorts_by_label(&self) -> bool {
        matches!(self, ChartType::Line | ChartType::Area)
    }

    pub fn uses_x_axis(&self) -> bool {
        !matches!(self, ChartType::Gauge)
    }

    pub fn uses_y_axis(&self) -> bool {
        !self.is_categorical()
    }
}

/// Named color palettes
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Purple,
    Blue,
    Green,
    Orange,
    Rainbow,
}

impl ColorScheme {
    pub fn label(&self) -> &'static str {
        match self {
            ColorScheme::Purple => "Purple",
            ColorScheme::Blue => "Blue",
            ColorScheme::Green => "Green",
            ColorScheme::Orange => "Orange",
            ColorScheme::Rainbow => "Rainbow",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::Purple => "purple",
            ColorScheme::Blue => "blue",
            ColorScheme::Green => "green",
            ColorScheme::Orange => "orange",
            ColorScheme::Rainbow => "rainbow",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::all().iter().copied().find(|s| s.as_str() == value)
    }

    pub fn all() -> &'static [ColorScheme] {
        &[
            ColorScheme::Purple,
            ColorScheme::Blue,
            ColorScheme::Green,
            ColorScheme::Orange,
            ColorScheme::Rainbow,
        ]
    }
}

/// User-editable description of one visualization.
///
/// `x_axis`/`y_axis` hold field *names*. They are resolved at render time and
/// may dangle after the schema changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartConfig {
    pub id: String,
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub title: String,
    pub x_axis: String,
    pub y_axis: String,
    pub show_legend: bool,
    pub show_grid: bool,
    pub show_labels: bool,
    pub color_scheme: ColorScheme,
    pub animation: bool,
}

/// A bar chart with every display option on and no id or axes. Missing
/// keys in a stored chart read from here.
impl Default for ChartConfig {
    fn default() -> Self {
        Self::new("", ChartType::default())
    }
}

impl ChartConfig {
    pub fn new(id: impl Into<String>, chart_type: ChartType) -> Self {
        Self {
            id: id.into(),
            chart_type,
            title: String::new(),
            x_axis: String::new(),
            y_axis: String::new(),
            show_legend: true,
            show_grid: true,
            show_labels: true,
            color_scheme: ColorScheme::default(),
            animation: true,
        }
    }

    /// Fresh opaque id of the form `chart-<uuid>`
    pub fn generate_id() -> String {
        format!("chart-{}", uuid::Uuid::new_v4())
    }

    pub fn with_axes(mut self, x_axis: impl Into<String>, y_axis: impl Into<String>) -> Self {
        self.x_axis = x_axis.into();
        self.y_axis = y_axis.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_color_scheme(mut self, color_scheme: ColorScheme) -> Self {
        self.color_scheme = color_scheme;
        self
    }

    pub fn with_animation(mut self, animation: bool) -> Self {
        self.animation = animation;
        self
    }

    /// Merge a partial update into this config. The id is never changed.
    pub fn apply(&mut self, update: &ChartConfigUpdate) {
        if let Some(chart_type) = update.chart_type {
            self.chart_type = chart_type;
        }
        if let Some(ref title) = update.title {
            self.title = title.clone();
        }
        if let Some(ref x_axis) = update.x_axis {
            self.x_axis = x_axis.clone();
        }
        if let Some(ref y_axis) = update.y_axis {
            self.y_axis = y_axis.clone();
        }
        if let Some(show_legend) = update.show_legend {
            self.show_legend = show_legend;
        }
        if let Some(show_grid) = update.show_grid {
            self.show_grid = show_grid;
        }
        if let Some(show_labels) = update.show_labels {
            self.show_labels = show_labels;
        }
        if let Some(color_scheme) = update.color_scheme {
            self.color_scheme = color_scheme;
        }
        if let Some(animation) = update.animation {
            self.animation = animation;
        }
    }
}

/// Partial chart config; `None` fields are left untouched by [`ChartConfig::apply`]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfigUpdate {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub chart_type: Option<ChartType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_legend: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_grid: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_labels: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_scheme: Option<ColorScheme>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<bool>,
}

impl ChartConfigUpdate {
    pub fn chart_type(mut self, chart_type: ChartType) -> Self {
        self.chart_type = Some(chart_type);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn x_axis(mut self, x_axis: impl Into<String>) -> Self {
        self.x_axis = Some(x_axis.into());
        self
    }

    pub fn y_axis(mut self, y_axis: impl Into<String>) -> Self {
        self.y_axis = Some(y_axis.into());
        self
    }

    pub fn show_legend(mut self, show: bool) -> Self {
        self.show_legend = Some(show);
        self
    }

    pub fn show_grid(mut self, show: bool) -> Self {
        self.show_grid = Some(show);
        self
    }

    pub fn show_labels(mut self, show: bool) -> Self {
        self.show_labels = Some(show);
        self
    }

    pub fn color_scheme(mut self, color_scheme: ColorScheme) -> Self {
        self.color_scheme = Some(color_scheme);
        self
    }

    pub fn animation(mut self, animation: bool) -> Self {
        self.animation = Some(animation);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

// ============================================================================
// Session Snapshot
// ============================================================================

/// The complete persisted state, written wholesale on every mutation.
///
/// Missing sections deserialize as empty so that older or partial documents
/// still restore.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    #[serde(default)]
    pub schema: Vec<SchemaField>,
    #[serde(default)]
    pub data: Vec<DataRow>,
    #[serde(default)]
    pub charts: Vec<ChartConfig>,
    #[serde(rename = "activeChart", default)]
    pub active_chart: Option<String>,
}
