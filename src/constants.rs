//! Application-wide constants.
//!
//! Centralizes magic numbers and layout values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Session Storage
// ============================================================================

/// Storage key the session snapshot is written under
pub const SESSION_STORAGE_KEY: &str = "dataPlayground";

/// Default storage quota in bytes (browsers allow ~5MB per origin)
pub const DEFAULT_STORAGE_QUOTA_BYTES: usize = 5 * 1024 * 1024;

/// Application directory name under the platform config/cache dirs
pub const APP_DIR_NAME: &str = "data-playground";

/// Settings file name inside the config directory
pub const SETTINGS_FILE_NAME: &str = "settings.json";

// ============================================================================
// Chart Surface
// ============================================================================

/// Default drawing surface width in pixels
pub const DEFAULT_CHART_WIDTH: f64 = 800.0;

/// Default drawing surface height in pixels
pub const DEFAULT_CHART_HEIGHT: f64 = 500.0;

/// Default margins around the plot area (top, right, bottom, left)
pub const DEFAULT_CHART_MARGIN: (f64, f64, f64, f64) = (50.0, 50.0, 70.0, 70.0);

/// Font family for every text element
pub const CHART_FONT: &str = "sans-serif";

/// Chart title font size
pub const TITLE_FONT_SIZE: f64 = 20.0;

/// Tick, legend and slice label font size
pub const LABEL_FONT_SIZE: f64 = 12.0;

/// Approximate number of ticks on a linear axis
pub const AXIS_TICK_COUNT: usize = 10;

/// Opacity of grid lines
pub const GRID_OPACITY: f64 = 0.2;

/// Resting opacity of bars, slices and points
pub const MARK_OPACITY: f64 = 0.8;

/// Pixel gap on each side of a bar inside its category band
pub const BAR_GAP: u32 = 8;

/// Stroke width of line and area outlines
pub const LINE_STROKE_WIDTH: u32 = 3;

/// Point radius on line charts
pub const LINE_POINT_RADIUS: i32 = 6;

/// Point radius on area charts
pub const AREA_POINT_RADIUS: i32 = 5;

/// Point radius on scatter charts
pub const SCATTER_POINT_RADIUS: i32 = 8;

/// Resting opacity of scatter points
pub const SCATTER_OPACITY: f64 = 0.7;

/// Fill opacity under the line of a line chart
pub const LINE_FILL_OPACITY: f64 = 0.12;

/// Fill opacity of the area of an area chart
pub const AREA_FILL_OPACITY: f64 = 0.4;

/// Height of one legend entry
pub const LEGEND_ROW_HEIGHT: i32 = 20;

/// Side of the legend color swatch
pub const LEGEND_SWATCH_SIZE: i32 = 12;

/// Width reserved for the legend at the right of radial charts
pub const LEGEND_WIDTH: i32 = 150;

// ============================================================================
// Radial Charts
// ============================================================================

/// Outer radius of pie/donut slices as a fraction of the available radius
pub const PIE_OUTER_RATIO: f64 = 0.8;

/// Inner radius of donut slices as a fraction of the available radius
pub const DONUT_INNER_RATIO: f64 = 0.5;

/// Radius of slice label anchors as a fraction of the available radius
pub const PIE_LABEL_RATIO: f64 = 0.9;

/// Inner radius of the gauge band
pub const GAUGE_INNER_RATIO: f64 = 0.6;

/// Outer radius of the gauge band, also the needle length
pub const GAUGE_OUTER_RATIO: f64 = 0.8;

/// Gauge background band color
pub const GAUGE_TRACK_COLOR: &str = "#e5e5e5";

/// Needle color
pub const GAUGE_NEEDLE_COLOR: &str = "#444";

/// Needle hub radius as a fraction of the available radius
pub const GAUGE_HUB_RATIO: f64 = 0.02;

/// Largest angle step when approximating an arc by a polygon (radians)
pub const ARC_STEP: f64 = std::f64::consts::PI / 90.0;

// ============================================================================
// Animation & Timing
// ============================================================================

/// Entrance animation duration for bars and slices in milliseconds
pub const ANIMATION_DURATION_MS: u64 = 800;

// ============================================================================
// Sample Data
// ============================================================================

/// Rows generated for schemas without a curated sample dataset
pub const GENERIC_SAMPLE_ROWS: usize = 10;
