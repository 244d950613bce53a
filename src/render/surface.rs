//! Drawing surface dimensions shared by every chart type.

use crate::constants::{DEFAULT_CHART_HEIGHT, DEFAULT_CHART_MARGIN, DEFAULT_CHART_WIDTH};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        let (top, right, bottom, left) = DEFAULT_CHART_MARGIN;
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// Drawing surface of known pixel dimensions
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Surface {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
            margin: Margin::default(),
        }
    }
}

impl Surface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Plot area width inside the margins (never negative)
    pub fn inner_width(&self) -> f64 {
        (self.width - self.margin.left - self.margin.right).max(0.0)
    }

    /// Plot area height inside the margins (never negative)
    pub fn inner_height(&self) -> f64 {
        (self.height - self.margin.top - self.margin.bottom).max(0.0)
    }

    /// Backend size in whole pixels, at least 1x1
    pub fn pixel_size(&self) -> (u32, u32) {
        (px(self.width).max(1) as u32, px(self.height).max(1) as u32)
    }
}

/// Round a length to whole non-negative pixels
pub(crate) fn px(length: f64) -> i32 {
    if length.is_finite() && length > 0.0 {
        length.round().min(i32::MAX as f64) as i32
    } else {
        0
    }
}
