//! Error types for chart drawing

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

/// Errors raised while drawing a chart onto a backend
#[derive(Error, Debug)]
pub enum RenderError {
    /// The drawing backend or layout rejected an operation
    #[error("Drawing failed: {0}")]
    Drawing(String),
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for RenderError {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        RenderError::Drawing(err.to_string())
    }
}

/// Result type alias for chart drawing
pub type RenderResult<T> = Result<T, RenderError>;
