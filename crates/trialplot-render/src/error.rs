// SPDX-License-Identifier: MIT OR Apache-2.0
use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

/// Errors raised while drawing or writing output
#[derive(Error, Debug)]
pub enum RenderError {
    /// The drawing backend rejected an operation
    #[error("chart error: {0}")]
    Chart(String),
    /// An output target could not be written
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl<E> From<DrawingAreaErrorKind<E>> for RenderError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        Self::Chart(err.to_string())
    }
}

/// Result type for rendering
pub type Result<T> = std::result::Result<T, RenderError>;
