//! Error types for chart rendering.

use crossings_traits::CrossingsError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while rendering or saving a chart.
#[derive(Debug, Error)]
pub enum ChartError {
    /// Encoding or writing the image failed.
    #[error("Failed to save {}: {source}", path.display())]
    Save {
        /// Target file.
        path: PathBuf,
        /// Underlying image error.
        source: image::ImageError,
    },

    /// The output directory could not be created.
    #[error("Failed to create output directory: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ChartError> for CrossingsError {
    fn from(e: ChartError) -> Self {
        Self::Render(e.to_string())
    }
}
