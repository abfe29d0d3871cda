//! Error types for the Crossings toolkit.
//!
//! Collaborator crates (market data, rendering) define their own error enums
//! and convert into [`CrossingsError`] so the study pipeline can propagate
//! everything with `?`.

use thiserror::Error;

/// The main error type for Crossings operations.
#[derive(Debug, Error)]
pub enum CrossingsError {
    /// Error due to invalid or malformed data.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Error when a required column is missing from the data.
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// Error from Polars operations.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Error fetching data from external sources.
    #[error("Data fetch error: {0}")]
    DataFetch(String),

    /// Error producing a chart artifact.
    #[error("Render error: {0}")]
    Render(String),

    /// Filesystem error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for Crossings operations.
pub type Result<T> = std::result::Result<T, CrossingsError>;
