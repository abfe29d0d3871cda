//! Error types for the Telegram client.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when sending to Telegram.
#[derive(Debug, Error)]
pub enum TelegramError {
    /// Bot token not configured.
    #[error("{0} environment variable not set")]
    MissingToken(&'static str),

    /// Destination chat not configured.
    #[error("{0} environment variable not set")]
    MissingChatId(&'static str),

    /// The image to upload does not exist.
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The image exists but could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// File being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// HTTP request failed. The request URL, which carries the bot token,
    /// is stripped before wrapping.
    #[error("HTTP request failed: {0}")]
    Request(reqwest::Error),

    /// The Bot API answered with `ok: false` or a non-success status.
    #[error("Telegram API error: {0}")]
    Api(String),
}

impl From<reqwest::Error> for TelegramError {
    fn from(e: reqwest::Error) -> Self {
        Self::Request(e.without_url())
    }
}
