//! Outbound alert seam.

use std::future::Future;
use std::path::Path;

/// A destination for alert messages and chart images.
///
/// The destination (chat, channel, mailbox) is part of the implementor's own
/// configuration; callers only supply content.
pub trait Notifier {
    /// Error produced by a failed delivery.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Send a plain text message.
    fn send_message(&self, text: &str) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Send the image at `path` with a caption.
    fn send_photo(
        &self,
        caption: &str,
        path: &Path,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;
}
