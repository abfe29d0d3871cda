//! Alert delivery.
//!
//! A delivery is one text message followed by the three charts, in fixed
//! order. Each call is attempted once; a failure is logged and the remaining
//! calls still go out.

use crate::chart::ChartSet;
use crate::message::AlertMessage;
use crate::traits::Notifier;
use serde::Serialize;
use tracing::{info, warn};

/// What happened to the calls of one delivery.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Delivery {
    /// Whether the text message went out.
    pub message_sent: bool,
    /// Charts sent successfully.
    pub photos_sent: usize,
    /// Calls that failed.
    pub failures: usize,
}

impl Delivery {
    /// Whether every call succeeded.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.message_sent && self.failures == 0
    }
}

/// Send `alert` and the charts in `charts` through `notifier`.
///
/// Never fails: errors are logged with `warn!` and counted.
pub async fn send_alert<N: Notifier>(
    notifier: &N,
    alert: &AlertMessage,
    charts: &ChartSet,
) -> Delivery {
    let mut delivery = Delivery::default();

    match notifier.send_message(&alert.text).await {
        Ok(()) => delivery.message_sent = true,
        Err(e) => {
            warn!(error = %e, "failed to send alert message");
            delivery.failures += 1;
        }
    }

    for (caption, path) in alert.captions.iter().zip(charts.paths()) {
        match notifier.send_photo(caption, path).await {
            Ok(()) => delivery.photos_sent += 1,
            Err(e) => {
                warn!(error = %e, path = %path.display(), "failed to send chart");
                delivery.failures += 1;
            }
        }
    }

    info!(
        photos = delivery.photos_sent,
        failures = delivery.failures,
        "alert dispatched"
    );
    delivery
}

#[cfg(test)]
pub(crate) mod testing {
    //! A notifier that records calls, optionally failing some of them.

    use crate::traits::Notifier;
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, thiserror::Error)]
    #[error("chat unreachable")]
    pub(crate) struct Unreachable;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub(crate) enum Sent {
        Message(String),
        Photo(String, PathBuf),
    }

    #[derive(Debug, Default)]
    pub(crate) struct Recorder {
        pub(crate) sent: Mutex<Vec<Sent>>,
        pub(crate) fail_message: bool,
        pub(crate) fail_photo: Option<usize>,
        pub(crate) photo_attempts: AtomicUsize,
    }

    impl Recorder {
        pub(crate) fn sent(&self) -> Vec<Sent> {
            self.sent.lock().unwrap().clone()
        }
    }

    impl Notifier for Recorder {
        type Error = Unreachable;

        async fn send_message(&self, text: &str) -> Result<(), Unreachable> {
            if self.fail_message {
                return Err(Unreachable);
            }
            self.sent.lock().unwrap().push(Sent::Message(text.to_string()));
            Ok(())
        }

        async fn send_photo(&self, caption: &str, path: &Path) -> Result<(), Unreachable> {
            let attempt = self.photo_attempts.fetch_add(1, Ordering::SeqCst);
            if self.fail_photo == Some(attempt) {
                return Err(Unreachable);
            }
            self.sent
                .lock()
                .unwrap()
                .push(Sent::Photo(caption.to_string(), path.to_path_buf()));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{Recorder, Sent};
    use super::*;
    use crate::signals::CrossingPair;
    use std::path::Path;

    fn fixtures() -> (AlertMessage, ChartSet) {
        let pair = CrossingPair::PriceVsMa { window: 50 };
        (
            AlertMessage::new("BTC", &pair),
            ChartSet::for_study(Path::new("out"), "BTC", &pair),
        )
    }

    #[tokio::test]
    async fn test_message_then_photos_in_order() {
        let (alert, charts) = fixtures();
        let recorder = Recorder::default();
        let delivery = send_alert(&recorder, &alert, &charts).await;

        assert!(delivery.is_complete());
        assert_eq!(delivery.photos_sent, 3);
        let sent = recorder.sent();
        assert_eq!(sent[0], Sent::Message(alert.text.clone()));
        for (k, path) in charts.paths().into_iter().enumerate() {
            assert_eq!(sent[k + 1], Sent::Photo(alert.captions[k].clone(), path.to_path_buf()));
        }
    }

    #[tokio::test]
    async fn test_failures_are_suppressed() {
        let (alert, charts) = fixtures();
        let recorder = Recorder {
            fail_message: true,
            fail_photo: Some(1),
            ..Recorder::default()
        };
        let delivery = send_alert(&recorder, &alert, &charts).await;

        assert!(!delivery.message_sent);
        assert_eq!(delivery.failures, 2);
        // The third photo still goes out after the second one fails.
        assert_eq!(delivery.photos_sent, 2);
        assert!(!delivery.is_complete());
    }
}
