#![doc(issue_tracker_base_url = "https://github.com/factordynamics/crossings/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # crossings
//!
//! Moving-average crossunder studies with chart rendering and chat alerts.
//!
//! crossings is an umbrella crate that re-exports the crossings sub-crates and
//! ties them together into a study pipeline. A study takes a symbol and one
//! of two comparisons, price against a moving average or a fast moving
//! average against a slow one, and:
//!
//! 1. fetches the full daily close history,
//! 2. finds every historical crossunder that held for the persistence window,
//! 3. measures forward returns after each one at fixed horizons,
//! 4. draws three charts,
//! 5. sends an alert with the charts if the last bar is a fresh crossunder.
//!
//! ## Quick Start
//!
//! ```ignore
//! use crossings::chart::PngRenderer;
//! use crossings::fmp::FmpClient;
//! use crossings::signals::CrossingPair;
//! use crossings::telegram::TelegramClient;
//! use crossings::{StudyConfig, run_study};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = FmpClient::from_env()?;
//!     let notifier = TelegramClient::from_env().ok();
//!     let report = run_study(
//!         &source,
//!         &PngRenderer,
//!         notifier.as_ref(),
//!         "BTCUSD",
//!         CrossingPair::MaVsMa { fast: 50, slow: 200 },
//!         &StudyConfig::default(),
//!     )
//!     .await?;
//!     println!("{} events, alert: {:?}", report.events.len(), report.alert);
//!     Ok(())
//! }
//! ```
//!
//! ## Crate Organization
//!
//! - [`traits`] - Price series, errors, and the [`PriceSource`] / [`Notifier`] seams
//! - [`signals`] - Moving averages, crossunder detection, live alert check
//! - [`eval`] - Forward returns and their statistics
//! - [`chart`] - PNG charts
//! - [`fmp`] - Financial Modeling Prep price history
//! - [`telegram`] - Telegram Bot API notifications

/// Version information for the crossings crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Sub-crates
// ============================================================================

/// Core types and collaborator traits.
pub mod traits {
    pub use crossings_traits::*;
}

/// Moving averages, crossunder events and the live alert check.
pub mod signals {
    pub use crossings_signals::*;
}

/// Forward-return statistics.
///
/// Returns are measured at each of [`HORIZONS`](eval::HORIZONS) trading days
/// after an event, and only events with history past the longest horizon
/// take part.
pub mod eval {
    pub use crossings_eval::*;
}

/// PNG rendering of the three study charts.
pub mod chart {
    pub use crossings_chart::*;
}

/// Financial Modeling Prep (FMP) API client.
///
/// ## Setup
///
/// 1. Get an API key at <https://financialmodelingprep.com/>
/// 2. Set the `FMP_API_KEY` environment variable or add it to a `.env` file
pub mod fmp {
    pub use crossings_fmp::*;
}

/// Telegram Bot API client.
///
/// Reads `TG_BOT_TOKEN_CROSSINGS` and `TELEGRAM_CHAT_ID` from the environment
/// or a `.env` file.
pub mod telegram {
    pub use crossings_telegram::*;
}

// ============================================================================
// Pipeline
// ============================================================================

pub mod dispatch;
pub mod message;
pub mod output;
pub mod study;

pub use crossings_traits::{CrossingsError, Notifier, PriceSource, Result};
pub use dispatch::{Delivery, send_alert};
pub use message::AlertMessage;
pub use output::{DEFAULT_OUTPUT_DIR, clear_output_dir};
pub use study::{StudyConfig, StudyReport, run_study};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
    }
}
