#![doc(issue_tracker_base_url = "https://github.com/factordynamics/crossings/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core types and collaborator traits for Crossings.
//!
//! This crate holds the price series model shared by every other crate, the
//! common error type, a couple of statistics helpers, and the two seams the
//! study pipeline talks through: [`PriceSource`] for market data and
//! [`Notifier`] for outbound alerts.

/// The version of the crossings-traits crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod error;
pub mod notify;
pub mod source;
pub mod stats;
pub mod types;

// Re-exports
pub use error::{CrossingsError, Result};
pub use notify::Notifier;
pub use source::PriceSource;
pub use types::{Date, PricePoint, PriceSeries};
