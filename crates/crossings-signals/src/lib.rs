//! Crossunder signals for Crossings.
//!
//! This crate builds the lines being compared and finds the days where the
//! faster line drops below the slower one:
//! - [`moving_average`]: trailing simple moving averages
//! - [`crossunder`]: historical events, confirmed by a persistence filter
//! - [`alert`]: the live check on the last two bars, without persistence
//! - [`pair`]: the two supported comparisons (price vs MA, MA vs MA)
//!
//! # Example
//!
//! ```ignore
//! use crossings_signals::{CrossingPair, CrossunderDetector};
//!
//! let pair = CrossingPair::MaVsMa { fast: 50, slow: 200 };
//! let closes = series.closes();
//! let events = CrossunderDetector::default().detect(
//!     &series,
//!     &pair.fast_line(&closes),
//!     &pair.slow_line(&closes),
//! );
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod alert;
pub mod crossunder;
pub mod moving_average;
pub mod pair;

// Re-export key types
pub use alert::{is_live_crossunder, live_crossunder};
pub use crossunder::{CrossunderDetector, CrossunderEvent, DEFAULT_PERSISTENCE};
pub use moving_average::simple_moving_average;
pub use pair::{CrossingPair, ParsePairError};
