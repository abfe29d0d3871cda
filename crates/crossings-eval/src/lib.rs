//! Forward-return statistics for crossunder events.
//!
//! After each confirmed event, the close is compared with the close a fixed
//! number of trading days later, for every horizon in [`HORIZONS`]. Events
//! without enough trailing history for the longest horizon are left out of
//! the statistics entirely, so every horizon is averaged over the same events.
//!
//! # Example
//!
//! ```rust,ignore
//! use crossings_eval::ReturnSummary;
//!
//! let summary = ReturnSummary::standard(&series.closes(), &events);
//! for (horizon, mean) in summary.average.iter() {
//!     println!("{horizon:>4}d  {mean:+.4}");
//! }
//! ```

pub mod forward;
pub mod summary;

// Re-export main types
pub use forward::{EventReturns, HORIZONS, forward_return};
pub use summary::{AverageReturns, PositiveNegativeCounts, ReturnSummary, SignCounts};
