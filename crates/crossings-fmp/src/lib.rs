//! Financial Modeling Prep (FMP) price client for Crossings.
//!
//! This crate fetches end-of-day price history from the
//! [Financial Modeling Prep](https://financialmodelingprep.com/) API and turns
//! it into a [`PriceSeries`](crossings_traits::PriceSeries).
//!
//! # Usage
//!
//! ```rust,ignore
//! use crossings_fmp::FmpClient;
//! use crossings_traits::PriceSource;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FmpClient::from_env()?;
//!
//!     // Raw end-of-day rows, newest first as the API returns them
//!     let rows = client.historical_prices("BTCUSD", Some("2020-01-01")).await?;
//!
//!     // Full history as an oldest-first close series
//!     let series = client.daily_closes("BTCUSD").await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Environment Variables
//!
//! Set `FMP_API_KEY` in your environment or `.env` file:
//!
//! ```bash
//! FMP_API_KEY=your_api_key_here
//! ```

mod client;
mod error;
mod types;

pub use client::FmpClient;
pub use error::FmpError;
pub use types::*;

/// Result type for FMP operations.
pub type Result<T> = std::result::Result<T, FmpError>;
