//! Market data seam.

use crate::{PriceSeries, Result};
use std::future::Future;

/// Anything that can supply the full daily close history of a symbol.
///
/// Implementations are expected to return the longest history they have;
/// studies recompute everything from scratch on each run.
pub trait PriceSource {
    /// Fetch the daily close history for `symbol`, oldest first.
    fn daily_closes(&self, symbol: &str) -> impl Future<Output = Result<PriceSeries>> + Send;
}

/// A fixed, in-memory series. Useful for local files and tests.
impl PriceSource for PriceSeries {
    async fn daily_closes(&self, _symbol: &str) -> Result<PriceSeries> {
        Ok(self.clone())
    }
}
