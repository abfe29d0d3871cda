//! FMP API client implementation.

use crate::{
    Result,
    error::FmpError,
    types::{HistoricalPrice, to_series},
};
use crossings_traits::{PriceSeries, PriceSource};
use reqwest::Client;
use std::env;
use tracing::{debug, info};

/// Base URL for the FMP stable API.
const FMP_BASE_URL: &str = "https://financialmodelingprep.com/stable";

/// Start date requested when the whole history is wanted.
const FULL_HISTORY_START: &str = "1980-01-01";

/// Financial Modeling Prep API client.
#[derive(Debug, Clone)]
pub struct FmpClient {
    client: Client,
    api_key: String,
}

impl FmpClient {
    /// Create a new FMP client with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
        }
    }

    /// Create a new FMP client from the `FMP_API_KEY` environment variable.
    ///
    /// This will also load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment variable is not set.
    pub fn from_env() -> Result<Self> {
        // Try to load .env file (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_key = env::var("FMP_API_KEY").map_err(|_| FmpError::MissingApiKey)?;

        Ok(Self::new(api_key))
    }

    /// Build a URL with the API key.
    fn url(&self, endpoint: &str) -> String {
        if endpoint.contains('?') {
            format!("{FMP_BASE_URL}/{endpoint}&apikey={}", self.api_key)
        } else {
            format!("{FMP_BASE_URL}/{endpoint}?apikey={}", self.api_key)
        }
    }

    /// Make a GET request and parse the JSON response.
    async fn get<T: serde::de::DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = self.url(endpoint);
        debug!(endpoint, "FMP request");
        let response = self.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(FmpError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(FmpError::Api(format!("HTTP {status}: {text}")));
        }

        let text = response.text().await?;

        // Check for error responses
        if text.contains("\"Error Message\"") || text.contains("\"error\"") {
            return Err(FmpError::Api(text));
        }

        serde_json::from_str(&text).map_err(|e| {
            FmpError::Json(serde_json::Error::io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Failed to parse: {e}. Response: {text}"),
            )))
        })
    }

    /// Get historical daily prices for a symbol.
    ///
    /// # Arguments
    ///
    /// * `symbol` - Ticker symbol (e.g. "AAPL", "BTCUSD")
    /// * `from` - Start date (YYYY-MM-DD); the API default window when `None`
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn historical_prices(
        &self,
        symbol: &str,
        from: Option<&str>,
    ) -> Result<Vec<HistoricalPrice>> {
        let mut endpoint = format!("historical-price-eod/full?symbol={}", symbol.to_uppercase());
        if let Some(f) = from {
            endpoint.push_str(&format!("&from={f}"));
        }
        // The stable API returns a flat array, not a wrapped response
        self.get(&endpoint).await
    }

    /// Get the full daily close history of a symbol, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or no usable rows come back.
    pub async fn full_history(&self, symbol: &str) -> Result<PriceSeries> {
        let rows = self
            .historical_prices(symbol, Some(FULL_HISTORY_START))
            .await?;
        let series = to_series(&rows);
        if series.is_empty() {
            return Err(FmpError::NoData(symbol.to_uppercase()));
        }
        info!(symbol, bars = series.len(), "fetched price history");
        Ok(series)
    }
}

impl PriceSource for FmpClient {
    async fn daily_closes(&self, symbol: &str) -> crossings_traits::Result<PriceSeries> {
        Ok(self.full_history(symbol).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_building() {
        let client = FmpClient::new("test_key");
        assert_eq!(
            client.url("quote?symbol=AAPL"),
            "https://financialmodelingprep.com/stable/quote?symbol=AAPL&apikey=test_key"
        );
        assert_eq!(
            client.url("historical-price-eod/full?symbol=BTCUSD&from=1980-01-01"),
            "https://financialmodelingprep.com/stable/historical-price-eod/full?symbol=BTCUSD&from=1980-01-01&apikey=test_key"
        );
    }

    #[test]
    fn test_no_data_maps_to_fetch_error() {
        let err: crossings_traits::CrossingsError = FmpError::NoData("XYZ".to_string()).into();
        assert_eq!(err.to_string(), "Data fetch error: No data available for XYZ");
    }
}
