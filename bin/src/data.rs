//! Price data and study lists for the Crossings CLI.

use anyhow::{Context, Result};
use crossings::fmp::FmpClient;
use crossings::signals::CrossingPair;
use crossings::traits::{PriceSeries, PriceSource};
use std::path::Path;
use tracing::info;

/// Where daily closes come from.
#[derive(Debug)]
pub(crate) enum Source {
    /// Financial Modeling Prep.
    Fmp(FmpClient),
    /// A local `date,close` file, used for every symbol.
    Csv(PriceSeries),
}

impl Source {
    /// Open the CSV at `csv` if given, otherwise an FMP client from the environment.
    pub(crate) fn open(csv: Option<&Path>) -> Result<Self> {
        match csv {
            Some(path) => {
                let series = PriceSeries::read_csv(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                info!(path = %path.display(), bars = series.len(), "loaded local prices");
                Ok(Self::Csv(series))
            }
            None => Ok(Self::Fmp(FmpClient::from_env()?)),
        }
    }
}

impl PriceSource for Source {
    async fn daily_closes(&self, symbol: &str) -> crossings::Result<PriceSeries> {
        match self {
            Self::Fmp(client) => client.daily_closes(symbol).await,
            Self::Csv(series) => Ok(series.clone()),
        }
    }
}

/// Parse `SYMBOL:WINDOW` or `SYMBOL:FAST:SLOW`.
pub(crate) fn parse_study(spec: &str) -> Result<(String, CrossingPair)> {
    let (symbol, windows) = spec
        .split_once(':')
        .filter(|(s, _)| !s.trim().is_empty())
        .ok_or_else(|| anyhow::anyhow!("invalid study '{spec}', expected SYMBOL:WINDOW or SYMBOL:FAST:SLOW"))?;
    let pair: CrossingPair = windows.parse()?;
    Ok((symbol.trim().to_uppercase(), pair))
}

/// Major BTC and ETH crossings: close under the 50, 100 and 200-day MA, and
/// the 50-day MA under the 200-day MA.
pub(crate) fn default_watch_list() -> Vec<(String, CrossingPair)> {
    ["BTCUSD", "ETHUSD"]
        .into_iter()
        .flat_map(|symbol| {
            [
                CrossingPair::PriceVsMa { window: 50 },
                CrossingPair::PriceVsMa { window: 100 },
                CrossingPair::PriceVsMa { window: 200 },
                CrossingPair::MaVsMa { fast: 50, slow: 200 },
            ]
            .into_iter()
            .map(move |pair| (symbol.to_string(), pair))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_study() {
        assert_eq!(
            parse_study("btcusd:200").unwrap(),
            ("BTCUSD".to_string(), CrossingPair::PriceVsMa { window: 200 })
        );
        assert_eq!(
            parse_study("ETHUSD:50:200").unwrap(),
            (
                "ETHUSD".to_string(),
                CrossingPair::MaVsMa { fast: 50, slow: 200 }
            )
        );
    }

    #[test]
    fn test_parse_study_errors() {
        assert!(parse_study("BTCUSD").is_err());
        assert!(parse_study(":200").is_err());
        assert!(parse_study("BTCUSD:abc").is_err());
        assert!(parse_study("BTCUSD:1:2:3").is_err());
    }

    #[test]
    fn test_default_watch_list() {
        let list = default_watch_list();
        assert_eq!(list.len(), 8);
        assert_eq!(list[0], ("BTCUSD".to_string(), CrossingPair::PriceVsMa { window: 50 }));
        assert_eq!(
            list[7],
            ("ETHUSD".to_string(), CrossingPair::MaVsMa { fast: 50, slow: 200 })
        );
    }

    #[tokio::test]
    async fn test_csv_source_serves_every_symbol() {
        let path = std::env::temp_dir().join(format!("crossings-cli-{}.csv", std::process::id()));
        std::fs::write(&path, "date,close\n2024-01-02,10.5\n2024-01-01,10.0\n").unwrap();

        let source = Source::open(Some(&path)).unwrap();
        let btc = source.daily_closes("BTCUSD").await.unwrap();
        let eth = source.daily_closes("ETHUSD").await.unwrap();
        assert_eq!(btc.closes(), vec![10.0, 10.5]);
        assert_eq!(btc, eth);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_csv_is_an_error() {
        let path = std::env::temp_dir().join("crossings-cli-missing.csv");
        let err = Source::open(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
