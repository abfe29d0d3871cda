//! The study pipeline: fetch, compute, render, and notify on a live crossunder.
//!
//! A study is stateless. Every run pulls the full history again, rebuilds the
//! lines, rescans for historical events and redraws the charts. Only the last
//! two bars decide whether an alert goes out.

use crate::chart::{ChartRequest, ChartSet, Renderer};
use crate::dispatch::{Delivery, send_alert};
use crate::eval::ReturnSummary;
use crate::message::AlertMessage;
use crate::output::DEFAULT_OUTPUT_DIR;
use crate::signals::{
    CrossingPair, CrossunderDetector, CrossunderEvent, DEFAULT_PERSISTENCE, live_crossunder,
};
use crate::traits::{CrossingsError, Date, Notifier, PriceSource, Result};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};

/// Settings shared by every study of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyConfig {
    /// Directory the charts are written to.
    pub output_dir: PathBuf,
    /// Bars a historical crossunder must hold.
    pub persistence: usize,
    /// Compute and render, but never notify.
    pub dry_run: bool,
    /// Where to write the study frame as CSV, if anywhere.
    pub export: Option<PathBuf>,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            persistence: DEFAULT_PERSISTENCE,
            dry_run: false,
            export: None,
        }
    }
}

/// Everything a study found.
#[derive(Debug, Clone, Serialize)]
pub struct StudyReport {
    /// Symbol studied.
    pub symbol: String,
    /// Lines compared.
    pub pair: CrossingPair,
    /// Bars in the price history.
    pub bars: usize,
    /// Date of the most recent bar.
    pub last_date: Option<Date>,
    /// Confirmed historical crossunders.
    pub events: Vec<CrossunderEvent>,
    /// Forward-return statistics over the qualifying events.
    pub summary: ReturnSummary,
    /// Files the charts were written to.
    pub charts: ChartSet,
    /// Date of the live crossunder, if the last bar is one.
    pub alert: Option<Date>,
    /// Outcome of the alert delivery, if one was attempted.
    pub delivery: Option<Delivery>,
}

/// Run one study of `pair` on `symbol`.
///
/// Notification failures never fail the study; they show up in
/// [`StudyReport::delivery`] and in the logs.
///
/// # Errors
///
/// Returns an error if the history cannot be fetched or is empty, or if the
/// export or the charts cannot be written.
pub async fn run_study<S, R, N>(
    source: &S,
    renderer: &R,
    notifier: Option<&N>,
    symbol: &str,
    pair: CrossingPair,
    config: &StudyConfig,
) -> Result<StudyReport>
where
    S: PriceSource,
    R: Renderer,
    N: Notifier,
{
    info!(symbol, %pair, "running study");
    if !pair.is_conventional() {
        warn!(symbol, %pair, "fast window is not shorter than slow window");
    }

    let series = source.daily_closes(symbol).await?;
    if series.is_empty() {
        return Err(CrossingsError::InvalidData(format!(
            "no price history for {symbol}"
        )));
    }

    let closes = series.closes();
    let fast = pair.fast_line(&closes);
    let slow = pair.slow_line(&closes);

    let events = CrossunderDetector::new(config.persistence).detect(&series, &fast, &slow);
    let summary = ReturnSummary::standard(&closes, &events);
    info!(
        symbol,
        bars = series.len(),
        events = events.len(),
        qualifying = summary.qualifying(),
        "study computed"
    );

    if let Some(path) = &config.export {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        series.write_csv(path, &pair.moving_averages(&closes))?;
        info!(path = %path.display(), "study frame exported");
    }

    let charts = ChartSet::for_study(&config.output_dir, symbol, &pair);
    let request = ChartRequest {
        symbol,
        pair,
        series: &series,
        fast: &fast,
        slow: &slow,
        events: &events,
        summary: &summary,
    };
    renderer.render(&request, &charts)?;

    let alert = live_crossunder(&series, &fast, &slow);
    let delivery = match (alert, notifier) {
        (None, _) => None,
        (Some(date), _) if config.dry_run => {
            info!(symbol, %pair, %date, "live crossunder, dry run: not notifying");
            None
        }
        (Some(date), None) => {
            warn!(symbol, %pair, %date, "live crossunder but no notifier configured");
            None
        }
        (Some(date), Some(notifier)) => {
            info!(symbol, %pair, %date, "live crossunder, notifying");
            let message = AlertMessage::new(symbol, &pair);
            Some(send_alert(notifier, &message, &charts).await)
        }
    };

    Ok(StudyReport {
        symbol: symbol.to_string(),
        pair,
        bars: series.len(),
        last_date: series.last().map(|p| p.date),
        events,
        summary,
        charts,
        alert,
        delivery,
    })
}
