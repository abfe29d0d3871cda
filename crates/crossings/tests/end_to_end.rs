//! Whole-pipeline scenarios on synthetic histories.

use crossings::chart::PngRenderer;
use crossings::eval::HORIZONS;
use crossings::signals::{CrossingPair, CrossunderDetector, live_crossunder};
use crossings::traits::{Date, PricePoint, PriceSeries};
use crossings::{Notifier, StudyConfig, run_study};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

#[derive(Debug, thiserror::Error)]
#[error("never fails")]
struct Never;

/// Records every text and photo it is asked to send.
#[derive(Debug, Default)]
struct Inbox {
    items: Mutex<Vec<String>>,
}

impl Notifier for Inbox {
    type Error = Never;

    async fn send_message(&self, text: &str) -> Result<(), Never> {
        self.items.lock().unwrap().push(text.to_string());
        Ok(())
    }

    async fn send_photo(&self, _caption: &str, path: &Path) -> Result<(), Never> {
        self.items.lock().unwrap().push(path.display().to_string());
        Ok(())
    }
}

fn series(closes: &[f64]) -> PriceSeries {
    let start = Date::from_ymd_opt(2019, 3, 1).unwrap();
    PriceSeries::new(
        closes
            .iter()
            .enumerate()
            .map(|(i, &c)| PricePoint::new(start + chrono::Days::new(i as u64), c))
            .collect(),
    )
}

fn scratch(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("crossings-e2e-{tag}-{}", std::process::id()))
}

#[test]
fn constant_decline_through_flat_line() {
    // 400 bars falling by one a day cross a flat line at 200 exactly once.
    let closes: Vec<f64> = (0..400).map(|i| 399.5 - i as f64).collect();
    let flat = vec![200.0; 400];
    let s = series(&closes);

    let events = CrossunderDetector::default().detect(&s, &closes, &flat);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].index, 200);
    assert_eq!(events[0].date, s.date_at(200).unwrap());

    // 200 + 365 runs past the end, so nothing qualifies.
    let summary = crossings::eval::ReturnSummary::standard(&closes, &events);
    assert_eq!(summary.qualifying(), 0);
    assert_eq!(summary.excluded, 1);
    assert_eq!(summary.horizons, HORIZONS.to_vec());
    assert!(summary.average.values().iter().all(|v| v.is_nan()));
    assert!(summary.counts.iter().all(|(_, c)| c.total() == 0));

    assert_eq!(live_crossunder(&s, &closes, &flat), None);
}

#[tokio::test]
async fn peak_then_decline_pipeline() {
    // Rise to a peak at bar 199, then fall by one a day.
    let closes: Vec<f64> = (0..400)
        .map(|i| if i < 200 { 100.0 + i as f64 } else { 299.0 - (i - 199) as f64 })
        .collect();
    let source = series(&closes);
    let inbox = Inbox::default();
    let config = StudyConfig {
        output_dir: scratch("peak"),
        ..StudyConfig::default()
    };

    let report = run_study(
        &source,
        &PngRenderer,
        Some(&inbox),
        "BTC",
        CrossingPair::PriceVsMa { window: 20 },
        &config,
    )
    .await
    .unwrap();

    // The close (294 at bar 204, 293 at bar 205) drops under the 20-day mean
    // (293.0, then 293.4) on bar 205 and stays under.
    assert_eq!(report.events.len(), 1);
    assert_eq!(report.events[0].index, 205);
    assert_eq!(report.summary.qualifying(), 0);
    assert!(report.summary.average.values().iter().all(|v| v.is_nan()));
    assert_eq!(report.alert, None);
    assert!(report.delivery.is_none());
    assert!(inbox.items.lock().unwrap().is_empty());

    for path in report.charts.paths() {
        assert!(path.is_file());
    }
    assert!(
        report
            .charts
            .timeseries
            .ends_with("BTC_close_20dma_plot.png")
    );

    std::fs::remove_dir_all(&config.output_dir).unwrap();
}

#[tokio::test]
async fn fresh_cross_on_last_bar_alerts() {
    let mut closes: Vec<f64> = (0..500).map(|i| 100.0 + i as f64 * 0.5).collect();
    closes.push(10.0);
    let source = series(&closes);
    let inbox = Inbox::default();
    let config = StudyConfig {
        output_dir: scratch("fresh"),
        ..StudyConfig::default()
    };

    let report = run_study(
        &source,
        &PngRenderer,
        Some(&inbox),
        "ETH",
        CrossingPair::MaVsMa { fast: 5, slow: 50 },
        &config,
    )
    .await
    .unwrap();

    assert_eq!(report.alert, source.last().map(|p| p.date));
    assert!(report.events.is_empty());

    let items = inbox.items.lock().unwrap().clone();
    assert_eq!(items.len(), 4);
    assert_eq!(items[0], "Attention, ETH 5 went below 50D MA!");
    assert!(items[1].ends_with("ETH_5_50dma_plot.png"));
    assert!(items[2].ends_with("ETH_5_50dma_average_returns.png"));
    assert!(items[3].ends_with("ETH_5_50dma_number_pos_neg_returns.png"));

    std::fs::remove_dir_all(&config.output_dir).unwrap();
}
