//! Study reports on stdout.

use anyhow::Result;
use clap::ValueEnum;
use crossings::StudyReport;
use std::fmt::Write;

/// How reports are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    /// Human-readable tables.
    Text,
    /// One pretty-printed JSON array.
    Json,
}

/// Print `reports` in the requested format.
pub(crate) fn print(reports: &[StudyReport], format: Format) -> Result<()> {
    match format {
        Format::Json => {
            let json = serde_json::to_string_pretty(reports)
                .map_err(|e| anyhow::anyhow!("JSON serialization error: {}", e))?;
            println!("{json}");
        }
        Format::Text => {
            for report in reports {
                print!("{}", render_text(report));
            }
        }
    }
    Ok(())
}

fn signed_pct(value: f64) -> String {
    if value.is_finite() {
        format!("{:+.2}%", value * 100.0)
    } else {
        "n/a".to_string()
    }
}

/// Alert status line.
fn alert_line(report: &StudyReport) -> String {
    match (report.alert, report.delivery) {
        (None, _) => "none".to_string(),
        (Some(date), None) => format!("fired on {date} (not sent)"),
        (Some(date), Some(d)) => format!(
            "fired on {date} (message {}, {}/3 charts sent)",
            if d.message_sent { "sent" } else { "failed" },
            d.photos_sent
        ),
    }
}

/// Text report of one study.
pub(crate) fn render_text(report: &StudyReport) -> String {
    let mut out = String::new();
    let title = format!("{}  {}", report.symbol, report.pair);
    let _ = writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(out, "║ {title:<60} ║");
    let _ = writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n");

    let last = report
        .last_date
        .map_or_else(|| "-".to_string(), |d| d.to_string());
    let _ = writeln!(out, "Bars:      {} (last {last})", report.bars);
    let _ = writeln!(
        out,
        "Events:    {} confirmed, {} qualifying, {} too recent",
        report.events.len(),
        report.summary.qualifying(),
        report.summary.excluded
    );
    for event in &report.events {
        let _ = writeln!(out, "  {}", event.date);
    }
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "{:>8} {:>12} {:>10} {:>10} {:>11}",
        "Horizon", "Mean", "Positive", "Negative", "Positive %"
    );
    let _ = writeln!(out, "{}", "-".repeat(55));
    for &h in &report.summary.horizons {
        let mean = report.summary.average.get(h).unwrap_or(f64::NAN);
        let counts = report.summary.counts.get(h).unwrap_or_default();
        let share = counts
            .positive_pct()
            .map_or_else(|| "n/a".to_string(), |p| format!("{p:.2}%"));
        let _ = writeln!(
            out,
            "{:>8} {:>12} {:>10} {:>10} {:>11}",
            format!("{h}D"),
            signed_pct(mean),
            counts.positive,
            counts.negative,
            share
        );
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Alert:     {}", alert_line(report));
    for path in report.charts.paths() {
        let _ = writeln!(out, "Chart:     {}", path.display());
    }
    out
}
