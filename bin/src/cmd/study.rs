//! Study command implementation, shared by `price`, `cross` and `scan`.

use crate::data::Source;
use crate::report;
use crate::settings::{Settings, StudyArgs};
use anyhow::{Context, Result, bail};
use crossings::chart::PngRenderer;
use crossings::signals::CrossingPair;
use crossings::{clear_output_dir, run_study};
use tracing::error;

/// Run every study in `studies` and print the reports.
///
/// With more than one study, a failing study is logged and the others still
/// run; the command only fails if none succeed.
pub(crate) async fn run_studies(studies: &[(String, CrossingPair)], args: &StudyArgs) -> Result<()> {
    let batch = studies.len() > 1;
    let settings = Settings::resolve(args, batch);

    if args.clear {
        let dir = &settings.config.output_dir;
        clear_output_dir(dir).with_context(|| format!("failed to clear {}", dir.display()))?;
    }

    let source = Source::open(args.csv.as_deref())?;
    let mut reports = Vec::with_capacity(studies.len());
    let mut failed = 0;

    for (symbol, pair) in studies {
        let config = settings.config_for(symbol, pair);
        let result = run_study(
            &source,
            &PngRenderer,
            settings.notifier.as_ref(),
            symbol,
            *pair,
            &config,
        )
        .await;

        match result {
            Ok(report) => reports.push(report),
            Err(e) if batch => {
                error!(symbol = %symbol, %pair, error = %e, "study failed");
                failed += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }

    report::print(&reports, args.format)?;

    if reports.is_empty() && failed > 0 {
        bail!("all {failed} studies failed");
    }
    Ok(())
}
