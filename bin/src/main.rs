//! Crossings CLI binary.
//!
//! Runs moving-average crossunder studies, writes their charts, and sends a
//! Telegram alert when the latest bar is a fresh crossunder.

mod cmd;
mod data;
mod report;
mod settings;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use crossings::signals::CrossingPair;
use settings::StudyArgs;
use std::path::PathBuf;
use std::process;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "crossings")]
#[command(about = "Moving-average crossunder studies and alerts", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Study the close crossing under one moving average
    Price {
        /// Ticker symbol (e.g. BTCUSD)
        symbol: String,

        /// Moving-average window in trading days
        window: usize,

        #[command(flatten)]
        args: StudyArgs,
    },

    /// Study a fast moving average crossing under a slow one
    Cross {
        /// Ticker symbol (e.g. ETHUSD)
        symbol: String,

        /// Fast moving-average window in trading days
        fast: usize,

        /// Slow moving-average window in trading days
        slow: usize,

        #[command(flatten)]
        args: StudyArgs,
    },

    /// Run several studies; defaults to the major BTC and ETH crossings
    Scan {
        /// Study as SYMBOL:WINDOW or SYMBOL:FAST:SLOW (repeatable)
        #[arg(long = "study", value_name = "SPEC")]
        studies: Vec<String>,

        #[command(flatten)]
        args: StudyArgs,
    },

    /// Delete chart files from the output directory
    Clean {
        /// Directory to clear [default: $CROSSINGS_OUTPUT_DIR or output_figures]
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    // Only fails if a subscriber is already installed.
    let _ = tracing::subscriber::set_global_default(subscriber);
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Try to load .env file (ignore errors if not found)
    let _ = dotenvy::dotenv();

    match cli.command {
        Commands::Price {
            symbol,
            window,
            args,
        } => {
            let studies = [(symbol, CrossingPair::PriceVsMa { window })];
            cmd::study::run_studies(&studies, &args).await?;
        }
        Commands::Cross {
            symbol,
            fast,
            slow,
            args,
        } => {
            let studies = [(symbol, CrossingPair::MaVsMa { fast, slow })];
            cmd::study::run_studies(&studies, &args).await?;
        }
        Commands::Scan { studies, args } => {
            let studies = if studies.is_empty() {
                data::default_watch_list()
            } else {
                studies
                    .iter()
                    .map(|s| data::parse_study(s))
                    .collect::<Result<Vec<_>>>()?
            };
            cmd::study::run_studies(&studies, &args).await?;
        }
        Commands::Clean { output_dir } => {
            cmd::clean::clean(output_dir)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_cross_with_flags() {
        let cli = Cli::try_parse_from([
            "crossings",
            "-vv",
            "cross",
            "ETHUSD",
            "50",
            "200",
            "--dry-run",
            "--persistence",
            "10",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Cross {
                symbol,
                fast,
                slow,
                args,
            } => {
                assert_eq!((symbol.as_str(), fast, slow), ("ETHUSD", 50, 200));
                assert!(args.dry_run);
                assert_eq!(args.persistence, 10);
                assert_eq!(args.format, report::Format::Json);
            }
            _ => panic!("expected cross"),
        }
    }

    #[test]
    fn test_parse_scan_studies() {
        let cli = Cli::try_parse_from([
            "crossings",
            "scan",
            "--study",
            "BTCUSD:200",
            "--study",
            "ETHUSD:50:200",
        ])
        .unwrap();
        match cli.command {
            Commands::Scan { studies, args } => {
                assert_eq!(studies, vec!["BTCUSD:200", "ETHUSD:50:200"]);
                assert_eq!(args.persistence, 15);
                assert!(!args.dry_run);
            }
            _ => panic!("expected scan"),
        }
    }

    #[test]
    fn test_price_requires_window() {
        assert!(Cli::try_parse_from(["crossings", "price", "BTCUSD"]).is_err());
    }
}
