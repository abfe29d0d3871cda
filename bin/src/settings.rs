//! Command-line flags shared by the study commands, and how they combine
//! with the environment.

use crate::report::Format;
use clap::Args;
use crossings::StudyConfig;
use crossings::output::DEFAULT_OUTPUT_DIR;
use crossings::signals::{CrossingPair, DEFAULT_PERSISTENCE};
use crossings::telegram::{CHAT_ID_ENV, TOKEN_ENV, TelegramClient, TelegramConfig};
use std::env;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Environment variable naming the chart directory.
pub(crate) const OUTPUT_DIR_ENV: &str = "CROSSINGS_OUTPUT_DIR";

/// Flags accepted by `price`, `cross` and `scan`.
#[derive(Debug, Clone, Args)]
pub(crate) struct StudyArgs {
    /// Directory for chart files [default: $CROSSINGS_OUTPUT_DIR or output_figures]
    #[arg(long)]
    pub(crate) output_dir: Option<PathBuf>,

    /// Read daily closes from a date,close CSV instead of FMP
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,

    /// Write date, close and moving averages to this CSV (a directory when scanning)
    #[arg(long)]
    pub(crate) export: Option<PathBuf>,

    /// Compute and render, but never send alerts
    #[arg(long)]
    pub(crate) dry_run: bool,

    /// Delete existing files in the output directory first
    #[arg(long)]
    pub(crate) clear: bool,

    /// Bars a historical crossunder must stay below
    #[arg(long, default_value_t = DEFAULT_PERSISTENCE)]
    pub(crate) persistence: usize,

    /// Telegram bot token [default: $TG_BOT_TOKEN_CROSSINGS]
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) bot_token: Option<String>,

    /// Telegram chat id [default: $TELEGRAM_CHAT_ID]; group ids are negative
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) chat_id: Option<String>,

    /// Output format (text or json)
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub(crate) format: Format,
}

/// Chart directory: flag, then environment, then the default.
pub(crate) fn resolve_output_dir(
    flag: Option<PathBuf>,
    lookup: impl Fn(&str) -> Option<String>,
) -> PathBuf {
    flag.or_else(|| lookup(OUTPUT_DIR_ENV).filter(|v| !v.is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
}

/// Telegram credentials with flags layered over the environment.
pub(crate) fn resolve_telegram(
    args: &StudyArgs,
    lookup: impl Fn(&str) -> Option<String>,
) -> crossings::telegram::Result<TelegramConfig> {
    TelegramConfig::from_lookup(|key: &str| {
        let flag = match key {
            TOKEN_ENV => args.bot_token.clone(),
            CHAT_ID_ENV => args.chat_id.clone(),
            _ => None,
        };
        flag.or_else(|| lookup(key))
    })
}

/// Everything a batch of studies runs with.
#[derive(Debug)]
pub(crate) struct Settings {
    /// Per-run study settings.
    pub(crate) config: StudyConfig,
    /// Alert destination, if configured.
    pub(crate) notifier: Option<TelegramClient>,
    /// Treat `config.export` as a directory of per-study files.
    export_dir: bool,
}

impl Settings {
    /// Resolve flags against the process environment.
    pub(crate) fn resolve(args: &StudyArgs, batch: bool) -> Self {
        let lookup = |key: &str| env::var(key).ok();

        let notifier = match resolve_telegram(args, lookup) {
            Ok(config) => Some(TelegramClient::new(config)),
            Err(e) => {
                if !args.dry_run {
                    warn!(error = %e, "Telegram not configured, alerts will not be sent");
                }
                None
            }
        };

        Self {
            config: StudyConfig {
                output_dir: resolve_output_dir(args.output_dir.clone(), lookup),
                persistence: args.persistence,
                dry_run: args.dry_run,
                export: args.export.clone(),
            },
            notifier,
            export_dir: batch,
        }
    }

    /// Study config for one study of the batch.
    pub(crate) fn config_for(&self, symbol: &str, pair: &CrossingPair) -> StudyConfig {
        let mut config = self.config.clone();
        if self.export_dir {
            config.export = self
                .config
                .export
                .as_deref()
                .map(|dir| export_path(dir, symbol, pair));
        }
        config
    }
}

/// Per-study export file inside `dir`.
pub(crate) fn export_path(dir: &Path, symbol: &str, pair: &CrossingPair) -> PathBuf {
    dir.join(format!("{}.csv", pair.file_stem(symbol)))
}
