//! Clean command implementation.

use crate::settings::resolve_output_dir;
use anyhow::{Context, Result};
use crossings::clear_output_dir;
use std::env;
use std::path::PathBuf;

/// Delete the chart files in the output directory.
pub(crate) fn clean(output_dir: Option<PathBuf>) -> Result<()> {
    let dir = resolve_output_dir(output_dir, |key| env::var(key).ok());
    if !dir.exists() {
        println!("Output directory {} does not exist.", dir.display());
        return Ok(());
    }

    let removed = clear_output_dir(&dir)
        .with_context(|| format!("failed to clear {}", dir.display()))?;
    println!("Deleted {removed} file(s) from {}", dir.display());
    Ok(())
}
