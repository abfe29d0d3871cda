//! Output directory housekeeping.

use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Directory charts are written to when nothing else is configured.
pub const DEFAULT_OUTPUT_DIR: &str = "output_figures";

/// Delete every file directly inside `dir`, keeping the directory itself.
///
/// Subdirectories are left alone. A missing directory is reported and counts
/// as nothing to delete. A file that cannot be removed is logged and skipped.
///
/// Returns the number of files deleted.
///
/// # Errors
///
/// Returns an error if `dir` exists but cannot be listed.
pub fn clear_output_dir(dir: &Path) -> std::io::Result<usize> {
    if !dir.exists() {
        info!(dir = %dir.display(), "output directory does not exist, nothing to clear");
        return Ok(0);
    }

    let mut removed = 0;
    for entry in fs::read_dir(dir)? {
        let path = match entry {
            Ok(entry) => entry.path(),
            Err(e) => {
                warn!(error = %e, "failed to read directory entry");
                continue;
            }
        };
        if path.is_dir() {
            continue;
        }
        match fs::remove_file(&path) {
            Ok(()) => removed += 1,
            Err(e) => warn!(path = %path.display(), error = %e, "failed to delete"),
        }
    }

    info!(dir = %dir.display(), removed, "output directory cleared");
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_keeps_directory_and_subdirectories() {
        let dir = std::env::temp_dir().join(format!("crossings-clear-{}", std::process::id()));
        fs::create_dir_all(dir.join("keep")).unwrap();
        fs::write(dir.join("a.png"), b"a").unwrap();
        fs::write(dir.join("b.png"), b"b").unwrap();
        fs::write(dir.join("keep").join("c.png"), b"c").unwrap();

        assert_eq!(clear_output_dir(&dir).unwrap(), 2);
        assert!(dir.is_dir());
        assert!(!dir.join("a.png").exists());
        assert!(dir.join("keep").join("c.png").exists());

        // Already empty of files.
        assert_eq!(clear_output_dir(&dir).unwrap(), 0);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_directory_is_not_an_error() {
        let dir = std::env::temp_dir().join("crossings-clear-does-not-exist");
        assert_eq!(clear_output_dir(&dir).unwrap(), 0);
    }
}
