//! Search-path policy for configuration files.
//!
//! Responsibilities:
//! - Map a requested filename to the single absolute path the loader reads.
//!
//! Does NOT handle:
//! - Reading or creating files (only `stat`-like existence checks).
//!
//! Invariants:
//! - Always returns a path, even when nothing exists anywhere, so read
//!   failures can report exactly where resolution looked.

use std::path::{Path, PathBuf};

/// Conventional subdirectory searched when the file is not in the working
/// directory.
const CONFIG_DIR: &str = "config";

/// Resolve a requested filename to the absolute path the loader will read.
///
/// Policy, first match wins:
/// 1. An absolute path is returned unchanged.
/// 2. A file at `filename` relative to the working directory resolves to its
///    absolute form.
/// 3. If a `config` directory exists in the working directory, the absolute
///    form of `config/<filename>` is returned without checking whether that
///    joined path exists.
/// 4. Otherwise the absolute form of `filename` itself.
pub fn resolve_path(filename: impl AsRef<Path>) -> PathBuf {
    let filename = filename.as_ref();

    if filename.is_absolute() {
        return filename.to_path_buf();
    }

    if filename.exists() {
        return absolute(filename);
    }

    if Path::new(CONFIG_DIR).is_dir() {
        return absolute(&Path::new(CONFIG_DIR).join(filename));
    }

    absolute(filename)
}

/// Absolute form of a possibly nonexistent path. Falls back to the input
/// unchanged if the current directory is unavailable.
fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
