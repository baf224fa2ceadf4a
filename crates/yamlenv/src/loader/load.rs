//! Load orchestration: dotenv, path resolution, read, expansion, decode.
//!
//! Responsibilities:
//! - Compose the full pipeline behind the two public load operations.
//! - Load a local `.env` file into the process environment, best-effort.
//!
//! Does NOT handle:
//! - Placeholder expansion semantics (see env.rs).
//! - The search-path policy (see path.rs).
//!
//! Invariants / Assumptions:
//! - `.env` failures are silently ignored; the file is optional.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()`.
//! - Errors are returned, never logged; only debug-level traces are emitted.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::debug;

use super::env::resolve_env;
use super::error::ConfigError;
use super::path::resolve_path;

/// Check if dotenv loading is disabled via environment variable.
fn dotenv_disabled() -> bool {
    matches!(
        std::env::var("DOTENV_DISABLED").ok().as_deref(),
        Some("true") | Some("1")
    )
}

/// Load environment variables from a `.env` file if one is present.
///
/// Best-effort: a missing or malformed `.env` file is ignored. Variables
/// already set in the process environment are not overridden. Setting
/// `DOTENV_DISABLED` to "true" or "1" skips loading entirely (useful for
/// testing).
fn load_dotenv() {
    if dotenv_disabled() {
        return;
    }

    if let Ok(path) = dotenvy::dotenv() {
        debug!(path = %path.display(), "loaded .env file");
    }
}

/// Load a YAML configuration file into `T`, returning the resolved path
/// alongside the decoded value.
///
/// The filename is resolved per [`resolve_path`], placeholders in the file
/// content are expanded per [`resolve_env`], and the result is decoded with
/// serde. On failure the error carries the resolved path, so callers can
/// report where the loader looked.
pub fn load_config_with_path<T: DeserializeOwned>(
    filename: impl AsRef<Path>,
) -> Result<(T, PathBuf), ConfigError> {
    load_dotenv();

    let path = resolve_path(filename);
    debug!(path = %path.display(), "loading config");

    let raw = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;

    let resolved = resolve_env(&raw);

    let config = serde_yaml::from_str(&resolved).map_err(|source| ConfigError::Parse {
        path: path.clone(),
        source,
    })?;

    Ok((config, path))
}

/// Like [`load_config_with_path`], but drops the path from the success value.
pub fn load_config<T: DeserializeOwned>(filename: impl AsRef<Path>) -> Result<T, ConfigError> {
    load_config_with_path(filename).map(|(config, _)| config)
}
