//! Error types for configuration loading.
//!
//! Invariants:
//! - Every variant carries the resolved path that was attempted, so callers
//!   can report exactly where resolution looked.
//! - Underlying io/serde errors are chained as sources, never swallowed.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The resolved config file could not be read.
    #[error("failed to read config file at {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file was read but could not be decoded as YAML.
    #[error("failed to parse config file at {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl ConfigError {
    /// The resolved path the failed load attempted to use.
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } => path,
        }
    }
}
