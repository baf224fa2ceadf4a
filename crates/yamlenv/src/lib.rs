//! Typed YAML configuration loading with environment variable expansion.
//!
//! This crate reads a YAML file, expands `${NAME}` and `${NAME:default}`
//! placeholders from the process environment (optionally seeded from a local
//! `.env` file), and deserializes the result into a caller-supplied type.
//!
//! ```no_run
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct AppConfig {
//!     level: String,
//! }
//!
//! let (config, path) = yamlenv::load_config_with_path::<AppConfig>("app.yaml")?;
//! # let _ = (config.level, path);
//! # Ok::<(), yamlenv::ConfigError>(())
//! ```

mod loader;

pub use loader::{ConfigError, load_config, load_config_with_path, resolve_env, resolve_path};
