//! Configuration loading pipeline.
//!
//! Responsibilities:
//! - Resolve a requested filename to an absolute config path (see path.rs).
//! - Expand `${NAME}` / `${NAME:default}` placeholders in raw text (see env.rs).
//! - Orchestrate dotenv, file read, expansion, and YAML decoding (see load.rs).
//!
//! Does NOT handle:
//! - Schema validation beyond what serde itself performs.
//! - Caching or hot-reload of loaded configuration.
//! - Recursive placeholder expansion.
//!
//! Invariants / Assumptions:
//! - Placeholder expansion is single-pass: replacement text is never rescanned.
//! - A live environment variable always wins over an inline default.
//! - `.env` loading is best-effort; a missing or broken file is never an error.
//! - Errors carry the resolved path so callers can report where the loader
//!   looked.

mod env;
mod error;
mod load;
mod path;

#[cfg(test)]
mod tests;

pub use env::resolve_env;
pub use error::ConfigError;
pub use load::{load_config, load_config_with_path};
pub use path::resolve_path;
