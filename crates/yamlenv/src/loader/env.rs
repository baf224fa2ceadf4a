//! Placeholder expansion for configuration text.
//!
//! Responsibilities:
//! - Scan raw config text for `${NAME}` and `${NAME:default}` placeholders.
//! - Substitute each with the live environment value or the inline default.
//!
//! Does NOT handle:
//! - `.env` file loading (see load.rs).
//! - Reporting malformed placeholders (they pass through as literal text).
//!
//! Invariants:
//! - A variable that is set, even to the empty string, wins over any default.
//! - An unset variable with no default expands to the empty string.
//! - Expansion is single-pass: replacement text is never rescanned, so values
//!   or defaults containing `${...}` are substituted literally.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Matches `${NAME}` or `${NAME:default}`. The name is one or more word
/// characters; the default may be empty and may not contain `}`.
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{(\w+)(?::([^}]*))?\}").expect("placeholder pattern is valid")
});

/// Expand environment-variable placeholders in `content`.
///
/// Each non-overlapping match of `${NAME}` or `${NAME:default}` is replaced
/// with the value of the environment variable `NAME` if it is set (including
/// set to the empty string), otherwise with the default text, otherwise with
/// the empty string. Text that does not match the placeholder pattern, such
/// as an unterminated `${NAME`, is left untouched.
pub fn resolve_env(content: &str) -> String {
    PLACEHOLDER
        .replace_all(content, |caps: &Captures<'_>| {
            match std::env::var(&caps[1]) {
                Ok(value) => value,
                Err(_) => caps
                    .get(2)
                    .map(|default| default.as_str().to_string())
                    .unwrap_or_default(),
            }
        })
        .into_owned()
}
