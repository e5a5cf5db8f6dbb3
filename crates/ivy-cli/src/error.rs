//! CLI-level error handling.
//!
//! Mirrors `faxt::error`'s split: a small `thiserror` enum for this crate's
//! own concerns (reading the script file, initializing logging), with
//! `ivy_eval::LangError` folded in via `#[from]` so `main` can propagate
//! everything through one `anyhow`-friendly `Result` at the top.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("could not read script '{path}': {source}")]
    ScriptRead { path: String, #[source] source: std::io::Error },

    #[error(transparent)]
    Lang(#[from] ivy_eval::LangError),
}

pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lang_error_wraps_through() {
        let err: CliError = ivy_eval::LangError::DivisionByZero.into();
        assert!(matches!(err, CliError::Lang(_)));
    }
}
