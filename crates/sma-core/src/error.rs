//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `SmaError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// The top-level error type for `sma-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum SmaError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `sma-*` crates.
pub type SmaResult<T> = Result<T, SmaError>;
