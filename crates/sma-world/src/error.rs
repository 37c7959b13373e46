use sma_core::SmaError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("world configuration error: {0}")]
    Config(String),

    #[error("obstacle grid line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Core(#[from] SmaError),
}

pub type WorldResult<T> = Result<T, WorldError>;
