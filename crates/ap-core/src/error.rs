//! Core error type.
//!
//! Sub-crates define their own error enums; configuration problems found here
//! surface through them as a wrapped `CoreError`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
