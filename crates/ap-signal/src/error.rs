use thiserror::Error;

#[derive(Debug, Error)]
pub enum SignalError {
    #[error("signal site parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SignalResult<T> = Result<T, SignalError>;
