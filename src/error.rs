use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed token: {token:?}")]
    Malformed { token: String },

    #[error("Input is exhausted")]
    Exhausted,
}
