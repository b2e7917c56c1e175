use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApproxError {
    // Construction related errors
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Invalid breakpoints: {0}")]
    InvalidBreakpoints(String),

    // Fitting related errors
    #[error("Polynomial fit failed: {0}")]
    FitError(String),

    // Recurrent cell errors
    #[error("Invalid input shape: {0}")]
    InvalidInputShape(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Other error: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, ApproxError>;
