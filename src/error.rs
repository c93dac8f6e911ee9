//! Error type for the parsing and CSV layers
//!
//! The calculation functions themselves never fail; they report invalid
//! inputs and non-convergence with `NaN`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FinancialError {
    #[error("Invalid payment due time: {0:?} (expected \"begin\", \"end\", 1 or 0)")]
    InvalidDueTime(String),

    #[error("Invalid cash flow record at line {line}: {reason}")]
    InvalidRecord { line: u64, reason: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type FinancialResult<T> = Result<T, FinancialError>;
