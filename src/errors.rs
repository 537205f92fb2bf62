use thiserror::Error;

/// Errors raised while loading a statement or selecting a report
#[derive(Error, Debug)]
pub enum StatementParseError {
    /// A date column does not match `MM/DD/YYYY`
    #[error("Malformed date: {0:?} (expected MM/DD/YYYY)")]
    MalformedDate(String),

    /// The amount column is not a decimal number
    #[error("Malformed amount: {0:?}")]
    MalformedAmount(String),

    /// The category column names no known category after normalization
    #[error("Unknown category: {0:?}")]
    UnknownCategory(String),

    /// The type column names no known transaction type
    #[error("Unknown transaction type: {0:?}")]
    UnknownTransactionType(String),

    /// A group's total does not fit in a `Decimal`
    #[error("Total of {0:?} overflows the supported amount range")]
    TotalOverflow(String),

    /// Requested report kind is not one of the supported kinds
    #[error("Invalid report kind: {0:?} (expected categorical, monthly or monthly_categorical)")]
    InvalidReportKind(String),

    /// File format is not supported
    #[error("Unsupported file format")]
    UnsupportedFormat,

    /// The builder was called without content or a file path
    #[error("Content or filepath is required")]
    MissingContentAndFilepath,

    /// Error reading the statement from disk
    #[error("Failed to read file content: {0}")]
    ReadContentFailed(#[from] std::io::Error),

    /// Structural CSV failure, including missing columns
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type StatementResult<T> = Result<T, StatementParseError>;
