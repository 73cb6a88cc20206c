use thiserror::Error;

/// Error type that captures rejected ledger operations.
#[derive(Debug, Error, PartialEq)]
pub enum LedgerError {
    #[error("Invalid amount: {0} (amounts must be finite and non-negative)")]
    InvalidAmount(f64),
}

/// Preconditions the spend chart needs before it can compute percentages.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChartError {
    #[error("Spend chart requires at least one category")]
    NoCategories,
    #[error("Spend chart requires spending in at least one category")]
    NoSpending,
}

/// Failures while loading report configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
