use thiserror::Error;

/// Errors raised by a transaction fetcher
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransactionsError {
    /// The fetcher tried and failed to refresh the list
    #[error("Failed to fetch transactions: {0}")]
    Fetch(String),
    /// No fetcher is able to serve requests right now
    #[error("Transactions source unavailable")]
    Unavailable,
}

/// Result type for transaction fetches
pub type TransactionsResult<T> = Result<T, TransactionsError>;
