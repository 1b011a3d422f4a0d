//! Form handling for the transactions page: the schema the search form is
//! validated against and the guarded submit routine.

mod search_schema;
pub use search_schema::{FieldValues, SearchFormInputs};

mod submission;
pub use submission::submit_search;

use thiserror::Error;

use crate::contexts::TransactionsError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchFormError {
    #[error("{field} is required")]
    Required { field: &'static str },
    #[error("{field} must be a single text value")]
    ExpectedString { field: &'static str },
    #[error("A search is already in progress")]
    AlreadySubmitting,
    #[error(transparent)]
    Fetch(#[from] TransactionsError),
}

impl SearchFormError {
    /// Whether this error belongs in the form state rather than the log
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Required { .. } | Self::ExpectedString { .. })
    }
}
