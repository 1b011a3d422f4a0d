use dioxus::prelude::*;

use super::{FieldValues, SearchFormError, SearchFormInputs};
use crate::contexts::TransactionsContext;

/// Form state flag that is raised while a submission is in flight
pub trait SubmittingFlag {
    fn is_submitting(&self) -> bool;
    fn set_submitting(&mut self, submitting: bool);
}

impl SubmittingFlag for Signal<bool> {
    fn is_submitting(&self) -> bool {
        *self.peek()
    }

    fn set_submitting(&mut self, submitting: bool) {
        self.set(submitting);
    }
}

/// Validate the submitted fields and refetch the transactions for the query.
///
/// The flag stays raised for as long as the fetch is pending and is lowered
/// again whether the fetch resolves or fails. A submission made while the flag
/// is raised is rejected without reaching the fetcher.
pub async fn submit_search<F: SubmittingFlag>(
    flag: &mut F,
    transactions: &TransactionsContext,
    fields: &FieldValues,
) -> Result<SearchFormInputs, SearchFormError> {
    if flag.is_submitting() {
        return Err(SearchFormError::AlreadySubmitting);
    }

    let inputs = SearchFormInputs::parse(fields)?;

    flag.set_submitting(true);
    let fetched = transactions.fetch_transactions(inputs.query.clone()).await;
    flag.set_submitting(false);
    fetched?;

    tracing::info!(query = %inputs.query, "Searched transactions");
    Ok(inputs)
}
