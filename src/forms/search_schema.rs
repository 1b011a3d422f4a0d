use std::collections::HashMap;

use super::SearchFormError;
use crate::utils::config::QUERY_FIELD;

/// Raw values collected from a submitted form, by field name
pub type FieldValues = HashMap<String, Vec<String>>;

/// Validated contents of the search form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFormInputs {
    pub query: String,
}

impl SearchFormInputs {
    /// Check the submitted values against the form schema.
    ///
    /// `query` must be present exactly once. Its content is not constrained:
    /// an empty string is a valid query. Other fields are ignored.
    pub fn parse(fields: &FieldValues) -> Result<Self, SearchFormError> {
        match fields.get(QUERY_FIELD).map(Vec::as_slice) {
            None | Some([]) => Err(SearchFormError::Required { field: QUERY_FIELD }),
            Some([query]) => Ok(Self {
                query: query.clone(),
            }),
            Some(_) => Err(SearchFormError::ExpectedString { field: QUERY_FIELD }),
        }
    }
}
