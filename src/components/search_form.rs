use dioxus::html::FormValue;
use dioxus::prelude::*;
use std::collections::HashMap;

use crate::components::SearchInput;
use crate::contexts::TransactionsContext;
use crate::forms::{submit_search, FieldValues, SearchFormError};
use crate::utils::config::{QUERY_FIELD, SEARCH_PLACEHOLDER, SUBMIT_LABEL};

const SEARCH_FORM_CSS: Asset = asset!("/assets/styling/search_form.css");

/// Collect the values a form submitted, by field name
pub fn form_fields(values: HashMap<String, FormValue>) -> FieldValues {
    values
        .into_iter()
        .map(|(name, value)| (name, value.to_vec()))
        .collect()
}

/// Search box above the transaction list. Submitting asks the transactions
/// context to refetch the list for the typed query.
#[component]
pub fn SearchForm() -> Element {
    let transactions = use_context::<TransactionsContext>();
    let mut is_submitting = use_signal(|| false);
    let mut error = use_signal(String::new);

    let handle_search_transactions = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(String::new());

        let fields = form_fields(evt.values());
        let transactions = transactions.clone();

        spawn(async move {
            match submit_search(&mut is_submitting, &transactions, &fields).await {
                Ok(_) => {}
                Err(e) if e.is_validation() => error.set(e.to_string()),
                Err(SearchFormError::AlreadySubmitting) => {
                    tracing::debug!("Ignoring search submitted while another is pending");
                }
                Err(e) => tracing::error!("Search failed: {}", e),
            }
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: SEARCH_FORM_CSS }

        SearchFormBody {
            is_submitting: is_submitting(),
            error: error(),
            onsubmit: handle_search_transactions
        }
    }
}

#[component]
fn SearchFormBody(is_submitting: bool, error: String, onsubmit: EventHandler<FormEvent>) -> Element {
    rsx! {
        form { class: "search-form", onsubmit: move |evt| onsubmit.call(evt),
            SearchInput {
                name: QUERY_FIELD,
                placeholder: SEARCH_PLACEHOLDER,
            }
            button {
                r#type: "submit",
                class: "search-button",
                disabled: is_submitting,
                MagnifyingGlass { size: 20 }
                "{SUBMIT_LABEL}"
            }
        }

        if !error.is_empty() {
            span { class: "search-error", "{error}" }
        }
    }
}

#[component]
fn MagnifyingGlass(size: u32) -> Element {
    rsx! {
        svg {
            width: "{size}",
            height: "{size}",
            view_box: "0 0 256 256",
            fill: "currentColor",
            path { d: "M229.66,218.34l-50.07-50.06a88.11,88.11,0,1,0-11.31,11.31l50.06,50.07a8,8,0,0,0,11.32-11.32ZM40,112a72,72,0,1,1,72,72A72.08,72.08,0,0,1,40,112Z" }
        }
    }
}

#[cfg(test)]
#[allow(non_snake_case)] // Allow non-snake_case for component names
mod tests {
    use super::*;
    use crate::contexts::ActiveQuery;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn Host() -> Element {
        let query = use_signal(|| None::<String>);
        let active_query = use_context_provider(|| ActiveQuery::new(query));
        use_context_provider(|| TransactionsContext::new(active_query));

        rsx! { SearchForm {} }
    }

    fn Submitting() -> Element {
        rsx! {
            SearchFormBody {
                is_submitting: true,
                error: String::new(),
                onsubmit: |_: FormEvent| {}
            }
        }
    }

    fn Invalid() -> Element {
        rsx! {
            SearchFormBody {
                is_submitting: false,
                error: "query is required".to_string(),
                onsubmit: |_: FormEvent| {}
            }
        }
    }

    #[test]
    fn test_form_renders_query_input_and_submit() {
        let html = render(Host);

        assert!(html.contains("name=\"query\""), "{html}");
        assert!(html.contains("placeholder=\"Search transactions\""), "{html}");
        assert!(html.contains("type=\"submit\""), "{html}");
        assert!(html.contains("Search"), "{html}");
        assert!(!html.contains("search-error"), "{html}");
    }

    #[test]
    fn test_submit_button_disabled_while_submitting() {
        let html = render(Submitting);

        assert!(html.contains("disabled"), "{html}");
    }

    #[test]
    fn test_validation_error_is_shown() {
        let html = render(Invalid);

        assert!(html.contains("search-error"), "{html}");
        assert!(html.contains("query is required"), "{html}");
    }

    #[test]
    fn test_form_fields_keeps_every_value() {
        let values = HashMap::from([
            ("query".to_string(), FormValue(vec!["coffee".to_string()])),
            ("tag".to_string(), FormValue(vec!["a".to_string(), "b".to_string()])),
        ]);

        let fields = form_fields(values);

        assert_eq!(fields["query"], vec!["coffee".to_string()]);
        assert_eq!(fields["tag"], vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_form_fields_feed_the_schema() {
        use crate::forms::SearchFormInputs;

        let values = HashMap::from([("query".to_string(), FormValue(vec![String::new()]))]);

        let inputs = SearchFormInputs::parse(&form_fields(values)).unwrap();

        assert_eq!(inputs.query, "");
    }
}
