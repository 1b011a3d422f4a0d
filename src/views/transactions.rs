use dioxus::prelude::*;

use crate::components::SearchForm;
use crate::contexts::ActiveQuery;

const TRANSACTIONS_CSS: Asset = asset!("/assets/styling/transactions.css");

/// Describe which transactions the list is showing
pub fn filter_summary(query: Option<&str>) -> String {
    match query {
        Some(q) if !q.is_empty() => format!("Showing transactions matching \"{}\"", q),
        _ => "Showing all transactions".to_string(),
    }
}

#[component]
pub fn Transactions() -> Element {
    let active_query = use_context::<ActiveQuery>();
    let summary = filter_summary(active_query.current().as_deref());

    rsx! {
        document::Link { rel: "stylesheet", href: TRANSACTIONS_CSS }

        div { class: "transactions-container",
            SearchForm {}
            p { class: "transactions-summary", "{summary}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::filter_summary;

    #[test]
    fn test_filter_summary() {
        assert_eq!(filter_summary(None), "Showing all transactions");
        assert_eq!(filter_summary(Some("")), "Showing all transactions");
        assert_eq!(filter_summary(Some("coffee")), "Showing transactions matching \"coffee\"");
    }
}
