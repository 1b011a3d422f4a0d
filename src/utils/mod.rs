/// Configuration constants for the application
pub mod config {
    /// Title of the desktop window
    pub const WINDOW_TITLE: &str = "Transactions";

    /// Name of the search field, as submitted by the form
    pub const QUERY_FIELD: &str = "query";

    /// Placeholder shown in the empty search input
    pub const SEARCH_PLACEHOLDER: &str = "Search transactions";

    /// Label of the search submit button
    pub const SUBMIT_LABEL: &str = "Search";

    /// Log filter used when RUST_LOG is unset or invalid
    pub const DEFAULT_LOG_FILTER: &str = "info";
}

/// Logging setup
pub mod logging {
    use super::config::DEFAULT_LOG_FILTER;
    use tracing_subscriber::EnvFilter;

    /// Filter from RUST_LOG, falling back to the default level
    pub fn env_filter() -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    }

    /// Install the global tracing subscriber
    pub fn init() {
        tracing_subscriber::fmt().with_env_filter(env_filter()).init();
    }
}
