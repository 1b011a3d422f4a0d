//! The components module contains all shared components for our app. Components are the building blocks of dioxus apps.
//! The transactions page is built from a search form wrapping a plain search input.

mod search_input;
pub use search_input::SearchInput;

mod search_form;
pub use search_form::SearchForm;
