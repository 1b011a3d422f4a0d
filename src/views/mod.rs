//! The views module contains the components for all Layouts and Routes for our app.

mod header;
pub use header::Header;

mod transactions;
pub use transactions::Transactions;
