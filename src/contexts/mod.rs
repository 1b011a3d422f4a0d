// Context modules for application state management
pub mod error;
pub mod transactions;

pub use error::*;
pub use transactions::*;
