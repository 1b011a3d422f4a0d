use dioxus::prelude::*;
use futures::future::{FutureExt, LocalBoxFuture};
use std::rc::Rc;

use super::error::TransactionsResult;

/// Something that can refetch the transaction list for a query.
///
/// Futures run on the UI thread, so they are not required to be `Send`.
pub trait TransactionFetcher {
    fn fetch_transactions(&self, query: String) -> LocalBoxFuture<'static, TransactionsResult<()>>;
}

/// Context handle shared with every component on the transactions page
#[derive(Clone)]
pub struct TransactionsContext {
    fetcher: Rc<dyn TransactionFetcher>,
}

impl TransactionsContext {
    pub fn new(fetcher: impl TransactionFetcher + 'static) -> Self {
        Self {
            fetcher: Rc::new(fetcher),
        }
    }

    /// Ask the owning fetcher to refresh the list filtered by `query`
    pub fn fetch_transactions(&self, query: String) -> LocalBoxFuture<'static, TransactionsResult<()>> {
        self.fetcher.fetch_transactions(query)
    }
}

/// The query the transaction list is currently filtered by.
///
/// This is the application's fetcher: it records the latest query so the
/// list view can react to it.
#[derive(Clone, Copy, PartialEq)]
pub struct ActiveQuery {
    query: Signal<Option<String>>,
}

impl ActiveQuery {
    pub fn new(query: Signal<Option<String>>) -> Self {
        Self { query }
    }

    pub fn current(&self) -> Option<String> {
        self.query.read().clone()
    }
}

impl TransactionFetcher for ActiveQuery {
    fn fetch_transactions(&self, query: String) -> LocalBoxFuture<'static, TransactionsResult<()>> {
        let mut slot = self.query;
        async move {
            tracing::debug!(%query, "Refetching transactions");
            slot.set(Some(query));
            Ok(())
        }
        .boxed_local()
    }
}
