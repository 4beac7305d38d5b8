//! # InvoiceStore - shared state for an invoice listing
//!
//! Holds the current filter parameters, the last fetched page of
//! results, and request status. One store is constructed per session
//! scope and shared by reference (`Arc`); presentation code reads the
//! accessors and calls [`InvoiceStore::set_filters`] /
//! [`InvoiceStore::fetch`].
//!
//! Overlapping fetches are resolved with a sequence number: each fetch
//! takes the next number when it starts, and a completion is only
//! applied while its number is still the latest. A slow response from
//! an older request can therefore never overwrite the results of a
//! newer one.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::api;
use crate::error::InvoiceError;
use crate::model::{Invoice, Remote};
use crate::opts::{ListOpts, ListOptsPatch};
use crate::view::PaginatedInvoices;

#[derive(Debug, Default)]
struct StoreState {
    filters: ListOpts,
    invoices: Vec<Invoice>,
    total: usize,
    loading: bool,
    error: Option<String>,
}

pub struct InvoiceStore {
    remote: Remote,
    state: Mutex<StoreState>,
    fetch_seq: AtomicU64,
}

impl InvoiceStore {
    pub fn new(remote: Remote) -> Arc<InvoiceStore> {
        Arc::new(InvoiceStore {
            remote,
            state: Mutex::new(StoreState::default()),
            fetch_seq: AtomicU64::new(0),
        })
    }

    pub fn filters(&self) -> ListOpts {
        self.state.lock().filters.clone()
    }

    pub fn invoices(&self) -> Vec<Invoice> {
        self.state.lock().invoices.clone()
    }

    pub fn total(&self) -> usize {
        self.state.lock().total
    }

    /// Total pages for the current result set, computed the way the
    /// server computes its `total_pages` metadata.
    pub fn total_pages(&self) -> usize {
        let state = self.state.lock();
        state.total.div_ceil(state.filters.limit.max(1))
    }

    pub fn loading(&self) -> bool {
        self.state.lock().loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.lock().error.clone()
    }

    /// Merge a partial filter change and re-fetch. Every filter change
    /// triggers a fetch; the page-reset rule lives in
    /// [`ListOpts::apply`].
    pub async fn set_filters(&self, patch: ListOptsPatch) {
        {
            let mut state = self.state.lock();
            state.filters = state.filters.apply(&patch);
        }
        self.fetch().await;
    }

    /// Fetch the current page. On success the results are replaced
    /// wholesale and any previous error is cleared; on failure the
    /// results are emptied and the failure message is kept as display
    /// state. Mutations (create/update/delete) go through
    /// [`crate::api::client::invoices`] directly; callers re-fetch
    /// afterwards to refresh the page.
    pub async fn fetch(&self) {
        let seq = self.begin_fetch();
        let filters = self.filters();
        let result = api::client::invoices::list(&self.remote, &filters).await;
        self.apply_fetch(seq, result);
    }

    fn begin_fetch(&self) -> u64 {
        let seq = self.fetch_seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.lock().loading = true;
        seq
    }

    fn apply_fetch(&self, seq: u64, result: Result<PaginatedInvoices, InvoiceError>) {
        let mut state = self.state.lock();
        if self.fetch_seq.load(Ordering::SeqCst) != seq {
            // a newer fetch was issued while this one was in flight;
            // that fetch owns the state now, including `loading`
            log::debug!("store: discarding stale fetch result (seq {seq})");
            return;
        }
        match result {
            Ok(page) => {
                state.invoices = page.invoices;
                state.total = page.pagination.total;
                state.error = None;
            }
            Err(err) => {
                log::error!("store: fetch failed: {err}");
                state.invoices = vec![];
                state.total = 0;
                state.error = Some(err.to_string());
            }
        }
        state.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opts::SortDir;
    use crate::test;
    use crate::view::Pagination;
    use mockito::Matcher;

    #[tokio::test]
    async fn test_fetch_replaces_results_and_clears_error() {
        test::init_test_env();
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/v1/invoices")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(test::list_body(&[test::invoice(1)], 1))
            .create_async()
            .await;

        let store = InvoiceStore::new(Remote::new(server.url()));
        store.fetch().await;

        assert_eq!(store.invoices().len(), 1);
        assert_eq!(store.total(), 1);
        assert_eq!(store.error(), None);
        assert!(!store.loading());
    }

    #[tokio::test]
    async fn test_empty_page_is_not_an_error() {
        test::init_test_env();
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/v1/invoices")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(test::list_body(&[], 0))
            .create_async()
            .await;

        let store = InvoiceStore::new(Remote::new(server.url()));
        store.fetch().await;

        assert!(store.invoices().is_empty());
        assert_eq!(store.total(), 0);
        assert_eq!(store.error(), None);
    }

    #[tokio::test]
    async fn test_fetch_failure_empties_results_and_sets_error() {
        test::init_test_env();
        let mut server = mockito::Server::new_async().await;
        let ok_mock = server
            .mock("GET", "/api/v1/invoices")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(test::list_body(&[test::invoice(1)], 1))
            .create_async()
            .await;

        let store = InvoiceStore::new(Remote::new(server.url()));
        store.fetch().await;
        assert_eq!(store.total(), 1);

        ok_mock.remove_async().await;
        let _err_mock = server
            .mock("GET", "/api/v1/invoices")
            .match_query(Matcher::Any)
            .with_status(500)
            .with_body(r#"{"message":"database is down"}"#)
            .create_async()
            .await;

        store.fetch().await;
        assert!(store.invoices().is_empty());
        assert_eq!(store.total(), 0);
        assert_eq!(store.error().as_deref(), Some("database is down"));
        assert!(!store.loading());
    }

    #[tokio::test]
    async fn test_malformed_list_body_degrades_without_error() {
        test::init_test_env();
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/v1/invoices")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"data": {"data": 42}}"#)
            .create_async()
            .await;

        let store = InvoiceStore::new(Remote::new(server.url()));
        store.fetch().await;

        assert!(store.invoices().is_empty());
        assert_eq!(store.total(), 0);
        assert_eq!(store.error(), None);
    }

    #[tokio::test]
    async fn test_set_filters_resets_page_and_refetches() {
        test::init_test_env();
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/invoices")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("page".into(), "1".into()),
                Matcher::UrlEncoded("search".into(), "acme".into()),
                Matcher::UrlEncoded("sort_by".into(), "amount".into()),
                Matcher::UrlEncoded("sort_dir".into(), "desc".into()),
            ]))
            .with_status(200)
            .with_body(test::list_body(&[test::invoice(1)], 1))
            .create_async()
            .await;

        let store = InvoiceStore::new(Remote::new(server.url()));
        store
            .set_filters(
                ListOptsPatch::default()
                    .with_search("acme")
                    .with_sort("amount", SortDir::Desc),
            )
            .await;

        mock.assert_async().await;
        assert_eq!(store.filters().page, 1);
        assert_eq!(store.total(), 1);
    }

    #[tokio::test]
    async fn test_set_filters_with_explicit_page_navigates() {
        test::init_test_env();
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/invoices")
            .match_query(Matcher::AllOf(vec![Matcher::UrlEncoded(
                "page".into(),
                "3".into(),
            )]))
            .with_status(200)
            .with_body(test::list_body(&[], 30))
            .create_async()
            .await;

        let store = InvoiceStore::new(Remote::new(server.url()));
        store.set_filters(ListOptsPatch::default().with_page(3)).await;

        mock.assert_async().await;
        assert_eq!(store.filters().page, 3);
        assert_eq!(store.total_pages(), 3);
    }

    fn page_with_ids(ids: &[u64], total: usize) -> PaginatedInvoices {
        PaginatedInvoices {
            invoices: ids.iter().map(|id| test::invoice(*id)).collect(),
            pagination: Pagination {
                total,
                page: 1,
                limit: 10,
                total_pages: total.div_ceil(10),
                sort_by: None,
                sort_dir: None,
            },
        }
    }

    #[test]
    fn test_stale_fetch_result_is_discarded() {
        test::init_test_env();
        let store = InvoiceStore::new(Remote::default());

        let first = store.begin_fetch();
        let second = store.begin_fetch();

        // the newer fetch lands first
        store.apply_fetch(second, Ok(page_with_ids(&[2], 1)));
        // the older one resolves late and must not overwrite anything
        store.apply_fetch(first, Ok(page_with_ids(&[1, 3], 2)));

        assert_eq!(store.invoices().len(), 1);
        assert_eq!(store.invoices()[0].id, 2);
        assert_eq!(store.total(), 1);
        assert!(!store.loading());
    }

    #[test]
    fn test_stale_failure_does_not_clobber_newer_success() {
        test::init_test_env();
        let store = InvoiceStore::new(Remote::default());

        let first = store.begin_fetch();
        let second = store.begin_fetch();

        store.apply_fetch(second, Ok(page_with_ids(&[5], 1)));
        store.apply_fetch(first, Err(InvoiceError::basic_str("stale failure")));

        assert_eq!(store.error(), None);
        assert_eq!(store.total(), 1);
    }

    #[test]
    fn test_loading_stays_set_until_latest_fetch_completes() {
        test::init_test_env();
        let store = InvoiceStore::new(Remote::default());

        let first = store.begin_fetch();
        let second = store.begin_fetch();

        store.apply_fetch(first, Ok(page_with_ids(&[1], 1)));
        assert!(store.loading());

        store.apply_fetch(second, Ok(page_with_ids(&[2], 1)));
        assert!(!store.loading());
    }
}
