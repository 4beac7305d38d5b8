//! # libinvoice
//!
//! Typed client for the invoices REST API.
//!
//! The crate has two layers: the resource operations in
//! [`api::client::invoices`] perform one HTTP round trip each, and
//! [`store::InvoiceStore`] keeps the current filter parameters together
//! with the last fetched page of results for callers that render a
//! listing.
//!
//! # Examples
//!
//! Fetching a page of invoices:
//!
//! ```no_run
//! use libinvoice::api;
//! use libinvoice::error::InvoiceError;
//! use libinvoice::model::Remote;
//! use libinvoice::opts::ListOpts;
//!
//! # async fn run() -> Result<(), InvoiceError> {
//! let remote = Remote::default();
//! let page = api::client::invoices::list(&remote, &ListOpts::default()).await?;
//! println!("{} of {} invoices", page.invoices.len(), page.pagination.total);
//! # Ok(())
//! # }
//! ```
//!
//! Driving a listing through the store:
//!
//! ```no_run
//! use libinvoice::model::Remote;
//! use libinvoice::opts::ListOptsPatch;
//! use libinvoice::store::InvoiceStore;
//!
//! # async fn run() {
//! let store = InvoiceStore::new(Remote::default());
//! store.set_filters(ListOptsPatch::default().with_search("acme")).await;
//! for invoice in store.invoices() {
//!     println!("{} {}", invoice.invoice_number, invoice.amount);
//! }
//! # }
//! ```

pub mod api;
pub mod constants;
pub mod error;
pub mod model;
pub mod opts;
pub mod store;
pub mod view;
