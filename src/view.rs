pub mod health;
pub mod invoice;
pub mod pagination;
pub mod status_message;

pub use crate::view::health::{ComponentStatus, HealthResponse};
pub use crate::view::invoice::{InvoiceResponse, ListInvoicesResponse, PaginatedInvoices};
pub use crate::view::pagination::Pagination;
pub use crate::view::status_message::StatusMessage;
