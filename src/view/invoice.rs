use serde::{Deserialize, Serialize};

use crate::model::Invoice;
use crate::view::Pagination;

/// Envelope for single-invoice responses: `{message?, data}`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct InvoiceResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: Invoice,
}

/// Envelope for list responses: `{data: [..], meta: {..}}`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ListInvoicesResponse {
    pub data: Vec<Invoice>,
    pub meta: Pagination,
}

/// One page of results with its metadata, as handed to callers.
#[derive(Debug, Clone)]
pub struct PaginatedInvoices {
    pub invoices: Vec<Invoice>,
    pub pagination: Pagination,
}

impl PaginatedInvoices {
    pub fn empty(limit: usize) -> PaginatedInvoices {
        PaginatedInvoices {
            invoices: vec![],
            pagination: Pagination::empty(limit),
        }
    }
}
