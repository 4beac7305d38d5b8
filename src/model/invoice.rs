use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Payment status of an invoice. Serialized capitalized on the wire
/// ("Paid", "Pending", "Unpaid"), matching what the server stores.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceStatus {
    Paid,
    Pending,
    Unpaid,
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvoiceStatus::Paid => write!(f, "Paid"),
            InvoiceStatus::Pending => write!(f, "Pending"),
            InvoiceStatus::Unpaid => write!(f, "Unpaid"),
        }
    }
}

/// An invoice as returned by the server. `id`, `created_at`, and
/// `updated_at` are server-assigned and never sent on create or update.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Invoice {
    pub id: u64,
    pub service_name: String,
    pub invoice_number: i64,
    pub date: DateTime<Utc>,
    pub amount: f64,
    pub status: InvoiceStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating an invoice: the invoice minus every
/// server-assigned field.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct InvoiceNew {
    pub service_name: String,
    pub invoice_number: i64,
    pub date: DateTime<Utc>,
    pub amount: f64,
    pub status: InvoiceStatus,
}

/// Partial payload for updating an invoice. Only supplied fields are
/// serialized, so the server sees exactly what changed.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct InvoiceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InvoiceStatus>,
}
