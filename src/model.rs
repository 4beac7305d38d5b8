pub mod invoice;
pub mod remote;

pub use crate::model::invoice::{Invoice, InvoiceNew, InvoiceStatus, InvoiceUpdate};
pub use crate::model::remote::Remote;
