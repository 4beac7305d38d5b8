//! Errors for the invoice client
//!
//! Enumeration for all errors that can occur when talking to the
//! invoices API
//!

use derive_more::{Display, Error};

pub mod string_error;

pub use crate::error::string_error::StringError;

use crate::constants::MSG_ERROR_OCCURRED;

#[derive(Debug, Display, Error)]
pub enum InvoiceError {
    /// Internal Errors
    // Server replied with an error envelope
    Api(StringError),

    // External Library Errors
    URL(url::ParseError),
    JSON(serde_json::Error),
    HTTP(reqwest::Error),

    // Fallback
    Basic(StringError),
}

impl InvoiceError {
    pub fn basic_str(s: impl AsRef<str>) -> Self {
        InvoiceError::Basic(StringError::from(s.as_ref()))
    }

    pub fn api_msg(s: impl AsRef<str>) -> Self {
        InvoiceError::Api(StringError::from(s.as_ref()))
    }

    pub fn generic_api_err() -> Self {
        InvoiceError::Api(StringError::from(MSG_ERROR_OCCURRED))
    }
}

impl From<url::ParseError> for InvoiceError {
    fn from(error: url::ParseError) -> Self {
        InvoiceError::URL(error)
    }
}

impl From<serde_json::Error> for InvoiceError {
    fn from(error: serde_json::Error) -> Self {
        InvoiceError::JSON(error)
    }
}

impl From<reqwest::Error> for InvoiceError {
    fn from(error: reqwest::Error) -> Self {
        InvoiceError::HTTP(error)
    }
}
