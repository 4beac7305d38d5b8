use url::Url;

use crate::constants::API_PREFIX;
use crate::error::InvoiceError;
use crate::model::Remote;

/// Build a full URL for a versioned API uri, e.g. `/invoices/1` →
/// `http://localhost:3000/api/v1/invoices/1`.
pub fn url_from_remote(remote: &Remote, uri: impl AsRef<str>) -> Result<String, InvoiceError> {
    let url = format!("{}{}{}", remote.url, API_PREFIX, uri.as_ref());
    // parse to catch malformed base urls before a request goes out
    Url::parse(&url)?;
    Ok(url)
}

/// Build a full URL outside the versioned prefix, e.g. `/health`.
pub fn url_from_remote_root(remote: &Remote, uri: impl AsRef<str>) -> Result<String, InvoiceError> {
    let url = format!("{}{}", remote.url, uri.as_ref());
    Url::parse(&url)?;
    Ok(url)
}
