//! # API Client - HTTP transport for the invoices API
//!

use crate::constants;
use crate::error::InvoiceError;
use crate::view::StatusMessage;

pub use reqwest::Url;
use reqwest::{header, Client, ClientBuilder, IntoUrl};
use std::time;

pub mod health;
pub mod invoices;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const USER_AGENT: &str = "libinvoice";

// TODO: share one client per Remote instead of constructing a new one
// for each request so we can take advantage of keep-alive
pub fn new_for_url<U: IntoUrl>(url: U) -> Result<Client, InvoiceError> {
    // resolve early so a bad url fails before the request goes out
    url.into_url()?;
    match builder()
        .timeout(time::Duration::from_secs(constants::DEFAULT_TIMEOUT_SECS))
        .build()
    {
        Ok(client) => Ok(client),
        Err(reqwest_err) => Err(InvoiceError::HTTP(reqwest_err)),
    }
}

fn builder() -> ClientBuilder {
    let mut headers = header::HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("application/json"),
    );
    Client::builder()
        .user_agent(format!("{USER_AGENT}/{VERSION}"))
        .default_headers(headers)
}

/// Checks the response status and hands back the raw body on success.
/// On a non-2xx status the server's error envelope is reduced to a
/// single message, falling back to a generic one when the envelope is
/// missing or unreadable.
pub async fn parse_json_body(url: &str, res: reqwest::Response) -> Result<String, InvoiceError> {
    let status = res.status();
    let body = res.text().await?;

    log::debug!("url: {url}\nstatus: {status}\nbody: {body}");

    if status.is_success() {
        return Ok(body);
    }

    let response: Result<StatusMessage, serde_json::Error> = serde_json::from_str(&body);
    match response {
        Ok(response) => Err(InvoiceError::api_msg(response.message_or_generic())),
        Err(err) => {
            log::debug!("could not parse error envelope from [{url}]: {err}");
            Err(InvoiceError::generic_api_err())
        }
    }
}
