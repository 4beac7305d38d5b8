//! Health probe for the invoices API server.

use crate::api;
use crate::api::client;
use crate::error::InvoiceError;
use crate::model::Remote;
use crate::view::HealthResponse;

pub async fn check(remote: &Remote) -> Result<HealthResponse, InvoiceError> {
    let url = api::endpoint::url_from_remote_root(remote, "/health")?;
    log::debug!("api::client::health::check url: {}", url);

    let client = client::new_for_url(&url)?;
    let res = client.get(&url).send().await?;
    let body = client::parse_json_body(&url, res).await?;
    let response: HealthResponse = serde_json::from_str(&body)?;
    Ok(response)
}
