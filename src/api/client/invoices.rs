//! Resource operations for `/api/v1/invoices`.

use crate::api;
use crate::api::client;
use crate::error::InvoiceError;
use crate::model::{Invoice, InvoiceNew, InvoiceUpdate, Remote};
use crate::opts::ListOpts;
use crate::view::{InvoiceResponse, ListInvoicesResponse, PaginatedInvoices, StatusMessage};

/// List one page of invoices matching the filters. A response body that
/// does not match the expected list shape degrades to an empty page
/// rather than failing; transport errors propagate to the caller.
pub async fn list(remote: &Remote, opts: &ListOpts) -> Result<PaginatedInvoices, InvoiceError> {
    let uri = format!("/invoices?{}", opts.query_string());
    let url = api::endpoint::url_from_remote(remote, &uri)?;
    log::debug!("api::client::invoices::list url: {}", url);

    let client = client::new_for_url(&url)?;
    match client.get(&url).send().await {
        Ok(res) => {
            let body = client::parse_json_body(&url, res).await?;
            let response: Result<ListInvoicesResponse, serde_json::Error> =
                serde_json::from_str(&body);
            match response {
                Ok(response) => Ok(PaginatedInvoices {
                    invoices: response.data,
                    pagination: response.meta,
                }),
                Err(err) => {
                    log::error!("invoices::list invalid response shape [{url}]: {err}");
                    Ok(PaginatedInvoices::empty(opts.limit))
                }
            }
        }
        Err(err) => {
            log::error!("invoices::list request failed [{url}]: {err}");
            Err(InvoiceError::HTTP(err))
        }
    }
}

pub async fn get_by_id(remote: &Remote, id: u64) -> Result<InvoiceResponse, InvoiceError> {
    let uri = format!("/invoices/{id}");
    let url = api::endpoint::url_from_remote(remote, &uri)?;
    log::debug!("api::client::invoices::get_by_id url: {}", url);

    let client = client::new_for_url(&url)?;
    let res = client.get(&url).send().await?;
    let body = client::parse_json_body(&url, res).await?;
    let response: InvoiceResponse = serde_json::from_str(&body)?;
    Ok(response)
}

pub async fn create(remote: &Remote, invoice: &InvoiceNew) -> Result<Invoice, InvoiceError> {
    let url = api::endpoint::url_from_remote(remote, "/invoices")?;
    log::debug!("api::client::invoices::create url: {}", url);

    let client = client::new_for_url(&url)?;
    let res = client.post(&url).json(invoice).send().await?;
    let body = client::parse_json_body(&url, res).await?;
    let response: InvoiceResponse = serde_json::from_str(&body)?;
    Ok(response.data)
}

pub async fn update(
    remote: &Remote,
    id: u64,
    invoice: &InvoiceUpdate,
) -> Result<Invoice, InvoiceError> {
    let uri = format!("/invoices/{id}");
    let url = api::endpoint::url_from_remote(remote, &uri)?;
    log::debug!("api::client::invoices::update url: {}", url);

    let client = client::new_for_url(&url)?;
    let res = client.put(&url).json(invoice).send().await?;
    let body = client::parse_json_body(&url, res).await?;
    let response: InvoiceResponse = serde_json::from_str(&body)?;
    Ok(response.data)
}

pub async fn delete(remote: &Remote, id: u64) -> Result<StatusMessage, InvoiceError> {
    let uri = format!("/invoices/{id}");
    let url = api::endpoint::url_from_remote(remote, &uri)?;
    log::debug!("api::client::invoices::delete url: {}", url);

    let client = client::new_for_url(&url)?;
    let res = client.delete(&url).send().await?;
    let body = client::parse_json_body(&url, res).await?;
    let response: StatusMessage = serde_json::from_str(&body)?;
    Ok(response)
}
