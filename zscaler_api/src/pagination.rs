//! Walks paged list endpoints and flattens them into one typed list.
//!
//! Pages are fetched strictly one after another: the page count is only
//! known once page 1 has arrived, and the upstream APIs rate-limit hard.

use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::{
    client::truncate_body,
    query::{Chain, Filter, PageRequest},
    types::{ApiResponse, PageEnvelope},
    Error, Service,
};

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: i64 = 500;

/// Fetches one page of `url`.
///
/// Returns the decoded items in server order, the `totalPages` the server
/// declared, and the response.
pub async fn get_page<T: DeserializeOwned>(
    service: &Service,
    url: &str,
    filter: &Filter,
    page: i64,
    page_size: i64,
) -> Result<(Vec<T>, i64, ApiResponse), Error> {
    let query = Chain(filter, PageRequest { page, page_size });
    let resp = service
        .client()
        .send(service.context(), Method::GET, url, Some(&query), None)
        .await?;
    let envelope = resp.json::<PageEnvelope>()?.unwrap_or_default();
    let items = decode_list::<T>(&envelope.list)?;
    Ok((items, envelope.total_pages, resp))
}

/// Fetches every page of `url` with [`DEFAULT_PAGE_SIZE`].
pub async fn get_all_pages<T: DeserializeOwned>(
    service: &Service,
    url: &str,
    filter: &Filter,
) -> Result<(Vec<T>, ApiResponse), Error> {
    get_all_pages_with_page_size(service, url, filter, None).await
}

/// Fetches every page of `url`, starting at page 1.
///
/// Stops after page `totalPages`, or right after the first page that comes
/// back empty, whichever is first. Any failure aborts the walk and the
/// items gathered so far are dropped. The service's cancellation token is
/// checked before every page.
pub async fn get_all_pages_with_page_size<T: DeserializeOwned>(
    service: &Service,
    url: &str,
    filter: &Filter,
    page_size: Option<i64>,
) -> Result<(Vec<T>, ApiResponse), Error> {
    let page_size = match page_size {
        Some(size) if size > 0 => size,
        _ => DEFAULT_PAGE_SIZE,
    };

    let mut items = Vec::new();
    let mut page = 1;
    loop {
        service.context().check()?;
        let (mut batch, total_pages, resp) = get_page::<T>(service, url, filter, page, page_size)
            .await
            .map_err(|e| {
                tracing::warn!("Aborting pagination of {} at page {}: {}", url, page, e);
                e
            })?;

        let empty = batch.is_empty();
        items.append(&mut batch);
        if empty || page >= total_pages {
            tracing::debug!(
                "Fetched {} items from {} in {} page(s) (totalPages {})",
                items.len(),
                url,
                page,
                total_pages
            );
            return Ok((items, resp));
        }
        page += 1;
    }
}

fn decode_list<T: DeserializeOwned>(list: &[serde_json::Value]) -> Result<Vec<T>, Error> {
    list.iter()
        .enumerate()
        .map(|(index, raw)| {
            T::deserialize(raw).map_err(|e| {
                let snippet = truncate_body(&raw.to_string());
                tracing::error!("Failed to parse list item {}: {} | item: {}", index, e, snippet);
                Error::Decode {
                    source: e,
                    body: snippet,
                }
            })
        })
        .collect()
}
