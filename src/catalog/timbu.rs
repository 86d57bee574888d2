//! Timbu Cloud catalog implementation.
//!
//! One `GET {base_url}/products` per fetch. The app credentials travel as
//! query parameters (`Appid`, `Apikey`), so URLs are never logged in full
//! and never end up in error text.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::Url;

use crate::catalog::{CatalogError, CatalogPage, CatalogSource, FetchOutcome};

/// Fixed credentials for the catalog endpoint. Missing values are simply
/// left out of the query string.
#[derive(Debug, Clone, Default)]
pub struct TimbuCredentials {
    pub organization_id: Option<String>,
    pub app_id: Option<String>,
    pub api_key: Option<String>,
}

/// Catalog backed by the Timbu Cloud products API.
pub struct TimbuCatalog {
    base_url: String,
    credentials: TimbuCredentials,
    page_size: u32,
    client: reqwest::Client,
}

impl TimbuCatalog {
    pub fn new(
        base_url: String,
        credentials: TimbuCredentials,
        page_size: u32,
        timeout: Duration,
    ) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::Unknown(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url,
            credentials,
            page_size,
            client,
        })
    }

    /// Builds the products URL, including the query string.
    pub fn products_url(&self) -> Result<Url, CatalogError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| CatalogError::InvalidUrl(format!("'{}': {e}", self.base_url)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(CatalogError::InvalidUrl(format!(
                "unsupported scheme '{}'",
                url.scheme()
            )));
        }

        url.path_segments_mut()
            .map_err(|()| CatalogError::InvalidUrl(format!("'{}' cannot be a base", self.base_url)))?
            .pop_if_empty()
            .push("products");

        {
            let mut query = url.query_pairs_mut();
            if let Some(ref organization_id) = self.credentials.organization_id {
                query.append_pair("organization_id", organization_id);
            }
            query
                .append_pair("reverse_sort", "false")
                .append_pair("page", "1")
                .append_pair("size", &self.page_size.to_string());
            if let Some(ref app_id) = self.credentials.app_id {
                query.append_pair("Appid", app_id);
            }
            if let Some(ref api_key) = self.credentials.api_key {
                query.append_pair("Apikey", api_key);
            }
        }

        Ok(url)
    }
}

/// Whether hyper rejected what came back on the wire: an unparsable status
/// line or headers, or a connection closed mid-message.
fn is_malformed_envelope(e: &reqwest::Error) -> bool {
    let mut source = std::error::Error::source(e);
    while let Some(err) = source {
        if let Some(hyper_err) = err.downcast_ref::<hyper::Error>() {
            return hyper_err.is_parse()
                || hyper_err.is_parse_status()
                || hyper_err.is_incomplete_message();
        }
        source = err.source();
    }
    false
}

/// Maps a reqwest failure onto the catalog error classes. The request URL
/// is stripped first since it carries the credentials.
fn classify_http_error(e: reqwest::Error) -> CatalogError {
    let malformed = is_malformed_envelope(&e);
    let e = e.without_url();
    if e.is_builder() {
        CatalogError::InvalidUrl(e.to_string())
    } else if e.is_timeout() || e.is_connect() {
        CatalogError::Unknown(e.to_string())
    } else if malformed || e.is_decode() || e.is_body() {
        CatalogError::MalformedResponse(e.to_string())
    } else {
        CatalogError::Unknown(e.to_string())
    }
}

#[async_trait]
impl CatalogSource for TimbuCatalog {
    fn name(&self) -> &str {
        "timbu"
    }

    async fn fetch_products(&self) -> FetchOutcome {
        let url = self.products_url()?;

        info!(
            "Catalog request: host={}, path={}, size={}",
            url.host_str().unwrap_or("-"),
            url.path(),
            self.page_size
        );

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(classify_http_error)?;

        let status = response.status();
        debug!("Catalog response status: {}", status);

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Catalog API error: {} - {}", status.as_u16(), body);
            return Err(CatalogError::InvalidResponse {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(classify_http_error)?;
        debug!("Catalog body received: {} bytes", body.len());

        let page: CatalogPage = serde_json::from_slice(&body)
            .map_err(|e| CatalogError::InvalidData(e.to_string()))?;

        info!(
            "Catalog decoded: {} items (page={:?}, total={:?})",
            page.items.len(),
            page.page,
            page.total
        );

        Ok(page.items)
    }
}
