use std::fmt;

use async_trait::async_trait;

use super::types::ProductRecord;

/// The four failure classes a catalog fetch can end in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidUrl,
    InvalidResponse,
    InvalidData,
    Unknown,
}

impl ErrorKind {
    /// The message shown to the shopper for this kind of failure.
    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::InvalidUrl => "Invalid URL",
            ErrorKind::InvalidResponse => "Invalid response",
            ErrorKind::InvalidData => "Invalid data",
            ErrorKind::Unknown => "Something is wrong",
        }
    }
}

/// Errors that can occur while fetching the catalog.
/// The payload carries the diagnostic detail that ends up in the log.
#[derive(Debug)]
pub enum CatalogError {
    /// The request URL could not be built from the configured endpoint.
    InvalidUrl(String),
    /// The server answered, but not with a 2xx.
    InvalidResponse { status: u16, message: String },
    /// The server answered with something that is not a well-formed HTTP
    /// response, or the body was cut short.
    MalformedResponse(String),
    /// The body arrived but did not decode as a catalog page.
    InvalidData(String),
    /// Transport or runtime failure (connect, timeout).
    Unknown(String),
}

impl CatalogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::InvalidUrl(_) => ErrorKind::InvalidUrl,
            CatalogError::InvalidResponse { .. } | CatalogError::MalformedResponse(_) => {
                ErrorKind::InvalidResponse
            }
            CatalogError::InvalidData(_) => ErrorKind::InvalidData,
            CatalogError::Unknown(_) => ErrorKind::Unknown,
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::InvalidUrl(msg) => write!(f, "invalid URL: {msg}"),
            CatalogError::InvalidResponse { status, message } => {
                write!(f, "invalid response (HTTP {status}): {message}")
            }
            CatalogError::MalformedResponse(msg) => write!(f, "malformed response: {msg}"),
            CatalogError::InvalidData(msg) => write!(f, "invalid data: {msg}"),
            CatalogError::Unknown(msg) => write!(f, "unknown error: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Result of one catalog fetch: the products in server order, or a classified error.
pub type FetchOutcome = Result<Vec<ProductRecord>, CatalogError>;

#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Returns the name of the catalog backend.
    fn name(&self) -> &str;

    /// Fetches the product list. Performs exactly one request; never retries.
    async fn fetch_products(&self) -> FetchOutcome;
}
