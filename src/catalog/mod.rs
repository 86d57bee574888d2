//! # Catalog
//!
//! Everything that talks to the remote product catalog: the wire types,
//! the `CatalogSource` seam and its HTTP implementation.

pub mod source;
pub mod timbu;
pub mod types;

pub use source::{CatalogError, CatalogSource, ErrorKind, FetchOutcome};
pub use timbu::{TimbuCatalog, TimbuCredentials};
pub use types::{CatalogPage, DEFAULT_CURRENCY, Photo, PriceRecord, PriceValue, ProductRecord};
