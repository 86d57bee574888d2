//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::catalog::{
    CatalogSource, FetchOutcome, Photo, PriceRecord, PriceValue, ProductRecord,
};

/// A catalog for tests that don't need real API calls. Always returns an
/// empty list.
pub struct NoopCatalog;

#[async_trait]
impl CatalogSource for NoopCatalog {
    fn name(&self) -> &str {
        "noop"
    }

    async fn fetch_products(&self) -> FetchOutcome {
        Ok(Vec::new())
    }
}

/// Creates a test App with a NoopCatalog.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(
        Arc::new(NoopCatalog),
        "NGN".to_string(),
        "https://api.timbu.cloud/images".to_string(),
    )
}

pub fn product(id: &str, name: &str, prices: Vec<PriceValue>) -> ProductRecord {
    ProductRecord {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{name} description"),
        photos: vec![Photo {
            url: format!("{id}.png"),
        }],
        current_price: if prices.is_empty() {
            Vec::new()
        } else {
            vec![PriceRecord::new("NGN", prices)]
        },
    }
}

/// One product per price shape: scalar, list, absent.
pub fn sample_products() -> Vec<ProductRecord> {
    vec![
        product("1", "Nike Zoom Pegasus", vec![PriceValue::Number(15000.0)]),
        product(
            "2",
            "Max 90 Flyease",
            vec![PriceValue::NumberList(vec![1.0, 2.0])],
        ),
        product("3", "Air Force 1", vec![]),
    ]
}
