//! # Price Resolution
//!
//! Turns a product's raw price payload into a `PriceValue` and then into the
//! label a shopper sees. Pure functions, no I/O.
//!
//! ```text
//! current_price[0]["NGN"][0]
//!        │
//!        ├── 15000.0        →  Number(15000.0)       →  "NGN 15000.00"
//!        ├── [1.0, 2.0]     →  NumberList([1, 2])    →  "NGN [1.0, 2.0]"
//!        └── null / missing →  Empty                 →  "N/A"
//! ```

use reqwest::Url;

use crate::catalog::{DEFAULT_CURRENCY, PriceValue, ProductRecord};

/// Label shown when a product has no usable price.
pub const NOT_AVAILABLE: &str = "N/A";

/// Resolves the price shown for `record` in the default currency.
pub fn resolve_display_price(record: &ProductRecord) -> PriceValue {
    resolve_price_in(record, DEFAULT_CURRENCY)
}

/// Resolves the first value listed under `currency` in the record's first
/// price entry. Later entries and later values are not consulted.
pub fn resolve_price_in(record: &ProductRecord, currency: &str) -> PriceValue {
    record
        .current_price
        .first()
        .and_then(|entry| entry.values(currency).first())
        .cloned()
        .unwrap_or(PriceValue::Empty)
}

/// Formats a resolved price for display.
pub fn format_price(value: &PriceValue, currency: &str) -> String {
    match value {
        PriceValue::Number(amount) => format!("{currency} {amount:.2}"),
        PriceValue::NumberList(amounts) => {
            let joined = amounts
                .iter()
                .map(|amount| format!("{amount:?}"))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{currency} [{joined}]")
        }
        PriceValue::Empty => NOT_AVAILABLE.to_string(),
    }
}

/// Absolute URL of the product's first photo on the image host.
pub fn image_url(record: &ProductRecord, image_base_url: &str) -> Option<String> {
    photo_url(image_base_url, &record.photos.first()?.url)
}

/// Joins the image host with a relative photo id. `None` if the id is blank
/// or the result does not parse as a URL.
pub fn photo_url(image_base_url: &str, relative: &str) -> Option<String> {
    let relative = relative.trim_start_matches('/');
    if relative.is_empty() {
        return None;
    }
    let joined = format!("{}/{}", image_base_url.trim_end_matches('/'), relative);
    Url::parse(&joined).ok().map(|url| url.to_string())
}

/// A product paired with its resolved price, ready for a renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayProduct<'a> {
    pub record: &'a ProductRecord,
    pub price: PriceValue,
    pub price_label: String,
    pub image_url: Option<String>,
}

impl<'a> DisplayProduct<'a> {
    pub fn new(record: &'a ProductRecord, currency: &str, image_base_url: &str) -> Self {
        let price = resolve_price_in(record, currency);
        let price_label = format_price(&price, currency);
        Self {
            record,
            price,
            price_label,
            image_url: image_url(record, image_base_url),
        }
    }

    pub fn has_price(&self) -> bool {
        !self.price.is_empty()
    }
}
