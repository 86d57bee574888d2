use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Currency used when none is configured.
pub const DEFAULT_CURRENCY: &str = "NGN";

/// A raw price as it appears in the catalog payload.
///
/// The catalog sends a heterogeneous array per currency: a bare number, an
/// array of numbers, or `null`. Decoding inspects the JSON shape; anything
/// that isn't a number or a non-empty list of numbers becomes `Empty`.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum PriceValue {
    Number(f64),
    NumberList(Vec<f64>),
    Empty,
}

impl PriceValue {
    /// Classifies a single JSON price element.
    pub fn from_json(value: &Value) -> PriceValue {
        match value {
            Value::Number(n) => n.as_f64().map_or(PriceValue::Empty, PriceValue::Number),
            Value::Array(items) if !items.is_empty() => items
                .iter()
                .map(Value::as_f64)
                .collect::<Option<Vec<f64>>>()
                .map_or(PriceValue::Empty, PriceValue::NumberList),
            _ => PriceValue::Empty,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, PriceValue::Empty)
    }
}

impl<'de> Deserialize<'de> for PriceValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(PriceValue::from_json(&value))
    }
}

/// A currency-keyed container of raw price values, e.g. `{"NGN": [15000.0]}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct PriceRecord {
    #[serde(flatten)]
    pub amounts: BTreeMap<String, Vec<PriceValue>>,
}

impl PriceRecord {
    pub fn new(currency: &str, values: Vec<PriceValue>) -> Self {
        let mut amounts = BTreeMap::new();
        amounts.insert(currency.to_string(), values);
        Self { amounts }
    }

    /// Raw values listed under `currency`, empty if the currency is absent.
    pub fn values(&self, currency: &str) -> &[PriceValue] {
        self.amounts.get(currency).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// A product photo. `url` is relative to the image host.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Photo {
    pub url: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub photos: Vec<Photo>,
    #[serde(
        rename = "current_price",
        alias = "currentPrice",
        default,
        deserialize_with = "null_as_default"
    )]
    pub current_price: Vec<PriceRecord>,
}

/// The envelope returned by the products endpoint.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct CatalogPage {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub size: Option<u32>,
    #[serde(default)]
    pub total: Option<u32>,
    pub items: Vec<ProductRecord>,
}

/// Treats an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_value_scalar() {
        let value: PriceValue = serde_json::from_str("15000.0").unwrap();
        assert_eq!(value, PriceValue::Number(15000.0));
    }

    #[test]
    fn test_price_value_integer_is_number() {
        let value: PriceValue = serde_json::from_str("2500").unwrap();
        assert_eq!(value, PriceValue::Number(2500.0));
    }

    #[test]
    fn test_price_value_list() {
        let value: PriceValue = serde_json::from_str("[1.0, 2.0]").unwrap();
        assert_eq!(value, PriceValue::NumberList(vec![1.0, 2.0]));
    }

    /// Shapes that carry no usable number must all collapse to Empty.
    #[test]
    fn test_price_value_unusable_shapes_are_empty() {
        for raw in ["null", "[]", "\"15000\"", "[1.0, \"x\"]", "{}", "true"] {
            let value: PriceValue = serde_json::from_str(raw).unwrap();
            assert_eq!(value, PriceValue::Empty, "input: {raw}");
        }
    }

    #[test]
    fn test_price_record_heterogeneous_array() {
        let record: PriceRecord =
            serde_json::from_str(r#"{"NGN": [15000.0, null, []]}"#).unwrap();
        assert_eq!(
            record.values("NGN"),
            &[PriceValue::Number(15000.0), PriceValue::Empty, PriceValue::Empty]
        );
        assert!(record.values("USD").is_empty());
    }

    #[test]
    fn test_product_record_decodes_timbu_item() {
        let json = r#"{
            "id": "a1",
            "name": "Nike Zoom Pegasus",
            "description": "A great running shoe.",
            "unique_id": "ignored",
            "photos": [{"model_name": "products", "url": "shoe/pegasus.jpg"}],
            "current_price": [{"NGN": [15000.0, null, []]}]
        }"#;
        let product: ProductRecord = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, "a1");
        assert_eq!(product.photos[0].url, "shoe/pegasus.jpg");
        assert_eq!(product.current_price.len(), 1);
    }

    #[test]
    fn test_product_record_tolerates_nulls_and_camel_case() {
        let json = r#"{
            "id": "a2",
            "name": "Max 90 Flyease",
            "description": null,
            "photos": null,
            "currentPrice": [{"NGN": [[24000.0, 26000.0]]}]
        }"#;
        let product: ProductRecord = serde_json::from_str(json).unwrap();
        assert_eq!(product.description, "");
        assert!(product.photos.is_empty());
        assert_eq!(
            product.current_price[0].values("NGN"),
            &[PriceValue::NumberList(vec![24000.0, 26000.0])]
        );
    }

    #[test]
    fn test_product_record_missing_id_fails() {
        let json = r#"{"name": "No id"}"#;
        assert!(serde_json::from_str::<ProductRecord>(json).is_err());
    }

    #[test]
    fn test_catalog_page_preserves_item_order() {
        let json = r#"{
            "page": 1, "size": 10, "total": 3,
            "items": [
                {"id": "3", "name": "c"},
                {"id": "1", "name": "a"},
                {"id": "2", "name": "b"}
            ]
        }"#;
        let page: CatalogPage = serde_json::from_str(json).unwrap();
        let ids: Vec<&str> = page.items.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
        assert_eq!(page.total, Some(3));
    }

    #[test]
    fn test_catalog_page_without_items_fails() {
        assert!(serde_json::from_str::<CatalogPage>(r#"{"page": 1}"#).is_err());
    }
}
