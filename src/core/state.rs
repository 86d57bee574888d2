//! # Application State
//!
//! Core business state for the storefront. This module contains domain logic
//! only - no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── catalog: Arc<dyn CatalogSource>  // where products come from
//! ├── currency: String                 // price currency to display
//! ├── image_base_url: String           // host for relative photo ids
//! ├── status_message: String           // status bar text
//! ├── is_loading: bool                 // fetch in flight
//! ├── products: Vec<ProductRecord>     // last successful fetch, server order
//! ├── error_message: Option<String>    // last fetch failure, shopper-facing
//! ├── detail_index: Option<usize>      // product shown in the detail view
//! ├── latest_request: u64              // id of the newest fetch issued
//! └── last_updated: Option<DateTime>   // when products were last replaced
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! The fetch completion is the only writer of products and flags.

use std::sync::Arc;

use chrono::{DateTime, Local};

use crate::catalog::{CatalogSource, ProductRecord};
use crate::core::config::ResolvedConfig;
use crate::core::price::DisplayProduct;

pub struct App {
    pub catalog: Arc<dyn CatalogSource>,
    pub currency: String,
    pub image_base_url: String,
    pub status_message: String,
    pub is_loading: bool,
    pub products: Vec<ProductRecord>,
    pub error_message: Option<String>,
    pub detail_index: Option<usize>,
    pub latest_request: u64,
    pub last_updated: Option<DateTime<Local>>,
}

/// What a renderer needs to draw the catalog screen.
#[derive(Debug, PartialEq)]
pub struct CatalogView<'a> {
    pub is_loading: bool,
    pub products: Vec<DisplayProduct<'a>>,
    pub error_message: Option<&'a str>,
}

impl App {
    pub fn new(catalog: Arc<dyn CatalogSource>, currency: String, image_base_url: String) -> Self {
        Self {
            catalog,
            currency,
            image_base_url,
            status_message: String::from("Welcome to the store!"),
            is_loading: false,
            products: Vec::new(),
            error_message: None,
            detail_index: None,
            latest_request: 0,
            last_updated: None,
        }
    }

    pub fn from_config(catalog: Arc<dyn CatalogSource>, config: &ResolvedConfig) -> Self {
        Self::new(
            catalog,
            config.currency.clone(),
            config.image_base_url.clone(),
        )
    }

    pub fn display_products(&self) -> Vec<DisplayProduct<'_>> {
        self.products
            .iter()
            .map(|record| DisplayProduct::new(record, &self.currency, &self.image_base_url))
            .collect()
    }

    /// The product currently open in the detail view, if any.
    pub fn detail_product(&self) -> Option<DisplayProduct<'_>> {
        let record = self.products.get(self.detail_index?)?;
        Some(DisplayProduct::new(
            record,
            &self.currency,
            &self.image_base_url,
        ))
    }

    pub fn view(&self) -> CatalogView<'_> {
        CatalogView {
            is_loading: self.is_loading,
            products: self.display_products(),
            error_message: self.error_message.as_deref(),
        }
    }
}
