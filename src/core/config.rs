//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.storefront/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::catalog::{DEFAULT_CURRENCY, TimbuCredentials};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    pub base_url: Option<String>,
    pub image_base_url: Option<String>,
    pub organization_id: Option<String>,
    pub app_id: Option<String>,
    pub api_key: Option<String>,
    pub page_size: Option<u32>,
    pub currency: Option<String>,
    pub timeout_secs: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "https://api.timbu.cloud";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://api.timbu.cloud/images";
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub image_base_url: String,
    pub credentials: TimbuCredentials,
    pub page_size: u32,
    pub currency: String,
    pub timeout: Duration,
}

/// Values given on the command line. `None` means "not specified".
#[derive(Debug, Default)]
pub struct CliOverrides<'a> {
    pub base_url: Option<&'a str>,
    pub currency: Option<&'a str>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.storefront/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".storefront").join("config.toml"))
}

/// Load config from `~/.storefront/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `StoreConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<StoreConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(StoreConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(StoreConfig::default());
    }

    load_config_from(&path)
}

/// Parses the config file at `path`.
pub fn load_config_from(path: &Path) -> Result<StoreConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: StoreConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", redacted(&config));
    Ok(config)
}

/// Copy of the catalog section with the API key masked, for logging.
fn redacted(config: &StoreConfig) -> CatalogConfig {
    let c = &config.catalog;
    CatalogConfig {
        base_url: c.base_url.clone(),
        image_base_url: c.image_base_url.clone(),
        organization_id: c.organization_id.clone(),
        app_id: c.app_id.clone(),
        api_key: c.api_key.as_ref().map(|_| "***".to_string()),
        page_size: c.page_size,
        currency: c.currency.clone(),
        timeout_secs: c.timeout_secs,
    }
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Storefront Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [catalog]
# base_url = "https://api.timbu.cloud"                 # Or STOREFRONT_BASE_URL
# image_base_url = "https://api.timbu.cloud/images"    # Or STOREFRONT_IMAGE_BASE_URL
# organization_id = "..."                              # Or TIMBU_ORGANIZATION_ID
# app_id = "..."                                       # Or TIMBU_APP_ID
# api_key = "..."                                      # Or TIMBU_API_KEY
# page_size = 10
# currency = "NGN"                                     # Or STOREFRONT_CURRENCY
# timeout_secs = 30
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &StoreConfig, cli: &CliOverrides<'_>) -> ResolvedConfig {
    let catalog = &config.catalog;

    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .map(|s| s.to_string())
        .or_else(|| std::env::var("STOREFRONT_BASE_URL").ok())
        .or_else(|| catalog.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Image host: env → config → default
    let image_base_url = std::env::var("STOREFRONT_IMAGE_BASE_URL")
        .ok()
        .or_else(|| catalog.image_base_url.clone())
        .unwrap_or_else(|| DEFAULT_IMAGE_BASE_URL.to_string());

    // Currency: CLI → env → config → default
    let currency = cli
        .currency
        .map(|s| s.to_string())
        .or_else(|| std::env::var("STOREFRONT_CURRENCY").ok())
        .or_else(|| catalog.currency.clone())
        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

    // Credentials: env → config
    let credentials = TimbuCredentials {
        organization_id: std::env::var("TIMBU_ORGANIZATION_ID")
            .ok()
            .or_else(|| catalog.organization_id.clone()),
        app_id: std::env::var("TIMBU_APP_ID")
            .ok()
            .or_else(|| catalog.app_id.clone()),
        api_key: std::env::var("TIMBU_API_KEY")
            .ok()
            .or_else(|| catalog.api_key.clone()),
    };

    if credentials.app_id.is_none() || credentials.api_key.is_none() {
        warn!("Catalog credentials incomplete; the endpoint may reject requests");
    }

    ResolvedConfig {
        base_url,
        image_base_url,
        credentials,
        page_size: catalog.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        currency,
        timeout: Duration::from_secs(catalog.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
    }
}
