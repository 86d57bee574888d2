use std::fs::File;
use std::sync::Arc;

use clap::Parser;
use log::info;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use storefront::catalog::TimbuCatalog;
use storefront::core::config::{self, CliOverrides};
use storefront::core::state::App;
use storefront::{listing, tui};

#[derive(Parser)]
#[command(name = "storefront", about = "Browse the product catalog from the terminal")]
struct Args {
    /// Catalog API base URL (overrides config and STOREFRONT_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Currency code to display prices in
    #[arg(long)]
    currency: Option<String>,

    /// Print the catalog once as tab-separated lines instead of opening the TUI
    #[arg(long)]
    plain: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to storefront.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("storefront.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().map_err(std::io::Error::other)?;
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            base_url: args.base_url.as_deref(),
            currency: args.currency.as_deref(),
        },
    );

    info!(
        "Storefront starting: base_url={}, currency={}, plain={}",
        resolved.base_url, resolved.currency, args.plain
    );

    let catalog = TimbuCatalog::new(
        resolved.base_url.clone(),
        resolved.credentials.clone(),
        resolved.page_size,
        resolved.timeout,
    )
    .map_err(std::io::Error::other)?;

    let app = App::from_config(Arc::new(catalog), &resolved);

    if args.plain {
        listing::run(app).await
    } else {
        tui::run(app)
    }
}
