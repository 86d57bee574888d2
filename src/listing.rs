//! # Plain Listing
//!
//! Non-interactive adapter: run one fetch through the same reducer the TUI
//! uses and print one tab-separated line per product.
//!
//! ```text
//! name<TAB>price<TAB>image-url
//! ```

use std::io::{self, Write};

use log::info;

use crate::core::action::{Action, Effect, update};
use crate::core::price::DisplayProduct;
use crate::core::state::App;

/// Fetches once and writes the listing to stdout. A failed fetch is
/// returned as an error carrying the shopper-facing message.
pub async fn run(mut app: App) -> io::Result<()> {
    let Effect::SpawnFetch(request_id) = update(&mut app, Action::Refresh) else {
        return Ok(());
    };

    let outcome = app.catalog.fetch_products().await;
    update(
        &mut app,
        Action::FetchCompleted {
            request_id,
            outcome,
        },
    );

    let view = app.view();
    if let Some(message) = view.error_message {
        return Err(io::Error::other(message.to_string()));
    }

    info!("Printing {} products", view.products.len());
    let mut out = io::stdout().lock();
    write_listing(&mut out, &view.products)?;
    out.flush()
}

pub fn write_listing(out: &mut impl Write, products: &[DisplayProduct<'_>]) -> io::Result<()> {
    for product in products {
        writeln!(
            out,
            "{}\t{}\t{}",
            product.record.name,
            product.price_label,
            product.image_url.as_deref().unwrap_or("-")
        )?;
    }
    Ok(())
}
