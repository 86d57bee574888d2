//! # Actions
//!
//! Everything that can happen on the catalog screen becomes an `Action`.
//! User presses `r`? That's `Action::Refresh`.
//! The catalog answers? That's `Action::FetchCompleted { .. }`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing the I/O the caller must
//! perform. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Every fetch is tagged with a request id. Only the completion for the most
//! recently issued id is applied, so the last request always wins.

use chrono::Local;
use log::{debug, info, warn};

use crate::catalog::FetchOutcome;
use crate::core::state::App;

#[derive(Debug)]
pub enum Action {
    /// Start (or restart) a catalog fetch.
    Refresh,
    /// A fetch finished.
    FetchCompleted { request_id: u64, outcome: FetchOutcome },
    /// Open the detail view for the product at this index.
    OpenDetail(usize),
    CloseDetail,
    Quit,
}

/// Work the caller has to carry out after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Run a fetch and report back with this request id.
    SpawnFetch(u64),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Refresh => {
            app.latest_request += 1;
            app.is_loading = true;
            app.status_message = String::from("Loading catalog...");
            debug!("Fetch requested: request_id={}", app.latest_request);
            Effect::SpawnFetch(app.latest_request)
        }
        Action::FetchCompleted {
            request_id,
            outcome,
        } => {
            if request_id != app.latest_request {
                debug!(
                    "Ignoring stale fetch result: request_id={}, latest={}",
                    request_id, app.latest_request
                );
                return Effect::None;
            }
            app.is_loading = false;
            match outcome {
                Ok(products) => {
                    info!("Catalog loaded: {} products", products.len());
                    app.status_message = format!("{} products", products.len());
                    app.products = products;
                    app.error_message = None;
                    app.detail_index = None;
                    app.last_updated = Some(Local::now());
                }
                Err(error) => {
                    let kind = error.kind();
                    warn!("Catalog fetch failed ({:?}): {}", kind, error);
                    app.error_message = Some(kind.message().to_string());
                    app.status_message = kind.message().to_string();
                }
            }
            Effect::None
        }
        Action::OpenDetail(index) => {
            if index < app.products.len() {
                app.detail_index = Some(index);
            }
            Effect::None
        }
        Action::CloseDetail => {
            app.detail_index = None;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
