//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the catalog
//! screen, and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Fetch Lifecycle
//!
//! A fetch runs on a tokio task and reports back over a channel as
//! `Action::FetchCompleted`. The event loop feeds that action to `update()`,
//! which is the only writer of the product list and the loading/error flags.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on events or fetch results.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::sync::mpsc;
use std::time::{Duration, Instant};

use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{GridEvent, ProductGridState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub grid: ProductGridState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            grid: ProductGridState::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn run(mut app: App) -> std::io::Result<()> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut app);
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App) -> std::io::Result<()> {
    let mut tui = TuiState::new();

    // Channel for actions from background fetch tasks
    let (tx, rx) = mpsc::channel();

    // Initial load
    let effect = update(app, Action::Refresh);
    apply_effect(effect, app, &tx);

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        if app.is_loading {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if app.is_loading {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            tui.grid.set_len(app.products.len());
            let Some(action) = action_for(event, app, &mut tui) else {
                continue;
            };
            let effect = update(app, action);
            if effect == Effect::Quit {
                should_quit = true;
                break;
            }
            apply_effect(effect, app, &tx);
        }

        if should_quit {
            info!("Quit requested");
            break;
        }

        // Handle background fetch results
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(app, action);
            apply_effect(effect, app, &tx);
        }
    }

    Ok(())
}

/// Maps a terminal event to a core action. Grid navigation is handled
/// locally and yields no action.
fn action_for(event: TuiEvent, app: &App, tui: &mut TuiState) -> Option<Action> {
    let in_detail = app.detail_index.is_some();
    match event {
        TuiEvent::ForceQuit | TuiEvent::Quit => Some(Action::Quit),
        TuiEvent::Back if in_detail => Some(Action::CloseDetail),
        TuiEvent::Back => Some(Action::Quit),
        TuiEvent::Refresh => Some(Action::Refresh),
        TuiEvent::Resize => None,
        _ if in_detail => None,
        _ => tui.grid.handle_event(&event).map(|GridEvent::Open(index)| Action::OpenDetail(index)),
    }
}

fn apply_effect(effect: Effect, app: &App, tx: &mpsc::Sender<Action>) {
    if let Effect::SpawnFetch(request_id) = effect {
        spawn_fetch(app, request_id, tx.clone());
    }
}

fn spawn_fetch(app: &App, request_id: u64, tx: mpsc::Sender<Action>) {
    let catalog = app.catalog.clone();
    info!(
        "Spawning catalog fetch: request_id={}, source={}",
        request_id,
        catalog.name()
    );

    tokio::spawn(async move {
        let outcome = catalog.fetch_products().await;
        if tx
            .send(Action::FetchCompleted {
                request_id,
                outcome,
            })
            .is_err()
        {
            warn!(
                "Failed to deliver fetch result for request_id={}: receiver dropped",
                request_id
            );
        }
    });
}
