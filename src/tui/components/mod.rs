//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: Top status bar with currency, status and refresh time
//! - `ProductCard`: One grid cell
//! - `ProductDetail`: Full view of the selected product
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `ProductGrid`: Adaptive, scrollable grid of cards; emits `GridEvent::Open`
//!
//! Components receive external data as props (struct fields), never by
//! reaching into `App` themselves:
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! TitleBar::new(app.currency.clone(), app.status_message.clone(), None).render(frame, area);
//! ```

pub mod product_card;
pub mod product_detail;
pub mod product_grid;
mod title_bar;

pub use product_detail::ProductDetail;
pub use product_grid::{GridEvent, ProductGrid, ProductGridState};
pub use title_bar::TitleBar;
