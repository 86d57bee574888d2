//! # ProductGrid Component
//!
//! Adaptive grid of `ProductCard`s. The column count follows the terminal
//! width (one column per `CARD_MIN_WIDTH` cells), and the grid scrolls by
//! whole rows to keep the selected card visible.
//!
//! ```text
//! ┌────────────┐┌────────────┐┌────────────┐
//! │ Name       ││ Name       ││ Name       │   ← row scroll_row
//! │ image.png  ││ image.png  ││ no image   │
//! │            ││            ││            │
//! │ NGN 150.00 ││ NGN [1, 2] ││ N/A        │
//! └────────────┘└────────────┘└────────────┘
//! ```

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::price::DisplayProduct;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::product_card::{CARD_HEIGHT, CARD_MIN_WIDTH, ProductCard};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridEvent {
    /// Open the detail view for this product index.
    Open(usize),
}

/// Persistent presentation state for the grid.
#[derive(Debug)]
pub struct ProductGridState {
    pub selected: usize,
    /// First visible row.
    pub scroll_row: usize,
    /// Column count from the last render.
    pub columns: usize,
    /// Number of products, synced from the app before events are handled.
    pub len: usize,
}

impl Default for ProductGridState {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductGridState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            scroll_row: 0,
            columns: 1,
            len: 0,
        }
    }

    /// Updates the product count, keeping the selection in range.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    /// Scrolls so the selected row is within `visible_rows` of `scroll_row`.
    pub fn ensure_visible(&mut self, visible_rows: usize) {
        let row = self.selected / self.columns.max(1);
        if row < self.scroll_row {
            self.scroll_row = row;
        } else if row >= self.scroll_row + visible_rows {
            self.scroll_row = row + 1 - visible_rows;
        }
    }
}

impl EventHandler for ProductGridState {
    type Event = GridEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<GridEvent> {
        if self.len == 0 {
            return None;
        }
        let columns = self.columns.max(1);
        match event {
            TuiEvent::Left => self.selected = self.selected.saturating_sub(1),
            TuiEvent::Right if self.selected + 1 < self.len => self.selected += 1,
            TuiEvent::Up if self.selected >= columns => self.selected -= columns,
            TuiEvent::Down if self.selected + columns < self.len => self.selected += columns,
            TuiEvent::Open => return Some(GridEvent::Open(self.selected)),
            _ => {}
        }
        None
    }
}

/// Columns that fit in `width`, never fewer than one.
pub fn column_count(width: u16) -> usize {
    usize::from((width / CARD_MIN_WIDTH).max(1))
}

pub struct ProductGrid<'a> {
    pub products: &'a [DisplayProduct<'a>],
    pub state: &'a mut ProductGridState,
}

impl Component for ProductGrid<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.set_len(self.products.len());
        self.state.columns = column_count(area.width);
        let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));
        self.state.ensure_visible(visible_rows);

        let columns = self.state.columns;
        let rows = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); visible_rows]).split(area);

        for (offset, row_area) in rows.iter().enumerate() {
            let row = self.state.scroll_row + offset;
            let cells = Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns])
                .split(*row_area);
            for (col, cell) in cells.iter().enumerate() {
                let index = row * columns + col;
                let Some(product) = self.products.get(index) else {
                    return;
                };
                ProductCard {
                    product,
                    selected: index == self.state.selected,
                }
                .render(frame, *cell);
            }
        }
    }
}
