//! # TitleBar Component
//!
//! Top status bar showing the store name, display currency, the current
//! status and when the catalog was last refreshed.
//!
//! TitleBar is purely presentational: it receives all data as props and has
//! no internal state.
//!
//! The title text changes based on state:
//!
//! 1. **Updated**: `"Storefront (NGN) | 12 products | updated 14:02:11"`
//! 2. **Status message**: `"Storefront (NGN) | Loading catalog..."`
//! 3. **Default**: `"Storefront (NGN)"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

/// Top status bar component.
pub struct TitleBar {
    /// Currency prices are shown in (e.g. "NGN")
    pub currency: String,
    /// Status message (e.g. "Loading catalog...", "Invalid data")
    pub status_message: String,
    /// Local time of the last successful fetch, preformatted
    pub last_updated: Option<String>,
    /// Highlight the bar (used while the last fetch failed)
    pub is_error: bool,
}

impl TitleBar {
    pub fn new(currency: String, status_message: String, last_updated: Option<String>) -> Self {
        Self {
            currency,
            status_message,
            last_updated,
            is_error: false,
        }
    }

    fn text(&self) -> String {
        let mut title = format!("Storefront ({})", self.currency);
        if !self.status_message.is_empty() {
            title.push_str(" | ");
            title.push_str(&self.status_message);
        }
        if let Some(ref updated) = self.last_updated {
            title.push_str(" | updated ");
            title.push_str(updated);
        }
        title
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.is_error {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
        };
        frame.render_widget(Span::styled(self.text(), style), area);
    }
}
