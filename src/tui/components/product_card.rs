//! # ProductCard Component
//!
//! One cell of the catalog grid: product name, image reference, price.
//! A missing price renders as a red `N/A`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::price::DisplayProduct;
use crate::tui::component::Component;

/// Rows a card occupies, borders included.
pub const CARD_HEIGHT: u16 = 6;
/// Narrowest a card may get before the grid drops a column.
pub const CARD_MIN_WIDTH: u16 = 24;

pub struct ProductCard<'a> {
    pub product: &'a DisplayProduct<'a>,
    pub selected: bool,
}

impl Component for ProductCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.selected {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };
        let price_style = if self.product.has_price() {
            Style::default().fg(Color::Gray)
        } else {
            Style::default().fg(Color::Red)
        };

        let inner_width = usize::from(area.width.saturating_sub(2));
        let record = self.product.record;
        let image = record
            .photos
            .first()
            .map_or("no image", |photo| photo.url.as_str());

        let lines = vec![
            Line::from(Span::styled(
                fit_width(&record.name, inner_width),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                fit_width(image, inner_width),
                Style::default().fg(Color::DarkGray),
            )),
            Line::default(),
            Line::from(Span::styled(
                fit_width(&self.product.price_label, inner_width),
                price_style,
            )),
        ];

        let paragraph = Paragraph::new(lines).block(Block::bordered().border_style(border_style));
        frame.render_widget(paragraph, area);
    }
}

/// Cuts `text` to at most `width` terminal columns, ending in `…` when cut.
pub fn fit_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
