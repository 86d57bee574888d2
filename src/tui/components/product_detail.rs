//! # ProductDetail Component
//!
//! Full view of a single product: price, wrapped description, every photo
//! URL and the catalog id.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::price::{DisplayProduct, photo_url};
use crate::tui::component::Component;

pub struct ProductDetail<'a> {
    pub product: DisplayProduct<'a>,
    pub image_base_url: &'a str,
}

impl ProductDetail<'_> {
    fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let record = self.product.record;
        let dim = Style::default().fg(Color::DarkGray);
        let price_style = if self.product.has_price() {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Red)
        };

        let mut lines = vec![
            Line::from(Span::styled(self.product.price_label.clone(), price_style)),
            Line::default(),
        ];

        if record.description.trim().is_empty() {
            lines.push(Line::from(Span::styled("No description.", dim)));
        } else {
            lines.extend(
                textwrap::wrap(record.description.trim(), width.max(1))
                    .into_iter()
                    .map(|line| Line::from(line.into_owned())),
            );
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Photos",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        if record.photos.is_empty() {
            lines.push(Line::from(Span::styled("  none", dim)));
        }
        for photo in &record.photos {
            let url = photo_url(self.image_base_url, &photo.url).unwrap_or_else(|| photo.url.clone());
            lines.push(Line::from(format!("  {url}")));
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(format!("ID: {}", record.id), dim)));
        lines
    }
}

impl Component for ProductDetail<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = usize::from(area.width.saturating_sub(2));
        let block = Block::bordered()
            .title(self.product.record.name.clone())
            .title_style(Style::default().add_modifier(Modifier::BOLD));
        frame.render_widget(Paragraph::new(self.lines(inner_width)).block(block), area);
    }
}
