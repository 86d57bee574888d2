use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ProductDetail, ProductGrid, TitleBar};

const SPINNER: [char; 8] = ['⣾', '⣽', '⣻', '⢿', '⡿', '⣟', '⣯', '⣷'];

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, help_area] = layout.areas(frame.area());

    let view = app.view();

    // Title bar
    let status = if view.is_loading {
        format!("{} {}", SPINNER[spinner_frame % SPINNER.len()], app.status_message)
    } else {
        app.status_message.clone()
    };
    let mut title_bar = TitleBar::new(
        app.currency.clone(),
        status,
        app.last_updated.map(|t| t.format("%H:%M:%S").to_string()),
    );
    title_bar.is_error = view.error_message.is_some() && !view.is_loading;
    title_bar.render(frame, title_area);

    // Main area: detail, grid, or one of the placeholder views
    if let Some(product) = app.detail_product() {
        ProductDetail {
            product,
            image_base_url: &app.image_base_url,
        }
        .render(frame, main_area);
    } else if !view.products.is_empty() {
        ProductGrid {
            products: &view.products,
            state: &mut tui.grid,
        }
        .render(frame, main_area);
    } else if view.is_loading {
        draw_centered(frame, main_area, "Loading catalog...", Style::default().fg(Color::Yellow));
    } else if let Some(message) = view.error_message {
        draw_error_view(frame, main_area, message);
    } else {
        draw_centered(frame, main_area, "No products yet.", Style::default().fg(Color::DarkGray));
    }

    // Key hints
    let help = if app.detail_index.is_some() {
        "Esc back · r refresh · q quit"
    } else {
        "←↑↓→ move · Enter open · r refresh · q quit"
    };
    frame.render_widget(
        Span::styled(help, Style::default().add_modifier(Modifier::DIM)),
        help_area,
    );
}

fn draw_centered(frame: &mut Frame, area: Rect, text: &str, style: Style) {
    let [line_area] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(text.to_string(), style))).alignment(Alignment::Center),
        line_area,
    );
}

fn draw_error_view(frame: &mut Frame, area: Rect, error_msg: &str) {
    let [box_area] = Layout::vertical([Constraint::Length(5)])
        .flex(Flex::Center)
        .areas(area);
    let error_paragraph = Paragraph::new(vec![
        Line::from(Span::styled(
            error_msg.to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from("Press r to try again."),
    ])
    .block(Block::bordered().title("ERROR").border_style(Style::default().fg(Color::Red)))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(error_paragraph, box_area);
}
