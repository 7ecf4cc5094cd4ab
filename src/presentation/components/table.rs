use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Row, Table, TableState},
};

use crate::domain::ProductRecord;

use super::super::view::UiContext;
use super::fields::fit_width;

pub fn render_table(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let products = ctx.store.products();
    let title_budget = (area.width / 3).max(12);

    let header = Row::new(["Title", "Category", "Origin", "Price", "Enabled"])
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let rows = products.iter().map(|product| product_row(product, title_budget));

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(36),
            Constraint::Percentage(24),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(9),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(format!("Products ({})", products.len()))
            .borders(Borders::ALL),
    )
    .row_highlight_style(Style::default().bg(Color::DarkGray))
    .highlight_symbol("» ");

    let mut state = TableState::default();
    if !products.is_empty() {
        state.select(Some(ctx.selected.min(products.len() - 1)));
    }
    frame.render_stateful_widget(table, area, &mut state);
}

fn product_row(product: &ProductRecord, title_budget: u16) -> Row<'static> {
    let enabled = if product.is_enabled {
        Cell::from(Span::styled("on", Style::default().fg(Color::Green)))
    } else {
        Cell::from(Span::styled("off", Style::default().fg(Color::DarkGray)))
    };
    Row::new(vec![
        Cell::from(fit_width(&product.title, title_budget)),
        Cell::from(product.category.clone()),
        Cell::from(price_text(product.origin_price)),
        Cell::from(price_text(product.price)),
        enabled,
    ])
}

pub(super) fn price_text(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("${}", value as i64)
    } else {
        format!("${value}")
    }
}
