use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::super::view::UiContext;

pub fn render_footer(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    if let Some(help) = ctx.help {
        let help_widget = Paragraph::new(help).style(Style::default().fg(Color::Yellow));
        frame.render_widget(help_widget, rows[0]);
    }

    let badge = if ctx.store.is_busy() {
        Span::styled("[…]", Style::default().fg(Color::Yellow))
    } else {
        Span::styled("[ok]", Style::default().fg(Color::Green))
    };
    let status = Paragraph::new(Line::from(vec![
        badge,
        Span::raw(" "),
        Span::raw(ctx.status.to_string()),
    ]));
    frame.render_widget(status, rows[1]);
}
