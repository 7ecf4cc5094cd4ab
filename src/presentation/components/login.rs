use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, List, ListState, Padding},
};

use crate::app::login::LoginField;

use super::super::view::UiContext;
use super::fields::{hint_item, input_item};
use super::layout::centered_rect;

pub fn render_login(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let card = centered_rect(area, 52, 9);
    let block = Block::default()
        .title("Sign in")
        .borders(Borders::ALL)
        .padding(Padding::horizontal(1))
        .border_style(Style::default().fg(Color::Cyan));
    let inner_width = card.width.saturating_sub(4);

    let password_mask = "•".repeat(ctx.login.password.chars().count());
    let focus = ctx.login.focus();
    let items = vec![
        input_item(
            "Email",
            &ctx.login.username,
            focus == LoginField::Username,
            inner_width,
        ),
        input_item(
            "Password",
            &password_mask,
            focus == LoginField::Password,
            inner_width,
        ),
        hint_item(""),
        hint_item("Enter to sign in"),
    ];

    let mut state = ListState::default();
    state.select(Some(match focus {
        LoginField::Username => 0,
        LoginField::Password => 1,
    }));

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("» ");
    frame.render_stateful_widget(list, card, &mut state);
}
