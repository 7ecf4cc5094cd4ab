use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::app::login::LoginForm;
use crate::modal::ModalController;
use crate::store::Store;

use super::components::{render_footer, render_login, render_modal, render_table};

/// Everything the view layer needs, borrowed for one frame. Rendering never
/// mutates state; the store and controller stay owned by the runtime.
pub struct UiContext<'a> {
    pub store: &'a Store,
    pub modal: &'a ModalController,
    pub login: &'a LoginForm,
    pub selected: usize,
    pub focus_index: usize,
    pub status: &'a str,
    pub help: Option<&'a str>,
}

pub fn draw(frame: &mut Frame<'_>, ctx: UiContext<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(7), Constraint::Length(2)])
        .split(frame.area());

    if ctx.store.is_authenticated() {
        render_table(frame, chunks[0], &ctx);
    } else {
        render_login(frame, chunks[0], &ctx);
    }
    render_footer(frame, chunks[1], &ctx);

    if ctx.modal.is_open() {
        render_modal(frame, &ctx);
    }
}
