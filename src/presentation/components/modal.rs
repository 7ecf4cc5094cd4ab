use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph, Wrap},
};
use textwrap::wrap;

use crate::app::focus::{ModalField, field_label, focus_targets};
use crate::form::ProductDraft;
use crate::modal::ModalMode;

use super::super::view::UiContext;
use super::fields::{checkbox_item, fit_width, hint_item, input_item};
use super::layout::centered_rect;
use super::table::price_text;

pub fn render_modal(frame: &mut Frame<'_>, ctx: &UiContext<'_>) {
    let Some(mode) = ctx.modal.mode() else {
        return;
    };
    let screen = frame.area();
    let area = match mode {
        ModalMode::Delete => centered_rect(screen, 56, 7),
        _ => centered_rect(screen, 72, screen.height.saturating_sub(4).clamp(12, 26)),
    };
    frame.render_widget(Clear, area);

    let border = if mode == ModalMode::Delete {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let block = Block::default()
        .title(ctx.modal.title())
        .borders(Borders::ALL)
        .padding(Padding::horizontal(1))
        .border_style(border);

    match mode {
        ModalMode::Delete => render_delete(frame, area, block, ctx.modal.draft()),
        ModalMode::View => render_view(frame, area, block, ctx.modal.draft()),
        ModalMode::Create | ModalMode::Edit => {
            render_form(frame, area, block, ctx.modal.draft(), ctx.focus_index)
        }
    }
}

fn render_delete(frame: &mut Frame<'_>, area: Rect, block: Block<'_>, draft: &ProductDraft) {
    let name = if draft.title.is_empty() {
        "this product".to_string()
    } else {
        format!("\"{}\"", draft.title)
    };
    let body = vec![
        Line::from(vec![
            Span::raw("Delete "),
            Span::styled(name, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("?"),
        ]),
        Line::raw(""),
        Line::from(Span::styled(
            "Enter to delete, Esc to keep it.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(body).block(block).wrap(Wrap { trim: true }), area);
}

fn render_view(frame: &mut Frame<'_>, area: Rect, block: Block<'_>, draft: &ProductDraft) {
    let width = area.width.saturating_sub(4) as usize;
    let mut lines = vec![
        detail_line("Title", &draft.title),
        detail_line("Category", &draft.category),
        detail_line("Unit", &draft.unit),
        detail_line("Original price", &display_price(&draft.origin_price)),
        detail_line("Price", &display_price(&draft.price)),
        detail_line("Enabled", if draft.is_enabled { "yes" } else { "no" }),
    ];
    push_multiline(&mut lines, "Description", &draft.description, width);
    push_multiline(&mut lines, "Content", &draft.content, width);
    lines.push(detail_line("Primary image", &draft.image_url));
    let secondary = draft.gallery().filled();
    if !secondary.is_empty() {
        lines.push(Line::from(Span::styled(
            "Secondary images",
            Style::default().fg(Color::Cyan),
        )));
        for url in &secondary {
            lines.push(Line::from(format!("  {}", fit_width(url, area.width.saturating_sub(6)))));
        }
    }
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_form(
    frame: &mut Frame<'_>,
    area: Rect,
    block: Block<'_>,
    draft: &ProductDraft,
    focus_index: usize,
) {
    let width = area.width.saturating_sub(4);
    let targets = focus_targets(draft);
    let focus_index = focus_index.min(targets.len().saturating_sub(1));
    let mut items: Vec<ListItem<'static>> = Vec::with_capacity(targets.len() + 1);
    let mut selected_item = 0;

    for (index, target) in targets.iter().enumerate() {
        if index == focus_index {
            selected_item = items.len();
        }
        items.push(match *target {
            ModalField::Text(field) => {
                input_item(field_label(field), draft.text(field), index == focus_index, width)
            }
            ModalField::GallerySlot(slot) => input_item(
                &format!("Image URL {}", slot + 1),
                draft.gallery().slot(slot).unwrap_or_default(),
                index == focus_index,
                width,
            ),
            ModalField::Enabled => {
                checkbox_item("Enabled", draft.is_enabled, index == focus_index)
            }
        });
        let gallery_ends_here = match *target {
            ModalField::GallerySlot(_) => {
                !matches!(targets.get(index + 1), Some(ModalField::GallerySlot(_)))
            }
            ModalField::Text(crate::form::TextField::ImageUrl) => draft.gallery().is_empty(),
            _ => false,
        };
        if gallery_ends_here {
            items.push(gallery_hint(draft));
        }
    }

    let mut state = ListState::default();
    state.select(Some(selected_item));
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("» ");
    frame.render_stateful_widget(list, area, &mut state);
}

fn gallery_hint(draft: &ProductDraft) -> ListItem<'static> {
    let mut parts = Vec::new();
    if draft.gallery().can_add_slot() {
        parts.push("Ctrl+A add image slot");
    }
    if !draft.gallery().is_empty() {
        parts.push("Ctrl+X remove last slot");
    }
    if parts.is_empty() {
        parts.push("image slots full");
    }
    hint_item(format!("  {}", parts.join(" • ")))
}

fn detail_line(label: &str, value: &str) -> Line<'static> {
    let shown = if value.is_empty() { "—" } else { value };
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(Color::Cyan)),
        Span::raw(shown.to_string()),
    ])
}

fn push_multiline(lines: &mut Vec<Line<'static>>, label: &str, value: &str, width: usize) {
    if value.is_empty() {
        lines.push(detail_line(label, value));
        return;
    }
    lines.push(Line::from(Span::styled(
        format!("{label}:"),
        Style::default().fg(Color::Cyan),
    )));
    for piece in wrap(value, width.max(16)) {
        lines.push(Line::from(format!("  {piece}")));
    }
}

fn display_price(raw: &str) -> String {
    match raw.trim().parse::<f64>() {
        Ok(value) => price_text(value),
        Err(_) => raw.to_string(),
    }
}
