use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// One "Label: value" input row for the login card and the modal form.
pub fn input_item(label: &str, value: &str, focused: bool, width: u16) -> ListItem<'static> {
    let budget = width.saturating_sub(label.width() as u16 + 4);
    let mut spans = vec![Span::styled(
        format!("{label}: "),
        Style::default().fg(Color::Cyan),
    )];
    let shown = fit_width(value, budget);
    if focused {
        spans.push(Span::styled(
            shown,
            Style::default().add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
    } else {
        spans.push(Span::raw(shown));
    }
    ListItem::new(Line::from(spans))
}

/// A checkbox row.
pub fn checkbox_item(label: &str, checked: bool, focused: bool) -> ListItem<'static> {
    let mark = if checked { "x" } else { " " };
    let style = if focused {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    ListItem::new(Line::from(Span::styled(format!("[{mark}] {label}"), style)))
}

/// A dim, non-focusable hint row.
pub fn hint_item(text: impl Into<String>) -> ListItem<'static> {
    ListItem::new(Line::from(Span::styled(
        text.into(),
        Style::default().fg(Color::DarkGray),
    )))
}

/// Truncates to a terminal column budget, keeping the tail visible since
/// inputs are edited at the end.
pub fn fit_width(text: &str, max: u16) -> String {
    let max = max as usize;
    if text.width() <= max {
        return text.to_string();
    }
    let mut taken = 0usize;
    let mut kept = Vec::new();
    for ch in text.chars().rev() {
        let w = ch.width().unwrap_or(0);
        if taken + w + 1 > max {
            break;
        }
        taken += w;
        kept.push(ch);
    }
    let tail: String = kept.into_iter().rev().collect();
    format!("…{tail}")
}
