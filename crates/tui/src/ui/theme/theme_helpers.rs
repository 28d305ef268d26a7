use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::roles::{Theme, ThemeRoles};

/// Build a standard Block with theme surfaces and borders.
pub fn block<'a, T: Theme + ?Sized>(theme: &'a T, title: Option<&'a str>, focused: bool) -> Block<'a> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(theme.border_style(focused))
        .style(panel_style(theme));
    if let Some(t) = title {
        block = block.title(Span::styled(t, theme.text_secondary_style().add_modifier(Modifier::BOLD)));
    }
    block
}

/// Style for panel-like containers (set background on widget using `.style`).
pub fn panel_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { surface, text, .. } = *theme.roles();
    Style::default().bg(surface).fg(text)
}

/// Style for a selected row; bold only when the owning panel is focused.
pub fn selected_style<T: Theme + ?Sized>(theme: &T, focused: bool) -> Style {
    let style = theme.selection_style();
    if focused { style.add_modifier(Modifier::BOLD) } else { style }
}

/// Style for input fields.
pub fn input_style<T: Theme + ?Sized>(theme: &T, focused: bool) -> Style {
    let ThemeRoles { surface_raised, text, .. } = *theme.roles();
    let style = Style::default().bg(surface_raised).fg(text);
    if focused { style.add_modifier(Modifier::BOLD) } else { style }
}

/// Badge/tag style (filled accent, readable text).
pub fn badge_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { accent, .. } = *theme.roles();
    Style::default().bg(accent).fg(Color::Black)
}

/// Outline-like button style.
pub fn button_style<T: Theme + ?Sized>(theme: &T, enabled: bool, selected: bool) -> Style {
    if !enabled {
        return theme.text_muted_style();
    }
    let ThemeRoles {
        accent_soft, surface_raised, ..
    } = *theme.roles();
    let style = Style::default().fg(accent_soft);
    if selected {
        style.bg(surface_raised).add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

/// Renders a borderless single-line button.
pub fn render_button<T: Theme + ?Sized>(frame: &mut Frame, area: Rect, label: &str, enabled: bool, selected: bool, theme: &T) {
    frame.render_widget(Paragraph::new(label).centered().style(button_style(theme, enabled, selected)), area);
}

/// Builds `key description` hint spans: keys emphasized, descriptions muted.
pub fn build_hint_spans<'a, T: Theme + ?Sized>(theme: &T, hints: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, description) in hints {
        spans.push(Span::styled(*key, theme.accent_emphasis_style()));
        spans.push(Span::styled(*description, theme.text_muted_style()));
    }
    spans
}
