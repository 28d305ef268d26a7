use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use jobdeck_types::{Effect, NavChange};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};
use tracing::debug;
use unicode_width::UnicodeWidthStr;

use super::state::{HeaderAction, NavEditorState};
use crate::{
    app::App,
    ui::{
        components::{common::ScrollMetrics, component::Component, find_target_index_by_mouse_position},
        theme::theme_helpers as th,
        utils::truncate_to_width,
    },
};

/// Width of the visibility glyph column at the right edge of each row.
const EYE_WIDTH: u16 = 2;

/// Sidebar menu with an edit session for reordering, hiding and renaming
/// entries.
///
/// View mode only moves the selection. Edit mode offers:
/// - `m` to grab the selected entry, then `↑/↓` to move it; `m`/`Enter` drops
/// - `Shift+↑/↓` (`K`/`J`) to move the selected entry directly
/// - `Space`/`v` or a click on the eye glyph to toggle visibility
/// - `Enter` or a double-click to rename inline
/// - `s`/`Ctrl+S` to save, `Esc` to discard the session
///
/// Mouse drag-and-drop reorders onto the row under the pointer. The wheel
/// moves the selection, and the list scrolls to keep it in view.
#[derive(Debug, Default)]
pub struct SidebarComponent;

impl SidebarComponent {
    fn track(effects: &mut Vec<Effect>, change: Option<NavChange>) {
        if let Some(change) = change {
            debug!(id = %change.id, from = change.from, to = change.to, "menu item moved");
            effects.push(Effect::TrackNavChange(change));
        }
    }

    fn commit(state: &mut NavEditorState, effects: &mut Vec<Effect>) {
        if let Some(items) = state.begin_commit() {
            effects.push(Effect::CommitNavigation(items));
        }
    }

    fn handle_label_edit_keys(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let mut effects = Vec::new();
        let state = &mut app.sidebar;
        match key.code {
            KeyCode::Enter => {
                state.confirm_label_edit();
            }
            KeyCode::Esc => state.abandon_label_edit(),
            KeyCode::Tab => {
                state.confirm_label_edit();
                app.focus.next();
            }
            KeyCode::BackTab => {
                state.confirm_label_edit();
                app.focus.prev();
            }
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => Self::commit(state, &mut effects),
            code => {
                if let Some(edit) = state.label_edit_mut() {
                    let buffer = &mut edit.buffer;
                    match code {
                        KeyCode::Left => buffer.move_left(),
                        KeyCode::Right => buffer.move_right(),
                        KeyCode::Home => buffer.move_home(),
                        KeyCode::End => buffer.move_end(),
                        KeyCode::Backspace => buffer.backspace(),
                        KeyCode::Delete => buffer.delete(),
                        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => buffer.insert_char(c),
                        _ => {}
                    }
                }
            }
        }
        effects
    }

    fn handle_edit_mode_keys(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let mut effects = Vec::new();
        let state = &mut app.sidebar;
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);

        if state.grabbed().is_some() {
            match key.code {
                KeyCode::Up => {
                    Self::track(&mut effects, state.move_grabbed(false));
                    return effects;
                }
                KeyCode::Down => {
                    Self::track(&mut effects, state.move_grabbed(true));
                    return effects;
                }
                KeyCode::Char('m') | KeyCode::Enter => {
                    state.drop_grabbed();
                    return effects;
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::Up if shift => Self::track(&mut effects, state.move_selected(false)),
            KeyCode::Down if shift => Self::track(&mut effects, state.move_selected(true)),
            KeyCode::Char('K') => Self::track(&mut effects, state.move_selected(false)),
            KeyCode::Char('J') => Self::track(&mut effects, state.move_selected(true)),
            KeyCode::Up | KeyCode::Char('k') => state.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => state.select_next(),
            KeyCode::Char('m') => state.toggle_grab(),
            KeyCode::Char(' ') | KeyCode::Char('v') => {
                if let Some(id) = state.selected_item().map(|item| item.id.clone()) {
                    state.toggle_visibility(&id);
                }
            }
            KeyCode::Enter => {
                if let Some(id) = state.selected_item().map(|item| item.id.clone()) {
                    state.begin_label_edit(&id);
                }
            }
            KeyCode::Char('s') => Self::commit(state, &mut effects),
            KeyCode::Esc => state.cancel(),
            _ => {}
        }
        effects
    }

    fn handle_view_mode_keys(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let state = &mut app.sidebar;
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => state.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => state.select_next(),
            KeyCode::Char('e') if state.is_loaded() && !state.is_saving() => state.enter_edit_mode(),
            _ => {}
        }
        Vec::new()
    }

    fn handle_header_click(state: &mut NavEditorState, action: HeaderAction, effects: &mut Vec<Effect>) {
        match action {
            HeaderAction::Edit if !state.is_saving() => state.enter_edit_mode(),
            HeaderAction::Save => Self::commit(state, effects),
            HeaderAction::Cancel => state.cancel(),
            _ => {}
        }
    }

    fn row_at(state: &NavEditorState, x: u16, y: u16) -> Option<usize> {
        find_target_index_by_mouse_position(&state.last_area, &state.row_areas, x, y).map(|row| row + state.scroll.offset())
    }

    fn header_buttons(state: &NavEditorState) -> Vec<(HeaderAction, &'static str)> {
        if state.is_saving() {
            Vec::new()
        } else if state.is_edit_mode() {
            vec![(HeaderAction::Save, "[Save]"), (HeaderAction::Cancel, "[Cancel]")]
        } else if state.is_loaded() && !state.items().is_empty() {
            vec![(HeaderAction::Edit, "[Edit]")]
        } else {
            Vec::new()
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let state = &mut app.sidebar;
        let status = if state.is_saving() {
            Span::styled("Saving…", theme.status_warning())
        } else if state.is_edit_mode() {
            Span::styled("Editing", theme.accent_primary_style())
        } else {
            Span::styled("Menu", theme.text_secondary_style())
        };
        frame.render_widget(Paragraph::new(Line::from(status)), area);

        let mut buttons = Vec::new();
        let mut right = area.x.saturating_add(area.width);
        for (action, label) in Self::header_buttons(state).into_iter().rev() {
            let width = label.width() as u16;
            if right.saturating_sub(width) < area.x {
                break;
            }
            right -= width;
            let button_area = Rect::new(right, area.y, width, 1);
            th::render_button(frame, button_area, label, true, false, theme);
            buttons.push((action, button_area));
            right = right.saturating_sub(1);
        }
        state.header_buttons = buttons;
    }

    fn render_rows(&self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let state = &mut app.sidebar;
        let focused = state.focus.get();

        if !state.is_loaded() {
            frame.render_widget(Paragraph::new("Loading…").style(theme.text_muted_style()), area);
            state.row_areas.clear();
            state.scroll = ScrollMetrics::default();
            return;
        }
        if state.items().is_empty() {
            frame.render_widget(Paragraph::new("No menu items").style(theme.text_muted_style()), area);
            state.row_areas.clear();
            state.scroll = ScrollMetrics::default();
            return;
        }

        let (len, selected) = (state.items().len(), state.selected());
        state.scroll.resize(len, area.height as usize);
        state.scroll.ensure_visible(selected);
        let visible = state.scroll.visible_range();

        let edit_mode = state.is_edit_mode();
        let hover = state.drag().and_then(|drag| drag.hover);
        let mut row_areas = Vec::with_capacity(visible.len());
        let mut cursor = None;

        for (index, item) in state.items().iter().enumerate().skip(visible.start).take(visible.len()) {
            let y = area.y + (index - visible.start) as u16;
            let row = Rect::new(area.x, y, area.width, 1);
            row_areas.push(row);

            let mut row_style = if index == state.selected() {
                th::selected_style(theme, focused)
            } else {
                theme.text_primary_style()
            };
            if !item.visible {
                row_style = row_style.patch(theme.hidden_item_style());
            }
            if edit_mode && hover == Some(index) && state.drag().is_some() {
                row_style = row_style.patch(theme.drop_target_style());
            }

            let handle = match (edit_mode, state.grabbed()) {
                (true, Some(grabbed)) if grabbed == item.id => "↕ ",
                (true, _) => "≡ ",
                (false, _) => "  ",
            };
            let prefix = format!("{handle}{} ", item.nav_icon().glyph());
            let eye_width = if edit_mode { EYE_WIDTH } else { 0 };
            let label_width = (row.width as usize).saturating_sub(prefix.width() + eye_width as usize);

            let mut spans = vec![Span::styled(prefix.clone(), row_style)];
            match state.label_edit().filter(|edit| edit.id == item.id) {
                Some(edit) => {
                    let text = truncate_to_width(edit.buffer.input(), label_width);
                    let padded = format!("{text:<label_width$}");
                    spans.push(Span::styled(padded, th::input_style(theme, true)));
                    let column = edit.buffer.cursor_column().min(label_width);
                    cursor = Some(Position::new(row.x + (prefix.width() + column) as u16, y));
                }
                None => {
                    let text = truncate_to_width(&item.label, label_width);
                    spans.push(Span::styled(format!("{text:<label_width$}"), row_style));
                }
            }
            if edit_mode {
                let eye = if item.visible { " ◉" } else { " ◌" };
                spans.push(Span::styled(eye, theme.accent_primary_style()));
            }
            frame.render_widget(Paragraph::new(Line::from(spans)), row);
        }

        if let Some(position) = cursor {
            frame.set_cursor_position(position);
        }
        state.row_areas = row_areas;
    }
}

impl Component for SidebarComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if app.sidebar.label_edit().is_some() {
            return self.handle_label_edit_keys(app, key);
        }
        // The list is frozen until the commit resolves.
        if app.sidebar.is_saving() {
            return self.handle_view_mode_keys(app, key);
        }
        if app.sidebar.is_edit_mode() {
            if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
                let mut effects = Vec::new();
                Self::commit(&mut app.sidebar, &mut effects);
                return effects;
            }
            return self.handle_edit_mode_keys(app, key);
        }
        self.handle_view_mode_keys(app, key)
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let mut effects = Vec::new();
        let state = &mut app.sidebar;
        let (x, y) = (mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let position = Position::new(x, y);
                if let Some(action) = state.header_buttons.iter().find(|(_, area)| area.contains(position)).map(|(a, _)| *a) {
                    Self::handle_header_click(state, action, &mut effects);
                    return effects;
                }
                let Some(index) = Self::row_at(state, x, y) else {
                    return effects;
                };
                let clicked_id = state.items().get(index).map(|item| item.id.clone());
                if state.label_edit().is_some_and(|edit| Some(&edit.id) != clicked_id.as_ref()) {
                    state.confirm_label_edit();
                }
                state.select(index);
                if !state.is_edit_mode() || state.is_saving() {
                    return effects;
                }

                let Some(row) = state.row_area(index) else {
                    return effects;
                };
                let on_eye = x >= row.x.saturating_add(row.width.saturating_sub(EYE_WIDTH));
                if on_eye {
                    if let Some(id) = clicked_id {
                        state.toggle_visibility(&id);
                    }
                } else if state.register_click(index, Instant::now()) {
                    if let Some(id) = clicked_id {
                        state.begin_label_edit(&id);
                    }
                } else if state.label_edit().is_none() {
                    state.start_drag(index);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let hover = Self::row_at(state, x, y);
                state.drag_hover(hover);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let target = Self::row_at(state, x, y);
                let change = state.finish_drag(target);
                if let Some(change) = change.as_ref() {
                    state.select(change.to);
                }
                Self::track(&mut effects, change);
            }
            MouseEventKind::ScrollUp if state.drag().is_none() && state.selected() > 0 => state.select_prev(),
            MouseEventKind::ScrollDown if state.drag().is_none() && state.selected() + 1 < state.items().len() => {
                state.select_next()
            }
            _ => {}
        }
        effects
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let focused = app.sidebar.focus.get();
        let block = th::block(&*app.ctx.theme, Some(" Navigation "), focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = self.get_preferred_layout(app, inner);
        self.render_header(frame, layout[0], app);
        self.render_rows(frame, layout[1], app);
        app.sidebar.last_area = area;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let theme = &*app.ctx.theme;
        let state = &app.sidebar;
        if state.label_edit().is_some() {
            return th::build_hint_spans(theme, &[(" Enter", " Confirm "), (" Esc", " Discard ")]);
        }
        if state.grabbed().is_some() {
            return th::build_hint_spans(theme, &[(" ↑/↓", " Move "), (" m/Enter", " Drop ")]);
        }
        if state.is_edit_mode() {
            return th::build_hint_spans(
                theme,
                &[
                    (" m", " Grab "),
                    (" ⇧↑/↓", " Move "),
                    (" Space", " Show/Hide "),
                    (" Enter", " Rename "),
                    (" s", " Save "),
                    (" Esc", " Cancel "),
                ],
            );
        }
        th::build_hint_spans(theme, &[(" ↑/↓", " Select "), (" e", " Edit menu ")])
    }

    fn get_preferred_layout(&self, _app: &App, area: Rect) -> Vec<Rect> {
        let areas = Layout::vertical([
            Constraint::Length(1), // Header
            Constraint::Length(1), // Gap
            Constraint::Min(0),    // Rows
        ])
        .split(area);
        vec![areas[0], areas[2]]
    }
}
