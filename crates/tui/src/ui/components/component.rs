//! Component system for the jobdeck TUI.
//!
//! Components are self-contained UI elements. Their state lives on [`App`]
//! so it can participate in the global focus ring; the component structs hold
//! only rendering concerns. Components never perform I/O: they report
//! [`Effect`]s and the runtime executes them.

use crossterm::event::{KeyEvent, MouseEvent};
use jobdeck_types::{Effect, Msg};
use ratatui::{Frame, layout::Rect, text::Span};

use crate::app::App;

/// A UI component with event handlers and a render pass.
///
/// Lifecycle: event handlers (`handle_message`, `handle_key_events`,
/// `handle_mouse_events`) mutate state on `App` and return effects;
/// `render` draws into the provided area and may record hit-test areas.
pub(crate) trait Component {
    /// Handle an application-level message the component cares about.
    fn handle_message(&mut self, _app: &mut App, _msg: Msg) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle key events when this component has focus.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle mouse events. Components hit-test against the areas they
    /// recorded during the last render.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);

    /// Key hints for the hint bar while this component is focused.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'_>> {
        Vec::new()
    }

    /// Splits `area` into the sub-areas this component renders into.
    fn get_preferred_layout(&self, _app: &App, area: Rect) -> Vec<Rect> {
        vec![area]
    }
}

/// Returns the index of the area under `(x, y)`, provided the point also
/// lies inside `container`.
pub fn find_target_index_by_mouse_position(container: &Rect, areas: &[Rect], x: u16, y: u16) -> Option<usize> {
    if !container.contains((x, y).into()) {
        return None;
    }
    areas.iter().position(|area| area.contains((x, y).into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_testing_respects_container() {
        let container = Rect::new(0, 0, 20, 10);
        let rows = [Rect::new(1, 1, 18, 1), Rect::new(1, 2, 18, 1)];
        assert_eq!(find_target_index_by_mouse_position(&container, &rows, 5, 2), Some(1));
        assert_eq!(find_target_index_by_mouse_position(&container, &rows, 5, 5), None);
        assert_eq!(find_target_index_by_mouse_position(&container, &rows, 25, 1), None);
    }
}
