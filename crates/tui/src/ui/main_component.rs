use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use jobdeck_types::{Effect, Msg};
use ratatui::{
    prelude::*,
    widgets::{Block, Clear, Paragraph},
};

use super::components::{Component, HintBarComponent, JobFeedComponent, SidebarComponent, TopBarComponent};
use super::layout::MainLayout;
use crate::app::App;

/// Root component: owns the page components, applies the global key
/// bindings and routes input to whichever component has focus or sits under
/// the pointer.
#[derive(Debug, Default)]
pub struct MainView {
    top_bar_view: TopBarComponent,
    sidebar_view: SidebarComponent,
    feed_view: JobFeedComponent,
    hint_bar_view: HintBarComponent,
}

impl MainView {
    /// Keys handled before focus routing. `None` passes the key on.
    fn handle_global_keys(&mut self, app: &mut App, key: KeyEvent) -> Option<Vec<Effect>> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(vec![Effect::Quit]);
        }
        if key.code == KeyCode::F(2) {
            return Some(vec![Effect::OpenSidebar]);
        }
        // The inline label editor owns every other key while open.
        if app.sidebar.label_edit().is_some() {
            return None;
        }
        match key.code {
            KeyCode::Char('q') if !key.modifiers.contains(KeyModifiers::CONTROL) => Some(vec![Effect::Quit]),
            KeyCode::Tab => {
                app.focus.next();
                Some(Vec::new())
            }
            KeyCode::BackTab => {
                app.focus.prev();
                Some(Vec::new())
            }
            KeyCode::Esc if app.is_overlay_open() && !app.sidebar.is_edit_mode() => Some(vec![Effect::CloseSidebar]),
            _ => None,
        }
    }

    /// Press handling shared by every component: confirms an inline edit
    /// when the press lands outside the sidebar, closes the overlay on an
    /// outside press, and moves focus to the pressed component.
    fn handle_press(&mut self, app: &mut App, position: Position) -> Option<Vec<Effect>> {
        let in_sidebar = app.sidebar_visible() && app.sidebar.last_area.contains(position);
        if !in_sidebar && app.sidebar.label_edit().is_some() {
            app.sidebar.confirm_label_edit();
        }
        if app.is_overlay_open() && !in_sidebar && !app.top_bar.is_menu_button_hit(position.x, position.y) {
            return Some(vec![Effect::CloseSidebar]);
        }

        if in_sidebar {
            app.focus.focus(&app.sidebar);
        } else if app.feed.last_area.contains(position) {
            app.focus.focus(&app.feed);
        } else if app.top_bar.last_area.contains(position) {
            app.focus.focus(&app.top_bar);
        }
        None
    }
}

impl Component for MainView {
    fn handle_message(&mut self, app: &mut App, msg: Msg) -> Vec<Effect> {
        app.update(&msg)
    }

    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if let Some(effects) = self.handle_global_keys(app, key) {
            return effects;
        }

        if app.sidebar_visible() && app.sidebar.focus.get() {
            return self.sidebar_view.handle_key_events(app, key);
        }
        if app.top_bar.focus.get() {
            return self.top_bar_view.handle_key_events(app, key);
        }
        if app.feed.focus.get() {
            return self.feed_view.handle_key_events(app, key);
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let position = Position::new(mouse.column, mouse.row);
        if matches!(mouse.kind, MouseEventKind::Down(_))
            && let Some(effects) = self.handle_press(app, position)
        {
            return effects;
        }

        // A drag started in the sidebar keeps receiving events wherever the
        // pointer goes, so a release outside still ends it.
        let sidebar_owns = app.sidebar_visible() && (app.sidebar.drag().is_some() || app.sidebar.last_area.contains(position));
        if sidebar_owns {
            return self.sidebar_view.handle_mouse_events(app, mouse);
        }
        if app.top_bar.last_area.contains(position) {
            return self.top_bar_view.handle_mouse_events(app, mouse);
        }
        if app.feed.last_area.contains(position) {
            return self.feed_view.handle_mouse_events(app, mouse);
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let bg_fill = Paragraph::new("").style(app.ctx.theme.page_style());
        frame.render_widget(bg_fill, area);

        let areas = MainLayout::responsive_layout(area, app);
        self.top_bar_view.render(frame, areas.top_bar, app);
        self.feed_view.render(frame, areas.feed, app);
        if let Some(sidebar_area) = areas.sidebar {
            if app.compact {
                render_overlay(frame, areas.feed, app);
                frame.render_widget(Clear, sidebar_area);
            }
            self.sidebar_view.render(frame, sidebar_area, app);
        }

        let hints = Paragraph::new(Line::from(self.get_hint_spans(app))).style(app.ctx.theme.text_muted_style());
        frame.render_widget(hints, areas.hints);
        self.hint_bar_view.render(frame, areas.status, app);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let mut hint_spans: Vec<Span> = vec![Span::styled("Hints:", app.ctx.theme.text_muted_style())];
        if app.sidebar_visible() && app.sidebar.focus.get() {
            hint_spans.extend(self.sidebar_view.get_hint_spans(app));
        } else if app.top_bar.focus.get() {
            hint_spans.extend(self.top_bar_view.get_hint_spans(app));
        } else if app.feed.focus.get() {
            hint_spans.extend(self.feed_view.get_hint_spans(app));
        }
        hint_spans
    }
}

/// Dims the area under the floating sidebar.
fn render_overlay(frame: &mut Frame, area: Rect, app: &App) {
    frame.render_widget(Block::default().style(app.ctx.theme.overlay_background_style()), area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::MouseButton;
    use jobdeck_api::catalog;
    use jobdeck_types::ExecOutcome;
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::{app::tests::test_app, ui::components::sidebar::HeaderAction};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn press(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn release(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn header_button(app: &App, action: HeaderAction) -> Rect {
        app.sidebar
            .header_buttons
            .iter()
            .find(|(candidate, _)| *candidate == action)
            .map(|(_, area)| *area)
            .expect("header button drawn")
    }

    fn loaded_app() -> App {
        let mut app = test_app();
        app.update(&Msg::ExecCompleted(ExecOutcome::NavigationLoaded(catalog::default_navigation())));
        app
    }

    fn draw(view: &mut MainView, app: &mut App, width: u16, height: u16) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
        terminal.draw(|frame| view.render(frame, frame.area(), app)).expect("draw");
        terminal
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn renders_menu_and_feed() {
        let mut app = loaded_app();
        let mut view = MainView::default();
        let terminal = draw(&mut view, &mut app, 140, 40);
        let text = screen_text(&terminal);
        assert!(text.contains("Dashboard"));
        assert!(text.contains("UI Designer in Egypt"));
        assert!(text.contains("Page 1 of 1"));
        assert!(text.contains("[Edit]"));
    }

    #[test]
    fn sidebar_renders_empty_state_after_failed_load() {
        let mut app = test_app();
        app.update(&Msg::ExecCompleted(ExecOutcome::NavigationLoadFailed("down".into())));
        let mut view = MainView::default();
        let text = screen_text(&draw(&mut view, &mut app, 140, 40));
        assert!(text.contains("No menu items"));
    }

    #[test]
    fn keyboard_edit_session_emits_track_and_commit() {
        let mut app = loaded_app();
        let mut view = MainView::default();
        app.focus.focus(&app.sidebar);

        assert!(view.handle_key_events(&mut app, key(KeyCode::Char('e'))).is_empty());
        assert!(app.sidebar.is_edit_mode());

        view.handle_key_events(&mut app, key(KeyCode::Char('m')));
        let effects = view.handle_key_events(&mut app, key(KeyCode::Down));
        assert!(matches!(
            effects.as_slice(),
            [Effect::TrackNavChange(change)] if change.id == "dashboard" && change.from == 0 && change.to == 1
        ));
        view.handle_key_events(&mut app, key(KeyCode::Enter));
        assert!(app.sidebar.grabbed().is_none());

        view.handle_key_events(&mut app, key(KeyCode::Char(' ')));
        assert!(!app.sidebar.items()[1].visible);

        let effects = view.handle_key_events(&mut app, key(KeyCode::Char('s')));
        assert_eq!(effects, vec![Effect::CommitNavigation(app.sidebar.items().to_vec())]);
        assert!(app.sidebar.is_saving());
    }

    #[test]
    fn inline_label_edit_swallows_quit_and_esc_abandons() {
        let mut app = loaded_app();
        let mut view = MainView::default();
        app.focus.focus(&app.sidebar);
        view.handle_key_events(&mut app, key(KeyCode::Char('e')));
        view.handle_key_events(&mut app, key(KeyCode::Enter));
        assert!(app.sidebar.label_edit().is_some());

        assert!(view.handle_key_events(&mut app, key(KeyCode::Char('q'))).is_empty());
        assert_eq!(app.sidebar.label_edit().map(|edit| edit.buffer.input()), Some("Dashboardq"));

        view.handle_key_events(&mut app, key(KeyCode::Esc));
        assert!(app.sidebar.label_edit().is_none());
        assert!(app.sidebar.is_edit_mode(), "Esc only closes the inline editor");
        assert_eq!(app.sidebar.items()[0].label, "Dashboard");

        view.handle_key_events(&mut app, key(KeyCode::Esc));
        assert!(!app.sidebar.is_edit_mode());
        assert_eq!(view.handle_key_events(&mut app, key(KeyCode::Char('q'))), vec![Effect::Quit]);
    }

    #[test]
    fn tab_confirms_inline_edit_and_moves_focus() {
        let mut app = loaded_app();
        let mut view = MainView::default();
        draw(&mut view, &mut app, 140, 40);
        app.rebuild_focus();
        app.focus.focus(&app.sidebar);
        view.handle_key_events(&mut app, key(KeyCode::Char('e')));
        view.handle_key_events(&mut app, key(KeyCode::Enter));
        view.handle_key_events(&mut app, key(KeyCode::Backspace));
        view.handle_key_events(&mut app, key(KeyCode::Tab));
        assert!(app.sidebar.label_edit().is_none());
        assert_eq!(app.sidebar.items()[0].label, "Dashboar");
        assert!(!app.sidebar.focus.get());
    }

    #[test]
    fn feed_keys_page_and_cycle_sort() {
        let mut app = loaded_app();
        let mut view = MainView::default();
        app.focus.focus(&app.feed);
        view.handle_key_events(&mut app, key(KeyCode::Char('o')));
        assert_eq!(app.feed.sort(), jobdeck_types::SortKey::NewestFirst);
        view.handle_key_events(&mut app, key(KeyCode::Char('a')));
        assert!(app.feed.alert_enabled());
        view.handle_key_events(&mut app, key(KeyCode::Right));
        assert_eq!(app.feed.pagination.page(), 1, "single page clamps");
    }

    #[test]
    fn menu_button_opens_overlay_and_outside_click_closes_it() {
        let mut app = loaded_app();
        let mut view = MainView::default();
        app.update(&Msg::Resize(80, 30));
        draw(&mut view, &mut app, 80, 30);

        let button = app.top_bar.menu_button_area;
        let effects = view.handle_mouse_events(&mut app, press(button.x, button.y));
        assert_eq!(effects, vec![Effect::OpenSidebar]);
        app.open_sidebar();
        draw(&mut view, &mut app, 80, 30);
        assert!(app.is_overlay_open());

        let effects = view.handle_mouse_events(&mut app, press(70, 20));
        assert_eq!(effects, vec![Effect::CloseSidebar]);
        assert_eq!(view.handle_key_events(&mut app, key(KeyCode::F(2))), vec![Effect::OpenSidebar]);
    }

    #[test]
    fn drag_and_drop_reorders_rows() {
        let mut app = loaded_app();
        let mut view = MainView::default();
        app.sidebar.enter_edit_mode();
        draw(&mut view, &mut app, 140, 40);

        let from = app.sidebar.row_area(0).expect("first row drawn");
        let to = app.sidebar.row_area(2).expect("third row drawn");
        view.handle_mouse_events(&mut app, press(from.x + 3, from.y));
        view.handle_mouse_events(
            &mut app,
            MouseEvent {
                kind: MouseEventKind::Drag(MouseButton::Left),
                column: to.x + 3,
                row: to.y,
                modifiers: KeyModifiers::NONE,
            },
        );
        let effects = view.handle_mouse_events(
            &mut app,
            MouseEvent {
                kind: MouseEventKind::Up(MouseButton::Left),
                column: to.x + 3,
                row: to.y,
                modifiers: KeyModifiers::NONE,
            },
        );
        assert!(matches!(
            effects.as_slice(),
            [Effect::TrackNavChange(change)] if change.id == "dashboard" && change.to == 2
        ));
        assert_eq!(app.sidebar.items()[2].id, "dashboard");
    }

    #[test]
    fn clicking_the_eye_glyph_toggles_visibility() {
        let mut app = loaded_app();
        let mut view = MainView::default();
        app.sidebar.enter_edit_mode();
        draw(&mut view, &mut app, 140, 40);

        let row = app.sidebar.row_area(4).expect("fifth row drawn");
        let was_visible = app.sidebar.items()[4].visible;
        view.handle_mouse_events(&mut app, press(row.x + row.width - 1, row.y));
        assert_eq!(app.sidebar.items()[4].visible, !was_visible);
    }

    #[test]
    fn cancel_button_restores_the_menu_after_a_reorder() {
        let mut app = loaded_app();
        let mut view = MainView::default();
        draw(&mut view, &mut app, 140, 40);

        let edit = header_button(&app, HeaderAction::Edit);
        view.handle_mouse_events(&mut app, press(edit.x, edit.y));
        assert!(app.sidebar.is_edit_mode());
        assert!(app.sidebar.focus.get());

        view.handle_key_events(&mut app, key(KeyCode::Char('m')));
        view.handle_key_events(&mut app, key(KeyCode::Down));
        view.handle_key_events(&mut app, key(KeyCode::Enter));
        assert_eq!(app.sidebar.items()[1].id, "dashboard");
        draw(&mut view, &mut app, 140, 40);

        let cancel = header_button(&app, HeaderAction::Cancel);
        let effects = view.handle_mouse_events(&mut app, press(cancel.x, cancel.y));
        assert!(effects.is_empty());
        assert!(!app.sidebar.is_edit_mode());
        assert_eq!(app.sidebar.items(), app.sidebar.snapshot());
        assert_eq!(app.sidebar.items()[0].id, "dashboard");
    }

    #[test]
    fn save_button_commits_the_working_copy() {
        let mut app = loaded_app();
        let mut view = MainView::default();
        draw(&mut view, &mut app, 140, 40);
        let edit = header_button(&app, HeaderAction::Edit);
        view.handle_mouse_events(&mut app, press(edit.x, edit.y));
        draw(&mut view, &mut app, 140, 40);

        let row = app.sidebar.row_area(6).expect("about row drawn");
        view.handle_mouse_events(&mut app, press(row.x + row.width - 1, row.y));
        assert!(!app.sidebar.items()[6].visible);

        let save = header_button(&app, HeaderAction::Save);
        let effects = view.handle_mouse_events(&mut app, press(save.x, save.y));
        assert_eq!(effects, vec![Effect::CommitNavigation(app.sidebar.items().to_vec())]);
        assert!(app.sidebar.is_saving());
        draw(&mut view, &mut app, 140, 40);
        assert!(app.sidebar.header_buttons.is_empty());
    }

    #[test]
    fn double_click_on_a_row_opens_the_label_editor() {
        let mut app = loaded_app();
        let mut view = MainView::default();
        app.sidebar.enter_edit_mode();
        draw(&mut view, &mut app, 140, 40);

        let row = app.sidebar.row_area(1).expect("second row drawn");
        view.handle_mouse_events(&mut app, press(row.x + 3, row.y));
        assert!(view.handle_mouse_events(&mut app, release(row.x + 3, row.y)).is_empty());
        assert!(app.sidebar.label_edit().is_none());

        view.handle_mouse_events(&mut app, press(row.x + 3, row.y));
        let expected = app.sidebar.items()[1].id.clone();
        assert_eq!(app.sidebar.label_edit().map(|edit| edit.id.clone()), Some(expected));
        assert!(app.sidebar.drag().is_none());
    }

    #[test]
    fn short_terminal_scrolls_the_menu_to_the_selection() {
        let mut app = loaded_app();
        let mut view = MainView::default();
        let text = screen_text(&draw(&mut view, &mut app, 140, 14));
        assert!(!text.contains("Contact"));

        app.sidebar.select(7);
        let text = screen_text(&draw(&mut view, &mut app, 140, 14));
        assert!(text.contains("Contact"));
        assert!(app.sidebar.scroll.offset() > 0);
        assert!(app.sidebar.row_area(0).is_none());

        app.sidebar.enter_edit_mode();
        draw(&mut view, &mut app, 140, 14);
        let row = app.sidebar.row_area(7).expect("last row drawn");
        view.handle_mouse_events(&mut app, press(row.x + row.width - 1, row.y));
        assert!(!app.sidebar.items()[7].visible);
        assert_eq!(app.sidebar.selected(), 7);
    }

    #[test]
    fn resizing_to_compact_closes_the_label_editor_so_quit_works() {
        let mut app = loaded_app();
        let mut view = MainView::default();
        app.focus.focus(&app.sidebar);
        view.handle_key_events(&mut app, key(KeyCode::Char('e')));
        view.handle_key_events(&mut app, key(KeyCode::Enter));
        view.handle_key_events(&mut app, key(KeyCode::Char('!')));

        app.update(&Msg::Resize(80, 30));
        assert!(app.sidebar.label_edit().is_none());
        assert_eq!(app.sidebar.items()[0].label, "Dashboard!");
        assert_eq!(view.handle_key_events(&mut app, key(KeyCode::Char('q'))), vec![Effect::Quit]);
    }
}
