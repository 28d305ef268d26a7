use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use jobdeck_types::Effect;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use crate::{
    app::App,
    ui::{components::component::Component, theme::theme_helpers as th},
};

const BRAND: &str = " ◆ jobdeck ";
const SEARCH_PLACEHOLDER: &str = "⌕ Search jobs, companies…";
const LINKS: [&str; 3] = ["Home", "Jobs", "Employers"];
const MENU_BUTTON: &str = "☰ Menu";

/// Page chrome: brand, a search box placeholder, static links and the
/// menu button that opens the sidebar.
#[derive(Debug, Default)]
pub struct TopBarComponent;

impl Component for TopBarComponent {
    fn handle_key_events(&mut self, _app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => vec![Effect::OpenSidebar],
            _ => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind == MouseEventKind::Down(MouseButton::Left) && app.top_bar.is_menu_button_hit(mouse.column, mouse.row) {
            return vec![Effect::OpenSidebar];
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let focused = app.top_bar.focus.get();
        let block = th::block(theme, None, focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let areas = self.get_preferred_layout(app, inner);
        frame.render_widget(
            Paragraph::new(Span::styled(BRAND, th::badge_style(theme).add_modifier(Modifier::BOLD))),
            areas[0],
        );
        frame.render_widget(
            Paragraph::new(Span::styled(SEARCH_PLACEHOLDER, theme.text_muted_style())).style(th::input_style(theme, false)),
            areas[1],
        );

        let mut links = Vec::with_capacity(LINKS.len() * 2);
        for link in LINKS {
            links.push(Span::styled(format!(" {link} "), theme.text_secondary_style()));
            links.push(Span::raw(" "));
        }
        frame.render_widget(Paragraph::new(Line::from(links)).right_aligned(), areas[2]);
        th::render_button(frame, areas[3], MENU_BUTTON, true, focused, theme);

        app.top_bar.last_area = area;
        app.top_bar.menu_button_area = areas[3];
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(&*app.ctx.theme, &[(" Enter", " Open menu "), (" F2", " Menu ")])
    }

    fn get_preferred_layout(&self, _app: &App, area: Rect) -> Vec<Rect> {
        let links_width: u16 = LINKS.iter().map(|link| link.width() as u16 + 3).sum();
        Layout::horizontal([
            Constraint::Length(BRAND.width() as u16),
            Constraint::Min(10),
            Constraint::Length(links_width),
            Constraint::Length(MENU_BUTTON.width() as u16 + 2),
        ])
        .spacing(1)
        .split(area)
        .to_vec()
    }
}
