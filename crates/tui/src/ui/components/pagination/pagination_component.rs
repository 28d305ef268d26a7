use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use jobdeck_types::Effect;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};
use tracing::debug;
use unicode_width::UnicodeWidthStr;

use super::state::{PageSlot, PagerTarget, PaginationState};
use crate::{
    app::App,
    ui::{
        components::component::Component,
        theme::{Theme, theme_helpers as th},
    },
};

/// Page-number pager rendered under the job feed.
///
/// Layout: `‹ Prev  1 … 4 [5] 6 … 10  Next ›   Page 5 of 10`. Every page
/// number and both arrows are clickable; the state records their areas at
/// render time.
#[derive(Debug, Default)]
pub struct PaginationComponent;

impl PaginationComponent {
    fn pieces(state: &PaginationState, theme: &dyn Theme) -> Vec<(String, Style, Option<PagerTarget>)> {
        let window = state.window();
        let mut pieces = Vec::new();
        pieces.push((
            "‹ Prev".to_string(),
            th::button_style(theme, window.has_prev(), false),
            window.has_prev().then_some(PagerTarget::Prev),
        ));
        pieces.push(("  ".to_string(), Style::default(), None));
        for slot in state.slots() {
            match slot {
                PageSlot::Page(page) if page == window.page() => {
                    pieces.push((format!("[{page}]"), th::badge_style(theme), Some(PagerTarget::Page(page))));
                }
                PageSlot::Page(page) => {
                    pieces.push((format!(" {page} "), theme.text_secondary_style(), Some(PagerTarget::Page(page))));
                }
                PageSlot::Gap => pieces.push((" … ".to_string(), theme.text_muted_style(), None)),
            }
            pieces.push((" ".to_string(), Style::default(), None));
        }
        pieces.push((" ".to_string(), Style::default(), None));
        pieces.push((
            "Next ›".to_string(),
            th::button_style(theme, window.has_next(), false),
            window.has_next().then_some(PagerTarget::Next),
        ));
        pieces.push((format!("   {}", window.page_info()), theme.text_muted_style(), None));
        pieces
    }

    fn apply(state: &mut PaginationState, target: PagerTarget) -> bool {
        match target {
            PagerTarget::Prev => state.prev_page(),
            PagerTarget::Next => state.next_page(),
            PagerTarget::Page(page) => state.go_to(page),
        }
    }
}

impl Component for PaginationComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let pager = &mut app.feed.pagination;
        let changed = match key.code {
            KeyCode::Left => pager.prev_page(),
            KeyCode::Right => pager.next_page(),
            KeyCode::Home => pager.first_page(),
            KeyCode::End => pager.last_page(),
            KeyCode::Char(c) => match c.to_digit(10) {
                Some(digit) if digit > 0 => pager.go_to(digit as usize),
                _ => false,
            },
            _ => false,
        };
        if changed {
            debug!(page = pager.page(), "feed page changed");
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let pager = &mut app.feed.pagination;
        if let Some(target) = pager.target_at(mouse.column, mouse.row)
            && Self::apply(pager, target)
        {
            debug!(page = pager.page(), "feed page changed");
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let state = &mut app.feed.pagination;
        let pieces = Self::pieces(state, theme);

        let mut targets = Vec::new();
        let mut spans = Vec::with_capacity(pieces.len());
        let mut x = area.x;
        let right = area.x.saturating_add(area.width);
        for (label, style, target) in pieces {
            let width = label.width() as u16;
            if x.saturating_add(width) > right {
                break;
            }
            if let Some(target) = target {
                targets.push((target, Rect::new(x, area.y, width, 1)));
            }
            x += width;
            spans.push(Span::styled(label, style));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
        state.last_area = area;
        state.target_areas = targets;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(&*app.ctx.theme, &[(" ←/→", " Page "), (" 1-9", " Jump ")])
    }
}
