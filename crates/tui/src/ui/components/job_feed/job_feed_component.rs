use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use jobdeck_types::{Effect, JobPosting};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tracing::debug;
use unicode_width::UnicodeWidthStr;

use crate::{
    app::App,
    ui::{
        components::{component::Component, pagination::PaginationComponent},
        theme::{Theme, theme_helpers as th},
        utils::truncate_to_width,
    },
};

/// Card height including its border.
const CARD_HEIGHT: u16 = 5;
/// Feeds narrower than this render one card per row.
const TWO_COLUMN_MIN_WIDTH: u16 = 80;

/// Job feed: banner, posting cards for the current page and the pager.
#[derive(Debug, Default)]
pub struct JobFeedComponent {
    pager: PaginationComponent,
}

impl JobFeedComponent {
    fn render_banner(&self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let feed = &mut app.feed;

        let rows = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(area);
        let alert_label = if feed.alert_enabled() { "[x] Alert on" } else { "[ ] Set alert" };
        let alert_width = alert_label.width() as u16;
        let title_row = Layout::horizontal([Constraint::Min(1), Constraint::Length(alert_width)]).split(rows[0]);

        let title = Line::from(vec![
            Span::styled(feed.title().to_string(), theme.text_primary_style().add_modifier(Modifier::BOLD)),
            Span::styled(format!("  {} positions", feed.positions()), theme.text_muted_style()),
        ]);
        frame.render_widget(Paragraph::new(title), title_row[0]);
        th::render_button(frame, title_row[1], alert_label, true, feed.alert_enabled(), theme);

        let sort_label = format!("{} ▾", feed.sort().label());
        let sort_line = Line::from(vec![
            Span::styled("Sort by: ", theme.text_secondary_style()),
            Span::styled(sort_label.clone(), theme.accent_primary_style()),
        ]);
        frame.render_widget(Paragraph::new(sort_line), rows[1]);

        feed.alert_area = title_row[1];
        let sort_offset = "Sort by: ".width() as u16;
        feed.sort_area = Rect::new(
            rows[1].x.saturating_add(sort_offset),
            rows[1].y,
            (sort_label.width() as u16).min(rows[1].width.saturating_sub(sort_offset)),
            1,
        );
    }

    fn render_cards(&self, frame: &mut Frame, area: Rect, app: &App) {
        let theme = &*app.ctx.theme;
        let postings = app.feed.visible();
        if postings.is_empty() {
            frame.render_widget(Paragraph::new("No positions").style(theme.text_muted_style()), area);
            return;
        }

        for (posting, card_area) in postings.iter().zip(self.card_areas(area, postings.len())) {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style(false))
                .style(th::panel_style(theme));
            let inner = block.inner(card_area);
            frame.render_widget(block, card_area);
            frame.render_widget(Paragraph::new(card_lines(posting, inner.width, theme)), inner);
        }
    }

    /// Grid cells for `count` cards; cards that would not fit are dropped.
    fn card_areas(&self, area: Rect, count: usize) -> Vec<Rect> {
        let columns: u16 = if area.width >= TWO_COLUMN_MIN_WIDTH { 2 } else { 1 };
        let fitting_rows = (area.height / CARD_HEIGHT) as usize;
        let needed_rows = count.div_ceil(columns as usize);
        let row_count = needed_rows.min(fitting_rows);

        let mut cells = Vec::with_capacity(row_count * columns as usize);
        let row_areas = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); row_count]).split(area);
        for row in row_areas.iter() {
            let column_areas = Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns as usize]).split(*row);
            cells.extend(column_areas.iter().copied());
        }
        cells.truncate(count);
        cells
    }
}

fn card_lines<'a>(posting: &'a JobPosting, width: u16, theme: &dyn Theme) -> Vec<Line<'a>> {
    let width = width as usize;
    let monogram = format!(" {} ", posting.monogram());
    let title_width = width.saturating_sub(monogram.width() + 1);
    let subtitle = format!("{} · {} · {}", posting.company, posting.location, posting.posted);
    let mut tags = vec![posting.employment.label(), posting.work_mode.label(), posting.experience.as_str()];
    tags.extend(posting.categories());
    let tags = tags.join(" · ");

    vec![
        Line::from(vec![
            Span::styled(monogram, th::badge_style(theme)),
            Span::raw(" "),
            Span::styled(
                truncate_to_width(&posting.title, title_width),
                theme.text_primary_style().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(truncate_to_width(&subtitle, width), theme.text_secondary_style())),
        Line::from(Span::styled(truncate_to_width(&tags, width), theme.text_muted_style())),
    ]
}

impl Component for JobFeedComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Char('o') => {
                let sort = app.feed.cycle_sort();
                debug!(sort = sort.id(), "sort selection changed");
                Vec::new()
            }
            KeyCode::Char('a') => {
                let enabled = app.feed.toggle_alert();
                debug!(enabled, "job alert toggled");
                Vec::new()
            }
            _ => self.pager.handle_key_events(app, key),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
            let position = Position::new(mouse.column, mouse.row);
            if app.feed.sort_area.contains(position) {
                app.feed.cycle_sort();
                return Vec::new();
            }
            if app.feed.alert_area.contains(position) {
                app.feed.toggle_alert();
                return Vec::new();
            }
        }
        self.pager.handle_mouse_events(app, mouse)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let focused = app.feed.focus.get();
        let block = th::block(&*app.ctx.theme, Some(" Jobs "), focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = self.get_preferred_layout(app, inner);
        self.render_banner(frame, layout[0], app);
        self.render_cards(frame, layout[1], app);
        self.pager.render(frame, layout[2], app);
        app.feed.last_area = area;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let mut spans = self.pager.get_hint_spans(app);
        spans.extend(th::build_hint_spans(&*app.ctx.theme, &[(" o", " Sort "), (" a", " Alert ")]));
        spans
    }

    fn get_preferred_layout(&self, _app: &App, area: Rect) -> Vec<Rect> {
        Layout::vertical([
            Constraint::Length(2), // Banner
            Constraint::Min(0),    // Cards
            Constraint::Length(1), // Pager
        ])
        .split(area)
        .to_vec()
    }
}
