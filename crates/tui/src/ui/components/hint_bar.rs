//! Status line: the current notice, or the global key hints when no notice
//! is showing.

use ratatui::{Frame, layout::Rect, text::Line, widgets::Paragraph};

use crate::{
    app::{App, NoticeLevel},
    ui::{components::component::Component, theme::theme_helpers as th},
};

#[derive(Debug, Default)]
pub struct HintBarComponent;

impl Component for HintBarComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let line = match app.notice.as_ref() {
            Some(notice) => {
                let style = match notice.level {
                    NoticeLevel::Success => theme.status_success(),
                    NoticeLevel::Error => theme.status_error(),
                };
                Line::styled(notice.text.clone(), style)
            }
            None => Line::from(th::build_hint_spans(theme, &[(" Tab", " Focus "), (" F2", " Menu "), (" q", " Quit ")])),
        };
        frame.render_widget(Paragraph::new(line).right_aligned(), rect);
    }
}
