//! Page layout: top bar, sidebar, job feed and the status line.
use ratatui::prelude::*;

use super::utils::left_docked;
use crate::app::App;

/// Width of the sidebar column, docked or floating.
pub const SIDEBAR_WIDTH: u16 = 32;

/// Areas of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageAreas {
    pub top_bar: Rect,
    /// Docked or floating sidebar; `None` when the overlay is closed.
    pub sidebar: Option<Rect>,
    pub feed: Rect,
    pub hints: Rect,
    pub status: Rect,
}

pub(super) struct MainLayout;

impl MainLayout {
    /// Wide terminals dock the sidebar left of the feed. Compact ones give
    /// the feed the full width and float the sidebar over it when open.
    pub fn responsive_layout(size: Rect, app: &App) -> PageAreas {
        let rows = Layout::vertical([
            Constraint::Length(3), // Top bar
            Constraint::Min(0),    // Sidebar + feed
            Constraint::Length(1), // Hints + status
        ])
        .split(size);
        let footer = Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).split(rows[2]);

        let (sidebar, feed) = if app.compact {
            let overlay = app.sidebar_open.then(|| left_docked(SIDEBAR_WIDTH, rows[1]));
            (overlay, rows[1])
        } else {
            let columns = Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)]).split(rows[1]);
            (Some(columns[0]), columns[1])
        };

        PageAreas {
            top_bar: rows[0],
            sidebar,
            feed,
            hints: footer[0],
            status: footer[1],
        }
    }
}

#[cfg(test)]
mod tests {
    use jobdeck_types::Msg;

    use super::*;
    use crate::app::tests::test_app;

    #[test]
    fn wide_layout_docks_the_sidebar() {
        let app = test_app();
        let areas = MainLayout::responsive_layout(Rect::new(0, 0, 120, 40), &app);
        let sidebar = areas.sidebar.expect("docked");
        assert_eq!(sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(areas.feed.x, SIDEBAR_WIDTH);
        assert_eq!(areas.top_bar.height, 3);
        assert_eq!(areas.hints.y, 39);
    }

    #[test]
    fn compact_layout_floats_the_sidebar_over_the_feed() {
        let mut app = test_app();
        app.update(&Msg::Resize(80, 30));
        let size = Rect::new(0, 0, 80, 30);
        let closed = MainLayout::responsive_layout(size, &app);
        assert!(closed.sidebar.is_none());
        assert_eq!(closed.feed.width, 80);

        app.open_sidebar();
        let open = MainLayout::responsive_layout(size, &app);
        let overlay = open.sidebar.expect("overlay");
        assert_eq!(overlay.x, open.feed.x);
        assert_eq!(overlay.width, SIDEBAR_WIDTH);
    }
}
