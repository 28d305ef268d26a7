//! Application state for the jobdeck dashboard.
//!
//! [`App`] owns every component state plus the shared context (theme,
//! settings, data source). It reacts to system messages in [`App::update`];
//! key and mouse input goes to the components through `MainView`.

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use jobdeck_api::{NavigationSource, catalog};
use jobdeck_types::{Effect, ExecOutcome, Msg};
use jobdeck_util::Settings;
use rat_focus::{Focus, FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;
use tracing::{info, warn};

use crate::ui::{
    components::{job_feed::JobFeedState, sidebar::NavEditorState, top_bar::TopBarState},
    theme::Theme,
};

/// How long a notice stays in the status line.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

/// Cross-cutting services shared by all components.
pub struct SharedCtx {
    /// Active color theme
    pub theme: Box<dyn Theme>,
    /// Effective settings (file, env and CLI layered)
    pub settings: Settings,
    /// Backend for the sidebar menu
    pub source: Arc<dyn NavigationSource>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A transient status-line message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub level: NoticeLevel,
    pub expires_at: Instant,
}

pub struct App {
    pub ctx: SharedCtx,
    pub top_bar: TopBarState,
    pub sidebar: NavEditorState,
    pub feed: JobFeedState,
    pub notice: Option<Notice>,
    /// Whether the sidebar overlay is open (compact layout only)
    pub sidebar_open: bool,
    /// Terminal narrower than `settings.compact_width`
    pub compact: bool,
    pub focus: Focus,
    app_focus: FocusFlag,
}

impl App {
    pub fn new(settings: Settings, source: Arc<dyn NavigationSource>, theme: Box<dyn Theme>) -> Self {
        let feed = JobFeedState::new(
            catalog::job_postings(),
            settings.page_size,
            catalog::FEED_TITLE,
            catalog::FEED_POSITIONS,
        );
        let mut app = Self {
            ctx: SharedCtx { theme, settings, source },
            top_bar: TopBarState::default(),
            sidebar: NavEditorState::default(),
            feed,
            notice: None,
            sidebar_open: false,
            compact: false,
            focus: Focus::default(),
            app_focus: FocusFlag::named("app"),
        };
        app.focus = FocusBuilder::build_for(&app);
        app.focus.focus(&app.sidebar);
        app
    }

    /// Reacts to a system message. Returns follow-up effects.
    pub fn update(&mut self, msg: &Msg) -> Vec<Effect> {
        match msg {
            Msg::Tick => self.expire_notice(Instant::now()),
            Msg::Resize(width, _) => self.set_terminal_width(*width),
            Msg::ExecCompleted(outcome) => self.apply_outcome(outcome.clone()),
        }
        Vec::new()
    }

    fn apply_outcome(&mut self, outcome: ExecOutcome) {
        match outcome {
            ExecOutcome::NavigationLoaded(items) => {
                info!(count = items.len(), "navigation loaded");
                self.sidebar.load(items);
            }
            ExecOutcome::NavigationLoadFailed(error) => {
                warn!(%error, "navigation load failed; menu stays empty");
                self.sidebar.load_failed(error);
            }
            ExecOutcome::NavigationCommitted(items) => {
                info!(count = items.len(), "navigation saved");
                self.sidebar.commit_succeeded(items);
                self.notify(NoticeLevel::Success, "Menu saved");
            }
            ExecOutcome::NavigationCommitFailed(error) => {
                warn!(%error, "navigation save failed");
                self.sidebar.commit_failed();
                self.notify(NoticeLevel::Error, format!("Could not save menu: {error}"));
            }
        }
    }

    pub fn notify(&mut self, level: NoticeLevel, text: impl Into<String>) {
        self.notice = Some(Notice {
            text: text.into(),
            level,
            expires_at: Instant::now() + NOTICE_TTL,
        });
    }

    /// Drops the notice once `now` passes its expiry.
    pub fn expire_notice(&mut self, now: Instant) {
        if self.notice.as_ref().is_some_and(|notice| now >= notice.expires_at) {
            self.notice = None;
        }
    }

    /// Switches between the docked and the overlay sidebar.
    pub fn set_terminal_width(&mut self, width: u16) {
        let compact = width < self.ctx.settings.compact_width;
        if compact == self.compact {
            return;
        }
        if compact {
            // The docked sidebar disappears; an open label edit must not outlive it.
            self.sidebar.confirm_label_edit();
        }
        self.compact = compact;
        self.sidebar_open = false;
        self.rebuild_focus();
    }

    /// The sidebar is docked in wide layouts and floats when opened in
    /// compact ones.
    pub fn sidebar_visible(&self) -> bool {
        !self.compact || self.sidebar_open
    }

    pub fn is_overlay_open(&self) -> bool {
        self.compact && self.sidebar_open
    }

    /// Shows the sidebar (overlay in compact layouts) and focuses it.
    pub fn open_sidebar(&mut self) {
        if self.compact {
            self.sidebar_open = true;
        }
        self.rebuild_focus();
        self.focus.focus(&self.sidebar);
    }

    /// Closes the overlay. An open inline edit is confirmed, as on any
    /// other focus loss.
    pub fn close_sidebar(&mut self) {
        if !self.is_overlay_open() {
            return;
        }
        self.sidebar.confirm_label_edit();
        self.sidebar_open = false;
        self.rebuild_focus();
        self.focus.focus(&self.feed);
    }

    /// Rebuilds the focus ring after the set of visible widgets changed.
    pub fn rebuild_focus(&mut self) {
        let old_focus = std::mem::take(&mut self.focus);
        self.focus = FocusBuilder::rebuild_for(&*self, Some(old_focus));
        if self.focus.focused().is_none() {
            self.focus.first();
        }
    }
}

impl HasFocus for App {
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        builder.widget(&self.top_bar);
        if self.sidebar_visible() {
            builder.widget(&self.sidebar);
        }
        builder.widget(&self.feed);
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.app_focus.clone()
    }

    fn area(&self) -> Rect {
        Rect::default()
    }
}
