use jobdeck_types::{JobPosting, SortKey};
use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;

use crate::ui::components::pagination::PaginationState;

/// State for the job feed: a fixed list of postings viewed one page at a
/// time, plus the banner's sort selector and alert toggle.
///
/// The sort key is tracked for display only; the postings keep their
/// catalog order.
#[derive(Debug, Clone)]
pub struct JobFeedState {
    postings: Vec<JobPosting>,
    title: String,
    positions: usize,
    sort: SortKey,
    alert_enabled: bool,

    pub pagination: PaginationState,
    pub focus: FocusFlag,
    pub last_area: Rect,
    /// Clickable sort selector from the last render.
    pub sort_area: Rect,
    /// Clickable alert toggle from the last render.
    pub alert_area: Rect,
}

impl JobFeedState {
    pub fn new(postings: Vec<JobPosting>, page_size: usize, title: impl Into<String>, positions: usize) -> Self {
        let pagination = PaginationState::new(page_size, postings.len());
        Self {
            postings,
            title: title.into(),
            positions,
            sort: SortKey::default(),
            alert_enabled: false,
            pagination,
            focus: FocusFlag::named("feed"),
            last_area: Rect::default(),
            sort_area: Rect::default(),
            alert_area: Rect::default(),
        }
    }

    /// Postings on the current page.
    pub fn visible(&self) -> &[JobPosting] {
        &self.postings[self.pagination.window().range()]
    }

    pub fn postings(&self) -> &[JobPosting] {
        &self.postings
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn positions(&self) -> usize {
        self.positions
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    /// Advances the selector and returns the new key.
    pub fn cycle_sort(&mut self) -> SortKey {
        self.sort = self.sort.next();
        self.sort
    }

    pub fn alert_enabled(&self) -> bool {
        self.alert_enabled
    }

    pub fn toggle_alert(&mut self) -> bool {
        self.alert_enabled = !self.alert_enabled;
        self.alert_enabled
    }
}

impl HasFocus for JobFeedState {
    fn build(&self, builder: &mut FocusBuilder) {
        builder.leaf_widget(self);
    }

    fn focus(&self) -> FocusFlag {
        self.focus.clone()
    }

    fn area(&self) -> Rect {
        self.last_area
    }
}
