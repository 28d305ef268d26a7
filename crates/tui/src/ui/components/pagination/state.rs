use jobdeck_util::PageWindow;
use ratatui::layout::Rect;

/// Pages around the current one shown before the pager collapses into gaps.
const NEIGHBOURS: usize = 1;

/// A clickable element of the pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerTarget {
    Prev,
    Next,
    Page(usize),
}

/// One slot in the rendered page strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    Page(usize),
    Gap,
}

/// Page-number pagination over a list of known length.
///
/// The page is 1-based and always clamped into `[1, total_pages]`, so an
/// empty list sits on page 1 of 1.
#[derive(Debug, Clone)]
pub struct PaginationState {
    page: usize,
    page_size: usize,
    total_items: usize,
    /// Last rendered pager area; used for mouse hit testing.
    pub last_area: Rect,
    /// Clickable pager elements from the last render.
    pub target_areas: Vec<(PagerTarget, Rect)>,
}

impl PaginationState {
    pub fn new(page_size: usize, total_items: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            total_items,
            last_area: Rect::default(),
            target_areas: Vec::new(),
        }
    }

    /// Current window over the list.
    pub fn window(&self) -> PageWindow {
        PageWindow::resolve(self.page, self.page_size, self.total_items)
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        self.window().total_pages()
    }

    /// Moves to `page`, clamped. Returns whether the page changed.
    pub fn go_to(&mut self, page: usize) -> bool {
        let resolved = PageWindow::resolve(page, self.page_size, self.total_items).page();
        let changed = resolved != self.page;
        self.page = resolved;
        changed
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to(self.page.saturating_add(1))
    }

    pub fn prev_page(&mut self) -> bool {
        self.go_to(self.page.saturating_sub(1))
    }

    pub fn first_page(&mut self) -> bool {
        self.go_to(1)
    }

    pub fn last_page(&mut self) -> bool {
        self.go_to(self.total_pages())
    }

    /// Replaces the list length and re-clamps the current page.
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.go_to(self.page);
    }

    /// Page strip: first and last page, the current page and its neighbours,
    /// with gaps where pages are skipped.
    pub fn slots(&self) -> Vec<PageSlot> {
        let window = self.window();
        let (page, total_pages) = (window.page(), window.total_pages());
        let low = page.saturating_sub(NEIGHBOURS).max(1);
        let high = (page + NEIGHBOURS).min(total_pages);

        let mut slots = Vec::new();
        if low > 1 {
            slots.push(PageSlot::Page(1));
            if low > 2 {
                slots.push(PageSlot::Gap);
            }
        }
        slots.extend((low..=high).map(PageSlot::Page));
        if high < total_pages {
            if high + 1 < total_pages {
                slots.push(PageSlot::Gap);
            }
            slots.push(PageSlot::Page(total_pages));
        }
        slots
    }

    pub fn target_at(&self, x: u16, y: u16) -> Option<PagerTarget> {
        if !self.last_area.contains((x, y).into()) {
            return None;
        }
        self.target_areas
            .iter()
            .find(|(_, area)| area.contains((x, y).into()))
            .map(|(target, _)| *target)
    }
}
