//! Page-number arithmetic for fixed-size pages.
//!
//! Pages are 1-based. An empty list still has one (empty) page so callers
//! never have to special-case "page 1 of 0".

use std::ops::Range;

/// A resolved view of one page over `total_items` items.
///
/// Only [`PageWindow::resolve`] builds one, so `page` is always within
/// `[1, total_pages]` and `page_size` is at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    page: usize,
    total_pages: usize,
    page_size: usize,
    total_items: usize,
}

impl PageWindow {
    /// Resolve `requested` against a list, clamping into `[1, total_pages]`.
    ///
    /// A `page_size` of zero is treated as one.
    pub fn resolve(requested: usize, page_size: usize, total_items: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = total_pages(total_items, page_size);
        Self {
            page: requested.clamp(1, total_pages),
            total_pages,
            page_size,
            total_items,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Index range of the visible slice.
    pub fn range(&self) -> Range<usize> {
        let start = (self.page.saturating_sub(1) * self.page_size).min(self.total_items);
        let end = (self.page * self.page_size).min(self.total_items);
        start..end
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// "Page 2 of 5".
    pub fn page_info(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }
}

/// `ceil(total_items / page_size)`, never less than one.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size.max(1)).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_items_of_six_is_one_page() {
        let window = PageWindow::resolve(1, 6, 6);
        assert_eq!(window.total_pages(), 1);
        assert_eq!(window.range(), 0..6);
        assert!(!window.has_next());
        assert!(!window.has_prev());
    }

    #[test]
    fn last_page_holds_the_remainder() {
        assert_eq!(total_pages(10, 3), 4);
        assert_eq!(PageWindow::resolve(1, 3, 10).range(), 0..3);
        assert_eq!(PageWindow::resolve(4, 3, 10).range(), 9..10);
        assert_eq!(PageWindow::resolve(3, 3, 9).range(), 6..9);
    }

    #[test]
    fn out_of_range_requests_clamp() {
        let low = PageWindow::resolve(0, 3, 10);
        assert_eq!(low.page(), 1);
        let high = PageWindow::resolve(5, 3, 10);
        assert_eq!(high.page(), 4);
        assert_eq!(high.page_info(), "Page 4 of 4");
    }

    #[test]
    fn empty_list_has_one_empty_page() {
        let window = PageWindow::resolve(3, 6, 0);
        assert_eq!(window.page(), 1);
        assert_eq!(window.total_pages(), 1);
        assert!(window.range().is_empty());
        assert_eq!(PageWindow::resolve(1, 0, 4).page_size(), 1);
    }

    #[test]
    fn first_page_of_an_empty_list_is_an_empty_range() {
        let window = PageWindow::resolve(0, 4, 0);
        assert_eq!(window.page(), 1);
        assert_eq!(window.range(), 0..0);
        assert_eq!(window.total_items(), 0);
        assert!(!window.has_prev());
    }
}
