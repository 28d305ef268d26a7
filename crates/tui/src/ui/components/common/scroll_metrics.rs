//! Row scrolling for lists taller than their panel.

use std::ops::Range;

/// Scroll window over a list of single-row entries.
///
/// Counts are in list rows. The offset stays within `[0, max_offset()]`
/// after every update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollMetrics {
    offset: usize,
    content_rows: usize,
    viewport_rows: usize,
}

impl ScrollMetrics {
    pub const fn offset(&self) -> usize {
        self.offset
    }

    pub const fn viewport_rows(&self) -> usize {
        self.viewport_rows
    }

    pub fn max_offset(&self) -> usize {
        self.content_rows.saturating_sub(self.viewport_rows)
    }

    pub fn is_scrollable(&self) -> bool {
        self.viewport_rows > 0 && self.content_rows > self.viewport_rows
    }

    /// Records the measured list and panel sizes, clamping the offset.
    pub fn resize(&mut self, content_rows: usize, viewport_rows: usize) {
        self.content_rows = content_rows;
        self.viewport_rows = viewport_rows;
        self.clamp_offset();
    }

    /// Shifts the window by the fewest rows that bring `row` into view.
    pub fn ensure_visible(&mut self, row: usize) {
        if self.viewport_rows == 0 {
            return;
        }
        if row < self.offset {
            self.offset = row;
        } else if row >= self.offset + self.viewport_rows {
            self.offset = row + 1 - self.viewport_rows;
        }
        self.clamp_offset();
    }

    /// Scrolls by relative row count (`+` down, `-` up).
    pub fn scroll_rows(&mut self, delta: isize) {
        if delta == 0 || !self.is_scrollable() {
            return;
        }
        self.offset = self.offset.saturating_add_signed(delta).min(self.max_offset());
    }

    /// List indexes currently inside the viewport.
    pub fn visible_range(&self) -> Range<usize> {
        let end = (self.offset + self.viewport_rows).min(self.content_rows);
        self.offset.min(end)..end
    }

    fn clamp_offset(&mut self) {
        self.offset = self.offset.min(self.max_offset());
    }
}
