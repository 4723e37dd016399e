//! Page navigation state.

use std::ops::Range;

use super::PAGE_SIZE;

/// 1-indexed page cursor over a row count, [`PAGE_SIZE`] rows per page.
///
/// The current page always stays within `1..=total_pages(len)`, and there is
/// always at least one page, even for an empty table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { current: 1 }
    }
}

impl Pagination {
    /// Get the current page (1-indexed).
    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of pages for `len` rows (minimum 1).
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(PAGE_SIZE).max(1)
    }

    /// Index range of the current page within `len` rows.
    pub fn range(&self, len: usize) -> Range<usize> {
        let start = (self.current - 1).saturating_mul(PAGE_SIZE).min(len);
        let end = start.saturating_add(PAGE_SIZE).min(len);
        start..end
    }

    /// Move by `delta` pages, clamped to `[1, total_pages(len)]`.
    ///
    /// Returns `true` if the page changed.
    pub fn step(&mut self, delta: isize, len: usize) -> bool {
        let total = self.total_pages(len);
        let target = if delta.is_negative() {
            self.current.saturating_sub(delta.unsigned_abs())
        } else {
            self.current.saturating_add(delta.unsigned_abs())
        }
        .clamp(1, total);

        let changed = target != self.current;
        self.current = target;
        changed
    }

    /// Go back to page 1.
    pub fn reset(&mut self) {
        self.current = 1;
    }
}
