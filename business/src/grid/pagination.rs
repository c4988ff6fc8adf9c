//! Pagination state and the model handed to pagination controls.

use std::ops::Range;

/// Page sizes offered by default.
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 3] = [5, 10, 25];

/// Page size used by a fresh grid by default.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Caller-supplied pagination settings for a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridOptions {
    pub page_size_options: Vec<usize>,
    pub default_page_size: usize,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Zero-based page index and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
}

impl Pagination {
    /// Starts on the first page. A zero size is raised to 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 0,
            page_size: page_size.max(1),
        }
    }

    /// Not clamped: an index past the end yields an empty page.
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Changes the page size and goes back to the first page.
    ///
    /// Zero is ignored.
    pub fn set_page_size(&mut self, page_size: usize) {
        if page_size == 0 {
            return;
        }
        self.page_size = page_size;
        self.page = 0;
    }

    /// Index range of the current page within `len` rows.
    pub fn range(&self, len: usize) -> Range<usize> {
        let start = self.page.saturating_mul(self.page_size).min(len);
        let end = start.saturating_add(self.page_size).min(len);
        start..end
    }

    pub fn page_count(&self, len: usize) -> usize {
        len.div_ceil(self.page_size)
    }
}

/// Everything a pagination control needs to draw itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerModel {
    pub page: usize,
    pub page_size: usize,
    pub total_rows: usize,
    pub page_size_options: Vec<usize>,
}

impl PagerModel {
    /// Number of pages needed for `total_rows`, 0 when there are none.
    pub fn page_count(&self) -> usize {
        self.total_rows.div_ceil(self.page_size.max(1))
    }

    /// One-based number of the first row on the page, 0 when it is empty.
    pub fn first_row(&self) -> usize {
        let start = self.page.saturating_mul(self.page_size);
        if start >= self.total_rows { 0 } else { start + 1 }
    }

    /// One-based number of the last row on the page, 0 when it is empty.
    pub fn last_row(&self) -> usize {
        if self.first_row() == 0 {
            return 0;
        }
        self.page
            .saturating_mul(self.page_size)
            .saturating_add(self.page_size)
            .min(self.total_rows)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page.saturating_add(1) < self.page_count()
    }

    /// "1–5 of 10" style summary.
    pub fn summary(&self) -> String {
        format!("{}–{} of {}", self.first_row(), self.last_row(), self.total_rows)
    }
}
