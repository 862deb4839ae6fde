//! Pagination arithmetic.
//!
//! A [`PageWindow`] is the `(first, rows)` pair a paginator works with:
//! `first` is the zero-based index of the top record and `rows` the page
//! size. The API is addressed by one-based page numbers.

/// One-based page number containing record `first`.
///
/// `rows` must be non-zero.
pub fn page_number(first: u64, rows: u64) -> u64 {
    first / rows + 1
}

/// Number of pages needed to hold `total` records.
pub fn total_pages(total: u64, rows: u64) -> u64 {
    total.div_ceil(rows)
}

/// Fields are private so `rows` is never zero; build one with
/// [`PageWindow::new`] or [`PageWindow::with_rows`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageWindow {
    first: u64,
    rows: u64,
}

impl PageWindow {
    pub fn new(first: u64, rows: u64) -> Self {
        Self { first, rows: rows.max(1) }
    }

    pub fn first(&self) -> u64 {
        self.first
    }

    pub fn rows(&self) -> u64 {
        self.rows
    }

    pub fn page(&self) -> u64 {
        page_number(self.first, self.rows)
    }

    pub fn page_count(&self, total: u64) -> u64 {
        total_pages(total, self.rows)
    }

    /// The following page, or `None` when this is the last one.
    pub fn next(&self, total: u64) -> Option<Self> {
        let first = self.aligned_first() + self.rows;
        (first < total).then_some(Self { first, rows: self.rows })
    }

    /// The preceding page, or `None` when already on the first one.
    pub fn previous(&self) -> Option<Self> {
        let aligned = self.aligned_first();
        (aligned > 0).then(|| Self {
            first: aligned - self.rows,
            rows: self.rows,
        })
    }

    pub fn first_page(&self) -> Self {
        Self { first: 0, rows: self.rows }
    }

    pub fn last_page(&self, total: u64) -> Self {
        let pages = self.page_count(total).max(1);
        Self {
            first: (pages - 1) * self.rows,
            rows: self.rows,
        }
    }

    /// Same top record, new page size. `first` is aligned down to a
    /// multiple of `rows` so the old top record stays on the page.
    pub fn with_rows(&self, rows: u64) -> Self {
        let rows = rows.max(1);
        Self {
            first: (self.first / rows) * rows,
            rows,
        }
    }

    /// One-based index range `(from, to)` of the records shown, for the
    /// paginator report. `(0, 0)` when nothing is shown.
    pub fn shown_range(&self, shown: usize) -> (u64, u64) {
        if shown == 0 {
            return (0, 0);
        }
        (self.first + 1, self.first + shown as u64)
    }

    fn aligned_first(&self) -> u64 {
        (self.first / self.rows) * self.rows
    }
}
