//! Page arithmetic and the page-changed event.
//!
//! Pages are 1-based. Every helper tolerates a zero page size by treating
//! it as one row per page.

use std::ops::Range;

use serde::Deserialize;
use serde::Serialize;

/// Default page size.
pub const DEFAULT_ROWS_ON_PAGE: usize = 1000;

/// Default active page.
pub const DEFAULT_ACTIVE_PAGE: usize = 1;

/// Snapshot of the page state, emitted whenever it may have changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEvent {
    /// 1-based index of the displayed page.
    pub active_page: usize,
    /// Page size.
    pub rows_on_page: usize,
    /// Number of rows in the whole collection.
    pub data_length: usize,
}

impl Default for PageEvent {
    fn default() -> Self {
        Self {
            active_page: DEFAULT_ACTIVE_PAGE,
            rows_on_page: DEFAULT_ROWS_ON_PAGE,
            data_length: 0,
        }
    }
}

impl PageEvent {
    /// Returns the number of the last page (0 for an empty collection).
    pub fn last_page(&self) -> usize {
        last_page(self.data_length, self.rows_on_page)
    }

    /// Returns the index range of rows shown on the active page.
    pub fn window(&self) -> Range<usize> {
        window(self.active_page, self.rows_on_page, self.data_length)
    }
}

/// Returns `ceil(data_length / rows_on_page)`.
pub fn last_page(data_length: usize, rows_on_page: usize) -> usize {
    data_length.div_ceil(rows_on_page.max(1))
}

/// Returns the page that shows the same first row under a new page size.
///
/// With page `P` at size `R1`, the first visible row is `(P-1)*R1 + 1`;
/// the result is the page containing that row at size `R2`.
pub fn relocate(active_page: usize, previous_rows_on_page: usize, rows_on_page: usize) -> usize {
    let first_row = active_page
        .saturating_sub(1)
        .saturating_mul(previous_rows_on_page.max(1))
        .saturating_add(1);
    first_row.div_ceil(rows_on_page.max(1))
}

/// Clamps an active page into `1..=last_page`.
///
/// An empty collection has no last page, so the result floors at 1.
pub fn clamp_active_page(active_page: usize, data_length: usize, rows_on_page: usize) -> usize {
    active_page
        .min(last_page(data_length, rows_on_page))
        .max(DEFAULT_ACTIVE_PAGE)
}

/// Returns the index range `[(page-1)*size, page*size)` cut to `len`.
pub fn window(active_page: usize, rows_on_page: usize, len: usize) -> Range<usize> {
    let size = rows_on_page.max(1);
    let start = active_page.saturating_sub(1).saturating_mul(size).min(len);
    let end = start.saturating_add(size).min(len);
    start..end
}
