//! Table event types.

use crate::sort::SortBy;
use crate::sort::SortOrder;

/// Snapshot of the sort state, emitted whenever it changes.
pub struct SortEvent<T> {
    /// Active sort specification.
    pub sort_by: SortBy<T>,
    /// Active sort direction.
    pub sort_order: SortOrder,
}

impl<T> SortEvent<T> {
    /// Create a new sort event.
    pub fn new(sort_by: SortBy<T>, sort_order: SortOrder) -> Self {
        Self {
            sort_by,
            sort_order,
        }
    }

    /// Returns whether `sort_by` is the active sort, in either direction.
    pub fn is_sorted_by(&self, sort_by: &SortBy<T>) -> bool {
        !self.sort_by.is_empty() && self.sort_by == *sort_by
    }
}

impl<T> Default for SortEvent<T> {
    fn default() -> Self {
        Self::new(SortBy::None, SortOrder::Asc)
    }
}

impl<T> Clone for SortEvent<T> {
    fn clone(&self) -> Self {
        Self {
            sort_by: self.sort_by.clone(),
            sort_order: self.sort_order,
        }
    }
}

impl<T> PartialEq for SortEvent<T> {
    fn eq(&self, other: &Self) -> bool {
        self.sort_by == other.sort_by && self.sort_order == other.sort_order
    }
}

impl<T> std::fmt::Debug for SortEvent<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SortEvent")
            .field("sort_by", &self.sort_by)
            .field("sort_order", &self.sort_order)
            .finish()
    }
}

impl<T> std::fmt::Display for SortEvent<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.sort_by, self.sort_order)
    }
}
