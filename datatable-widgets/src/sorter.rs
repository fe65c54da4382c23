//! Sort indicator for a single key.

use datatable::DataTable;
use datatable::model::Row;
use datatable::sort::SortBy;
use datatable::sort::SortOrder;
use log::debug;

/// Glyph shown for an ascending sort.
pub const ASC_GLYPH: &str = "▲";

/// Glyph shown for a descending sort.
pub const DESC_GLYPH: &str = "▼";

/// Tracks whether a table is sorted by one key, and toggles it.
///
/// # Example
///
/// ```
/// use datatable::DataTable;
/// use datatable::model::Record;
/// use datatable_widgets::SortIndicator;
///
/// let table: DataTable<Record> = DataTable::new();
/// let by_name = SortIndicator::new(&table, "name");
///
/// by_name.sort();
/// assert_eq!(by_name.glyph(), Some("▲"));
/// by_name.sort();
/// assert_eq!(by_name.glyph(), Some("▼"));
/// ```
pub struct SortIndicator<T> {
    table: DataTable<T>,
    sort_by: SortBy<T>,
}

impl<T> SortIndicator<T>
where
    T: Row + Clone + PartialEq + Send + Sync + 'static,
{
    /// Create an indicator bound to a table and a key.
    pub fn new(table: &DataTable<T>, sort_by: impl Into<SortBy<T>>) -> Self {
        Self {
            table: table.clone(),
            sort_by: sort_by.into(),
        }
    }

    /// Get the bound key.
    pub fn sort_by(&self) -> &SortBy<T> {
        &self.sort_by
    }

    /// Get the direction the table is sorted by this key, if it is.
    pub fn state(&self) -> Option<SortOrder> {
        let current = self.table.get_sort();
        current
            .is_sorted_by(&self.sort_by)
            .then_some(current.sort_order)
    }

    /// Check if the table is sorted ascending by this key.
    pub fn is_sorted_asc(&self) -> bool {
        self.state() == Some(SortOrder::Asc)
    }

    /// Check if the table is sorted descending by this key.
    pub fn is_sorted_desc(&self) -> bool {
        self.state() == Some(SortOrder::Desc)
    }

    /// Get the glyph for the current state.
    pub fn glyph(&self) -> Option<&'static str> {
        match self.state()? {
            SortOrder::Asc => Some(ASC_GLYPH),
            SortOrder::Desc => Some(DESC_GLYPH),
        }
    }

    /// Sort by this key.
    ///
    /// Sorts descending if the key is already the ascending sort, and
    /// ascending otherwise. Returns the new direction.
    pub fn sort(&self) -> SortOrder {
        let order = self.table.toggle_sort(self.sort_by.clone());
        debug!("sort indicator {} set {}", self.sort_by, order);
        order
    }
}

impl<T> Clone for SortIndicator<T> {
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
            sort_by: self.sort_by.clone(),
        }
    }
}

impl<T> std::fmt::Debug for SortIndicator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SortIndicator")
            .field("table", &self.table.id())
            .field("sort_by", &self.sort_by)
            .finish()
    }
}
