//! Table engine state.

use std::sync::atomic::AtomicBool;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::RwLock;

use log::debug;
use log::trace;

use super::SortEvent;
use crate::config::TableConfig;
use crate::events::EventEmitter;
use crate::events::EventReceiver;
use crate::events::Subscription;
use crate::model::Row;
use crate::page;
use crate::page::PageEvent;
use crate::sort::sorted_indices;
use crate::sort::SortBy;
use crate::sort::SortOrder;

/// Unique identifier for a table instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId(usize);

impl TableId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__datatable_{}", self.0)
    }
}

/// Internal state for the table.
pub(super) struct TableInner<T> {
    /// The full row collection, in collection order.
    pub rows: Vec<T>,
    /// Current sort specification.
    pub sort_by: SortBy<T>,
    /// Current sort direction.
    pub sort_order: SortOrder,
    /// 1-based active page.
    pub active_page: usize,
    /// Page size, never 0.
    pub rows_on_page: usize,
    /// Sorted rows on the active page.
    pub visible: Arc<Vec<T>>,
    /// Bumped whenever `rows` is replaced by a different collection.
    pub revision: u64,
}

impl<T: Row + Clone + PartialEq> TableInner<T> {
    fn new(
        rows: Vec<T>,
        sort_by: SortBy<T>,
        sort_order: SortOrder,
        active_page: usize,
        rows_on_page: usize,
    ) -> Self {
        let mut inner = Self {
            rows,
            sort_by,
            sort_order,
            active_page: active_page.max(1),
            rows_on_page: rows_on_page.max(1),
            visible: Arc::new(Vec::new()),
            revision: 0,
        };
        inner.recompute();
        inner
    }

    /// Clamp the active page and rebuild the visible slice.
    ///
    /// The previous `visible` allocation is kept when the new slice is
    /// equal to it.
    fn recompute(&mut self) -> PageEvent {
        self.active_page =
            page::clamp_active_page(self.active_page, self.rows.len(), self.rows_on_page);

        let range = page::window(self.active_page, self.rows_on_page, self.rows.len());
        trace!("recomputing visible rows {:?} of {}", range, self.rows.len());
        let order = sorted_indices(&self.rows, &self.sort_by, self.sort_order);
        let visible: Vec<T> = order[range]
            .iter()
            .map(|&index| self.rows[index].clone())
            .collect();

        if *self.visible != visible {
            self.visible = Arc::new(visible);
        }
        self.page_event()
    }

    fn page_event(&self) -> PageEvent {
        PageEvent {
            active_page: self.active_page,
            rows_on_page: self.rows_on_page,
            data_length: self.rows.len(),
        }
    }

    fn sort_event(&self) -> SortEvent<T> {
        SortEvent::new(self.sort_by.clone(), self.sort_order)
    }
}

/// Sorting and paging state over a row collection.
///
/// `DataTable<T>` owns a collection of rows and derives the rows visible on
/// the active page:
/// - Stable multi-key sorting by field path or extractor function
/// - 1-based paging with clamping and page-size relocation
/// - Page and sort change notifications, as callbacks or channels
///
/// Handles are cheap to clone and share the same state. Every mutating call
/// recomputes the visible rows and runs all listeners before returning.
/// Listeners run after the internal lock is released, so they may read the
/// table or issue further commands.
///
/// # Example
///
/// ```
/// use datatable::DataTable;
/// use datatable::model::Record;
/// use datatable::sort::SortOrder;
///
/// let table = DataTable::with_rows(vec![
///     Record::new().set("name", "banana"),
///     Record::new().set("name", "Ananas"),
/// ]);
/// table.set_sort("name", SortOrder::Asc);
///
/// let first = &table.visible_rows()[0];
/// assert_eq!(first.get_string("name").unwrap(), Some("Ananas"));
/// ```
pub struct DataTable<T> {
    /// Unique identifier.
    id: TableId,
    /// Internal state.
    inner: Arc<RwLock<TableInner<T>>>,
    /// Dirty flag for re-render.
    dirty: Arc<AtomicBool>,
    /// Page-changed listeners.
    page_events: EventEmitter<PageEvent>,
    /// Sort-changed listeners, replaying the latest event.
    sort_events: EventEmitter<SortEvent<T>>,
}

impl<T> DataTable<T> {
    /// Get the unique ID.
    pub fn id(&self) -> TableId {
        self.id
    }

    /// Get the ID as a string.
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    /// Check if the table changed since the last [`clear_dirty`](Self::clear_dirty).
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl<T> DataTable<T>
where
    T: Row + Clone + PartialEq + Send + Sync + 'static,
{
    /// Create an empty table with default paging and no sort.
    pub fn new() -> Self {
        Self::build(TableInner::new(
            Vec::new(),
            SortBy::None,
            SortOrder::Asc,
            page::DEFAULT_ACTIVE_PAGE,
            page::DEFAULT_ROWS_ON_PAGE,
        ))
    }

    /// Create a table with initial rows.
    pub fn with_rows(rows: Vec<T>) -> Self {
        Self::build(TableInner::new(
            rows,
            SortBy::None,
            SortOrder::Asc,
            page::DEFAULT_ACTIVE_PAGE,
            page::DEFAULT_ROWS_ON_PAGE,
        ))
    }

    /// Create an empty table from a configuration.
    ///
    /// Zero sizes are clamped to 1; call [`TableConfig::validate`] first to
    /// reject them instead.
    pub fn from_config(config: &TableConfig) -> Self {
        Self::build(TableInner::new(
            Vec::new(),
            config.sort_spec(),
            config.sort_order,
            config.active_page,
            config.rows_on_page,
        ))
    }

    fn build(inner: TableInner<T>) -> Self {
        let sort_events = EventEmitter::replaying();
        // An initial sort is announced to the first subscribers.
        if !inner.sort_by.is_empty() {
            sort_events.emit(&inner.sort_event());
        }
        let table = Self {
            id: TableId::new(),
            inner: Arc::new(RwLock::new(inner)),
            dirty: Arc::new(AtomicBool::new(false)),
            page_events: EventEmitter::new(),
            sort_events,
        };
        debug!("created table {}", table.id);
        table
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Get the current sort state.
    pub fn get_sort(&self) -> SortEvent<T> {
        self.inner
            .read()
            .map(|g| g.sort_event())
            .unwrap_or_default()
    }

    /// Get the current sort specification.
    pub fn sort_by(&self) -> SortBy<T> {
        self.inner
            .read()
            .map(|g| g.sort_by.clone())
            .unwrap_or_default()
    }

    /// Get the current sort direction.
    pub fn sort_order(&self) -> SortOrder {
        self.inner
            .read()
            .map(|g| g.sort_order)
            .unwrap_or_default()
    }

    /// Set the sort specification and direction.
    ///
    /// Unknown direction tokens fall back to ascending. Returns `false`
    /// without notifying anyone when the pair is unchanged. Changing only the
    /// direction while no key is set stores it but notifies no one.
    pub fn set_sort(&self, sort_by: impl Into<SortBy<T>>, sort_order: impl Into<SortOrder>) -> bool {
        let sort_by = sort_by.into();
        let sort_order = sort_order.into();
        self.update_sort(move |_| (sort_by, sort_order)).is_some()
    }

    /// Toggle sorting on a key.
    ///
    /// If the key is the active ascending sort, sorts it descending.
    /// Otherwise sorts it ascending. Returns the new direction.
    pub fn toggle_sort(&self, sort_by: impl Into<SortBy<T>>) -> SortOrder {
        let sort_by = sort_by.into();
        self.update_sort(move |current| {
            let order = if current.is_sorted_by(&sort_by) && current.sort_order == SortOrder::Asc {
                SortOrder::Desc
            } else {
                SortOrder::Asc
            };
            (sort_by, order)
        })
        .map(|event| event.sort_order)
        .unwrap_or_else(|| self.sort_order())
    }

    /// Clear the sort, restoring collection order.
    pub fn clear_sort(&self) -> bool {
        self.update_sort(|current| (SortBy::None, current.sort_order))
            .is_some()
    }

    fn update_sort<F>(&self, next: F) -> Option<SortEvent<T>>
    where
        F: FnOnce(&SortEvent<T>) -> (SortBy<T>, SortOrder),
    {
        let (sort_event, page_event) = {
            let Ok(mut guard) = self.inner.write() else {
                return None;
            };
            let (sort_by, sort_order) = next(&guard.sort_event());
            if guard.sort_by == sort_by && guard.sort_order == sort_order {
                return None;
            }
            if guard.sort_by.is_empty() && sort_by.is_empty() {
                // A direction alone does not reorder anything.
                guard.sort_order = sort_order;
                trace!("table {} sort order set to {} without a key", self.id, sort_order);
                return Some(guard.sort_event());
            }
            guard.sort_by = sort_by;
            guard.sort_order = sort_order;
            let page_event = guard.recompute();
            (guard.sort_event(), page_event)
        };

        debug!("table {} sorted by {}", self.id, sort_event);
        self.dirty.store(true, Ordering::SeqCst);
        self.sort_events.emit(&sort_event);
        // A sort listener that moved the table has already published a newer page.
        if self.get_page() == page_event {
            self.page_events.emit(&page_event);
        }
        Some(sort_event)
    }

    // -------------------------------------------------------------------------
    // Paging
    // -------------------------------------------------------------------------

    /// Get the current page state.
    pub fn get_page(&self) -> PageEvent {
        self.inner
            .read()
            .map(|g| g.page_event())
            .unwrap_or_default()
    }

    /// Get the 1-based active page.
    pub fn active_page(&self) -> usize {
        self.inner
            .read()
            .map(|g| g.active_page)
            .unwrap_or(page::DEFAULT_ACTIVE_PAGE)
    }

    /// Get the page size.
    pub fn rows_on_page(&self) -> usize {
        self.inner
            .read()
            .map(|g| g.rows_on_page)
            .unwrap_or(page::DEFAULT_ROWS_ON_PAGE)
    }

    /// Get the number of the last page (0 when there are no rows).
    pub fn last_page(&self) -> usize {
        self.get_page().last_page()
    }

    /// Set the active page and page size.
    ///
    /// Zero for either argument is treated as 1. When only the size changes,
    /// the new page is the one that still shows the first visible row. The
    /// resulting page is clamped to the available rows.
    ///
    /// Returns `false` without notifying anyone when neither value differs
    /// from the current state.
    pub fn set_page(&self, active_page: usize, rows_on_page: usize) -> bool {
        let active_page = active_page.max(1);
        let rows_on_page = rows_on_page.max(1);

        let event = {
            let Ok(mut guard) = self.inner.write() else {
                return false;
            };
            if guard.active_page == active_page && guard.rows_on_page == rows_on_page {
                return false;
            }
            guard.active_page = if guard.active_page != active_page {
                active_page
            } else {
                page::relocate(guard.active_page, guard.rows_on_page, rows_on_page)
            };
            guard.rows_on_page = rows_on_page;
            guard.recompute()
        };

        debug!(
            "table {} showing page {} of {} ({} rows per page)",
            self.id,
            event.active_page,
            event.last_page(),
            event.rows_on_page
        );
        self.dirty.store(true, Ordering::SeqCst);
        self.page_events.emit(&event);
        true
    }

    /// Move to a page, keeping the page size.
    pub fn set_active_page(&self, active_page: usize) -> bool {
        self.set_page(active_page, self.rows_on_page())
    }

    /// Change the page size, keeping the first visible row on screen.
    pub fn set_rows_on_page(&self, rows_on_page: usize) -> bool {
        self.set_page(self.active_page(), rows_on_page)
    }

    // -------------------------------------------------------------------------
    // Rows
    // -------------------------------------------------------------------------

    /// Get a copy of the full row collection, in collection order.
    pub fn rows(&self) -> Vec<T> {
        self.inner
            .read()
            .map(|g| g.rows.clone())
            .unwrap_or_default()
    }

    /// Get the number of rows in the collection.
    pub fn data_length(&self) -> usize {
        self.inner.read().map(|g| g.rows.len()).unwrap_or(0)
    }

    /// Alias for [`data_length`](Self::data_length).
    pub fn len(&self) -> usize {
        self.data_length()
    }

    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.data_length() == 0
    }

    /// Get the sorted rows on the active page.
    ///
    /// The same allocation is returned until the visible rows actually
    /// change, so `Arc::ptr_eq` detects unchanged slices.
    pub fn visible_rows(&self) -> Arc<Vec<T>> {
        self.inner
            .read()
            .map(|g| Arc::clone(&g.visible))
            .unwrap_or_default()
    }

    /// Get the collection revision.
    pub fn revision(&self) -> u64 {
        self.inner.read().map(|g| g.revision).unwrap_or(0)
    }

    /// Replace the row collection.
    ///
    /// `None` means an empty collection. Returns `false` without notifying
    /// anyone when the new collection equals the current one.
    pub fn set_rows(&self, rows: impl Into<Option<Vec<T>>>) -> bool {
        let rows = rows.into().unwrap_or_default();

        let (event, revision) = {
            let Ok(mut guard) = self.inner.write() else {
                return false;
            };
            if guard.rows == rows {
                return false;
            }
            guard.rows = rows;
            guard.revision += 1;
            (guard.recompute(), guard.revision)
        };

        debug!(
            "table {} rows replaced: {} rows, revision {}",
            self.id, event.data_length, revision
        );
        self.dirty.store(true, Ordering::SeqCst);
        self.page_events.emit(&event);
        true
    }

    /// Edit a copy of the rows in place, then apply it like [`set_rows`](Self::set_rows).
    pub fn update_rows<F>(&self, edit: F) -> bool
    where
        F: FnOnce(&mut Vec<T>),
    {
        let mut rows = self.rows();
        edit(&mut rows);
        self.set_rows(rows)
    }

    /// Remove all rows.
    pub fn clear_rows(&self) -> bool {
        self.set_rows(Vec::new())
    }

    // -------------------------------------------------------------------------
    // Notifications
    // -------------------------------------------------------------------------

    /// Register a page-changed listener.
    pub fn on_page_change<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&PageEvent) + Send + Sync + 'static,
    {
        self.page_events.subscribe(listener)
    }

    /// Register a sort-changed listener.
    ///
    /// The most recent sort event, if any, is delivered immediately.
    pub fn on_sort_change<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&SortEvent<T>) + Send + Sync + 'static,
    {
        self.sort_events.subscribe(listener)
    }

    /// Receive page-changed events over a channel.
    pub fn page_events(&self) -> EventReceiver<PageEvent> {
        self.page_events.channel()
    }

    /// Receive sort-changed events over a channel.
    pub fn sort_events(&self) -> EventReceiver<SortEvent<T>> {
        self.sort_events.channel()
    }
}

impl<T> Default for DataTable<T>
where
    T: Row + Clone + PartialEq + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for DataTable<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
            page_events: self.page_events.clone(),
            sort_events: self.sort_events.clone(),
        }
    }
}

impl<T> std::fmt::Debug for DataTable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug = f.debug_struct("DataTable");
        debug.field("id", &self.id);
        if let Ok(guard) = self.inner.read() {
            debug
                .field("rows", &guard.rows.len())
                .field("sort_by", &guard.sort_by)
                .field("sort_order", &guard.sort_order)
                .field("active_page", &guard.active_page)
                .field("rows_on_page", &guard.rows_on_page)
                .field("revision", &guard.revision);
        }
        debug.finish()
    }
}
