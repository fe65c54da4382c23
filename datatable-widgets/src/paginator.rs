//! Page observer bound to a table.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::RwLock;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

use datatable::DataTable;
use datatable::events::Subscription;
use datatable::model::Row;
use datatable::page::PageEvent;
use log::debug;
use log::trace;

use crate::page_controls::PageControls;
use crate::page_controls::PageControlsView;
use crate::page_controls::PageLink;

/// Mirrors the page state of a [`DataTable`] and pages it.
///
/// The paginator copies `active_page`, `rows_on_page`, and `data_length`
/// from the table when bound, then follows every page-changed event. Its
/// commands go straight to the table; the mirror updates once the table
/// emits the result.
///
/// Handles are cheap to clone and share the same binding.
///
/// # Example
///
/// ```
/// use datatable::DataTable;
/// use datatable::model::Record;
/// use datatable_widgets::Paginator;
///
/// let rows = (0..5).map(|id| Record::new().set("id", id)).collect();
/// let table: DataTable<Record> = DataTable::with_rows(rows);
/// let paginator = Paginator::new(&table);
///
/// paginator.set_rows_on_page(2);
/// assert_eq!(paginator.last_page(), 3);
///
/// paginator.set_page(3);
/// assert_eq!(table.visible_rows().len(), 1);
/// ```
pub struct Paginator<T> {
    /// Mirrored page state.
    page: Arc<RwLock<PageEvent>>,
    /// Bound table.
    table: Arc<RwLock<DataTable<T>>>,
    /// Page-changed subscription on the bound table.
    subscription: Arc<Mutex<Option<Subscription>>>,
    /// Dirty flag for re-render.
    dirty: Arc<AtomicBool>,
}

impl<T> Paginator<T>
where
    T: Row + Clone + PartialEq + Send + Sync + 'static,
{
    /// Create a paginator bound to a table.
    pub fn new(table: &DataTable<T>) -> Self {
        let paginator = Self {
            page: Arc::new(RwLock::new(PageEvent {
                active_page: 0,
                rows_on_page: 0,
                data_length: 0,
            })),
            table: Arc::new(RwLock::new(table.clone())),
            subscription: Arc::new(Mutex::new(None)),
            dirty: Arc::new(AtomicBool::new(false)),
        };
        paginator.bind(table);
        paginator
    }

    /// Bind to another table.
    ///
    /// The paginator stops following the previous table, mirrors the new
    /// one, and follows it from then on.
    pub fn set_table(&self, table: &DataTable<T>) {
        if let Ok(mut guard) = self.table.write() {
            *guard = table.clone();
        }
        self.bind(table);
        debug!("paginator bound to table {}", table.id());
    }

    fn bind(&self, table: &DataTable<T>) {
        mirror(&self.page, &self.dirty, &table.get_page());

        let page = Arc::clone(&self.page);
        let dirty = Arc::clone(&self.dirty);
        let subscription = table.on_page_change(move |event| mirror(&page, &dirty, event));

        // Dropping the previous subscription unsubscribes it.
        let previous = match self.subscription.lock() {
            Ok(mut guard) => guard.replace(subscription),
            Err(_) => None,
        };
        drop(previous);
    }

    /// Get the bound table.
    pub fn table(&self) -> DataTable<T> {
        self.table
            .read()
            .map(|g| g.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Get the mirrored page state.
    pub fn page(&self) -> PageEvent {
        self.page.read().map(|g| *g).unwrap_or_default()
    }

    /// Get the mirrored active page.
    pub fn active_page(&self) -> usize {
        self.page().active_page
    }

    /// Get the mirrored page size.
    pub fn rows_on_page(&self) -> usize {
        self.page().rows_on_page
    }

    /// Get the mirrored row count.
    pub fn data_length(&self) -> usize {
        self.page().data_length
    }

    /// Get the number of the last page.
    pub fn last_page(&self) -> usize {
        let page = self.page();
        if page.rows_on_page == 0 {
            return 0;
        }
        page.data_length.div_ceil(page.rows_on_page)
    }

    /// Move the table to a page, keeping the page size.
    pub fn set_page(&self, page: usize) -> bool {
        self.table().set_page(page, self.rows_on_page())
    }

    /// Change the table's page size, keeping the active page.
    pub fn set_rows_on_page(&self, rows_on_page: usize) -> bool {
        self.table().set_page(self.active_page(), rows_on_page)
    }

    /// Follow a link produced by [`PageControls`].
    ///
    /// Disabled links do nothing.
    pub fn follow(&self, link: &PageLink) -> bool {
        if link.disabled {
            return false;
        }
        self.set_page(link.target)
    }

    /// Get the page bar for the mirrored state.
    pub fn view(&self, controls: &PageControls) -> PageControlsView {
        controls.view(&self.page())
    }

    /// Check if the mirror changed since the last [`clear_dirty`](Self::clear_dirty).
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

fn mirror(page: &RwLock<PageEvent>, dirty: &AtomicBool, event: &PageEvent) {
    if let Ok(mut guard) = page.write() {
        *guard = *event;
        dirty.store(true, Ordering::SeqCst);
        trace!(
            "paginator mirrored page {} of {}",
            event.active_page,
            event.last_page()
        );
    }
}

impl<T> Clone for Paginator<T> {
    fn clone(&self) -> Self {
        Self {
            page: Arc::clone(&self.page),
            table: Arc::clone(&self.table),
            subscription: Arc::clone(&self.subscription),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl<T> std::fmt::Debug for Paginator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug = f.debug_struct("Paginator");
        if let Ok(table) = self.table.read() {
            debug.field("table", &table.id());
        }
        if let Ok(page) = self.page.read() {
            debug.field("page", &*page);
        }
        debug.finish()
    }
}
