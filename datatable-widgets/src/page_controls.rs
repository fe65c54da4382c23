//! Page links and page-size options.
//!
//! [`PageControls`] computes what a pagination bar shows for a given
//! [`PageEvent`]: a "first" link, a sliding window of up to five page
//! numbers around the active page, a "last" link, and one option per
//! configured page size. Rendering is left to the host.

use datatable::page::PageEvent;
use serde::Deserialize;
use serde::Serialize;

/// Label of the link to the first page.
pub const FIRST_LABEL: &str = "«";

/// Label of the link to the last page.
pub const LAST_LABEL: &str = "»";

/// Configuration for [`PageControls`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageControlsConfig {
    /// Page sizes offered to the user.
    pub rows_on_page_set: Vec<usize>,
}

/// What a [`PageLink`] points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PageLinkKind {
    /// Jump to page 1.
    First,
    /// A numbered page.
    Page,
    /// Jump to the last page.
    Last,
}

/// One entry of the page bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageLink {
    pub kind: PageLinkKind,
    /// Page selected by following the link.
    pub target: usize,
    /// Marks the active page.
    pub active: bool,
    /// Following the link would not move.
    pub disabled: bool,
}

impl PageLink {
    fn first(active_page: usize) -> Self {
        Self {
            kind: PageLinkKind::First,
            target: 1,
            active: false,
            disabled: active_page <= 1,
        }
    }

    fn page(target: usize, active_page: usize) -> Self {
        Self {
            kind: PageLinkKind::Page,
            target,
            active: target == active_page,
            disabled: false,
        }
    }

    fn last(active_page: usize, last_page: usize) -> Self {
        Self {
            kind: PageLinkKind::Last,
            target: last_page,
            active: false,
            disabled: active_page >= last_page,
        }
    }

    /// Get the text to display for this link.
    pub fn label(&self) -> String {
        match self.kind {
            PageLinkKind::First => FIRST_LABEL.to_string(),
            PageLinkKind::Page => self.target.to_string(),
            PageLinkKind::Last => LAST_LABEL.to_string(),
        }
    }
}

/// One entry of the page-size selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowsOnPageOption {
    pub rows_on_page: usize,
    /// Marks the current page size.
    pub active: bool,
}

/// Everything a pagination bar shows for one page state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageControlsView {
    pub links: Vec<PageLink>,
    pub size_options: Vec<RowsOnPageOption>,
}

impl PageControlsView {
    /// Check if there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty() && self.size_options.is_empty()
    }
}

/// Page-bar model for a set of page sizes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageControls {
    rows_on_page_set: Vec<usize>,
    min_rows_on_page: usize,
}

impl PageControls {
    /// Create controls offering the given page sizes.
    pub fn new(rows_on_page_set: impl Into<Vec<usize>>) -> Self {
        let rows_on_page_set = rows_on_page_set.into();
        let min_rows_on_page = rows_on_page_set.iter().copied().min().unwrap_or(0);
        Self {
            rows_on_page_set,
            min_rows_on_page,
        }
    }

    /// Create controls from a configuration.
    pub fn from_config(config: &PageControlsConfig) -> Self {
        Self::new(config.rows_on_page_set.clone())
    }

    /// Get the configured page sizes.
    pub fn rows_on_page_set(&self) -> &[usize] {
        &self.rows_on_page_set
    }

    /// Get the smallest configured page size (0 when none are configured).
    pub fn min_rows_on_page(&self) -> usize {
        self.min_rows_on_page
    }

    /// Get the page bar for a page state.
    ///
    /// Empty when everything fits on one page.
    pub fn links(&self, page: &PageEvent) -> Vec<PageLink> {
        if page.data_length <= page.rows_on_page {
            return Vec::new();
        }

        let active = page.active_page;
        let last = page.last_page();
        let mut links = Vec::with_capacity(7);
        links.push(PageLink::first(active));

        // Up to four pages before the active one; the far ones only when
        // there are not enough pages after it.
        if active > 4 && active + 1 > last {
            links.push(PageLink::page(active - 4, active));
        }
        if active > 3 && active + 2 > last {
            links.push(PageLink::page(active - 3, active));
        }
        if active > 2 {
            links.push(PageLink::page(active - 2, active));
        }
        if active > 1 {
            links.push(PageLink::page(active - 1, active));
        }

        links.push(PageLink::page(active, active));

        if active < last {
            links.push(PageLink::page(active + 1, active));
        }
        if active + 2 <= last {
            links.push(PageLink::page(active + 2, active));
        }
        if active + 3 <= last && active < 3 {
            links.push(PageLink::page(active + 3, active));
        }
        if active + 4 <= last && active < 2 {
            links.push(PageLink::page(active + 4, active));
        }

        links.push(PageLink::last(active, last));
        links
    }

    /// Get the page-size options for a page state.
    ///
    /// Empty when the data fits in the smallest page size.
    pub fn size_options(&self, page: &PageEvent) -> Vec<RowsOnPageOption> {
        if page.data_length <= self.min_rows_on_page {
            return Vec::new();
        }
        self.rows_on_page_set
            .iter()
            .map(|&rows_on_page| RowsOnPageOption {
                rows_on_page,
                active: rows_on_page == page.rows_on_page,
            })
            .collect()
    }

    /// Get the links and size options together.
    pub fn view(&self, page: &PageEvent) -> PageControlsView {
        PageControlsView {
            links: self.links(page),
            size_options: self.size_options(page),
        }
    }
}
