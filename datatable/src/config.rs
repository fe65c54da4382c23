//! Table configuration.

use serde::Deserialize;
use serde::Serialize;

use crate::error::ConfigError;
use crate::error::Error;
use crate::model::FieldPath;
use crate::page::DEFAULT_ACTIVE_PAGE;
use crate::page::DEFAULT_ROWS_ON_PAGE;
use crate::sort::SortBy;
use crate::sort::SortKey;
use crate::sort::SortOrder;

/// Initial state for a [`DataTable`](crate::DataTable).
///
/// Built either with the builder methods or deserialized from JSON. Only
/// path-based sort keys can be configured; extractor functions are set
/// in code through [`DataTable::set_sort`](crate::DataTable::set_sort).
///
/// # Example
///
/// ```
/// use datatable::config::TableConfig;
/// use datatable::sort::SortOrder;
///
/// let config = TableConfig::new()
///     .rows_on_page(25)
///     .sort_by("name")
///     .then_by("age")
///     .sort_order(SortOrder::Desc);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableConfig {
    /// Page size.
    pub rows_on_page: usize,

    /// 1-based page shown first.
    pub active_page: usize,

    /// Sort paths, primary first. Empty means no sort.
    pub sort_by: Vec<FieldPath>,

    /// Sort direction. Unknown tokens normalize to ascending.
    pub sort_order: SortOrder,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            rows_on_page: DEFAULT_ROWS_ON_PAGE,
            active_page: DEFAULT_ACTIVE_PAGE,
            sort_by: Vec::new(),
            sort_order: SortOrder::Asc,
        }
    }
}

impl TableConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let config: TableConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the page size.
    pub fn rows_on_page(mut self, rows_on_page: usize) -> Self {
        self.rows_on_page = rows_on_page;
        self
    }

    /// Set the first page shown.
    pub fn active_page(mut self, active_page: usize) -> Self {
        self.active_page = active_page;
        self
    }

    /// Replace the sort keys with a single path.
    pub fn sort_by(mut self, path: impl Into<FieldPath>) -> Self {
        self.sort_by = vec![path.into()];
        self
    }

    /// Add a tie-breaking sort path.
    pub fn then_by(mut self, path: impl Into<FieldPath>) -> Self {
        self.sort_by.push(path.into());
        self
    }

    /// Set the sort direction.
    pub fn sort_order(mut self, order: impl Into<SortOrder>) -> Self {
        self.sort_order = order.into();
        self
    }

    /// Check the values a table would otherwise silently clamp.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows_on_page == 0 {
            return Err(ConfigError::ZeroRowsOnPage);
        }
        if self.active_page == 0 {
            return Err(ConfigError::ZeroActivePage);
        }
        if let Some(index) = self.sort_by.iter().position(FieldPath::is_empty) {
            return Err(ConfigError::EmptySortPath { index });
        }
        Ok(())
    }

    /// Build the sort specification described by `sort_by`.
    pub fn sort_spec<T>(&self) -> SortBy<T> {
        match self.sort_by.as_slice() {
            [] => SortBy::None,
            [single] => SortBy::Single(SortKey::Path(single.clone())),
            many => SortBy::Multi(many.iter().cloned().map(SortKey::Path).collect()),
        }
    }
}
