//! Configuration validation errors

/// Errors reported by [`TableConfig::validate`](crate::config::TableConfig::validate).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `rows_on_page` must be at least 1.
    #[error("rows_on_page must be greater than zero")]
    ZeroRowsOnPage,

    /// `active_page` is 1-based.
    #[error("active_page must be greater than zero")]
    ZeroActivePage,

    /// A sort path was empty.
    #[error("sort_by[{index}] is an empty field path")]
    EmptySortPath {
        /// Position of the offending path in `sort_by`.
        index: usize,
    },
}
