//! Observer widgets for a datatable engine
//!
//! These models hold no rows themselves. A [`Paginator`] mirrors the page
//! state of a [`DataTable`](datatable::DataTable), [`PageControls`] turns a
//! page snapshot into page links and size options, and a [`SortIndicator`]
//! tracks whether one sort key is active.

pub mod page_controls;
pub mod paginator;
pub mod sorter;

pub use page_controls::*;
pub use paginator::*;
pub use sorter::*;
