//! Sorting and paging engine for tabular data
//!
//! A [`DataTable`] holds a row collection plus sort and page state, and
//! derives the rows visible on the active page. Observers subscribe to
//! page and sort changes and drive the table through its commands.

pub mod config;
pub mod error;
pub mod events;
pub mod model;
pub mod page;
pub mod sort;
pub mod table;

pub use config::TableConfig;
pub use error::Error;
pub use page::PageEvent;
pub use table::*;

pub mod prelude {
    pub use crate::config::TableConfig;
    pub use crate::error::{ConfigError, Error, FieldError};
    pub use crate::events::{EventEmitter, EventReceiver, Subscription};
    pub use crate::model::{FieldPath, Record, Row, Value};
    pub use crate::page::PageEvent;
    pub use crate::sort::{Extractor, SortBy, SortKey, SortOrder};
    pub use crate::table::{DataTable, SortEvent, TableId};
}
