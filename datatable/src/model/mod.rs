//! Row model: dynamic values, records, and field paths

mod path;
mod record;
mod record_serde;
mod row;
mod value;

pub use path::*;
pub use record::*;
pub use row::*;
pub use value::*;
