//! The table state engine.

mod events;
mod state;

pub use events::*;
pub use state::*;
