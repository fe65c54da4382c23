//! Error types

mod config;
mod field;

pub use config::*;
pub use field::*;

/// Crate-level error for the fallible edges around the engine.
///
/// Engine operations themselves never fail: invalid input is normalized or
/// clamped. Errors only surface when loading configuration or converting
/// external data into records.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Typed field access failed.
    #[error(transparent)]
    Field(#[from] FieldError),

    /// Configuration failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// JSON could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A JSON value that is not an object was converted into a record.
    #[error("Expected a JSON object for a record, got {actual}")]
    NotARecord {
        /// JSON type that was found instead.
        actual: &'static str,
    },
}

impl Error {
    /// Creates a new not-a-record error.
    pub fn not_a_record(actual: &'static str) -> Self {
        Self::NotARecord { actual }
    }
}
