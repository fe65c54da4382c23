//! Field access for table rows

use std::collections::HashMap;

use super::FieldPath;
use super::Record;
use super::Value;

/// Trait for items that can be held as rows in a [`DataTable`](crate::DataTable).
///
/// Only [`field`](Row::field) is required. Dotted sort paths are resolved by
/// [`resolve`](Row::resolve), which by default looks up the first segment
/// with `field` and walks the rest through nested [`Value`]s.
///
/// # Examples
///
/// ```
/// use datatable::model::{Row, Value};
///
/// #[derive(Clone, PartialEq)]
/// struct User {
///     name: String,
///     age: u32,
/// }
///
/// impl Row for User {
///     fn field(&self, name: &str) -> Option<Value> {
///         match name {
///             "name" => Some(Value::from(&self.name)),
///             "age" => Some(Value::from(self.age)),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Row {
    /// Returns the value of a top-level field, or `None` if it does not exist.
    fn field(&self, name: &str) -> Option<Value>;

    /// Resolves a dotted path against this row.
    ///
    /// A missing field or a non-container intermediate value yields
    /// [`Value::Null`].
    fn resolve(&self, path: &FieldPath) -> Value {
        let Some((first, rest)) = path.segments().split_first() else {
            return Value::Null;
        };
        let Some(mut value) = self.field(first) else {
            return Value::Null;
        };
        for segment in rest {
            match value.into_field(segment) {
                Some(next) => value = next,
                None => return Value::Null,
            }
        }
        value
    }
}

impl Row for Record {
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }

    fn resolve(&self, path: &FieldPath) -> Value {
        self.lookup(path).cloned().unwrap_or_default()
    }
}

impl Row for HashMap<String, Value> {
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

impl Row for serde_json::Value {
    fn field(&self, name: &str) -> Option<Value> {
        json_child(self, name).map(Value::from)
    }

    fn resolve(&self, path: &FieldPath) -> Value {
        let mut current = self;
        for segment in path.segments() {
            match json_child(current, segment) {
                Some(next) => current = next,
                None => return Value::Null,
            }
        }
        Value::from(current)
    }
}

fn json_child<'a>(json: &'a serde_json::Value, segment: &str) -> Option<&'a serde_json::Value> {
    match json {
        serde_json::Value::Object(map) => map.get(segment),
        serde_json::Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}
