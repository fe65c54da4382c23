//! Sort keys and sort specifications

use std::sync::Arc;

use crate::model::FieldPath;
use crate::model::Row;
use crate::model::Value;

type ExtractFn<T> = dyn Fn(&T) -> Value + Send + Sync;

/// A named function that maps a row to a comparable [`Value`].
///
/// Two extractors are equal only when they share the same function
/// instance; cloning an extractor keeps it equal to the original.
pub struct Extractor<T> {
    name: Arc<str>,
    func: Arc<ExtractFn<T>>,
}

impl<T> Extractor<T> {
    /// Creates an extractor. The name is used for display and logging only.
    pub fn new<F>(name: impl Into<Arc<str>>, func: F) -> Self
    where
        F: Fn(&T) -> Value + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Applies the extractor to a row.
    pub fn extract(&self, row: &T) -> Value {
        (self.func)(row)
    }
}

impl<T> Clone for Extractor<T> {
    fn clone(&self) -> Self {
        Self {
            name: Arc::clone(&self.name),
            func: Arc::clone(&self.func),
        }
    }
}

impl<T> PartialEq for Extractor<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

impl<T> std::fmt::Debug for Extractor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Extractor").field(&self.name).finish()
    }
}

/// One key of a sort specification.
pub enum SortKey<T> {
    /// A dotted field path resolved through [`Row::resolve`].
    Path(FieldPath),
    /// A function applied to the row.
    Extractor(Extractor<T>),
}

impl<T> SortKey<T> {
    /// Creates a path key.
    pub fn path(path: impl Into<FieldPath>) -> Self {
        SortKey::Path(path.into())
    }

    /// Creates a function key.
    pub fn extractor<F>(name: impl Into<Arc<str>>, func: F) -> Self
    where
        F: Fn(&T) -> Value + Send + Sync + 'static,
    {
        SortKey::Extractor(Extractor::new(name, func))
    }

    /// Extracts the comparison value for a row.
    ///
    /// String values are lowercased so comparisons are case-insensitive.
    pub fn extract(&self, row: &T) -> Value
    where
        T: Row,
    {
        let value = match self {
            SortKey::Path(path) => row.resolve(path),
            SortKey::Extractor(extractor) => extractor.extract(row),
        };
        value.into_case_folded()
    }
}

impl<T> Clone for SortKey<T> {
    fn clone(&self) -> Self {
        match self {
            SortKey::Path(path) => SortKey::Path(path.clone()),
            SortKey::Extractor(extractor) => SortKey::Extractor(extractor.clone()),
        }
    }
}

impl<T> PartialEq for SortKey<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (SortKey::Path(a), SortKey::Path(b)) => a == b,
            (SortKey::Extractor(a), SortKey::Extractor(b)) => a == b,
            _ => false,
        }
    }
}

impl<T> std::fmt::Debug for SortKey<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Path(path) => f.debug_tuple("Path").field(&path.as_str()).finish(),
            SortKey::Extractor(extractor) => std::fmt::Debug::fmt(extractor, f),
        }
    }
}

impl<T> std::fmt::Display for SortKey<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Path(path) => f.write_str(path.as_str()),
            SortKey::Extractor(extractor) => write!(f, "fn {}", extractor.name()),
        }
    }
}

impl<T> From<&str> for SortKey<T> {
    fn from(path: &str) -> Self {
        SortKey::path(path)
    }
}

impl<T> From<String> for SortKey<T> {
    fn from(path: String) -> Self {
        SortKey::path(path)
    }
}

impl<T> From<FieldPath> for SortKey<T> {
    fn from(path: FieldPath) -> Self {
        SortKey::Path(path)
    }
}

impl<T> From<Extractor<T>> for SortKey<T> {
    fn from(extractor: Extractor<T>) -> Self {
        SortKey::Extractor(extractor)
    }
}

/// A sort specification: nothing, one key, or an ordered list of keys.
///
/// With `Multi`, the first key is primary and later keys break ties.
///
/// # Examples
///
/// ```
/// use datatable::sort::{SortBy, SortKey};
/// use datatable::model::{Record, Value};
///
/// let none: SortBy<Record> = SortBy::from("");
/// assert!(none.is_empty());
///
/// let by_zip: SortBy<Record> = SortBy::from("city.zip");
/// let by_name_then_age: SortBy<Record> = SortBy::from(vec!["name", "age"]);
/// let by_len: SortBy<Record> = SortBy::from(SortKey::extractor("fields", |r: &Record| {
///     Value::from(r.len())
/// }));
/// ```
pub enum SortBy<T> {
    /// No sort: rows keep collection order.
    None,
    /// A single key.
    Single(SortKey<T>),
    /// Several keys compared in order.
    Multi(Vec<SortKey<T>>),
}

impl<T> SortBy<T> {
    /// Returns `true` when this specification does not reorder rows.
    ///
    /// An empty path or an empty key list counts as no sort.
    pub fn is_empty(&self) -> bool {
        match self {
            SortBy::None => true,
            SortBy::Single(SortKey::Path(path)) => path.is_empty(),
            SortBy::Single(SortKey::Extractor(_)) => false,
            SortBy::Multi(keys) => keys.is_empty(),
        }
    }

    /// Returns the keys in priority order.
    pub fn keys(&self) -> &[SortKey<T>] {
        match self {
            SortBy::None => &[],
            SortBy::Single(key) => std::slice::from_ref(key),
            SortBy::Multi(keys) => keys,
        }
    }
}

impl<T> Default for SortBy<T> {
    fn default() -> Self {
        SortBy::None
    }
}

impl<T> Clone for SortBy<T> {
    fn clone(&self) -> Self {
        match self {
            SortBy::None => SortBy::None,
            SortBy::Single(key) => SortBy::Single(key.clone()),
            SortBy::Multi(keys) => SortBy::Multi(keys.clone()),
        }
    }
}

impl<T> PartialEq for SortBy<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (SortBy::None, SortBy::None) => true,
            (SortBy::Single(a), SortBy::Single(b)) => a == b,
            (SortBy::Multi(a), SortBy::Multi(b)) => a == b,
            _ => false,
        }
    }
}

impl<T> std::fmt::Debug for SortBy<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortBy::None => f.write_str("None"),
            SortBy::Single(key) => f.debug_tuple("Single").field(key).finish(),
            SortBy::Multi(keys) => f.debug_tuple("Multi").field(keys).finish(),
        }
    }
}

impl<T> std::fmt::Display for SortBy<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortBy::None => f.write_str("(none)"),
            SortBy::Single(key) => std::fmt::Display::fmt(key, f),
            SortBy::Multi(keys) => {
                f.write_str("[")?;
                for (i, key) in keys.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    std::fmt::Display::fmt(key, f)?;
                }
                f.write_str("]")
            }
        }
    }
}

impl<T> From<&str> for SortBy<T> {
    fn from(path: &str) -> Self {
        if path.is_empty() {
            SortBy::None
        } else {
            SortBy::Single(SortKey::path(path))
        }
    }
}

impl<T> From<String> for SortBy<T> {
    fn from(path: String) -> Self {
        SortBy::from(path.as_str())
    }
}

impl<T> From<FieldPath> for SortBy<T> {
    fn from(path: FieldPath) -> Self {
        SortBy::Single(SortKey::Path(path))
    }
}

impl<T> From<SortKey<T>> for SortBy<T> {
    fn from(key: SortKey<T>) -> Self {
        SortBy::Single(key)
    }
}

impl<T> From<Extractor<T>> for SortBy<T> {
    fn from(extractor: Extractor<T>) -> Self {
        SortBy::Single(SortKey::Extractor(extractor))
    }
}

impl<T, K: Into<SortKey<T>>> From<Vec<K>> for SortBy<T> {
    fn from(keys: Vec<K>) -> Self {
        SortBy::Multi(keys.into_iter().map(Into::into).collect())
    }
}

impl<T, K: Into<SortKey<T>>, const N: usize> From<[K; N]> for SortBy<T> {
    fn from(keys: [K; N]) -> Self {
        SortBy::Multi(keys.into_iter().map(Into::into).collect())
    }
}
