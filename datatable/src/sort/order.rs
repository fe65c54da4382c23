//! Sort direction

use std::cmp::Ordering;

use log::warn;
use serde::Deserialize;
use serde::Serialize;

/// Sort direction for ordering rows.
///
/// Only `"asc"` and `"desc"` are recognised. Any other token, including an
/// omitted one, normalizes to [`SortOrder::Asc`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum SortOrder {
    /// Ascending order (A-Z, 0-9).
    #[default]
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl SortOrder {
    /// Parses a direction token, normalizing unknown tokens to ascending.
    pub fn parse(token: &str) -> Self {
        match token {
            "asc" => SortOrder::Asc,
            "desc" => SortOrder::Desc,
            other => {
                warn!("sort order must be one of ['asc', 'desc'], but is: {other:?}; using 'asc'");
                SortOrder::Asc
            }
        }
    }

    /// Returns the token for this direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    /// Returns the opposite direction.
    pub fn toggled(&self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    /// Applies this direction to an ascending comparison result.
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for SortOrder {
    fn from(token: &str) -> Self {
        Self::parse(token)
    }
}

impl From<String> for SortOrder {
    fn from(token: String) -> Self {
        Self::parse(&token)
    }
}

impl From<Option<&str>> for SortOrder {
    fn from(token: Option<&str>) -> Self {
        token.map(Self::parse).unwrap_or_default()
    }
}

impl From<SortOrder> for &'static str {
    fn from(order: SortOrder) -> Self {
        order.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tokens() {
        assert_eq!(SortOrder::parse("asc"), SortOrder::Asc);
        assert_eq!(SortOrder::parse("desc"), SortOrder::Desc);
    }

    #[test]
    fn test_unknown_tokens_normalize_to_asc() {
        assert_eq!(SortOrder::from("bulb"), SortOrder::Asc);
        assert_eq!(SortOrder::from("DESC"), SortOrder::Asc);
        assert_eq!(SortOrder::from(None), SortOrder::Asc);
    }

    #[test]
    fn test_apply_reverses_for_desc() {
        assert_eq!(SortOrder::Asc.apply(Ordering::Less), Ordering::Less);
        assert_eq!(SortOrder::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(SortOrder::Desc.apply(Ordering::Equal), Ordering::Equal);
    }

    #[test]
    fn test_serde_is_lenient() {
        let order: SortOrder = serde_json::from_str("\"desc\"").unwrap();
        assert_eq!(order, SortOrder::Desc);
        let order: SortOrder = serde_json::from_str("\"bulb\"").unwrap();
        assert_eq!(order, SortOrder::Asc);
        assert_eq!(serde_json::to_string(&SortOrder::Desc).unwrap(), "\"desc\"");
    }
}
