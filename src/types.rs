use crate::compat::{String, Vec};
use crate::query_map::QueryMap;

/// Value of a derived field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// A single string, e.g. protocol or path
    Text(String),
    /// An ordered list, e.g. domain or path parts
    List(Vec<String>),
    /// The query key/value mapping
    Map(QueryMap),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&QueryMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Check if the value is an empty string, list or map
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::List(list) => list.is_empty(),
            Self::Map(map) => map.is_empty(),
        }
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(list: Vec<String>) -> Self {
        Self::List(list)
    }
}

impl From<QueryMap> for FieldValue {
    fn from(map: QueryMap) -> Self {
        Self::Map(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compat::{ToString, vec};

    #[test]
    fn test_accessors() {
        let text = FieldValue::from("https".to_string());
        assert_eq!(text.as_text(), Some("https"));
        assert_eq!(text.as_list(), None);

        let list = FieldValue::from(vec!["a".to_string()]);
        assert_eq!(list.as_list().map(<[String]>::len), Some(1));
        assert_eq!(list.as_map(), None);

        let map = FieldValue::from(QueryMap::new());
        assert!(map.as_map().is_some());
        assert!(map.is_empty());
    }
}
