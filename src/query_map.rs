use crate::compat::{String, Vec};

/// Query parameters of a split URL, keyed by name.
///
/// Keys are unique. A key keeps the position of its first occurrence while
/// later insertions of the same key overwrite its value, so the last value wins.
/// Keys and values are kept raw, without percent-decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryMap {
    params: Vec<(String, String)>,
}

impl QueryMap {
    pub fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Insert a key, replacing the value of an existing entry.
    /// Returns the previous value if the key was already present.
    pub fn insert(&mut self, key: String, value: String) -> Option<String> {
        match self.params.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(core::mem::replace(existing, value)),
            None => {
                self.params.push((key, value));
                None
            }
        }
    }

    /// Get the value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.params.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(_, v)| v.as_str())
    }
}

impl FromIterator<(String, String)> for QueryMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<'a> IntoIterator for &'a QueryMap {
    type Item = (&'a str, &'a str);
    type IntoIter = core::iter::Map<
        core::slice::Iter<'a, (String, String)>,
        fn(&'a (String, String)) -> (&'a str, &'a str),
    >;

    fn into_iter(self) -> Self::IntoIter {
        let as_str_pair: fn(&'a (String, String)) -> (&'a str, &'a str) =
            |(k, v)| (k.as_str(), v.as_str());
        self.params.iter().map(as_str_pair)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for QueryMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.params.len()))?;
        for (key, value) in &self.params {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
