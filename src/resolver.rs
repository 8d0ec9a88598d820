use crate::compat::{String, Vec};
use crate::field::Field;
use crate::query_map::QueryMap;
use crate::rules;
use crate::types::FieldValue;

/// Memoized evaluation of the field rules over one input string.
///
/// `resolve` runs the rule of a field, which in turn resolves the fields it
/// depends on. Every result is stored in the cache, but stored values are only
/// reused while caching is enabled. With caching disabled each call recomputes
/// the field and its whole dependency chain.
///
/// # Examples
///
/// ```
/// use urlsplit::{Field, FieldResolver};
///
/// let mut resolver = FieldResolver::new("https://example.com/a.txt");
/// resolver.enable_caching();
/// assert_eq!(resolver.text(Field::FileName), "a");
/// // Dependencies were cached on the way
/// assert!(resolver.is_cached(Field::PathList));
/// ```
#[derive(Debug, Clone)]
pub struct FieldResolver<'a> {
    input: &'a str,
    cache: [Option<FieldValue>; Field::COUNT],
    caching: bool,
}

impl<'a> FieldResolver<'a> {
    /// Create a resolver with an empty cache and caching disabled
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            cache: [const { None }; Field::COUNT],
            caching: false,
        }
    }

    /// The raw input every rule reads from
    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Compute a field, or return its cached value when caching is enabled.
    pub fn resolve(&mut self, field: Field) -> FieldValue {
        if self.caching {
            if let Some(value) = &self.cache[field.index()] {
                log::trace!("field {field} served from cache");
                return value.clone();
            }
        }

        let value = rules::derive(field, self);
        log::trace!("field {field} resolved to {value:?}");
        self.cache[field.index()] = Some(value.clone());
        value
    }

    /// Resolve a text field. Non-text fields yield an empty string.
    pub fn text(&mut self, field: Field) -> String {
        match self.resolve(field) {
            FieldValue::Text(text) => text,
            _ => String::new(),
        }
    }

    /// Resolve a list field. Non-list fields yield an empty list.
    pub fn list(&mut self, field: Field) -> Vec<String> {
        match self.resolve(field) {
            FieldValue::List(list) => list,
            _ => Vec::new(),
        }
    }

    /// Resolve the query mapping. Other fields yield an empty map.
    pub fn map(&mut self, field: Field) -> QueryMap {
        match self.resolve(field) {
            FieldValue::Map(map) => map,
            _ => QueryMap::new(),
        }
    }

    pub fn enable_caching(&mut self) {
        self.caching = true;
    }

    pub fn disable_caching(&mut self) {
        self.caching = false;
    }

    pub fn is_caching(&self) -> bool {
        self.caching
    }

    /// Drop every stored value
    pub fn reset_cache(&mut self) {
        self.cache = [const { None }; Field::COUNT];
    }

    /// Check if a value is stored for the field
    pub fn is_cached(&self, field: Field) -> bool {
        self.cache[field.index()].is_some()
    }
}
