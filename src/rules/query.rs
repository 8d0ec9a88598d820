use crate::compat::{String, ToString, Vec};
use crate::field::Field;
use crate::helpers::{after_byte, before_byte, split_all, split_once_byte};
use crate::query_map::QueryMap;
use crate::resolver::FieldResolver;

/// Text between the first `?` and the following `#`
pub fn query(resolver: &mut FieldResolver<'_>) -> String {
    let request = resolver.text(Field::Request);
    after_byte(&request, b'?')
        .map(|after| before_byte(after, b'#'))
        .unwrap_or_default()
        .to_string()
}

/// Raw `key=value` or bare entries, in order
pub fn query_list(resolver: &mut FieldResolver<'_>) -> Vec<String> {
    let query = resolver.text(Field::Query);
    split_all(&query, b'&')
}

/// Entries with both a key and a value, split at the first `=`
pub fn query_object(resolver: &mut FieldResolver<'_>) -> QueryMap {
    resolver
        .list(Field::QueryList)
        .iter()
        .filter_map(|entry| match split_once_byte(entry, b'=') {
            (key, Some(value)) if !key.is_empty() && !value.is_empty() => {
                Some((key.to_string(), value.to_string()))
            }
            _ => None,
        })
        .collect()
}

/// Text after the first `#`
pub fn fragment(resolver: &mut FieldResolver<'_>) -> String {
    let request = resolver.text(Field::Request);
    after_byte(&request, b'#')
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compat::vec;

    fn text(input: &str, field: Field) -> String {
        FieldResolver::new(input).text(field)
    }

    fn object(input: &str) -> QueryMap {
        FieldResolver::new(input).map(Field::QueryObject)
    }

    #[test]
    fn test_query() {
        assert_eq!(text("http://h/p?x=1&y=2#frag", Field::Query), "x=1&y=2");
        assert_eq!(text("http://h/p?x=1", Field::Query), "x=1");
        assert_eq!(text("http://h/p?#frag", Field::Query), "");
        assert_eq!(text("http://h/p", Field::Query), "");
        // Query only counts after a path separator
        assert_eq!(text("http://h?x=1", Field::Query), "");
    }

    #[test]
    fn test_query_keeps_later_question_marks() {
        assert_eq!(text("http://h/p?a=b?c", Field::Query), "a=b?c");
    }

    #[test]
    fn test_query_list() {
        let mut resolver = FieldResolver::new("http://h/?a=1&flag&&b=");
        assert_eq!(
            resolver.list(Field::QueryList),
            vec!["a=1", "flag", "", "b="]
        );

        let mut resolver = FieldResolver::new("http://h/");
        assert_eq!(resolver.list(Field::QueryList), vec![""]);
    }

    #[test]
    fn test_query_object_drops_incomplete_entries() {
        let map = object("http://h/?a=1&flag&=2&b=&c=3");
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a"), Some("1"));
        assert_eq!(map.get("c"), Some("3"));
        assert!(!map.contains_key("flag"));
        assert!(!map.contains_key("b"));
        assert!(!map.contains_key(""));
    }

    #[test]
    fn test_query_object_last_value_wins() {
        let map = object("http://h/?a=1&b=2&a=3");
        assert_eq!(map.get("a"), Some("3"));
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_query_object_splits_at_first_equals() {
        let map = object("http://h/?token=abc==&expr=a=b");
        assert_eq!(map.get("token"), Some("abc=="));
        assert_eq!(map.get("expr"), Some("a=b"));
    }

    #[test]
    fn test_query_object_is_not_decoded() {
        let map = object("http://h/?q=hello%20world&r=a+b");
        assert_eq!(map.get("q"), Some("hello%20world"));
        assert_eq!(map.get("r"), Some("a+b"));
    }

    #[test]
    fn test_fragment() {
        assert_eq!(text("http://h/p?x=1#frag", Field::Fragment), "frag");
        assert_eq!(text("http://h/p#a#b", Field::Fragment), "a#b");
        assert_eq!(text("http://h/p#", Field::Fragment), "");
        assert_eq!(text("http://h/p", Field::Fragment), "");
        assert_eq!(text("http://h#frag", Field::Fragment), "");
    }
}
