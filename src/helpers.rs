use crate::compat::{String, ToString, Vec};

/// Split at the first occurrence of a single-byte separator.
/// Returns (`before`, `after`), `after` is `None` when the separator is missing.
/// Optimization: Uses SIMD-accelerated memchr for the search
pub fn split_once_byte(input: &str, separator: u8) -> (&str, Option<&str>) {
    memchr::memchr(separator, input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Split at the first occurrence of a multi-byte separator such as `"://"`.
pub fn split_once_str<'a>(input: &'a str, separator: &str) -> (&'a str, Option<&'a str>) {
    memchr::memmem::find(input.as_bytes(), separator.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + separator.len()..]))
    })
}

/// Text before the first separator, or the whole input if there is none.
pub fn before_byte(input: &str, separator: u8) -> &str {
    split_once_byte(input, separator).0
}

/// Text after the first separator, only if that text is non-empty.
///
/// A trailing separator (`"user:"`) counts the same as a missing one.
pub fn after_byte(input: &str, separator: u8) -> Option<&str> {
    split_once_byte(input, separator)
        .1
        .filter(|after| !after.is_empty())
}

/// Remove a leading `{part}{separator}` from `input` if it is there, otherwise return `input`.
/// Matching is literal, no allocation of the joined prefix is needed.
pub fn strip_joined<'a>(input: &'a str, part: &str, separator: &str) -> &'a str {
    input
        .strip_prefix(part)
        .and_then(|rest| rest.strip_prefix(separator))
        .unwrap_or(input)
}

/// Split on every occurrence of `separator`, keeping empty pieces.
///
/// Splitting an empty string yields one empty element, never an empty list.
pub fn split_all(input: &str, separator: u8) -> Vec<String> {
    let mut parts = Vec::new();
    let mut start = 0;
    for pos in memchr::memchr_iter(separator, input.as_bytes()) {
        parts.push(input[start..pos].to_string());
        start = pos + 1;
    }
    parts.push(input[start..].to_string());
    parts
}
