use crate::compat::{String, ToString, Vec};
use crate::field::Field;
use crate::helpers::{before_byte, split_all, split_once_byte, strip_joined};
use crate::resolver::FieldResolver;

/// Everything from the first `/` after the protocol: path, query and fragment
pub fn request(resolver: &mut FieldResolver<'_>) -> String {
    let protocol = resolver.text(Field::Protocol);
    let rest = strip_joined(resolver.input(), &protocol, "://");

    memchr::memchr(b'/', rest.as_bytes())
        .map_or_else(String::new, |pos| rest[pos..].to_string())
}

/// Request without the query
pub fn path(resolver: &mut FieldResolver<'_>) -> String {
    let request = resolver.text(Field::Request);
    before_byte(&request, b'?').to_string()
}

/// Path pieces, each but the last keeping its trailing `/`.
///
/// An empty last piece (path ends with `/`) is dropped, so concatenating the
/// list gives back the path.
pub fn path_list(resolver: &mut FieldResolver<'_>) -> Vec<String> {
    let path = resolver.text(Field::Path);
    let mut segments = split_all(&path, b'/');

    let last = segments.len().saturating_sub(1);
    for segment in &mut segments[..last] {
        segment.push('/');
    }
    if segments.last().is_some_and(String::is_empty) {
        segments.pop();
    }
    segments
}

/// Last path piece, unless the path ends in a directory.
///
/// The piece is kept whole only when the text between its first and second
/// dot is non-empty. Otherwise the file is the text before the first dot, so
/// `"name."` and `"a..b"` yield `"name"` and `"a"`.
pub fn file(resolver: &mut FieldResolver<'_>) -> String {
    let path_list = resolver.list(Field::PathList);
    let Some(last) = path_list.last() else {
        return String::new();
    };

    // Only a directory piece still carries a separator
    if last.is_empty() || last.contains('/') {
        return String::new();
    }

    match split_once_byte(last, b'.') {
        (_, Some(rest)) if !before_byte(rest, b'.').is_empty() => last.clone(),
        (stem, _) => stem.to_string(),
    }
}

/// File without its last extension; inner dots are kept (`a.tar` of `a.tar.gz`)
pub fn file_name(resolver: &mut FieldResolver<'_>) -> String {
    let file = resolver.text(Field::File);
    memchr::memrchr(b'.', file.as_bytes())
        .map_or_else(|| file.clone(), |pos| file[..pos].to_string())
}

/// Last extension of the file, without dots
pub fn file_extension(resolver: &mut FieldResolver<'_>) -> String {
    let file = resolver.text(Field::File);
    let file_name = resolver.text(Field::FileName);

    let rest = file.strip_prefix(file_name.as_str()).unwrap_or(file.as_str());
    if rest.starts_with('.') {
        rest.replace('.', "")
    } else {
        rest.to_string()
    }
}

/// Path pieces without the file
pub fn directory_list(resolver: &mut FieldResolver<'_>) -> Vec<String> {
    let mut path_list = resolver.list(Field::PathList);
    if !resolver.text(Field::File).is_empty() {
        path_list.pop();
    }
    path_list
}

/// Path without the file, ending in `/` whenever it is non-empty
pub fn directory(resolver: &mut FieldResolver<'_>) -> String {
    resolver.list(Field::DirectoryList).concat()
}
