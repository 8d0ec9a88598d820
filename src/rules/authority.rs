use crate::compat::{String, ToString, Vec};
use crate::field::Field;
use crate::helpers::{
    after_byte, before_byte, split_all, split_once_byte, split_once_str, strip_joined,
};
use crate::resolver::FieldResolver;

/// Text before the first `"://"`, if anything follows it
pub fn protocol(input: &str) -> String {
    match split_once_str(input, "://") {
        (protocol, Some(rest)) if !rest.is_empty() => protocol.to_string(),
        _ => String::new(),
    }
}

/// Credentials in front of the first `@`, e.g. `user:pass`
pub fn authorization(resolver: &mut FieldResolver<'_>) -> String {
    let protocol = resolver.text(Field::Protocol);
    let mut rest = resolver.input();
    if !protocol.is_empty() {
        rest = strip_joined(rest, &protocol, "://");
    }

    match split_once_byte(rest, b'@') {
        (authorization, Some(after)) if !after.is_empty() => authorization.to_string(),
        _ => String::new(),
    }
}

pub fn username(resolver: &mut FieldResolver<'_>) -> String {
    let authorization = resolver.text(Field::Authorization);
    before_byte(&authorization, b':').to_string()
}

pub fn password(resolver: &mut FieldResolver<'_>) -> String {
    let authorization = resolver.text(Field::Authorization);
    after_byte(&authorization, b':')
        .unwrap_or_default()
        .to_string()
}

/// Host name without credentials, port or path
pub fn domain(resolver: &mut FieldResolver<'_>) -> String {
    let protocol = resolver.text(Field::Protocol);
    let authorization = resolver.text(Field::Authorization);

    let mut rest = resolver.input();
    if !protocol.is_empty() {
        rest = strip_joined(rest, &protocol, "://");
    }
    if !authorization.is_empty() {
        rest = strip_joined(rest, &authorization, "@");
    }

    before_byte(before_byte(rest, b'/'), b':').to_string()
}

/// Domain labels from left to right
pub fn domain_list(resolver: &mut FieldResolver<'_>) -> Vec<String> {
    let domain = resolver.text(Field::Domain);
    split_all(&domain, b'.')
}

/// Domain labels from the top level down
pub fn domain_levels(resolver: &mut FieldResolver<'_>) -> Vec<String> {
    let mut levels = resolver.list(Field::DomainList);
    levels.reverse();
    levels
}

/// Port digits between the domain and the path, kept as text
pub fn port(resolver: &mut FieldResolver<'_>) -> String {
    let protocol = resolver.text(Field::Protocol);
    let authorization = resolver.text(Field::Authorization);

    // Prefixes are stripped even when empty, a bare leading "://" or "@" goes too
    let rest = strip_joined(resolver.input(), &protocol, "://");
    let rest = strip_joined(rest, &authorization, "@");

    after_byte(before_byte(rest, b'/'), b':')
        .unwrap_or_default()
        .to_string()
}
