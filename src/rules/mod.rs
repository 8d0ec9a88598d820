//! Derivation rules, one function per [`Field`].
//!
//! Rules read the raw input and the values of the fields they depend on
//! through the resolver. All splits are literal and operate on the
//! undecoded string. No rule fails: a missing separator yields an empty value.

mod authority;
mod path;
mod query;

use crate::field::Field;
use crate::resolver::FieldResolver;
use crate::types::FieldValue;

/// Run the rule of `field`
pub(crate) fn derive(field: Field, resolver: &mut FieldResolver<'_>) -> FieldValue {
    match field {
        Field::Protocol => authority::protocol(resolver.input()).into(),
        Field::Authorization => authority::authorization(resolver).into(),
        Field::Username => authority::username(resolver).into(),
        Field::Password => authority::password(resolver).into(),
        Field::Domain => authority::domain(resolver).into(),
        Field::DomainList => authority::domain_list(resolver).into(),
        Field::DomainLevels => authority::domain_levels(resolver).into(),
        Field::Port => authority::port(resolver).into(),
        Field::Request => path::request(resolver).into(),
        Field::Path => path::path(resolver).into(),
        Field::PathList => path::path_list(resolver).into(),
        Field::File => path::file(resolver).into(),
        Field::FileName => path::file_name(resolver).into(),
        Field::FileExtension => path::file_extension(resolver).into(),
        Field::DirectoryList => path::directory_list(resolver).into(),
        Field::Directory => path::directory(resolver).into(),
        Field::Query => query::query(resolver).into(),
        Field::QueryList => query::query_list(resolver).into(),
        Field::QueryObject => query::query_object(resolver).into(),
        Field::Fragment => query::fragment(resolver).into(),
    }
}
