#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod error;
mod field;
mod helpers;
mod query_map;
mod request_context;
mod resolver;
mod rules;
mod types;
mod url_split;

// Public API
pub use error::SplitError;
pub use field::{Field, UnknownField};
pub use query_map::QueryMap;
#[cfg(feature = "std")]
pub use request_context::EnvRequestContext;
pub use request_context::RequestContext;
pub use resolver::FieldResolver;
pub use types::FieldValue;
pub use url_split::UrlSplit;

pub type Result<T> = core::result::Result<T, SplitError>;
