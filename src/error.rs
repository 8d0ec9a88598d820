/// Errors that can occur while obtaining the input of a split.
///
/// Splitting itself never fails: every field degrades to an empty value.
/// These variants cover the boundary only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitError {
    /// Input bytes are not valid UTF-8
    InvalidUtf8,
    /// The request context has no host to build a default URL from
    MissingHost,
}

impl core::fmt::Display for SplitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::InvalidUtf8 => "URL input is not valid UTF-8",
            Self::MissingHost => "Request context has no host",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SplitError {}

/// Result type for URL split operations
pub type Result<T> = core::result::Result<T, SplitError>;
