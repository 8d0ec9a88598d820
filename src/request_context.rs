use crate::compat::String;
use crate::error::{Result, SplitError};

/// Source of the URL of the request being served.
///
/// Used when no URL is given explicitly. The default URL is the host
/// followed by the request URI, so it has no protocol or credentials.
pub trait RequestContext {
    /// Host of the request, e.g. `"example.com:8080"`
    fn host(&self) -> Option<String>;

    /// Path, query and fragment of the request, e.g. `"/a/b?x=1"`
    fn request_uri(&self) -> Option<String>;

    /// Build the default URL. A missing request URI counts as empty.
    ///
    /// # Errors
    ///
    /// Returns [`SplitError::MissingHost`] when there is no host.
    fn current_url(&self) -> Result<String> {
        let mut url = self.host().ok_or(SplitError::MissingHost)?;
        if let Some(request_uri) = self.request_uri() {
            url.push_str(&request_uri);
        }
        Ok(url)
    }
}

/// Request context read from the CGI environment (`HTTP_HOST`, `REQUEST_URI`)
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvRequestContext;

#[cfg(feature = "std")]
impl EnvRequestContext {
    pub const HOST_VAR: &'static str = "HTTP_HOST";
    pub const REQUEST_URI_VAR: &'static str = "REQUEST_URI";
}

#[cfg(feature = "std")]
impl RequestContext for EnvRequestContext {
    fn host(&self) -> Option<String> {
        std::env::var(Self::HOST_VAR)
            .ok()
            .filter(|host| !host.is_empty())
    }

    fn request_uri(&self) -> Option<String> {
        std::env::var(Self::REQUEST_URI_VAR).ok()
    }
}
