/// Base URL used when no deployment-specific context is supplied.
pub const DEFAULT_BASE_URL: &str = "http://twitter.com";

/// Deployment-specific link targets.
///
/// The original output hardcoded its host into every href; here the base is
/// injected so the resolver stays parametrizable per deployment. The
/// defaults reproduce the observed output byte-for-byte.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderContext {
    base_url: String,
    default_handle: Option<String>,
}

impl RenderContext {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            default_handle: None,
        }
    }

    /// Handle to fall back on when composing a permalink for a post whose
    /// author is unknown.
    pub fn with_default_handle(mut self, handle: impl Into<String>) -> Self {
        self.default_handle = Some(handle.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn default_handle(&self) -> Option<&str> {
        self.default_handle.as_deref()
    }

    /// Profile page for a user handle.
    pub fn profile_url(&self, handle: &str) -> String {
        format!("{}/{}", self.base_url, handle)
    }

    /// Search page for a hashtag. The `#` is percent-encoded as `%23`; the
    /// tag text itself is passed through untouched.
    pub fn hashtag_search_url(&self, tag: &str) -> String {
        format!("{}/#search/%23{}", self.base_url, tag)
    }

    /// Permalink for a single post.
    pub fn status_url(&self, handle: &str, id: &str) -> String {
        format!("{}/{}/status/{}", self.base_url, handle, id)
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
