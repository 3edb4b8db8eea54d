//! Client configuration
//!
//! [`ApiClient`] carries the connection configuration shared by the API
//! surfaces. It performs no I/O; values set on it are retrievable unchanged.

use url::Url;

use crate::error::{ClientError, ClientResult};

/// Default base path used by [`ApiClient::new`]
pub const DEFAULT_BASE_PATH: &str = "https://api.example.com/v1";

/// Connection configuration for the generated API surfaces
///
/// # Examples
///
/// ```
/// use sitkit_client::ApiClient;
///
/// let client = ApiClient::with_base_path("https://api.example.com/v1")?;
/// assert_eq!(client.base_path(), "https://api.example.com/v1");
/// # Ok::<(), sitkit_client::ClientError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base_path: Url,
}

impl ApiClient {
    /// Client pointed at [`DEFAULT_BASE_PATH`]
    #[must_use]
    pub fn new() -> Self {
        // The default constant is a valid absolute URL; parsing it cannot
        // fail, so the fallible path is reserved for caller-supplied values.
        #[allow(clippy::expect_used)]
        let base_path = Url::parse(DEFAULT_BASE_PATH).expect("default base path is valid");
        Self { base_path }
    }

    /// Client pointed at a caller-supplied base path
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBasePath`] when the value is not an
    /// absolute URL.
    pub fn with_base_path(base_path: impl AsRef<str>) -> ClientResult<Self> {
        let raw = base_path.as_ref();
        let parsed = Url::parse(raw).map_err(|source| ClientError::InvalidBasePath {
            base_path: raw.to_string(),
            source,
        })?;
        Ok(Self { base_path: parsed })
    }

    /// Replace the base path on an existing client
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBasePath`] when the value is not an
    /// absolute URL; the existing base path is left unchanged.
    pub fn set_base_path(&mut self, base_path: impl AsRef<str>) -> ClientResult<()> {
        let raw = base_path.as_ref();
        self.base_path = Url::parse(raw).map_err(|source| ClientError::InvalidBasePath {
            base_path: raw.to_string(),
            source,
        })?;
        Ok(())
    }

    /// The configured base path, without a trailing slash
    #[must_use]
    pub fn base_path(&self) -> &str {
        self.base_path.as_str().trim_end_matches('/')
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
