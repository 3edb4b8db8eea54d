//! Client configuration errors

use thiserror::Error;

/// Errors raised while configuring the client
#[derive(Debug, Error)]
pub enum ClientError {
    /// The configured base path is not a valid absolute URL
    #[error("invalid base path '{base_path}': {source}")]
    InvalidBasePath {
        /// The rejected value
        base_path: String,
        /// The parse failure
        #[source]
        source: url::ParseError,
    },
}

/// Result type alias for client operations
pub type ClientResult<T> = std::result::Result<T, ClientError>;
