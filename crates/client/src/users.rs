//! User API surface
//!
//! [`UsersApi`] is constructed over an [`ApiClient`] and exposes pure
//! endpoint builders. There is no transport here; the surface exists so
//! consumers can verify the generated types are constructible and wired.

use crate::config::ApiClient;

/// User API surface over a configured client
///
/// # Examples
///
/// ```
/// use sitkit_client::{ApiClient, UsersApi};
///
/// let client = ApiClient::with_base_path("https://api.example.com/v1")?;
/// let users = UsersApi::new(client);
///
/// assert_eq!(users.users_endpoint(), "https://api.example.com/v1/users");
/// assert_eq!(users.user_endpoint("123"), "https://api.example.com/v1/users/123");
/// # Ok::<(), sitkit_client::ClientError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsersApi {
    client: ApiClient,
}

impl UsersApi {
    /// API surface over the given client
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// The underlying client configuration
    #[must_use]
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Endpoint for the user collection
    #[must_use]
    pub fn users_endpoint(&self) -> String {
        format!("{}/users", self.client.base_path())
    }

    /// Endpoint for a single user
    #[must_use]
    pub fn user_endpoint(&self, user_id: &str) -> String {
        format!("{}/users/{user_id}", self.client.base_path())
    }
}
