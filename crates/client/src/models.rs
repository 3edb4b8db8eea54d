//! Resource models
//!
//! Plain data holders mirroring the user API's wire shapes. Every field is
//! optional, settable fluently, and retrievable unchanged; serialization
//! skips unset fields.

use serde::{Deserialize, Serialize};

/// A user resource
///
/// # Examples
///
/// ```
/// use sitkit_client::User;
///
/// let user = User::new()
///     .with_id("123")
///     .with_email("test@example.com")
///     .with_first_name("John")
///     .with_last_name("Doe");
///
/// assert_eq!(user.id.as_deref(), Some("123"));
/// assert_eq!(user.email.as_deref(), Some("test@example.com"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Given name
    #[serde(rename = "firstName", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Family name
    #[serde(rename = "lastName", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl User {
    /// Empty user with no fields set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the identifier
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the email address
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the given name
    #[must_use]
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    /// Set the family name
    #[must_use]
    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }
}

/// Request body for creating a user
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CreateUserRequest {
    /// Email address for the new account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Given name
    #[serde(rename = "firstName", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Family name
    #[serde(rename = "lastName", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl CreateUserRequest {
    /// Empty request with no fields set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the email address
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the given name
    #[must_use]
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    /// Set the family name
    #[must_use]
    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }
}
