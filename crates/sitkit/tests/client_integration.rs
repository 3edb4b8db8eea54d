//! Client-stub integration tests
//!
//! Verifies the generated-style client symbols are accessible and behave as
//! pure data holders, driven through the fixture harness the way the other
//! integration suites run.

use std::sync::Arc;

use anyhow::Result;
use sitkit::{
    check, check_eq, ApiClient, CreateUserRequest, NoOpObserver, Runner, Suite, TestCase, User,
    UsersApi,
};

fn quiet_runner() -> Runner {
    Runner::new().with_observer(Arc::new(NoOpObserver))
}

/// Validates client construction and model round-trips inside a harness
/// suite, mirroring how a consumer checks a freshly generated client.
///
/// # Test Steps
/// 1. Configure an `ApiClient` in `before_all`-style case setup
/// 2. Verify `UsersApi` is constructible over it
/// 3. Verify `User` and `CreateUserRequest` return set values unchanged
#[test]
fn test_client_suite() {
    let suite = Suite::builder("user_api_client")
        .case(
            TestCase::new("client_classes_accessible", || {
                let client = ApiClient::with_base_path("https://api.example.com/v1")
                    .map_err(|e| sitkit::TestFailure::new(e.to_string()))?;
                let users = UsersApi::new(client);
                check_eq!(users.users_endpoint(), "https://api.example.com/v1/users");
                Ok(())
            })
            .in_group("integration"),
        )
        .case(
            TestCase::new("model_classes_accessible", || {
                let user = User::new()
                    .with_id("123")
                    .with_email("test@example.com")
                    .with_first_name("John")
                    .with_last_name("Doe");

                check_eq!(user.id.as_deref(), Some("123"));
                check_eq!(user.email.as_deref(), Some("test@example.com"));
                check_eq!(user.first_name.as_deref(), Some("John"));
                check_eq!(user.last_name.as_deref(), Some("Doe"));

                let request = CreateUserRequest::new()
                    .with_email("newuser@example.com")
                    .with_first_name("Jane")
                    .with_last_name("Smith");

                check_eq!(request.email.as_deref(), Some("newuser@example.com"));
                check_eq!(request.first_name.as_deref(), Some("Jane"));
                check_eq!(request.last_name.as_deref(), Some("Smith"));
                Ok(())
            })
            .in_group("integration"),
        )
        .build();

    let reports = quiet_runner().run_suite(&suite).expect("no suite hooks");
    assert_eq!(reports.len(), 2);
    assert!(reports.iter().all(|r| r.status().is_passed()));
}

/// Validates endpoint construction against a resource identifier.
///
/// # Test Steps
/// 1. Point the client at a staging base path
/// 2. Verify single-resource endpoints embed the identifier
#[test]
fn test_user_endpoint_construction() -> Result<()> {
    let client = ApiClient::with_base_path("https://staging.example.com/v2")?;
    let users = UsersApi::new(client);

    assert_eq!(users.user_endpoint("123"), "https://staging.example.com/v2/users/123");
    Ok(())
}

/// Validates base-path misconfiguration is rejected before any suite runs.
///
/// # Test Steps
/// 1. Attempt to configure a client with a relative path
/// 2. Verify the error names the rejected value
#[test]
fn test_invalid_base_path_is_rejected() {
    let err = ApiClient::with_base_path("/just/a/path").unwrap_err();
    assert!(err.to_string().contains("/just/a/path"));
}

/// Validates a defensive re-initialization path: a case can rebuild its own
/// client when suite setup did not provide one.
///
/// # Test Steps
/// 1. Build a case that constructs a default client inline
/// 2. Verify the default base path is wired
#[test]
fn test_default_client_inside_case() {
    let suite = Suite::builder("defensive")
        .case(TestCase::new("rebuilds_client", || {
            let users = UsersApi::new(ApiClient::new());
            check!(users.users_endpoint().starts_with(sitkit::DEFAULT_BASE_PATH));
            Ok(())
        }))
        .build();

    let reports = quiet_runner().run_suite(&suite).expect("no suite hooks");
    assert!(reports[0].status().is_passed());
}
