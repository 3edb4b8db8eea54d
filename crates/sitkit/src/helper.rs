//! Mock API helper for integration suites
//!
//! [`SitHelper`] simulates REST calls with deterministic responses and
//! records every endpoint it is asked for, so suites can verify interaction
//! counts without any network involvement.

// Mutex poisoning in a test helper means a test already panicked.
#![allow(clippy::expect_used)]

use std::sync::{Arc, Mutex};

type CallLog = Arc<Mutex<Vec<String>>>;

/// Simulated API collaborator with call recording
///
/// Clones share the same call log, so a helper captured by several case
/// closures still counts as one collaborator.
///
/// # Examples
///
/// ```
/// use sitkit::SitHelper;
///
/// let helper = SitHelper::new();
/// let response = helper.call("/api/test");
///
/// assert!(response.contains("/api/test"));
/// assert!(helper.validate(Some(&response)));
/// assert!(helper.was_called("/api/test"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SitHelper {
    calls: CallLog,
}

impl SitHelper {
    /// Helper with an empty call log
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate a REST call, returning a deterministic placeholder response
    ///
    /// The response always contains the endpoint, so callers can assert on
    /// it without caring about the rest of the text.
    pub fn call(&self, endpoint: &str) -> String {
        tracing::info!(endpoint, "calling API endpoint");
        self.calls.lock().expect("call log poisoned").push(endpoint.to_string());
        format!("Mock response from {endpoint}")
    }

    /// Validate a response: present and non-empty
    #[must_use]
    pub fn validate(&self, response: Option<&str>) -> bool {
        response.is_some_and(|r| !r.is_empty())
    }

    /// All endpoints called, in call order
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("call log poisoned").clone()
    }

    /// Number of calls made to an endpoint
    #[must_use]
    pub fn call_count(&self, endpoint: &str) -> usize {
        self.calls.lock().expect("call log poisoned").iter().filter(|e| *e == endpoint).count()
    }

    /// Whether the endpoint was called at least once
    #[must_use]
    pub fn was_called(&self, endpoint: &str) -> bool {
        self.call_count(endpoint) > 0
    }

    /// Forget all recorded calls
    pub fn clear_calls(&self) {
        self.calls.lock().expect("call log poisoned").clear();
    }

    /// Prepare test data before a suite runs
    pub fn setup_test_data(&self) {
        tracing::info!("setting up test data");
        self.clear_calls();
    }

    /// Drop test data after a suite finishes
    pub fn cleanup_test_data(&self) {
        tracing::info!("cleaning up test data");
        self.clear_calls();
    }
}
