//! Failure types for cases, hooks, and suite runs
//!
//! Two tiers, mirroring how failures are reported:
//! - [`TestFailure`]: raised by a case body or hook, recovered locally and
//!   reported as data.
//! - [`SuiteAborted`]: raised by a suite-level hook, fatal to the run and
//!   surfaced to the caller.

use std::fmt;

use thiserror::Error;

use crate::report::CaseReport;

/// An assertion failure raised by a case body or a lifecycle hook.
///
/// Always recovered by the runner and converted into report data; it never
/// crosses a case boundary.
///
/// # Examples
///
/// ```
/// use sitkit_harness::TestFailure;
///
/// let failure = TestFailure::new("expected 8, got 7");
/// assert_eq!(failure.to_string(), "expected 8, got 7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TestFailure {
    message: String,
}

impl TestFailure {
    /// Create a failure with the given message
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    /// The failure message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<String> for TestFailure {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for TestFailure {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

/// Identifies which lifecycle hook raised a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookKind {
    /// Suite setup, run once before any case
    BeforeAll,
    /// Per-case setup
    BeforeEach,
    /// Per-case teardown
    AfterEach,
    /// Suite teardown, run once after all cases
    AfterAll,
}

impl HookKind {
    /// Whether a failure in this hook aborts the whole suite run
    #[must_use]
    pub fn is_suite_level(self) -> bool {
        matches!(self, Self::BeforeAll | Self::AfterAll)
    }
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BeforeAll => write!(f, "before_all"),
            Self::BeforeEach => write!(f, "before_each"),
            Self::AfterEach => write!(f, "after_each"),
            Self::AfterAll => write!(f, "after_all"),
        }
    }
}

/// A failure raised from a lifecycle hook
///
/// Per-case hooks (`before_each`/`after_each`) are isolated to one case
/// report; suite-level hooks (`before_all`/`after_all`) escalate to
/// [`SuiteAborted`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} hook for suite '{suite}' failed: {source}")]
pub struct HookError {
    kind: HookKind,
    suite: String,
    #[source]
    source: TestFailure,
}

impl HookError {
    /// Create a hook error
    pub fn new(kind: HookKind, suite: impl Into<String>, source: TestFailure) -> Self {
        Self { kind, suite: suite.into(), source }
    }

    /// The hook that failed
    #[must_use]
    pub fn kind(&self) -> HookKind {
        self.kind
    }

    /// The suite the hook belongs to
    #[must_use]
    pub fn suite(&self) -> &str {
        &self.suite
    }

    /// The underlying failure
    #[must_use]
    pub fn failure(&self) -> &TestFailure {
        &self.source
    }
}

/// A suite run aborted by a `before_all` or `after_all` failure
///
/// Carries the per-case reports so callers still see which cases ran and
/// which were marked skipped: a `before_all` failure yields all-skipped
/// reports, an `after_all` failure yields the real case outcomes.
#[derive(Debug, Error)]
#[error("suite '{suite}' aborted: {source}")]
pub struct SuiteAborted {
    suite: String,
    reports: Vec<CaseReport>,
    #[source]
    source: HookError,
}

impl SuiteAborted {
    /// Create a suite abort from a failed suite-level hook
    pub fn new(suite: impl Into<String>, reports: Vec<CaseReport>, source: HookError) -> Self {
        Self { suite: suite.into(), reports, source }
    }

    /// The suite that aborted
    #[must_use]
    pub fn suite(&self) -> &str {
        &self.suite
    }

    /// Per-case reports produced before the abort was surfaced
    #[must_use]
    pub fn reports(&self) -> &[CaseReport] {
        &self.reports
    }

    /// Consume the abort and take the reports
    #[must_use]
    pub fn into_reports(self) -> Vec<CaseReport> {
        self.reports
    }

    /// The hook failure that caused the abort
    #[must_use]
    pub fn hook_error(&self) -> &HookError {
        &self.source
    }
}
