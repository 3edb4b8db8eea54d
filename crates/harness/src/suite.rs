//! Suites: ordered cases plus lifecycle hooks
//!
//! A [`Suite`] owns an ordered sequence of [`TestCase`]s and four optional
//! hook slots. Annotated lifecycle methods in other frameworks become
//! explicit function references registered on the builder; the runner calls
//! them in a fixed order with no reflection involved.

use std::fmt;
use std::sync::Arc;

use crate::case::TestCase;
use crate::error::TestFailure;

/// Shared hook action: completes, or fails with an assertion failure
pub type HookAction = Arc<dyn Fn() -> Result<(), TestFailure> + Send + Sync>;

/// The four hook slots of a suite
#[derive(Clone, Default)]
pub(crate) struct Hooks {
    pub(crate) before_all: Option<HookAction>,
    pub(crate) before_each: Option<HookAction>,
    pub(crate) after_each: Option<HookAction>,
    pub(crate) after_all: Option<HookAction>,
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("before_all", &self.before_all.is_some())
            .field("before_each", &self.before_each.is_some())
            .field("after_each", &self.after_each.is_some())
            .field("after_all", &self.after_all.is_some())
            .finish()
    }
}

/// An ordered collection of test cases plus lifecycle hooks
///
/// Read-only during a run. Cases and hooks are stored behind [`Arc`], so
/// group-filtered views share them with the original suite.
///
/// # Examples
///
/// ```
/// use sitkit_harness::{Suite, TestCase};
///
/// let suite = Suite::builder("arithmetic")
///     .case(TestCase::new("adds", || Ok(())).in_group("smoke"))
///     .case(TestCase::new("multiplies", || Ok(())))
///     .build();
///
/// assert_eq!(suite.len(), 2);
/// assert_eq!(suite.filter_by_group("smoke").len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Suite {
    name: String,
    cases: Vec<TestCase>,
    hooks: Hooks,
}

impl Suite {
    /// Start building a suite with the given name
    pub fn builder(name: impl Into<String>) -> SuiteBuilder {
        SuiteBuilder { name: name.into(), cases: Vec::new(), hooks: Hooks::default() }
    }

    /// The suite name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The cases in declaration order
    #[must_use]
    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    /// Number of cases
    #[must_use]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Whether the suite has no cases
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// A new suite holding only the cases tagged with `group`
    ///
    /// Relative case order and all four hook slots are preserved unchanged.
    #[must_use]
    pub fn filter_by_group(&self, group: &str) -> Self {
        Self {
            name: self.name.clone(),
            cases: self.cases.iter().filter(|case| case.has_group(group)).cloned().collect(),
            hooks: self.hooks.clone(),
        }
    }

    pub(crate) fn before_all(&self) -> Option<&HookAction> {
        self.hooks.before_all.as_ref()
    }

    pub(crate) fn before_each(&self) -> Option<&HookAction> {
        self.hooks.before_each.as_ref()
    }

    pub(crate) fn after_each(&self) -> Option<&HookAction> {
        self.hooks.after_each.as_ref()
    }

    pub(crate) fn after_all(&self) -> Option<&HookAction> {
        self.hooks.after_all.as_ref()
    }
}

/// Fluent builder for [`Suite`]
#[must_use = "call build() to obtain the suite"]
pub struct SuiteBuilder {
    name: String,
    cases: Vec<TestCase>,
    hooks: Hooks,
}

impl SuiteBuilder {
    /// Append a case; declaration order is execution order
    pub fn case(mut self, case: TestCase) -> Self {
        self.cases.push(case);
        self
    }

    /// Append several cases at once
    pub fn cases<I>(mut self, cases: I) -> Self
    where
        I: IntoIterator<Item = TestCase>,
    {
        self.cases.extend(cases);
        self
    }

    /// Register the suite setup hook, run once before any case
    pub fn before_all(
        mut self,
        hook: impl Fn() -> Result<(), TestFailure> + Send + Sync + 'static,
    ) -> Self {
        self.hooks.before_all = Some(Arc::new(hook));
        self
    }

    /// Register the per-case setup hook
    pub fn before_each(
        mut self,
        hook: impl Fn() -> Result<(), TestFailure> + Send + Sync + 'static,
    ) -> Self {
        self.hooks.before_each = Some(Arc::new(hook));
        self
    }

    /// Register the per-case teardown hook
    pub fn after_each(
        mut self,
        hook: impl Fn() -> Result<(), TestFailure> + Send + Sync + 'static,
    ) -> Self {
        self.hooks.after_each = Some(Arc::new(hook));
        self
    }

    /// Register the suite teardown hook, run once after all cases
    pub fn after_all(
        mut self,
        hook: impl Fn() -> Result<(), TestFailure> + Send + Sync + 'static,
    ) -> Self {
        self.hooks.after_all = Some(Arc::new(hook));
        self
    }

    /// Finish the suite
    pub fn build(self) -> Suite {
        Suite { name: self.name, cases: self.cases, hooks: self.hooks }
    }
}

impl fmt::Debug for SuiteBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuiteBuilder")
            .field("name", &self.name)
            .field("cases", &self.cases.len())
            .field("hooks", &self.hooks)
            .finish()
    }
}
