//! Named, grouped test cases
//!
//! A [`TestCase`] pairs a name with a no-argument action and a set of group
//! tags. Group tags are plain strings ("smoke", "integration") used by
//! [`Suite::filter_by_group`](crate::Suite::filter_by_group) to select
//! subsets of a suite.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use crate::error::TestFailure;

/// Shared case action: completes, or fails with an assertion failure
pub type CaseAction = Arc<dyn Fn() -> Result<(), TestFailure> + Send + Sync>;

/// A single named test action with group tags
///
/// Actions are stored behind [`Arc`] so a case can be shared between a suite
/// and its group-filtered views without re-registering the closure.
///
/// # Examples
///
/// ```
/// use sitkit_harness::TestCase;
///
/// let case = TestCase::new("adds_numbers", || Ok(())).in_group("smoke");
/// assert_eq!(case.name(), "adds_numbers");
/// assert!(case.has_group("smoke"));
/// assert!(!case.has_group("integration"));
/// ```
#[derive(Clone)]
pub struct TestCase {
    name: String,
    groups: BTreeSet<String>,
    action: CaseAction,
}

impl TestCase {
    /// Create a case from a name and a no-argument action
    pub fn new(
        name: impl Into<String>,
        action: impl Fn() -> Result<(), TestFailure> + Send + Sync + 'static,
    ) -> Self {
        Self { name: name.into(), groups: BTreeSet::new(), action: Arc::new(action) }
    }

    /// Tag the case with a group
    #[must_use]
    pub fn in_group(mut self, group: impl Into<String>) -> Self {
        self.groups.insert(group.into());
        self
    }

    /// Tag the case with several groups at once
    #[must_use]
    pub fn in_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups.extend(groups.into_iter().map(Into::into));
        self
    }

    /// The case name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The case's group tags
    #[must_use]
    pub fn groups(&self) -> &BTreeSet<String> {
        &self.groups
    }

    /// Whether the case carries the given group tag
    #[must_use]
    pub fn has_group(&self, group: &str) -> bool {
        self.groups.contains(group)
    }

    /// Run the case body once
    pub fn execute(&self) -> Result<(), TestFailure> {
        (self.action)()
    }
}

impl fmt::Debug for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase")
            .field("name", &self.name)
            .field("groups", &self.groups)
            .finish_non_exhaustive()
    }
}
