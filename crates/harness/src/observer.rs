//! Injected run observation
//!
//! Components report run progress through a [`RunObserver`] passed to the
//! runner at construction, instead of a process-wide logger singleton. The
//! default [`TracingObserver`] forwards everything to `tracing`;
//! [`NoOpObserver`] silences a run entirely.

use std::fmt::Debug;

use crate::error::HookError;
use crate::report::{CaseReport, RunSummary};

/// Capability receiving suite and case lifecycle notifications
///
/// All methods have no-op defaults, so implementations only override the
/// notifications they care about.
pub trait RunObserver: Send + Sync + Debug {
    /// A suite run is starting
    fn suite_started(&self, _suite: &str, _cases: usize) {}

    /// A case is about to run its per-case setup
    fn case_started(&self, _suite: &str, _case: &str) {}

    /// A case finished; its report is final
    fn case_finished(&self, _suite: &str, _report: &CaseReport) {}

    /// A lifecycle hook failed
    fn hook_failed(&self, _error: &HookError) {}

    /// The suite run finished, successfully or not
    fn suite_finished(&self, _suite: &str, _summary: &RunSummary) {}
}

/// Observer that forwards every notification to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl RunObserver for TracingObserver {
    fn suite_started(&self, suite: &str, cases: usize) {
        tracing::info!(suite, cases, "suite started");
    }

    fn case_started(&self, suite: &str, case: &str) {
        tracing::debug!(suite, case, "case started");
    }

    fn case_finished(&self, suite: &str, report: &CaseReport) {
        let status = report.status().to_string();
        tracing::info!(
            suite,
            case = report.name(),
            %status,
            duration_ms = report.duration().as_millis() as u64,
            "case finished"
        );
    }

    fn hook_failed(&self, error: &HookError) {
        tracing::error!(
            suite = error.suite(),
            hook = %error.kind(),
            failure = error.failure().message(),
            "hook failed"
        );
    }

    fn suite_finished(&self, suite: &str, summary: &RunSummary) {
        tracing::info!(
            suite,
            passed = summary.passed(),
            failed = summary.failed(),
            skipped = summary.skipped(),
            duration_ms = summary.duration().as_millis() as u64,
            "suite finished"
        );
    }
}

/// Observer that drops every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpObserver;

impl RunObserver for NoOpObserver {}
