//! Suite execution
//!
//! [`Runner::run_suite`] performs a single linear pass over a suite:
//! `before_all`, then per case `before_each` / body / `after_each`, then
//! `after_all`. No state machine, no parallelism; cases run strictly in
//! declaration order.

use std::fmt;
use std::sync::Arc;

use crate::capture::OutputCapture;
use crate::case::TestCase;
use crate::clock::{Clock, SystemClock};
use crate::error::{HookError, HookKind, SuiteAborted};
use crate::observer::{RunObserver, TracingObserver};
use crate::report::{CaseReport, CaseStatus, RunSummary};
use crate::suite::Suite;

/// Executes suites and produces one report per case
///
/// Construction injects the observation, timing, and capture capabilities;
/// the defaults are a [`TracingObserver`], the real [`SystemClock`], and a
/// fresh [`OutputCapture`].
///
/// # Examples
///
/// ```
/// use sitkit_harness::{Runner, Suite, TestCase};
///
/// let suite = Suite::builder("arithmetic")
///     .case(TestCase::new("adds", || Ok(())))
///     .build();
///
/// let reports = Runner::new().run_suite(&suite)?;
/// assert_eq!(reports.len(), 1);
/// assert!(reports[0].status().is_passed());
/// # Ok::<(), sitkit_harness::SuiteAborted>(())
/// ```
pub struct Runner {
    observer: Arc<dyn RunObserver>,
    clock: Arc<dyn Clock>,
    capture: OutputCapture,
}

impl Default for Runner {
    fn default() -> Self {
        Self {
            observer: Arc::new(TracingObserver),
            clock: Arc::new(SystemClock),
            capture: OutputCapture::new(),
        }
    }
}

impl Runner {
    /// Runner with the default observer, clock, and capture buffer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the run observer
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn RunObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Replace the clock
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the capture buffer
    #[must_use]
    pub fn with_capture(mut self, capture: OutputCapture) -> Self {
        self.capture = capture;
        self
    }

    /// Handle to the capture buffer, for case closures to write into
    #[must_use]
    pub fn capture(&self) -> OutputCapture {
        self.capture.clone()
    }

    /// Execute a suite and return one report per case, in declaration order
    ///
    /// `before_all` runs exactly once before any case; `after_all` runs
    /// exactly once afterwards, even when a case or `before_all` failed. A
    /// failure in either suite-level hook aborts the run: the returned
    /// [`SuiteAborted`] carries the per-case reports (all skipped for a
    /// `before_all` failure, the real outcomes for an `after_all` failure).
    ///
    /// # Errors
    ///
    /// Returns [`SuiteAborted`] when `before_all` or `after_all` fails.
    /// Case-level failures never surface here; they are recorded in the
    /// corresponding [`CaseReport`].
    pub fn run_suite(&self, suite: &Suite) -> Result<Vec<CaseReport>, SuiteAborted> {
        let started = self.clock.now();
        self.observer.suite_started(suite.name(), suite.len());
        // Stale lines from an earlier run must not leak into the first case.
        self.capture.clear();

        if let Some(hook) = suite.before_all() {
            if let Err(failure) = hook() {
                let error = HookError::new(HookKind::BeforeAll, suite.name(), failure);
                self.observer.hook_failed(&error);
                return Err(self.abort(suite, error, started));
            }
        }

        let mut reports = Vec::with_capacity(suite.len());
        for case in suite.cases() {
            reports.push(self.run_case(suite, case));
        }

        let mut abort = None;
        if let Some(hook) = suite.after_all() {
            if let Err(failure) = hook() {
                let error = HookError::new(HookKind::AfterAll, suite.name(), failure);
                self.observer.hook_failed(&error);
                abort = Some(error);
            }
        }

        let duration = self.clock.now().duration_since(started);
        let summary = RunSummary::from_reports(&reports).with_duration(duration);
        self.observer.suite_finished(suite.name(), &summary);

        match abort {
            Some(error) => Err(SuiteAborted::new(suite.name(), reports, error)),
            None => Ok(reports),
        }
    }

    /// One case: `before_each`, body, `after_each`; teardown always runs
    fn run_case(&self, suite: &Suite, case: &TestCase) -> CaseReport {
        self.observer.case_started(suite.name(), case.name());
        let started = self.clock.now();

        let setup = match suite.before_each() {
            Some(hook) => {
                hook().map_err(|f| HookError::new(HookKind::BeforeEach, suite.name(), f))
            }
            None => Ok(()),
        };

        let mut status = match setup {
            Ok(()) => match case.execute() {
                Ok(()) => CaseStatus::Passed,
                Err(failure) => CaseStatus::failed(failure.message()),
            },
            Err(error) => {
                self.observer.hook_failed(&error);
                CaseStatus::skipped(error.to_string())
            }
        };

        if let Some(hook) = suite.after_each() {
            if let Err(failure) = hook() {
                let error = HookError::new(HookKind::AfterEach, suite.name(), failure);
                self.observer.hook_failed(&error);
                // A teardown failure downgrades a pass; an earlier failure
                // or skip reason is never overwritten.
                if status.is_passed() {
                    status = CaseStatus::failed(error.to_string());
                }
            }
        }

        let duration = self.clock.now().duration_since(started);
        let report =
            CaseReport::new(case.name(), status, duration).with_output(self.capture.drain());
        self.observer.case_finished(suite.name(), &report);
        report
    }

    /// Abort after a `before_all` failure: mark every case skipped, still
    /// run `after_all` for cleanup, and keep the original error
    fn abort(&self, suite: &Suite, error: HookError, started: std::time::Instant) -> SuiteAborted {
        let reason = format!("{} hook failed", HookKind::BeforeAll);
        let reports: Vec<CaseReport> =
            suite.cases().iter().map(|case| CaseReport::skipped(case.name(), &reason)).collect();

        if let Some(hook) = suite.after_all() {
            if let Err(failure) = hook() {
                let cleanup = HookError::new(HookKind::AfterAll, suite.name(), failure);
                self.observer.hook_failed(&cleanup);
            }
        }

        let duration = self.clock.now().duration_since(started);
        let summary = RunSummary::from_reports(&reports).with_duration(duration);
        self.observer.suite_finished(suite.name(), &summary);

        SuiteAborted::new(suite.name(), reports, error)
    }
}

impl fmt::Debug for Runner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runner")
            .field("observer", &self.observer)
            .field("capture", &self.capture)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for the runner's lifecycle pass.
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::clock::MockClock;
    use crate::error::TestFailure;
    use crate::observer::NoOpObserver;

    fn quiet_runner() -> Runner {
        Runner::new().with_observer(Arc::new(NoOpObserver))
    }

    /// Validates the happy path: one report per case, declaration order.
    ///
    /// Assertions:
    /// - Confirms report count and order match the suite.
    /// - Confirms every status is `Passed`.
    #[test]
    fn test_run_suite_happy_path() {
        let suite = Suite::builder("ordered")
            .case(TestCase::new("first", || Ok(())))
            .case(TestCase::new("second", || Ok(())))
            .case(TestCase::new("third", || Ok(())))
            .build();

        let reports = quiet_runner().run_suite(&suite).expect("no suite-level hooks");
        let names: Vec<&str> = reports.iter().map(CaseReport::name).collect();
        assert_eq!(names, ["first", "second", "third"]);
        assert!(reports.iter().all(|r| r.status().is_passed()));
    }

    /// Validates case isolation: a failing case leaves its neighbours
    /// untouched.
    ///
    /// Assertions:
    /// - Confirms the {pass, fail, pass} pattern in the reports.
    /// - Confirms the failure reason is carried verbatim.
    #[test]
    fn test_failed_case_is_isolated() {
        let suite = Suite::builder("isolation")
            .case(TestCase::new("a", || Ok(())))
            .case(TestCase::new("b", || Err(TestFailure::new("assertion broke"))))
            .case(TestCase::new("c", || Ok(())))
            .build();

        let reports = quiet_runner().run_suite(&suite).expect("case failures are not fatal");
        assert!(reports[0].status().is_passed());
        assert!(reports[1].status().is_failed());
        assert_eq!(reports[1].status().reason(), Some("assertion broke"));
        assert!(reports[2].status().is_passed());
    }

    /// Validates hook cardinality across a three-case suite.
    ///
    /// Assertions:
    /// - Confirms `before_all`/`after_all` each ran once.
    /// - Confirms `before_each`/`after_each` each ran three times, despite a
    ///   failing case in the middle.
    #[test]
    fn test_hook_call_counts() {
        let before_all = Arc::new(AtomicUsize::new(0));
        let before_each = Arc::new(AtomicUsize::new(0));
        let after_each = Arc::new(AtomicUsize::new(0));
        let after_all = Arc::new(AtomicUsize::new(0));

        let (ba, be, ae, aa) =
            (before_all.clone(), before_each.clone(), after_each.clone(), after_all.clone());

        let suite = Suite::builder("counts")
            .before_all(move || {
                ba.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })
            .before_each(move || {
                be.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })
            .after_each(move || {
                ae.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })
            .after_all(move || {
                aa.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })
            .case(TestCase::new("a", || Ok(())))
            .case(TestCase::new("b", || Err(TestFailure::new("boom"))))
            .case(TestCase::new("c", || Ok(())))
            .build();

        let reports = quiet_runner().run_suite(&suite).expect("hooks succeed");
        assert_eq!(reports.len(), 3);

        assert_eq!(before_all.load(Ordering::SeqCst), 1);
        assert_eq!(before_each.load(Ordering::SeqCst), 3);
        assert_eq!(after_each.load(Ordering::SeqCst), 3);
        assert_eq!(after_all.load(Ordering::SeqCst), 1);
    }

    /// Validates the `before_all` failure policy.
    ///
    /// Assertions:
    /// - Confirms `run_suite` surfaces `SuiteAborted` naming `before_all`.
    /// - Confirms every case is reported skipped and no body ran.
    /// - Confirms `after_all` still ran once for cleanup.
    #[test]
    fn test_before_all_failure_skips_all_cases() {
        let bodies = Arc::new(AtomicUsize::new(0));
        let after_all = Arc::new(AtomicUsize::new(0));
        let (bodies_in_case, aa) = (bodies.clone(), after_all.clone());

        let suite = Suite::builder("fatal")
            .before_all(|| Err(TestFailure::new("no database")))
            .after_all(move || {
                aa.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })
            .case(TestCase::new("a", move || {
                bodies_in_case.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }))
            .case(TestCase::new("b", || Ok(())))
            .build();

        let aborted = quiet_runner().run_suite(&suite).unwrap_err();
        assert_eq!(aborted.hook_error().kind(), HookKind::BeforeAll);
        assert_eq!(aborted.reports().len(), 2);
        assert!(aborted.reports().iter().all(|r| r.status().is_skipped()));
        assert_eq!(bodies.load(Ordering::SeqCst), 0);
        assert_eq!(after_all.load(Ordering::SeqCst), 1);
    }

    /// Validates the `after_all` failure policy.
    ///
    /// Assertions:
    /// - Confirms the abort carries the real case outcomes.
    /// - Confirms the error names `after_all`.
    #[test]
    fn test_after_all_failure_keeps_real_outcomes() {
        let suite = Suite::builder("teardown")
            .after_all(|| Err(TestFailure::new("cleanup failed")))
            .case(TestCase::new("ran", || Ok(())))
            .build();

        let aborted = quiet_runner().run_suite(&suite).unwrap_err();
        assert_eq!(aborted.hook_error().kind(), HookKind::AfterAll);
        assert_eq!(aborted.reports().len(), 1);
        assert!(aborted.reports()[0].status().is_passed());
    }

    /// Validates the per-case hook policy.
    ///
    /// Assertions:
    /// - Confirms a `before_each` failure skips every body but still runs
    ///   `after_each` once per case.
    /// - Confirms the run itself is not aborted.
    #[test]
    fn test_before_each_failure_skips_case_not_suite() {
        let bodies = Arc::new(AtomicUsize::new(0));
        let after_each = Arc::new(AtomicUsize::new(0));
        let (bodies_in_case, ae) = (bodies.clone(), after_each.clone());

        let suite = Suite::builder("per_case")
            .before_each(|| Err(TestFailure::new("fixture missing")))
            .after_each(move || {
                ae.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })
            .case(TestCase::new("a", move || {
                bodies_in_case.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }))
            .case(TestCase::new("b", || Ok(())))
            .build();

        let reports = quiet_runner().run_suite(&suite).expect("per-case hooks are not fatal");
        assert!(reports.iter().all(|r| r.status().is_skipped()));
        assert_eq!(bodies.load(Ordering::SeqCst), 0);
        assert_eq!(after_each.load(Ordering::SeqCst), 2);
    }

    /// Validates that an `after_each` failure downgrades a pass but never
    /// masks a case's own failure.
    ///
    /// Assertions:
    /// - Confirms a passing case becomes `Failed` with the teardown reason.
    /// - Confirms a failing case keeps its original reason.
    #[test]
    fn test_after_each_failure_downgrades_pass_only() {
        let suite = Suite::builder("teardown_each")
            .after_each(|| Err(TestFailure::new("dangling fixture")))
            .case(TestCase::new("passing", || Ok(())))
            .case(TestCase::new("failing", || Err(TestFailure::new("own failure"))))
            .build();

        let reports = quiet_runner().run_suite(&suite).expect("per-case hooks are not fatal");

        assert!(reports[0].status().is_failed());
        let downgraded = reports[0].status().reason().expect("reason present");
        assert!(downgraded.contains("dangling fixture"));

        assert_eq!(reports[1].status().reason(), Some("own failure"));
    }

    /// Validates captured output lands on the right report.
    ///
    /// Assertions:
    /// - Confirms each case's lines end up on its own report.
    /// - Confirms no lines leak between cases.
    #[test]
    fn test_output_capture_per_case() {
        let runner = quiet_runner();
        let capture_a = runner.capture();
        let capture_b = runner.capture();

        let suite = Suite::builder("captured")
            .case(TestCase::new("a", move || {
                capture_a.write("from a");
                Ok(())
            }))
            .case(TestCase::new("b", move || {
                capture_b.write("from b");
                Ok(())
            }))
            .build();

        let reports = runner.run_suite(&suite).expect("no hooks");
        assert_eq!(reports[0].output(), ["from a".to_string()]);
        assert_eq!(reports[1].output(), ["from b".to_string()]);
    }

    /// Validates deterministic durations through an injected mock clock.
    ///
    /// Assertions:
    /// - Confirms the case duration equals the simulated advance.
    #[test]
    fn test_mock_clock_durations() {
        let clock = MockClock::new();
        let clock_in_case = clock.clone();

        let runner = quiet_runner().with_clock(Arc::new(clock.clone()));
        let suite = Suite::builder("timed")
            .case(TestCase::new("slow", move || {
                clock_in_case.advance(Duration::from_millis(40));
                Ok(())
            }))
            .build();

        let reports = runner.run_suite(&suite).expect("no hooks");
        assert_eq!(reports[0].duration(), Duration::from_millis(40));
    }

    /// Validates that an empty suite produces an empty report list.
    ///
    /// Assertions:
    /// - Confirms zero reports and a successful run.
    #[test]
    fn test_empty_suite() {
        let suite = Suite::builder("empty").build();
        let reports = quiet_runner().run_suite(&suite).expect("nothing to fail");
        assert!(reports.is_empty());
    }
}
