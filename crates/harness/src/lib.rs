//! Deterministic test-fixture harness.
//!
//! Executes a [`Suite`] of named, grouped [`TestCase`]s in a single linear
//! pass — suite setup, per-case setup, case body, per-case teardown, suite
//! teardown — and produces one [`CaseReport`] per case in declaration order.
//!
//! # Guarantees
//!
//! - `before_all` runs exactly once before any case; `after_all` exactly
//!   once after all cases, even when something failed.
//! - `before_each`/`after_each` run exactly once per case, regardless of the
//!   case's outcome.
//! - One case's assertion failure never aborts the remaining cases.
//! - A `before_all`/`after_all` failure is fatal: the run surfaces
//!   [`SuiteAborted`] after best-effort cleanup, with the per-case reports
//!   attached.
//!
//! # Example
//!
//! ```
//! use sitkit_harness::{check_eq, Runner, Suite, TestCase};
//!
//! let suite = Suite::builder("arithmetic")
//!     .before_each(|| Ok(()))
//!     .case(TestCase::new("adds", || {
//!         check_eq!(2 + 3, 5);
//!         Ok(())
//!     })
//!     .in_group("smoke"))
//!     .build();
//!
//! let reports = Runner::new().run_suite(&suite)?;
//! assert!(reports.iter().all(|r| r.status().is_passed()));
//! # Ok::<(), sitkit_harness::SuiteAborted>(())
//! ```

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]

pub mod capture;
pub mod case;
pub mod clock;
pub mod error;
pub mod macros;
pub mod observer;
pub mod report;
pub mod runner;
pub mod suite;

// Re-export the working surface at the crate root
pub use capture::OutputCapture;
pub use case::{CaseAction, TestCase};
pub use clock::{Clock, MockClock, SystemClock};
pub use error::{HookError, HookKind, SuiteAborted, TestFailure};
pub use observer::{NoOpObserver, RunObserver, TracingObserver};
pub use report::{CaseReport, CaseStatus, RunSummary};
pub use runner::Runner;
pub use suite::{HookAction, Suite, SuiteBuilder};
