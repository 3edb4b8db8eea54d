//! System-integration-test toolkit.
//!
//! Bundles the fixture harness with the collaborators the integration
//! suites exercise:
//! - **[`SitHelper`]**: mock API helper with deterministic responses and
//!   call recording
//! - **[`Calculator`]**: integer arithmetic collaborator
//! - re-exported harness surface (`Suite`, `TestCase`, `Runner`, reports)
//! - re-exported client stubs (`ApiClient`, `UsersApi`, models)
//!
//! # Example
//!
//! ```
//! use sitkit::{Runner, SitHelper, Suite, TestCase};
//!
//! let helper = SitHelper::new();
//! let helper_in_case = helper.clone();
//!
//! let suite = Suite::builder("smoke")
//!     .case(TestCase::new("api_echoes_endpoint", move || {
//!         let response = helper_in_case.call("/api/test");
//!         sitkit::check!(response.contains("/api/test"));
//!         Ok(())
//!     }))
//!     .build();
//!
//! let reports = Runner::new().run_suite(&suite)?;
//! assert!(reports[0].status().is_passed());
//! assert!(helper.was_called("/api/test"));
//! # Ok::<(), sitkit::SuiteAborted>(())
//! ```

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]

pub mod calculator;
pub mod helper;

pub use calculator::Calculator;
pub use helper::SitHelper;

// Harness surface
pub use sitkit_harness::{
    check, check_eq, check_ne, CaseReport, CaseStatus, Clock, HookError, HookKind, MockClock,
    NoOpObserver, OutputCapture, RunObserver, RunSummary, Runner, Suite, SuiteAborted,
    SuiteBuilder, SystemClock, TestCase, TestFailure, TracingObserver,
};

// Client stubs
pub use sitkit_client::{
    ApiClient, ClientError, ClientResult, CreateUserRequest, User, UsersApi, DEFAULT_BASE_PATH,
};
