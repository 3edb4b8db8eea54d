//! Check macros for case bodies and hooks
//!
//! Case actions return `Result<(), TestFailure>`; these macros perform a
//! comparison and early-return the failure instead of panicking, so one
//! broken check never takes down the rest of the suite.

/// Check a boolean condition inside a case body or hook
///
/// On failure, returns `Err(TestFailure)` from the enclosing function with
/// either the stringified condition or a formatted message.
///
/// # Examples
///
/// ```
/// use sitkit_harness::{check, TestCase};
///
/// let case = TestCase::new("bounds", || {
///     let value = 7;
///     check!(value < 10);
///     check!(value > 0, "value {value} must be positive");
///     Ok(())
/// });
/// assert!(case.execute().is_ok());
/// ```
#[macro_export]
macro_rules! check {
    ($cond:expr) => {
        if !$cond {
            return Err($crate::TestFailure::new(concat!("check failed: ", stringify!($cond))));
        }
    };
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            return Err($crate::TestFailure::new(format!($($arg)+)));
        }
    };
}

/// Check two values for equality inside a case body or hook
///
/// # Examples
///
/// ```
/// use sitkit_harness::{check_eq, TestCase};
///
/// let case = TestCase::new("sum", || {
///     check_eq!(2 + 2, 5);
///     Ok(())
/// });
/// let failure = case.execute().unwrap_err();
/// assert!(failure.message().contains("4"));
/// assert!(failure.message().contains("5"));
/// ```
#[macro_export]
macro_rules! check_eq {
    ($left:expr, $right:expr $(,)?) => {{
        let (left, right) = (&$left, &$right);
        if left != right {
            return Err($crate::TestFailure::new(format!(
                "check_eq failed: {left:?} != {right:?}"
            )));
        }
    }};
}

/// Check two values for inequality inside a case body or hook
#[macro_export]
macro_rules! check_ne {
    ($left:expr, $right:expr $(,)?) => {{
        let (left, right) = (&$left, &$right);
        if left == right {
            return Err($crate::TestFailure::new(format!(
                "check_ne failed: both sides are {left:?}"
            )));
        }
    }};
}
