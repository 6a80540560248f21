//! This crate helps you to write test cases made of more than one assertion. The simplest,
//! and generally the best, test case has just a single assertion; but when the test setup
//! is slow or complex (think about UI tests of a desktop application) a test case that
//! checks several things at once is often the only practical choice.
//!
//! An [`AssertionScope`] keeps track of every assertion performed in a test case and lets
//! you decide how a failing assertion affects the test:
//!
//! - stop the test case at the first failed assertion (default);
//! - execute every assertion and then fail the test case with a summary of the failed
//!   assertions ([`AssertionScope::continue_on_failure`]);
//! - execute every assertion and fail only if all of them failed
//!   ([`FailWhen::AllFailed`]).
//!
//! ## Fail fast
//!
//! Every assertion returns `Result<bool, AssertionFailure>`: an `Err` means the test case
//! must stop, so just propagate it with `?`. The scope logs the fault and returns it
//! unchanged.
//!
//! ```
//! use assert_scope::{AssertionFailure, AssertionScope};
//!
//! let outcome: Result<(), AssertionFailure> = AssertionScope::new("TC 1").run(|tc| {
//!     tc.assert_equal(1 + 1, 2, "sum")?;
//!     tc.assert_equal(2 * 2, 5, "product")?;
//!     unreachable!("the previous assertion stops the test case");
//! });
//!
//! assert_eq!(
//!     "TC 1 - assert_equal(actual=4 == expected=5) failed (product)",
//!     outcome.unwrap_err().message()
//! );
//! ```
//!
//! ## Deferred failures
//!
//! With `continue_on_failure` failed assertions are just logged and the test case goes on;
//! when the scope closes you get a single failure that summarizes all of them.
//!
//! ```
//! use assert_scope::{AssertionFailure, AssertionScope};
//!
//! let outcome: Result<(), AssertionFailure> = AssertionScope::new("TC 2")
//!     .continue_on_failure(true)
//!     .run(|tc| {
//!         for num in 0..10 {
//!             tc.assert_equal(num % 2, 0, format!("{num} not even"))?;
//!         }
//!         tc.assert_equal(3, 4, ())?;
//!         Ok(())
//!     });
//!
//! assert_eq!(
//!     "TC 2 failed: assertions failed=6, passed=5",
//!     outcome.unwrap_err().to_string()
//! );
//! ```
//!
//! An assertion created with [`AssertOptions::force_fail`] stops the test case even if the
//! scope continues on failures.
//!
//! ## Your own errors
//!
//! The body can return any error type that can be built from an [`AssertionFailure`] and
//! displayed: your faults are logged and passed through untouched. [`Fault`] is a ready
//! made one.
//!
//! ```
//! use assert_scope::{AssertionScope, Fault};
//!
//! let outcome: Result<(), Fault> = AssertionScope::new("TC 3").run(|tc| {
//!     let value: u32 = "not a number".parse().map_err(Fault::propagated)?;
//!     tc.assert_equal(value, 42, ())?;
//!     Ok(())
//! });
//!
//! assert!(!outcome.unwrap_err().is_assertion());
//! ```
//!
//! ## Identity
//!
//! [`AssertionScope::assert_is`] checks identity instead of equality: plain values like
//! `bool` are identical when they hold the same value, references and smart pointers only
//! when they point to the same object. See [`Identity`].

mod config;
mod error;
mod identity;
pub mod report;
mod scope;

pub use config::{FailWhen, ScopeConfig};
pub use error::{AssertionFailure, Fault};
pub use identity::Identity;
#[doc(hidden)]
pub use report::Capture;
pub use report::Output;
pub use scope::{AssertOptions, AssertionRecord, AssertionScope, Summary};
