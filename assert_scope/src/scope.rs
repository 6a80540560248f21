use std::{
    any::Any,
    fmt::{self, Debug, Display},
    panic::{self, AssertUnwindSafe},
};

use tracing::{debug, error, warn};

use crate::{
    config::{FailWhen, ScopeConfig},
    error::AssertionFailure,
    identity::Identity,
    report::Output,
};

/// Outcome of a single assertion performed inside a scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionRecord {
    pub passed: bool,
    /// Failure message; `None` for passed assertions.
    pub message: Option<String>,
}

/// Assertion counters of a scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub total: usize,
    pub failed: usize,
    pub passed: usize,
}

impl Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "assertions failed={}, passed={}", self.failed, self.passed)
    }
}

/// Per assertion options: an additional message appended to the failure message and the
/// `force_fail` flag that stops the test case on failure even when the scope continues on
/// failures.
///
/// Can be built from `()` (no message), `&str` or `String`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssertOptions {
    message: String,
    force_fail: bool,
}

impl AssertOptions {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            force_fail: false,
        }
    }

    pub fn force_fail(mut self) -> Self {
        self.force_fail = true;
        self
    }
}

impl From<()> for AssertOptions {
    fn from(_: ()) -> Self {
        Self::default()
    }
}

impl From<&str> for AssertOptions {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for AssertOptions {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&String> for AssertOptions {
    fn from(message: &String) -> Self {
        Self::new(message.as_str())
    }
}

/// Collects the assertion results of one test case.
///
/// Every assertion returns `Ok(passed)` when the test case can go on and
/// `Err(AssertionFailure)` when it must stop: propagate it with `?`. The scope is
/// finalized by [`AssertionScope::run`] (or explicitly by [`AssertionScope::finish`]) that
/// logs any fault that stopped the body and re-raises it untouched, or raises the
/// aggregated failure if the body completed with deferred failures.
#[must_use = "failures are reported only when the scope is finished"]
#[derive(Debug)]
pub struct AssertionScope {
    name: String,
    config: ScopeConfig,
    results: Vec<AssertionRecord>,
    output: Output,
    /// First failure that stopped the test case; later assertions replay it.
    stopped: Option<AssertionFailure>,
}

impl AssertionScope {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, ScopeConfig::default())
    }

    pub fn with_config(name: impl Into<String>, config: ScopeConfig) -> Self {
        Self {
            name: name.into(),
            config,
            results: Vec::new(),
            output: Output::default(),
            stopped: None,
        }
    }

    pub fn continue_on_failure(mut self, value: bool) -> Self {
        self.config.continue_on_failure = value;
        self
    }

    pub fn print_fail_summary(mut self, value: bool) -> Self {
        self.config.print_fail_summary = value;
        self
    }

    pub fn fail_when(mut self, value: FailWhen) -> Self {
        self.config.fail_when = value;
        self
    }

    /// Redirect the console lines (standard output by default).
    pub fn output(mut self, output: impl Into<Output>) -> Self {
        self.output = output.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn results(&self) -> &[AssertionRecord] {
        &self.results
    }

    pub fn summary(&self) -> Summary {
        let total = self.results.len();
        let failed = self.results.iter().filter(|r| !r.passed).count();
        Summary {
            total,
            failed,
            passed: total - failed,
        }
    }

    /// Check `actual == expected`.
    pub fn assert_equal<A, E>(
        &mut self,
        actual: A,
        expected: E,
        options: impl Into<AssertOptions>,
    ) -> Result<bool, AssertionFailure>
    where
        A: PartialEq<E> + Debug,
        E: Debug,
    {
        let options = options.into();
        let passed = actual == expected;
        let message = (!passed).then(|| {
            format!(
                "{} - assert_equal(actual={:?} == expected={:?}) failed ({})",
                self.name, actual, expected, options.message
            )
        });
        self.track_result(passed, message, options.force_fail)
    }

    /// Check that `actual` and `expected` are the very same object: see [`Identity`].
    pub fn assert_is<T>(
        &mut self,
        actual: T,
        expected: T,
        options: impl Into<AssertOptions>,
    ) -> Result<bool, AssertionFailure>
    where
        T: Identity + Debug,
    {
        let options = options.into();
        let passed = actual.is_identical(&expected);
        let message = (!passed).then(|| {
            format!(
                "{} - assert_is(actual={:?} is expected={:?}) failed ({})",
                self.name, actual, expected, options.message
            )
        });
        self.track_result(passed, message, options.force_fail)
    }

    fn track_result(
        &mut self,
        passed: bool,
        message: Option<String>,
        force_fail: bool,
    ) -> Result<bool, AssertionFailure> {
        if let Some(failure) = &self.stopped {
            return Err(failure.clone());
        }
        self.results.push(AssertionRecord {
            passed,
            message: message.clone(),
        });
        if passed {
            return Ok(true);
        }
        let message = message.unwrap_or_default();
        if force_fail || !self.config.continue_on_failure {
            let failure = AssertionFailure::new(message);
            self.stopped = Some(failure.clone());
            return Err(failure);
        }
        warn!(scope = %self.name, "{message}");
        self.output.line(format_args!("Log Error: {message}"));
        Ok(false)
    }

    /// Open the scope, execute `body` and finalize the scope on every exit path.
    ///
    /// If `body` panics the panic is logged like any other fault and then resumed with
    /// its original payload.
    pub fn run<T, E, F>(mut self, body: F) -> Result<T, E>
    where
        F: FnOnce(&mut Self) -> Result<T, E>,
        E: From<AssertionFailure> + Display,
    {
        match panic::catch_unwind(AssertUnwindSafe(|| body(&mut self))) {
            Ok(outcome) => self.finish(outcome),
            Err(payload) => {
                self.report_fault(PanicMessage(payload.as_ref()));
                panic::resume_unwind(payload)
            }
        }
    }

    /// Finalize the scope with the outcome of the test case body.
    ///
    /// An `Err` outcome is a live fault: it's logged and returned unchanged. An `Ok` outcome
    /// that follows an assertion that stopped the test case is handled the same way with
    /// that assertion's failure. Otherwise the value is returned as is unless the recorded
    /// failures should fail the test case: in this case the aggregated
    /// [`AssertionFailure`] is returned.
    pub fn finish<T, E>(mut self, outcome: Result<T, E>) -> Result<T, E>
    where
        E: From<AssertionFailure> + Display,
    {
        match outcome {
            Ok(value) => match self.stopped.take() {
                Some(failure) => {
                    self.report_fault(&failure);
                    Err(E::from(failure))
                }
                None => self.close().map(|_| value).map_err(E::from),
            },
            Err(fault) => {
                self.report_fault(&fault);
                Err(fault)
            }
        }
    }

    fn report_fault(&mut self, fault: impl Display) {
        let summary = self.summary();
        error!(
            scope = %self.name,
            failed = summary.failed,
            passed = summary.passed,
            %fault,
            "test case stopped by a fault"
        );
        self.output.line(format_args!(
            "{} failed with Exception: {fault}, ({summary})",
            self.name
        ));
    }

    fn close(&mut self) -> Result<(), AssertionFailure> {
        let summary = self.summary();
        if !self
            .config
            .fail_when
            .should_fail(summary.failed, summary.total)
        {
            debug!(scope = %self.name, %summary, "test case passed");
            return Ok(());
        }
        if self.config.print_fail_summary {
            for message in self
                .results
                .iter()
                .filter(|r| !r.passed)
                .filter_map(|r| r.message.as_deref())
            {
                self.output.line(message);
            }
        }
        error!(
            scope = %self.name,
            failed = summary.failed,
            passed = summary.passed,
            "test case failed"
        );
        Err(AssertionFailure::new(format!(
            "{} failed: {summary}",
            self.name
        )))
    }
}

struct PanicMessage<'a>(&'a (dyn Any + Send));

impl Display for PanicMessage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(message) = self.0.downcast_ref::<&str>() {
            f.write_str(message)
        } else if let Some(message) = self.0.downcast_ref::<String>() {
            f.write_str(message)
        } else {
            f.write_str("Box<dyn Any>")
        }
    }
}
