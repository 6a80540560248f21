/// When a scope that ran to completion reports its recorded failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailWhen {
    /// Fail if at least one assertion failed.
    #[default]
    AnyFailed,
    /// Fail only if every recorded assertion failed (and at least one was recorded).
    AllFailed,
}

impl FailWhen {
    pub(crate) fn should_fail(self, failed: usize, total: usize) -> bool {
        match self {
            FailWhen::AnyFailed => failed > 0,
            FailWhen::AllFailed => total > 0 && failed == total,
        }
    }
}

/// Flags that control how an [`AssertionScope`](crate::AssertionScope) handles failing
/// assertions.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScopeConfig {
    /// Defer failing assertions (just log them) instead of stopping at the first one.
    pub continue_on_failure: bool,
    /// Print every deferred failure message when the scope closes with failures.
    pub print_fail_summary: bool,
    /// Close-time failure policy.
    pub fail_when: FailWhen,
}

impl ScopeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn continue_on_failure(mut self, value: bool) -> Self {
        self.continue_on_failure = value;
        self
    }

    pub fn print_fail_summary(mut self, value: bool) -> Self {
        self.print_fail_summary = value;
        self
    }

    pub fn fail_when(mut self, value: FailWhen) -> Self {
        self.fail_when = value;
        self
    }
}
