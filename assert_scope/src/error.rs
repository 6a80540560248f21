/// Failure kinds raised by an [`AssertionScope`](crate::AssertionScope)
use std::error::Error as StdError;

use thiserror::Error;

/// A failure raised by the scope itself: either a single assertion that stopped the test
/// case immediately or the aggregated summary computed when the scope closes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AssertionFailure {
    message: String,
}

impl AssertionFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The human readable failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Ready to use error type for scope bodies that don't want to define their own.
///
/// Every [`AssertionFailure`] converts into `Fault::Assertion`; any other error can be
/// wrapped with [`Fault::propagated`] and is passed through the scope untouched.
#[derive(Debug, Error)]
pub enum Fault {
    #[error(transparent)]
    Assertion(#[from] AssertionFailure),
    #[error(transparent)]
    Propagated(Box<dyn StdError + Send + Sync + 'static>),
}

impl Fault {
    pub fn propagated(error: impl Into<Box<dyn StdError + Send + Sync + 'static>>) -> Self {
        Self::Propagated(error.into())
    }

    pub fn is_assertion(&self) -> bool {
        matches!(self, Self::Assertion(_))
    }

    pub fn as_assertion(&self) -> Option<&AssertionFailure> {
        match self {
            Self::Assertion(failure) => Some(failure),
            Self::Propagated(_) => None,
        }
    }
}
