use thiserror::Error;

use crate::interpreter::{evaluator::trace::Trace, token::KindSet};

/// Lexical errors.
///
/// Raised by the scanner for characters outside the grammar, malformed
/// decimals and unbalanced braces.
pub mod lexical_error;
/// Runtime errors.
///
/// Raised while executing a postfix sequence, such as division by zero.
pub mod runtime_error;
/// Syntax errors.
///
/// Raised by the grammar validator when a token appears where the grammar does
/// not allow it, or when the input ends too early.
pub mod syntax_error;

pub use lexical_error::LexicalError;
pub use runtime_error::RuntimeError;
pub use syntax_error::SyntaxError;

/// The phase an [`Error`] was raised in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Raised while scanning.
    Lexical,
    /// Raised while validating the token sequence.
    Syntax,
    /// Raised while executing.
    Runtime,
}

/// Any error produced by the evaluation pipeline.
///
/// Each phase contributes one variant so callers can branch on the failing
/// phase and still read the position of the offending token.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// See [`LexicalError`].
    #[error(transparent)]
    Lexical(#[from] LexicalError),
    /// See [`SyntaxError`].
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// See [`RuntimeError`].
    ///
    /// `trace` holds every step made before the failing operator.
    #[error("{error}")]
    Runtime {
        /// What went wrong.
        #[source]
        error: RuntimeError,
        /// The steps that completed before the failure.
        trace: Trace,
    },
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime { error,
                        trace: Trace::new() }
    }
}

impl Error {
    /// The phase the error was raised in.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::Lexical(_) => ErrorCategory::Lexical,
            Self::Syntax(_) => ErrorCategory::Syntax,
            Self::Runtime { .. } => ErrorCategory::Runtime,
        }
    }

    /// The 1-based column of the offending token.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::Lexical(e) => e.offset(),
            Self::Syntax(e) => e.offset(),
            Self::Runtime { error, .. } => error.offset(),
        }
    }

    /// The 1-based line of the offending token.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Lexical(e) => e.line(),
            Self::Syntax(e) => e.line(),
            Self::Runtime { error, .. } => error.line(),
        }
    }

    /// The token kinds that would have been accepted, where that is known.
    #[must_use]
    pub const fn expected(&self) -> Option<KindSet> {
        match self {
            Self::Lexical(e) => e.expected(),
            Self::Syntax(e) => Some(e.expected()),
            Self::Runtime { .. } => None,
        }
    }

    /// The steps completed before a runtime failure. `None` for errors raised
    /// before execution started.
    #[must_use]
    pub const fn trace(&self) -> Option<&Trace> {
        match self {
            Self::Runtime { trace, .. } => Some(trace),
            Self::Lexical(_) | Self::Syntax(_) => None,
        }
    }
}
