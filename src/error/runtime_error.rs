use thiserror::Error;

/// Represents all errors that can occur while executing a postfix sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Attempted division by zero.
    #[error("Runtime error at offset {offset} on line {line}: division by zero.")]
    DivisionByZero {
        /// The column of the `/` operator.
        offset: usize,
        /// The source line of the `/` operator.
        line:   usize,
    },
    /// Attempted modulo by a divisor that truncates to zero.
    #[error("Runtime error at offset {offset} on line {line}: modulo by zero.")]
    ModuloByZero {
        /// The column of the `%` operator.
        offset: usize,
        /// The source line of the `%` operator.
        line:   usize,
    },
    /// The sequence does not reduce to exactly one value.
    ///
    /// Sequences produced by [`crate::interpreter::parser::core::lex`] never
    /// raise this.
    #[error("Runtime error at offset {offset} on line {line}: malformed postfix sequence.")]
    MalformedPostfix {
        /// The column of the token that could not be executed.
        offset: usize,
        /// The source line of the token that could not be executed.
        line:   usize,
    },
}

impl RuntimeError {
    /// The column where the error occurred.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::DivisionByZero { offset, .. }
            | Self::ModuloByZero { offset, .. }
            | Self::MalformedPostfix { offset, .. } => *offset,
        }
    }

    /// The line where the error occurred.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::DivisionByZero { line, .. }
            | Self::ModuloByZero { line, .. }
            | Self::MalformedPostfix { line, .. } => *line,
        }
    }
}
