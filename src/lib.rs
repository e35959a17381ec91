//! # opprec
//!
//! opprec is an operator-precedence evaluator for arithmetic expressions.
//! It scans an expression, validates it against a small grammar, converts it
//! to postfix order and executes it on an operand stack, recording every
//! reduction as a derivation trace.
//!
//! The grammar covers integers, decimals, the binary operators `+ - * / % ^`,
//! unary negation and parenthesized groups.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{
    evaluator::{core::execute_with_trace, trace::Trace},
    lexer::tokenize,
    parser::core::lex,
};

/// Provides unified error types for scanning, validation and execution.
///
/// This module defines every error the pipeline can raise. Each phase has its
/// own enum, and [`error::Error`] wraps them so callers can branch on the
/// failing phase and read the position of the offending token.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (scanner, validator, executor).
/// - Attaches offsets, line numbers and expected token kinds.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the stages of evaluation.
///
/// This module ties together scanning, validation, conversion and execution.
///
/// # Responsibilities
/// - Coordinates the scanner, the validator/converter and the executor.
/// - Provides stage-level entry points and a reusable session.
/// - Manages the flow of data and errors between stages.
pub mod interpreter;

pub use crate::{
    error::{Error, ErrorCategory},
    interpreter::session::Session,
};

/// The value of an evaluated expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The numeric result.
    pub value: f64,
    /// The derivation trace, present when evaluation ran in debug mode.
    pub trace: Option<Trace>,
}

/// Evaluates an arithmetic expression.
///
/// This runs the full pipeline: scanning, validation and conversion to
/// postfix order, and execution. With `debug` set, every derivation step is
/// logged at debug level as it is made and the trace is returned with the
/// value. A runtime failure carries the steps made before it in
/// [`Error::Runtime`], whether or not `debug` is set.
///
/// # Errors
/// Returns the first error raised by any stage; see [`Error`].
///
/// # Examples
/// ```
/// use opprec::{ErrorCategory, evaluate};
///
/// let evaluation = evaluate("-(3 + -4) * 9", false).unwrap();
/// assert_eq!(evaluation.value, 9.0);
/// assert!(evaluation.trace.is_none());
///
/// let evaluation = evaluate("1 + 3 * 5", true).unwrap();
/// assert_eq!(evaluation.trace.unwrap().len(), 2);
///
/// let err = evaluate("4+", false).unwrap_err();
/// assert_eq!(err.category(), ErrorCategory::Syntax);
///
/// let err = evaluate("2 * 3 / 0", true).unwrap_err();
/// assert_eq!(err.trace().unwrap().steps(), ["2 * 3 = 6"]);
/// ```
pub fn evaluate(expression: &str, debug: bool) -> Result<Evaluation, Error> {
    let tokens = tokenize(expression)?;
    let postfix = lex(&tokens)?;

    let mut trace = if debug { Trace::echoing() } else { Trace::new() };
    let value = match execute_with_trace(&postfix, &mut trace) {
        Ok(value) => value,
        Err(error) => return Err(Error::Runtime { error, trace }),
    };

    Ok(Evaluation { value,
                    trace: debug.then_some(trace) })
}
