use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{binary::eval_binary, trace::Trace, unary::eval_negate},
        parser::core::PostfixSequence,
        token::{Arity, Position, Token},
    },
};

/// Result type used by the executor.
///
/// All execution functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The outcome of executing a postfix sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Execution {
    /// The value left on the operand stack.
    pub value: f64,
    /// Every reduction made on the way to `value`.
    pub trace: Trace,
}

/// Executes a postfix sequence and returns its value together with a fresh
/// trace.
///
/// # Errors
/// See [`execute_with_trace`]. The partial trace is dropped; use
/// [`execute_with_trace`] or a [`crate::interpreter::session::Session`] to
/// keep it.
///
/// # Examples
/// ```
/// use opprec::interpreter::{evaluator::core::execute, lexer::tokenize, parser::core::lex};
///
/// let postfix = lex(&tokenize("1 + 3 * 5").unwrap()).unwrap();
/// let execution = execute(&postfix).unwrap();
/// assert_eq!(execution.value, 16.0);
/// assert_eq!(execution.trace.steps(), ["3 * 5 = 15", "1 + 15 = 16"]);
/// ```
pub fn execute(postfix: &PostfixSequence) -> EvalResult<Execution> {
    let mut trace = Trace::new();
    let value = execute_with_trace(postfix, &mut trace)?;
    Ok(Execution { value, trace })
}

/// Executes a postfix sequence on an operand stack, recording each reduction
/// in `trace`.
///
/// `trace` is cleared first. Operands are pushed as they appear; a negation
/// pops one value and a binary operator pops the right-hand value and then
/// the left-hand value, pushing the result back. Steps recorded before a
/// failing operator stay in `trace`.
///
/// # Errors
/// - [`RuntimeError::DivisionByZero`] and [`RuntimeError::ModuloByZero`] for
///   a zero divisor.
/// - [`RuntimeError::MalformedPostfix`] if the sequence does not reduce to a
///   single value.
pub fn execute_with_trace(postfix: &PostfixSequence, trace: &mut Trace) -> EvalResult<f64> {
    trace.clear();
    let mut stack: Vec<f64> = Vec::with_capacity(postfix.len());

    for token in postfix {
        if token.kind.is_operand() {
            stack.push(parse_operand(token)?);
            continue;
        }
        match token.kind.arity() {
            Some(Arity::Unary) => {
                let value = pop(&mut stack, token)?;
                stack.push(eval_negate(value, trace));
            },
            Some(Arity::Binary) => {
                let rhv = pop(&mut stack, token)?;
                let lhv = pop(&mut stack, token)?;
                stack.push(eval_binary(token, lhv, rhv, trace)?);
            },
            None => return Err(malformed(token.position())),
        }
    }

    let end = postfix.tokens().last().map_or(Position::START, Token::position);
    match stack.as_slice() {
        [value] => {
            log::debug!("result: {value}");
            Ok(*value)
        },
        _ => Err(malformed(end)),
    }
}

fn parse_operand(token: &Token) -> EvalResult<f64> {
    token.lexeme.parse().map_err(|_| malformed(token.position()))
}

fn pop(stack: &mut Vec<f64>, token: &Token) -> EvalResult<f64> {
    stack.pop().ok_or_else(|| malformed(token.position()))
}

const fn malformed(at: Position) -> RuntimeError {
    RuntimeError::MalformedPostfix { offset: at.offset,
                                     line:   at.line, }
}
