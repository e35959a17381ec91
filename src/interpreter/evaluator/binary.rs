use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, trace::Trace},
        token::{Token, TokenKind},
    },
};

/// Applies the binary operator `op` to `lhv` and `rhv` and records the step
/// as `"lhv <op> rhv = result"`.
///
/// `%` truncates both operands toward zero before taking the remainder, so
/// `5.5 % 2` is `1` and `-7 % 3` is `-1`. A divisor that truncates to zero is
/// an error, as is dividing by zero.
///
/// # Errors
/// - [`RuntimeError::DivisionByZero`] if `op` is `/` and `rhv` is zero.
/// - [`RuntimeError::ModuloByZero`] if `op` is `%` and `rhv` truncates to
///   zero.
/// - [`RuntimeError::MalformedPostfix`] if `op` is not a binary operator.
pub(in crate::interpreter::evaluator) fn eval_binary(op: &Token,
                                                     lhv: f64,
                                                     rhv: f64,
                                                     trace: &mut Trace)
                                                     -> EvalResult<f64> {
    let result = match op.kind {
        TokenKind::Add => lhv + rhv,
        TokenKind::Sub => lhv - rhv,
        TokenKind::Mul => lhv * rhv,
        TokenKind::Div => {
            if rhv == 0.0 {
                return Err(RuntimeError::DivisionByZero { offset: op.offset,
                                                          line:   op.line, });
            }
            lhv / rhv
        },
        TokenKind::Mod => {
            let divisor = rhv.trunc();
            if divisor == 0.0 {
                return Err(RuntimeError::ModuloByZero { offset: op.offset,
                                                        line:   op.line, });
            }
            lhv.trunc() % divisor
        },
        TokenKind::Exp => lhv.powf(rhv),
        TokenKind::Number
        | TokenKind::Decimal
        | TokenKind::Whitespace
        | TokenKind::OpenBrace
        | TokenKind::CloseBrace
        | TokenKind::Neg => {
            return Err(RuntimeError::MalformedPostfix { offset: op.offset,
                                                        line:   op.line, });
        },
    };

    trace.push(format!("{lhv} {} {rhv} = {result}", op.lexeme));
    Ok(result)
}
