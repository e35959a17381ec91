/// Binary operator evaluation.
///
/// Implements `+`, `-`, `*`, `/`, `%` and `^`, including the zero divisor
/// checks for `/` and `%`.
pub mod binary;

/// Unary operator evaluation.
pub mod unary;

/// The operand stack executor.
///
/// Walks a postfix sequence, reduces operators against the operand stack and
/// records every reduction.
pub mod core;

/// The derivation trace recorded during execution.
pub mod trace;
