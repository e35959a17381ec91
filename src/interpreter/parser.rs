/// The validate-then-convert entry point and the postfix sequence type.
pub mod core;

/// Grammar validation.
///
/// A forward scan that checks every token against the set of kinds allowed
/// after its predecessor.
pub mod grammar;

/// Infix to postfix conversion with the shunting-yard algorithm.
pub mod shunting;
