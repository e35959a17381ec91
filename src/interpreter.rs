/// The evaluator module executes postfix sequences and computes results.
///
/// The executor walks the postfix sequence with an operand stack, applies
/// every operator to the values beneath it and records a human-readable step
/// for each reduction. It is the last stage of the pipeline.
///
/// # Responsibilities
/// - Reduces operators against the operand stack.
/// - Records the derivation trace.
/// - Reports runtime errors such as division by zero.
pub mod evaluator;
/// The lexer module scans source text into tokens.
///
/// The scanner reads the raw source text and produces an ordered list of
/// tokens, each with its kind, literal text and position. This is the first
/// stage of the pipeline.
///
/// # Responsibilities
/// - Merges digits into numbers and decimals, and whitespace into runs.
/// - Decides whether each `-` is a negation or a subtraction.
/// - Reports lexical errors for unknown characters, malformed decimals and
///   unbalanced braces.
pub mod lexer;
/// The parser module validates tokens and converts them to postfix order.
///
/// # Responsibilities
/// - Checks every token against the set of kinds the grammar allows next.
/// - Rewrites the infix sequence into postfix order with the shunting-yard
///   algorithm, honoring precedence and associativity.
pub mod parser;
/// A reusable session that runs the pipeline stage by stage and keeps the
/// output of each stage for inspection.
pub mod session;
/// Token kinds, tokens, positions and the classification of operators.
pub mod token;
