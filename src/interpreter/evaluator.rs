/// The evaluator facade and its registry.
///
/// Owns the tokenizer, the converter and the registered operator and function
/// implementations, keeping their names in sync, and exposes `evaluate`.
pub mod core;

/// Postfix stack machine.
///
/// Walks a postfix token sequence, pushes atoms as values and invokes
/// operators and functions on the value stack.
pub mod stack;

/// Operators.
///
/// The `Operator` trait and the standard set of logical, comparison and
/// concatenation operators.
pub mod operator;

/// Functions.
///
/// The `Function` trait and the standard set of conditional, date and string
/// functions.
pub mod function;
