use std::fmt;

use crate::interpreter::token::TokenKind;

/// Distinguishes the two kinds of callables an expression can contain.
///
/// Used both in registration errors (to name which namespace already holds a
/// name) and in invocation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallableKind {
    /// An infix or prefix operator such as `&&` or `!`.
    Operator,
    /// A bracketed function call such as `IF(...)`.
    Function,
}

impl fmt::Display for CallableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Operator => write!(f, "operator"),
            Self::Function => write!(f, "function"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that make an expression (or a registration) invalid.
pub enum ExpressionError {
    /// A name is already registered as an operator or a function.
    #[error("{} {name} is already added.", capitalize(.kind))]
    AlreadyAdded {
        /// The namespace that already holds the name.
        kind: CallableKind,
        /// The colliding name.
        name: String,
    },
    /// An operator token has no registered priority.
    #[error("Unknown operator {name}.")]
    UnknownOperator {
        /// The operator's name.
        name: String,
    },
    /// A bracket has no counterpart.
    #[error("Unpaired bracket.")]
    UnpairedBracket,
    /// A token of a kind the current stage cannot process.
    #[error("Unexpected token type {kind:?} ({text}).")]
    UnexpectedTokenType {
        /// The offending kind.
        kind: TokenKind,
        /// The token's text.
        text: String,
    },
    /// The lexer found input it cannot classify.
    #[error("Unexpected symbol {symbol}.")]
    UnexpectedSymbol {
        /// The unmatched input.
        symbol: String,
    },
    /// The value stack holds fewer values than a callable's arity.
    #[error("Not enough arguments for {kind} {name}.")]
    NotEnoughArguments {
        /// Operator or function.
        kind: CallableKind,
        /// The callable's name.
        name: String,
    },
    /// A callable rejected the types or shape of its arguments.
    #[error("Invalid arguments for {kind} {name}.")]
    InvalidArguments {
        /// Operator or function.
        kind: CallableKind,
        /// The callable's name.
        name: String,
    },
    /// An operator token with no implementation behind it.
    #[error("Unsupported operator {name}.")]
    UnsupportedOperator {
        /// The operator's name.
        name: String,
    },
    /// A function token with no implementation behind it.
    #[error("Unsupported function {name}.")]
    UnsupportedFunction {
        /// The function's name.
        name: String,
    },
    /// Evaluation did not leave exactly one value on the stack.
    #[error("Invalid expression: {remaining} values left on the stack.")]
    InvalidExpression {
        /// How many values were left.
        remaining: usize,
    },
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn capitalize(kind: &CallableKind) -> &'static str {
    match kind {
        CallableKind::Operator => "Operator",
        CallableKind::Function => "Function",
    }
}
