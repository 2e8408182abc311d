//! # strexpr
//!
//! strexpr evaluates small infix string expressions such as
//! `IF(A < B, "yes", NULL) + suffix` into a single string or null.
//! Operators and functions are pluggable: callers register the ones they need
//! and then evaluate any number of expressions against that registry.

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

use crate::{error::Result, interpreter::evaluator::core::Evaluator};

/// Provides unified error types for registration and evaluation.
///
/// This module defines all errors that can be raised while registering
/// operators and functions or while splitting, converting and evaluating an
/// expression.
///
/// # Responsibilities
/// - Separates caller mistakes (`UsageError`) from invalid expressions
///   (`ExpressionError`).
/// - Names the offending operator, function or token in every message.
pub mod error;
/// Orchestrates the expression pipeline.
///
/// This module ties together the lexer, tokenizer, converter and evaluator:
/// raw text is split into tokens, classified, reordered into postfix form and
/// finally evaluated on a value stack.
///
/// # Responsibilities
/// - Coordinates all stages and the registry of operators and functions.
/// - Provides the public types needed to extend the registry.
/// - Manages the flow of data and errors between stages.
pub mod interpreter;

/// Evaluates an expression with the standard operators and functions.
///
/// Builds a fresh standard [`Evaluator`] for the call. Callers evaluating
/// many expressions should build one evaluator and reuse it.
///
/// # Errors
/// Returns an error if the expression is empty or invalid.
///
/// # Examples
/// ```
/// use strexpr::evaluate;
///
/// assert_eq!(evaluate("A + B").unwrap(), Some("AB".to_string()));
/// assert_eq!(evaluate("IF(A > B, 1, REPLACE(ABC, A, E))").unwrap(),
///            Some("EBC".to_string()));
///
/// // Unpaired bracket.
/// assert!(evaluate("A + (B + C").is_err());
/// ```
pub fn evaluate(text: &str) -> Result<Option<String>> {
    Evaluator::standard()?.evaluate(text)
}
