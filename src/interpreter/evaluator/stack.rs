use crate::{
    error::{CallableKind, ExpressionError},
    interpreter::{
        evaluator::core::Evaluator,
        token::{Token, TokenKind},
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `ExpressionError` describing the failure.
pub type EvalResult<T> = Result<T, ExpressionError>;

/// Number of values that must remain once a whole expression is evaluated.
const FINAL_STACK_SIZE: usize = 1;

/// Pops `arity` arguments, applies a callable to them and pushes the result.
///
/// Arguments keep their stack order: the topmost value becomes the last
/// argument. Values below the arguments are left untouched.
///
/// # Parameters
/// - `stack`: The value stack.
/// - `kind`: Operator or function, for error reporting.
/// - `name`: The callable's name, for error reporting.
/// - `arity`: Number of values to pop.
/// - `apply`: Computes the result, or `None` if the arguments are invalid.
///
/// # Errors
/// - `NotEnoughArguments` if the stack holds fewer than `arity` values.
/// - `InvalidArguments` if `apply` rejects the arguments.
///
/// # Example
/// ```
/// use strexpr::{
///     error::CallableKind,
///     interpreter::{evaluator::stack::invoke, value::core::Value},
/// };
///
/// let mut stack = vec![Value::from("A"), Value::from("B"), Value::from("C")];
///
/// invoke(&mut stack, CallableKind::Function, "LAST", 2, |mut args| args.pop()).unwrap();
///
/// assert_eq!(stack, vec![Value::from("A"), Value::from("C")]);
/// ```
pub fn invoke<F>(stack: &mut Vec<Value>,
                 kind: CallableKind,
                 name: &str,
                 arity: usize,
                 apply: F)
                 -> EvalResult<()>
    where F: FnOnce(Vec<Value>) -> Option<Value>
{
    if stack.len() < arity {
        return Err(ExpressionError::NotEnoughArguments { kind,
                                                         name: name.to_string() });
    }

    let args = stack.split_off(stack.len() - arity);
    let result = apply(args).ok_or_else(|| ExpressionError::InvalidArguments { kind,
                                                                             name: name.to_string() })?;

    log::trace!("{kind} {name} pushed {} {result:?}", result.type_name());
    stack.push(result);

    Ok(())
}

impl Evaluator {
    /// Evaluates a postfix token sequence.
    ///
    /// Atoms are pushed as values (`NULL` becomes `Value::Null`), operators
    /// and functions are looked up by name and invoked on the stack.
    ///
    /// # Parameters
    /// - `postfix`: Tokens in postfix order, as produced by the converter.
    ///
    /// # Returns
    /// The single remaining value as a string, or `None` if it is null or
    /// empty.
    ///
    /// # Errors
    /// - `UnsupportedOperator` / `UnsupportedFunction` for unregistered names.
    /// - `UnexpectedTokenType` for commas, brackets and unresolved tokens.
    /// - `InvalidExpression` unless exactly one value remains.
    /// - Any error raised by an invoked callable.
    pub fn evaluate_postfix(&self, postfix: &[Token]) -> EvalResult<Option<String>> {
        let mut stack = Vec::new();

        for token in postfix {
            match token.kind {
                TokenKind::Atom => stack.push(Value::from_atom(&token.text)),
                TokenKind::Operator => {
                    let operator =
                        self.operator(&token.text)
                            .ok_or_else(|| ExpressionError::UnsupportedOperator { name: token.text.clone() })?;
                    operator.invoke(&mut stack)?;
                },
                TokenKind::Function => {
                    let function =
                        self.function(&token.text)
                            .ok_or_else(|| ExpressionError::UnsupportedFunction { name: token.text.clone() })?;
                    function.invoke(&mut stack)?;
                },
                TokenKind::Comma
                | TokenKind::LeftBracket
                | TokenKind::RightBracket
                | TokenKind::Expression => {
                    return Err(ExpressionError::UnexpectedTokenType { kind: token.kind,
                                                                      text: token.text.clone() });
                },
            }
        }

        if stack.len() != FINAL_STACK_SIZE {
            return Err(ExpressionError::InvalidExpression { remaining: stack.len() });
        }

        Ok(stack.pop().and_then(Value::into_result))
    }
}
