use crate::interpreter::{
    evaluator::operator::core::{Operator, PRIORITY_AND, PRIORITY_NOT, PRIORITY_OR, binary},
    value::core::Value,
};

/// Operator `&&`: conjunction of two booleans.
pub struct And;

/// Operator `||`: disjunction of two booleans.
pub struct Or;

/// Operator `!`: negation of a boolean.
///
/// # Example
/// ```
/// use strexpr::interpreter::{
///     evaluator::operator::{core::Operator, logic::Not},
///     value::core::Value,
/// };
///
/// let mut stack = vec![Value::Bool(false)];
/// Not.invoke(&mut stack).unwrap();
///
/// assert_eq!(stack, vec![Value::Bool(true)]);
/// ```
pub struct Not;

impl Operator for And {
    fn name(&self) -> &str {
        "&&"
    }

    fn priority(&self) -> i32 {
        PRIORITY_AND
    }

    fn arity(&self) -> usize {
        2
    }

    fn apply(&self, args: Vec<Value>) -> Option<Value> {
        match binary(args)? {
            (Value::Bool(left), Value::Bool(right)) => Some(Value::Bool(left && right)),
            _ => None,
        }
    }
}

impl Operator for Or {
    fn name(&self) -> &str {
        "||"
    }

    fn priority(&self) -> i32 {
        PRIORITY_OR
    }

    fn arity(&self) -> usize {
        2
    }

    fn apply(&self, args: Vec<Value>) -> Option<Value> {
        match binary(args)? {
            (Value::Bool(left), Value::Bool(right)) => Some(Value::Bool(left || right)),
            _ => None,
        }
    }
}

impl Operator for Not {
    fn name(&self) -> &str {
        "!"
    }

    fn priority(&self) -> i32 {
        PRIORITY_NOT
    }

    fn arity(&self) -> usize {
        1
    }

    fn apply(&self, args: Vec<Value>) -> Option<Value> {
        match args.as_slice() {
            [Value::Bool(b)] => Some(Value::Bool(!b)),
            _ => None,
        }
    }
}
