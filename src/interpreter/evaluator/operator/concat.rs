use crate::interpreter::{
    evaluator::operator::core::{Operator, PRIORITY_PLUS, binary},
    value::core::Value,
};

/// Operator `+`: concatenates two strings.
///
/// A null operand behaves like the empty string and yields the other operand
/// unchanged; two nulls yield null.
///
/// # Example
/// ```
/// use strexpr::interpreter::{
///     evaluator::operator::{concat::Plus, core::Operator},
///     value::core::Value,
/// };
///
/// let mut stack = vec![Value::Null, Value::from("B")];
/// Plus.invoke(&mut stack).unwrap();
///
/// assert_eq!(stack, vec![Value::from("B")]);
/// ```
pub struct Plus;

impl Operator for Plus {
    fn name(&self) -> &str {
        "+"
    }

    fn priority(&self) -> i32 {
        PRIORITY_PLUS
    }

    fn arity(&self) -> usize {
        2
    }

    fn apply(&self, args: Vec<Value>) -> Option<Value> {
        match binary(args)? {
            (Value::String(mut left), Value::String(right)) => {
                left.push_str(&right);
                Some(Value::String(left))
            },
            (Value::Null, other @ (Value::String(_) | Value::Null)) | (other @ Value::String(_), Value::Null) => {
                Some(other)
            },
            _ => None,
        }
    }
}
