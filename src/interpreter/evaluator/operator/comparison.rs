use std::cmp::Ordering;

use crate::interpreter::{
    evaluator::operator::core::{Operator, PRIORITY_COMPARISON, binary},
    value::core::Value,
};

/// Orders two values of the same comparable variant.
///
/// Strings compare lexicographically, booleans with `false < true`,
/// datetimes chronologically. Nulls and mixed variants are not comparable.
#[must_use]
pub fn compare(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::String(l), Value::String(r)) => Some(l.cmp(r)),
        (Value::Bool(l), Value::Bool(r)) => Some(l.cmp(r)),
        (Value::DateTime(l), Value::DateTime(r)) => Some(l.cmp(r)),
        _ => None,
    }
}

/// Defines an equality operator over any two values.
///
/// Equality is structural: values of different variants are never equal and
/// `NULL == NULL` holds.
macro_rules! equality_operator {
    ($ty:ident, $name:literal, $outcome:expr) => {
        #[doc = concat!("Operator `", $name, "`.")]
        pub struct $ty;

        impl Operator for $ty {
            fn name(&self) -> &str {
                $name
            }

            fn priority(&self) -> i32 {
                PRIORITY_COMPARISON
            }

            fn arity(&self) -> usize {
                2
            }

            fn apply(&self, args: Vec<Value>) -> Option<Value> {
                let (left, right) = binary(args)?;
                Some(Value::Bool($outcome(left == right)))
            }
        }
    };
}

/// Defines an ordering operator.
///
/// `$accepts` decides the result from the ordering of the operands.
/// `$null_pair` is the result for two blank operands (null or empty string),
/// or `None` if such a pair is compared like any other.
macro_rules! ordering_operator {
    ($ty:ident, $name:literal, $accepts:expr, $null_pair:expr) => {
        #[doc = concat!("Operator `", $name, "`.")]
        pub struct $ty;

        impl Operator for $ty {
            fn name(&self) -> &str {
                $name
            }

            fn priority(&self) -> i32 {
                PRIORITY_COMPARISON
            }

            fn arity(&self) -> usize {
                2
            }

            fn apply(&self, args: Vec<Value>) -> Option<Value> {
                let (left, right) = binary(args)?;
                if left.is_blank()
                   && right.is_blank()
                   && let Some(result) = $null_pair
                {
                    return Some(Value::Bool(result));
                }
                compare(&left, &right).map(|ordering| Value::Bool($accepts(ordering)))
            }
        }
    };
}

equality_operator!(Equal, "==", |equal: bool| equal);
equality_operator!(NotEqual, "!=", |equal: bool| !equal);

ordering_operator!(Less, "<", Ordering::is_lt, None::<bool>);
ordering_operator!(Greater, ">", Ordering::is_gt, None::<bool>);
ordering_operator!(LessOrEqual, "<=", Ordering::is_le, Some(true));
ordering_operator!(GreaterOrEqual, ">=", Ordering::is_ge, Some(true));
