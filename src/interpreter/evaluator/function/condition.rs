use crate::interpreter::{evaluator::function::core::Function, value::core::Value};

/// Function `IF(condition, then, else)`.
///
/// Returns `then` if the boolean `condition` holds and `else` otherwise. The
/// branches may be of any type, including null.
pub struct If;

impl Function for If {
    fn name(&self) -> &str {
        "IF"
    }

    fn arity(&self) -> usize {
        3
    }

    fn apply(&self, args: Vec<Value>) -> Option<Value> {
        let [condition, then, otherwise]: [Value; 3] = args.try_into().ok()?;

        match condition {
            Value::Bool(true) => Some(then),
            Value::Bool(false) => Some(otherwise),
            _ => None,
        }
    }
}
