use regex::Regex;

use crate::interpreter::{evaluator::function::core::Function, value::core::Value};

/// Function `REPLACE(source, regex, replacement)`.
///
/// Replaces every match of `regex` in `source`. The replacement may refer to
/// capture groups as `$1` or `${name}`. A null or empty source yields null;
/// the pattern must be a non-empty, valid regular expression.
///
/// # Example
/// ```
/// use strexpr::interpreter::{
///     evaluator::function::{core::Function, replace::Replace},
///     value::core::Value,
/// };
///
/// let mut stack = vec![Value::from("ABCABA"), Value::from("A.*?C"), Value::from("D")];
/// Replace.invoke(&mut stack).unwrap();
///
/// assert_eq!(stack, vec![Value::from("DABA")]);
/// ```
pub struct Replace;

impl Function for Replace {
    fn name(&self) -> &str {
        "REPLACE"
    }

    fn arity(&self) -> usize {
        3
    }

    fn apply(&self, args: Vec<Value>) -> Option<Value> {
        let [source, pattern, replacement]: [Value; 3] = args.try_into().ok()?;
        let (Value::String(pattern), Value::String(replacement)) = (pattern, replacement) else {
            return None;
        };
        if pattern.is_empty() {
            return None;
        }

        let regex = Regex::new(&pattern).ok()?;

        match source {
            Value::Null => Some(Value::Null),
            Value::String(source) if source.is_empty() => Some(Value::Null),
            Value::String(source) => {
                Some(Value::String(regex.replace_all(&source, replacement.as_str()).into_owned()))
            },
            Value::Bool(_) | Value::DateTime(_) => None,
        }
    }
}
