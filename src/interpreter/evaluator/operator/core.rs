use crate::{
    error::CallableKind,
    interpreter::{
        evaluator::{
            operator::{
                comparison::{Equal, Greater, GreaterOrEqual, Less, LessOrEqual, NotEqual},
                concat::Plus,
                logic::{And, Not, Or},
            },
            stack::{EvalResult, invoke},
        },
        value::core::Value,
    },
};

/// Priority of `!`.
pub const PRIORITY_NOT: i32 = 6;
/// Priority of `+`.
pub const PRIORITY_PLUS: i32 = 5;
/// Priority of `==`, `!=`, `<`, `<=`, `>` and `>=`.
pub const PRIORITY_COMPARISON: i32 = 4;
/// Priority of `&&`.
pub const PRIORITY_AND: i32 = 3;
/// Priority of `||`.
pub const PRIORITY_OR: i32 = 2;

/// An operator that can be registered with an
/// [`Evaluator`](crate::interpreter::evaluator::core::Evaluator).
///
/// Implementors describe themselves (name, priority, arity) and compute a
/// result from exactly `arity` arguments. Argument validation and computation
/// happen together in [`Operator::apply`]: returning `None` rejects the
/// arguments.
///
/// # Example
/// ```
/// use strexpr::interpreter::{evaluator::operator::core::Operator, value::core::Value};
///
/// struct Repeat;
///
/// impl Operator for Repeat {
///     fn name(&self) -> &str {
///         "**"
///     }
///
///     fn priority(&self) -> i32 {
///         7
///     }
///
///     fn arity(&self) -> usize {
///         2
///     }
///
///     fn apply(&self, args: Vec<Value>) -> Option<Value> {
///         let count = args[1].as_str()?.parse().ok()?;
///         Some(Value::from(args[0].as_str()?.repeat(count)))
///     }
/// }
///
/// let mut stack = vec![Value::from("ab"), Value::from("3")];
/// Repeat.invoke(&mut stack).unwrap();
///
/// assert_eq!(stack, vec![Value::from("ababab")]);
/// ```
pub trait Operator: Send + Sync {
    /// The symbol the operator is written as.
    fn name(&self) -> &str;

    /// Precedence; a higher value binds tighter.
    fn priority(&self) -> i32;

    /// Number of operands.
    fn arity(&self) -> usize;

    /// Computes the result from the operands, or returns `None` if the
    /// operands are not acceptable.
    fn apply(&self, args: Vec<Value>) -> Option<Value>;

    /// Pops the operands from `stack`, applies the operator and pushes the
    /// result.
    ///
    /// # Errors
    /// `NotEnoughArguments` or `InvalidArguments`.
    fn invoke(&self, stack: &mut Vec<Value>) -> EvalResult<()> {
        invoke(stack,
               CallableKind::Operator,
               self.name(),
               self.arity(),
               |args| self.apply(args))
    }
}

/// Returns the standard operator set.
#[must_use]
pub fn standard_operators() -> Vec<Box<dyn Operator>> {
    vec![Box::new(And),
         Box::new(Equal),
         Box::new(GreaterOrEqual),
         Box::new(Greater),
         Box::new(LessOrEqual),
         Box::new(Less),
         Box::new(NotEqual),
         Box::new(Not),
         Box::new(Or),
         Box::new(Plus)]
}

/// Unpacks exactly two operands.
pub(crate) fn binary(args: Vec<Value>) -> Option<(Value, Value)> {
    let [left, right]: [Value; 2] = args.try_into().ok()?;
    Some((left, right))
}
