use crate::{
    error::CallableKind,
    interpreter::{
        evaluator::{
            function::{
                condition::If,
                date::{AddDays, FormatDate, Now},
                replace::Replace,
            },
            stack::{EvalResult, invoke},
        },
        value::core::Value,
    },
};

/// A function that can be registered with an
/// [`Evaluator`](crate::interpreter::evaluator::core::Evaluator).
///
/// Functions are called as `NAME(arg1, arg2, ...)` and always take exactly
/// [`Function::arity`] arguments. Returning `None` from [`Function::apply`]
/// rejects the arguments.
pub trait Function: Send + Sync {
    /// The name the function is called by.
    fn name(&self) -> &str;

    /// Number of arguments.
    fn arity(&self) -> usize;

    /// Computes the result from the arguments, or returns `None` if the
    /// arguments are not acceptable.
    fn apply(&self, args: Vec<Value>) -> Option<Value>;

    /// Pops the arguments from `stack`, applies the function and pushes the
    /// result.
    ///
    /// # Errors
    /// `NotEnoughArguments` or `InvalidArguments`.
    fn invoke(&self, stack: &mut Vec<Value>) -> EvalResult<()> {
        invoke(stack,
               CallableKind::Function,
               self.name(),
               self.arity(),
               |args| self.apply(args))
    }
}

/// Returns the standard function set.
#[must_use]
pub fn standard_functions() -> Vec<Box<dyn Function>> {
    vec![Box::new(AddDays),
         Box::new(FormatDate),
         Box::new(If),
         Box::new(Now),
         Box::new(Replace)]
}
