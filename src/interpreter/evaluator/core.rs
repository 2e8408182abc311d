use std::{collections::HashMap, fmt};

use crate::{
    error::{CallableKind, ExpressionError, Result, UsageError},
    interpreter::{
        converter::Converter,
        evaluator::{
            function::core::{Function, standard_functions},
            operator::core::{Operator, standard_operators},
        },
        token::TokenKind,
        tokenizer::Tokenizer,
    },
};

/// Evaluates string expressions against a registry of operators and
/// functions.
///
/// ## Usage
///
/// An `Evaluator` is configured once, by registering the operators and
/// functions it should understand, and then reused for any number of
/// expressions. Evaluation only borrows the evaluator immutably and keeps all
/// scratch state local to the call, so a configured evaluator can be shared
/// between threads.
///
/// # Example
/// ```
/// use strexpr::interpreter::evaluator::core::Evaluator;
///
/// let evaluator = Evaluator::standard().unwrap();
///
/// assert_eq!(evaluator.evaluate("IF(A < B, 1, 2)").unwrap(), Some("1".to_string()));
/// assert_eq!(evaluator.evaluate("IF(A == B, Wrong, NULL)").unwrap(), None);
/// assert_eq!(evaluator.evaluate("just text").unwrap(), Some("just text".to_string()));
/// ```
#[derive(Default)]
pub struct Evaluator {
    tokenizer: Tokenizer,
    converter: Converter,
    functions: HashMap<String, Box<dyn Function>>,
    operators: HashMap<String, Box<dyn Operator>>,
}

impl Evaluator {
    /// Creates an evaluator with no operators and no functions.
    ///
    /// Such an evaluator returns every expression unchanged.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an evaluator with the standard operators and functions.
    ///
    /// # Errors
    /// Never fails in practice; registration errors are propagated.
    pub fn standard() -> Result<Self> {
        let mut evaluator = Self::new();
        evaluator.add_standard_functions()?;
        evaluator.add_standard_operators()?;
        Ok(evaluator)
    }

    /// Registers a function.
    ///
    /// # Errors
    /// - `UsageError::EmptyName` if the function has no name.
    /// - `ExpressionError::AlreadyAdded` if an operator or a function with the
    ///   same name is already registered.
    pub fn add_function(&mut self, function: Box<dyn Function>) -> Result<()> {
        let name = function.name().to_string();
        self.check_uniqueness(&name)?;

        self.tokenizer.add_function(&name)?;
        log::debug!("registered function {name} with arity {}", function.arity());
        self.functions.insert(name, function);

        Ok(())
    }

    /// Registers an operator.
    ///
    /// # Errors
    /// - `UsageError::EmptyName` if the operator has no name.
    /// - `ExpressionError::AlreadyAdded` if an operator or a function with the
    ///   same name is already registered.
    pub fn add_operator(&mut self, operator: Box<dyn Operator>) -> Result<()> {
        let name = operator.name().to_string();
        self.check_uniqueness(&name)?;

        self.tokenizer.add_operator(&name)?;
        self.converter.add_operator(&name, operator.priority())?;
        log::debug!("registered operator {name} with priority {} and arity {}",
                    operator.priority(),
                    operator.arity());
        self.operators.insert(name, operator);

        Ok(())
    }

    /// Registers `ADD_DAYS`, `FORMAT_DATE`, `IF`, `NOW` and `REPLACE`.
    ///
    /// # Errors
    /// `ExpressionError::AlreadyAdded` if one of the names is taken.
    pub fn add_standard_functions(&mut self) -> Result<()> {
        standard_functions().into_iter()
                            .try_for_each(|function| self.add_function(function))
    }

    /// Registers `&&`, `||`, `!`, `==`, `!=`, `<`, `<=`, `>`, `>=` and `+`.
    ///
    /// # Errors
    /// `ExpressionError::AlreadyAdded` if one of the names is taken.
    pub fn add_standard_operators(&mut self) -> Result<()> {
        standard_operators().into_iter()
                            .try_for_each(|operator| self.add_operator(operator))
    }

    /// Iterates over the registered functions in no particular order.
    pub fn functions(&self) -> impl Iterator<Item = &dyn Function> {
        self.functions
            .values()
            .map(|function| function.as_ref() as &dyn Function)
    }

    /// Iterates over the registered operators in no particular order.
    pub fn operators(&self) -> impl Iterator<Item = &dyn Operator> {
        self.operators
            .values()
            .map(|operator| operator.as_ref() as &dyn Operator)
    }

    /// Looks up a registered function by name.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<&dyn Function> {
        self.functions
            .get(name)
            .map(|function| function.as_ref() as &dyn Function)
    }

    /// Looks up a registered operator by name.
    #[must_use]
    pub fn operator(&self, name: &str) -> Option<&dyn Operator> {
        self.operators
            .get(name)
            .map(|operator| operator.as_ref() as &dyn Operator)
    }

    /// Evaluates an expression.
    ///
    /// If the expression contains no registered operator or function it is
    /// returned verbatim, without any trimming or unquoting.
    ///
    /// # Returns
    /// The resulting string, or `None` if the result is null or empty.
    ///
    /// # Errors
    /// - `UsageError::EmptyExpression` if `text` is empty.
    /// - `ExpressionError` for any structural or semantic problem.
    pub fn evaluate(&self, text: &str) -> Result<Option<String>> {
        if text.is_empty() {
            return Err(UsageError::EmptyExpression.into());
        }

        log::debug!("evaluating {text:?}");

        let infix = self.tokenizer.tokenize(text)?;

        if infix.iter().all(|token| token.kind == TokenKind::Atom) {
            log::trace!("{text:?} has no operators or functions, returning it as is");
            return Ok(Some(text.to_string()));
        }

        let postfix = self.converter.convert(&infix)?;
        let result = self.evaluate_postfix(&postfix)?;

        log::debug!("{text:?} evaluated to {result:?}");

        Ok(result)
    }

    /// Ensures a name is non-empty and registered neither as an operator nor
    /// as a function.
    fn check_uniqueness(&self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(UsageError::EmptyName { component: "Evaluator" }.into());
        }
        if self.functions.contains_key(name) {
            return Err(ExpressionError::AlreadyAdded { kind: CallableKind::Function,
                                                       name: name.to_string() }.into());
        }
        if self.operators.contains_key(name) {
            return Err(ExpressionError::AlreadyAdded { kind: CallableKind::Operator,
                                                       name: name.to_string() }.into());
        }
        Ok(())
    }
}

impl fmt::Debug for Evaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut functions = self.functions.keys().collect::<Vec<_>>();
        let mut operators = self.operators.keys().collect::<Vec<_>>();
        functions.sort();
        operators.sort();

        f.debug_struct("Evaluator")
         .field("functions", &functions)
         .field("operators", &operators)
         .finish_non_exhaustive()
    }
}
