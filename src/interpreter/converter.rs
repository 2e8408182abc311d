use std::collections::HashMap;

use crate::{
    error::{CallableKind, ExpressionError, Result, UsageError},
    interpreter::token::{Token, TokenKind, render},
};

/// Result type used by the converter.
pub type ConvertResult<T> = std::result::Result<T, ExpressionError>;

/// Converts infix token sequences into postfix ones with the Shunting Yard
/// algorithm.
///
/// Only operators need a priority; functions always bind tighter than any
/// operator because their arguments are delimited by brackets.
#[derive(Debug, Default, Clone)]
pub struct Converter {
    priorities: HashMap<String, i32>,
}

/// Scratch state of a single conversion.
#[derive(Default)]
struct Yard {
    output: Vec<Token>,
    stack:  Vec<Token>,
}

impl Converter {
    /// Creates a converter that knows no operators.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an operator together with its priority.
    ///
    /// A higher priority binds tighter. Operators of equal priority are left
    /// associative.
    ///
    /// # Errors
    /// - `UsageError::EmptyName` if `name` is empty.
    /// - `ExpressionError::AlreadyAdded` if the operator is already known.
    pub fn add_operator(&mut self, name: &str, priority: i32) -> Result<()> {
        if name.is_empty() {
            return Err(UsageError::EmptyName { component: "Converter" }.into());
        }
        if self.priorities.contains_key(name) {
            return Err(ExpressionError::AlreadyAdded { kind: CallableKind::Operator,
                                                       name: name.to_string() }.into());
        }
        self.priorities.insert(name.to_string(), priority);
        Ok(())
    }

    /// Converts an infix token sequence into a postfix one.
    ///
    /// # Errors
    /// - `UsageError::EmptyInput` if `infix` is empty.
    /// - `ExpressionError::UnknownOperator` for an operator without priority.
    /// - `ExpressionError::UnpairedBracket` if brackets do not match.
    /// - `ExpressionError::UnexpectedTokenType` for `Expression` tokens.
    ///
    /// # Example
    /// ```
    /// use strexpr::interpreter::{converter::Converter, token::Token};
    ///
    /// let mut converter = Converter::new();
    /// converter.add_operator("+", 1).unwrap();
    /// converter.add_operator("*", 2).unwrap();
    ///
    /// let infix = [Token::atom("A"),
    ///              Token::operator("+"),
    ///              Token::atom("B"),
    ///              Token::operator("*"),
    ///              Token::atom("C")];
    ///
    /// assert_eq!(converter.convert(&infix).unwrap(),
    ///            vec![Token::atom("A"),
    ///                 Token::atom("B"),
    ///                 Token::atom("C"),
    ///                 Token::operator("*"),
    ///                 Token::operator("+")]);
    /// ```
    pub fn convert(&self, infix: &[Token]) -> Result<Vec<Token>> {
        if infix.is_empty() {
            return Err(UsageError::EmptyInput.into());
        }

        let mut yard = Yard::default();

        for token in infix {
            match token.kind {
                TokenKind::Atom => yard.output.push(token.clone()),
                TokenKind::Comma => yard.process_comma(),
                TokenKind::Function | TokenKind::LeftBracket => yard.stack.push(token.clone()),
                TokenKind::Operator => self.process_operator(&mut yard, token)?,
                TokenKind::RightBracket => yard.process_right_bracket()?,
                TokenKind::Expression => {
                    return Err(ExpressionError::UnexpectedTokenType { kind: token.kind,
                                                                      text: token.text.clone() }.into());
                },
            }
        }

        let postfix = yard.drain()?;
        log::trace!("converted to postfix [{}]", render(&postfix));

        Ok(postfix)
    }

    /// Returns the priority of a registered operator.
    #[must_use]
    pub fn priority(&self, name: &str) -> Option<i32> {
        self.priorities.get(name).copied()
    }

    /// Pops every operator that binds at least as tight as `token`, then
    /// pushes `token`.
    fn process_operator(&self, yard: &mut Yard, token: &Token) -> ConvertResult<()> {
        let priority =
            self.priority(&token.text)
                .ok_or_else(|| ExpressionError::UnknownOperator { name: token.text.clone() })?;

        while let Some(top) = yard.stack.last()
              && top.kind == TokenKind::Operator
              && self.priority(&top.text).is_some_and(|top_priority| top_priority >= priority)
        {
            yard.pop_to_output();
        }

        yard.stack.push(token.clone());
        Ok(())
    }
}

impl Yard {
    fn pop_to_output(&mut self) {
        if let Some(token) = self.stack.pop() {
            self.output.push(token);
        }
    }

    /// A comma flushes the current argument of the innermost call.
    fn process_comma(&mut self) {
        while self.stack
                  .last()
                  .is_some_and(|top| top.kind != TokenKind::LeftBracket)
        {
            self.pop_to_output();
        }
    }

    /// Flushes everything up to the matching left bracket and, if the bracket
    /// opened a call, the function itself.
    fn process_right_bracket(&mut self) -> ConvertResult<()> {
        loop {
            match self.stack.pop() {
                Some(token) if token.kind == TokenKind::LeftBracket => break,
                Some(token) => self.output.push(token),
                None => return Err(ExpressionError::UnpairedBracket),
            }
        }

        if self.stack
               .last()
               .is_some_and(|top| top.kind == TokenKind::Function)
        {
            self.pop_to_output();
        }

        Ok(())
    }

    /// Moves the remaining stack to the output. Leftover functions and
    /// operators are emitted as they are.
    fn drain(mut self) -> ConvertResult<Vec<Token>> {
        while let Some(token) = self.stack.pop() {
            if token.kind == TokenKind::LeftBracket {
                return Err(ExpressionError::UnpairedBracket);
            }
            self.output.push(token);
        }
        Ok(self.output)
    }
}
