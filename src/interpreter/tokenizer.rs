use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::{
    error::{CallableKind, ExpressionError, Result, UsageError},
    interpreter::{
        lexer::{LexResult, split},
        token::{Token, TokenKind, render},
    },
};

/// Splits plain string expressions into classified tokens.
///
/// The tokenizer knows the names of all registered operators and functions.
/// Operators do not need to be surrounded by whitespace: `A+B` is split into
/// `A`, `+` and `B` as long as `+` is registered.
#[derive(Debug, Default, Clone)]
pub struct Tokenizer {
    functions:           HashSet<String>,
    operators:           HashSet<String>,
    /// Operator names grouped by their length in characters.
    operators_by_length: BTreeMap<usize, BTreeSet<String>>,
}

impl Tokenizer {
    /// Creates a tokenizer that knows no operators and no functions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a function name.
    ///
    /// # Errors
    /// - `UsageError::EmptyName` if `name` is empty.
    /// - `ExpressionError::AlreadyAdded` if `name` is already registered as a
    ///   function or an operator.
    pub fn add_function(&mut self, name: &str) -> Result<()> {
        self.check_uniqueness(name)?;
        self.functions.insert(name.to_string());
        Ok(())
    }

    /// Registers an operator name.
    ///
    /// # Errors
    /// - `UsageError::EmptyName` if `name` is empty.
    /// - `ExpressionError::AlreadyAdded` if `name` is already registered as a
    ///   function or an operator.
    pub fn add_operator(&mut self, name: &str) -> Result<()> {
        self.check_uniqueness(name)?;
        self.operators.insert(name.to_string());
        self.operators_by_length
            .entry(name.chars().count())
            .or_default()
            .insert(name.to_string());
        Ok(())
    }

    /// Splits an expression into tokens.
    ///
    /// Never returns `Expression` tokens: chunks that turn out to be neither
    /// an operator nor a function become atoms.
    ///
    /// # Errors
    /// Propagates lexer errors.
    ///
    /// # Example
    /// ```
    /// use strexpr::interpreter::{token::Token, tokenizer::Tokenizer};
    ///
    /// let mut tokenizer = Tokenizer::new();
    /// tokenizer.add_operator("!").unwrap();
    /// tokenizer.add_operator("!=").unwrap();
    ///
    /// assert_eq!(tokenizer.tokenize("A != !B").unwrap(),
    ///            vec![Token::atom("A"), Token::operator("!="), Token::operator("!"), Token::atom("B")]);
    /// ```
    pub fn tokenize(&self, text: &str) -> LexResult<Vec<Token>> {
        let raw_tokens = split(text, |value| self.kind_of(value))?;

        let mut tokens = self.split_by_operators(raw_tokens);
        for token in &mut tokens {
            if token.kind == TokenKind::Expression {
                token.kind = TokenKind::Atom;
            }
        }

        log::trace!("tokenized {text:?} into [{}]", render(&tokens));

        Ok(tokens)
    }

    /// Ensures a name is non-empty and known neither as an operator nor as a
    /// function.
    fn check_uniqueness(&self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(UsageError::EmptyName { component: "Tokenizer" }.into());
        }
        if self.functions.contains(name) {
            return Err(ExpressionError::AlreadyAdded { kind: CallableKind::Function,
                                                       name: name.to_string() }.into());
        }
        if self.operators.contains(name) {
            return Err(ExpressionError::AlreadyAdded { kind: CallableKind::Operator,
                                                       name: name.to_string() }.into());
        }
        Ok(())
    }

    fn kind_of(&self, value: &str) -> TokenKind {
        if self.operators.contains(value) {
            TokenKind::Operator
        } else if self.functions.contains(value) {
            TokenKind::Function
        } else {
            TokenKind::Expression
        }
    }

    /// Splits every unresolved token by every registered operator.
    ///
    /// Longer operators are applied first so that `!=` is extracted before `!`
    /// gets a chance to split it.
    fn split_by_operators(&self, tokens: Vec<Token>) -> Vec<Token> {
        self.operators_by_length
            .values()
            .rev()
            .flatten()
            .fold(tokens, |tokens, operator| self.split_by_operator(tokens, operator))
    }

    fn split_by_operator(&self, tokens: Vec<Token>, operator: &str) -> Vec<Token> {
        let mut result = Vec::with_capacity(tokens.len());

        for token in tokens {
            if token.kind == TokenKind::Expression {
                self.split_single(&token.text, operator, &mut result);
            } else {
                result.push(token);
            }
        }

        result
    }

    /// Splits one unresolved chunk at every occurrence of `operator`.
    fn split_single(&self, text: &str, operator: &str, result: &mut Vec<Token>) {
        let mut rest = text;

        while let Some(position) = rest.find(operator) {
            if position > 0 {
                let left = &rest[..position];
                result.push(Token::new(self.kind_of(left), left));
            }
            result.push(Token::operator(operator));
            rest = &rest[position + operator.len()..];
        }

        if !rest.is_empty() {
            result.push(Token::new(self.kind_of(rest), rest));
        }
    }
}
