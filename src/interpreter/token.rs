use std::fmt;

/// Semantic category of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// String literal, the leaves of an expression.
    Atom,
    /// Separates function arguments.
    Comma,
    /// Registered function name, always followed by bracketed arguments.
    Function,
    /// Registered operator name, placed between (or before) its operands.
    Operator,
    /// `(`
    LeftBracket,
    /// `)`
    RightBracket,
    /// Not yet resolved chunk that may still contain operators.
    ///
    /// Only exists inside the tokenizer; it is downgraded to `Atom` before
    /// tokens are handed to any other stage.
    Expression,
}

/// A unit of an expression: its kind together with its literal text.
///
/// Equality is structural, two tokens are equal when both kind and text match.
///
/// # Example
/// ```
/// use strexpr::interpreter::token::{Token, TokenKind};
///
/// let token = Token::operator("&&");
///
/// assert_eq!(token.kind, TokenKind::Operator);
/// assert_eq!(token, Token::new(TokenKind::Operator, "&&"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// The token's semantic category.
    pub kind: TokenKind,
    /// Operator symbol, function name or literal content.
    pub text: String,
}

impl Token {
    /// Creates a token of the given kind.
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self { kind,
               text: text.into() }
    }

    /// Creates an `Atom` token.
    pub fn atom(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Atom, text)
    }

    /// Creates an `Operator` token.
    pub fn operator(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Operator, text)
    }

    /// Creates a `Function` token.
    pub fn function(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Function, text)
    }

    /// Creates a `Comma` token.
    #[must_use]
    pub fn comma() -> Self {
        Self::new(TokenKind::Comma, ",")
    }

    /// Creates a `LeftBracket` token.
    #[must_use]
    pub fn left_bracket() -> Self {
        Self::new(TokenKind::LeftBracket, "(")
    }

    /// Creates a `RightBracket` token.
    #[must_use]
    pub fn right_bracket() -> Self {
        Self::new(TokenKind::RightBracket, ")")
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Joins token texts with spaces, used for trace output.
pub(crate) fn render(tokens: &[Token]) -> String {
    tokens.iter()
          .map(|token| token.text.as_str())
          .collect::<Vec<_>>()
          .join(" ")
}
