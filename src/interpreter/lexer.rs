use logos::Logos;

use crate::{
    error::ExpressionError,
    interpreter::token::{Token, TokenKind},
};

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, ExpressionError>;

/// Represents a raw lexical unit of an expression.
///
/// Raw tokens only know about the structural symbols and quoting; whether a
/// bare chunk is an operator, a function or a literal is decided later by the
/// caller of [`split`].
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum RawToken {
    /// `,`
    #[token(",")]
    Comma,
    /// `(`
    #[token("(")]
    LeftBracket,
    /// `)`
    #[token(")")]
    RightBracket,
    /// A double quoted segment such as `"B C"`.
    ///
    /// Structural symbols and whitespace lose their meaning inside quotes and a
    /// quote preceded by a backslash does not close the segment.
    #[regex(r#""(\\"|[^"])*""#, parse_quoted, allow_greedy = true)]
    Quoted(String),
    /// A quoted segment whose closing quote is missing; runs to the end of the
    /// input.
    #[regex(r#""(\\"|[^"])*"#, parse_unterminated, priority = 10, allow_greedy = true)]
    Unterminated(String),
    /// Anything that is neither whitespace, a quote nor a structural symbol.
    #[regex(r#"[^ \t\n\r\x0B\x0C,()"]+"#, |lex| lex.slice().to_string(), allow_greedy = true)]
    Chunk(String),
    /// Whitespace outside of quotes only separates chunks.
    #[regex(r"[ \t\n\r\x0B\x0C]+", logos::skip)]
    Ignored,
}

/// Splits an expression into tokens by whitespace, commas, brackets and
/// quotes.
///
/// Commas and brackets always become structural tokens. Quoted segments become
/// `Atom` tokens verbatim (only `\"` is unescaped). Every other chunk is
/// trimmed and typed by `classify`.
///
/// # Parameters
/// - `text`: The raw expression.
/// - `classify`: Returns the kind of an unquoted chunk from its trimmed text.
///
/// # Returns
/// The flat sequence of tokens in input order.
///
/// # Errors
/// `UnexpectedSymbol` if part of the input matches no lexical rule.
///
/// # Example
/// ```
/// use strexpr::interpreter::{
///     lexer::split,
///     token::{Token, TokenKind},
/// };
///
/// let tokens = split(r#"A, " B ""#, |_| TokenKind::Atom).unwrap();
///
/// assert_eq!(tokens, vec![Token::atom("A"), Token::comma(), Token::atom(" B ")]);
/// ```
pub fn split<F>(text: &str, classify: F) -> LexResult<Vec<Token>>
    where F: Fn(&str) -> TokenKind
{
    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer(text);

    while let Some(raw) = lexer.next() {
        let Ok(raw) = raw else {
            return Err(ExpressionError::UnexpectedSymbol { symbol: lexer.slice().to_string() });
        };

        match raw {
            RawToken::Comma => tokens.push(Token::comma()),
            RawToken::LeftBracket => tokens.push(Token::left_bracket()),
            RawToken::RightBracket => tokens.push(Token::right_bracket()),
            RawToken::Quoted(atom) | RawToken::Unterminated(atom) => tokens.push(Token::atom(atom)),
            RawToken::Chunk(chunk) => {
                let trimmed = chunk.trim();
                if !trimmed.is_empty() {
                    tokens.push(Token::new(classify(trimmed), trimmed));
                }
            },
            RawToken::Ignored => {},
        }
    }

    log::trace!("split {text:?} into {} raw tokens", tokens.len());

    Ok(tokens)
}

/// Extracts the content of a closed quoted segment.
fn parse_quoted(lex: &logos::Lexer<RawToken>) -> String {
    let slice = lex.slice();
    unescape(&slice[1..slice.len() - 1])
}

/// Extracts the content of a quoted segment that was never closed.
fn parse_unterminated(lex: &logos::Lexer<RawToken>) -> String {
    unescape(&lex.slice()[1..])
}

/// Drops the backslash in front of every escaped quote.
fn unescape(body: &str) -> String {
    body.replace("\\\"", "\"")
}
