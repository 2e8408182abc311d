use strexpr::interpreter::{
    lexer::split,
    token::{Token, TokenKind},
};

fn split_atoms(src: &str) -> Vec<Token> {
    split(src, |_| TokenKind::Atom).unwrap_or_else(|e| panic!("Split of {src:?} failed: {e}"))
}

#[test]
fn split_by_comma() {
    assert_eq!(split_atoms("A, B"),
               vec![Token::atom("A"), Token::comma(), Token::atom("B")]);
}

#[test]
fn split_by_brackets() {
    assert_eq!(split_atoms("(A, B)"),
               vec![Token::left_bracket(),
                    Token::atom("A"),
                    Token::comma(),
                    Token::atom("B"),
                    Token::right_bracket()]);
}

#[test]
fn structural_symbols_need_no_whitespace() {
    assert_eq!(split_atoms("F(A,B)"),
               vec![Token::atom("F"),
                    Token::left_bracket(),
                    Token::atom("A"),
                    Token::comma(),
                    Token::atom("B"),
                    Token::right_bracket()]);
}

#[test]
fn whitespace_separates_chunks() {
    assert_eq!(split_atoms(" A \t B\nC "),
               vec![Token::atom("A"), Token::atom("B"), Token::atom("C")]);
    assert!(split_atoms(" \t ").is_empty());
}

#[test]
fn quoted_atoms() {
    assert_eq!(split_atoms(r#"A, "B C""#),
               vec![Token::atom("A"), Token::comma(), Token::atom("B C")]);
    assert_eq!(split_atoms(r#"A, " B ""#),
               vec![Token::atom("A"), Token::comma(), Token::atom(" B ")]);
}

#[test]
fn structural_symbols_inside_quotes_are_literal() {
    assert_eq!(split_atoms(r#""(A, B)""#), vec![Token::atom("(A, B)")]);
}

#[test]
fn escaped_quotes() {
    assert_eq!(split_atoms(r#""say \"hi\"""#), vec![Token::atom(r#"say "hi""#)]);
    assert_eq!(split_atoms(r#""a\b""#), vec![Token::atom(r"a\b")]);
}

#[test]
fn empty_quotes_give_empty_atom() {
    assert_eq!(split_atoms(r#"A "" B"#),
               vec![Token::atom("A"), Token::atom(""), Token::atom("B")]);
}

#[test]
fn unterminated_quote_runs_to_the_end() {
    assert_eq!(split_atoms(r#"A "B, C"#), vec![Token::atom("A"), Token::atom("B, C")]);
    assert_eq!(split_atoms(r#"A ""#), vec![Token::atom("A"), Token::atom("")]);
    assert_eq!(split_atoms(r#""B \""#), vec![Token::atom(r#"B ""#)]);
}

#[test]
fn quote_in_the_middle_of_a_chunk_splits_it() {
    assert_eq!(split_atoms(r#"ab"cd"ef"#),
               vec![Token::atom("ab"), Token::atom("cd"), Token::atom("ef")]);
}

#[test]
fn classification_is_delegated_except_inside_quotes() {
    let classify = |value: &str| {
        if value == "+" {
            TokenKind::Operator
        } else {
            TokenKind::Expression
        }
    };

    assert_eq!(split(r#"A + "+""#, classify).unwrap(),
               vec![Token::new(TokenKind::Expression, "A"),
                    Token::operator("+"),
                    Token::atom("+")]);
}

#[test]
fn non_ascii_text() {
    assert_eq!(split_atoms("Grüße, \"日本 語\""),
               vec![Token::atom("Grüße"), Token::comma(), Token::atom("日本 語")]);
}
