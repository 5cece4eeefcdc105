//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords, built-in type names and identifiers
//! - Numeric literals (integers and floats)
//! - String literals with escape sequences
//! - Operators with their precedence
//! - Punctuation
//! - Error cases

use crate::errors::errors::ErrorImpl;

use super::{lexer::tokenize, tokens::{Token, TokenKind}};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.teddy".to_string()))
        .unwrap()
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    let tokens = kinds("function enum case let var return print");

    assert_eq!(
        tokens,
        vec![
            TokenKind::Function,
            TokenKind::Enum,
            TokenKind::Case,
            TokenKind::Let,
            TokenKind::Var,
            TokenKind::Return,
            TokenKind::Print,
        ]
    );
}

#[test]
fn test_tokenize_type_names() {
    let tokens = kinds("Integer Float String Bool Void Shape");

    assert_eq!(
        tokens,
        vec![
            TokenKind::Integer,
            TokenKind::Float,
            TokenKind::String,
            TokenKind::Bool,
            TokenKind::Void,
            TokenKind::Identifier("Shape".to_string()),
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = kinds("foo baz_123 _underscore functional");

    assert_eq!(tokens[0], TokenKind::Identifier("foo".to_string()));
    assert_eq!(tokens[1], TokenKind::Identifier("baz_123".to_string()));
    assert_eq!(tokens[2], TokenKind::Identifier("_underscore".to_string()));
    // Keywords only match whole words
    assert_eq!(tokens[3], TokenKind::Identifier("functional".to_string()));
    assert_eq!(tokens.len(), 4);
}

#[test]
fn test_tokenize_numbers() {
    let tokens = kinds("42 2.5 0 100.5");

    assert_eq!(
        tokens,
        vec![
            TokenKind::IntegerConstant(42),
            TokenKind::FloatConstant(2.5),
            TokenKind::IntegerConstant(0),
            TokenKind::FloatConstant(100.5),
        ]
    );
}

#[test]
fn test_tokenize_strings() {
    let tokens = kinds(r#""hello" "multiple words" """#);

    assert_eq!(tokens[0], TokenKind::StringConstant("hello".to_string()));
    assert_eq!(tokens[1], TokenKind::StringConstant("multiple words".to_string()));
    assert_eq!(tokens[2], TokenKind::StringConstant(String::new()));
}

#[test]
fn test_tokenize_string_escapes() {
    let tokens = kinds(r#""hello\nworld" "tab\there" "backslash\\" "quote\"test""#);

    assert_eq!(tokens[0], TokenKind::StringConstant("hello\nworld".to_string()));
    assert_eq!(tokens[1], TokenKind::StringConstant("tab\there".to_string()));
    assert_eq!(tokens[2], TokenKind::StringConstant("backslash\\".to_string()));
    assert_eq!(tokens[3], TokenKind::StringConstant("quote\"test".to_string()));
}

#[test]
fn test_tokenize_operators_carry_precedence() {
    let tokens = kinds("+ - * / % == != < > <= >= && ||");

    let expected = [
        ("+", 40),
        ("-", 40),
        ("*", 50),
        ("/", 50),
        ("%", 50),
        ("==", 20),
        ("!=", 20),
        ("<", 30),
        (">", 30),
        ("<=", 30),
        (">=", 30),
        ("&&", 10),
        ("||", 5),
    ];

    assert_eq!(tokens.len(), expected.len());
    for (token, (symbol, precedence)) in tokens.iter().zip(expected) {
        assert_eq!(*token, TokenKind::Operator(symbol.to_string(), precedence));
    }
}

#[test]
fn test_tokenize_punctuation() {
    let tokens = kinds("( ) { } ; : , . = ->");

    assert_eq!(
        tokens,
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::Semicolon,
            TokenKind::Colon,
            TokenKind::Comma,
            TokenKind::Period,
            TokenKind::Equal,
            TokenKind::Arrow,
        ]
    );
}

#[test]
fn test_tokenize_arrow_versus_minus() {
    let tokens = kinds("a - b -> c");

    assert_eq!(tokens[1], TokenKind::Operator("-".to_string(), 40));
    assert_eq!(tokens[3], TokenKind::Arrow);
}

#[test]
fn test_tokenize_equal_versus_equals() {
    let tokens = kinds("x = a == b");

    assert_eq!(tokens[1], TokenKind::Equal);
    assert_eq!(tokens[3], TokenKind::Operator("==".to_string(), 20));
}

#[test]
fn test_tokenize_enum_case_construction() {
    let tokens = kinds("let r: Result = .Success(5);");

    assert_eq!(
        tokens,
        vec![
            TokenKind::Let,
            TokenKind::Identifier("r".to_string()),
            TokenKind::Colon,
            TokenKind::Identifier("Result".to_string()),
            TokenKind::Equal,
            TokenKind::Period,
            TokenKind::Identifier("Success".to_string()),
            TokenKind::OpenParen,
            TokenKind::IntegerConstant(5),
            TokenKind::CloseParen,
            TokenKind::Semicolon,
        ]
    );
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("let  value".to_string(), Some("test.teddy".to_string())).unwrap();

    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 3);
    assert_eq!(tokens[1].span.start.0, 5);
    assert_eq!(tokens[1].span.end.0, 10);
    assert_eq!(*tokens[1].span.start.1, "test.teddy");
}

#[test]
fn test_tokenize_empty_source() {
    assert!(kinds("").is_empty());
    assert!(kinds("  \n\t ").is_empty());
}

#[test]
fn test_operator_constructor_uses_table() {
    let token = Token::operator("*").unwrap();

    assert_eq!(token.kind, TokenKind::Operator("*".to_string(), 50));
    assert!(token.is_operator());
    assert!(Token::operator("=").is_none());
}

#[test]
fn test_unrecognised_character() {
    let error = tokenize("let x @ 5".to_string(), None).unwrap_err();

    assert_eq!(
        *error.kind(),
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string()
        }
    );
    assert_eq!(error.get_position().0, 6);
}

#[test]
fn test_unterminated_string() {
    let error = tokenize("print(\"oops);".to_string(), None).unwrap_err();

    assert_eq!(*error.kind(), ErrorImpl::UnterminatedString);
    assert_eq!(error.get_position().0, 6);
}

#[test]
fn test_integer_overflow() {
    let error = tokenize("99999999999999999999".to_string(), None).unwrap_err();

    assert_eq!(error.get_error_name(), "NumberParseError");
}
