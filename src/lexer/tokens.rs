use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("function", TokenKind::Function);
        map.insert("enum", TokenKind::Enum);
        map.insert("case", TokenKind::Case);
        map.insert("let", TokenKind::Let);
        map.insert("var", TokenKind::Var);
        map.insert("return", TokenKind::Return);
        map.insert("print", TokenKind::Print);
        map.insert("Integer", TokenKind::Integer);
        map.insert("Float", TokenKind::Float);
        map.insert("String", TokenKind::String);
        map.insert("Bool", TokenKind::Bool);
        map.insert("Void", TokenKind::Void);
        map
    };

    /// Binding strength of every binary operator. Higher binds tighter.
    pub static ref OPERATOR_PRECEDENCE: HashMap<&'static str, i32> = {
        let mut map = HashMap::new();
        map.insert("||", 5);
        map.insert("&&", 10);
        map.insert("==", 20);
        map.insert("!=", 20);
        map.insert("<", 30);
        map.insert("<=", 30);
        map.insert(">", 30);
        map.insert(">=", 30);
        map.insert("+", 40);
        map.insert("-", 40);
        map.insert("*", 50);
        map.insert("/", 50);
        map.insert("%", 50);
        map
    };
}

#[derive(Debug, PartialEq, Clone)]
pub enum TokenKind {
    // Literals
    IntegerConstant(i64),
    FloatConstant(f64),
    StringConstant(String),

    Identifier(String),

    /// Operator symbol and its binding precedence.
    Operator(String, i32),

    // Reserved
    Function,
    Enum,
    Case,
    Let,
    Var,
    Return,
    Print,

    // Built-in type names
    Integer,
    Float,
    String,
    Bool,
    Void,

    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    Semicolon,
    Colon,
    Comma,
    Period,
    Equal, // =
    Arrow, // ->
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::IntegerConstant(value) => write!(f, "{}", value),
            TokenKind::FloatConstant(value) => write!(f, "{:?}", value),
            TokenKind::StringConstant(value) => write!(f, "{:?}", value),
            TokenKind::Identifier(name) => write!(f, "{}", name),
            TokenKind::Operator(symbol, _) => write!(f, "{}", symbol),
            TokenKind::Function => write!(f, "function"),
            TokenKind::Enum => write!(f, "enum"),
            TokenKind::Case => write!(f, "case"),
            TokenKind::Let => write!(f, "let"),
            TokenKind::Var => write!(f, "var"),
            TokenKind::Return => write!(f, "return"),
            TokenKind::Print => write!(f, "print"),
            TokenKind::Integer => write!(f, "Integer"),
            TokenKind::Float => write!(f, "Float"),
            TokenKind::String => write!(f, "String"),
            TokenKind::Bool => write!(f, "Bool"),
            TokenKind::Void => write!(f, "Void"),
            TokenKind::OpenParen => write!(f, "("),
            TokenKind::CloseParen => write!(f, ")"),
            TokenKind::OpenCurly => write!(f, "{{"),
            TokenKind::CloseCurly => write!(f, "}}"),
            TokenKind::Semicolon => write!(f, ";"),
            TokenKind::Colon => write!(f, ":"),
            TokenKind::Comma => write!(f, ","),
            TokenKind::Period => write!(f, "."),
            TokenKind::Equal => write!(f, "="),
            TokenKind::Arrow => write!(f, "->"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl Token {
    /// Builds a token with no source location, for streams made by hand.
    pub fn bare(kind: TokenKind) -> Self {
        Token {
            kind,
            span: Span::null(),
        }
    }

    /// Operator token whose precedence comes from [`OPERATOR_PRECEDENCE`].
    pub fn operator(symbol: &str) -> Option<Self> {
        OPERATOR_PRECEDENCE
            .get(symbol)
            .map(|precedence| Token::bare(TokenKind::Operator(symbol.to_string(), *precedence)))
    }

    pub fn is_operator(&self) -> bool {
        matches!(self.kind, TokenKind::Operator(..))
    }

    pub fn debug(&self) -> String {
        match &self.kind {
            TokenKind::IntegerConstant(_)
            | TokenKind::FloatConstant(_)
            | TokenKind::StringConstant(_)
            | TokenKind::Identifier(_) => format!("{:?}", self.kind),
            TokenKind::Operator(symbol, precedence) => format!("Operator({}, {})", symbol, precedence),
            _ => format!("{:?} ()", self.kind),
        }
    }
}
