use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} at offset {}", .position.0)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::ExpectedCharacter { .. } => "ExpectedCharacter",
            ErrorImpl::ExpectedIdentifier => "ExpectedIdentifier",
            ErrorImpl::ExpectedNumber => "ExpectedNumber",
            ErrorImpl::ExpectedStringLiteral => "ExpectedStringLiteral",
            ErrorImpl::ExpectedExpression => "ExpectedExpression",
            ErrorImpl::ExpectedPrint => "ExpectedPrint",
            ErrorImpl::ExpectedOperator => "ExpectedOperator",
            ErrorImpl::ExpectedType => "ExpectedType",
            ErrorImpl::ExpectedReturn => "ExpectedReturn",
            ErrorImpl::ExpectedVariableDeclaration => "ExpectedVariableDeclaration",
            ErrorImpl::ExpectedEnum => "ExpectedEnum",
            ErrorImpl::UnexpectedEndOfInput => "UnexpectedEndOfInput",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnterminatedString => "UnterminatedString",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::ExpectedCharacter { expected } => {
                ErrorTip::Suggestion(format!("expected `{}`", expected))
            }
            ErrorImpl::ExpectedIdentifier => ErrorTip::Suggestion(String::from("expected a name")),
            ErrorImpl::ExpectedType => ErrorTip::Suggestion(String::from(
                "expected `Integer`, `Float`, `String`, `Bool`, `Void` or a type name",
            )),
            ErrorImpl::ExpectedExpression => ErrorTip::Suggestion(String::from(
                "expected a literal, a name, a call or a parenthesised expression",
            )),
            ErrorImpl::UnexpectedEndOfInput => ErrorTip::Suggestion(String::from(
                "the file ended in the middle of a construct",
            )),
            ErrorImpl::NestingTooDeep { limit } => {
                ErrorTip::Suggestion(format!("nesting is limited to {} levels", limit))
            }
            ErrorImpl::UnrecognisedToken { token } => {
                ErrorTip::Suggestion(format!("Unrecognised token: `{}`", token))
            }
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("missing closing `\"`"))
            }
            _ => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("expected {expected:?}")]
    ExpectedCharacter { expected: String },
    #[error("expected identifier")]
    ExpectedIdentifier,
    #[error("expected number")]
    ExpectedNumber,
    #[error("expected string literal")]
    ExpectedStringLiteral,
    #[error("expected expression")]
    ExpectedExpression,
    #[error("expected print")]
    ExpectedPrint,
    #[error("expected operator")]
    ExpectedOperator,
    #[error("expected type")]
    ExpectedType,
    #[error("expected return")]
    ExpectedReturn,
    #[error("expected variable declaration")]
    ExpectedVariableDeclaration,
    #[error("expected enum")]
    ExpectedEnum,
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("unterminated string literal")]
    UnterminatedString,
}
