//! Type annotation parsing.
//!
//! A type is a single token: one of the built-in type keywords or an
//! identifier naming a user type.

use crate::{
    ast::types::{Literals, TypeNode},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

pub fn parse_type(parser: &mut Parser) -> Result<TypeNode, Error> {
    let Some(token) = parser.peek() else {
        return Err(parser.error(ErrorImpl::ExpectedType));
    };

    let type_ = match &token.kind {
        TokenKind::Integer => TypeNode::literal(Literals::Integer),
        TokenKind::Float => TypeNode::literal(Literals::Float),
        TokenKind::String => TypeNode::literal(Literals::String),
        TokenKind::Bool => TypeNode::literal(Literals::Bool),
        TokenKind::Void => TypeNode::literal(Literals::Void),
        TokenKind::Identifier(name) => TypeNode::named(name.clone()),
        _ => return Err(parser.error(ErrorImpl::ExpectedType)),
    };

    parser.advance()?;
    Ok(type_)
}
