use crate::{
    ast::{
        ast::Node,
        expressions::{
            CallExpr, EnumConstructExpr, FieldAccessExpr, FloatExpr, IntegerExpr, StringExpr,
        },
        types::TypeNode,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// Parses one full expression: a primary, extended by any binary operators
/// that follow it.
pub fn parse_expr(parser: &mut Parser) -> Result<Node, Error> {
    parser.nested(|parser| {
        let left = parse_primary_expr(parser)?;
        parse_binary_expr(parser, left, 0)
    })
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Node, Error> {
    match parser.current_token_kind()? {
        TokenKind::Identifier(_) => parse_identifier_or_call_expr(parser),
        TokenKind::IntegerConstant(_) => parse_integer_expr(parser),
        TokenKind::FloatConstant(_) => parse_float_expr(parser),
        TokenKind::StringConstant(_) => parse_string_expr(parser),
        TokenKind::OpenParen => parse_grouping_expr(parser),
        _ => Err(parser.error(ErrorImpl::ExpectedExpression)),
    }
}

/// Precedence climbing.
///
/// Folds operators binding at least as tightly as `min_precedence` onto
/// `left`. Operators of equal precedence group to the left; a tighter
/// operator after the right operand claims that operand first.
pub fn parse_binary_expr(
    parser: &mut Parser,
    left: Node,
    min_precedence: i32,
) -> Result<Node, Error> {
    let mut left = left;

    loop {
        let precedence = parser.current_precedence();
        if precedence < min_precedence {
            return Ok(left);
        }

        let TokenKind::Operator(operator, _) = parser.current_token_kind()? else {
            return Err(parser.error(ErrorImpl::ExpectedOperator));
        };
        parser.advance()?;

        let mut right = parser.nested(parse_primary_expr)?;

        if parser.current_precedence() > precedence {
            right = parse_binary_expr(parser, right, precedence + 1)?;
        }

        left = Node::binary(left, operator.clone(), right);
    }
}

pub fn parse_identifier_or_call_expr(parser: &mut Parser) -> Result<Node, Error> {
    let identifier = read_identifier(parser)?;

    if !parser.at(&TokenKind::OpenParen) {
        return Ok(Node::FieldAccess(FieldAccessExpr { identifier }));
    }

    let arguments = parse_call_arguments(parser)?;

    // A call used as a statement owns its semicolon
    if parser.at(&TokenKind::Semicolon) {
        parser.advance()?;
    }

    Ok(Node::Call(CallExpr {
        identifier,
        arguments,
    }))
}

/// `( expr, expr, ... )`. Commas are optional separators.
pub fn parse_call_arguments(parser: &mut Parser) -> Result<Vec<Node>, Error> {
    parser.expect(&TokenKind::OpenParen)?;

    let mut arguments = vec![];

    loop {
        match parser.peek().map(|token| &token.kind) {
            None => {
                return Err(parser.error(ErrorImpl::ExpectedCharacter {
                    expected: String::from(")"),
                }))
            }
            Some(TokenKind::CloseParen) => break,
            Some(TokenKind::Comma) => {
                parser.advance()?;
            }
            Some(_) => arguments.push(parse_expr(parser)?),
        }
    }

    parser.expect(&TokenKind::CloseParen)?;

    Ok(arguments)
}

/// `( expr )` parses to the inner expression; parentheses leave no node.
pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Node, Error> {
    parser.expect(&TokenKind::OpenParen)?;
    let expr = parse_expr(parser)?;
    parser.expect(&TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_integer_expr(parser: &mut Parser) -> Result<Node, Error> {
    match parser.current_token_kind()? {
        TokenKind::IntegerConstant(value) => {
            parser.advance()?;
            Ok(Node::Integer(IntegerExpr { value: *value }))
        }
        _ => Err(parser.error(ErrorImpl::ExpectedNumber)),
    }
}

pub fn parse_float_expr(parser: &mut Parser) -> Result<Node, Error> {
    match parser.current_token_kind()? {
        TokenKind::FloatConstant(value) => {
            parser.advance()?;
            Ok(Node::Float(FloatExpr { value: *value }))
        }
        _ => Err(parser.error(ErrorImpl::ExpectedNumber)),
    }
}

pub fn parse_string_expr(parser: &mut Parser) -> Result<Node, Error> {
    match parser.current_token_kind()? {
        TokenKind::StringConstant(value) => {
            parser.advance()?;
            Ok(Node::String(StringExpr {
                value: value.clone(),
            }))
        }
        _ => Err(parser.error(ErrorImpl::ExpectedStringLiteral)),
    }
}

/// `.Case(args...)` in a position whose declared type is `enum_type`.
///
/// The enum is named by the declaration, not looked up from the case.
pub fn parse_enum_construct_expr(
    parser: &mut Parser,
    enum_type: &TypeNode,
) -> Result<Node, Error> {
    parser.expect(&TokenKind::Period)?;

    let case_name = read_identifier(parser)?;
    let arguments = parse_call_arguments(parser)?;

    Ok(Node::EnumConstruct(EnumConstructExpr {
        enum_name: enum_type.name.clone(),
        case_name,
        arguments,
    }))
}

pub fn read_identifier(parser: &mut Parser) -> Result<String, Error> {
    match parser.peek().map(|token| &token.kind) {
        Some(TokenKind::Identifier(name)) => {
            parser.advance()?;
            Ok(name.clone())
        }
        _ => Err(parser.error(ErrorImpl::ExpectedIdentifier)),
    }
}
