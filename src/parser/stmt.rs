use tracing::trace;

use crate::{
    ast::{
        ast::Node,
        statements::{
            AssignStmt, EnumCaseDecl, EnumDeclStmt, FnDeclStmt, PrintStmt, PrototypeDecl,
            ReturnStmt, VariableDecl,
        },
        types::Mutability,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    expr::{
        parse_binary_expr, parse_call_arguments, parse_enum_construct_expr, parse_expr,
        read_identifier,
    },
    lookups::stmt_lookup,
    parser::Parser,
    types::parse_type,
};

pub fn parse_stmt(parser: &mut Parser) -> Result<Node, Error> {
    parser.nested(|parser| {
        let kind = parser.current_token_kind()?;
        trace!(token = %kind, "Parsing statement");

        if let Some(handler) = stmt_lookup(kind) {
            return handler(parser);
        }

        let expr = parse_expr(parser)?;
        parser.expect_terminator()?;

        Ok(expr)
    })
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let mutability = match parser.current_token_kind()? {
        TokenKind::Let => Mutability::Immutable,
        TokenKind::Var => Mutability::Mutable,
        _ => return Err(parser.error(ErrorImpl::ExpectedVariableDeclaration)),
    };
    parser.advance()?;

    let identifier = read_identifier(parser)?;

    // The `:` is taken on trust
    parser.advance()?;
    let type_ = parse_type(parser)?;

    let next = parser.peek().map(|token| &token.kind);
    match next {
        Some(TokenKind::Semicolon) => {
            parser.advance()?;
            Ok(Node::Variable(VariableDecl {
                mutability,
                type_,
                identifier,
            }))
        }
        Some(TokenKind::Equal) => {
            parser.advance()?;

            let value = if parser.at(&TokenKind::Period) {
                parse_enum_construct_expr(parser, &type_)?
            } else {
                parse_expr(parser)?
            };
            parser.expect_terminator()?;

            Ok(Node::Assign(AssignStmt {
                variable: VariableDecl {
                    mutability,
                    type_,
                    identifier,
                },
                value: Box::new(value),
            }))
        }
        _ => Err(parser.error(ErrorImpl::ExpectedCharacter {
            expected: String::from(";"),
        })),
    }
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Node, Error> {
    parser.expect_error(&TokenKind::Return, ErrorImpl::ExpectedReturn)?;

    let value = parse_expr(parser)?;
    parser.expect_terminator()?;

    Ok(Node::Return(ReturnStmt {
        value: Box::new(value),
    }))
}

pub fn parse_print_stmt(parser: &mut Parser) -> Result<Node, Error> {
    parser.expect_error(&TokenKind::Print, ErrorImpl::ExpectedPrint)?;

    let arguments = parse_call_arguments(parser)?;
    parser.expect_terminator()?;

    Ok(Node::Print(PrintStmt { arguments }))
}

pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<Node, Error> {
    parser.expect(&TokenKind::Function)?;

    let prototype = parse_prototype(parser)?;

    parser.expect(&TokenKind::OpenCurly)?;

    let mut body = vec![];
    loop {
        match parser.peek().map(|token| &token.kind) {
            None => {
                return Err(parser.error(ErrorImpl::ExpectedCharacter {
                    expected: String::from("}"),
                }))
            }
            Some(TokenKind::CloseCurly) => {
                parser.advance()?;
                break;
            }
            Some(_) => {
                let stmt = parse_stmt(parser)?;
                body.push(parse_binary_expr(parser, stmt, 0)?);
            }
        }
    }

    Ok(Node::Function(FnDeclStmt { prototype, body }))
}

/// `name(arg: Type, ...) -> Type`
pub fn parse_prototype(parser: &mut Parser) -> Result<PrototypeDecl, Error> {
    let name = read_identifier(parser)?;
    let arguments = parse_formal_arguments(parser)?;

    parser.expect(&TokenKind::Arrow)?;
    let return_type = parse_type(parser)?;

    Ok(PrototypeDecl {
        name,
        arguments,
        return_type,
    })
}

/// `(name: Type, ...)`, shared by prototypes and enum cases.
pub fn parse_formal_arguments(parser: &mut Parser) -> Result<Vec<VariableDecl>, Error> {
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
            Some(TokenKind::Identifier(identifier)) => {
                parser.advance()?;
                // The `:` is taken on trust
                parser.advance()?;
                let type_ = parse_type(parser)?;

                arguments.push(VariableDecl {
                    mutability: Mutability::Immutable,
                    type_,
                    identifier: identifier.clone(),
                });
            }
            Some(_) => return Err(parser.error(ErrorImpl::ExpectedIdentifier)),
        }
    }

    parser.expect(&TokenKind::CloseParen)?;

    Ok(arguments)
}

pub fn parse_enum_decl_stmt(parser: &mut Parser) -> Result<Node, Error> {
    parser.expect_error(&TokenKind::Enum, ErrorImpl::ExpectedEnum)?;

    let name = read_identifier(parser)?;

    parser.expect(&TokenKind::OpenCurly)?;

    let mut cases = vec![];
    loop {
        if !parser.has_tokens() {
            return Err(parser.error(ErrorImpl::ExpectedCharacter {
                expected: String::from("}"),
            }));
        }

        if parser.at(&TokenKind::CloseCurly) {
            parser.advance()?;
            break;
        }

        parser.expect(&TokenKind::Case)?;

        let case_name = read_identifier(parser)?;
        let associated_values = parse_formal_arguments(parser)?;

        parser.expect(&TokenKind::Semicolon)?;

        cases.push(EnumCaseDecl {
            enum_name: name.clone(),
            case_name,
            associated_values,
        });
    }

    Ok(Node::Enum(EnumDeclStmt { name, cases }))
}
