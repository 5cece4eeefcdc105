use crate::{ast::ast::Node, errors::errors::Error, lexer::tokens::TokenKind};

use super::{parser::Parser, stmt::*};

pub type StmtHandler = fn(&mut Parser<'_>) -> Result<Node, Error>;

/// Statement handler for a leading keyword. `None` means the statement is
/// an expression.
pub fn stmt_lookup(kind: &TokenKind) -> Option<StmtHandler> {
    match kind {
        TokenKind::Function => Some(parse_fn_decl_stmt),
        TokenKind::Enum => Some(parse_enum_decl_stmt),
        TokenKind::Let | TokenKind::Var => Some(parse_var_decl_stmt),
        TokenKind::Return => Some(parse_return_stmt),
        TokenKind::Print => Some(parse_print_stmt),
        _ => None,
    }
}
