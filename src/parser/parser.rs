//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser is a single-pass recursive descent over a borrowed token
//! slice. Statements are dispatched through the lookup in `lookups`,
//! expressions are built by precedence climbing in `expr`, using the
//! precedence carried by each operator token.

use std::rc::Rc;

use tracing::trace;

use crate::{
    ast::ast::Node,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::stmt::parse_stmt;

/// Tunables for a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Deepest statement/expression nesting accepted before the parse fails
    /// with `NestingTooDeep`.
    pub max_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        ParserOptions { max_depth: 256 }
    }
}

/// The main parser structure that maintains parsing state.
///
/// The token slice is never modified; `pos` only ever moves forward.
pub struct Parser<'a> {
    /// The list of tokens to parse
    tokens: &'a [Token],
    /// Current position in the token stream
    pos: usize,
    /// Current nesting depth of statements and expressions
    depth: usize,
    options: ParserOptions,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser::with_options(tokens, ParserOptions::default())
    }

    pub fn with_options(tokens: &'a [Token], options: ParserOptions) -> Self {
        Parser {
            tokens,
            pos: 0,
            depth: 0,
            options,
        }
    }

    /// Parses statements until the token stream is exhausted.
    ///
    /// The first error aborts the whole parse; no partial tree is returned.
    #[tracing::instrument(level = "trace", skip(self), fields(tokens = self.tokens.len()))]
    pub fn parse(&mut self) -> Result<Vec<Node>, Error> {
        let mut body = vec![];

        while self.has_tokens() {
            body.push(parse_stmt(self)?);
        }

        trace!(statements = body.len(), "Parsed program");
        Ok(body)
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len()
    }

    /// Returns the current token without advancing, if there is one.
    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> Result<&'a Token, Error> {
        self.peek()
            .ok_or_else(|| self.error(ErrorImpl::UnexpectedEndOfInput))
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> Result<&'a TokenKind, Error> {
        Ok(&self.current_token()?.kind)
    }

    /// Whether the current token is `kind`. False at end of input.
    pub fn at(&self, kind: &TokenKind) -> bool {
        self.peek().is_some_and(|token| token.kind == *kind)
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> Result<&'a Token, Error> {
        let token = self.current_token()?;
        self.pos += 1;
        Ok(token)
    }

    /// Returns the most recently consumed token.
    pub fn previous_token(&self) -> Option<&'a Token> {
        self.pos.checked_sub(1).and_then(|pos| self.tokens.get(pos))
    }

    /// Precedence of the current token if it is an operator, otherwise -1.
    pub fn current_precedence(&self) -> i32 {
        match self.peek().map(|token| &token.kind) {
            Some(TokenKind::Operator(_, precedence)) => *precedence,
            _ => -1,
        }
    }

    /// Consumes a token of the specified kind, failing with `error` otherwise.
    pub fn expect_error(
        &mut self,
        expected_kind: &TokenKind,
        error: ErrorImpl,
    ) -> Result<&'a Token, Error> {
        if self.at(expected_kind) {
            self.advance()
        } else {
            Err(self.error(error))
        }
    }

    /// Consumes a token of the specified kind, failing with `ExpectedCharacter`.
    pub fn expect(&mut self, expected_kind: &TokenKind) -> Result<&'a Token, Error> {
        self.expect_error(
            expected_kind,
            ErrorImpl::ExpectedCharacter {
                expected: expected_kind.to_string(),
            },
        )
    }

    /// Consumes the `;` ending a statement.
    ///
    /// A call followed by `;` already swallows the semicolon, so one that
    /// was just consumed also counts.
    pub fn expect_terminator(&mut self) -> Result<(), Error> {
        if self.at(&TokenKind::Semicolon) {
            self.advance()?;
            return Ok(());
        }

        match self.previous_token() {
            Some(token) if token.kind == TokenKind::Semicolon => Ok(()),
            _ => Err(self.error(ErrorImpl::ExpectedCharacter {
                expected: String::from(";"),
            })),
        }
    }

    /// Runs `parse_fn` one nesting level deeper.
    pub fn nested<T>(
        &mut self,
        parse_fn: impl FnOnce(&mut Self) -> Result<T, Error>,
    ) -> Result<T, Error> {
        if self.depth >= self.options.max_depth {
            return Err(self.error(ErrorImpl::NestingTooDeep {
                limit: self.options.max_depth,
            }));
        }

        self.depth += 1;
        let result = parse_fn(self);
        self.depth -= 1;
        result
    }

    /// Returns the source position of the current token, or the end of the
    /// last token once input is exhausted.
    pub fn get_position(&self) -> Position {
        match (self.peek(), self.tokens.last()) {
            (Some(token), _) => token.span.start.clone(),
            (None, Some(last)) => last.span.end.clone(),
            (None, None) => Position(0, Rc::new(String::from("<empty>"))),
        }
    }

    /// Builds an error located at the current token.
    pub fn error(&self, error_impl: ErrorImpl) -> Error {
        Error::new(error_impl, self.get_position())
    }
}

/// Parses a stream of tokens into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing. It creates a parser over
/// `tokens` with default options and parses all statements.
pub fn parse(tokens: &[Token]) -> Result<Vec<Node>, Error> {
    Parser::new(tokens).parse()
}

/// Like [`parse`], with explicit [`ParserOptions`].
pub fn parse_with_options(tokens: &[Token], options: ParserOptions) -> Result<Vec<Node>, Error> {
    Parser::with_options(tokens, options).parse()
}
