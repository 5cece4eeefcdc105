//! Lexical analysis module for the front end.
//!
//! This module turns source text into the token stream the parser reads.
//! It handles:
//!
//! - Comment stripping ahead of tokenization
//! - Tokenization of source code using regex patterns
//! - Recognition of keywords, identifiers, literals, and operators
//! - Operator precedence attached to each operator token
//! - Token position tracking for error reporting

pub mod lexer;
pub mod preprocessor;
pub mod tokens;

#[cfg(test)]
mod tests;
