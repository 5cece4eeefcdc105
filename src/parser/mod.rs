//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It uses precedence climbing for binary
//! expressions, driven by the precedence each operator token carries, and
//! handles:
//!
//! - Statement dispatch (functions, enums, variable declarations, return, print)
//! - Expression parsing (binary ops, calls, literals, enum case construction)
//! - Type annotations
//! - Fail-fast error reporting
//!
//! There is no error recovery: the first error ends the parse.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;
