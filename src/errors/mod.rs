//! Error types and error handling for the front end.
//!
//! This module defines the single error type shared by the tokenizer and
//! the parser. It includes:
//!
//! - Error structures with source position information
//! - One variant per expectation the parser can violate
//! - Error names and suggestions used by the diagnostic printer

pub mod errors;
