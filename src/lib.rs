#![allow(clippy::module_inception)]

use std::{fmt::Write, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn null() -> Self {
        Span {
            start: Position::null(),
            end: Position::null(),
        }
    }
}

/// Finds the line containing byte offset `position`.
///
/// Returns the 1-based line number, the line text and the offset of
/// `position` within that line. An offset at the very end of the content
/// resolves to the last line.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > content.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;
    let mut last = None;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        last = Some((line_number, line.to_string(), pos - start));
        start = end;
        line_number += 1;
    }

    last
}

/// Renders a caret diagnostic for `error` against the source it came from.
pub fn format_error(error: &Error, file: &str, source: &str) -> String {
    /*
        Error: ExpectedCharacter (expected `;`)
        -> main.teddy
           |
        20 | let a: Integer = 5
           | ------------------^
    */

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(out, "Error: {}", error.get_error_name());
    } else {
        let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    let _ = writeln!(out, "-> {}", file);

    let Some((line, line_text, line_pos)) = get_line_at_position(source, error.get_position().0)
    else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let _ = writeln!(out, "{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let _ = writeln!(out, "{} | {}", line_string, line_text_removed.trim_end());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    let _ = writeln!(out, "{:>padding$} {:->arrows$}", "|", "^");

    out
}

/// Prints the diagnostic produced by [`format_error`] to stderr.
pub fn display_error(error: &Error, file: &str, source: &str) {
    eprint!("{}", format_error(error, file, source));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.chars().take_while(|c| *c == ' ').count();

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        errors::errors::{Error, ErrorImpl},
        Position,
    };

    const CONTENT: &str = "Hello, world!\nThis is a test file.\nIt has multiple lines.\nTesting { }\n";

    #[test]
    fn test_get_line_at_position() {
        let (line_number, line, line_pos) = super::get_line_at_position(CONTENT, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(CONTENT, 66).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_past_end() {
        assert!(super::get_line_at_position("abc", 10).is_none());
        assert_eq!(super::get_line_at_position("abc", 3).unwrap().0, 1);
    }

    #[test]
    fn test_format_error_points_at_offset() {
        let source = "let x: Integer = 5\n";
        let error = Error::new(
            ErrorImpl::ExpectedCharacter {
                expected: String::from(";"),
            },
            Position(17, Rc::new(String::from("main.teddy"))),
        );

        let rendered = super::format_error(&error, "main.teddy", source);
        let lines = rendered.lines().collect::<Vec<_>>();

        assert_eq!(lines[0], "Error: ExpectedCharacter (expected `;`)");
        assert_eq!(lines[1], "-> main.teddy");
        assert_eq!(lines[3], "1 | let x: Integer = 5");
        assert_eq!(lines[4], format!("  | {}^", "-".repeat(17)));
    }
}
