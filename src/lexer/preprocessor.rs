//! Comment stripping, run on raw source before tokenization.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    // String literals are matched first so comment markers inside them survive.
    static ref COMMENT_OR_STRING: Regex =
        Regex::new(r#""(?:[^"\\]|\\.)*"|//[^\n]*|/\*(?s:.*?)\*/|/\*(?s:.*)"#).unwrap();
}

/// Removes `//` and `/* */` comments from `source`.
///
/// Comment text is blanked rather than deleted: every byte becomes a space
/// except newlines, so byte offsets and line numbers of the remaining code
/// are unchanged.
pub fn strip_comments(source: &str) -> String {
    COMMENT_OR_STRING
        .replace_all(source, |caps: &Captures| {
            let matched = &caps[0];
            if matched.starts_with('"') {
                return matched.to_string();
            }

            matched
                .chars()
                .map(|c| if c == '\n' { String::from("\n") } else { " ".repeat(c.len_utf8()) })
                .collect::<String>()
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::strip_comments;

    #[test]
    fn test_strips_line_comment() {
        assert_eq!(strip_comments("let x: Integer; // note\nx"), "let x: Integer;        \nx");
    }

    #[test]
    fn test_strips_block_comment_keeping_lines() {
        let stripped = strip_comments("a /* one\ntwo */ b");

        assert_eq!(stripped, "a       \n       b");
        assert_eq!(stripped.len(), "a /* one\ntwo */ b".len());
    }

    #[test]
    fn test_keeps_markers_inside_strings() {
        let source = r#"print("http://x /* y */");"#;

        assert_eq!(strip_comments(source), source);
    }

    #[test]
    fn test_unterminated_block_comment_runs_to_end() {
        assert_eq!(strip_comments("x /* open"), "x        ");
    }

    #[test]
    fn test_multibyte_comment_keeps_byte_length() {
        let source = "// héllo\ny";

        assert_eq!(strip_comments(source).len(), source.len());
        assert!(strip_comments(source).ends_with("\ny"));
    }
}
