use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, OPERATOR_PRECEDENCE, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &str) -> Result<(), Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler
}

// Every pattern is anchored; the first one matching at the cursor wins.
lazy_static! {
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^\\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^[0-9]+\\.[0-9]+").unwrap(), handler: float_handler },
        RegexPattern { regex: Regex::new("^[0-9]+").unwrap(), handler: integer_handler },
        RegexPattern { regex: Regex::new("^\"([^\"\\\\]|\\\\.)*\"").unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new("^\"").unwrap(), handler: unterminated_string_handler },
        RegexPattern { regex: Regex::new("^->").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Arrow, "->") },
        RegexPattern { regex: Regex::new("^(\\|\\||&&|==|!=|<=|>=|<|>|\\+|-|\\*|/|%)").unwrap(), handler: operator_handler },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equal, "=") },
        RegexPattern { regex: Regex::new("^\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{") },
        RegexPattern { regex: Regex::new("^\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}") },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
        RegexPattern { regex: Regex::new("^:").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Colon, ":") },
        RegexPattern { regex: Regex::new("^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
        RegexPattern { regex: Regex::new("^\\.").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Period, ".") },
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            pos: 0,
            tokens: vec![],
            source,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position(self.pos as u32, Rc::clone(&self.file))
    }

    /// Span covering the next `len` bytes from the cursor.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: self.position(),
            end: Position((self.pos + len) as u32, Rc::clone(&self.file)),
        }
    }
}

fn skip_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    lexer.advance_n(matched.len());
    Ok(())
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    let kind = match RESERVED_LOOKUP.get(matched) {
        Some(kind) => kind.clone(),
        None => TokenKind::Identifier(String::from(matched)),
    };

    let span = lexer.span_of(matched.len());
    lexer.push(MK_TOKEN!(kind, span));
    lexer.advance_n(matched.len());
    Ok(())
}

fn integer_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    let value = matched.parse::<i64>().map_err(|_| {
        Error::new(ErrorImpl::NumberParseError { token: String::from(matched) }, lexer.position())
    })?;

    let span = lexer.span_of(matched.len());
    lexer.push(MK_TOKEN!(TokenKind::IntegerConstant(value), span));
    lexer.advance_n(matched.len());
    Ok(())
}

fn float_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    let value = matched.parse::<f64>().map_err(|_| {
        Error::new(ErrorImpl::NumberParseError { token: String::from(matched) }, lexer.position())
    })?;

    let span = lexer.span_of(matched.len());
    lexer.push(MK_TOKEN!(TokenKind::FloatConstant(value), span));
    lexer.advance_n(matched.len());
    Ok(())
}

fn operator_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    let Some(precedence) = OPERATOR_PRECEDENCE.get(matched) else {
        return Err(Error::new(ErrorImpl::UnrecognisedToken { token: String::from(matched) }, lexer.position()));
    };

    let span = lexer.span_of(matched.len());
    lexer.push(MK_TOKEN!(TokenKind::Operator(String::from(matched), *precedence), span));
    lexer.advance_n(matched.len());
    Ok(())
}

fn string_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    let string_literal = &matched[1..matched.len() - 1];

    let mut result = String::new();
    let mut chars = string_literal.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }

        match chars.peek() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('r') => result.push('\r'),
            Some('\\') => result.push('\\'),
            Some('"') => result.push('"'),
            Some('0') => result.push('\0'),
            Some(other) => {
                // Unknown escapes keep the backslash
                result.push(ch);
                result.push(*other);
            }
            None => {
                result.push(ch);
                continue;
            }
        }
        chars.next();
    }

    let span = lexer.span_of(matched.len());
    lexer.push(MK_TOKEN!(TokenKind::StringConstant(result), span));
    lexer.advance_n(matched.len());
    Ok(())
}

fn unterminated_string_handler(lexer: &mut Lexer, _matched: &str) -> Result<(), Error> {
    Err(Error::new(ErrorImpl::UnterminatedString, lexer.position()))
}

/// Turns comment-free source text into the token sequence the parser reads.
///
/// No end-of-file marker is appended.
#[tracing::instrument(level = "trace", skip_all)]
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        let mut matched = None;

        for pattern in PATTERNS.iter() {
            if let Some(found) = pattern.regex.find(lex.remainder()) {
                matched = Some((pattern.handler, found.as_str().to_string()));
                break;
            }
        }

        let Some((handler, text)) = matched else {
            let token = lex.remainder().chars().next().map(String::from).unwrap_or_default();
            return Err(Error::new(ErrorImpl::UnrecognisedToken { token }, lex.position()));
        };

        handler(&mut lex, &text)?;
    }

    trace!(count = lex.tokens.len(), "Tokenized source");
    Ok(lex.tokens)
}
