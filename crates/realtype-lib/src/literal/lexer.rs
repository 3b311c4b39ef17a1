//! Lexer for literal notation.
//!
//! Produces span-based tokens without storing text. Text is sliced from the
//! source only when the parser needs it.

use std::iter::Peekable;
use std::ops::Range;
use std::str::CharIndices;

use logos::Logos;

use super::error::{LiteralError, LiteralErrorKind};

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token(",")]
    Comma,

    #[token(":")]
    Colon,

    #[token(".")]
    Dot,

    #[token("-")]
    Minus,

    /// Decimal number, optionally with fraction and exponent. Sign is a
    /// separate `Minus` token.
    #[regex(r"(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?")]
    Number,

    #[regex(r"0[xX][0-9a-fA-F]+")]
    HexNumber,

    #[regex(r"[0-9]+n")]
    BigInt,

    #[regex(r#""(?:[^"\\]|\\.)*""#)]
    #[regex(r"'(?:[^'\\]|\\.)*'")]
    String,

    /// `/source/flags`. A `/` inside a character class does not close
    /// the literal.
    #[regex(r"/(?:[^/\\\n\[]|\\.|\[(?:[^\]\\\n]|\\.)*\])+/[a-zA-Z]*")]
    RegExp,

    /// Keywords (`null`, `new`, `function`, ...) are identifiers too; the
    /// parser tells them apart by text.
    #[regex(r"[A-Za-z_$][A-Za-z0-9_$]*")]
    Ident,

    #[regex(r"[ \t\r\n]+")]
    Whitespace,
}

/// Zero-copy token: kind + byte span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Range<usize>,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Range<usize>) -> Self {
        Self { kind, span }
    }

    /// Slice of the source this token covers.
    #[inline]
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        &source[self.span.clone()]
    }
}

/// Tokenize `source`, dropping whitespace.
///
/// Stops at the first character no token accepts. An opening quote with no
/// closing partner is reported as an unterminated string.
pub fn lex(source: &str) -> Result<Vec<Token>, LiteralError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    loop {
        match lexer.next() {
            Some(Ok(TokenKind::Whitespace)) => {}
            Some(Ok(kind)) => tokens.push(Token::new(kind, lexer.span())),
            Some(Err(())) => {
                let span = lexer.span();
                let rest = &source[span.start..];
                if rest.starts_with('"') || rest.starts_with('\'') {
                    return Err(LiteralError::new(
                        LiteralErrorKind::UnterminatedString,
                        span.start..source.len(),
                    ));
                }
                return Err(LiteralError::new(LiteralErrorKind::UnexpectedChar, span));
            }
            None => break,
        }
    }

    Ok(tokens)
}

/// Decode the contents of a quoted string token.
///
/// Supports `\n \r \t \b \f \v \0`, escaped quotes and backslash, `\xHH`,
/// `\uHHHH` and `\u{H..}`.
pub(crate) fn unescape(source: &str, span: Range<usize>) -> Result<String, LiteralError> {
    let base = span.start + 1;
    let inner = &source[base..span.end - 1];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        let decoded = match chars.next() {
            Some((_, 'n')) => Some('\n'),
            Some((_, 'r')) => Some('\r'),
            Some((_, 't')) => Some('\t'),
            Some((_, 'b')) => Some('\u{8}'),
            Some((_, 'f')) => Some('\u{c}'),
            Some((_, 'v')) => Some('\u{b}'),
            Some((_, '0')) => Some('\0'),
            Some((_, c @ ('\\' | '"' | '\'' | '/'))) => Some(c),
            Some((_, 'x')) => take_hex(&mut chars, 2).and_then(char::from_u32),
            Some((_, 'u')) => take_unicode(&mut chars),
            _ => None,
        };

        match decoded {
            Some(c) => out.push(c),
            None => {
                let end = chars.peek().map_or(inner.len(), |&(i, _)| i);
                return Err(LiteralError::new(
                    LiteralErrorKind::InvalidEscape,
                    base + start..base + end,
                ));
            }
        }
    }

    Ok(out)
}

fn take_hex(chars: &mut Peekable<CharIndices<'_>>, count: usize) -> Option<u32> {
    let mut value = 0u32;
    for _ in 0..count {
        let (_, c) = chars.next()?;
        value = value * 16 + c.to_digit(16)?;
    }
    Some(value)
}

fn take_unicode(chars: &mut Peekable<CharIndices<'_>>) -> Option<char> {
    if chars.next_if(|&(_, c)| c == '{').is_none() {
        return take_hex(chars, 4).and_then(char::from_u32);
    }

    let mut value = 0u32;
    let mut digits = 0;
    loop {
        let (_, c) = chars.next()?;
        if c == '}' {
            break;
        }
        digits += 1;
        if digits > 6 {
            return None;
        }
        value = value * 16 + c.to_digit(16)?;
    }
    if digits == 0 {
        return None;
    }
    char::from_u32(value)
}
