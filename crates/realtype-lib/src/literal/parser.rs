//! Recursive descent parser for literal notation.

use realtype_core::{BigInt, Value};

use super::error::{LiteralError, LiteralErrorKind};
use super::lexer::{Token, TokenKind, lex, unescape};

/// Deepest nesting of values accepted before parsing stops.
pub const MAX_DEPTH: u32 = 256;

/// Parse exactly one value.
pub fn parse_value(source: &str) -> Result<Value, LiteralError> {
    let mut parser = Parser::new(source)?;
    let value = parser.value()?;
    parser.finish()?;
    Ok(value)
}

/// Parse a comma-separated list of values. Empty input yields an empty
/// list; a trailing comma is allowed.
pub fn parse_values(source: &str) -> Result<Vec<Value>, LiteralError> {
    let mut parser = Parser::new(source)?;
    let values = parser.list(None)?;
    parser.finish()?;
    Ok(values)
}

struct Parser<'s> {
    source: &'s str,
    tokens: Vec<Token>,
    pos: usize,
    depth: u32,
}

impl<'s> Parser<'s> {
    fn new(source: &'s str) -> Result<Self, LiteralError> {
        Ok(Self {
            source,
            tokens: lex(source)?,
            pos: 0,
            depth: 0,
        })
    }

    fn peek_kind(&self) -> Option<TokenKind> {
        self.tokens.get(self.pos).map(|t| t.kind)
    }

    fn bump(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned()?;
        self.pos += 1;
        Some(token)
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.peek_kind() == Some(kind) {
            self.pos += 1;
            return true;
        }
        false
    }

    /// Start offset of the next token (or end of input).
    fn offset(&self) -> usize {
        self.tokens
            .get(self.pos)
            .map_or(self.source.len(), |t| t.span.start)
    }

    /// End offset of the last consumed token.
    fn prev_end(&self) -> usize {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map_or(0, |t| t.span.end)
    }

    fn text(&self, token: &Token) -> &'s str {
        token.text(self.source)
    }

    fn unexpected(&self, token: Option<&Token>, expected: &'static str) -> LiteralError {
        match token {
            Some(t) => LiteralError::new(
                LiteralErrorKind::UnexpectedToken { expected },
                t.span.clone(),
            ),
            None => LiteralError::new(
                LiteralErrorKind::UnexpectedEnd { expected },
                self.source.len()..self.source.len(),
            ),
        }
    }

    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> Result<Token, LiteralError> {
        match self.bump() {
            Some(t) if t.kind == kind => Ok(t),
            other => Err(self.unexpected(other.as_ref(), expected)),
        }
    }

    fn finish(&self) -> Result<(), LiteralError> {
        match self.tokens.get(self.pos) {
            Some(t) => Err(LiteralError::new(
                LiteralErrorKind::TrailingInput,
                t.span.start..self.source.len(),
            )),
            None => Ok(()),
        }
    }

    /// Values separated by commas, stopping before `close` (or at end of
    /// input when `close` is `None`).
    fn list(&mut self, close: Option<TokenKind>) -> Result<Vec<Value>, LiteralError> {
        let mut items = Vec::new();
        while self.peek_kind() != close {
            items.push(self.value()?);
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        Ok(items)
    }

    fn enter_recursion(&mut self) -> Result<(), LiteralError> {
        if self.depth >= MAX_DEPTH {
            let start = self.offset();
            let end = self.tokens.get(self.pos).map_or(start, |t| t.span.end);
            return Err(LiteralError::new(
                LiteralErrorKind::RecursionLimitExceeded,
                start..end,
            ));
        }
        self.depth += 1;
        Ok(())
    }

    fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Every nested value passes through here, so the depth bound covers
    /// arrays, objects, constructor arguments and settled promises alike.
    fn value(&mut self) -> Result<Value, LiteralError> {
        self.enter_recursion()?;
        let value = self.value_inner();
        self.exit_recursion();
        value
    }

    fn value_inner(&mut self) -> Result<Value, LiteralError> {
        let Some(token) = self.bump() else {
            return Err(self.unexpected(None, "a value"));
        };

        match token.kind {
            TokenKind::Number => self.number(&token, false),
            TokenKind::HexNumber => self.hex_number(&token, false),
            TokenKind::BigInt => self.bigint(&token, false),
            TokenKind::Minus => self.negative(token.span.start),
            TokenKind::String => Ok(Value::from(unescape(self.source, token.span)?)),
            TokenKind::RegExp => self.regexp(&token),
            TokenKind::BracketOpen => {
                let items = self.list(Some(TokenKind::BracketClose))?;
                self.expect(TokenKind::BracketClose, "',' or ']'")?;
                Ok(Value::array(items))
            }
            TokenKind::BraceOpen => self.object(),
            TokenKind::Ident => self.ident(&token),
            _ => Err(self.unexpected(Some(&token), "a value")),
        }
    }

    fn negative(&mut self, start: usize) -> Result<Value, LiteralError> {
        let Some(token) = self.bump() else {
            return Err(self.unexpected(None, "a number after '-'"));
        };
        match token.kind {
            TokenKind::Number => self.number(&token, true),
            TokenKind::HexNumber => self.hex_number(&token, true),
            TokenKind::BigInt => self.bigint(&token, true),
            TokenKind::Ident if self.text(&token) == "Infinity" => {
                Ok(Value::Number(f64::NEG_INFINITY))
            }
            _ => Err(LiteralError::new(
                LiteralErrorKind::UnexpectedToken {
                    expected: "a number after '-'",
                },
                start..token.span.end,
            )),
        }
    }

    fn number(&self, token: &Token, negate: bool) -> Result<Value, LiteralError> {
        let n: f64 = self
            .text(token)
            .parse()
            .map_err(|_| invalid_number(token))?;
        Ok(Value::Number(if negate { -n } else { n }))
    }

    fn hex_number(&self, token: &Token, negate: bool) -> Result<Value, LiteralError> {
        // Folded into an f64 so literals wider than any integer type round
        // instead of failing.
        let n = self.text(token)[2..]
            .chars()
            .try_fold(0.0, |acc: f64, c| {
                c.to_digit(16).map(|d| acc * 16.0 + f64::from(d))
            })
            .ok_or_else(|| invalid_number(token))?;
        Ok(Value::Number(if negate { -n } else { n }))
    }

    fn bigint(&self, token: &Token, negate: bool) -> Result<Value, LiteralError> {
        let text = self.text(token);
        let n: BigInt = text[..text.len() - 1]
            .parse()
            .map_err(|_| invalid_number(token))?;
        Ok(Value::BigInt(if negate { -n } else { n }))
    }

    fn regexp(&self, token: &Token) -> Result<Value, LiteralError> {
        let text = self.text(token);
        let close = text.rfind('/').unwrap_or(text.len());
        let (source, flags) = (&text[1..close], &text[close + 1..]);
        Value::regexp(source, flags)
            .map_err(|err| LiteralError::new(err.into(), token.span.clone()))
    }

    fn object(&mut self) -> Result<Value, LiteralError> {
        let mut properties = Vec::new();
        while self.peek_kind() != Some(TokenKind::BraceClose) {
            let key = match self.bump() {
                Some(t) if t.kind == TokenKind::Ident => self.text(&t).to_owned(),
                Some(t) if t.kind == TokenKind::String => unescape(self.source, t.span)?,
                other => return Err(self.unexpected(other.as_ref(), "a property name")),
            };
            self.expect(TokenKind::Colon, "':'")?;
            properties.push((key, self.value()?));
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::BraceClose, "',' or '}'")?;
        Ok(Value::object(properties))
    }

    fn ident(&mut self, token: &Token) -> Result<Value, LiteralError> {
        match self.text(token) {
            "undefined" => Ok(Value::Undefined),
            "null" => Ok(Value::Null),
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            "NaN" => Ok(Value::Number(f64::NAN)),
            "Infinity" => Ok(Value::Number(f64::INFINITY)),
            "Symbol" => self.symbol(),
            "function" => self.function(),
            "new" => self.constructor(),
            "Promise" => self.promise_settled(),
            other => Err(LiteralError::new(
                LiteralErrorKind::UnknownIdentifier(other.to_owned()),
                token.span.clone(),
            )),
        }
    }

    fn symbol(&mut self) -> Result<Value, LiteralError> {
        self.expect(TokenKind::ParenOpen, "'('")?;
        let description = match self.peek_kind() {
            Some(TokenKind::String) => {
                let token = self.expect(TokenKind::String, "a string")?;
                Some(unescape(self.source, token.span)?)
            }
            _ => None,
        };
        self.expect(TokenKind::ParenClose, "')'")?;
        Ok(Value::symbol(description.as_deref()))
    }

    /// `function name() {}`. The body must be empty; calling the result
    /// yields `undefined`.
    fn function(&mut self) -> Result<Value, LiteralError> {
        let name = match self.peek_kind() {
            Some(TokenKind::Ident) => {
                let token = self.expect(TokenKind::Ident, "a function name")?;
                Some(self.text(&token).to_owned())
            }
            _ => None,
        };
        self.expect(TokenKind::ParenOpen, "'('")?;
        self.expect(TokenKind::ParenClose, "')'")?;
        self.expect(TokenKind::BraceOpen, "'{'")?;
        self.expect(TokenKind::BraceClose, "'}'")?;
        Ok(match name {
            Some(name) => Value::function(name, |_| Value::Undefined),
            None => Value::anonymous_function(|_| Value::Undefined),
        })
    }

    fn promise_settled(&mut self) -> Result<Value, LiteralError> {
        self.expect(TokenKind::Dot, "'.'")?;
        let method = self.expect(TokenKind::Ident, "'resolve' or 'reject'")?;
        let settle: fn(Value) -> Value = match self.text(&method) {
            "resolve" => Value::promise_resolved,
            "reject" => Value::promise_rejected,
            other => {
                return Err(LiteralError::new(
                    LiteralErrorKind::UnknownConstructor(format!("Promise.{other}")),
                    method.span,
                ));
            }
        };
        self.expect(TokenKind::ParenOpen, "'('")?;
        let value = self.value()?;
        self.expect(TokenKind::ParenClose, "')'")?;
        Ok(settle(value))
    }

    fn constructor(&mut self) -> Result<Value, LiteralError> {
        let name = self.expect(TokenKind::Ident, "a constructor name")?;
        self.expect(TokenKind::ParenOpen, "'('")?;

        let value = match self.text(&name) {
            "Date" => self.date_argument()?,
            "Set" => Value::set(self.iterable_argument()?.unwrap_or_default()),
            "Map" => {
                let start = self.offset();
                let items = self.iterable_argument()?.unwrap_or_default();
                let span = start..self.prev_end().max(start);
                let entries = items
                    .iter()
                    .map(|item| match item.as_array() {
                        Some([key, value]) => Ok((key.clone(), value.clone())),
                        _ => Err(LiteralError::new(
                            LiteralErrorKind::InvalidMapEntry,
                            span.clone(),
                        )),
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Value::map(entries)
            }
            "WeakSet" => Value::weak_set(),
            "WeakMap" => Value::weak_map(),
            "Promise" => Value::promise_pending(),
            other => {
                return Err(LiteralError::new(
                    LiteralErrorKind::UnknownConstructor(other.to_owned()),
                    name.span,
                ));
            }
        };

        self.expect(TokenKind::ParenClose, "')'")?;
        Ok(value)
    }

    /// `new Date(millis)` or `new Date("timestamp")`.
    fn date_argument(&mut self) -> Result<Value, LiteralError> {
        let start = self.offset();
        let argument = self.value()?;
        let span = start..self.prev_end();
        let date = match &argument {
            Value::Number(millis) => Value::date_from_millis(*millis),
            Value::String(text) => Value::date_parse(text),
            _ => {
                return Err(LiteralError::new(
                    LiteralErrorKind::UnexpectedToken {
                        expected: "a number or string",
                    },
                    span,
                ));
            }
        };
        date.map_err(|err| LiteralError::new(err.into(), span))
    }

    /// Optional array argument of a collection constructor.
    fn iterable_argument(&mut self) -> Result<Option<Vec<Value>>, LiteralError> {
        if self.peek_kind() == Some(TokenKind::ParenClose) {
            return Ok(None);
        }
        let start = self.offset();
        let argument = self.value()?;
        match argument.as_array() {
            Some(items) => Ok(Some(items.to_vec())),
            None => Err(LiteralError::new(
                LiteralErrorKind::ExpectedArray,
                start..self.prev_end(),
            )),
        }
    }
}

fn invalid_number(token: &Token) -> LiteralError {
    LiteralError::new(LiteralErrorKind::InvalidNumber, token.span.clone())
}
