//! Byte-level tokenizer feeding the parser.
//!
//! The scanner walks the input once, left to right, producing the primitive
//! tokens the parser consumes: strings (escapes decoded to UTF-8), numbers
//! (strict JSON grammar, converted to `f64`) and the three literals. Every
//! failure carries the byte offset of the offending byte.

use crate::error::{JotError, Result};

pub(crate) struct Scanner<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(text: &'a str) -> Scanner<'a> {
        Scanner {
            bytes: text.as_bytes(),
            pos: 0,
        }
    }

    /// Current byte offset into the input.
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    pub(crate) fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    /// Skip space, tab, CR, LF between tokens.
    pub(crate) fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\r' | b'\n') = self.peek() {
            self.pos += 1;
        }
    }

    /// Consume `expected` or fail at the current offset.
    pub(crate) fn expect(&mut self, expected: u8) -> Result<()> {
        match self.peek() {
            Some(b) if b == expected => {
                self.pos += 1;
                Ok(())
            }
            _ => Err(JotError::parse(
                self.pos,
                format!("expected '{}'", expected as char),
            )),
        }
    }

    /// Consume a keyword literal (`true`, `false`, `null`).
    pub(crate) fn scan_literal(&mut self, literal: &str) -> Result<()> {
        if self.bytes[self.pos..].starts_with(literal.as_bytes()) {
            self.pos += literal.len();
            Ok(())
        } else {
            Err(JotError::parse(
                self.pos,
                format!("expected '{literal}'"),
            ))
        }
    }

    /// Scan a quoted string, decoding escape sequences into UTF-8.
    ///
    /// The opening quote must be at the current position. Unterminated
    /// strings, raw control characters, bad escapes and unpaired surrogates
    /// are errors at the offending byte.
    pub(crate) fn scan_string(&mut self) -> Result<String> {
        self.expect(b'"')?;
        let mut out = String::new();
        loop {
            let start = self.pos;
            match self.bump() {
                None => return Err(JotError::parse(start, "unterminated string")),
                Some(b'"') => return Ok(out),
                Some(b'\\') => self.scan_escape(&mut out)?,
                Some(b) if b < 0x20 => {
                    return Err(JotError::parse(start, "control character in string"));
                }
                Some(b) if b < 0x80 => out.push(b as char),
                Some(b) => {
                    // Multi-byte UTF-8: copy the whole sequence through.
                    let len = utf8_len(b)
                        .ok_or_else(|| JotError::parse(start, "invalid UTF-8 byte"))?;
                    let end = start + len;
                    let slice = self
                        .bytes
                        .get(start..end)
                        .ok_or_else(|| JotError::parse(start, "truncated UTF-8 sequence"))?;
                    let s = std::str::from_utf8(slice)
                        .map_err(|_| JotError::parse(start, "invalid UTF-8 sequence"))?;
                    out.push_str(s);
                    self.pos = end;
                }
            }
        }
    }

    /// Decode one escape sequence. The backslash is already consumed; errors
    /// point at the escape character or the bad `\u` digits, not back at the
    /// backslash.
    fn scan_escape(&mut self, out: &mut String) -> Result<()> {
        let esc_at = self.pos;
        match self.bump() {
            Some(b'"') => out.push('"'),
            Some(b'\\') => out.push('\\'),
            Some(b'/') => out.push('/'),
            Some(b'b') => out.push('\u{0008}'),
            Some(b'f') => out.push('\u{000C}'),
            Some(b'n') => out.push('\n'),
            Some(b'r') => out.push('\r'),
            Some(b't') => out.push('\t'),
            Some(b'u') => {
                let digits_at = self.pos;
                let unit = self.scan_hex4()?;
                let ch = if (0xD800..0xDC00).contains(&unit) {
                    // High surrogate: a \uXXXX low surrogate must follow.
                    let cont_at = self.pos;
                    if self.bump() != Some(b'\\') || self.bump() != Some(b'u') {
                        return Err(JotError::parse(cont_at, "unpaired surrogate"));
                    }
                    let low_at = self.pos;
                    let low = self.scan_hex4()?;
                    if !(0xDC00..0xE000).contains(&low) {
                        return Err(JotError::parse(low_at, "invalid low surrogate"));
                    }
                    let code = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
                    char::from_u32(code)
                        .ok_or_else(|| JotError::parse(digits_at, "invalid surrogate pair"))?
                } else if (0xDC00..0xE000).contains(&unit) {
                    return Err(JotError::parse(digits_at, "unpaired surrogate"));
                } else {
                    char::from_u32(unit)
                        .ok_or_else(|| JotError::parse(digits_at, "invalid \\u escape"))?
                };
                out.push(ch);
            }
            _ => return Err(JotError::parse(esc_at, "invalid escape sequence")),
        }
        Ok(())
    }

    fn scan_hex4(&mut self) -> Result<u32> {
        let mut value = 0u32;
        for _ in 0..4 {
            let at = self.pos;
            let digit = match self.bump() {
                Some(b @ b'0'..=b'9') => (b - b'0') as u32,
                Some(b @ b'a'..=b'f') => (b - b'a' + 10) as u32,
                Some(b @ b'A'..=b'F') => (b - b'A' + 10) as u32,
                _ => return Err(JotError::parse(at, "expected hex digit")),
            };
            value = value * 16 + digit;
        }
        Ok(value)
    }

    /// Scan a number per the JSON grammar: optional `-`, integer part with no
    /// leading zeros, optional fraction, optional exponent. Magnitude beyond
    /// `f64` precision rounds silently.
    pub(crate) fn scan_number(&mut self) -> Result<f64> {
        let start = self.pos;

        if self.peek() == Some(b'-') {
            self.pos += 1;
        }
        match self.peek() {
            Some(b'0') => {
                self.pos += 1;
            }
            Some(b'1'..=b'9') => {
                self.eat_digits();
            }
            _ => return Err(JotError::parse(self.pos, "expected digit")),
        }
        if self.peek() == Some(b'.') {
            self.pos += 1;
            self.eat_digits_required()?;
        }
        if let Some(b'e' | b'E') = self.peek() {
            self.pos += 1;
            if let Some(b'+' | b'-') = self.peek() {
                self.pos += 1;
            }
            self.eat_digits_required()?;
        }

        let text = std::str::from_utf8(&self.bytes[start..self.pos])
            .map_err(|_| JotError::parse(start, "malformed number"))?;
        text.parse::<f64>()
            .map_err(|_| JotError::parse(start, "malformed number"))
    }

    fn eat_digits(&mut self) {
        while let Some(b'0'..=b'9') = self.peek() {
            self.pos += 1;
        }
    }

    fn eat_digits_required(&mut self) -> Result<()> {
        match self.peek() {
            Some(b'0'..=b'9') => {
                self.eat_digits();
                Ok(())
            }
            _ => Err(JotError::parse(self.pos, "expected digit")),
        }
    }
}

/// Length of a UTF-8 sequence from its lead byte; `None` for continuation or
/// invalid lead bytes.
fn utf8_len(lead: u8) -> Option<usize> {
    match lead {
        0xC0..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF7 => Some(4),
        _ => None,
    }
}
