// Dweve JEX - Streaming JSON Projection
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Byte-level JSON tokenizer.
//!
//! [`JsonScanner`] reads any [`Read`] source through a buffered reader and
//! yields [`Token`]s one at a time, tracking the input line for error
//! reporting. Strings are delivered fully decoded, including `\uXXXX`
//! escapes and surrogate pairs.
//!
//! The scanner consumes commas and colons as separators without enforcing
//! the full JSON grammar: the projector consumes a canonical event stream,
//! and the structural invariants it needs (balanced containers, nesting and
//! string-size limits) are checked here.
//!
//! # Examples
//!
//! ```rust
//! use jex_stream::{JsonScanner, Token};
//! use std::io::Cursor;
//!
//! let mut scanner = JsonScanner::new(Cursor::new(r#"{"a": "b"}"#));
//!
//! assert_eq!(scanner.next_token().unwrap(), Some(Token::ObjectStart));
//! assert_eq!(scanner.next_token().unwrap(), Some(Token::String("a".into())));
//! assert_eq!(scanner.next_token().unwrap(), Some(Token::String("b".into())));
//! assert_eq!(scanner.next_token().unwrap(), Some(Token::ObjectEnd));
//! assert_eq!(scanner.next_token().unwrap(), None);
//! ```

use crate::error::{StreamError, StreamResult};
use crate::token::Token;
use std::io::{BufReader, ErrorKind, Read};

/// Configuration options for the scanner.
///
/// Controls buffer size and the limits that protect against hostile input.
///
/// # Examples
///
/// ```rust
/// use jex_stream::ScannerConfig;
///
/// let config = ScannerConfig::default();
/// assert_eq!(config.buffer_size, 64 * 1024);
/// assert_eq!(config.max_depth, 128);
/// assert_eq!(config.max_string_bytes, 1_000_000);
/// ```
#[derive(Debug, Clone)]
pub struct ScannerConfig {
    /// Buffer size for reading input.
    ///
    /// Default: 64KB
    pub buffer_size: usize,

    /// Maximum container nesting depth.
    ///
    /// Protects against deeply nested input that would otherwise grow the
    /// traversal stack without bound.
    ///
    /// Default: 128 levels
    pub max_depth: usize,

    /// Maximum decoded size of a single string, in bytes.
    ///
    /// Default: 1,000,000 bytes (1MB)
    pub max_string_bytes: usize,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            buffer_size: 64 * 1024,
            max_depth: 128,
            max_string_bytes: 1_000_000,
        }
    }
}

/// Streaming JSON tokenizer over any [`Read`] source.
///
/// See the [module documentation](self) for the contract.
pub struct JsonScanner<R: Read> {
    reader: BufReader<R>,
    peeked: Option<u8>,
    line: usize,
    depth: usize,
    config: ScannerConfig,
}

impl<R: Read> JsonScanner<R> {
    /// Create a scanner with default configuration.
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, ScannerConfig::default())
    }

    /// Create a scanner with a specific configuration.
    pub fn with_config(reader: R, config: ScannerConfig) -> Self {
        Self {
            reader: BufReader::with_capacity(config.buffer_size, reader),
            peeked: None,
            line: 1,
            depth: 0,
            config,
        }
    }

    /// The current input line (1-based).
    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Read the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> StreamResult<Option<Token>> {
        let byte = match self.skip_filler()? {
            Some(b) => b,
            None => return Ok(None),
        };
        let token = match byte {
            b'{' => {
                self.enter()?;
                Token::ObjectStart
            }
            b'}' => {
                self.leave('}')?;
                Token::ObjectEnd
            }
            b'[' => {
                self.enter()?;
                Token::ArrayStart
            }
            b']' => {
                self.leave(']')?;
                Token::ArrayEnd
            }
            b'"' => Token::String(self.lex_string()?),
            b'-' | b'0'..=b'9' => Token::Number(self.lex_number(byte)?),
            b't' => {
                self.expect_literal("true", b"rue")?;
                Token::Bool(true)
            }
            b'f' => {
                self.expect_literal("false", b"alse")?;
                Token::Bool(false)
            }
            b'n' => {
                self.expect_literal("null", b"ull")?;
                Token::Null
            }
            other => {
                return Err(StreamError::syntax(
                    self.line,
                    format!("unexpected character '{}'", char::from(other).escape_debug()),
                ));
            }
        };
        Ok(Some(token))
    }

    // ---- byte cursor ----

    fn read_byte(&mut self) -> StreamResult<Option<u8>> {
        let mut buf = [0u8; 1];
        loop {
            match self.reader.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => {
                    if buf[0] == b'\n' {
                        self.line += 1;
                    }
                    return Ok(Some(buf[0]));
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(StreamError::Io(e)),
            }
        }
    }

    fn bump(&mut self) -> StreamResult<Option<u8>> {
        if let Some(b) = self.peeked.take() {
            return Ok(Some(b));
        }
        self.read_byte()
    }

    fn peek(&mut self) -> StreamResult<Option<u8>> {
        if self.peeked.is_none() {
            self.peeked = self.read_byte()?;
        }
        Ok(self.peeked)
    }

    fn must_bump(&mut self, context: &str) -> StreamResult<u8> {
        self.bump()?
            .ok_or_else(|| StreamError::syntax(self.line, format!("{context}: unexpected end of input")))
    }

    // ---- helpers ----

    /// Skip whitespace and the `,`/`:` separators, returning the first
    /// significant byte.
    fn skip_filler(&mut self) -> StreamResult<Option<u8>> {
        loop {
            match self.bump()? {
                Some(b' ' | b'\t' | b'\r' | b'\n' | b',' | b':') => continue,
                other => return Ok(other),
            }
        }
    }

    fn enter(&mut self) -> StreamResult<()> {
        self.depth += 1;
        if self.depth > self.config.max_depth {
            return Err(StreamError::limit(
                self.line,
                format!("nesting depth exceeds {}", self.config.max_depth),
            ));
        }
        Ok(())
    }

    fn leave(&mut self, delimiter: char) -> StreamResult<()> {
        if self.depth == 0 {
            return Err(StreamError::syntax(
                self.line,
                format!("unbalanced '{delimiter}'"),
            ));
        }
        self.depth -= 1;
        Ok(())
    }

    /// Decode a string body; the opening quote has been consumed.
    fn lex_string(&mut self) -> StreamResult<String> {
        let mut buf: Vec<u8> = Vec::new();
        loop {
            let byte = self.must_bump("unterminated string")?;
            if buf.len() > self.config.max_string_bytes {
                return Err(StreamError::limit(
                    self.line,
                    format!("string exceeds {} bytes", self.config.max_string_bytes),
                ));
            }
            match byte {
                b'"' => break,
                b'\\' => match self.must_bump("unterminated string")? {
                    b'"' => buf.push(b'"'),
                    b'\\' => buf.push(b'\\'),
                    b'/' => buf.push(b'/'),
                    b'b' => buf.push(0x08),
                    b'f' => buf.push(0x0C),
                    b'n' => buf.push(b'\n'),
                    b'r' => buf.push(b'\r'),
                    b't' => buf.push(b'\t'),
                    b'u' => {
                        let c = self.lex_unicode_escape()?;
                        let mut utf8 = [0u8; 4];
                        buf.extend_from_slice(c.encode_utf8(&mut utf8).as_bytes());
                    }
                    other => {
                        return Err(StreamError::syntax(
                            self.line,
                            format!("invalid escape '\\{}'", char::from(other).escape_debug()),
                        ));
                    }
                },
                0x00..=0x1F => {
                    return Err(StreamError::syntax(
                        self.line,
                        "unescaped control character in string",
                    ));
                }
                other => buf.push(other),
            }
        }
        String::from_utf8(buf).map_err(|_| StreamError::utf8(self.line, "string is not valid UTF-8"))
    }

    /// Decode a `\uXXXX` escape; `\u` has been consumed. Handles surrogate
    /// pairs.
    fn lex_unicode_escape(&mut self) -> StreamResult<char> {
        let high = self.lex_hex4()?;
        if (0xDC00..=0xDFFF).contains(&high) {
            return Err(StreamError::syntax(self.line, "unpaired low surrogate"));
        }
        let code = if (0xD800..=0xDBFF).contains(&high) {
            if self.must_bump("unterminated string")? != b'\\'
                || self.must_bump("unterminated string")? != b'u'
            {
                return Err(StreamError::syntax(self.line, "unpaired high surrogate"));
            }
            let low = self.lex_hex4()?;
            if !(0xDC00..=0xDFFF).contains(&low) {
                return Err(StreamError::syntax(self.line, "invalid low surrogate"));
            }
            0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00)
        } else {
            high
        };
        char::from_u32(code)
            .ok_or_else(|| StreamError::syntax(self.line, "invalid unicode escape"))
    }

    fn lex_hex4(&mut self) -> StreamResult<u32> {
        let mut value = 0u32;
        for _ in 0..4 {
            let byte = self.must_bump("unterminated string")?;
            let digit = char::from(byte)
                .to_digit(16)
                .ok_or_else(|| StreamError::syntax(self.line, "invalid unicode escape"))?;
            value = value * 16 + digit;
        }
        Ok(value)
    }

    /// Scan a number's source text; the first byte has been consumed. The
    /// projector never binds numbers, so the text is not parsed further.
    fn lex_number(&mut self, first: u8) -> StreamResult<String> {
        let mut text = String::new();
        text.push(char::from(first));
        while let Some(byte) = self.peek()? {
            match byte {
                b'0'..=b'9' | b'+' | b'-' | b'.' | b'e' | b'E' => {
                    self.bump()?;
                    text.push(char::from(byte));
                }
                _ => break,
            }
        }
        Ok(text)
    }

    fn expect_literal(&mut self, literal: &str, rest: &[u8]) -> StreamResult<()> {
        for &expected in rest {
            if self.bump()? != Some(expected) {
                return Err(StreamError::syntax(
                    self.line,
                    format!("invalid literal (expected '{literal}')"),
                ));
            }
        }
        Ok(())
    }
}

impl<R: Read> Iterator for JsonScanner<R> {
    type Item = StreamResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}
