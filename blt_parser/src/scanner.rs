use log::trace;
use snafu::prelude::*;
use std::io::{BufRead, ErrorKind};

use crate::config::*;

/// A character reader over a byte stream, with one character of lookahead.
///
/// The bytes are decoded as UTF-8 one character at a time. The lookahead
/// slot holds at most one decoded character, which is all the BLT grammar
/// needs.
pub(crate) struct Scanner<R> {
    reader: R,
    // A character that was decoded from the stream but not consumed yet.
    slot: Option<char>,
    position: Position,
}

impl<R: BufRead> Scanner<R> {
    pub(crate) fn new(reader: R) -> Scanner<R> {
        Scanner {
            reader,
            slot: None,
            position: Position::START,
        }
    }

    /// The position of the next character to be consumed.
    pub(crate) fn position(&self) -> Position {
        self.position
    }

    /// Returns the next character without consuming it, or None at the end of the input.
    pub(crate) fn peek(&mut self) -> Result<Option<char>, ParseError> {
        if self.slot.is_none() {
            self.slot = self.decode()?;
        }
        Ok(self.slot)
    }

    /// Consumes the next character.
    pub(crate) fn next_char(&mut self) -> Result<char, ParseError> {
        let c = match self.peek()? {
            Some(c) => c,
            None => {
                return EndOfInputSnafu {
                    position: self.position,
                }
                .fail()
            }
        };
        self.slot = None;
        self.position = if c == '\n' {
            Position {
                line: self.position.line + 1,
                column: 1,
            }
        } else {
            Position {
                line: self.position.line,
                column: self.position.column + 1,
            }
        };
        Ok(c)
    }

    pub(crate) fn at_end(&mut self) -> Result<bool, ParseError> {
        Ok(self.peek()?.is_none())
    }

    // Reads one UTF-8 encoded character from the underlying stream.
    fn decode(&mut self) -> Result<Option<char>, ParseError> {
        let position = self.position;
        let mut buf = [0u8; 4];
        loop {
            match self.reader.read(&mut buf[..1]) {
                Ok(0) => return Ok(None),
                Ok(_) => break,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e).context(IoSnafu { position }),
            }
        }
        let width = utf8_width(buf[0]).context(InvalidUtf8Snafu { position })?;
        if width > 1 {
            match self.reader.read_exact(&mut buf[1..width]) {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                    return InvalidUtf8Snafu { position }.fail();
                }
                Err(e) => return Err(e).context(IoSnafu { position }),
            }
        }
        let s = std::str::from_utf8(&buf[..width])
            .ok()
            .context(InvalidUtf8Snafu { position })?;
        let c = s.chars().next();
        trace!("decode: {:?} at {}", c, position);
        Ok(c)
    }
}

// The length of an UTF-8 sequence, given its first byte.
fn utf8_width(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}
