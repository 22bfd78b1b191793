// Lexical primitives of the BLT format, on top of the scanner.

use snafu::prelude::*;
use std::io::BufRead;

use crate::config::*;
use crate::scanner::Scanner;

impl<R: BufRead> Scanner<R> {
    /// Reads a non-negative decimal integer and the whitespace that follows it.
    ///
    /// Leading whitespace is not skipped: the first character must be a digit.
    pub(crate) fn read_int(&mut self) -> Result<u64, ParseError> {
        let position = self.position();
        let mut number: Option<u64> = None;
        while let Some(c) = self.peek()? {
            let d = match c {
                '0'..='9' => c as u64 - '0' as u64,
                _ => break,
            };
            self.next_char()?;
            let n = number
                .unwrap_or(0)
                .checked_mul(10)
                .and_then(|n| n.checked_add(d))
                .context(IntegerOverflowSnafu { position })?;
            number = Some(n);
        }
        let number = match (number, self.peek()?) {
            (Some(n), _) => n,
            (None, Some(c)) => {
                return UnexpectedCharacterSnafu {
                    character: c,
                    position,
                }
                .fail()
            }
            (None, None) => return EndOfInputSnafu { position }.fail(),
        };
        self.skip_whitespace()?;
        Ok(number)
    }

    /// Reads an integer that must fit in a candidate number or a header field.
    pub(crate) fn read_u32(&mut self) -> Result<u32, ParseError> {
        let position = self.position();
        let n = self.read_int()?;
        u32::try_from(n)
            .ok()
            .context(IntegerOverflowSnafu { position })
    }

    /// Reads the content of a quoted string. The opening quote must have been consumed already.
    ///
    /// There are no escape sequences: the string stops at the next quote.
    pub(crate) fn read_quoted(&mut self) -> Result<String, ParseError> {
        let mut content = String::new();
        loop {
            match self.next_char()? {
                '"' => break,
                c => content.push(c),
            }
        }
        self.skip_whitespace()?;
        Ok(content)
    }

    /// Consumes all the whitespace up to the next significant character or the end of the input.
    pub(crate) fn skip_whitespace(&mut self) -> Result<(), ParseError> {
        while let Some(c) = self.peek()? {
            if !c.is_whitespace() {
                break;
            }
            self.next_char()?;
        }
        Ok(())
    }

    /// Consumes the next character if it is `expected`.
    pub(crate) fn eat(&mut self, expected: char) -> Result<bool, ParseError> {
        if self.peek()? == Some(expected) {
            self.next_char()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scanner(s: &str) -> Scanner<&[u8]> {
        Scanner::new(s.as_bytes())
    }

    #[test]
    fn int_followed_by_whitespace() {
        let mut s = scanner("123 \t\n 45x");
        assert_eq!(s.read_int().unwrap(), 123);
        assert_eq!(s.read_int().unwrap(), 45);
        assert_eq!(s.peek().unwrap(), Some('x'));
    }

    #[test]
    fn int_stops_before_punctuation() {
        let mut s = scanner("2=3");
        assert_eq!(s.read_int().unwrap(), 2);
        assert!(s.eat('=').unwrap());
        assert_eq!(s.read_int().unwrap(), 3);
    }

    #[test]
    fn int_at_end_of_input() {
        let mut s = scanner("7");
        assert_eq!(s.read_int().unwrap(), 7);
        assert!(matches!(s.read_int(), Err(ParseError::EndOfInput { .. })));
    }

    #[test]
    fn int_requires_a_digit() {
        let mut s = scanner("1 X 0");
        assert_eq!(s.read_int().unwrap(), 1);
        match s.read_int() {
            Err(ParseError::UnexpectedCharacter {
                character,
                position,
            }) => {
                assert_eq!(character, 'X');
                assert_eq!(position, Position { line: 1, column: 3 });
            }
            x => panic!("unexpected result {:?}", x),
        }
    }

    #[test]
    fn leading_whitespace_is_not_skipped() {
        let mut s = scanner(" 1 ");
        assert!(matches!(
            s.read_int(),
            Err(ParseError::UnexpectedCharacter { character: ' ', .. })
        ));
    }

    #[test]
    fn non_ascii_digits_are_rejected() {
        let mut s = scanner("\u{0663} ");
        assert!(matches!(
            s.read_int(),
            Err(ParseError::UnexpectedCharacter {
                character: '\u{0663}',
                ..
            })
        ));
    }

    #[test]
    fn int_overflow() {
        let mut s = scanner("99999999999999999999999 ");
        assert!(matches!(
            s.read_int(),
            Err(ParseError::IntegerOverflow { .. })
        ));
        let mut s = scanner("4294967296 ");
        assert!(matches!(
            s.read_u32(),
            Err(ParseError::IntegerOverflow { .. })
        ));
        let mut s = scanner("4294967295 ");
        assert_eq!(s.read_u32().unwrap(), u32::MAX);
    }

    #[test]
    fn quoted_string() {
        let mut s = scanner("\"Jane Doe\"\n  \"\"");
        assert_eq!(s.next_char().unwrap(), '"');
        assert_eq!(s.read_quoted().unwrap(), "Jane Doe");
        assert_eq!(s.next_char().unwrap(), '"');
        assert_eq!(s.read_quoted().unwrap(), "");
        assert!(s.at_end().unwrap());
    }

    #[test]
    fn unterminated_quoted_string() {
        let mut s = scanner("\"Jane");
        assert_eq!(s.next_char().unwrap(), '"');
        assert!(matches!(
            s.read_quoted(),
            Err(ParseError::EndOfInput { .. })
        ));
    }

    #[test]
    fn eat_leaves_other_characters() {
        let mut s = scanner("-1");
        assert!(!s.eat('=').unwrap());
        assert!(s.eat('-').unwrap());
        assert_eq!(s.peek().unwrap(), Some('1'));
    }
}
