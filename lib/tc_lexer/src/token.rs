use self::TokenKind::*;
use crate::cursor::Cursor;
use crate::{is_sign, Base};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// +
    Plus,
    /// -
    Minus,
    /// *
    Star,
    /// /
    Slash,

    /// `t`, followed by a base code and a literal
    TypeMarker,

    /// `=`, followed by the format directive
    FormatMarker,

    Whitespace,

    Unknown,
    Eof,
}

impl<'a> Cursor<'a> {
    /// Classifies the next character of the expression body.
    pub fn next_token(&mut self) -> TokenKind {
        let first = match self.next() {
            Some(c) => c,
            None => return Eof,
        };

        match first {
            '+' => Plus,
            '-' => Minus,
            '*' => Star,
            '/' => Slash,
            't' => TypeMarker,
            '=' => FormatMarker,
            c if c.is_whitespace() => Whitespace,
            _ => Unknown,
        }
    }

    /// Consumes the longest run of `base` digits, allowing one leading sign.
    ///
    /// The first rejected character is pushed back. The returned text may be empty.
    pub fn eat_literal(&mut self, base: Base) -> &'a str {
        let start = self.offset();

        loop {
            let Some(c) = self.next() else { break };

            let at_start = self.offset() - c.len_utf8() == start;

            if base.is_digit(c) || (is_sign(c) && at_start) {
                continue;
            }

            self.unread();
            break;
        }

        self.slice_from(start)
    }
}
