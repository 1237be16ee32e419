use std::fmt;
use std::num::IntErrorKind;

use tc_lexer::cursor::Cursor;
use tc_lexer::Base;
use tc_span::Span;

/// A typed literal read after `t<code>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Literal {
    pub base: Base,
    pub value: i64,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiteralError {
    pub base: Base,
    pub text: String,
    pub span: Span,
    pub kind: IntErrorKind,
}

impl LiteralError {
    pub fn reason(&self) -> &'static str {
        match self.kind {
            IntErrorKind::Empty => "no digits",
            IntErrorKind::InvalidDigit if self.text.len() == 1 => "a sign needs digits after it",
            IntErrorKind::InvalidDigit => "invalid digit",
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => "does not fit in a signed 64-bit integer",
            _ => "malformed number",
        }
    }
}

impl fmt::Display for LiteralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.text.is_empty() {
            write!(f, "expected a {} literal", self.base.name())
        } else {
            write!(f, "invalid {} literal `{}`: {}", self.base.name(), self.text, self.reason())
        }
    }
}

impl std::error::Error for LiteralError {}

/// Reads a literal of `base` at the cursor and parses it as `i64`.
pub fn parse_literal(cursor: &mut Cursor<'_>, base: Base) -> Result<Literal, LiteralError> {
    let lo = cursor.pos();
    let text = cursor.eat_literal(base);
    let span = Span::new(lo, cursor.pos());

    match i64::from_str_radix(text, base.radix()) {
        Ok(value) => Ok(Literal { base, value, span }),
        Err(err) => Err(LiteralError {
            base,
            text: text.to_string(),
            span,
            kind: err.kind().clone(),
        }),
    }
}
