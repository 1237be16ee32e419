pub mod cursor;
pub mod token;

#[cfg(test)]
mod tests;

pub use token::*;

/// Numeric base of a typed literal, selected by the character after `t`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Base {
    Binary,
    Octal,
    Decimal,
    Hexadecimal
}

impl Base {
    pub const ALL: [Base; 4] = [Base::Binary, Base::Octal, Base::Decimal, Base::Hexadecimal];

    pub fn from_code(code: char) -> Option<Base> {
        match code {
            'b' => Some(Base::Binary),
            'o' => Some(Base::Octal),
            'd' => Some(Base::Decimal),
            'h' => Some(Base::Hexadecimal),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            Base::Binary => 'b',
            Base::Octal => 'o',
            Base::Decimal => 'd',
            Base::Hexadecimal => 'h',
        }
    }

    pub fn radix(self) -> u32 {
        match self {
            Base::Binary => 2,
            Base::Octal => 8,
            Base::Decimal => 10,
            Base::Hexadecimal => 16,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Base::Binary => "binary",
            Base::Octal => "octal",
            Base::Decimal => "decimal",
            Base::Hexadecimal => "hexadecimal",
        }
    }

    /// Whether `c` belongs to this base's digit alphabet. Signs are not digits.
    pub fn is_digit(self, c: char) -> bool {
        match self {
            Base::Binary => matches!(c, '0' | '1'),
            Base::Octal => matches!(c, '0'..='7'),
            Base::Decimal => c.is_ascii_digit(),
            Base::Hexadecimal => c.is_ascii_hexdigit(),
        }
    }
}

pub fn is_sign(c: char) -> bool {
    c == '+' || c == '-'
}

/// Drops every whitespace character; expressions are evaluated on the result.
pub fn strip_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}
