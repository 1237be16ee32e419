use crate::cursor::Cursor;
use crate::{strip_whitespace, Base, TokenKind};

#[test]
fn test_cursor_next_and_unread() {
    let mut cursor = Cursor::new("ab");
    assert_eq!(cursor.next(), Some('a'));
    assert_eq!(cursor.pos().to_usize(), 1);
    cursor.unread();
    assert_eq!(cursor.pos().to_usize(), 0);
    assert_eq!(cursor.next(), Some('a'));
    assert_eq!(cursor.next(), Some('b'));
    assert_eq!(cursor.as_str(), "");
    assert_eq!(cursor.next(), None);
    assert_eq!(cursor.pos().to_usize(), 2);
}

#[test]
fn test_cursor_unread_multibyte() {
    let mut cursor = Cursor::new("é1");
    assert_eq!(cursor.next(), Some('é'));
    cursor.unread();
    assert_eq!(cursor.as_str(), "é1");
}

#[test]
fn test_tokens() {
    let mut cursor = Cursor::new("+-*/t=x ");
    let kinds: Vec<TokenKind> = std::iter::from_fn(|| {
        let kind = cursor.next_token();
        (kind != TokenKind::Eof).then_some(kind)
    })
    .collect();

    use TokenKind::*;
    assert_eq!(kinds, vec![Plus, Minus, Star, Slash, TypeMarker, FormatMarker, Unknown, Whitespace]);
}

#[test]
fn test_eat_literal_stops_at_operator() {
    let mut cursor = Cursor::new("10+td20");
    assert_eq!(cursor.eat_literal(Base::Decimal), "10");
    assert_eq!(cursor.as_str(), "+td20");
}

#[test]
fn test_eat_literal_leading_sign() {
    let mut cursor = Cursor::new("-5-3");
    assert_eq!(cursor.eat_literal(Base::Decimal), "-5");
    assert_eq!(cursor.as_str(), "-3");

    let mut cursor = Cursor::new("+-1");
    assert_eq!(cursor.eat_literal(Base::Decimal), "+");
    assert_eq!(cursor.as_str(), "-1");
}

#[test]
fn test_eat_literal_alphabets() {
    let mut cursor = Cursor::new("1012");
    assert_eq!(cursor.eat_literal(Base::Binary), "101");

    let mut cursor = Cursor::new("778");
    assert_eq!(cursor.eat_literal(Base::Octal), "77");

    let mut cursor = Cursor::new("1aF=h");
    assert_eq!(cursor.eat_literal(Base::Hexadecimal), "1aF");
    assert_eq!(cursor.as_str(), "=h");

    let mut cursor = Cursor::new("1a");
    assert_eq!(cursor.eat_literal(Base::Decimal), "1");
}

#[test]
fn test_eat_literal_empty_and_eof() {
    let mut cursor = Cursor::new("=d");
    assert_eq!(cursor.eat_literal(Base::Decimal), "");
    assert_eq!(cursor.as_str(), "=d");

    let mut cursor = Cursor::new("42");
    assert_eq!(cursor.eat_literal(Base::Decimal), "42");
    assert_eq!(cursor.as_str(), "");
}

#[test]
fn test_base_codes() {
    for base in Base::ALL {
        assert_eq!(Base::from_code(base.code()), Some(base));
    }
    assert_eq!(Base::from_code('x'), None);
    assert_eq!(Base::Hexadecimal.radix(), 16);
    assert!(!Base::Decimal.is_digit('+'));
}

#[test]
fn test_strip_whitespace() {
    assert_eq!(strip_whitespace(" td10 +\ttd20 =\nh "), "td10+td20=h");
}
