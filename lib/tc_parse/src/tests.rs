use std::num::IntErrorKind;

use proptest::prelude::*;
use tc_format::{render, FormatFlags, OutputFormat, Radix};
use tc_lexer::cursor::Cursor;
use tc_lexer::Base;
use tc_span::{BytePos, Span};

use crate::{parse_directive, parse_literal};

fn directive(source: &str) -> OutputFormat {
    parse_directive(&mut Cursor::new(source))
}

#[test]
fn test_literal_values() {
    let mut cursor = Cursor::new("1A*");
    let lit = parse_literal(&mut cursor, Base::Hexadecimal).unwrap();
    assert_eq!(lit.value, 26);
    assert_eq!(lit.span, Span::new(BytePos(0), BytePos(2)));
    assert_eq!(cursor.as_str(), "*");

    let mut cursor = Cursor::new("-101");
    assert_eq!(parse_literal(&mut cursor, Base::Binary).unwrap().value, -5);

    let mut cursor = Cursor::new("+17");
    assert_eq!(parse_literal(&mut cursor, Base::Octal).unwrap().value, 15);
}

#[test]
fn test_literal_errors() {
    let mut cursor = Cursor::new("=d");
    let err = parse_literal(&mut cursor, Base::Decimal).unwrap_err();
    assert_eq!(err.kind, IntErrorKind::Empty);
    assert_eq!(err.to_string(), "expected a decimal literal");
    assert_eq!(cursor.as_str(), "=d");

    let mut cursor = Cursor::new("-td1");
    let err = parse_literal(&mut cursor, Base::Decimal).unwrap_err();
    assert_eq!(err.kind, IntErrorKind::InvalidDigit);
    assert_eq!(err.to_string(), "invalid decimal literal `-`: a sign needs digits after it");

    let mut cursor = Cursor::new("8000000000000000");
    let err = parse_literal(&mut cursor, Base::Hexadecimal).unwrap_err();
    assert_eq!(err.kind, IntErrorKind::PosOverflow);
    assert_eq!(err.span, Span::new(BytePos(0), BytePos(16)));
}

#[test]
fn test_directive_hex_padded() {
    let fmt = directive("hfp16");
    assert_eq!(fmt.prefix, "0x");
    assert_eq!(fmt.radix, Some(Radix::UpperHex));
    assert_eq!(fmt.flags, FormatFlags::VERBOSE | FormatFlags::ZERO_PAD);
    assert_eq!(fmt.bit_width, 16);
}

#[test]
fn test_directive_defaults_and_unknowns() {
    let fmt = directive("d");
    assert_eq!(fmt.prefix, "");
    assert_eq!(fmt.bit_width, 64);

    let fmt = directive("xyz!");
    assert_eq!(fmt, OutputFormat::default());

    let fmt = directive("sc");
    assert_eq!(fmt.flags, FormatFlags::SIGNED | FormatFlags::COLORIZE);
    assert_eq!(fmt.radix, None);
}

#[test]
fn test_directive_last_base_wins_prefix_sticks() {
    let fmt = directive("bd");
    assert_eq!(fmt.radix, Some(Radix::Decimal));
    assert_eq!(fmt.prefix, "0b");

    let fmt = directive("hb");
    assert_eq!(fmt.radix, Some(Radix::Binary));
    assert_eq!(fmt.prefix, "0b");
}

#[test]
fn test_directive_width_digits_concatenate() {
    assert_eq!(directive("1b6").bit_width, 16);
    assert_eq!(directive("d0").bit_width, 0);
    assert_eq!(directive("d99999999999").bit_width, u32::MAX);
}

fn radix_for(base: Base) -> Radix {
    match base {
        Base::Binary => Radix::Binary,
        Base::Octal => Radix::Octal,
        Base::Decimal => Radix::Decimal,
        Base::Hexadecimal => Radix::UpperHex,
    }
}

proptest! {
    #[test]
    fn prop_render_then_read_round_trips(
        value in any::<u64>(),
        width in 0u32..=63,
        base in prop::sample::select(Base::ALL.to_vec()),
    ) {
        let fmt = OutputFormat {
            radix: Some(radix_for(base)),
            bit_width: width,
            ..OutputFormat::default()
        };
        let text = render(value, &fmt).unwrap();
        let lit = parse_literal(&mut Cursor::new(&text), base).unwrap();
        prop_assert_eq!(lit.value as u64, value & fmt.mask());
    }
}
