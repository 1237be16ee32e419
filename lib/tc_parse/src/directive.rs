use tc_format::{FormatFlags, OutputFormat, Radix};
use tc_lexer::cursor::Cursor;

/// Reads the rest of the input as a format directive.
///
/// Unknown characters are skipped. Digits anywhere in the directive are
/// concatenated into the bit width, which saturates instead of overflowing.
pub fn parse_directive(cursor: &mut Cursor<'_>) -> OutputFormat {
    let mut format = OutputFormat::default();
    let mut width: Option<u32> = None;

    while let Some(c) = cursor.next() {
        match c {
            'b' => {
                format.prefix = "0b";
                format.radix = Some(Radix::Binary);
            }
            'o' => format.radix = Some(Radix::Octal),
            'd' => format.radix = Some(Radix::Decimal),
            'h' => {
                format.prefix = "0x";
                format.radix = Some(Radix::UpperHex);
            }
            's' => format.flags |= FormatFlags::SIGNED,
            'f' => format.flags |= FormatFlags::VERBOSE,
            'c' => format.flags |= FormatFlags::COLORIZE,
            'p' => format.flags |= FormatFlags::ZERO_PAD,
            '0'..='9' => {
                let digit = c as u32 - '0' as u32;
                width = Some(width.unwrap_or(0).saturating_mul(10).saturating_add(digit));
            }
            _ => {}
        }
    }

    if let Some(width) = width {
        format.bit_width = width;
    }

    format
}
