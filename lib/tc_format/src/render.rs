use crate::{FormatError, OutputFormat, Radix, MAX_PAD_WIDTH};

/// Renders `value` masked to the format's bit width.
pub fn render(value: u64, format: &OutputFormat) -> Result<String, FormatError> {
    let radix = format.radix.ok_or(FormatError::MissingRadix)?;
    let masked = value & format.mask();

    let width = format.pad_width();
    if width > MAX_PAD_WIDTH {
        return Err(FormatError::PadTooWide { width });
    }

    let digits = match radix {
        Radix::Binary => format!("{masked:b}"),
        Radix::Octal => format!("{masked:o}"),
        Radix::Decimal => format!("{masked}"),
        Radix::UpperHex => format!("{masked:X}"),
    };

    let zeros = "0".repeat(width.saturating_sub(digits.len()));

    Ok(format!("{}{zeros}{digits}", format.prefix))
}
