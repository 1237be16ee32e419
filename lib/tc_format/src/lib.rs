pub mod render;


use std::fmt;

use bitflags::bitflags;

pub use render::render;

pub const DEFAULT_BIT_WIDTH: u32 = 64;

/// Largest zero-pad digit count `render` accepts.
pub const MAX_PAD_WIDTH: usize = 1 << 16;

/// Rendering base chosen by the format directive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Radix {
    Binary,
    Octal,
    Decimal,
    /// Hexadecimal with uppercase digits.
    UpperHex,
}

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct FormatFlags: u8 {
        /// `p`: left-pad with zeros to the width implied by the bit width.
        const ZERO_PAD = 1 << 0;
        /// `s`: parsed, no rendering effect yet.
        const SIGNED = 1 << 1;
        /// `f`: parsed, no rendering effect yet.
        const VERBOSE = 1 << 2;
        /// `c`: parsed, no rendering effect yet.
        const COLORIZE = 1 << 3;
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputFormat {
    pub prefix: &'static str,
    pub radix: Option<Radix>,
    pub flags: FormatFlags,
    pub bit_width: u32,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self {
            prefix: "",
            radix: None,
            flags: FormatFlags::empty(),
            bit_width: DEFAULT_BIT_WIDTH,
        }
    }
}

impl OutputFormat {
    /// Low `bit_width` bits set.
    pub fn mask(&self) -> u64 {
        match self.bit_width {
            0 => 0,
            w if w >= u64::BITS => u64::MAX,
            w => (1u64 << w) - 1,
        }
    }

    /// Minimum digit count, excluding the prefix.
    pub fn pad_width(&self) -> usize {
        if !self.flags.contains(FormatFlags::ZERO_PAD) {
            return 0;
        }

        match self.radix {
            Some(Radix::UpperHex) => (self.bit_width / 4) as usize,
            Some(_) => self.bit_width as usize,
            None => 0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatError {
    /// The directive never selected `b`, `o`, `d` or `h`.
    MissingRadix,
    /// Zero padding asks for more than [`MAX_PAD_WIDTH`] digits.
    PadTooWide { width: usize },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::MissingRadix => f.write_str("format directive does not select an output base"),
            FormatError::PadTooWide { width } => {
                write!(f, "zero padding of {width} digits exceeds the limit of {MAX_PAD_WIDTH}")
            }
        }
    }
}

impl std::error::Error for FormatError {}
