pub mod fatal;

use std::cmp;

pub use fatal::{FatalError, FatalErrorMarker};

/// Byte offset into the whitespace-stripped expression.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BytePos(pub u32);

impl BytePos {
    /// Offsets past `u32::MAX` saturate. Positions only locate diagnostics;
    /// the input itself is always sliced with `usize` offsets.
    pub fn from_usize(n: usize) -> Self {
        Self(u32::try_from(n).unwrap_or(u32::MAX))
    }

    pub fn to_usize(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    pub lo: BytePos,
    pub hi: BytePos,
}

impl Span {
    pub fn new(mut lo: BytePos, mut hi: BytePos) -> Self {
        if hi < lo {
            std::mem::swap(&mut lo, &mut hi);
        }

        Self { lo, hi }
    }

    pub const DUMMY: Self = Self { lo: BytePos(0), hi: BytePos(0) };

    /// Smallest span covering both `self` and `end`.
    pub fn to(self, end: Span) -> Span {
        Span::new(
            cmp::min(self.lo, end.lo),
            cmp::max(self.hi, end.hi),
        )
    }
}
