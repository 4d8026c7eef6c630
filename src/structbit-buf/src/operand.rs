use std::borrow::Cow;

use crate::{buffer::BitBuffer, error::Result};

/// The right-hand side of a binary buffer operation.
///
/// Binary operations on [`BitBuffer`] accept either another buffer
/// or a bit-string. Conversions exist from both, so call sites
/// simply pass `&buffer` or `"1010"`; the operand is resolved into
/// a concrete buffer once, before any operation logic runs.
pub enum Operand<'a> {
    /// An already constructed buffer.
    Buffer(&'a BitBuffer),
    /// A textual bit-string, parsed during resolution.
    Bits(&'a str),
}

impl<'a> Operand<'a> {
    /// Resolves the operand into a concrete buffer.
    ///
    /// Bit-strings are parsed here and may fail with
    /// [`Error::InvalidInput`](crate::Error::InvalidInput).
    pub(crate) fn resolve(self) -> Result<Cow<'a, BitBuffer>> {
        match self {
            Self::Buffer(buf) => Ok(Cow::Borrowed(buf)),
            Self::Bits(s) => BitBuffer::parse(s).map(Cow::Owned),
        }
    }
}

impl<'a> From<&'a BitBuffer> for Operand<'a> {
    fn from(buf: &'a BitBuffer) -> Self {
        Self::Buffer(buf)
    }
}

impl<'a> From<&'a str> for Operand<'a> {
    fn from(bits: &'a str) -> Self {
        Self::Bits(bits)
    }
}
