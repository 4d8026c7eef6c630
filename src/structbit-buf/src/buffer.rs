use std::{fmt, str::FromStr};

use bitvec::prelude::*;
use funty::Integral;
use structbit_utils::mem::bits_to_bytes;

use crate::error::{Error, Result};

/// A variable-length buffer addressing individual bits within
/// byte-aligned storage.
///
/// A buffer couples owned byte storage with a logical *bit window*
/// `[offset, offset + length)` of absolute bit indices. The logical
/// operations, rendering and shifting act on the window; the raw
/// addressing methods ([`BitBuffer::bit`], [`BitBuffer::set_bit`])
/// act on the full storage regardless of it.
///
/// Quantities of multiple bits are packed with the lowest absolute
/// index as the least significant bit, matching the bit numbering
/// of the storage itself.
#[derive(Clone, Debug, Default)]
pub struct BitBuffer {
    pub(crate) storage: Vec<u8>,
    pub(crate) offset: usize,
    pub(crate) length: usize,
}

impl BitBuffer {
    /// Creates a new, empty buffer without storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps the given bytes without copying, with the window
    /// spanning the full storage capacity.
    pub fn from_bytes(storage: Vec<u8>) -> Self {
        let length = storage.len() * u8::BITS as usize;
        Self {
            storage,
            offset: 0,
            length,
        }
    }

    /// Wraps the given bytes with an explicit window over them.
    ///
    /// Fails with [`Error::OutOfRange`] when the window does not
    /// fit the storage.
    pub fn with_window(storage: Vec<u8>, offset: usize, length: usize) -> Result<Self> {
        if bits_to_bytes(offset + length) <= storage.len() {
            Ok(Self {
                storage,
                offset,
                length,
            })
        } else {
            Err(Error::OutOfRange {
                index: offset + length - 1,
                capacity: storage.len() * u8::BITS as usize,
            })
        }
    }

    /// Parses a bit-string into a fresh buffer.
    ///
    /// The string is read MSB-first; its last character becomes
    /// absolute bit 0 of the storage. The resulting window starts
    /// at offset 0 and spans one bit per input character.
    ///
    /// Fails with [`Error::InvalidInput`] when any character is
    /// not `0` or `1`.
    pub fn parse(s: &str) -> Result<Self> {
        if let Some((position, character)) = s.char_indices().find(|&(_, c)| c != '0' && c != '1') {
            return Err(Error::InvalidInput {
                character,
                position,
            });
        }

        let length = s.len();
        let mut storage = vec![0u8; bits_to_bytes(length)];

        let bits = storage.view_bits_mut::<Lsb0>();
        s.bytes()
            .rev()
            .enumerate()
            .for_each(|(index, c)| bits.set(index, c == b'1'));

        Ok(Self {
            storage,
            offset: 0,
            length,
        })
    }

    /// Returns the number of bits in the logical window.
    #[inline]
    pub fn len(&self) -> usize {
        self.length
    }

    /// Indicates whether the logical window is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the absolute bit index where the window begins.
    #[inline]
    pub fn bit_offset(&self) -> usize {
        self.offset
    }

    /// Gets a view of the backing storage as a byte slice.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.storage
    }

    /// Returns a copy of the backing storage.
    #[inline]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.storage.clone()
    }

    /// Consumes the buffer and returns the backing storage.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.storage
    }

    /// Bit capacity of the backing storage.
    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.storage.len() * u8::BITS as usize
    }

    pub(crate) fn window(&self) -> &BitSlice<u8, Lsb0> {
        &self.storage.view_bits::<Lsb0>()[self.offset..self.offset + self.length]
    }

    pub(crate) fn window_mut(&mut self) -> &mut BitSlice<u8, Lsb0> {
        let (offset, length) = (self.offset, self.length);
        &mut self.storage.view_bits_mut::<Lsb0>()[offset..offset + length]
    }

    fn bounds_check(&self, index: usize, width: usize) -> Result<()> {
        let capacity = self.capacity();
        let end = index + width.max(1);
        if end <= capacity {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                index: end - 1,
                capacity,
            })
        }
    }

    /// Reads the bit at absolute `index` within the backing
    /// storage.
    ///
    /// This addresses raw storage; the window offset and length
    /// are ignored.
    pub fn bit(&self, index: usize) -> Result<bool> {
        self.bounds_check(index, 1)?;
        Ok(self.storage.view_bits::<Lsb0>()[index])
    }

    /// Sets the bit at absolute `index` within the backing storage
    /// to 1.
    ///
    /// This addresses raw storage; the window offset and length
    /// are ignored. There is no clearing counterpart; ranges are
    /// cleared through [`BitBuffer::reset`] or overwritten through
    /// [`BitBuffer::set_bits`].
    pub fn set_bit(&mut self, index: usize) -> Result<()> {
        self.bounds_check(index, 1)?;
        self.storage.view_bits_mut::<Lsb0>().set(index, true);
        Ok(())
    }

    /// Extracts `width` contiguous bits starting at absolute index
    /// `offset_bits`, packed into an integer with the bit at
    /// `offset_bits` as the least significant bit of the result.
    ///
    /// A `width` larger than the buffer's logical length is clamped
    /// to it. Fails with [`Error::OutOfRange`] when the requested
    /// range exceeds the storage bounds or the clamped width does
    /// not fit the target type.
    pub fn bits<I: Integral>(&self, offset_bits: usize, width: usize) -> Result<I> {
        let width = width.min(self.length);
        if width > I::BITS as usize {
            return Err(Error::OutOfRange {
                index: width - 1,
                capacity: I::BITS as usize,
            });
        }
        self.bounds_check(offset_bits, width)?;

        if width == 0 {
            return Ok(I::ZERO);
        }

        Ok(self.storage.view_bits::<Lsb0>()[offset_bits..offset_bits + width].load_le())
    }

    /// Writes the low `width` bits of `value` into the storage
    /// starting at absolute index `offset_bits`, with source bit
    /// `k` landing at `offset_bits + k`.
    ///
    /// Source bits past the width of `I` are zero; storage bits
    /// outside the written range keep their previous contents.
    /// Fails with [`Error::OutOfRange`] when the target range
    /// exceeds the storage bounds, in which case nothing is
    /// written.
    pub fn set_bits<I: Integral>(&mut self, value: I, offset_bits: usize, width: usize) -> Result<()> {
        self.bounds_check(offset_bits, width)?;

        let bits = &mut self.storage.view_bits_mut::<Lsb0>()[offset_bits..offset_bits + width];
        let (low, high) = bits.split_at_mut(width.min(I::BITS as usize));
        if !low.is_empty() {
            low.store_le(value);
        }
        high.fill(false);

        Ok(())
    }
}

impl From<Vec<u8>> for BitBuffer {
    fn from(storage: Vec<u8>) -> Self {
        Self::from_bytes(storage)
    }
}

impl FromStr for BitBuffer {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for BitBuffer {
    /// Renders the logical window as a bit-string, MSB-first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let window = self.window();
        (0..window.len())
            .rev()
            .try_for_each(|index| f.write_str(if window[index] { "1" } else { "0" }))
    }
}
