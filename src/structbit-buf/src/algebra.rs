//! Whole-buffer logical operations over the bit window.

use std::borrow::Cow;

use structbit_utils::mem::align_down;

use crate::{
    buffer::BitBuffer,
    error::{Error, Result},
    operand::Operand,
};

impl BitBuffer {
    /// Resolves an operand and checks it against the length
    /// contract shared by all binary operations.
    fn binary_operand<'a>(&self, operand: impl Into<Operand<'a>>) -> Result<Cow<'a, BitBuffer>> {
        let operand = operand.into().resolve()?;
        if operand.len() == self.length {
            Ok(operand)
        } else {
            Err(Error::LengthMismatch {
                expected: self.length,
                actual: operand.len(),
            })
        }
    }

    /// Combines `self` with the operand through bitwise AND,
    /// byte by byte over the backing storage.
    ///
    /// Mutates `self` in place and returns it for chaining; the
    /// operand is never modified.
    pub fn and<'a>(&mut self, operand: impl Into<Operand<'a>>) -> Result<&mut Self> {
        let operand = self.binary_operand(operand)?;
        self.storage
            .iter_mut()
            .zip(operand.as_bytes())
            .for_each(|(lhs, rhs)| *lhs &= rhs);

        Ok(self)
    }

    /// Combines `self` with the operand through bitwise OR,
    /// byte by byte over the backing storage.
    ///
    /// Mutates `self` in place and returns it for chaining; the
    /// operand is never modified.
    pub fn or<'a>(&mut self, operand: impl Into<Operand<'a>>) -> Result<&mut Self> {
        let operand = self.binary_operand(operand)?;
        self.storage
            .iter_mut()
            .zip(operand.as_bytes())
            .for_each(|(lhs, rhs)| *lhs |= rhs);

        Ok(self)
    }

    /// Combines `self` with the operand through bitwise XOR,
    /// byte by byte over the backing storage.
    ///
    /// Mutates `self` in place and returns it for chaining; the
    /// operand is never modified.
    pub fn xor<'a>(&mut self, operand: impl Into<Operand<'a>>) -> Result<&mut Self> {
        let operand = self.binary_operand(operand)?;
        self.storage
            .iter_mut()
            .zip(operand.as_bytes())
            .for_each(|(lhs, rhs)| *lhs ^= rhs);

        Ok(self)
    }

    /// Complements every bit inside the logical window.
    ///
    /// Storage bits outside the window keep their contents, so
    /// buffers windowing different parts of equal storage compose.
    pub fn not(&mut self) -> &mut Self {
        self.window_mut().iter_mut().for_each(|mut bit| *bit = !*bit);
        self
    }

    /// Tests whether both logical windows contain identical bit
    /// sequences.
    ///
    /// Operands of unequal length are a [`Error::LengthMismatch`],
    /// like in every other binary operation.
    pub fn equal<'a>(&self, operand: impl Into<Operand<'a>>) -> Result<bool> {
        let operand = self.binary_operand(operand)?;

        // Windows anchored at the storage start admit a byte-wise
        // comparison of everything but the trailing partial byte.
        if self.offset == 0 && operand.offset == 0 {
            let full = align_down(self.length, u8::BITS as usize);
            let bytes = full / u8::BITS as usize;
            return Ok(self.storage[..bytes] == operand.as_bytes()[..bytes]
                && self.window()[full..] == operand.window()[full..]);
        }

        Ok(self.window() == operand.window())
    }

    /// Counts the set bits inside the logical window.
    pub fn count(&self) -> usize {
        self.window().count_ones()
    }

    /// Indicates whether any window bit is set.
    pub fn any(&self) -> bool {
        self.window().any()
    }

    /// Indicates whether no window bit is set.
    pub fn none(&self) -> bool {
        self.window().not_any()
    }

    /// Clears every bit inside the logical window to 0.
    pub fn reset(&mut self) -> &mut Self {
        self.window_mut().fill(false);
        self
    }

    /// Renders the logical window as a string in the given radix.
    ///
    /// Only radix 2 is supported; anything else fails with
    /// [`Error::UnsupportedRadix`]. The radix-2 form is also
    /// available infallibly through the [`Display`] impl.
    ///
    /// [`Display`]: std::fmt::Display
    pub fn to_radix_string(&self, radix: u32) -> Result<String> {
        if radix == 2 {
            Ok(self.to_string())
        } else {
            Err(Error::UnsupportedRadix(radix))
        }
    }
}
