//! Length-changing shifts over the buffer contents.

use bitvec::prelude::*;
use structbit_utils::{mem::bits_to_bytes, tracing::trace};

use crate::buffer::BitBuffer;

impl BitBuffer {
    /// Shifts the buffer contents by `n` bits, resizing the
    /// logical window and, where needed, the backing storage.
    ///
    /// Positive `n` moves every bit towards higher significance
    /// and grows the window by `n` bits, multiplying the
    /// represented value by 2^n; vacated low positions are zero.
    /// Negative `n` discards the low `|n|` bits, dividing the
    /// value by 2^|n|; the window never shrinks below a single
    /// bit. `shift(0)` is a no-op.
    ///
    /// Storage capacity changes go through a fresh, zeroed
    /// allocation which replaces the old one only after all bits
    /// have been copied over.
    pub fn shift(&mut self, n: isize) -> &mut Self {
        match n {
            0 => {}
            n if n > 0 => self.shift_up(n as usize),
            n => self.shift_down(n.unsigned_abs()),
        }
        self
    }

    fn shift_up(&mut self, n: usize) {
        self.length += n;

        let capacity = bits_to_bytes(self.offset + self.length).max(self.storage.len());
        let mut storage = vec![0u8; capacity];
        if capacity != self.storage.len() {
            trace!(from = self.storage.len(), to = capacity, "resizing storage");
        }

        let src = self.storage.view_bits::<Lsb0>();
        let dst = storage.view_bits_mut::<Lsb0>();
        for index in src.iter_ones() {
            if index + n < dst.len() {
                dst.set(index + n, true);
            }
        }

        self.storage = storage;
    }

    fn shift_down(&mut self, n: usize) {
        if n >= self.length {
            // Shifting out the entire window leaves one zero bit.
            self.storage = vec![0];
            self.offset = 0;
            self.length = 1;
            return;
        }

        self.length -= n;

        let capacity = bits_to_bytes(self.offset + self.length);
        let mut storage = vec![0u8; capacity];
        if capacity != self.storage.len() {
            trace!(from = self.storage.len(), to = capacity, "resizing storage");
        }

        let src = self.storage.view_bits::<Lsb0>();
        let dst = storage.view_bits_mut::<Lsb0>();
        for index in src.iter_ones().filter(|&index| index >= n) {
            if index - n < dst.len() {
                dst.set(index - n, true);
            }
        }

        self.storage = storage;
    }
}
