//! Provides variable-length, bit-addressable buffers over byte
//! storage.
//!
//! All the operations on types of this crate number bits from the
//! LSB of the first storage byte towards the MSB of the last one:
//! the absolute bit index `o` lives in byte `o >> 3` at position
//! `o % 8`.
//!
//! The textual interchange form is the *bit-string*, a sequence of
//! `0`/`1` characters read MSB-first. Parsing and rendering are
//! exact inverses, so any valid bit-string round-trips bit for bit.

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod algebra;

mod buffer;
pub use buffer::BitBuffer;

mod error;
pub use error::{Error, Result};

mod operand;
pub use operand::Operand;

mod shift;
