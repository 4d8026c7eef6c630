use thiserror::Error;

/// Errors that may occur when operating on a [`BitBuffer`].
///
/// Every operation validates its inputs before touching any state,
/// so a failed call leaves the buffer exactly as it was.
///
/// [`BitBuffer`]: crate::BitBuffer
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A bit-string contains a character other than `0` or `1`.
    #[error("invalid character {character:?} at position {position} in bit-string")]
    InvalidInput {
        /// The offending character.
        character: char,
        /// Its byte position within the input string.
        position: usize,
    },
    /// A bit address lies beyond the available capacity, either of
    /// the backing storage or of a requested integer type.
    #[error("bit address {index} exceeds a capacity of {capacity} bits")]
    OutOfRange {
        /// The highest bit index the request would have touched.
        index: usize,
        /// The capacity that bounds the request, in bits.
        capacity: usize,
    },
    /// A binary operation was attempted between buffers of unequal
    /// logical length.
    #[error("operand is {actual} bits wide, expected {expected}")]
    LengthMismatch {
        /// The length of the buffer the operation was called on.
        expected: usize,
        /// The length of the operand.
        actual: usize,
    },
    /// A textual conversion was requested in a radix other than 2.
    #[error("unsupported radix {0}, only 2 is available")]
    UnsupportedRadix(u32),
}

/// Result type for fallible buffer operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
