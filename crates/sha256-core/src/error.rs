//! # Error Types
//!
//! Hashing is a pure computation, so the taxonomy is small: the input can
//! be too large for the 64-bit length field, text input can fall outside
//! the accepted encoding, and a hex digest string can be malformed.
//! All errors use `thiserror` for derive-based `Display` and `Error`.

use thiserror::Error;

/// Error raised by the SHA-256 core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Sha256Error {
    /// The message bit length does not fit in the 64-bit length field.
    #[error("message of {len} bytes is too long: bit length exceeds 2^64 - 1")]
    MessageTooLong {
        /// Length of the rejected message in bytes.
        len: usize,
    },

    /// Text input contained a character outside 7-bit ASCII.
    #[error("non-ASCII character {ch:?} at byte offset {position}; pass pre-encoded bytes instead")]
    NonAscii {
        /// Byte offset of the offending character within the text.
        position: usize,
        /// The offending character.
        ch: char,
    },

    /// A hex-encoded digest could not be parsed.
    #[error("invalid hex digest: {0}")]
    InvalidHex(String),
}
