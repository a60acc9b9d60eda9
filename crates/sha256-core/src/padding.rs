//! # Message Padding
//!
//! Produces `M || 0x80 || 0x00* || be64(8 * len(M))`, the shortest such
//! sequence whose length is a multiple of 64 bytes. When `len(M) mod 64`
//! is 56 or more, the marker and the length field no longer fit in the
//! final partial block and the padding spills into one extra block.

use crate::constants::{BLOCK_LEN, LENGTH_FIELD_LEN};
use crate::error::Sha256Error;

/// Bit length of a message as it is written into the length field.
///
/// # Errors
///
/// Returns [`Sha256Error::MessageTooLong`] if `8 * len` does not fit in a `u64`.
pub fn bit_length(len: usize) -> Result<u64, Sha256Error> {
    u64::try_from(len)
        .ok()
        .and_then(|n| n.checked_mul(8))
        .ok_or(Sha256Error::MessageTooLong { len })
}

/// Total padded length for a message of `len` bytes.
///
/// Always a positive multiple of 64 and at least `len + 9`.
///
/// # Errors
///
/// Returns [`Sha256Error::MessageTooLong`] if the bit length is not
/// representable or the padded length overflows `usize`.
pub fn padded_len(len: usize) -> Result<usize, Sha256Error> {
    bit_length(len)?;
    let zeros = zero_fill_len(len);
    len.checked_add(1 + zeros + LENGTH_FIELD_LEN)
        .ok_or(Sha256Error::MessageTooLong { len })
}

/// Number of `0x00` bytes between the `0x80` marker and the length field.
fn zero_fill_len(len: usize) -> usize {
    let tail = len % BLOCK_LEN;
    let room = BLOCK_LEN - LENGTH_FIELD_LEN - 1;
    if tail <= room {
        room - tail
    } else {
        room + BLOCK_LEN - tail
    }
}

/// Pad `message` to a whole number of 64-byte blocks.
///
/// # Errors
///
/// Returns [`Sha256Error::MessageTooLong`] if the message bit length does
/// not fit in the 64-bit length field.
pub fn pad(message: &[u8]) -> Result<Vec<u8>, Sha256Error> {
    let bits = bit_length(message.len())?;
    let total = padded_len(message.len())?;

    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(message);
    out.push(0x80);
    out.resize(total - LENGTH_FIELD_LEN, 0x00);
    out.extend_from_slice(&bits.to_be_bytes());
    debug_assert_eq!(out.len() % BLOCK_LEN, 0);
    Ok(out)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Padded length is a multiple of 64 and leaves room for marker and length.
        #[test]
        fn padded_length_aligned(msg in prop::collection::vec(any::<u8>(), 0..600)) {
            let p = pad(&msg).unwrap();
            prop_assert_eq!(p.len() % BLOCK_LEN, 0);
            prop_assert!(p.len() >= msg.len() + 9);
            prop_assert!(p.len() < msg.len() + 9 + BLOCK_LEN);
            prop_assert_eq!(p.len(), padded_len(msg.len()).unwrap());
        }

        /// The message is a prefix and the trailer encodes its bit length.
        #[test]
        fn padding_preserves_message(msg in prop::collection::vec(any::<u8>(), 0..600)) {
            let p = pad(&msg).unwrap();
            prop_assert_eq!(&p[..msg.len()], &msg[..]);
            prop_assert_eq!(p[msg.len()], 0x80);
            let trailer: [u8; 8] = p[p.len() - 8..].try_into().unwrap();
            prop_assert_eq!(u64::from_be_bytes(trailer), msg.len() as u64 * 8);
        }
    }
}
