//! # Message Schedule
//!
//! Expands one 64-byte block into the 64 words consumed by the rounds.
//! Words 0..16 are the block read as big-endian `u32`s; words 16..64 are
//! `W[i-16] + σ0(W[i-15]) + W[i-7] + σ1(W[i-2])`, modulo 2^32.

use crate::constants::{BLOCK_LEN, ROUNDS};
use crate::primitives::{small_sigma0, small_sigma1};

/// The 64-word schedule for a single block. Rebuilt fresh per block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageSchedule([u32; ROUNDS]);

impl MessageSchedule {
    /// Build the schedule for `block`.
    pub fn from_block(block: &[u8; BLOCK_LEN]) -> Self {
        let mut w = [0u32; ROUNDS];

        for (word, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
            *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        for i in 16..ROUNDS {
            w[i] = w[i - 16]
                .wrapping_add(small_sigma0(w[i - 15]))
                .wrapping_add(w[i - 7])
                .wrapping_add(small_sigma1(w[i - 2]));
        }

        Self(w)
    }

    /// Access the scheduled words in round order.
    pub fn as_words(&self) -> &[u32; ROUNDS] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::padding::pad;

    fn first_block(msg: &[u8]) -> [u8; BLOCK_LEN] {
        let padded = pad(msg).unwrap();
        padded[..BLOCK_LEN].try_into().unwrap()
    }

    #[test]
    fn test_abc_schedule_head_is_block_words() {
        let w = MessageSchedule::from_block(&first_block(b"abc"));
        let w = w.as_words();
        assert_eq!(w[0], 0x6162_6380);
        assert!(w[1..15].iter().all(|&x| x == 0));
        assert_eq!(w[15], 0x0000_0018);
    }

    #[test]
    fn test_abc_schedule_extension_words() {
        // FIPS 180-2 appendix B.1 intermediate values.
        let w = MessageSchedule::from_block(&first_block(b"abc"));
        let w = w.as_words();
        assert_eq!(w[16], 0x6162_6380);
        assert_eq!(w[17], 0x000f_0000);
        assert_eq!(w[63], 0x12b1_edeb);
    }

    #[test]
    fn test_zero_block_schedule_is_zero() {
        let w = MessageSchedule::from_block(&[0u8; BLOCK_LEN]);
        assert!(w.as_words().iter().all(|&x| x == 0));
    }

    #[test]
    fn test_extension_wraps() {
        let w = MessageSchedule::from_block(&[0xff; BLOCK_LEN]);
        let w = w.as_words();
        let expected = w[0]
            .wrapping_add(small_sigma0(w[1]))
            .wrapping_add(w[9])
            .wrapping_add(small_sigma1(w[14]));
        assert_eq!(w[16], expected);
    }
}
