//! # sha256-core — SHA-256 From First Principles
//!
//! A from-scratch implementation of the SHA-256 digest (FIPS 180-4). The
//! crate is organized as the four layers of the algorithm:
//!
//! 1. **Padder** (`padding`) — extends a message to a multiple of 64 bytes
//!    with the `0x80` marker, zero fill, and the big-endian bit length.
//! 2. **Word Scheduler** (`schedule`) — expands each 64-byte block into the
//!    64-word message schedule.
//! 3. **Compressor** (`compress`) — threads the eight working words A..H
//!    through 64 rounds per block.
//! 4. **Accumulator & Serializer** (`digest`) — folds each block's result
//!    into the digest state and emits the 32-byte big-endian digest.
//!
//! ## Crate Policy
//!
//! - No dependencies on other workspace crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All word arithmetic is native `u32` with explicit wrapping addition.
//! - No shared mutable state: every call owns its schedule, working state,
//!   and digest state, so concurrent calls need no synchronization.

pub mod compress;
pub mod constants;
pub mod digest;
pub mod error;
pub mod padding;
pub mod primitives;
pub mod schedule;

// Re-export primary types for ergonomic imports.
pub use constants::{BLOCK_LEN, DIGEST_LEN, H0, K};
pub use digest::{sha256, sha256_ascii, sha256_hex, Sha256Digest};
pub use error::Sha256Error;
pub use padding::{pad, padded_len};
pub use schedule::MessageSchedule;
