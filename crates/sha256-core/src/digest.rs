//! # SHA-256 Digest
//!
//! The top-level driver and the 32-byte digest value it produces.
//!
//! The pipeline is linear: pad the message, seed the digest state from
//! [`H0`], then for every 64-byte block build the schedule, compress, and
//! accumulate. After the last block the eight state words are written out
//! big-endian, in order.
//!
//! ## Input Encoding
//!
//! [`sha256()`] hashes raw bytes. [`sha256_ascii()`] accepts text only when
//! every character is 7-bit ASCII, so there is exactly one byte per
//! character and no implicit re-encoding of Unicode text.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::compress::{accumulate, compress_block};
use crate::constants::{BLOCK_LEN, DIGEST_LEN, H0};
use crate::error::Sha256Error;
use crate::padding::pad;
use crate::schedule::MessageSchedule;

/// A SHA-256 digest: 32 bytes, serialized as lowercase hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sha256Digest([u8; DIGEST_LEN]);

impl Sha256Digest {
    /// Wrap raw digest bytes.
    pub fn new(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Serialize a final digest state, each word big-endian.
    fn from_state(state: &[u32; 8]) -> Self {
        let mut out = [0u8; DIGEST_LEN];
        for (chunk, word) in out.chunks_exact_mut(4).zip(state) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        Self(out)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    pub fn into_bytes(self) -> [u8; DIGEST_LEN] {
        self.0
    }

    /// Render the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Parse a 64-character hex string (either case, surrounding whitespace ignored).
    ///
    /// # Errors
    ///
    /// Returns [`Sha256Error::InvalidHex`] on wrong length or a non-hex digit.
    pub fn from_hex(hex: &str) -> Result<Self, Sha256Error> {
        let hex = hex.trim();
        if hex.len() != DIGEST_LEN * 2 {
            return Err(Sha256Error::InvalidHex(format!(
                "expected {} hex chars, got {}",
                DIGEST_LEN * 2,
                hex.len()
            )));
        }
        if let Some(pos) = hex.bytes().position(|b| !b.is_ascii_hexdigit()) {
            return Err(Sha256Error::InvalidHex(format!(
                "non-hex character at offset {pos}"
            )));
        }
        let mut out = [0u8; DIGEST_LEN];
        for (i, pair) in hex.as_bytes().chunks_exact(2).enumerate() {
            let s = std::str::from_utf8(pair)
                .map_err(|e| Sha256Error::InvalidHex(format!("invalid hex: {e}")))?;
            out[i] = u8::from_str_radix(s, 16)
                .map_err(|e| Sha256Error::InvalidHex(format!("invalid hex at {i}: {e}")))?;
        }
        Ok(Self(out))
    }
}

impl fmt::Display for Sha256Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Sha256Digest {
    type Err = Sha256Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl AsRef<[u8]> for Sha256Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Sha256Digest> for [u8; DIGEST_LEN] {
    fn from(d: Sha256Digest) -> Self {
        d.0
    }
}

impl Serialize for Sha256Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Sha256Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Compute the SHA-256 digest of `message`.
///
/// Deterministic and free of shared state: every call owns its padded
/// buffer, schedule, and state, so concurrent calls need no locking.
///
/// # Errors
///
/// Returns [`Sha256Error::MessageTooLong`] if the message bit length does
/// not fit in the 64-bit length field.
pub fn sha256(message: &[u8]) -> Result<Sha256Digest, Sha256Error> {
    let padded = pad(message)?;
    let mut state = H0;

    let mut block = [0u8; BLOCK_LEN];
    for chunk in padded.chunks_exact(BLOCK_LEN) {
        block.copy_from_slice(chunk);
        let schedule = MessageSchedule::from_block(&block);
        let working = compress_block(&state, &schedule);
        accumulate(&mut state, &working);
    }

    tracing::trace!(
        len = message.len(),
        blocks = padded.len() / BLOCK_LEN,
        "sha256 computed"
    );
    Ok(Sha256Digest::from_state(&state))
}

/// Compute the SHA-256 digest of `message` as a lowercase hex string.
pub fn sha256_hex(message: &[u8]) -> Result<String, Sha256Error> {
    sha256(message).map(|d| d.to_hex())
}

/// Compute the SHA-256 digest of ASCII `text`, one byte per character.
///
/// # Errors
///
/// Returns [`Sha256Error::NonAscii`] for the first character outside
/// 7-bit ASCII. Callers holding other text should encode it to bytes
/// themselves and call [`sha256()`].
pub fn sha256_ascii(text: &str) -> Result<Sha256Digest, Sha256Error> {
    if let Some((position, ch)) = text.char_indices().find(|(_, c)| !c.is_ascii()) {
        return Err(Sha256Error::NonAscii { position, ch });
    }
    sha256(text.as_bytes())
}
