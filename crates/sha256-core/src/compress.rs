//! # Compression Function
//!
//! One block is compressed by seeding the working state A..H from the
//! digest state, applying [`round`] once per (schedule word, round
//! constant) pair, and finally adding the working state back into the
//! digest state word by word.
//!
//! Each round computes
//!
//! ```text
//! T1   = H + Σ1(E) + Ch(E, F, G) + Wt + Kt
//! A'   = T1 + Σ0(A) + Maj(A, B, C)
//! E'   = D + T1
//! next = (A', A, B, C, E', E, F, G)
//! ```
//!
//! with every addition modulo 2^32.

use crate::constants::K;
use crate::primitives::{big_sigma0, big_sigma1, ch, maj};
use crate::schedule::MessageSchedule;

/// The eight working words of one block's compression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkingState {
    pub a: u32,
    pub b: u32,
    pub c: u32,
    pub d: u32,
    pub e: u32,
    pub f: u32,
    pub g: u32,
    pub h: u32,
}

impl WorkingState {
    /// Seed the working state from a digest state, in order A..H.
    pub fn from_words(words: &[u32; 8]) -> Self {
        let [a, b, c, d, e, f, g, h] = *words;
        Self { a, b, c, d, e, f, g, h }
    }

    /// The working words in order A..H.
    pub fn to_words(self) -> [u32; 8] {
        [self.a, self.b, self.c, self.d, self.e, self.f, self.g, self.h]
    }
}

/// Apply one round to `state` with scheduled word `wt` and constant `kt`.
pub fn round(state: WorkingState, wt: u32, kt: u32) -> WorkingState {
    let WorkingState { a, b, c, d, e, f, g, h } = state;

    let t1 = h
        .wrapping_add(big_sigma1(e))
        .wrapping_add(ch(e, f, g))
        .wrapping_add(wt)
        .wrapping_add(kt);
    let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

    WorkingState {
        a: t1.wrapping_add(t2),
        b: a,
        c: b,
        d: c,
        e: d.wrapping_add(t1),
        f: e,
        g: f,
        h: g,
    }
}

/// Run all 64 rounds over `schedule`, starting from `digest_state`.
///
/// Returns the final working state; the caller folds it in with [`accumulate`].
pub fn compress_block(digest_state: &[u32; 8], schedule: &MessageSchedule) -> [u32; 8] {
    schedule
        .as_words()
        .iter()
        .zip(K.iter())
        .fold(WorkingState::from_words(digest_state), |state, (&wt, &kt)| {
            round(state, wt, kt)
        })
        .to_words()
}

/// Add `working` into `digest_state` word by word, modulo 2^32.
pub fn accumulate(digest_state: &mut [u32; 8], working: &[u32; 8]) {
    for (d, w) in digest_state.iter_mut().zip(working) {
        *d = d.wrapping_add(*w);
    }
}
