//! # Differential Tests Against the `sha2` Crate
//!
//! These tests compare the from-scratch pipeline byte-for-byte with the
//! `sha2` crate, a trusted SHA-256 implementation.
//!
//! ## How It Works
//!
//! 1. **Known answers**: the standard empty-string and `"abc"` digests.
//! 2. **Boundary lengths**: messages whose length sits on either side of
//!    the single-block/extra-block padding split.
//! 3. **Randomized corpus**: 4000 printable-ASCII strings of length 0–512
//!    from a fixed seed, each hashed both ways.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sha2::{Digest, Sha256};

use sha256_core::{pad, sha256, sha256_ascii, BLOCK_LEN};

/// Helper: digest bytes from the trusted implementation.
fn reference(msg: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&Sha256::digest(msg));
    out
}

/// Helper: a random string over code points 32..=127.
fn printable(rng: &mut StdRng, max_len: usize) -> String {
    let len = rng.gen_range(0..=max_len);
    (0..len).map(|_| char::from(rng.gen_range(32u8..128))).collect()
}

// ---------------------------------------------------------------------------
// Known answers
// ---------------------------------------------------------------------------

#[test]
fn test_empty_string_digest() {
    assert_eq!(
        sha256(b"").unwrap().to_hex(),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn test_abc_digest() {
    assert_eq!(
        sha256_ascii("abc").unwrap().to_hex(),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn test_million_a_digest() {
    let msg = vec![b'a'; 1_000_000];
    assert_eq!(
        sha256(&msg).unwrap().to_hex(),
        "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0"
    );
}

// ---------------------------------------------------------------------------
// Padding boundaries
// ---------------------------------------------------------------------------

#[test]
fn test_boundary_lengths_match_reference() {
    for len in [55usize, 56, 57, 63, 64, 65, 119, 120, 127, 128] {
        let msg: Vec<u8> = (0..len).map(|i| (i % 251) as u8).collect();
        assert_eq!(
            sha256(&msg).unwrap().into_bytes(),
            reference(&msg),
            "digest differs at length {len}"
        );
    }
}

#[test]
fn test_boundary_block_counts() {
    assert_eq!(pad(&[0u8; 55]).unwrap().len() / BLOCK_LEN, 1);
    assert_eq!(pad(&[0u8; 56]).unwrap().len() / BLOCK_LEN, 2);
    assert_eq!(pad(&[0u8; 64]).unwrap().len() / BLOCK_LEN, 2);
}

// ---------------------------------------------------------------------------
// Randomized corpus
// ---------------------------------------------------------------------------

#[test]
fn test_random_printable_corpus_matches_reference() {
    let mut rng = StdRng::seed_from_u64(0x5348_4132_3536);
    let mut mismatches = Vec::new();

    for _ in 0..4000 {
        let s = printable(&mut rng, 512);
        if sha256_ascii(&s).unwrap().into_bytes() != reference(s.as_bytes()) {
            mismatches.push(s);
        }
    }

    assert!(mismatches.is_empty(), "mismatching inputs: {mismatches:?}");
}

#[test]
fn test_random_corpus_has_no_collisions() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut seen: HashMap<[u8; 32], String> = HashMap::new();

    for _ in 0..2000 {
        let s = printable(&mut rng, 512);
        let d = sha256_ascii(&s).unwrap().into_bytes();
        if let Some(prev) = seen.insert(d, s.clone()) {
            assert_eq!(prev, s, "distinct inputs collided");
        }
    }
}

#[test]
fn test_random_binary_inputs_match_reference() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..500 {
        let len = rng.gen_range(0..=300);
        let msg: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
        assert_eq!(sha256(&msg).unwrap().into_bytes(), reference(&msg));
    }
}

#[test]
fn test_concurrent_calls_agree() {
    let msg = b"the quick brown fox jumps over the lazy dog".repeat(20);
    let expected = reference(&msg);
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let msg = msg.clone();
            std::thread::spawn(move || sha256(&msg).unwrap().into_bytes())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}
