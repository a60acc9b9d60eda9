//! # Self-Test Subcommand
//!
//! Generates random strings over code points 32..=127, hashes each with
//! `sha256-core` and with the `sha2` crate, and reports every input whose
//! digests differ. The corpus is also checked for collisions between
//! distinct inputs.

use std::collections::HashMap;

use anyhow::bail;
use clap::Args;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use sha2::Digest;

use sha256_core::{sha256_ascii, Sha256Digest};

/// Lowest code point in the generated corpus (space).
const POOL_START: u8 = 32;
/// One past the highest code point in the generated corpus.
const POOL_END: u8 = 128;
/// Upper bound on the collision map's up-front allocation.
const MAX_PREALLOC: usize = 1 << 16;

/// Arguments for the self-test subcommand.
#[derive(Args, Debug)]
pub struct SelfTestArgs {
    /// Number of random inputs to generate.
    #[arg(long, default_value_t = SelfTestConfig::default().iterations)]
    pub iterations: usize,

    /// Maximum input length in characters.
    #[arg(long, default_value_t = SelfTestConfig::default().max_len)]
    pub max_len: usize,

    /// RNG seed for a reproducible corpus. Random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the full report as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Knobs for one self-test run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelfTestConfig {
    pub iterations: usize,
    pub max_len: usize,
    pub seed: Option<u64>,
}

impl Default for SelfTestConfig {
    fn default() -> Self {
        Self {
            iterations: 4000,
            max_len: 512,
            seed: None,
        }
    }
}

impl From<&SelfTestArgs> for SelfTestConfig {
    fn from(args: &SelfTestArgs) -> Self {
        Self {
            iterations: args.iterations,
            max_len: args.max_len,
            seed: args.seed,
        }
    }
}

/// An input whose digest disagreed with the reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mismatch {
    pub input: String,
    pub expected: Sha256Digest,
    pub actual: Sha256Digest,
}

/// Two distinct inputs that produced the same digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collision {
    pub first: String,
    pub second: String,
    pub digest: Sha256Digest,
}

/// Outcome of a self-test run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelfTestReport {
    pub seed: u64,
    pub iterations: usize,
    pub mismatches: Vec<Mismatch>,
    pub collisions: Vec<Collision>,
}

impl SelfTestReport {
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty() && self.collisions.is_empty()
    }
}

/// A random string of length `0..=max_len` drawn from the printable pool.
fn random_input(rng: &mut StdRng, max_len: usize) -> String {
    let len = rng.gen_range(0..=max_len);
    (0..len)
        .map(|_| char::from(rng.gen_range(POOL_START..POOL_END)))
        .collect()
}

fn reference_digest(input: &[u8]) -> Sha256Digest {
    let mut out = [0u8; 32];
    out.copy_from_slice(&sha2::Sha256::digest(input));
    Sha256Digest::new(out)
}

/// Initial capacity for the collision map; larger runs grow it on demand.
fn seen_capacity(iterations: usize) -> usize {
    iterations.min(MAX_PREALLOC)
}

/// Run the differential self-test described by `config`.
pub fn run_config(config: &SelfTestConfig) -> anyhow::Result<SelfTestReport> {
    let seed = config.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    tracing::info!(seed, iterations = config.iterations, max_len = config.max_len, "starting self-test");

    let mut mismatches = Vec::new();
    let mut collisions = Vec::new();
    let mut seen: HashMap<Sha256Digest, String> =
        HashMap::with_capacity(seen_capacity(config.iterations));

    for _ in 0..config.iterations {
        let input = random_input(&mut rng, config.max_len);
        let actual = sha256_ascii(&input)?;
        let expected = reference_digest(input.as_bytes());

        if actual != expected {
            tracing::warn!(%expected, %actual, input = %input, "digest mismatch");
            mismatches.push(Mismatch {
                input: input.clone(),
                expected,
                actual,
            });
        }

        match seen.get(&actual) {
            Some(prev) if *prev != input => {
                tracing::warn!(digest = %actual, "collision between distinct inputs");
                collisions.push(Collision {
                    first: prev.clone(),
                    second: input,
                    digest: actual,
                });
            }
            Some(_) => {}
            None => {
                seen.insert(actual, input);
            }
        }
    }

    Ok(SelfTestReport {
        seed,
        iterations: config.iterations,
        mismatches,
        collisions,
    })
}

/// Handler for the self-test subcommand.
pub fn run(args: &SelfTestArgs) -> anyhow::Result<()> {
    let report = run_config(&SelfTestConfig::from(args))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for m in &report.mismatches {
            println!("!= {}", m.input);
        }
        println!(
            "{} inputs, {} mismatches, {} collisions (seed {})",
            report.iterations,
            report.mismatches.len(),
            report.collisions.len(),
            report.seed
        );
    }

    if !report.passed() {
        bail!(
            "self-test failed: {} mismatches, {} collisions",
            report.mismatches.len(),
            report.collisions.len()
        );
    }
    tracing::info!("self-test passed");
    Ok(())
}
