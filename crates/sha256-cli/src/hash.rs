//! # Hash Subcommand
//!
//! Digests files, stdin, or literal ASCII text and prints lines in the
//! coreutils `sha256sum` format: `<hex>  <name>`.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::Args;

use sha256_core::{sha256, sha256_ascii, Sha256Digest};

/// Arguments for the hash subcommand.
#[derive(Args, Debug)]
pub struct HashArgs {
    /// Files to hash. `-` or no files reads stdin.
    pub files: Vec<PathBuf>,

    /// Hash this ASCII text instead of reading files.
    #[arg(long, conflicts_with = "files")]
    pub text: Option<String>,

    /// Fail unless every digest equals this hex value.
    #[arg(long)]
    pub expect: Option<Sha256Digest>,
}

/// One computed digest and the name it is reported under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashLine {
    pub digest: Sha256Digest,
    pub name: String,
}

impl std::fmt::Display for HashLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}  {}", self.digest, self.name)
    }
}

/// Compute the digests requested by `args`.
pub fn compute(args: &HashArgs) -> anyhow::Result<Vec<HashLine>> {
    if let Some(text) = &args.text {
        let digest = sha256_ascii(text)?;
        return Ok(vec![HashLine {
            digest,
            name: "-".to_string(),
        }]);
    }

    if args.files.is_empty() {
        return Ok(vec![hash_stdin()?]);
    }

    args.files
        .iter()
        .map(|path| {
            if path.as_os_str() == "-" {
                hash_stdin()
            } else {
                hash_file(path)
            }
        })
        .collect()
}

fn hash_stdin() -> anyhow::Result<HashLine> {
    let mut buf = Vec::new();
    std::io::stdin()
        .read_to_end(&mut buf)
        .context("failed to read stdin")?;
    tracing::debug!(bytes = buf.len(), "read stdin");
    Ok(HashLine {
        digest: sha256(&buf)?,
        name: "-".to_string(),
    })
}

fn hash_file(path: &Path) -> anyhow::Result<HashLine> {
    let buf = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = buf.len(), "read file");
    Ok(HashLine {
        digest: sha256(&buf)?,
        name: path.display().to_string(),
    })
}

/// Check every line against `expected`.
pub fn verify(lines: &[HashLine], expected: &Sha256Digest) -> anyhow::Result<()> {
    for line in lines {
        if line.digest != *expected {
            bail!(
                "digest mismatch for {}: expected {expected}, got {}",
                line.name,
                line.digest
            );
        }
    }
    Ok(())
}

/// Handler for the hash subcommand.
pub fn run(args: &HashArgs) -> anyhow::Result<()> {
    let lines = compute(args)?;
    for line in &lines {
        println!("{line}");
    }
    if let Some(expected) = &args.expect {
        verify(&lines, expected)?;
        tracing::info!(count = lines.len(), "all digests match expected value");
    }
    Ok(())
}
