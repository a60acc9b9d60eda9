//! # sha256-cli — Command-Line Front End for `sha256-core`
//!
//! ## Subcommands
//!
//! - `hash` — digest files, stdin, or ASCII text; optionally verify
//!   against an expected digest
//! - `self-test` — randomized differential run against the `sha2` crate
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Digests are computed only by `sha256-core`; `sha2` is used solely as
//!   the trusted reference inside the self-test.
//! - stdout carries results only; diagnostics go through `tracing` to stderr.

pub mod hash;
pub mod selftest;
