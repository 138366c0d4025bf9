//! # CLI Interface
//!
//! Defines the command-line argument structure for `keyprint` using
//! `clap` derive. The tool takes exactly two inputs that matter — the
//! extended public key and a count — plus output/logging knobs.

use clap::{Parser, ValueEnum};

use keyprint::config::DEFAULT_COUNT;

/// Derive self-authenticating principals from an extended public key.
///
/// Walks the fixed account level (child 0) of the given xpub, derives one
/// leaf public key per index, and prints each key's principal — a
/// deterministic, checksummed, human-transcribable identifier — one per
/// line on stdout. Logs go to stderr, so the output pipes cleanly.
#[derive(Parser, Debug)]
#[command(name = "keyprint", about = "Self-authenticating principal generator", version)]
pub struct KeyprintCli {
    /// Base58Check-encoded extended public key to derive from.
    #[arg(env = "KEYPRINT_XPUB")]
    pub xpub: String,

    /// Number of principals to derive (leaf indices 0..N).
    #[arg(long, short = 'n', default_value_t = DEFAULT_COUNT)]
    pub count: u32,

    /// Output format for the derived principals.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log output format: "pretty" or "json".
    #[arg(long, default_value = "pretty")]
    pub log_format: String,
}

/// How to print the derived batch.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One principal per line, in index order.
    Text,
    /// A single JSON array of principal strings.
    Json,
}
