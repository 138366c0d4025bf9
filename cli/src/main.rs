// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # keyprint
//!
//! Entry point for the `keyprint` binary. Parses CLI arguments, initializes
//! logging, derives the requested batch of principals from the given
//! extended public key, and prints them to stdout in leaf-index order.
//!
//! The batch is derived in full before the first byte of output: on any
//! failure — malformed xpub, derivation error — the process prints a single
//! error message to stderr and exits non-zero with nothing on stdout.

mod cli;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;

use keyprint::derive::bip32::XpubKeySource;
use keyprint::derive::derive_principals;

use cli::{KeyprintCli, OutputFormat};
use logging::LogFormat;

fn main() -> Result<()> {
    let cli = KeyprintCli::parse();
    logging::init_logging(
        "keyprint=warn,keyprint_cli=warn",
        LogFormat::from_str_lossy(&cli.log_format),
    );

    tracing::debug!(count = cli.count, "starting derivation");

    let root: XpubKeySource = cli
        .xpub
        .parse()
        .context("failed to parse extended public key")?;

    let principals =
        derive_principals(&root, cli.count).context("child key derivation failed")?;

    match cli.format {
        OutputFormat::Text => {
            for principal in &principals {
                println!("{principal}");
            }
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&principals)
                    .context("failed to serialize principals")?
            );
        }
    }

    tracing::debug!(derived = principals.len(), "done");
    Ok(())
}
