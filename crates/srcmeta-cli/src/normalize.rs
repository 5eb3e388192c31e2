//! # Normalize Subcommand
//!
//! Deduplicates and sorts a list of strings, one per output line. Items
//! come from the command line, or newline-separated from stdin when no
//! positional items are given.

use std::io::{BufRead, Write};

use clap::Args;
use srcmeta_core::dedupe_and_sort;

/// Arguments for the normalize subcommand.
#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// Strings to normalize; read from stdin when omitted.
    pub items: Vec<String>,
}

pub fn run(args: NormalizeArgs) -> anyhow::Result<()> {
    let items = if args.items.is_empty() {
        read_stdin_items()?
    } else {
        args.items
    };

    let mut stdout = std::io::stdout().lock();
    for item in dedupe_and_sort(items) {
        writeln!(stdout, "{item}")?;
    }
    Ok(())
}

fn read_stdin_items() -> anyhow::Result<Vec<String>> {
    let mut items = Vec::new();
    for line in std::io::stdin().lock().lines() {
        let line = line?;
        if !line.is_empty() {
            items.push(line);
        }
    }
    Ok(items)
}
