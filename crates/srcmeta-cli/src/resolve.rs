//! # Resolve Subcommand
//!
//! Resolves embedded-resource references against their source file and
//! prints the build-root-relative results, one per line (or as a JSON
//! array with `--json`).
//!
//! The resolver itself does not validate root containment, so this handler
//! reports a `Warning` for any resolved path that still starts with `..`.
//! Under `--strict` that warning halts the run.

use std::io::Write;

use clap::Args;
use srcmeta_core::{
    dedupe_and_sort, resolve_embedded_paths, ControlDecision, Origin, Reporter, Severity,
    StderrSink,
};

/// Arguments for the resolve subcommand.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Build-root-relative path of the referencing source file.
    #[arg(long)]
    pub src_file: String,

    /// Raw reference strings extracted from the source file.
    pub references: Vec<String>,

    /// Deduplicate and sort the resolved paths.
    #[arg(long)]
    pub sort: bool,

    /// Emit the resolved paths as a JSON array.
    #[arg(long)]
    pub json: bool,
}

/// Resolve and print; returns `Halt` when a strict-mode warning fired.
pub fn run(args: &ResolveArgs, strict: bool) -> anyhow::Result<ControlDecision> {
    let mut resolved = resolve_embedded_paths(&args.src_file, &args.references);
    if args.sort {
        resolved = dedupe_and_sort(resolved);
    }
    tracing::debug!(
        src_file = %args.src_file,
        count = resolved.len(),
        "resolved embedded-resource references"
    );

    let sink = StderrSink;
    let reporter = Reporter::new(&sink);
    let origin = Origin::File(Some(args.src_file.clone()));
    for path in &resolved {
        if escapes_build_root(path) {
            let decision = reporter.report(
                Severity::Warning,
                &origin,
                strict,
                &format!("resolved path {path:?} escapes the build root"),
            );
            if decision.is_halt() {
                return Ok(decision);
            }
        }
    }

    let mut stdout = std::io::stdout().lock();
    if args.json {
        serde_json::to_writer(&mut stdout, &resolved)?;
        writeln!(stdout)?;
    } else {
        for path in &resolved {
            writeln!(stdout, "{path}")?;
        }
    }

    Ok(ControlDecision::Continue)
}

fn escapes_build_root(path: &str) -> bool {
    path == ".." || path.starts_with("../")
}
