//! CLI: args, logging setup, and run logic.

use std::path::{Path, PathBuf};

use crate::importer::{
    format_bulk_text, import_bulk_text, load_drafts, merge_drafts, read_bulk_text, save_drafts,
    QuestionDraft,
};
use clap::Parser;

#[derive(Parser)]
#[command(name = "bulkquiz")]
#[command(about = "Turn pasted quiz text into structured multiple-choice question drafts.")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// File with the pasted questions; `-` reads stdin
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Tidy messy text (Q1., a), Ans: B, ...) into the canonical format before parsing
    #[arg(long)]
    pub normalize: bool,

    /// Only print the normalized text for review; do not parse
    #[arg(long, conflicts_with = "merge")]
    pub normalize_only: bool,

    /// Draft file (JSON array) to merge the imported questions into; created if missing
    #[arg(long, value_name = "FILE")]
    pub merge: Option<PathBuf>,

    /// No output; exit code 0 if questions were imported, 1 if none parsed
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose: -v = warnings, -vv = info, -vvv = debug, -vvvv = trace
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Install the stderr logger. `RUST_LOG` overrides the level picked from `-v`.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Error,
        1 => log::LevelFilter::Warn,
        2 => log::LevelFilter::Info,
        3 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

fn fail(err: anyhow::Error) -> i32 {
    eprintln!("Error: {:#}", err);
    2
}

fn print_drafts(drafts: &[QuestionDraft]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(drafts)?);
    Ok(())
}

fn merge_into(path: &Path, imported: Vec<QuestionDraft>) -> anyhow::Result<usize> {
    let count = imported.len();
    let existing = load_drafts(path)?;
    let before = existing.len();
    let merged = merge_drafts(existing, imported);
    log::info!(
        "merging {} question(s) into {} ({} -> {} draft(s))",
        count,
        path.display(),
        before,
        merged.len()
    );
    save_drafts(path, &merged)?;
    Ok(count)
}

pub fn run(args: Args) -> i32 {
    let text = match read_bulk_text(&args.input) {
        Ok(t) => t,
        Err(e) => return fail(e),
    };
    if text.trim().is_empty() {
        log::info!("input is empty, nothing to do");
    }

    if args.normalize_only {
        let normalized = format_bulk_text(&text);
        if !args.quiet {
            print!("{}", normalized);
            eprintln!("Text normalized. Review it, then import without --normalize-only.");
        }
        return 0;
    }

    let report = import_bulk_text(&text, args.normalize);

    if report.is_empty() {
        if !args.quiet {
            eprintln!("Could not parse any questions. Check format.");
        }
        return 1;
    }

    let count = report.drafts.len();
    if let Some(ref path) = args.merge {
        if let Err(e) = merge_into(path, report.drafts) {
            return fail(e);
        }
        if !args.quiet {
            println!("Imported {} questions into {}", count, path.display());
        }
        return 0;
    }

    if !args.quiet {
        if let Err(e) = print_drafts(&report.drafts) {
            return fail(e);
        }
        eprintln!("Imported {} questions!", count);
    }
    0
}
