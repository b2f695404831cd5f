//! Filter command - pass-through of tabular records
//!
//! Each non-empty input line is a record; its first column is tested against
//! the culled set and the whole line is echoed when it passes.

use anyhow::{Context, Result};
use clap::Args;
use pisces_core::{PiscesFilter, RecordFilter};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use super::source::SourceArgs;

/// Filter command arguments
#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Input file (default: stdin)
    pub input: Option<PathBuf>,

    /// Column delimiter (default: any whitespace)
    #[arg(short, long, value_name = "CHAR")]
    pub delimiter: Option<char>,

    /// Print records that are NOT in the culled set instead
    #[arg(long)]
    pub invert: bool,

    #[command(flatten)]
    pub source: SourceArgs,
}

/// Execute filter command
pub fn execute(args: FilterArgs, config_path: Option<&Path>) -> Result<()> {
    let filter = args.source.build_filter(config_path)?;

    let reader: Box<dyn BufRead> = match args.input {
        Some(ref path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let (passed, total) = filter_lines(&filter, reader, &mut out, args.delimiter, args.invert)?;
    out.flush()?;

    info!("{} of {} records passed", passed, total);
    Ok(())
}

/// Copy the lines of `reader` whose first column passes `filter` to `out`.
///
/// Returns (lines written, records read).
pub fn filter_lines<R, W>(
    filter: &PiscesFilter,
    reader: R,
    out: &mut W,
    delimiter: Option<char>,
    invert: bool,
) -> Result<(usize, usize)>
where
    R: BufRead,
    W: Write,
{
    let mut passed = 0;
    let mut total = 0;

    for line in reader.lines() {
        let line = line.context("Failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }
        total += 1;

        let fields: Vec<&str> = match delimiter {
            Some(d) => line.split(d).map(str::trim).collect(),
            None => line.split_whitespace().collect(),
        };

        if filter.test(&fields) != invert {
            writeln!(out, "{line}")?;
            passed += 1;
        }
    }

    Ok((passed, total))
}
