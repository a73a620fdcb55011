use anyhow::Result;
use clap::Parser;
use glob::Pattern;
use sheetgrain::{batch, BatchConfig, EngineConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Segments spreadsheet files into self-describing JSON chunk records.
#[derive(Parser, Debug)]
#[command(name = "sheetgrain", version, about)]
struct Args {
    /// Directory containing the source spreadsheet files
    input: PathBuf,

    /// Directory the chunk records are written into
    output: PathBuf,

    /// Only process sheets whose name matches one of these glob patterns
    #[arg(long = "sheet", value_name = "PATTERN")]
    sheets: Vec<String>,

    /// Minimum length of a leading text cell for the label-row heuristic
    #[arg(long, default_value_t = 12)]
    label_min_chars: usize,

    /// Interior gaps tolerated when detecting a header row
    #[arg(long, default_value_t = 2)]
    header_gap_tolerance: usize,

    /// Merge header rows at most this many table rows apart (default: unbounded)
    #[arg(long, value_name = "ROWS")]
    header_merge_max_gap: Option<usize>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let sheet_patterns = args
        .sheets
        .iter()
        .map(|pattern| Pattern::new(pattern))
        .collect::<Result<Vec<_>, _>>()?;

    let config = BatchConfig {
        input_dir: args.input,
        output_dir: args.output,
        sheet_patterns,
        engine: EngineConfig {
            label_min_chars: args.label_min_chars,
            header_gap_tolerance: args.header_gap_tolerance,
            header_merge_max_gap: args.header_merge_max_gap,
            ..EngineConfig::default()
        },
    };

    let summary = batch::run(&config)?;
    println!(
        "{} file(s) processed, {} failed, {} chunk(s) written",
        summary.files_processed, summary.files_failed, summary.chunks_written
    );
    Ok(())
}
