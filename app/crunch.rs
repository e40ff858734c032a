//! Command-line interface for crunch.
//!
//! This binary provides access to the crunch library functionality,
//! walking a source directory and writing the concatenated artifact
//! plus a completion summary.

use clap::Parser;
use crunch::{CrunchBuilder, CrunchError, RunStats, crunch, output};
use std::collections::BTreeMap;
use std::path::Path;
use std::path::PathBuf;
use std::process::exit;

/// crunch — directory tree concatenation tool
#[derive(Parser)]
#[command(name = "crunch", version, about, long_about = None)]
struct Cli {
    /// Source directory (default current dir)
    #[arg(default_value = ".")]
    source: PathBuf,

    /// Output filename
    #[arg(short, long, value_name = "FILENAME", default_value = "crunch_output.txt")]
    output: PathBuf,

    /// Print per-folder and per-extension size breakdown
    #[arg(short, long)]
    verbose: bool,

    /// Include file pattern (can be repeated)
    #[arg(long = "include", value_name = "PATTERN")]
    include: Vec<String>,

    /// Exclude file pattern (can be repeated)
    #[arg(long = "exclude", value_name = "PATTERN")]
    exclude: Vec<String>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CrunchError> {
    let options = CrunchBuilder::new(cli.source)
        .include_patterns(cli.include)
        .exclude_patterns(cli.exclude)
        .build();
    let result = crunch(options)?;
    output::write_to_file(&result, &cli.output)?;
    print_summary(&result.stats, &cli.output, cli.verbose);
    Ok(())
}

fn print_summary(stats: &RunStats, output_path: &Path, verbose: bool) {
    println!();
    println!("Crunch completed successfully!");
    println!("Total files processed: {}", stats.total_files);
    println!("Total size: {}", output::format_size(stats.total_bytes));
    println!("Output written to: {}", output_path.display());

    if verbose {
        println!();
        println!("Size by folder:");
        for (folder, size) in by_size_descending(&stats.bytes_by_folder) {
            println!("  {}: {}", folder, output::format_size(size));
        }

        println!();
        println!("Size by extension:");
        for (extension, size) in by_size_descending(&stats.bytes_by_extension) {
            println!("  {}: {}", extension, output::format_size(size));
        }
    }
}

/// Largest first; ties broken by key so the listing is deterministic.
fn by_size_descending(map: &BTreeMap<String, u64>) -> Vec<(&str, u64)> {
    let mut rows: Vec<_> = map.iter().map(|(key, size)| (key.as_str(), *size)).collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    rows
}
