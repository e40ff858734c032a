//! # Crunch
//!
//! `crunch` is a library for recursively walking a source directory, filtering files by
//! extension, known-file, and glob pattern rules, and producing a single text artifact:
//! a folder-structure listing followed by the concatenated contents of every included file.
//!
//! Filtering is layered: sensitive files (env files, OS cruft, editor swap/backup files)
//! are always rejected first; user-supplied include patterns, when present, replace the
//! default heuristics entirely; otherwise known configuration files and a set of common
//! source extensions decide. Excluded directories are pruned, never descended into.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use crunch::{CrunchBuilder, crunch, output};
//!
//! let options = CrunchBuilder::new(".")
//!     .include_patterns(vec!["*.rs".to_string()])
//!     .build();
//!
//! let result = crunch(options).expect("Failed to crunch directory");
//!
//! println!("Directory tree:\n{}", result.structure.join("\n"));
//! println!(
//!     "{} files, {}",
//!     result.stats.total_files,
//!     output::format_size(result.stats.total_bytes)
//! );
//! output::write_to_file(&result, "crunch_output.txt").expect("Failed to write output");
//! ```

mod engine;
mod error;
mod filter;
mod options;
pub mod output;
mod tree;
mod types;

pub use engine::crunch;
pub use error::CrunchError;
pub use filter::{PathFilter, RuleSet};
pub use options::{CrunchBuilder, CrunchOptions};
pub use types::{CrunchResult, FileEntry, RunStats};
