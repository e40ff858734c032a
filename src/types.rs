use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// A single concatenated file with its path relative to the source root.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Path relative to the source root.
    pub path: PathBuf,
    /// The content of the file, copied byte-for-byte from disk.
    pub content: Vec<u8>,
}

/// Size statistics accumulated in traversal order over one run.
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Number of files concatenated.
    pub total_files: u64,
    /// Combined size of all concatenated files in bytes.
    pub total_bytes: u64,
    /// Bytes per containing folder, keyed by relative path (`.` for the root).
    pub bytes_by_folder: BTreeMap<String, u64>,
    /// Bytes per lowercase extension (`no_extension` for files without one).
    pub bytes_by_extension: BTreeMap<String, u64>,
}

impl RunStats {
    /// Accounts one file of `size` bytes at the relative path `rel`.
    pub fn record(&mut self, rel: &Path, size: u64) {
        self.total_files += 1;
        self.total_bytes += size;
        let folder = match rel.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                parent.to_string_lossy().into_owned()
            }
            _ => String::from("."),
        };
        *self.bytes_by_folder.entry(folder).or_insert(0) += size;
        let extension = match rel.extension() {
            Some(ext) => format!(".{}", ext.to_string_lossy().to_lowercase()),
            None => String::from("no_extension"),
        };
        *self.bytes_by_extension.entry(extension).or_insert(0) += size;
    }
}

/// The complete result of a crunch run.
#[derive(Debug)]
pub struct CrunchResult {
    /// Folder-structure listing, one entry per line, root omitted.
    pub structure: Vec<String>,
    /// All included files in traversal order, with their content.
    pub files: Vec<FileEntry>,
    /// Aggregated size statistics.
    pub stats: RunStats,
}
