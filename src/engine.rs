use crate::error::CrunchError;
use crate::filter::{PathFilter, RuleSet};
use crate::options::CrunchOptions;
use crate::tree::build_structure;
use crate::types::{CrunchResult, FileEntry, RunStats};
use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};

/// One walked entry, with its path both absolute and relative to the root.
pub(crate) struct WalkEntry {
    pub(crate) path: PathBuf,
    pub(crate) rel: PathBuf,
    pub(crate) is_dir: bool,
}

pub(crate) struct Walker {
    inner: ignore::Walk,
    root: PathBuf,
}

impl Walker {
    /// A depth-first walk with deterministic lexicographic sibling order.
    /// Gitignore and hidden-file handling are disabled; the filter's own
    /// rules are the only thing that prunes directories or drops files.
    pub(crate) fn new(root: &Path, filter: &PathFilter) -> Self {
        let mut builder = WalkBuilder::new(root);
        builder
            .hidden(false)
            .parents(false)
            .ignore(false)
            .git_ignore(false)
            .git_global(false)
            .git_exclude(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b));
        let filter = filter.clone();
        let filter_root = root.to_path_buf();
        builder.filter_entry(move |entry| {
            let rel = match entry.path().strip_prefix(&filter_root) {
                Ok(rel) => rel,
                Err(_) => return true,
            };
            if rel.as_os_str().is_empty() {
                return true;
            }
            if entry.file_type().is_some_and(|ft| ft.is_dir()) {
                !filter.is_directory_excluded(rel)
            } else {
                filter.should_include_file(rel)
            }
        });
        Self {
            inner: builder.build(),
            root: root.to_path_buf(),
        }
    }
}

impl Iterator for Walker {
    type Item = Result<WalkEntry, CrunchError>;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(e) => return Some(Err(CrunchError::Walk(e.to_string()))),
            };
            if entry.depth() == 0 {
                continue;
            }
            let path = entry.path().to_path_buf();
            let rel = path.strip_prefix(&self.root).unwrap_or(&path).to_path_buf();
            let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
            return Some(Ok(WalkEntry { path, rel, is_dir }));
        }
    }
}

/// Runs both traversal passes over `options.root`: first the structure
/// listing, then concatenation with statistics. An unreadable file aborts
/// the whole run.
pub fn crunch(options: CrunchOptions) -> Result<CrunchResult, CrunchError> {
    let CrunchOptions {
        root,
        include_patterns,
        exclude_patterns,
    } = options;
    #[cfg(feature = "logging")]
    tracing::debug!("Starting crunch with root: {}", root.display());
    if !root.is_dir() {
        return Err(CrunchError::InvalidPath(format!(
            "{} is not a directory",
            root.display()
        )));
    }
    let rules = RuleSet::with_user_patterns(include_patterns, exclude_patterns);
    let filter = PathFilter::new(&rules)?;

    let entries = Walker::new(&root, &filter).collect::<Result<Vec<_>, _>>()?;
    let structure = build_structure(&entries);

    let mut stats = RunStats::default();
    let mut files = Vec::new();
    for item in Walker::new(&root, &filter) {
        let entry = item?;
        if entry.is_dir {
            continue;
        }
        #[cfg(feature = "logging")]
        tracing::debug!("Reading {}", entry.rel.display());
        let content = fs::read(&entry.path).map_err(|e| CrunchError::io(&entry.path, e))?;
        stats.record(&entry.rel, content.len() as u64);
        files.push(FileEntry {
            path: entry.rel,
            content,
        });
    }

    Ok(CrunchResult {
        structure,
        files,
        stats,
    })
}
