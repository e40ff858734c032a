//! Internal module for rendering the folder-structure listing from walked entries.

use crate::engine::WalkEntry;
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Builds the structure listing from the entries of one traversal pass.
///
/// The root contributes no line. At each level, directories come first, then
/// files, both in lexicographic basename order. Every nesting level widens
/// the prefix by four spaces; directory entries below the first level carry a
/// branch marker between the indent and the name.
pub(crate) fn build_structure(entries: &[WalkEntry]) -> Vec<String> {
    let mut children: BTreeMap<PathBuf, Vec<(OsString, bool)>> = BTreeMap::new();
    for entry in entries {
        if entry.rel.as_os_str().is_empty() {
            continue;
        }
        let parent = entry
            .rel
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let name = entry.rel.file_name().map(ToOwned::to_owned).unwrap_or_default();
        children.entry(parent).or_default().push((name, entry.is_dir));
    }
    let mut lines = Vec::new();
    render_level(&children, Path::new(""), "", &mut lines);
    lines
}

fn render_level(
    children: &BTreeMap<PathBuf, Vec<(OsString, bool)>>,
    dir: &Path,
    prefix: &str,
    lines: &mut Vec<String>,
) {
    let Some(entries) = children.get(dir) else {
        return;
    };
    let mut entries: Vec<_> = entries.iter().collect();
    entries.sort_by(|(a_name, a_dir), (b_name, b_dir)| {
        b_dir.cmp(a_dir).then_with(|| a_name.cmp(b_name))
    });
    for (name, is_dir) in entries {
        let display = name.to_string_lossy();
        if *is_dir {
            let marker = if prefix.is_empty() { "" } else { "└── " };
            lines.push(format!("{prefix}{marker}{display}"));
            let child_prefix = format!("{prefix}    ");
            render_level(children, &dir.join(name), &child_prefix, lines);
        } else {
            lines.push(format!("{prefix}{display}"));
        }
    }
}
