//! Pure include/exclude decision logic over relative paths.
//!
//! A [`RuleSet`] holds raw pattern strings; building a [`PathFilter`] resolves every
//! pattern once into a compiled matcher, so no pattern is re-inspected per decision.

use crate::error::CrunchError;
use globset::{Glob, GlobBuilder, GlobMatcher};
use std::collections::HashSet;
use std::path::Path;

/// Extensions included by default when no user include patterns are given.
pub const DEFAULT_INCLUDE_EXTENSIONS: &[&str] = &[
    ".py", ".js", ".ts", ".go", ".rs", ".swift", ".java", ".kt", ".cpp", ".c", ".h", ".hpp",
    ".hs", ".scala", ".vb", ".php", ".rb", ".sh", ".lua", ".pl", ".sql", ".md", ".gemspec",
    ".yml", ".yaml",
];

/// Configuration and manifest files included regardless of extension.
pub const DEFAULT_KNOWN_FILES: &[&str] = &[
    "Rakefile",
    "Gemfile",
    "package.json",
    "Dockerfile",
    "Makefile",
    ".gitignore",
    ".rubocop.yml",
    ".rspec",
    ".ruby-version",
    ".ruby-gemset",
    ".eslintrc",
    ".prettierrc",
    ".babelrc",
    ".editorconfig",
    ".gitlab-ci.yml",
    ".github/workflows/*.yml",
];

/// Directories that are pruned outright: version control metadata,
/// dependency/vendor trees, coverage/tmp/log output.
pub const DEFAULT_EXCLUDED_DIRECTORIES: &[&str] = &[
    ".git",
    ".svn",
    ".hg",
    ".bzr",
    "node_modules",
    "vendor",
    "bundle",
    "coverage",
    "tmp",
    "log",
    ".bundle",
];

/// Files denied unconditionally: OS artifacts, environment-variable files and
/// their variants, test-run status files, editor swap/backup files.
pub const DEFAULT_EXCLUDED_FILES: &[&str] = &[
    ".DS_Store",
    "Thumbs.db",
    ".env",
    ".env.*",
    ".env.development",
    ".env.test",
    ".env.production",
    ".rspec_status",
    ".byebug_history",
    "*.log",
    "*.swp",
    ".*.swp",
    "*~",
];

/// The effective rule set for one run, as raw pattern strings.
///
/// `Default` yields the built-in rules with no user patterns; the CLI layers
/// `--include`/`--exclude` on top via [`RuleSet::with_user_patterns`].
#[derive(Debug, Clone)]
pub struct RuleSet {
    pub include_extensions: Vec<String>,
    pub known_files: Vec<String>,
    pub excluded_directories: Vec<String>,
    pub excluded_files: Vec<String>,
    pub user_include: Vec<String>,
    pub user_exclude: Vec<String>,
}

impl Default for RuleSet {
    fn default() -> Self {
        let owned = |patterns: &[&str]| patterns.iter().map(|p| p.to_string()).collect();
        Self {
            include_extensions: owned(DEFAULT_INCLUDE_EXTENSIONS),
            known_files: owned(DEFAULT_KNOWN_FILES),
            excluded_directories: owned(DEFAULT_EXCLUDED_DIRECTORIES),
            excluded_files: owned(DEFAULT_EXCLUDED_FILES),
            user_include: Vec::new(),
            user_exclude: Vec::new(),
        }
    }
}

impl RuleSet {
    pub fn with_user_patterns(include: Vec<String>, exclude: Vec<String>) -> Self {
        Self {
            user_include: include,
            user_exclude: exclude,
            ..Self::default()
        }
    }
}

/// A file pattern resolved into one of three matching modes.
#[derive(Debug, Clone)]
enum FileRule {
    /// Exact basename equality at any depth, no globbing.
    BasenameExact(String),
    /// Whole relative path; `*` does not cross `/`.
    GlobPathAware(GlobMatcher),
    /// Whole relative path; `*` crosses `/`.
    GlobSimple(GlobMatcher),
}

impl FileRule {
    /// Patterns containing `*` or `/` match the whole relative path
    /// path-aware; anything else is an exact basename.
    fn resolve(pattern: &str) -> Result<Self, CrunchError> {
        if pattern.contains('*') || pattern.contains('/') {
            Ok(FileRule::GlobPathAware(path_aware_glob(pattern)?))
        } else {
            Ok(FileRule::BasenameExact(pattern.to_string()))
        }
    }

    fn simple(pattern: &str) -> Result<Self, CrunchError> {
        let glob = Glob::new(pattern).map_err(|e| CrunchError::pattern(pattern, e))?;
        Ok(FileRule::GlobSimple(glob.compile_matcher()))
    }

    fn matches(&self, rel: &Path) -> bool {
        match self {
            FileRule::BasenameExact(name) => rel
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n == name),
            FileRule::GlobPathAware(matcher) | FileRule::GlobSimple(matcher) => {
                matcher.is_match(rel)
            }
        }
    }
}

/// A directory pattern: either a single path segment compared for equality,
/// or a slash-containing pattern matched against the whole relative path.
#[derive(Debug, Clone)]
enum DirRule {
    Segment(String),
    GlobPathAware(GlobMatcher),
}

impl DirRule {
    fn resolve(pattern: &str) -> Result<Self, CrunchError> {
        if pattern.contains('/') {
            Ok(DirRule::GlobPathAware(path_aware_glob(pattern)?))
        } else {
            Ok(DirRule::Segment(pattern.to_string()))
        }
    }

    fn matches(&self, rel: &Path) -> bool {
        match self {
            DirRule::Segment(name) => rel
                .iter()
                .any(|segment| segment.to_str() == Some(name.as_str())),
            DirRule::GlobPathAware(matcher) => matcher.is_match(rel),
        }
    }
}

fn path_aware_glob(pattern: &str) -> Result<GlobMatcher, CrunchError> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|e| CrunchError::pattern(pattern, e))
}

/// Compiled decision logic for one run. All methods are pure predicates over
/// paths relative to the source root.
#[derive(Debug, Clone)]
pub struct PathFilter {
    include_extensions: HashSet<String>,
    known_files: Vec<FileRule>,
    excluded_directories: Vec<DirRule>,
    excluded_files: Vec<FileRule>,
    user_include: Vec<FileRule>,
    user_exclude: Vec<FileRule>,
}

impl PathFilter {
    pub fn new(rules: &RuleSet) -> Result<Self, CrunchError> {
        let resolve_files = |patterns: &[String]| {
            patterns
                .iter()
                .map(|p| FileRule::resolve(p))
                .collect::<Result<Vec<_>, _>>()
        };
        Ok(Self {
            include_extensions: rules.include_extensions.iter().cloned().collect(),
            known_files: resolve_files(&rules.known_files)?,
            excluded_directories: rules
                .excluded_directories
                .iter()
                .map(|p| DirRule::resolve(p))
                .collect::<Result<Vec<_>, _>>()?,
            excluded_files: resolve_files(&rules.excluded_files)?,
            user_include: rules
                .user_include
                .iter()
                .map(|p| FileRule::simple(p))
                .collect::<Result<Vec<_>, _>>()?,
            user_exclude: rules
                .user_exclude
                .iter()
                .map(|p| FileRule::simple(p))
                .collect::<Result<Vec<_>, _>>()?,
        })
    }

    /// Whether a directory is pruned from the walk. The source root itself
    /// (empty relative path) is never excluded.
    pub fn is_directory_excluded(&self, rel: &Path) -> bool {
        if rel.as_os_str().is_empty() {
            return false;
        }
        self.excluded_directories.iter().any(|rule| rule.matches(rel))
    }

    /// Whether a file belongs in the output. Rules short-circuit in strict
    /// precedence order:
    ///
    /// 1. Sensitive/noise file patterns always exclude, even when a user
    ///    include pattern matches the same path.
    /// 2. With user include patterns present, they are the sole criterion.
    /// 3. User exclude patterns subtract from the defaults, known files
    ///    included.
    /// 4. Known configuration files are in.
    /// 5. Otherwise the lowercase extension decides.
    pub fn should_include_file(&self, rel: &Path) -> bool {
        if self.excluded_files.iter().any(|rule| rule.matches(rel)) {
            return false;
        }
        if !self.user_include.is_empty() {
            return self.user_include.iter().any(|rule| rule.matches(rel));
        }
        if !self.user_exclude.is_empty()
            && self.user_exclude.iter().any(|rule| rule.matches(rel))
        {
            return false;
        }
        if self.known_files.iter().any(|rule| rule.matches(rel)) {
            return true;
        }
        match extension_key(rel) {
            Some(ext) => self.include_extensions.contains(&ext),
            None => false,
        }
    }
}

/// Lowercase dotted extension of the basename, e.g. `.rb`; `None` for
/// extensionless files and bare dotfiles.
fn extension_key(rel: &Path) -> Option<String> {
    rel.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
}
