use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum CrunchError {
    #[error("I/O error on {}: {}", path.display(), source)]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Walk error: {0}")]
    Walk(String),
    #[error("Invalid path: {0}")]
    InvalidPath(String),
    #[error("Invalid pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        source: globset::Error,
    },
}
impl CrunchError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CrunchError::Io {
            path: path.into(),
            source,
        }
    }
    pub(crate) fn pattern(pattern: impl Into<String>, source: globset::Error) -> Self {
        CrunchError::Pattern {
            pattern: pattern.into(),
            source,
        }
    }
}
