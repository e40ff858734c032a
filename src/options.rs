use std::path::PathBuf;
#[derive(Debug, Clone)]
pub struct CrunchOptions {
    pub root: PathBuf,
    pub include_patterns: Vec<String>,
    pub exclude_patterns: Vec<String>,
}
impl Default for CrunchOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            include_patterns: Vec::new(),
            exclude_patterns: Vec::new(),
        }
    }
}
#[derive(Debug, Default)]
pub struct CrunchBuilder {
    options: CrunchOptions,
}
impl CrunchBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: CrunchOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn include_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.include_patterns = patterns;
        self
    }
    pub fn exclude_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.exclude_patterns = patterns;
        self
    }
    pub fn build(self) -> CrunchOptions {
        self.options
    }
}
