use std::path::PathBuf;
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub root: PathBuf,
    pub ignore_patterns: Vec<String>,
    pub include_patterns: Vec<String>,
    pub content_patterns: Vec<String>,
    pub max_depth: Option<usize>,
}
impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            ignore_patterns: Vec::new(),
            include_patterns: Vec::new(),
            content_patterns: Vec::new(),
            max_depth: None,
        }
    }
}
#[derive(Debug, Default)]
pub struct ScanOptionsBuilder {
    options: ScanOptions,
}
impl ScanOptionsBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: ScanOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.ignore_patterns = patterns;
        self
    }
    pub fn include_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.include_patterns = patterns;
        self
    }
    pub fn content_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.content_patterns = patterns;
        self
    }
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.max_depth = Some(depth);
        self
    }
    pub fn no_limit_depth(mut self) -> Self {
        self.options.max_depth = None;
        self
    }
    pub fn build(self) -> ScanOptions {
        self.options
    }
}
