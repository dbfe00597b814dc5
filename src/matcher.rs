use crate::error::TreemarkError;
use globset::{Glob, GlobSet, GlobSetBuilder};

/// A compiled set of glob patterns matched against slash-normalized relative
/// paths.
///
/// Matching is tolerant of directory-vs-file path forms: every path is tested
/// both as given and with a trailing separator appended, so a directory-intent
/// pattern like `node_modules/` matches the bare name `node_modules` as well.
#[derive(Debug, Clone)]
pub struct PatternSet {
    set: GlobSet,
    len: usize,
}

impl PatternSet {
    pub fn new(patterns: &[String]) -> Result<Self, TreemarkError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|e| {
                TreemarkError::config(format!("invalid glob pattern '{}': {}", pattern, e))
            })?;
            builder.add(glob);
        }
        let set = builder
            .build()
            .map_err(|e| TreemarkError::config(format!("failed to build glob set: {}", e)))?;
        Ok(Self {
            set,
            len: patterns.len(),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if `path` matches any pattern. An empty path or an empty
    /// set never matches.
    pub fn matches(&self, path: &str) -> bool {
        if path.is_empty() || self.len == 0 {
            return false;
        }
        if self.set.is_match(path) {
            return true;
        }
        if path.ends_with('/') {
            false
        } else {
            self.set.is_match(format!("{path}/"))
        }
    }
}
