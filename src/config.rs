//! The declarative TOML configuration that drives a run.
//!
//! Relative `project.root` resolves against the configuration file's
//! directory; relative `output.file` resolves against the resolved project
//! root. All pattern lists default to empty.

use crate::error::TreemarkError;
use crate::matcher::PatternSet;
use crate::model::rel_string;
use crate::options::ScanOptions;
use serde::Deserialize;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::warn;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub project: ProjectConfig,
    pub output: OutputConfig,
    #[serde(default)]
    pub tree: TreeConfig,
    #[serde(default)]
    pub content: ContentConfig,
}

#[derive(Debug, Deserialize)]
pub struct ProjectConfig {
    pub root: String,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    pub file: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct TreeConfig {
    #[serde(default)]
    pub ignore: Vec<String>,
    #[serde(default)]
    pub include: Vec<String>,
    #[serde(default)]
    pub depth: Option<toml::Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ContentConfig {
    #[serde(default)]
    pub include_files: Vec<String>,
}

/// A configuration with every path resolved, ready to run.
#[derive(Debug)]
pub struct Resolved {
    pub root: PathBuf,
    pub output: PathBuf,
    pub options: ScanOptions,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TreemarkError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| {
            TreemarkError::config(format!("cannot read config file '{}': {}", path.display(), e))
        })?;
        toml::from_str(&raw).map_err(|e| {
            TreemarkError::config(format!("failed to parse config '{}': {}", path.display(), e))
        })
    }

    /// Decodes `tree.depth` leniently: a non-negative integer enables the
    /// limit, a negative one disables it, any non-integer value logs a
    /// warning and disables it for the run.
    pub fn max_depth(&self) -> Option<usize> {
        match &self.tree.depth {
            None => None,
            Some(toml::Value::Integer(depth)) if *depth >= 0 => Some(*depth as usize),
            Some(toml::Value::Integer(_)) => None,
            Some(_) => {
                warn!("invalid tree.depth value, ignoring depth limit");
                None
            }
        }
    }

    /// Resolves all paths and assembles the scan options.
    ///
    /// The project root is canonicalized and must be a directory. When the
    /// output file falls inside the project root and is not already
    /// ignore-matched, its relative path is appended to the ignore patterns
    /// so a snapshot never lists or embeds itself on a later run.
    pub fn resolve(self, config_dir: &Path) -> Result<Resolved, TreemarkError> {
        let max_depth = self.max_depth();
        let root = resolve_path(&self.project.root, config_dir);
        let root = match root.canonicalize() {
            Ok(canonical) if canonical.is_dir() => canonical,
            _ => return Err(TreemarkError::InvalidRoot(root)),
        };
        let output = normalize(resolve_path(&self.output.file, &root));

        let mut ignore_patterns = self.tree.ignore;
        if output.starts_with(&root) {
            let rel = rel_string(&output, &root);
            if rel != "." && !PatternSet::new(&ignore_patterns)?.matches(&rel) {
                ignore_patterns.push(rel);
            }
        }

        let options = ScanOptions {
            root: root.clone(),
            ignore_patterns,
            include_patterns: self.tree.include,
            content_patterns: self.content.include_files,
            max_depth,
        };
        Ok(Resolved {
            root,
            output,
            options,
        })
    }
}

/// Resolves a path string against a base directory, handling absolute paths.
pub fn resolve_path(path: &str, base: &Path) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Lexical removal of `.` and `..` components. The output path may not exist
/// yet, so it cannot be canonicalized.
fn normalize(path: PathBuf) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}
