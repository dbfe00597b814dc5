//! Final artifact assembly for treemark snapshots.
//!
//! The artifact is a single UTF-8 document: a fenced block holding the tree
//! diagram and, only when content files were found, a separator, a heading,
//! and the content blocks in sorted order.

use crate::engine::Snapshot;
use crate::error::TreemarkError;
use std::fs;
use std::path::Path;

/// Assembles the final document from a rendered snapshot.
pub fn assemble(snapshot: &Snapshot) -> String {
    let mut out = format!("```\n{}\n```", snapshot.tree);
    if !snapshot.files.is_empty() {
        out.push_str("\n\n---\n\n## File Contents\n\n");
        let blocks: Vec<&str> = snapshot.files.iter().map(|b| b.text.as_str()).collect();
        out.push_str(&blocks.join("\n\n"));
    }
    out
}

/// Writes the assembled document, creating the output directory if needed.
pub fn write_snapshot(path: impl AsRef<Path>, text: &str) -> Result<(), TreemarkError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| TreemarkError::OutputUnwritable {
            path: path.to_path_buf(),
            source: e,
        })?;
    }
    fs::write(path, text).map_err(|e| TreemarkError::OutputUnwritable {
        path: path.to_path_buf(),
        source: e,
    })
}
