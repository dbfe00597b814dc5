//! Content collection: reads every file flagged for inclusion and formats
//! each one as a labeled fenced block.

use crate::model::ContentFile;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// One formatted content block.
#[derive(Debug, Clone)]
pub struct ContentBlock {
    pub rel_path: String,
    pub text: String,
}

/// Processes content files in lexicographic order of their relative path,
/// independent of discovery order. Collection is best-effort per file: a read
/// failure is captured inside that file's block and never aborts the run.
pub fn collect(files: &[ContentFile]) -> Vec<ContentBlock> {
    let mut sorted: Vec<&ContentFile> = files.iter().collect();
    sorted.sort_by(|a, b| a.rel_path.cmp(&b.rel_path));
    sorted
        .into_iter()
        .map(|file| ContentBlock {
            rel_path: file.rel_path.clone(),
            text: format_block(file),
        })
        .collect()
}

fn format_block(file: &ContentFile) -> String {
    debug!(file = %file.rel_path, "reading content file");
    match read_text(&file.path) {
        Ok(text) => format!(
            "### `{}`\n```{}\n{}\n```",
            file.rel_path,
            language_hint(&file.path),
            text
        ),
        Err(e) => format!("### `{}`\n[Error reading file: {}]", file.rel_path, e),
    }
}

/// Reads a file as UTF-8, falling back to latin-1 with a visible warning
/// marker appended to the recovered text.
fn read_text(path: &Path) -> std::io::Result<String> {
    let bytes = fs::read(path)?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            warn!(file = %path.display(), "not valid UTF-8, reading as latin-1");
            let mut text: String = e.into_bytes().iter().map(|&b| b as char).collect();
            text.push_str("\n[Warning: Read using latin-1 encoding]");
            Ok(text)
        }
    }
}

fn language_hint(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_else(|| "text".to_string())
}
