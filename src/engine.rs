use crate::content::{ContentBlock, collect};
use crate::error::TreemarkError;
use crate::matcher::PatternSet;
use crate::model::{ContentFile, FileEntry, ScanResult, Tree, parent_rel, rel_string};
use crate::options::ScanOptions;
use crate::tree::render_tree;
use globset::{Glob, GlobMatcher};
use ignore::WalkBuilder;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};
fn walker(root: &Path) -> WalkBuilder {
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
    builder
}
/// Pre-pass for directory-style include patterns: walks the whole tree once
/// and records every directory they name. The set must be complete before the
/// main walk starts, since a match may sit in a branch the main walk prunes
/// early via an ignore match on a sibling.
fn forced_dirs(root: &Path, include_patterns: &[String]) -> Result<HashSet<String>, TreemarkError> {
    let mut dir_globs: Vec<(GlobMatcher, &str)> = Vec::new();
    for pattern in include_patterns {
        if !pattern.ends_with('/') {
            continue;
        }
        let glob = Glob::new(pattern).map_err(|e| {
            TreemarkError::config(format!("invalid glob pattern '{}': {}", pattern, e))
        })?;
        dir_globs.push((glob.compile_matcher(), pattern.trim_end_matches('/')));
    }
    let mut forced = HashSet::new();
    if dir_globs.is_empty() {
        return Ok(forced);
    }
    for result in walker(root).build() {
        let entry = result.map_err(|e| TreemarkError::Walk(e.to_string()))?;
        if !entry.file_type().is_some_and(|t| t.is_dir()) {
            continue;
        }
        let rel = rel_string(entry.path(), root);
        for (matcher, stripped) in &dir_globs {
            if matcher.is_match(format!("{rel}/")) || rel == *stripped {
                debug!(directory = %rel, "directory include pattern matched");
                forced.insert(rel);
                break;
            }
        }
    }
    Ok(forced)
}
/// Walks `options.root` once and builds the visibility-annotated model plus
/// the ordered list of content files.
///
/// Ignore patterns always win: an ignore-matched entry and everything beneath
/// it never enter the model, even when a directory include pattern named it.
/// A content-matched file forces its whole ancestor chain visible. When no
/// include or content patterns are configured, the scan is unfiltered and
/// every entry surviving the ignore filter is treated as include-matched.
pub fn scan(options: &ScanOptions) -> Result<ScanResult, TreemarkError> {
    let root = options.root.as_path();
    if !root.is_dir() {
        return Err(TreemarkError::InvalidRoot(root.to_path_buf()));
    }
    let ignore = PatternSet::new(&options.ignore_patterns)?;
    let include = PatternSet::new(&options.include_patterns)?;
    let content = PatternSet::new(&options.content_patterns)?;
    let select_all = include.is_empty() && content.is_empty();

    let mut forced = forced_dirs(root, &options.include_patterns)?;
    if select_all {
        forced.insert(".".to_string());
    }

    info!(root = %root.display(), "scanning project directory");
    let mut builder = walker(root);
    if let Some(limit) = options.max_depth {
        builder.max_depth(Some(limit.saturating_add(1)));
    }
    let filter_root = root.to_path_buf();
    builder.filter_entry(move |entry| {
        let rel = rel_string(entry.path(), &filter_root);
        rel == "." || !ignore.matches(&rel)
    });

    let mut tree = Tree::new();
    let mut content_files = Vec::new();
    for result in builder.build() {
        let entry = result.map_err(|e| TreemarkError::Walk(e.to_string()))?;
        let rel = rel_string(entry.path(), root);
        if rel == "." {
            continue;
        }
        let parent = parent_rel(&rel).to_string();
        if entry.file_type().is_some_and(|t| t.is_dir()) {
            if options.max_depth.is_some_and(|limit| entry.depth() > limit) {
                continue;
            }
            let parent_forced = forced.contains(&parent);
            let dir_forced = select_all || forced.contains(&rel) || include.matches(&rel);
            if dir_forced && !forced.contains(&rel) {
                forced.insert(rel.clone());
            }
            let Some(parent_id) = tree.lookup(&parent) else {
                continue;
            };
            tree.insert_dir(parent_id, rel, dir_forced || parent_forced);
        } else {
            let Some(parent_id) = tree.lookup(&parent) else {
                continue;
            };
            let included = select_all || include.matches(&rel);
            let has_content = content.matches(&rel);
            let dir_forced = forced.contains(&parent);
            let parent_forced = forced.contains(parent_rel(&parent));
            if included || has_content || dir_forced || parent_forced {
                let name = match rel.rsplit_once('/') {
                    Some((_, name)) => name.to_string(),
                    None => rel.clone(),
                };
                tree.add_file(parent_id, FileEntry { name, has_content });
                if has_content {
                    tree.mark_visible(parent_id);
                    content_files.push(ContentFile {
                        rel_path: rel,
                        path: entry.into_path(),
                    });
                }
            }
        }
    }

    // Post-pass: directory include patterns are honored even when the main
    // walk never gave the matched directory a visible parent chain.
    let forced_ids: Vec<_> = forced.iter().filter_map(|rel| tree.lookup(rel)).collect();
    for id in forced_ids {
        tree.mark_visible(id);
    }

    let root_name = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string());
    debug!(content_files = content_files.len(), "scan complete");
    Ok(ScanResult {
        tree,
        root_name,
        content_files,
    })
}
/// The rendered snapshot: tree text plus formatted content blocks.
#[derive(Debug)]
pub struct Snapshot {
    pub tree: String,
    pub files: Vec<ContentBlock>,
}
/// Scans, renders the tree, and collects content blocks in one call.
pub fn generate(options: &ScanOptions) -> Result<Snapshot, TreemarkError> {
    let result = scan(options)?;
    let tree = render_tree(&result);
    let files = collect(&result.content_files);
    Ok(Snapshot { tree, files })
}
