//! In-memory model built by a single scan.
//!
//! Relative paths are slash-normalized strings; `.` denotes the project root
//! itself. Directories form an arena of [`DirNode`]s with parent indices, so
//! visibility propagation walks explicit parent links instead of re-parsing
//! path strings. The whole model lives for one scan invocation and is never
//! persisted.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Index of a directory node within a [`Tree`].
pub type NodeId = usize;

const ROOT: NodeId = 0;

/// A file attached to its parent directory node.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub name: String,
    pub has_content: bool,
}

/// One directory encountered during the walk.
#[derive(Debug)]
pub struct DirNode {
    pub rel_path: String,
    pub name: String,
    pub parent: Option<NodeId>,
    pub child_dirs: Vec<NodeId>,
    pub files: Vec<FileEntry>,
    pub visible: bool,
}

/// A file flagged for content inclusion, in discovery order.
#[derive(Debug, Clone)]
pub struct ContentFile {
    pub rel_path: String,
    pub path: PathBuf,
}

/// The directory model. The root node always exists under the key `.`.
#[derive(Debug)]
pub struct Tree {
    nodes: Vec<DirNode>,
    index: HashMap<String, NodeId>,
}

impl Tree {
    pub fn new() -> Self {
        let root = DirNode {
            rel_path: ".".to_string(),
            name: ".".to_string(),
            parent: None,
            child_dirs: Vec::new(),
            files: Vec::new(),
            visible: false,
        };
        let mut index = HashMap::new();
        index.insert(".".to_string(), ROOT);
        Self {
            nodes: vec![root],
            index,
        }
    }

    pub fn root(&self) -> NodeId {
        ROOT
    }

    pub fn node(&self, id: NodeId) -> &DirNode {
        &self.nodes[id]
    }

    pub fn lookup(&self, rel_path: &str) -> Option<NodeId> {
        self.index.get(rel_path).copied()
    }

    pub fn insert_dir(
        &mut self,
        parent: NodeId,
        rel_path: impl Into<String>,
        visible: bool,
    ) -> NodeId {
        let rel_path = rel_path.into();
        let name = match rel_path.rsplit_once('/') {
            Some((_, name)) => name.to_string(),
            None => rel_path.clone(),
        };
        let id = self.nodes.len();
        self.nodes.push(DirNode {
            rel_path: rel_path.clone(),
            name,
            parent: Some(parent),
            child_dirs: Vec::new(),
            files: Vec::new(),
            visible,
        });
        self.nodes[parent].child_dirs.push(id);
        self.index.insert(rel_path, id);
        id
    }

    pub fn add_file(&mut self, id: NodeId, entry: FileEntry) {
        self.nodes[id].files.push(entry);
    }

    /// Marks `id` visible and propagates visibility up every ancestor to the
    /// root. The only way visibility is raised after a node is inserted,
    /// which keeps the ancestors-visible invariant holding by construction.
    pub fn mark_visible(&mut self, id: NodeId) {
        let mut cursor = Some(id);
        while let Some(id) = cursor {
            self.nodes[id].visible = true;
            cursor = self.nodes[id].parent;
        }
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

/// The outcome of a scan: the annotated model plus the files flagged for
/// content inclusion, in the order discovered.
#[derive(Debug)]
pub struct ScanResult {
    pub tree: Tree,
    pub root_name: String,
    pub content_files: Vec<ContentFile>,
}

/// Slash-normalized path of `path` relative to `root`; `.` for the root
/// itself.
pub(crate) fn rel_string(path: &Path, root: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    let mut out = String::new();
    for component in rel.components() {
        if !out.is_empty() {
            out.push('/');
        }
        out.push_str(&component.as_os_str().to_string_lossy());
    }
    if out.is_empty() { ".".to_string() } else { out }
}

/// Relative path of the parent directory; `.` for top-level entries.
pub(crate) fn parent_rel(rel: &str) -> &str {
    match rel.rsplit_once('/') {
        Some((parent, _)) => parent,
        None => ".",
    }
}
