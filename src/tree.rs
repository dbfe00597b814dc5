//! Rendering of the visibility-annotated model as an ASCII tree.

use crate::model::{NodeId, ScanResult, Tree};

/// Renders the scan model in the style of the `tree` command.
///
/// The root name is always the first line, even when nothing below it is
/// visible. Directories with `visible = false` are omitted together with
/// their whole subtree. Within one level, directories sort before files and
/// names compare case-insensitively.
pub fn render_tree(result: &ScanResult) -> String {
    let mut lines = vec![result.root_name.clone()];
    if result.tree.node(result.tree.root()).visible {
        render_children(&result.tree, result.tree.root(), "", &mut lines);
    }
    lines.join("\n")
}

fn render_children(tree: &Tree, id: NodeId, prefix: &str, lines: &mut Vec<String>) {
    let node = tree.node(id);
    // (is_file, name, subdir) tuples; stable sort keeps discovery order for
    // names that compare equal.
    let mut items: Vec<(bool, String, Option<NodeId>)> = Vec::new();
    for child in &node.child_dirs {
        let child_node = tree.node(*child);
        if child_node.visible {
            items.push((false, child_node.name.clone(), Some(*child)));
        }
    }
    for file in &node.files {
        items.push((true, file.name.clone(), None));
    }
    items.sort_by_key(|(is_file, name, _)| (*is_file, name.to_lowercase()));

    let count = items.len();
    for (i, (_, name, subdir)) in items.into_iter().enumerate() {
        let last = i + 1 == count;
        let connector = if last { "└── " } else { "├── " };
        lines.push(format!("{prefix}{connector}{name}"));
        if let Some(subdir) = subdir {
            let next = format!("{prefix}{}", if last { "    " } else { "│   " });
            render_children(tree, subdir, &next, lines);
        }
    }
}
