use crate::models::FileNode;

/// Render `root_name` on its own line followed by the box-drawing tree of `nodes`.
pub fn render_tree(root_name: &str, nodes: &[FileNode]) -> String {
    let mut out = String::new();
    out.push_str(root_name);
    out.push('\n');
    write_children(&mut out, nodes, &[]);
    out
}

/// Append one line per node, depth first.
///
/// `ancestor_is_last` holds, for each enclosing level, whether that ancestor
/// was the last of its siblings.
pub fn write_children(out: &mut String, nodes: &[FileNode], ancestor_is_last: &[bool]) {
    for (index, node) in nodes.iter().enumerate() {
        let is_last = index + 1 == nodes.len();

        for &last in ancestor_is_last {
            out.push_str(if last { "    " } else { "│   " });
        }
        out.push_str(if is_last { "└── " } else { "├── " });
        out.push_str(&node.name);
        out.push('\n');

        if !node.children.is_empty() {
            let mut next_ancestor_is_last = ancestor_is_last.to_vec();
            next_ancestor_is_last.push(is_last);
            write_children(out, &node.children, &next_ancestor_is_last);
        }
    }
}
