//! Debug outline of a document tree.

use super::text::node_text;
use crate::model::Document;

/// One line per node reached by [`Document::walk`]: a dash per depth level,
/// the tag, the child count and the node's own text on a single line.
pub fn to_outline(doc: &Document) -> String {
    let mut lines = Vec::new();
    doc.walk(|node, depth| {
        let text = node_text(node, false, false).replace('\n', " ");
        lines.push(format!(
            "{}{} ({}) {}",
            "-".repeat(depth),
            node.tag(),
            node.child_count(),
            text
        ));
    });
    lines.join("\n")
}
