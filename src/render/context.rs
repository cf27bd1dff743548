//! Ancestor context for retrieval chunks.

use super::text::node_text;
use crate::model::{NodeRef, Tag};

/// Ancestors of a node, root first, excluding the node itself.
pub fn parent_chain(node: NodeRef<'_>) -> Vec<NodeRef<'_>> {
    let mut chain: Vec<_> = std::iter::successors(node.parent(), NodeRef::parent).collect();
    chain.reverse();
    chain
}

/// Section titles joined by `" > "`, followed by the text of enclosing
/// paragraphs and list items.
pub fn parent_text(node: NodeRef<'_>) -> String {
    let mut sections = Vec::new();
    let mut containers = Vec::new();
    for ancestor in parent_chain(node) {
        match ancestor.tag() {
            Tag::Section => sections.push(node_text(ancestor, false, false)),
            Tag::Paragraph | Tag::ListItem => containers.push(node_text(ancestor, false, false)),
            _ => {}
        }
    }

    let sections = sections.join(" > ");
    let containers = containers.join("\n");
    match (sections.is_empty(), containers.is_empty()) {
        (false, false) => format!("{sections}\n{containers}"),
        (false, true) => sections,
        _ => containers,
    }
}

/// Text of a node for retrieval, prefixed with its parent text when
/// `include_section_info`.
///
/// Chunks render recursively; other nodes render only their own text.
pub fn context_text(node: NodeRef<'_>, include_section_info: bool) -> String {
    let recursive = node.tag().is_chunk();
    let body = node_text(node, recursive, recursive);
    if include_section_info {
        format!("{}\n{}", parent_text(node), body)
    } else {
        body
    }
}
