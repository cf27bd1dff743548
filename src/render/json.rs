//! JSON rendering for document trees.

use crate::error::{Error, Result};
use crate::model::{Document, NodeRef, Table, Tag};
use serde::Serialize;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Deepest node the JSON export accepts; the root's children are at depth 1.
pub const MAX_JSON_DEPTH: usize = 256;

/// Convert a document to JSON, starting at the root node.
///
/// Nested nodes become nested `children` arrays, so trees deeper than
/// [`MAX_JSON_DEPTH`] are rejected with [`Error::Render`].
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    let depth = max_depth(doc);
    if depth > MAX_JSON_DEPTH {
        return Err(Error::Render(format!(
            "nesting depth {} exceeds the JSON limit of {}",
            depth, MAX_JSON_DEPTH
        )));
    }

    let root = JsonNode::from_node(doc.root());
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(&root),
        JsonFormat::Compact => serde_json::to_string(&root),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

fn max_depth(doc: &Document) -> usize {
    let mut deepest = 0;
    let mut stack = vec![(doc.root(), 0)];
    while let Some((node, depth)) = stack.pop() {
        deepest = deepest.max(depth);
        stack.extend(node.children().map(|child| (child, depth + 1)));
    }
    deepest
}

/// Serializable view of a node and its subtree.
#[derive(Serialize)]
struct JsonNode<'a> {
    tag: Tag,
    level: i32,
    page_idx: i32,
    block_idx: i32,
    top: f64,
    left: f64,
    bbox: &'a [f64],
    sentences: &'a [String],
    #[serde(flatten)]
    table: Option<&'a Table>,
    children: Vec<JsonNode<'a>>,
}

impl<'a> JsonNode<'a> {
    fn from_node(node: NodeRef<'a>) -> Self {
        let data = node.data();
        Self {
            tag: node.tag(),
            level: data.level,
            page_idx: data.page_idx,
            block_idx: data.block_idx,
            top: data.top,
            left: data.left,
            bbox: &data.bbox,
            sentences: &data.sentences,
            table: node.table(),
            children: node.children().map(JsonNode::from_node).collect(),
        }
    }
}
