//! Tree node types.

use super::record::{BlockRecord, MISSING, MISSING_COORD};
use super::Table;
use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;

/// Index of a node within its document's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// The root node ID (always 0).
    pub const ROOT: NodeId = NodeId(0);

    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// ID for the arena slot at `index`.
    pub(crate) fn from_index(index: usize) -> Result<Self> {
        u32::try_from(index)
            .map(NodeId)
            .map_err(|_| Error::TooManyNodes(index))
    }
}

/// Variant tag of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tag {
    /// Document root
    Root,
    /// Heading and the content nested under it
    Section,
    /// Paragraph
    Paragraph,
    /// List item
    ListItem,
    /// Table
    Table,
    /// Ordinary or full-width table row
    TableRow,
    /// Table header row
    TableHeader,
    /// Table cell
    TableCell,
    /// Block with an unrecognized tag
    Block,
}

impl Tag {
    /// Map a record tag to a node tag.
    pub fn from_record_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("header") => Tag::Section,
            Some("para") => Tag::Paragraph,
            Some("list_item") => Tag::ListItem,
            Some("table") => Tag::Table,
            _ => Tag::Block,
        }
    }

    /// Name of the tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Root => "root",
            Tag::Section => "section",
            Tag::Paragraph => "paragraph",
            Tag::ListItem => "list_item",
            Tag::Table => "table",
            Tag::TableRow => "table_row",
            Tag::TableHeader => "table_header",
            Tag::TableCell => "table_cell",
            Tag::Block => "block",
        }
    }

    /// Whether nodes with this tag are retrievable chunks.
    ///
    /// Traversals stop at chunks: their children belong to the chunk.
    pub fn is_chunk(self) -> bool {
        matches!(self, Tag::Paragraph | Tag::ListItem | Tag::Table)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Layout attributes and text copied from a block record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockData {
    /// Tag as named by the layout service
    pub raw_tag: Option<String>,

    /// Nesting level
    pub level: i32,

    /// Page index
    pub page_idx: i32,

    /// Block index
    pub block_idx: i32,

    /// Top coordinate
    pub top: f64,

    /// Left coordinate
    pub left: f64,

    /// Bounding box
    pub bbox: Vec<f64>,

    /// Sentences, in reading order
    pub sentences: Vec<String>,
}

impl BlockData {
    /// Copy the layout attributes of a record.
    pub fn from_record(record: &BlockRecord) -> Self {
        Self {
            raw_tag: record.tag.clone(),
            level: record.level,
            page_idx: record.page_idx,
            block_idx: record.block_idx,
            top: record.top,
            left: record.left,
            bbox: record.bbox.clone(),
            sentences: record.sentences.clone(),
        }
    }

    /// Sentences joined by newlines.
    pub fn text(&self) -> String {
        self.sentences.join("\n")
    }

    pub(crate) fn root() -> Self {
        Self {
            raw_tag: None,
            level: MISSING,
            page_idx: MISSING,
            block_idx: MISSING,
            top: MISSING_COORD,
            left: MISSING_COORD,
            bbox: Vec::new(),
            sentences: Vec::new(),
        }
    }
}

/// The closed set of node variants, resolved once at construction.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Document root
    Root,
    /// Block with an unrecognized tag; has no content of its own
    Block,
    /// Heading; its sentences are the title
    Section,
    /// Paragraph
    Paragraph,
    /// List item
    ListItem,
    /// Table with its header and data rows
    Table(Table),
}

impl NodeKind {
    /// Variant tag.
    pub fn tag(&self) -> Tag {
        match self {
            NodeKind::Root => Tag::Root,
            NodeKind::Block => Tag::Block,
            NodeKind::Section => Tag::Section,
            NodeKind::Paragraph => Tag::Paragraph,
            NodeKind::ListItem => Tag::ListItem,
            NodeKind::Table(_) => Tag::Table,
        }
    }
}

/// A node stored in a document's arena.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) kind: NodeKind,
    pub(crate) data: BlockData,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    pub(crate) fn new(kind: NodeKind, data: BlockData) -> Self {
        Self {
            kind,
            data,
            parent: None,
            children: Vec::new(),
        }
    }

    pub(crate) fn root() -> Self {
        Self::new(NodeKind::Root, BlockData::root())
    }

    /// Node variant.
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Variant tag.
    pub fn tag(&self) -> Tag {
        self.kind.tag()
    }

    /// Layout attributes and sentences.
    pub fn data(&self) -> &BlockData {
        &self.data
    }

    /// Parent node, `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child nodes in reading order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Table payload, if this is a table.
    pub fn table(&self) -> Option<&Table> {
        match &self.kind {
            NodeKind::Table(table) => Some(table),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_from_record_tag() {
        assert_eq!(Tag::from_record_tag(Some("header")), Tag::Section);
        assert_eq!(Tag::from_record_tag(Some("para")), Tag::Paragraph);
        assert_eq!(Tag::from_record_tag(Some("list_item")), Tag::ListItem);
        assert_eq!(Tag::from_record_tag(Some("table")), Tag::Table);
        assert_eq!(Tag::from_record_tag(Some("figure")), Tag::Block);
        assert_eq!(Tag::from_record_tag(None), Tag::Block);
    }

    #[test]
    fn test_chunk_tags() {
        assert!(Tag::Paragraph.is_chunk());
        assert!(Tag::ListItem.is_chunk());
        assert!(Tag::Table.is_chunk());
        assert!(!Tag::Section.is_chunk());
        assert!(!Tag::Block.is_chunk());
        assert!(!Tag::Root.is_chunk());
    }

    #[test]
    fn test_block_data_text() {
        let record = BlockRecord::para(0, ["First.", "Second."]);
        let data = BlockData::from_record(&record);
        assert_eq!(data.text(), "First.\nSecond.");
        assert_eq!(data.raw_tag.as_deref(), Some("para"));
    }

    #[test]
    fn test_root_node() {
        let root = Node::root();
        assert_eq!(root.tag(), Tag::Root);
        assert!(root.parent().is_none());
        assert!(root.children().is_empty());
        assert!(root.table().is_none());
    }

    #[test]
    fn test_node_id_from_index() {
        assert_eq!(NodeId::from_index(0).unwrap(), NodeId::ROOT);
        assert_eq!(NodeId::from_index(42).unwrap().index(), 42);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_node_id_past_u32_range() {
        let index = u32::MAX as usize + 1;
        assert!(NodeId::from_index(u32::MAX as usize).is_ok());
        assert!(matches!(
            NodeId::from_index(index),
            Err(Error::TooManyNodes(i)) if i == index
        ));
    }
}
