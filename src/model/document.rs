//! Document-level types.

use super::{BlockData, BlockRecord, Node, NodeId, NodeKind, Table, Tag};
use crate::error::Result;
use crate::parser::{decode_blocks, BuildOptions, TreeBuilder};
use crate::render::{self, JsonFormat};
use rayon::prelude::*;
use serde_json::Value;
use std::fmt;
use std::io::Read;

/// A document tree built from layout blocks.
///
/// All nodes live in one arena owned by the document. Index 0 is the root;
/// parent links are plain indices and never own anything.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    /// Create a new document with a childless root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::root()],
        }
    }

    /// Build a document from block records with default options.
    pub fn from_records(records: &[BlockRecord]) -> Result<Self> {
        TreeBuilder::new().build(records)
    }

    /// Build a document from block records with custom options.
    pub fn from_records_with_options(
        records: &[BlockRecord],
        options: BuildOptions,
    ) -> Result<Self> {
        TreeBuilder::with_options(options).build(records)
    }

    /// Build a document from a decoded JSON block array.
    pub fn from_value(value: &Value) -> Result<Self> {
        Self::from_value_with_options(value, BuildOptions::default())
    }

    /// Build a document from a decoded JSON block array with custom options.
    pub fn from_value_with_options(value: &Value, options: BuildOptions) -> Result<Self> {
        let records = decode_blocks(value)?;
        Self::from_records_with_options(&records, options)
    }

    /// Build a document from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_json_str_with_options(json, BuildOptions::default())
    }

    /// Build a document from a JSON string with custom options.
    pub fn from_json_str_with_options(json: &str, options: BuildOptions) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value_with_options(&value, options)
    }

    /// Build a document from JSON bytes.
    pub fn from_json_slice(data: &[u8]) -> Result<Self> {
        Self::from_json_slice_with_options(data, BuildOptions::default())
    }

    /// Build a document from JSON bytes with custom options.
    pub fn from_json_slice_with_options(data: &[u8], options: BuildOptions) -> Result<Self> {
        let value: Value = serde_json::from_slice(data)?;
        Self::from_value_with_options(&value, options)
    }

    /// Build a document from a reader yielding a JSON block array.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, BuildOptions::default())
    }

    /// Build a document from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(reader: R, options: BuildOptions) -> Result<Self> {
        let value: Value = serde_json::from_reader(reader)?;
        Self::from_value_with_options(&value, options)
    }

    /// Get the root node.
    pub fn root(&self) -> NodeRef<'_> {
        NodeRef {
            doc: self,
            id: NodeId::ROOT,
        }
    }

    /// Get a node by ID.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_>> {
        (id.index() < self.nodes.len()).then_some(NodeRef { doc: self, id })
    }

    /// Number of nodes, including the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the root has no children.
    pub fn is_empty(&self) -> bool {
        self.nodes[NodeId::ROOT.index()].children.is_empty()
    }

    /// Visit nodes in pre-order, starting with the root's children at depth 0.
    ///
    /// Paragraphs, list items and tables are visited but not descended into.
    pub fn walk<'a, F>(&'a self, visitor: F)
    where
        F: FnMut(NodeRef<'a>, usize),
    {
        self.walk_from(NodeId::ROOT, visitor);
    }

    /// Visit the descendants of `start` in pre-order, its children at depth 0.
    ///
    /// Chunks below `start` are visited but not descended into; `start`
    /// itself is always expanded, even when it is a chunk. Nothing is
    /// visited when `start` is out of range.
    pub fn walk_from<'a, F>(&'a self, start: NodeId, mut visitor: F)
    where
        F: FnMut(NodeRef<'a>, usize),
    {
        let Some(start) = self.nodes.get(start.index()) else {
            return;
        };
        let mut stack: Vec<(NodeId, usize)> =
            start.children.iter().rev().map(|&id| (id, 0)).collect();

        while let Some((id, depth)) = stack.pop() {
            let node = &self.nodes[id.index()];
            visitor(NodeRef { doc: self, id }, depth);
            if !node.tag().is_chunk() {
                stack.extend(node.children.iter().rev().map(|&child| (child, depth + 1)));
            }
        }
    }

    /// All sections, in document order.
    pub fn sections(&self) -> Vec<NodeRef<'_>> {
        self.root().sections()
    }

    /// All paragraphs, in document order.
    pub fn paragraphs(&self) -> Vec<NodeRef<'_>> {
        self.root().paragraphs()
    }

    /// All list items reachable outside other chunks, in document order.
    pub fn list_items(&self) -> Vec<NodeRef<'_>> {
        self.root().list_items()
    }

    /// All tables, in document order.
    pub fn tables(&self) -> Vec<NodeRef<'_>> {
        self.root().tables()
    }

    /// Paragraphs, list items and tables, in document order.
    pub fn chunks(&self) -> Vec<NodeRef<'_>> {
        self.root().chunks()
    }

    /// Context text of every chunk, in chunk order.
    ///
    /// Chunks are rendered in parallel; the tree is read-only once built.
    pub fn context_texts(&self, include_section_info: bool) -> Vec<String> {
        self.chunks()
            .into_par_iter()
            .map(|chunk| chunk.to_context_text(include_section_info))
            .collect()
    }

    /// Plain text of all top-level sections, recursively.
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for section in self.top_level_sections() {
            text.push_str(&section.to_text(true, true));
            text.push('\n');
        }
        text.trim().to_string()
    }

    /// HTML of all top-level sections, recursively, inside `<html>`.
    pub fn to_html(&self) -> String {
        let mut html = String::from("<html>");
        for section in self.top_level_sections() {
            html.push_str(&section.to_html(true, true));
        }
        html.push_str("</html>");
        html
    }

    /// Serialize the tree to JSON.
    ///
    /// Fails with [`Error::Render`](crate::Error::Render) when the tree is
    /// deeper than [`MAX_JSON_DEPTH`](crate::render::MAX_JSON_DEPTH).
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(self, format)
    }

    /// Indented outline of the tree, one line per node.
    pub fn to_outline(&self) -> String {
        render::to_outline(self)
    }

    pub(crate) fn alloc(&mut self, node: Node) -> Result<NodeId> {
        let id = NodeId::from_index(self.nodes.len())?;
        self.nodes.push(node);
        Ok(id)
    }

    pub(crate) fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if let Some(child_node) = self.nodes.get_mut(child.index()) {
            child_node.parent = Some(parent);
        }
        if let Some(parent_node) = self.nodes.get_mut(parent.index()) {
            parent_node.children.push(child);
        }
    }

    pub(crate) fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    fn top_level_sections(&self) -> impl Iterator<Item = NodeRef<'_>> {
        self.root()
            .children()
            .filter(|child| child.tag() == Tag::Section)
    }

    fn collect_from(&self, start: NodeId, keep: impl Fn(Tag) -> bool) -> Vec<NodeRef<'_>> {
        let mut nodes = Vec::new();
        self.walk_from(start, |node, _| {
            if keep(node.tag()) {
                nodes.push(node);
            }
        });
        nodes
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// A borrowed handle to one node of a document.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    doc: &'a Document,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    /// Node ID.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Owning document.
    pub fn document(&self) -> &'a Document {
        self.doc
    }

    /// Underlying arena node.
    pub fn node(&self) -> &'a Node {
        self.doc.get(self.id)
    }

    /// Node variant.
    pub fn kind(&self) -> &'a NodeKind {
        &self.node().kind
    }

    /// Variant tag.
    pub fn tag(&self) -> Tag {
        self.node().tag()
    }

    /// Layout attributes and sentences.
    pub fn data(&self) -> &'a BlockData {
        &self.node().data
    }

    /// Tag as named by the layout service.
    pub fn raw_tag(&self) -> Option<&'a str> {
        self.data().raw_tag.as_deref()
    }

    /// Nesting level.
    pub fn level(&self) -> i32 {
        self.data().level
    }

    /// Page index.
    pub fn page_idx(&self) -> i32 {
        self.data().page_idx
    }

    /// Block index.
    pub fn block_idx(&self) -> i32 {
        self.data().block_idx
    }

    /// Top coordinate.
    pub fn top(&self) -> f64 {
        self.data().top
    }

    /// Left coordinate.
    pub fn left(&self) -> f64 {
        self.data().left
    }

    /// Bounding box.
    pub fn bbox(&self) -> &'a [f64] {
        &self.data().bbox
    }

    /// Sentences.
    pub fn sentences(&self) -> &'a [String] {
        &self.data().sentences
    }

    /// Table payload, if this is a table.
    pub fn table(&self) -> Option<&'a Table> {
        self.node().table()
    }

    /// Parent node, `None` for the root.
    pub fn parent(&self) -> Option<NodeRef<'a>> {
        let doc = self.doc;
        self.node().parent.map(|id| NodeRef { doc, id })
    }

    /// Children in reading order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = NodeRef<'a>> + 'a {
        let doc = self.doc;
        self.node()
            .children
            .iter()
            .map(move |&id| NodeRef { doc, id })
    }

    /// Number of children.
    pub fn child_count(&self) -> usize {
        self.node().children.len()
    }

    /// Sections below this node, in document order.
    ///
    /// Like the document-wide queries, the search does not enter chunks
    /// other than this node itself.
    pub fn sections(&self) -> Vec<NodeRef<'a>> {
        self.doc.collect_from(self.id, |tag| tag == Tag::Section)
    }

    /// Paragraphs below this node, in document order.
    pub fn paragraphs(&self) -> Vec<NodeRef<'a>> {
        self.doc.collect_from(self.id, |tag| tag == Tag::Paragraph)
    }

    /// List items below this node, in document order.
    pub fn list_items(&self) -> Vec<NodeRef<'a>> {
        self.doc.collect_from(self.id, |tag| tag == Tag::ListItem)
    }

    /// Tables below this node, in document order.
    pub fn tables(&self) -> Vec<NodeRef<'a>> {
        self.doc.collect_from(self.id, |tag| tag == Tag::Table)
    }

    /// Chunks below this node, in document order.
    pub fn chunks(&self) -> Vec<NodeRef<'a>> {
        self.doc.collect_from(self.id, Tag::is_chunk)
    }

    /// Text of this node; children are included when `include_children`,
    /// and their own children when `recurse`.
    pub fn to_text(&self, include_children: bool, recurse: bool) -> String {
        render::text::node_text(*self, include_children, recurse)
    }

    /// HTML of this node, with the same child flags as [`NodeRef::to_text`].
    pub fn to_html(&self, include_children: bool, recurse: bool) -> String {
        render::html::node_html(*self, include_children, recurse)
    }

    /// Ancestors, root first, excluding this node.
    pub fn parent_chain(&self) -> Vec<NodeRef<'a>> {
        render::context::parent_chain(*self)
    }

    /// Section titles joined by " > ", then enclosing paragraph/list text.
    pub fn parent_text(&self) -> String {
        render::context::parent_text(*self)
    }

    /// Text of this node, optionally prefixed with its parent text.
    pub fn to_context_text(&self, include_section_info: bool) -> String {
        render::context::context_text(*self, include_section_info)
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.doc, other.doc) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("tag", &self.tag())
            .field("level", &self.level())
            .field("sentences", &self.sentences())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn para(level: i32, text: &str) -> Node {
        Node::new(
            NodeKind::Paragraph,
            BlockData::from_record(&BlockRecord::para(level, [text])),
        )
    }

    #[test]
    fn test_document_new() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.root().tag(), Tag::Root);
        assert!(doc.chunks().is_empty());
        assert_eq!(doc.to_text(), "");
        assert_eq!(doc.to_html(), "<html></html>");
    }

    #[test]
    fn test_append_child_links_both_ways() {
        let mut doc = Document::new();
        let id = doc.alloc(para(0, "hello")).unwrap();
        doc.append_child(NodeId::ROOT, id);

        let node = doc.node(id).unwrap();
        assert_eq!(node.parent(), Some(doc.root()));
        assert_eq!(doc.root().children().collect::<Vec<_>>(), vec![node]);
        assert!(!doc.is_empty());
    }

    #[test]
    fn test_node_out_of_range() {
        let doc = Document::new();
        assert!(doc.node(NodeId(5)).is_none());
    }

    #[test]
    fn test_walk_stops_at_chunks() {
        let mut doc = Document::new();
        let outer = doc.alloc(para(0, "outer")).unwrap();
        let inner = doc.alloc(para(1, "inner")).unwrap();
        doc.append_child(NodeId::ROOT, outer);
        doc.append_child(outer, inner);

        let mut visited = Vec::new();
        doc.walk(|node, depth| visited.push((node.id(), depth)));
        assert_eq!(visited, vec![(outer, 0)]);
    }

    #[test]
    fn test_walk_from_expands_start_chunk() {
        let mut doc = Document::new();
        let outer = doc.alloc(para(0, "outer")).unwrap();
        let inner = doc.alloc(para(1, "inner")).unwrap();
        let innermost = doc.alloc(para(2, "innermost")).unwrap();
        doc.append_child(NodeId::ROOT, outer);
        doc.append_child(outer, inner);
        doc.append_child(inner, innermost);

        let mut visited = Vec::new();
        doc.walk_from(outer, |node, depth| visited.push((node.id(), depth)));
        assert_eq!(visited, vec![(inner, 0)]);

        let outer = doc.node(outer).unwrap();
        assert_eq!(outer.paragraphs(), vec![doc.node(inner).unwrap()]);
        assert!(doc.node(innermost).unwrap().chunks().is_empty());
    }

    #[test]
    fn test_walk_from_out_of_range() {
        let doc = Document::new();
        let mut visited = 0;
        doc.walk_from(NodeId(9), |_, _| visited += 1);
        assert_eq!(visited, 0);
    }
}
