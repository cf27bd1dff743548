//! Tree construction from a flat sequence of block records.
//!
//! Two stacks resolve nesting in a single pass:
//!
//! - the section stack holds the chain of open headers, with the root at
//!   the bottom. A header closes every open header at the same or a deeper
//!   level and nests under what remains. Everything that is not a header
//!   or list item attaches to the top of this stack.
//! - the list stack holds the chain of open list items for the current
//!   unbroken run of list items. Any other block ends the run. A paragraph
//!   directly before the run, at the same level as its first item, can
//!   open the run as its container (see [`ListContainer`]).
//!
//! Stack frames carry the level widened to `i64`; the root frame sits at
//! `i64::MIN`, below every level a record can have.

use super::table::TableBuilder;
use super::{BuildOptions, ListContainer};
use crate::error::Result;
use crate::model::{BlockData, BlockRecord, Document, Node, NodeId, NodeKind, Tag};

/// Builds a [`Document`] from block records.
#[derive(Debug, Clone, Default)]
pub struct TreeBuilder {
    options: BuildOptions,
}

impl TreeBuilder {
    /// Create a builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with custom options.
    pub fn with_options(options: BuildOptions) -> Self {
        Self { options }
    }

    /// Get the build options.
    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Build the document tree.
    ///
    /// Fails only on a malformed table cell in strict mode; any nesting
    /// shape produces a tree.
    pub fn build(&self, records: &[BlockRecord]) -> Result<Document> {
        log::debug!("Building tree from {} blocks", records.len());

        let mut state = BuildState::new();
        for (index, record) in records.iter().enumerate() {
            let tag = Tag::from_record_tag(record.tag.as_deref());
            if tag != Tag::ListItem {
                state.list.clear();
            }

            let kind = match tag {
                Tag::Section => NodeKind::Section,
                Tag::Paragraph => NodeKind::Paragraph,
                Tag::ListItem => NodeKind::ListItem,
                Tag::Table => {
                    let table = TableBuilder::new(index, self.options.error_mode).build(record)?;
                    NodeKind::Table(table)
                }
                _ => NodeKind::Block,
            };
            let id = state
                .doc
                .alloc(Node::new(kind, BlockData::from_record(record)))?;

            let parent = match tag {
                Tag::Section => state.attach_section(id, record.level),
                Tag::ListItem => {
                    state.attach_list_item(id, record.level, self.options.list_container)
                }
                _ => state.attach_content(id),
            };
            log::trace!(
                "Block {} ({}, level {}) -> parent {:?}",
                index,
                tag,
                record.level,
                parent
            );

            state.prev = Some(id);
        }

        let doc = state.doc;
        log::debug!(
            "Built tree with {} nodes, {} sections, {} chunks",
            doc.len(),
            doc.sections().len(),
            doc.chunks().len()
        );
        Ok(doc)
    }
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    level: i64,
    id: NodeId,
}

impl Frame {
    const ROOT: Frame = Frame {
        level: i64::MIN,
        id: NodeId::ROOT,
    };

    fn new(level: i32, id: NodeId) -> Self {
        Self {
            level: i64::from(level),
            id,
        }
    }
}

struct BuildState {
    doc: Document,
    sections: Vec<Frame>,
    list: Vec<Frame>,
    prev: Option<NodeId>,
}

impl BuildState {
    fn new() -> Self {
        Self {
            doc: Document::new(),
            sections: vec![Frame::ROOT],
            list: Vec::new(),
            prev: None,
        }
    }

    fn current_section(&self) -> NodeId {
        self.sections.last().map_or(NodeId::ROOT, |frame| frame.id)
    }

    fn attach_content(&mut self, id: NodeId) -> NodeId {
        let parent = self.current_section();
        self.doc.append_child(parent, id);
        parent
    }

    fn attach_section(&mut self, id: NodeId, level: i32) -> NodeId {
        let frame = Frame::new(level, id);
        while self
            .sections
            .last()
            .is_some_and(|top| top.level >= frame.level)
        {
            self.sections.pop();
        }

        let parent = self.current_section();
        self.doc.append_child(parent, id);
        self.sections.push(frame);
        parent
    }

    fn attach_list_item(&mut self, id: NodeId, level: i32, policy: ListContainer) -> NodeId {
        let frame = Frame::new(level, id);

        if policy == ListContainer::ParagraphAdopts {
            if let Some(prev) = self.prev {
                let prev_node = self.doc.get(prev);
                if prev_node.tag() == Tag::Paragraph && prev_node.data().level == level {
                    self.list.push(Frame::new(level, prev));
                }
            }
        }

        // A list item closes open items at its level or deeper; a container
        // paragraph only closes for a shallower item.
        while let Some(top) = self.list.last() {
            let closes = if self.doc.get(top.id).tag() == Tag::Paragraph {
                top.level > frame.level
            } else {
                top.level >= frame.level
            };
            if !closes {
                break;
            }
            self.list.pop();
        }

        let parent = match self.list.last() {
            Some(top) => top.id,
            None => self.current_section(),
        };
        self.doc.append_child(parent, id);
        self.list.push(frame);
        parent
    }
}
