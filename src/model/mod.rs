//! Document model types for layout block trees.
//!
//! Records are the flat input handed over by the layout-extraction service;
//! nodes are the tree the builder derives from them. Nodes are immutable
//! once the document is built.

mod document;
mod node;
mod record;
mod table;

pub use document::{Document, NodeRef};
pub use node::{BlockData, Node, NodeId, NodeKind, Tag};
pub use record::{BlockRecord, CellRecord, CellValue, RowRecord, MISSING, MISSING_COORD};
pub use table::{CellContent, RowKind, Table, TableCell, TableRow};
