//! Plain text rendering for document nodes.

use crate::model::{CellContent, NodeKind, NodeRef, Table, TableCell, TableRow};

/// Render a node as plain text.
///
/// Children are appended when `include_children`; each child is rendered
/// with `recurse` for both of its own flags. Nodes are expanded from an
/// explicit stack, so nesting depth is bounded only by memory.
pub fn node_text(node: NodeRef<'_>, include_children: bool, recurse: bool) -> String {
    let start = node.id();
    let mut text = String::new();
    let mut stack = vec![(node, include_children)];

    while let Some((node, include_children)) = stack.pop() {
        if node.id() != start {
            text.push('\n');
        }
        match node.kind() {
            NodeKind::Root | NodeKind::Block => {}
            NodeKind::Table(table) => text.push_str(&table_text(table)),
            NodeKind::Section | NodeKind::Paragraph | NodeKind::ListItem => {
                text.push_str(&node.data().text());
                if include_children {
                    stack.extend(node.children().rev().map(|child| (child, recurse)));
                }
            }
        }
    }
    text
}

/// Render a table as pipe-delimited rows, with a dashed separator under
/// each header row.
pub fn table_text(table: &Table) -> String {
    let mut lines = Vec::with_capacity(table.headers.len() * 2 + table.rows.len());
    for header in &table.headers {
        lines.push(row_text(header));
        lines.push(" | ---".repeat(header.cells.len()));
    }
    for row in &table.rows {
        lines.push(row_text(row));
    }
    lines.join("\n").trim().to_string()
}

/// Render a cell: the literal, or the paragraph's sentences joined by newlines.
pub fn cell_text(cell: &TableCell) -> String {
    match &cell.content {
        CellContent::Text(text) => text.clone(),
        CellContent::Paragraph(paragraph) => paragraph.text(),
    }
}

fn row_text(row: &TableRow) -> String {
    row.cells
        .iter()
        .map(|cell| format!(" | {}", cell_text(cell)))
        .collect()
}
