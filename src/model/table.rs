//! Table types.

use super::BlockData;
use crate::render;
use serde::Serialize;

/// A table structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Table {
    /// Table name
    pub name: Option<String>,

    /// Header rows, in order
    pub headers: Vec<TableRow>,

    /// Data rows (ordinary and full-width), in order
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header row.
    pub fn add_header(&mut self, row: TableRow) {
        self.headers.push(row);
    }

    /// Add a data row.
    pub fn add_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }
}

/// Kind of a table row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowKind {
    /// Header row
    Header,
    /// Single cell spanning the row
    FullRow,
    /// Ordinary row
    #[default]
    Data,
}

impl RowKind {
    /// Classify a row by its row type string.
    pub fn from_row_type(row_type: Option<&str>) -> Self {
        match row_type {
            Some("table_header") => RowKind::Header,
            Some("full_row") => RowKind::FullRow,
            _ => RowKind::Data,
        }
    }
}

/// A table row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    /// Row kind
    pub kind: RowKind,

    /// Cells in the row
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Create an ordinary row.
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self {
            kind: RowKind::Data,
            cells,
        }
    }

    /// Create a header row.
    pub fn header(cells: Vec<TableCell>) -> Self {
        Self {
            kind: RowKind::Header,
            cells,
        }
    }

    /// Create a full-width row holding one cell.
    pub fn full_row(cell: TableCell) -> Self {
        Self {
            kind: RowKind::FullRow,
            cells: vec![cell],
        }
    }
}

/// A table cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableCell {
    /// Number of columns this cell spans
    pub col_span: u32,

    /// Cell content
    pub content: CellContent,
}

impl TableCell {
    /// Create a cell with a literal string.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            col_span: 1,
            content: CellContent::Text(text.into()),
        }
    }

    /// Create a cell that owns a paragraph.
    pub fn paragraph(paragraph: BlockData) -> Self {
        Self {
            col_span: 1,
            content: CellContent::Paragraph(Box::new(paragraph)),
        }
    }

    /// Create an empty cell.
    pub fn empty() -> Self {
        Self::text("")
    }

    /// Set colspan and return self.
    pub fn colspan(mut self, span: u32) -> Self {
        self.col_span = span.max(1);
        self
    }

    /// Cell text: the literal, or the paragraph's sentences joined by newlines.
    pub fn to_text(&self) -> String {
        render::text::cell_text(self)
    }
}

/// Content of a table cell: a literal or a nested paragraph, never both.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellContent {
    /// Literal string, rendered verbatim
    Text(String),
    /// Paragraph owned by the cell
    Paragraph(Box<BlockData>),
}
