//! Raw layout block records.
//!
//! These mirror the block objects emitted by the layout-extraction service.
//! They carry no behavior; the tree builder turns them into nodes.

use super::RowKind;

/// Placeholder for missing or mistyped integer fields (level, page index, block index).
pub const MISSING: i32 = -1;

/// Placeholder for missing or mistyped coordinates.
pub const MISSING_COORD: f64 = -1.0;

/// One detected layout unit (header, paragraph, list item, table, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct BlockRecord {
    /// Block type as named by the service ("header", "para", "list_item", "table", ...)
    pub tag: Option<String>,

    /// Nesting level (-1 when absent)
    pub level: i32,

    /// Page the block was found on
    pub page_idx: i32,

    /// Index of the block within the document
    pub block_idx: i32,

    /// Top coordinate
    pub top: f64,

    /// Left coordinate
    pub left: f64,

    /// Bounding box (empty or four numbers)
    pub bbox: Vec<f64>,

    /// Text content, one entry per sentence
    pub sentences: Vec<String>,

    /// Table name (tables only)
    pub name: Option<String>,

    /// Table rows (tables only)
    pub table_rows: Vec<RowRecord>,
}

impl BlockRecord {
    /// Create a record with the given tag and placeholder fields.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            ..Self::default()
        }
    }

    /// Create a header record.
    pub fn header(level: i32, title: impl Into<String>) -> Self {
        Self::new("header")
            .with_level(level)
            .with_sentences([title])
    }

    /// Create a paragraph record.
    pub fn para<S: Into<String>>(level: i32, sentences: impl IntoIterator<Item = S>) -> Self {
        Self::new("para").with_level(level).with_sentences(sentences)
    }

    /// Create a list item record.
    pub fn list_item(level: i32, text: impl Into<String>) -> Self {
        Self::new("list_item")
            .with_level(level)
            .with_sentences([text])
    }

    /// Create a table record with the given rows.
    pub fn table(level: i32, rows: impl IntoIterator<Item = RowRecord>) -> Self {
        Self {
            table_rows: rows.into_iter().collect(),
            ..Self::new("table").with_level(level)
        }
    }

    /// Set the level.
    pub fn with_level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }

    /// Set page and block indices.
    pub fn with_position(mut self, page_idx: i32, block_idx: i32) -> Self {
        self.page_idx = page_idx;
        self.block_idx = block_idx;
        self
    }

    /// Set top/left coordinates.
    pub fn with_coords(mut self, top: f64, left: f64) -> Self {
        self.top = top;
        self.left = left;
        self
    }

    /// Set the bounding box.
    pub fn with_bbox(mut self, bbox: [f64; 4]) -> Self {
        self.bbox = bbox.to_vec();
        self
    }

    /// Replace the sentences.
    pub fn with_sentences<S: Into<String>>(
        mut self,
        sentences: impl IntoIterator<Item = S>,
    ) -> Self {
        self.sentences = sentences.into_iter().map(Into::into).collect();
        self
    }

    /// Set the table name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Append a table row.
    pub fn with_row(mut self, row: RowRecord) -> Self {
        self.table_rows.push(row);
        self
    }
}

impl Default for BlockRecord {
    fn default() -> Self {
        Self {
            tag: None,
            level: MISSING,
            page_idx: MISSING,
            block_idx: MISSING,
            top: MISSING_COORD,
            left: MISSING_COORD,
            bbox: Vec::new(),
            sentences: Vec::new(),
            name: None,
            table_rows: Vec::new(),
        }
    }
}

/// A table row record.
///
/// Header and ordinary rows list their cells; a full-width row carries its
/// single cell's span and value directly.
#[derive(Debug, Clone, PartialEq)]
pub struct RowRecord {
    /// "table_header", "full_row", or absent for ordinary rows
    pub row_type: Option<String>,

    /// Cells of a header or ordinary row
    pub cells: Vec<CellRecord>,

    /// Column span of a full-width row
    pub col_span: u32,

    /// Value of a full-width row
    pub cell_value: Option<CellValue>,
}

impl RowRecord {
    /// Create an ordinary row.
    pub fn new(cells: impl IntoIterator<Item = CellRecord>) -> Self {
        Self {
            cells: cells.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Create a header row.
    pub fn header(cells: impl IntoIterator<Item = CellRecord>) -> Self {
        Self {
            row_type: Some("table_header".to_string()),
            ..Self::new(cells)
        }
    }

    /// Create a full-width row from a single cell.
    pub fn full_row(cell: CellRecord) -> Self {
        Self {
            row_type: Some("full_row".to_string()),
            cells: Vec::new(),
            col_span: cell.col_span,
            cell_value: cell.cell_value,
        }
    }

    /// Create an ordinary row of text cells.
    pub fn from_strings<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::new(values.into_iter().map(CellRecord::text))
    }

    /// Classify the row by its row type.
    pub fn kind(&self) -> RowKind {
        RowKind::from_row_type(self.row_type.as_deref())
    }
}

impl Default for RowRecord {
    fn default() -> Self {
        Self {
            row_type: None,
            cells: Vec::new(),
            col_span: 1,
            cell_value: None,
        }
    }
}

/// A table cell record.
#[derive(Debug, Clone, PartialEq)]
pub struct CellRecord {
    /// Number of columns the cell spans (at least 1)
    pub col_span: u32,

    /// Cell value, `None` when the service omitted it
    pub cell_value: Option<CellValue>,
}

impl CellRecord {
    /// Create a cell with a literal string value.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            col_span: 1,
            cell_value: Some(CellValue::Text(text.into())),
        }
    }

    /// Create a cell whose value is a nested paragraph record.
    pub fn paragraph(record: BlockRecord) -> Self {
        Self {
            col_span: 1,
            cell_value: Some(CellValue::Paragraph(Box::new(record))),
        }
    }

    /// Set the column span.
    pub fn with_col_span(mut self, span: u32) -> Self {
        self.col_span = span.max(1);
        self
    }
}

/// The value of a table cell as decoded from the service output.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// A literal string
    Text(String),

    /// A nested paragraph-shaped record
    Paragraph(Box<BlockRecord>),

    /// Something else; holds a description of what was found.
    /// Rejected by the tree builder with its row/cell position.
    Invalid(String),
}
