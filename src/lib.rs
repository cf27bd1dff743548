//! # layoutdoc
//!
//! Document trees from PDF layout blocks.
//!
//! A layout-extraction service turns a PDF into a flat, reading-ordered
//! sequence of blocks (headers, paragraphs, list items, tables) annotated
//! with nesting levels. This library rebuilds the document hierarchy from
//! that sequence and renders it for retrieval pipelines.
//!
//! ## Quick Start
//!
//! ```
//! use layoutdoc::parse_json;
//!
//! fn main() -> layoutdoc::Result<()> {
//!     let doc = parse_json(r#"[
//!         {"tag": "header", "level": 0, "sentences": ["Installation"]},
//!         {"tag": "para", "level": 1, "sentences": ["Run the installer."]}
//!     ]"#)?;
//!
//!     for chunk in doc.chunks() {
//!         // "Installation\nRun the installer."
//!         println!("{}", chunk.to_context_text(true));
//!     }
//!     assert_eq!(doc.to_html(), "<html><h1>Installation</h1><p>Run the installer.</p></html>");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Section nesting**: headers open sections that hold everything up to the next
//!   header at the same or a shallower level
//! - **Lists**: list items nest by level, optionally under an introducing paragraph
//! - **Tables**: header, full-width and data rows, with merged and paragraph cells
//! - **Chunks**: paragraphs, list items and tables with their section context
//! - **Output formats**: plain text, HTML, JSON, debug outline

pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{
    BlockData, BlockRecord, CellContent, CellRecord, CellValue, Document, Node, NodeId, NodeKind,
    NodeRef, RowKind, RowRecord, Table, TableCell, TableRow, Tag,
};
pub use parser::{decode_blocks, BuildOptions, ErrorMode, ListContainer, TreeBuilder};
pub use render::JsonFormat;

use serde_json::Value;
use std::io::Read;

/// Build a document from block records.
///
/// # Example
///
/// ```
/// use layoutdoc::{parse_records, BlockRecord};
///
/// let doc = parse_records(&[
///     BlockRecord::header(0, "Intro"),
///     BlockRecord::para(1, ["Hello."]),
/// ]).unwrap();
/// assert_eq!(doc.sections().len(), 1);
/// ```
pub fn parse_records(records: &[BlockRecord]) -> Result<Document> {
    Document::from_records(records)
}

/// Build a document from block records with custom options.
pub fn parse_records_with_options(
    records: &[BlockRecord],
    options: BuildOptions,
) -> Result<Document> {
    Document::from_records_with_options(records, options)
}

/// Build a document from a JSON block array.
///
/// # Example
///
/// ```
/// use layoutdoc::parse_json;
///
/// let doc = parse_json(r#"[{"tag": "list_item", "level": 0, "sentences": ["a"]}]"#).unwrap();
/// assert_eq!(doc.list_items().len(), 1);
/// ```
pub fn parse_json(json: &str) -> Result<Document> {
    Document::from_json_str(json)
}

/// Build a document from a JSON block array with custom options.
///
/// # Example
///
/// ```
/// use layoutdoc::{parse_json_with_options, BuildOptions};
///
/// let json = r#"[{"tag": "table", "table_rows": [{"cells": [{"cell_value": 3}]}]}]"#;
/// let doc = parse_json_with_options(json, BuildOptions::new().lenient()).unwrap();
/// assert_eq!(doc.tables().len(), 1);
/// ```
pub fn parse_json_with_options(json: &str, options: BuildOptions) -> Result<Document> {
    Document::from_json_str_with_options(json, options)
}

/// Build a document from JSON bytes.
pub fn parse_slice(data: &[u8]) -> Result<Document> {
    Document::from_json_slice(data)
}

/// Build a document from an already decoded JSON value.
pub fn parse_value(value: &Value) -> Result<Document> {
    Document::from_value(value)
}

/// Build a document from a reader.
///
/// # Example
///
/// ```no_run
/// use layoutdoc::parse_reader;
/// use std::fs::File;
///
/// let file = File::open("blocks.json").unwrap();
/// let doc = parse_reader(file).unwrap();
/// println!("{}", doc.to_text());
/// ```
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    Document::from_reader(reader)
}

/// Build a document from a reader with custom options.
pub fn parse_reader_with_options<R: Read>(reader: R, options: BuildOptions) -> Result<Document> {
    Document::from_reader_with_options(reader, options)
}

/// Convert a JSON block array to plain text.
pub fn to_text(json: &str) -> Result<String> {
    Ok(parse_json(json)?.to_text())
}

/// Convert a JSON block array to HTML.
pub fn to_html(json: &str) -> Result<String> {
    Ok(parse_json(json)?.to_html())
}

/// Convert a JSON block array to the JSON document tree.
pub fn to_json(json: &str, format: JsonFormat) -> Result<String> {
    parse_json(json)?.to_json(format)
}
