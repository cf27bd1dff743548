//! Error types for layoutdoc library.

use std::io;
use thiserror::Error;

/// Result type alias for layoutdoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while decoding layout blocks or building a tree.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading block data from a reader.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The block data is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON is valid but does not have the shape of a block array.
    #[error("Block decoding error: {0}")]
    Decode(String),

    /// A table cell holds neither a string nor a paragraph record.
    ///
    /// `block` is the table's position in the input sequence, `row` the
    /// index into its `table_rows`, `cell` the index within that row
    /// (always 0 for full-width rows).
    #[error("Malformed table cell in block {block} at row {row}, cell {cell}: {reason}")]
    MalformedCell {
        /// Index of the table record in the input
        block: usize,
        /// Row index within the table
        row: usize,
        /// Cell index within the row
        cell: usize,
        /// What was found instead of a cell value
        reason: String,
    },

    /// The tree would hold more nodes than a node ID can address.
    #[error("Document too large: node {0} exceeds the node ID range")]
    TooManyNodes(usize),

    /// Error during rendering (JSON export).
    #[error("Rendering error: {0}")]
    Render(String),
}
