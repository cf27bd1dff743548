//! Table construction from table records.

use super::ErrorMode;
use crate::error::{Error, Result};
use crate::model::{
    BlockData, BlockRecord, CellRecord, CellValue, RowKind, Table, TableCell, TableRow,
};

/// Builds a [`Table`] from a table record.
pub(crate) struct TableBuilder {
    block: usize,
    error_mode: ErrorMode,
}

impl TableBuilder {
    /// `block` is the record's index in the input, used in error positions.
    pub(crate) fn new(block: usize, error_mode: ErrorMode) -> Self {
        Self { block, error_mode }
    }

    pub(crate) fn build(&self, record: &BlockRecord) -> Result<Table> {
        let mut table = Table {
            name: record.name.clone(),
            ..Table::new()
        };

        for (row_idx, row) in record.table_rows.iter().enumerate() {
            match row.kind() {
                RowKind::Header => {
                    let cells = self.build_cells(row_idx, &row.cells)?;
                    table.add_header(TableRow::header(cells));
                }
                RowKind::FullRow => {
                    let cell =
                        self.build_cell(row_idx, 0, row.col_span, row.cell_value.as_ref())?;
                    table.add_row(TableRow::full_row(cell));
                }
                RowKind::Data => {
                    let cells = self.build_cells(row_idx, &row.cells)?;
                    table.add_row(TableRow::new(cells));
                }
            }
        }

        log::trace!(
            "Table in block {}: {} header rows, {} data rows",
            self.block,
            table.headers.len(),
            table.rows.len()
        );
        Ok(table)
    }

    fn build_cells(&self, row: usize, cells: &[CellRecord]) -> Result<Vec<TableCell>> {
        cells
            .iter()
            .enumerate()
            .map(|(idx, cell)| self.build_cell(row, idx, cell.col_span, cell.cell_value.as_ref()))
            .collect()
    }

    fn build_cell(
        &self,
        row: usize,
        cell: usize,
        col_span: u32,
        value: Option<&CellValue>,
    ) -> Result<TableCell> {
        let cell = match value {
            Some(CellValue::Text(text)) => TableCell::text(text.as_str()),
            Some(CellValue::Paragraph(record)) => {
                TableCell::paragraph(BlockData::from_record(record))
            }
            Some(CellValue::Invalid(found)) => {
                let reason = format!("expected string or paragraph record, found {}", found);
                return self.malformed(row, cell, col_span, reason);
            }
            None => {
                return self.malformed(row, cell, col_span, "missing cell_value".to_string());
            }
        };

        Ok(cell.colspan(col_span))
    }

    fn malformed(
        &self,
        row: usize,
        cell: usize,
        col_span: u32,
        reason: String,
    ) -> Result<TableCell> {
        match self.error_mode {
            ErrorMode::Strict => Err(Error::MalformedCell {
                block: self.block,
                row,
                cell,
                reason,
            }),
            ErrorMode::Lenient => {
                log::warn!(
                    "Malformed table cell in block {} at row {}, cell {}: {}; using an empty cell",
                    self.block,
                    row,
                    cell,
                    reason
                );
                Ok(TableCell::empty().colspan(col_span))
            }
        }
    }
}
