//! Validating decode of the layout service's block array.
//!
//! Scalars are read leniently: a missing or mistyped number becomes the
//! `-1` placeholder, a missing or mistyped `col_span` becomes 1, and list
//! entries of the wrong type are skipped. Only shapes that leave no record
//! to build (a non-array input, a non-object block) are decode errors.
//! Cell values that are neither strings nor objects are kept as
//! [`CellValue::Invalid`] so the tree builder can report their position.

use crate::error::{Error, Result};
use crate::model::{BlockRecord, CellRecord, CellValue, RowRecord, MISSING, MISSING_COORD};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Decode a JSON array of blocks.
pub fn decode_blocks(value: &Value) -> Result<Vec<BlockRecord>> {
    let items = value.as_array().ok_or_else(|| {
        Error::Decode(format!(
            "expected an array of blocks, found {}",
            kind_of(value)
        ))
    })?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_object().map(block_from_map).ok_or_else(|| {
                Error::Decode(format!(
                    "block {} is {}, expected an object",
                    index,
                    kind_of(item)
                ))
            })
        })
        .collect()
}

/// Decode a single block object.
pub fn decode_block(value: &Value) -> Result<BlockRecord> {
    value
        .as_object()
        .map(block_from_map)
        .ok_or_else(|| Error::Decode(format!("block is {}, expected an object", kind_of(value))))
}

impl<'de> Deserialize<'de> for BlockRecord {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        decode_block(&value).map_err(serde::de::Error::custom)
    }
}

fn block_from_map(map: &Map<String, Value>) -> BlockRecord {
    BlockRecord {
        tag: string_field(map, "tag"),
        level: int_field(map, "level"),
        page_idx: int_field(map, "page_idx"),
        block_idx: int_field(map, "block_idx"),
        top: float_field(map, "top"),
        left: float_field(map, "left"),
        bbox: array_field(map, "bbox")
            .iter()
            .filter_map(Value::as_f64)
            .collect(),
        sentences: array_field(map, "sentences")
            .iter()
            .filter_map(Value::as_str)
            .map(String::from)
            .collect(),
        name: string_field(map, "name"),
        table_rows: array_field(map, "table_rows")
            .iter()
            .map(row_from_value)
            .collect(),
    }
}

fn row_from_value(value: &Value) -> RowRecord {
    let Some(map) = value.as_object() else {
        log::warn!("Table row is {}, treating it as empty", kind_of(value));
        return RowRecord::default();
    };

    RowRecord {
        row_type: string_field(map, "type"),
        cells: array_field(map, "cells")
            .iter()
            .map(cell_from_value)
            .collect(),
        col_span: span_field(map),
        cell_value: map.get("cell_value").map(cell_value),
    }
}

fn cell_from_value(value: &Value) -> CellRecord {
    match value.as_object() {
        Some(map) => CellRecord {
            col_span: span_field(map),
            cell_value: map.get("cell_value").map(cell_value),
        },
        None => CellRecord {
            col_span: 1,
            cell_value: Some(CellValue::Invalid(format!(
                "{} in place of a cell record",
                kind_of(value)
            ))),
        },
    }
}

fn cell_value(value: &Value) -> CellValue {
    match value {
        Value::String(text) => CellValue::Text(text.clone()),
        Value::Object(map) => CellValue::Paragraph(Box::new(block_from_map(map))),
        other => CellValue::Invalid(kind_of(other).to_string()),
    }
}

fn string_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(Value::as_str).map(String::from)
}

fn int_field(map: &Map<String, Value>, key: &str) -> i32 {
    map.get(key)
        .and_then(Value::as_f64)
        .map_or(MISSING, |v| v as i32)
}

fn float_field(map: &Map<String, Value>, key: &str) -> f64 {
    map.get(key).and_then(Value::as_f64).unwrap_or(MISSING_COORD)
}

fn span_field(map: &Map<String, Value>) -> u32 {
    map.get("col_span")
        .and_then(Value::as_f64)
        .filter(|span| *span >= 1.0)
        .map_or(1, |span| span as u32)
}

fn array_field<'a>(map: &'a Map<String, Value>, key: &str) -> &'a [Value] {
    map.get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_full_block() {
        let value = json!([{
            "tag": "para",
            "level": 2,
            "page_idx": 4,
            "block_idx": 11,
            "top": 120.5,
            "left": 72.0,
            "bbox": [72.0, 120.5, 540.0, 180.0],
            "sentences": ["First sentence.", "Second sentence."]
        }]);

        let records = decode_blocks(&value).unwrap();
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.tag.as_deref(), Some("para"));
        assert_eq!(record.level, 2);
        assert_eq!(record.page_idx, 4);
        assert_eq!(record.block_idx, 11);
        assert_eq!(record.top, 120.5);
        assert_eq!(record.left, 72.0);
        assert_eq!(record.bbox, vec![72.0, 120.5, 540.0, 180.0]);
        assert_eq!(record.sentences.len(), 2);
    }

    #[test]
    fn test_mistyped_scalars_default() {
        let value = json!({
            "tag": 5,
            "level": "two",
            "page_idx": null,
            "top": "high",
            "bbox": [1.0, "x", 3.0],
            "sentences": ["ok", 7, null]
        });

        let record = decode_block(&value).unwrap();
        assert_eq!(record.tag, None);
        assert_eq!(record.level, MISSING);
        assert_eq!(record.page_idx, MISSING);
        assert_eq!(record.block_idx, MISSING);
        assert_eq!(record.top, MISSING_COORD);
        assert_eq!(record.bbox, vec![1.0, 3.0]);
        assert_eq!(record.sentences, vec!["ok"]);
    }

    #[test]
    fn test_fractional_level_truncates() {
        let record = decode_block(&json!({"tag": "header", "level": 1.0})).unwrap();
        assert_eq!(record.level, 1);
    }

    #[test]
    fn test_decode_table_rows() {
        let value = json!({
            "tag": "table",
            "name": "Results",
            "table_rows": [
                {"type": "table_header", "cells": [
                    {"col_span": 1, "cell_value": "Name"},
                    {"col_span": 1, "cell_value": "Score"}
                ]},
                {"type": "full_row", "col_span": 2, "cell_value": "Group A"},
                {"type": "table_data_row", "cells": [
                    {"cell_value": {"tag": "para", "sentences": ["Ada"]}},
                    {"cell_value": 42}
                ]}
            ]
        });

        let record = decode_block(&value).unwrap();
        assert_eq!(record.name.as_deref(), Some("Results"));
        assert_eq!(record.table_rows.len(), 3);

        let header = &record.table_rows[0];
        assert_eq!(header.row_type.as_deref(), Some("table_header"));
        assert_eq!(header.cells.len(), 2);

        let full = &record.table_rows[1];
        assert_eq!(full.col_span, 2);
        assert_eq!(full.cell_value, Some(CellValue::Text("Group A".to_string())));

        let data = &record.table_rows[2];
        assert_eq!(data.cells[0].col_span, 1);
        assert!(matches!(
            &data.cells[0].cell_value,
            Some(CellValue::Paragraph(p)) if p.sentences == vec!["Ada"]
        ));
        assert_eq!(
            data.cells[1].cell_value,
            Some(CellValue::Invalid("a number".to_string()))
        );
    }

    #[test]
    fn test_missing_cell_value_is_none() {
        let record = decode_block(&json!({
            "tag": "table",
            "table_rows": [{"cells": [{"col_span": 0}]}]
        }))
        .unwrap();
        let cell = &record.table_rows[0].cells[0];
        assert_eq!(cell.col_span, 1);
        assert_eq!(cell.cell_value, None);
    }

    #[test]
    fn test_non_array_input_is_error() {
        let err = decode_blocks(&json!({"blocks": []})).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
        assert!(err.to_string().contains("an object"));
    }

    #[test]
    fn test_non_object_block_is_error() {
        let err = decode_blocks(&json!([{"tag": "para"}, "oops"])).unwrap_err();
        assert!(err.to_string().contains("block 1 is a string"));
    }

    #[test]
    fn test_deserialize_impl() {
        let records: Vec<BlockRecord> =
            serde_json::from_str(r#"[{"tag": "list_item", "level": 0, "sentences": ["a"]}]"#)
                .unwrap();
        assert_eq!(records[0].tag.as_deref(), Some("list_item"));
        assert_eq!(records[0].level, 0);
    }
}
