//! Benchmarks for layoutdoc tree building and rendering.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic block sequences shaped like a long report.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use layoutdoc::{BlockRecord, CellRecord, Document, RowRecord};

/// Creates a synthetic record sequence with the given number of chapters.
///
/// Each chapter has two sections, each with a paragraph, a nested list
/// introduced by a paragraph and a small table.
fn create_records(chapters: usize) -> Vec<BlockRecord> {
    let mut records = Vec::new();
    for chapter in 0..chapters {
        records.push(BlockRecord::header(0, format!("Chapter {}", chapter + 1)));
        for section in 0..2 {
            records.push(BlockRecord::header(1, format!("Section {}", section + 1)));
            records.push(BlockRecord::para(
                2,
                ["Benchmark paragraph text.", "It has two sentences."],
            ));
            records.push(BlockRecord::para(2, ["The following apply:"]));
            for item in 0..4 {
                records.push(BlockRecord::list_item(2, format!("Item {}", item + 1)));
                records.push(BlockRecord::list_item(3, "Nested detail"));
            }
            records.push(BlockRecord::table(
                2,
                vec![
                    RowRecord::header([CellRecord::text("Key"), CellRecord::text("Value")]),
                    RowRecord::full_row(CellRecord::text("Group").with_col_span(2)),
                    RowRecord::from_strings(["alpha", "1"]),
                    RowRecord::new([
                        CellRecord::paragraph(BlockRecord::para(0, ["beta", "two lines"])),
                        CellRecord::text("2"),
                    ]),
                ],
            ));
        }
    }
    records
}

/// Benchmark tree construction at various sizes.
fn bench_tree_building(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_building");

    for chapters in [1, 10, 100].iter() {
        let records = create_records(*chapters);

        group.bench_function(format!("{}_chapters", chapters), |b| {
            b.iter(|| Document::from_records(black_box(&records)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark JSON decoding plus construction.
fn bench_json_loading(c: &mut Criterion) {
    let json = serde_json::to_string(&json_blocks(&create_records(10))).unwrap();

    c.bench_function("json_loading_10_chapters", |b| {
        b.iter(|| layoutdoc::parse_json(black_box(&json)).unwrap());
    });
}

/// Benchmark whole-document and per-chunk rendering.
fn bench_rendering(c: &mut Criterion) {
    let doc = Document::from_records(&create_records(10)).unwrap();

    c.bench_function("to_text", |b| b.iter(|| black_box(&doc).to_text()));
    c.bench_function("to_html", |b| b.iter(|| black_box(&doc).to_html()));
    c.bench_function("context_texts", |b| {
        b.iter(|| black_box(&doc).context_texts(true))
    });
}

fn json_blocks(records: &[BlockRecord]) -> serde_json::Value {
    let blocks = records
        .iter()
        .map(|record| {
            let mut block = serde_json::json!({
                "tag": record.tag,
                "level": record.level,
                "sentences": record.sentences,
            });
            if !record.table_rows.is_empty() {
                block["table_rows"] = serde_json::json!([
                    {"type": "table_header", "cells": [
                        {"col_span": 1, "cell_value": "Key"},
                        {"col_span": 1, "cell_value": "Value"}
                    ]},
                    {"type": "table_data_row", "cells": [
                        {"col_span": 1, "cell_value": "alpha"},
                        {"col_span": 1, "cell_value": {"tag": "para", "sentences": ["beta"]}}
                    ]}
                ]);
            }
            block
        })
        .collect();
    serde_json::Value::Array(blocks)
}

criterion_group!(benches, bench_tree_building, bench_json_loading, bench_rendering);
criterion_main!(benches);
