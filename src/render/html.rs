//! HTML rendering for document nodes.
//!
//! Sentences and cell text are written verbatim, without escaping.

use crate::model::{CellContent, NodeKind, NodeRef, Table, TableCell};

/// Render a node as HTML, with the same child flags as
/// [`node_text`](super::text::node_text).
pub fn node_html(node: NodeRef<'_>, include_children: bool, recurse: bool) -> String {
    let mut html = String::new();
    let mut stack = vec![Step::Open(node, include_children)];

    while let Some(step) = stack.pop() {
        let (node, include_children) = match step {
            Step::Open(node, include_children) => (node, include_children),
            Step::Close(element) => {
                html.push_str(&format!("</ul></{element}>"));
                continue;
            }
        };

        let element = match node.kind() {
            NodeKind::Root | NodeKind::Block => continue,
            NodeKind::Table(table) => {
                html.push_str(&table_html(table));
                continue;
            }
            NodeKind::Section => {
                let level = heading_level(node.level());
                html.push_str(&format!(
                    "<h{level}>{}</h{level}>",
                    node.sentences().join("<br>")
                ));
                None
            }
            NodeKind::Paragraph => Some("p"),
            NodeKind::ListItem => Some("li"),
        };

        let children: Vec<_> = if include_children {
            node.children().collect()
        } else {
            Vec::new()
        };
        // Paragraphs and list items wrap non-empty children in <ul>.
        if let Some(element) = element {
            html.push_str(&format!("<{element}>{}", node.sentences().join("<br>")));
            if children.iter().all(|child| renders_empty(*child)) {
                html.push_str(&format!("</{element}>"));
                continue;
            }
            html.push_str("<ul>");
            stack.push(Step::Close(element));
        }
        stack.extend(
            children
                .into_iter()
                .rev()
                .map(|child| Step::Open(child, recurse)),
        );
    }
    html
}

/// Pending work for [`node_html`]: a node to open, or the closing tags of
/// a paragraph or list item whose children have been written.
enum Step<'a> {
    Open(NodeRef<'a>, bool),
    Close(&'static str),
}

fn renders_empty(node: NodeRef<'_>) -> bool {
    matches!(node.kind(), NodeKind::Root | NodeKind::Block)
}

/// Render a table: header rows as `<th>`, then data rows as `<tr>`.
pub fn table_html(table: &Table) -> String {
    let mut html = String::from("<table>");
    for header in &table.headers {
        html.push_str("<th>");
        html.extend(header.cells.iter().map(cell_html));
        html.push_str("</th>");
    }
    for row in &table.rows {
        html.push_str("<tr>");
        html.extend(row.cells.iter().map(cell_html));
        html.push_str("</tr>");
    }
    html.push_str("</table>");
    html
}

/// Render a cell as `<td>`, with `colspan` when it spans more than one column.
pub fn cell_html(cell: &TableCell) -> String {
    let open = if cell.col_span > 1 {
        format!("<td colspan=\"{}\">", cell.col_span)
    } else {
        "<td>".to_string()
    };
    let body = match &cell.content {
        CellContent::Text(text) => text.clone(),
        CellContent::Paragraph(paragraph) => {
            format!("<p>{}</p>", paragraph.sentences.join("<br>"))
        }
    };
    format!("{open}{body}</td>")
}

// Section level 0 is <h1>; HTML stops at <h6>.
fn heading_level(level: i32) -> i32 {
    level.saturating_add(1).clamp(1, 6)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BlockData, BlockRecord, Document, TableRow};

    fn doc(records: &[BlockRecord]) -> Document {
        Document::from_records(records).unwrap()
    }

    #[test]
    fn test_paragraph_html() {
        let doc = doc(&[BlockRecord::para(0, ["One.", "Two."])]);
        assert_eq!(node_html(doc.paragraphs()[0], true, true), "<p>One.<br>Two.</p>");
    }

    #[test]
    fn test_paragraph_with_list_children() {
        let doc = doc(&[
            BlockRecord::para(0, ["Steps:"]),
            BlockRecord::list_item(0, "first"),
            BlockRecord::list_item(0, "second"),
        ]);
        let para = doc.paragraphs()[0];

        assert_eq!(
            node_html(para, true, true),
            "<p>Steps:<ul><li>first</li><li>second</li></ul></p>"
        );
        assert_eq!(node_html(para, false, false), "<p>Steps:</p>");
    }

    #[test]
    fn test_section_heading_levels() {
        let doc = doc(&[
            BlockRecord::header(0, "Top"),
            BlockRecord::header(1, "Sub"),
            BlockRecord::para(2, ["Body"]),
        ]);
        let top = doc.sections()[0];

        assert_eq!(
            node_html(top, true, true),
            "<h1>Top</h1><h2>Sub</h2><p>Body</p>"
        );
        assert_eq!(node_html(top, true, false), "<h1>Top</h1><h2>Sub</h2>");
    }

    #[test]
    fn test_heading_level_clamped() {
        assert_eq!(heading_level(-1), 1);
        assert_eq!(heading_level(0), 1);
        assert_eq!(heading_level(5), 6);
        assert_eq!(heading_level(9), 6);
        assert_eq!(heading_level(i32::MAX), 6);
    }

    #[test]
    fn test_table_html() {
        let mut table = Table::new();
        table.add_header(TableRow::header(vec![
            TableCell::text("A"),
            TableCell::text("B"),
        ]));
        table.add_row(TableRow::full_row(TableCell::text("wide").colspan(2)));

        assert_eq!(
            table_html(&table),
            "<table><th><td>A</td><td>B</td></th><tr><td colspan=\"2\">wide</td></tr></table>"
        );
    }

    #[test]
    fn test_paragraph_cell_html() {
        let data = BlockData::from_record(&BlockRecord::para(0, ["foo", "bar"]));
        assert_eq!(
            cell_html(&TableCell::paragraph(data)),
            "<td><p>foo<br>bar</p></td>"
        );
    }

    #[test]
    fn test_text_is_not_escaped() {
        assert_eq!(cell_html(&TableCell::text("a < b")), "<td>a < b</td>");
    }

    #[test]
    fn test_root_and_block_are_empty() {
        let doc = doc(&[BlockRecord::new("figure")]);
        assert_eq!(node_html(doc.root(), true, true), "");
    }
}
