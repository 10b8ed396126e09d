//! Re-rendering ASCII output as HTML must match rendering HTML directly.

use pdfstitch::render::{format_table, serialize_elements, TableRetrofitter};
use pdfstitch::{
    convert_ascii_tables_to_html, CellGrid, Element, RenderOptions, SummaryRowRule, TableFormat,
};

fn grids() -> Vec<CellGrid> {
    vec![
        CellGrid::from_strings([["Name", "Age"], ["Bob", "25"]]),
        CellGrid::from_rows(vec![
            vec![Some("항목".into()), Some("금액".into()), Some("비고".into())],
            vec![Some("월세".into()), None],
            vec![Some("  관리비 ".into())],
        ]),
        CellGrid::from_rows(vec![vec![None, None], vec![Some("x".into()), None]]),
        CellGrid::from_strings([["only"]]),
        CellGrid::from_rows(vec![
            vec![Some("a".into()), Some("b".into()), Some("c".into())],
            vec![Some("합계".into()), Some("9".into())],
        ]),
        CellGrid::from_rows(vec![
            vec![Some("구분".into()), Some("1월".into()), Some("2월".into())],
            vec![Some("소계".into())],
            vec![Some("계".into()), None],
        ]),
        CellGrid::from_rows(vec![
            vec![Some("a  b".into()), Some("c".into())],
            vec![],
            vec![Some("d".into()), Some("e".into()), Some("f".into()), Some("g".into())],
        ]),
    ]
}

fn document(grid: &CellGrid) -> Vec<Element> {
    vec![
        Element::PageMarker(1),
        Element::text("Before the table"),
        Element::Table(grid.clone()),
        Element::text("After the table"),
    ]
}

#[test]
fn test_retrofit_matches_direct_html_table() {
    let options = RenderOptions::default();

    for grid in grids() {
        let ascii = format_table(&grid, TableFormat::Ascii, &options);
        let text = format!("[TABLE START]\n{}\n[TABLE END]", ascii);

        let expected = format!(
            "\n[TABLE START]\n{}\n[TABLE END]\n",
            format_table(&grid, TableFormat::Html, &options)
        );
        assert_eq!(convert_ascii_tables_to_html(&text), expected, "{:?}", grid);
    }
}

#[test]
fn test_retrofit_matches_direct_html_document() {
    let ascii_options = RenderOptions::new().with_table_format(TableFormat::Ascii);
    let html_options = RenderOptions::new().with_table_format(TableFormat::Html);

    for grid in grids() {
        let elements = document(&grid);
        let ascii_text = serialize_elements(&elements, &ascii_options);
        let html_text = serialize_elements(&elements, &html_options);

        // The replacement carries its own line breaks around the delimiters
        let expected = html_text
            .replace("\n[TABLE START]", "\n\n[TABLE START]")
            .replace("[TABLE END]\n", "[TABLE END]\n\n");

        assert_eq!(convert_ascii_tables_to_html(&ascii_text), expected, "{:?}", grid);
    }
}

#[test]
fn test_retrofit_summary_rows() {
    let ascii_text = "[TABLE START]\n\
+------+-----+-----+
| 구분 | 1월 | 2월 |
+------+-----+-----+
| 합계 | 300 |     |
+------+-----+-----+
[TABLE END]";

    let out = convert_ascii_tables_to_html(ascii_text);
    // The blank trailing cell reads as padding and lands after the label
    assert!(out.contains("    <td>합계</td>\n    <td></td>\n    <td>300</td>"));
}

#[test]
fn test_full_width_summary_row_with_blank_tail_shifts() {
    // ASCII cannot tell a real blank last cell from padding
    let grid = CellGrid::from_strings([["a", "b", "c"], ["합계", "9", ""]]);
    let options = RenderOptions::default();
    let ascii = format_table(&grid, TableFormat::Ascii, &options);
    let text = format!("[TABLE START]\n{}\n[TABLE END]", ascii);

    let direct = format_table(&grid, TableFormat::Html, &options);
    let retrofitted = convert_ascii_tables_to_html(&text);

    assert!(direct.contains("    <td>합계</td>\n    <td>9</td>\n    <td></td>"));
    assert!(retrofitted.contains("    <td>합계</td>\n    <td></td>\n    <td>9</td>"));
}

#[test]
fn test_retrofit_with_custom_options() {
    let retrofitter = TableRetrofitter::with_options(
        RenderOptions::new()
            .with_table_format(TableFormat::Ascii)
            .with_summary_rule(SummaryRowRule::Disabled),
    );
    let text = "[TABLE START]\n+----+\n| ok |\n+----+\n[TABLE END]";

    let out = retrofitter.convert(text);
    assert!(out.contains("<table border='1'>"));
    assert!(out.contains("<th>ok</th>"));
}
