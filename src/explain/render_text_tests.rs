use super::cell::Cell;
use super::render_text::render_text;

#[test]
fn renders_bordered_table() {
    let headers = ["id", "table", "Extra"];
    let rows = vec![
        vec![Cell::UInt(1), Cell::Str("t1".into()), Cell::Null],
        vec![Cell::UInt(10), Cell::Null, Cell::Str("Using where".into())],
    ];
    let out = render_text(&headers, &rows);
    let expected = "\
+----+-------+-------------+
| id | table | Extra       |
+----+-------+-------------+
|  1 | t1    | NULL        |
| 10 | NULL  | Using where |
+----+-------+-------------+
";
    assert_eq!(out, expected);
}

#[test]
fn headers_only_when_no_rows() {
    let out = render_text(&["id"], &[]);
    assert_eq!(out, "+----+\n| id |\n+----+\n+----+\n");
}
