use super::cell::Cell;
use super::options::DisplayFlags;
use super::row::{RowBuffer, SelectType};
use super::sink::{RowSink, VecSink};
use super::tags::ExtraTag;
use super::traditional::*;
use crate::error::{ExplainError, ExplainResult};

fn s(v: &str) -> Cell { Cell::Str(v.to_string()) }

fn simple_scan() -> RowBuffer {
    let mut b = RowBuffer::new();
    b.set_id(1)
        .set_select_type(SelectType::Simple, false, true)
        .set_table_name("t1")
        .set_join_type("ALL")
        .set_rows(100)
        .push_extra(ExtraTag::UsingWhere)
        .push_extra(ExtraTag::UsingIndex);
    b
}

#[test]
fn simple_scan_row() {
    let mut b = simple_scan();
    let row = compose_row(&mut b, &DisplayFlags::default()).unwrap();
    assert_eq!(
        row,
        vec![
            Cell::UInt(1),
            s("SIMPLE"),
            s("t1"),
            s("ALL"),
            Cell::Null,
            Cell::Null,
            Cell::Null,
            Cell::Null,
            Cell::Int(100),
            s("Using where; Using index"),
        ]
    );
    assert!(b.is_empty());
}

#[test]
fn optional_columns_follow_flags() {
    let b = simple_scan();
    for (parts, filt) in [(false, false), (true, false), (false, true), (true, true)] {
        let flags = DisplayFlags::new(parts, filt);
        let row = build_row(&b, &flags).unwrap();
        let cols = explain_columns(&flags);
        assert_eq!(row.len(), cols.len());
        assert_eq!(row.len(), 10 + parts as usize + filt as usize);
        assert_eq!(cols.contains(&"partitions"), parts);
        assert_eq!(cols.contains(&"filtered"), filt);
        assert_eq!(*cols.last().unwrap(), "Extra");
    }
}

#[test]
fn header_order_with_all_columns() {
    assert_eq!(
        explain_columns(&DisplayFlags::new(true, true)),
        vec!["id", "select_type", "table", "partitions", "type", "possible_keys", "key", "key_len", "ref", "rows", "filtered", "Extra"]
    );
}

#[test]
fn partitions_and_keys_are_comma_joined() {
    let mut b = simple_scan();
    b.push_partition("p0").push_partition("p1").push_possible_key("a").push_possible_key("b").set_filtered(33.33);
    let row = build_row(&b, &DisplayFlags::new(true, true)).unwrap();
    assert_eq!(row[3], s("p0,p1"));
    assert_eq!(row[5], s("a,b"));
    assert_eq!(row[10].to_string(), "33.33");
    assert_eq!(row[11], s("Using where; Using index"));
}

#[test]
fn filtered_renders_two_decimals() {
    let mut b = RowBuffer::new();
    b.set_filtered(100.0);
    let row = build_row(&b, &DisplayFlags::new(false, true)).unwrap();
    assert_eq!(row[9], Cell::Float(100.0));
    assert_eq!(row[9].to_string(), "100.00");
}

#[test]
fn select_type_prefixes() {
    let cell = |dep, cache| {
        let mut b = RowBuffer::new();
        b.set_select_type(SelectType::Subquery, dep, cache);
        build_row(&b, &DisplayFlags::default()).unwrap().remove(1)
    };
    assert_eq!(cell(true, true), s("DEPENDENT SUBQUERY"));
    assert_eq!(cell(true, false), s("DEPENDENT SUBQUERY"));
    assert_eq!(cell(false, false), s("UNCACHEABLE SUBQUERY"));
    assert_eq!(cell(false, true), s("SUBQUERY"));
}

#[test]
fn extra_cell_precedence() {
    let flags = DisplayFlags::default();
    let mut b = RowBuffer::new();
    assert_eq!(build_row(&b, &flags).unwrap().pop(), Some(Cell::Null));

    b.set_message("Impossible WHERE");
    assert_eq!(build_row(&b, &flags).unwrap().pop(), Some(s("Impossible WHERE")));

    b.push_extra_with(ExtraTag::ScannedDatabases, "1");
    assert_eq!(build_row(&b, &flags).unwrap().pop(), Some(s("Scanned 1 database")));
}

#[test]
fn cleared_buffer_composes_all_null() {
    let mut b = simple_scan();
    b.clear();
    let row = compose_row(&mut b, &DisplayFlags::new(true, true)).unwrap();
    assert_eq!(row.len(), 12);
    assert!(row.iter().all(Cell::is_null));
}

struct FailingSink {
    accept: usize,
    rows: usize,
}

impl RowSink for FailingSink {
    fn send_headers(&mut self, _names: &[&'static str]) -> ExplainResult<()> { Ok(()) }
    fn send_row(&mut self, _row: Vec<Cell>) -> ExplainResult<()> {
        if self.rows == self.accept {
            return Err(ExplainError::sink("client closed"));
        }
        self.rows += 1;
        Ok(())
    }
}

#[test]
fn session_sends_headers_once_and_rows_in_order() {
    let mut ex = TraditionalExplain::new(VecSink::new(), DisplayFlags::default());
    ex.send_headers().unwrap();
    ex.send_headers().unwrap();
    ex.entry_mut().set_id(1).set_select_type(SelectType::Primary, false, true).set_table_name("t1");
    ex.flush_entry().unwrap();
    assert!(ex.entry_mut().is_empty());
    ex.entry_mut().set_id(2).set_select_type(SelectType::Subquery, true, true).set_message("No tables used");
    ex.flush_entry().unwrap();
    assert_eq!(ex.rows_sent(), 2);

    let sink = ex.into_sink();
    assert_eq!(sink.headers.len(), 10);
    assert_eq!(sink.rows.len(), 2);
    assert_eq!(sink.rows[0][2], s("t1"));
    assert_eq!(sink.rows[1][1], s("DEPENDENT SUBQUERY"));
    assert_eq!(sink.rows[1][9], s("No tables used"));
}

#[test]
fn sink_failure_aborts_later_rows_and_keeps_buffer() {
    let mut ex = TraditionalExplain::new(FailingSink { accept: 1, rows: 0 }, DisplayFlags::default());
    ex.send_headers().unwrap();
    ex.entry_mut().set_id(1);
    ex.flush_entry().unwrap();
    ex.entry_mut().set_id(2);
    let err = ex.flush_entry().unwrap_err();
    assert_eq!(err, ExplainError::sink("client closed"));
    assert_eq!(ex.entry_mut().id, Some(2));
    assert_eq!(ex.flush_entry().unwrap_err(), ExplainError::Aborted);
    assert_eq!(ex.send_headers().unwrap_err(), ExplainError::Aborted);
    assert_eq!(ex.rows_sent(), 1);
}
