//! Traditional EXPLAIN row composition.
//! ------------------------------------
//! Column order is fixed: id, select_type, table, [partitions], type, possible_keys,
//! key, key_len, ref, rows, [filtered], Extra. The bracketed columns depend on
//! [`DisplayFlags`].

use tracing::{debug, warn};

use super::cell::Cell;
use super::extra::compose_extra;
use super::options::DisplayFlags;
use super::row::RowBuffer;
use super::sink::RowSink;
use crate::error::{ExplainError, ExplainResult};

/// Column names for the header row, filtered by the same flags as the data rows.
pub fn explain_columns(flags: &DisplayFlags) -> Vec<&'static str> {
    let mut cols = Vec::with_capacity(12);
    cols.extend(["id", "select_type", "table"]);
    if flags.show_partitions {
        cols.push("partitions");
    }
    cols.extend(["type", "possible_keys", "key", "key_len", "ref", "rows"]);
    if flags.show_filtered {
        cols.push("filtered");
    }
    cols.push("Extra");
    cols
}

/// Compose the output row for `buf` without touching it.
pub fn build_row(buf: &RowBuffer, flags: &DisplayFlags) -> ExplainResult<Vec<Cell>> {
    let mut row = Vec::with_capacity(12);
    row.push(Cell::from(buf.id));
    row.push(select_type_cell(buf));
    row.push(Cell::from(buf.table_name.as_ref()));
    if flags.show_partitions {
        row.push(list_cell(&buf.partitions)?);
    }
    row.push(Cell::from(buf.join_type.as_ref()));
    row.push(list_cell(&buf.possible_keys)?);
    row.push(Cell::from(buf.key.as_ref()));
    row.push(Cell::from(buf.key_len.as_ref()));
    row.push(Cell::from(buf.reference.as_ref()));
    row.push(Cell::from(buf.rows));
    if flags.show_filtered {
        row.push(Cell::from(buf.filtered));
    }
    row.push(extra_or_message_cell(buf)?);
    Ok(row)
}

/// Compose the output row for `buf`, then clear it for the next plan step.
pub fn compose_row(buf: &mut RowBuffer, flags: &DisplayFlags) -> ExplainResult<Vec<Cell>> {
    let row = build_row(buf, flags)?;
    buf.clear();
    Ok(row)
}

fn select_type_cell(buf: &RowBuffer) -> Cell {
    let Some(ty) = buf.select_type else { return Cell::Null };
    let prefix = if buf.is_dependent {
        "DEPENDENT "
    } else if !buf.is_cacheable {
        "UNCACHEABLE "
    } else {
        ""
    };
    Cell::Str(format!("{}{}", prefix, ty.as_str()))
}

fn list_cell(items: &[String]) -> ExplainResult<Cell> {
    if items.is_empty() {
        return Ok(Cell::Null);
    }
    let mut s = String::new();
    s.try_reserve(items.iter().map(|i| i.len() + 1).sum())?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 { s.push(','); }
        s.push_str(item);
    }
    Ok(Cell::Str(s))
}

// Notes win over the message when both are set.
fn extra_or_message_cell(buf: &RowBuffer) -> ExplainResult<Cell> {
    if !buf.extra.is_empty() {
        return Ok(Cell::Str(compose_extra(&buf.extra)?));
    }
    Ok(Cell::from(buf.message.as_ref()))
}

/// One traditional EXPLAIN operation: owns the reusable row buffer and the output sink.
pub struct TraditionalExplain<S: RowSink> {
    sink: S,
    flags: DisplayFlags,
    entry: RowBuffer,
    headers_sent: bool,
    failed: bool,
    rows_sent: usize,
}

impl<S: RowSink> TraditionalExplain<S> {
    pub fn new(sink: S, flags: DisplayFlags) -> Self {
        Self { sink, flags, entry: RowBuffer::new(), headers_sent: false, failed: false, rows_sent: 0 }
    }

    pub fn flags(&self) -> &DisplayFlags { &self.flags }
    pub fn rows_sent(&self) -> usize { self.rows_sent }

    /// Send the column header list. Only the first call reaches the sink.
    pub fn send_headers(&mut self) -> ExplainResult<()> {
        if self.failed {
            return Err(ExplainError::Aborted);
        }
        if self.headers_sent {
            debug!(target: "explain::traditional", "headers already sent; skipping");
            return Ok(());
        }
        let cols = explain_columns(&self.flags);
        if let Err(e) = self.sink.send_headers(&cols) {
            warn!(target: "explain::traditional", "sink rejected headers: {}", e);
            self.failed = true;
            return Err(e);
        }
        self.headers_sent = true;
        Ok(())
    }

    /// Buffer for the plan step currently being described.
    pub fn entry_mut(&mut self) -> &mut RowBuffer { &mut self.entry }

    /// Compose the buffered step, send it and clear the buffer.
    /// On failure nothing is sent and the buffer keeps its contents.
    pub fn flush_entry(&mut self) -> ExplainResult<()> {
        if self.failed {
            return Err(ExplainError::Aborted);
        }
        let row = build_row(&self.entry, &self.flags)?;
        debug!(target: "explain::traditional", "row {}: {} cells, {} extra notes", self.rows_sent + 1, row.len(), self.entry.extra.len());
        if let Err(e) = self.sink.send_row(row) {
            warn!(target: "explain::traditional", "sink rejected row {}: {}", self.rows_sent + 1, e);
            self.failed = true;
            return Err(e);
        }
        self.rows_sent += 1;
        self.entry.clear();
        Ok(())
    }

    pub fn into_sink(self) -> S { self.sink }
}
