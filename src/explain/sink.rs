use super::cell::Cell;
use crate::error::ExplainResult;

/// Destination for composed EXPLAIN rows. Delivery is synchronous; an error stops the
/// explain operation.
pub trait RowSink {
    fn send_headers(&mut self, names: &[&'static str]) -> ExplainResult<()>;
    fn send_row(&mut self, row: Vec<Cell>) -> ExplainResult<()>;
}

/// Collects headers and rows in memory.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct VecSink {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<Cell>>,
}

impl VecSink {
    pub fn new() -> Self { Self::default() }
}

impl RowSink for VecSink {
    fn send_headers(&mut self, names: &[&'static str]) -> ExplainResult<()> {
        self.headers = names.to_vec();
        Ok(())
    }

    fn send_row(&mut self, row: Vec<Cell>) -> ExplainResult<()> {
        self.rows.push(row);
        Ok(())
    }
}

impl<S: RowSink + ?Sized> RowSink for &mut S {
    fn send_headers(&mut self, names: &[&'static str]) -> ExplainResult<()> { (**self).send_headers(names) }
    fn send_row(&mut self, row: Vec<Cell>) -> ExplainResult<()> { (**self).send_row(row) }
}
