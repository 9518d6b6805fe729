//! Column buffer for one plan step.
//!
//! The plan walker fills a [`RowBuffer`] field by field; the row composer reads it
//! and clears it so the same buffer serves the next step. Every column is an
//! `Option` (or a possibly-empty list): absence renders as NULL, never a 0 or "".

use serde::Deserialize;

use super::tags::ExtraTag;

/// Role of the query block a plan step belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectType {
    None,
    Primary,
    Simple,
    Derived,
    Subquery,
    Union,
    UnionResult,
    Materialized,
}

impl SelectType {
    pub fn as_str(self) -> &'static str {
        match self {
            SelectType::None => "NONE",
            SelectType::Primary => "PRIMARY",
            SelectType::Simple => "SIMPLE",
            SelectType::Derived => "DERIVED",
            SelectType::Subquery => "SUBQUERY",
            SelectType::Union => "UNION",
            SelectType::UnionResult => "UNION RESULT",
            SelectType::Materialized => "MATERIALIZED",
        }
    }
}

/// One Extra-column note: a tag plus optional text such as a join algorithm or index map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extra {
    pub tag: ExtraTag,
    pub data: Option<String>,
}

impl Extra {
    pub fn new(tag: ExtraTag) -> Self {
        debug_assert!(tag != ExtraTag::None, "ExtraTag::None cannot be attached to a row");
        Self { tag, data: None }
    }

    pub fn with_data(tag: ExtraTag, data: impl Into<String>) -> Self {
        debug_assert!(tag != ExtraTag::None, "ExtraTag::None cannot be attached to a row");
        Self { tag, data: Some(data.into()) }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowBuffer {
    pub id: Option<u32>,
    pub select_type: Option<SelectType>,
    pub is_dependent: bool,
    pub is_cacheable: bool,
    pub table_name: Option<String>,
    pub partitions: Vec<String>,
    pub join_type: Option<String>,
    pub possible_keys: Vec<String>,
    pub key: Option<String>,
    pub key_len: Option<String>,
    pub reference: Option<String>,
    pub rows: Option<i64>,
    pub filtered: Option<f32>,
    pub message: Option<String>,
    pub extra: Vec<Extra>,
}

impl Default for RowBuffer {
    fn default() -> Self {
        Self {
            id: None,
            select_type: None,
            is_dependent: false,
            is_cacheable: true,
            table_name: None,
            partitions: Vec::new(),
            join_type: None,
            possible_keys: Vec::new(),
            key: None,
            key_len: None,
            reference: None,
            rows: None,
            filtered: None,
            message: None,
            extra: Vec::new(),
        }
    }
}

impl RowBuffer {
    pub fn new() -> Self { Self::default() }

    pub fn set_id(&mut self, id: u32) -> &mut Self { self.id = Some(id); self }

    pub fn set_select_type(&mut self, ty: SelectType, dependent: bool, cacheable: bool) -> &mut Self {
        self.select_type = Some(ty);
        self.is_dependent = dependent;
        self.is_cacheable = cacheable;
        self
    }

    pub fn set_table_name(&mut self, name: impl Into<String>) -> &mut Self { self.table_name = Some(name.into()); self }
    pub fn push_partition(&mut self, name: impl Into<String>) -> &mut Self { self.partitions.push(name.into()); self }
    pub fn set_join_type(&mut self, ty: impl Into<String>) -> &mut Self { self.join_type = Some(ty.into()); self }
    pub fn push_possible_key(&mut self, key: impl Into<String>) -> &mut Self { self.possible_keys.push(key.into()); self }
    pub fn set_key(&mut self, key: impl Into<String>) -> &mut Self { self.key = Some(key.into()); self }
    pub fn set_key_len(&mut self, len: impl Into<String>) -> &mut Self { self.key_len = Some(len.into()); self }
    pub fn set_ref(&mut self, r: impl Into<String>) -> &mut Self { self.reference = Some(r.into()); self }
    pub fn set_rows(&mut self, rows: i64) -> &mut Self { self.rows = Some(rows); self }
    pub fn set_filtered(&mut self, pct: f32) -> &mut Self { self.filtered = Some(pct); self }
    pub fn set_message(&mut self, msg: impl Into<String>) -> &mut Self { self.message = Some(msg.into()); self }

    pub fn push_extra(&mut self, tag: ExtraTag) -> &mut Self {
        self.extra.push(Extra::new(tag));
        self
    }

    pub fn push_extra_with(&mut self, tag: ExtraTag, data: impl Into<String>) -> &mut Self {
        self.extra.push(Extra::with_data(tag, data));
        self
    }

    /// True when no column has been filled since construction or the last `clear()`.
    pub fn is_empty(&self) -> bool {
        *self == RowBuffer::default()
    }

    /// Reset every column to empty. List storage keeps its capacity for the next step.
    pub fn clear(&mut self) {
        self.id = None;
        self.select_type = None;
        self.is_dependent = false;
        self.is_cacheable = true;
        self.table_name = None;
        self.partitions.clear();
        self.join_type = None;
        self.possible_keys.clear();
        self.key = None;
        self.key_len = None;
        self.reference = None;
        self.rows = None;
        self.filtered = None;
        self.message = None;
        self.extra.clear();
    }
}
