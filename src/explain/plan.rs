use serde::Deserialize;

use super::row::{RowBuffer, SelectType};
use super::tags::ExtraTag;
use crate::error::{ExplainError, ExplainResult};

/// One plan step as written in a plan dump file. Missing fields stay NULL.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanStep {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub select_type: Option<SelectType>,
    #[serde(default)]
    pub dependent: bool,
    #[serde(default = "default_cacheable")]
    pub cacheable: bool,
    #[serde(default)]
    pub table: Option<String>,
    #[serde(default)]
    pub partitions: Vec<String>,
    #[serde(default, rename = "type")]
    pub join_type: Option<String>,
    #[serde(default)]
    pub possible_keys: Vec<String>,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub key_len: Option<String>,
    #[serde(default, rename = "ref")]
    pub reference: Option<String>,
    #[serde(default)]
    pub rows: Option<i64>,
    #[serde(default)]
    pub filtered: Option<f32>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub extra: Vec<PlanExtra>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanExtra {
    pub tag: ExtraTag,
    #[serde(default)]
    pub data: Option<String>,
}

fn default_cacheable() -> bool { true }

impl PlanStep {
    /// Copy this step into `buf` through its setters.
    pub fn fill(&self, buf: &mut RowBuffer) {
        if let Some(id) = self.id { buf.set_id(id); }
        if let Some(ty) = self.select_type { buf.set_select_type(ty, self.dependent, self.cacheable); }
        if let Some(t) = &self.table { buf.set_table_name(t.as_str()); }
        for p in &self.partitions { buf.push_partition(p.as_str()); }
        if let Some(t) = &self.join_type { buf.set_join_type(t.as_str()); }
        for k in &self.possible_keys { buf.push_possible_key(k.as_str()); }
        if let Some(k) = &self.key { buf.set_key(k.as_str()); }
        if let Some(k) = &self.key_len { buf.set_key_len(k.as_str()); }
        if let Some(r) = &self.reference { buf.set_ref(r.as_str()); }
        if let Some(r) = self.rows { buf.set_rows(r); }
        if let Some(f) = self.filtered { buf.set_filtered(f); }
        if let Some(m) = &self.message { buf.set_message(m.as_str()); }
        for e in &self.extra {
            match &e.data {
                Some(d) => buf.push_extra_with(e.tag, d.as_str()),
                None => buf.push_extra(e.tag),
            };
        }
    }
}

/// Parse a plan dump: a JSON array of steps in output order.
pub fn load_plan(text: &str) -> ExplainResult<Vec<PlanStep>> {
    let steps: Vec<PlanStep> = serde_json::from_str(text)?;
    if let Some(pos) = steps.iter().position(|s| s.extra.iter().any(|e| e.tag == ExtraTag::None)) {
        return Err(ExplainError::input(format!("step {}: tag 'none' cannot appear in Extra", pos + 1)));
    }
    Ok(steps)
}
