use super::row::Extra;
use super::tags::ExtraTag;
use crate::error::ExplainResult;

const SEPARATOR: &str = "; ";

/// Assemble the Extra column text from a row's notes, in order.
///
/// Each note contributes its label, then (if it has text) an optional space, an optional
/// bracket pair around the text and, for scanned databases, a singular/plural suffix.
/// Notes are joined with `"; "`. An empty slice yields an empty string.
pub fn compose_extra(extras: &[Extra]) -> ExplainResult<String> {
    let mut buf = String::new();
    buf.try_reserve(64)?;
    for e in extras {
        append(&mut buf, e.tag.label())?;
        if let Some(data) = e.data.as_deref() {
            let policy = e.tag.policy();
            if policy.space_before_data {
                append(&mut buf, " ")?;
            }
            if policy.bracket_data {
                append(&mut buf, "(")?;
            }
            append(&mut buf, data)?;
            if e.tag == ExtraTag::ScannedDatabases {
                append(&mut buf, scanned_databases_suffix(data))?;
            }
            if policy.bracket_data {
                append(&mut buf, ")")?;
            }
        }
        append(&mut buf, SEPARATOR)?;
    }
    if !buf.is_empty() {
        buf.truncate(buf.len() - SEPARATOR.len());
    }
    Ok(buf)
}

fn scanned_databases_suffix(data: &str) -> &'static str {
    if data == "1" { " database" } else { " databases" }
}

fn append(buf: &mut String, s: &str) -> ExplainResult<()> {
    buf.try_reserve(s.len())?;
    buf.push_str(s);
    Ok(())
}
