use serde::Deserialize;

/// `EXPLAIN EXTENDED` bit of the describe mask; shows the filtered column.
pub const DESCRIBE_EXTENDED: u8 = 2;
/// `EXPLAIN PARTITIONS` bit of the describe mask; shows the partitions column.
pub const DESCRIBE_PARTITIONS: u8 = 4;

/// Optional-column visibility for traditional EXPLAIN output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct DisplayFlags {
    pub show_partitions: bool,
    pub show_filtered: bool,
}

impl DisplayFlags {
    pub fn new(show_partitions: bool, show_filtered: bool) -> Self {
        Self { show_partitions, show_filtered }
    }

    pub fn from_describe(bits: u8) -> Self {
        Self {
            show_partitions: bits & DESCRIBE_PARTITIONS != 0,
            show_filtered: bits & DESCRIBE_EXTENDED != 0,
        }
    }

    /// Read `EXPLAIN_PARTITIONS` / `EXPLAIN_FILTERED` from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    pub(crate) fn from_lookup<F: Fn(&str) -> Option<String>>(get: F) -> Self {
        let on = |k: &str| get(k).map(|v| is_truthy(&v)).unwrap_or(false);
        Self { show_partitions: on("EXPLAIN_PARTITIONS"), show_filtered: on("EXPLAIN_FILTERED") }
    }
}

fn is_truthy(v: &str) -> bool {
    let v = v.trim();
    v == "1" || v.eq_ignore_ascii_case("true") || v.eq_ignore_ascii_case("on") || v.eq_ignore_ascii_case("yes")
}
