use std::fmt::{Display, Formatter};

/// One typed output value of an EXPLAIN row.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Null,
    UInt(u64),
    Int(i64),
    /// Always printed with two fractional digits.
    Float(f64),
    Str(String),
}

impl Cell {
    pub fn is_null(&self) -> bool { matches!(self, Cell::Null) }

    /// Numbers are right-aligned by text renderers.
    pub fn is_numeric(&self) -> bool { matches!(self, Cell::UInt(_) | Cell::Int(_) | Cell::Float(_)) }

    pub fn as_str(&self) -> Option<&str> {
        match self { Cell::Str(s) => Some(s.as_str()), _ => None }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Null => f.write_str("NULL"),
            Cell::UInt(v) => write!(f, "{}", v),
            Cell::Int(v) => write!(f, "{}", v),
            Cell::Float(v) => write!(f, "{:.2}", v),
            Cell::Str(s) => f.write_str(s),
        }
    }
}

impl From<Option<u32>> for Cell {
    fn from(v: Option<u32>) -> Self { v.map_or(Cell::Null, |v| Cell::UInt(v as u64)) }
}

impl From<Option<i64>> for Cell {
    fn from(v: Option<i64>) -> Self { v.map_or(Cell::Null, Cell::Int) }
}

impl From<Option<f32>> for Cell {
    fn from(v: Option<f32>) -> Self { v.map_or(Cell::Null, |v| Cell::Float(v as f64)) }
}

impl From<Option<&String>> for Cell {
    fn from(v: Option<&String>) -> Self { v.map_or(Cell::Null, |s| Cell::Str(s.clone())) }
}
