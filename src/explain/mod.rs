//! Traditional EXPLAIN: row buffer, Extra clause assembly and row composition.

pub mod tags;
pub mod row;
pub mod cell;
pub mod extra;
pub mod options;
pub mod traditional;
pub mod sink;
pub mod plan;
pub mod render_text;

pub use tags::{ExtraPolicy, ExtraTag};
pub use row::{Extra, RowBuffer, SelectType};
pub use cell::Cell;
pub use extra::compose_extra;
pub use options::DisplayFlags;
pub use traditional::{build_row, compose_row, explain_columns, TraditionalExplain};
pub use sink::{RowSink, VecSink};
pub use plan::{load_plan, PlanExtra, PlanStep};
pub use render_text::render_text;

#[cfg(test)]
mod traditional_tests;
#[cfg(test)]
mod render_text_tests;
