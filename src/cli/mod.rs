pub mod outputformatter;

pub use outputformatter::{fit_table_to_width, print_explain, rows_footer};
