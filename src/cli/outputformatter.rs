use terminal_size::{Width, Height, terminal_size};

use crate::explain::{render_text, Cell};

// Print an EXPLAIN result as a table sized to the terminal, followed by a row-count footer.
pub fn print_explain(headers: &[&str], rows: &[Vec<Cell>]) {
    let termw = get_terminal_width();
    crate::tprintln!("[cli.outputformatter] detected terminal width={} columns", termw);
    print!("{}", fit_table_to_width(&render_text(headers, rows), termw));
    println!("{}", rows_footer(rows.len()));
}

pub fn rows_footer(n: usize) -> String {
    match n {
        0 => "Empty set".to_string(),
        1 => "1 row in set".to_string(),
        n => format!("{} rows in set", n),
    }
}

/// Elide the middle of every line wider than `maxw`, keeping both borders visible.
pub fn fit_table_to_width(table: &str, maxw: usize) -> String {
    let mut out = String::with_capacity(table.len());
    for line in table.lines() {
        out.push_str(&fit_line_to_width(line, maxw));
        out.push('\n');
    }
    out
}

fn get_terminal_width() -> usize {
    if let Some((Width(w), Height(_h))) = terminal_size() {
        return (w as usize).saturating_sub(4).max(20);
    }
    80
}

fn fit_line_to_width(s: &str, maxw: usize) -> String {
    let vlen = s.chars().count();
    if vlen <= maxw { return s.to_string(); }
    if maxw <= 3 { return "…".repeat(maxw.min(1)); }
    let budget = maxw - 1;
    let front_keep = budget / 2;
    let back_keep = budget - front_keep;
    let front: String = s.chars().take(front_keep).collect();
    let back: String = s.chars().skip(vlen - back_keep).collect();
    format!("{}…{}", front, back)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_wording() {
        assert_eq!(rows_footer(0), "Empty set");
        assert_eq!(rows_footer(1), "1 row in set");
        assert_eq!(rows_footer(4), "4 rows in set");
    }

    #[test]
    fn narrow_lines_are_untouched() {
        let t = "+----+\n| id |\n+----+\n";
        assert_eq!(fit_table_to_width(t, 80), t);
    }

    #[test]
    fn wide_lines_keep_both_ends() {
        let out = fit_line_to_width("| abcdefghijklmnopqrstuvwxyz |", 11);
        assert_eq!(out.chars().count(), 11);
        assert!(out.starts_with("| abc"));
        assert!(out.ends_with("xyz |"));
        assert!(out.contains('…'));
    }
}
