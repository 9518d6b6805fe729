use super::cell::Cell;

/// Render headers and rows as a bordered text table, the way a SQL console prints a
/// result set. Numbers are right-aligned, everything else left-aligned.
pub fn render_text(headers: &[&str], rows: &[Vec<Cell>]) -> String {
    let texts: Vec<Vec<String>> = rows.iter().map(|r| r.iter().map(|c| c.to_string()).collect()).collect();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for r in &texts {
        for (i, cell) in r.iter().enumerate().take(widths.len()) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let sep = separator(&widths);
    let mut out = String::new();
    out.push_str(&sep);
    out.push_str(&line(headers.iter().map(|h| (*h, false)), &widths));
    out.push_str(&sep);
    for (r, cells) in texts.iter().zip(rows) {
        let aligned = r.iter().zip(cells).map(|(t, c)| (t.as_str(), c.is_numeric()));
        out.push_str(&line(aligned, &widths));
    }
    out.push_str(&sep);
    out
}

fn separator(widths: &[usize]) -> String {
    let mut s = String::from("+");
    for w in widths {
        s.push_str(&"-".repeat(w + 2));
        s.push('+');
    }
    s.push('\n');
    s
}

fn line<'a, I: Iterator<Item = (&'a str, bool)>>(cells: I, widths: &[usize]) -> String {
    let mut s = String::from("|");
    for ((text, right), w) in cells.zip(widths) {
        if right {
            s.push_str(&format!(" {:>w$} |", text, w = *w));
        } else {
            s.push_str(&format!(" {:<w$} |", text, w = *w));
        }
    }
    s.push('\n');
    s
}
