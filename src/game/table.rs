//! Help Table Rendering
//!
//! Draws a [`WinTable`] as a box-drawn text grid. Row headers are the
//! move being played; column headers are the move it is played against.

use std::fmt::Write as _;

use crate::game::resolver::WinTable;

/// Top-left header cell.
pub const CORNER_LABEL: &str = "v PC\\User >";

/// Render the table, one line per border or row, with a trailing newline.
pub fn render(table: &WinTable) -> String {
    let mut header: Vec<&str> = vec![CORNER_LABEL];
    header.extend(table.moves().iter());

    let rows: Vec<Vec<&str>> = table
        .rows()
        .map(|(name, cells)| {
            let mut row = vec![name];
            row.extend(cells.iter().map(|c| c.label()));
            row
        })
        .collect();

    let widths: Vec<usize> = (0..header.len())
        .map(|col| {
            std::iter::once(&header)
                .chain(rows.iter())
                .map(|row| row[col].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    border(&mut out, &widths, '┌', '┬', '┐');
    line(&mut out, &widths, &header);
    border(&mut out, &widths, '├', '┼', '┤');
    for row in &rows {
        line(&mut out, &widths, row);
    }
    border(&mut out, &widths, '└', '┴', '┘');
    out
}

fn border(out: &mut String, widths: &[usize], left: char, mid: char, right: char) {
    out.push(left);
    for (i, w) in widths.iter().enumerate() {
        if i > 0 {
            out.push(mid);
        }
        out.extend(std::iter::repeat('─').take(w + 2));
    }
    out.push(right);
    out.push('\n');
}

fn line(out: &mut String, widths: &[usize], cells: &[&str]) {
    out.push('│');
    for (cell, w) in cells.iter().zip(widths) {
        let pad = w - cell.chars().count();
        // Writing to a String cannot fail.
        let _ = write!(out, " {}{} │", cell, " ".repeat(pad));
    }
    out.push('\n');
}
