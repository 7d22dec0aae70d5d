//! Plain-text rendering of query results.

use std::io::{self, Write};

use quarry_core::product::Product;

const HEADERS: [&str; 5] = ["ID", "NAME", "CATEGORY", "PRICE", "STOCK"];

/// Write `products` as an aligned table. Returns the number of rows written.
pub fn write_table<W: Write>(out: &mut W, products: &[&Product]) -> io::Result<usize> {
    let rows: Vec<[String; 5]> = products
        .iter()
        .map(|p| {
            [
                p.id.to_string(),
                p.name.clone(),
                p.category.clone(),
                p.price.to_string(),
                p.stock.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    write_row(out, &HEADERS.map(String::from), &widths)?;
    for row in &rows {
        write_row(out, row, &widths)?;
    }
    Ok(rows.len())
}

fn write_row<W: Write>(out: &mut W, cells: &[String; 5], widths: &[usize; 5]) -> io::Result<()> {
    let mut line = String::new();
    for (i, (cell, w)) in cells.iter().zip(widths.iter()).enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        let pad = w.saturating_sub(cell.chars().count());
        // numbers right-aligned
        if matches!(i, 0 | 3 | 4) {
            line.extend(std::iter::repeat(' ').take(pad));
            line.push_str(cell);
        } else {
            line.push_str(cell);
            line.extend(std::iter::repeat(' ').take(pad));
        }
    }
    writeln!(out, "{}", line.trim_end())
}

/// One record per line, or `none`.
pub fn write_optional<W: Write>(out: &mut W, product: Option<&Product>) -> io::Result<()> {
    match product {
        Some(p) => write_table(out, &[p]).map(|_| ()),
        None => writeln!(out, "none"),
    }
}
