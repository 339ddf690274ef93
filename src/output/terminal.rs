//! Terminal table renderer.
//!
//! Rendering is the second phase of a listing: it needs every [`Row`] up
//! front, because each column's width is the longest cell in that column
//! across the whole set. Widths are measured on unpadded, uncoloured text;
//! colour codes are added after padding so they never count towards width.

use crate::columns::{Align, Column, Row};
use crate::output::palette::{paint, role_for};

/// Separator between cells, also printed before the first cell of a row.
pub const MARGIN: &str = "  ";

/// Controls how rows are turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub full: bool,
    pub color: bool,
}

/// Longest cell length per column for the current listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnWidths([usize; Column::COUNT]);

impl ColumnWidths {
    /// One pass over every cell of every row; columns are measured
    /// independently.
    pub fn measure(rows: &[Row]) -> Self {
        let mut widths = [0usize; Column::COUNT];
        for row in rows {
            for (column, text) in row.cells.iter() {
                let len = text.chars().count();
                if len > widths[column.index()] {
                    widths[column.index()] = len;
                }
            }
        }
        Self(widths)
    }

    pub fn get(&self, column: Column) -> usize {
        self.0[column.index()]
    }
}

/// Pads `text` to `width` characters. Empty text becomes a single unpadded
/// space whatever the alignment.
pub fn pad_cell(text: &str, width: usize, align: Align) -> String {
    if text.is_empty() {
        return " ".to_string();
    }
    match align {
        Align::Left => format!("{:<width$}", text),
        Align::Right => format!("{:>width$}", text),
    }
}

fn format_cell(row: &Row, column: Column, widths: &ColumnWidths, opts: &RenderOptions) -> String {
    let padded = pad_cell(&row.cells[column], widths.get(column), column.align());
    if opts.color {
        paint(&padded, role_for(column, row.info.entry_type))
    } else {
        padded
    }
}

/// Renders one row: margin, then the displayed cells joined by the margin.
pub fn render_row(row: &Row, widths: &ColumnWidths, opts: &RenderOptions) -> String {
    let cells: Vec<String> = Column::displayed(opts.full)
        .map(|column| format_cell(row, column, widths, opts))
        .collect();
    format!("{}{}", MARGIN, cells.join(MARGIN))
}

/// Renders all rows, newline separated. An empty row set renders as an
/// empty string.
pub fn render_rows(rows: &[Row], opts: &RenderOptions) -> String {
    let widths = ColumnWidths::measure(rows);
    rows.iter()
        .map(|row| render_row(row, &widths, opts))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Surrounds the table body with the leading and trailing blank lines
/// handed to the pager.
pub fn wrap_blob(body: &str) -> String {
    format!("\n{}\n\n", body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_cell_alignment() {
        assert_eq!(pad_cell("ab", 5, Align::Left), "ab   ");
        assert_eq!(pad_cell("ab", 5, Align::Right), "   ab");
        assert_eq!(pad_cell("abcdef", 3, Align::Left), "abcdef");
    }

    #[test]
    fn test_pad_cell_empty_short_circuits() {
        assert_eq!(pad_cell("", 10, Align::Left), " ");
        assert_eq!(pad_cell("", 10, Align::Right), " ");
    }

    #[test]
    fn test_pad_cell_counts_characters() {
        assert_eq!(pad_cell("é", 3, Align::Left), "é  ");
    }

    #[test]
    fn test_wrap_blob() {
        assert_eq!(wrap_blob(""), "\n\n\n");
        assert_eq!(wrap_blob("  x"), "\n  x\n\n");
    }

    #[test]
    fn test_empty_rows_render_empty() {
        let opts = RenderOptions {
            full: true,
            color: true,
        };
        assert_eq!(render_rows(&[], &opts), "");
        assert_eq!(ColumnWidths::measure(&[]), ColumnWidths::default());
    }
}
