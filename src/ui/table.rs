//! Column-aligned text tables for terminal output.

use super::RenderOptions;
use super::colors::{header_fg, text_fg};
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

/// A table with a header row and string cells.
///
/// Column widths follow the widest cell by display width, so names with
/// diacritics line up.
#[derive(Debug, Clone, Default)]
pub struct TextTable {
    headers: Vec<String>,
    alignments: Vec<Alignment>,
    rows: Vec<Vec<String>>,
    /// Per-row foreground color override
    row_colors: Vec<Option<Color>>,
}

impl TextTable {
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        let alignments = vec![Alignment::Left; headers.len()];
        TextTable {
            headers,
            alignments,
            ..TextTable::default()
        }
    }

    /// Right-aligns the given columns.
    pub fn align_right(mut self, columns: &[usize]) -> Self {
        for &column in columns {
            if let Some(alignment) = self.alignments.get_mut(column) {
                *alignment = Alignment::Right;
            }
        }
        self
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.add_colored_row(row, None);
    }

    pub fn add_colored_row(&mut self, mut row: Vec<String>, color: Option<Color>) {
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
        self.row_colors.push(color);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column_widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .map(|row| row[i].width())
                    .chain(std::iter::once(header.width()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    fn format_line(&self, cells: &[String], widths: &[usize]) -> String {
        cells
            .iter()
            .zip(widths)
            .zip(&self.alignments)
            .map(|((cell, &width), alignment)| {
                let padding = " ".repeat(width.saturating_sub(cell.width()));
                match alignment {
                    Alignment::Left => format!("{cell}{padding}"),
                    Alignment::Right => format!("{padding}{cell}"),
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    }

    pub fn render<W: Write>(&self, out: &mut W, options: RenderOptions) -> io::Result<()> {
        let widths = self.column_widths();
        let total = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);

        write_colored(out, &self.format_line(&self.headers, &widths), header_fg(), options)?;
        writeln!(out, "{}", "─".repeat(total))?;
        for (row, color) in self.rows.iter().zip(&self.row_colors) {
            let line = self.format_line(row, &widths);
            write_colored(out, &line, color.unwrap_or_else(text_fg), options)?;
        }
        Ok(())
    }
}

/// Writes one line, colored only when the options allow it.
pub fn write_colored<W: Write>(
    out: &mut W,
    text: &str,
    color: Color,
    options: RenderOptions,
) -> io::Result<()> {
    if options.color {
        queue!(out, SetForegroundColor(color), Print(text), ResetColor)?;
        writeln!(out)
    } else {
        writeln!(out, "{text}")
    }
}
