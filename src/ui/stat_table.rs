use super::RenderOptions;
use super::colors::{caption_fg, text_fg};
use super::table::write_colored;
use crossterm::queue;
use crossterm::style::{Print, ResetColor, SetForegroundColor};
use std::fmt::Display;
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

/// A two-column label/value table for summary statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatTable {
    stats: Vec<(String, String)>,
}

impl StatTable {
    pub fn new() -> Self {
        StatTable::default()
    }

    /// Adds one stat. A label that is already present is updated in place.
    pub fn add_stat(mut self, label: impl Into<String>, value: impl Display) -> Self {
        let label = label.into();
        let value = value.to_string();
        match self.stats.iter_mut().find(|(existing, _)| *existing == label) {
            Some(entry) => entry.1 = value,
            None => self.stats.push((label, value)),
        }
        self
    }

    /// Adds an optional stat, shown blank when absent.
    pub fn add_optional<T: Display>(self, label: impl Into<String>, value: Option<T>) -> Self {
        let value = value.map(|v| v.to_string()).unwrap_or_default();
        self.add_stat(label, value)
    }

    pub fn add_stats<L, V>(self, stats: impl IntoIterator<Item = (L, V)>) -> Self
    where
        L: Into<String>,
        V: Display,
    {
        stats
            .into_iter()
            .fold(self, |table, (label, value)| table.add_stat(label, value))
    }

    pub fn stats(&self) -> &[(String, String)] {
        &self.stats
    }

    pub fn render<W: Write>(&self, out: &mut W, options: RenderOptions) -> io::Result<()> {
        let width = self.stats.iter().map(|(l, _)| l.width()).max().unwrap_or(0);
        for (label, value) in &self.stats {
            let padding = " ".repeat(width - label.width());
            if options.color {
                write!(out, "  ")?;
                queue!(
                    out,
                    SetForegroundColor(caption_fg()),
                    Print(format!("{label}{padding}")),
                    ResetColor
                )?;
                write_colored(out, &format!("  {value}"), text_fg(), options)?;
            } else {
                let line = format!("  {label}{padding}  {value}");
                writeln!(out, "{}", line.trim_end())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_aligned() {
        let table = StatTable::new()
            .add_stat("Wins", 20)
            .add_stat("Games played", 82);
        let mut out = Vec::new();
        table.render(&mut out, RenderOptions::plain()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "  Wins          20\n  Games played  82\n");
    }

    #[test]
    fn test_duplicate_label_updates_value() {
        let table = StatTable::new().add_stat("Points", 1).add_stat("Points", 2);
        assert_eq!(table.stats(), &[("Points".to_string(), "2".to_string())]);
    }

    #[test]
    fn test_optional_value_is_blank() {
        let table = StatTable::new().add_optional::<i64>("Goals for", None);
        assert_eq!(table.stats()[0].1, "");
    }
}
