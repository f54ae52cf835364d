use super::RenderOptions;
use super::board::write_title;
use super::stat_table::StatTable;
use super::table::TextTable;
use crate::constants::game;
use crate::data_fetcher::models::CareerStats;
use crate::data_fetcher::processors::{stat_summary, totals_columns, totals_table};
use std::io::{self, Write};

/// Renders a player's vital statistics, badges and career totals tables.
pub fn render_profile<W: Write>(
    out: &mut W,
    stats: &CareerStats,
    options: RenderOptions,
) -> io::Result<()> {
    write_title(out, &stats.full_name(), options)?;

    if !stats.badges.is_empty() {
        let titles: Vec<&str> = stats.badges.iter().map(|b| b.title.as_str()).collect();
        writeln!(out, "Badges: {}", titles.join(", "))?;
        writeln!(out)?;
    }

    StatTable::new()
        .add_stats(stat_summary(stats))
        .render(out, options)?;

    let columns = totals_columns(stats);
    let right_aligned: Vec<usize> = (3..columns.len()).collect();
    for (title, game_type) in [
        ("Regular Season Stats", game::REGULAR_SEASON),
        ("Playoff Season Stats", game::PLAYOFFS),
    ] {
        write_title(out, title, options)?;
        let rows = totals_table(stats, game_type, &columns);
        if rows.is_empty() {
            writeln!(out, "No games played.")?;
            continue;
        }
        let mut table =
            TextTable::new(columns.iter().map(|c| c.header)).align_right(&right_aligned);
        for row in rows {
            table.add_row(row);
        }
        table.render(out, options)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::TestDataBuilder;

    #[test]
    fn test_skater_profile() {
        let stats =
            CareerStats::from_landing(&TestDataBuilder::career_landing(8478402, "C")).unwrap();
        let mut out = Vec::new();
        render_profile(&mut out, &stats, RenderOptions::plain()).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Connor McDavid"));
        assert!(text.contains("Badges: Hart Trophy"));
        assert!(text.contains("Shoots"));
        assert!(text.contains("Richmond Hill, ON, CAN"));
        assert!(text.contains("Regular Season Stats"));
        assert!(text.contains("Playoff Season Stats"));
        assert!(text.contains("2015-16"));
    }

    #[test]
    fn test_profile_without_playoffs() {
        let mut doc = TestDataBuilder::career_landing(8480045, "G");
        doc["seasonTotals"].as_array_mut().unwrap().pop();
        let stats = CareerStats::from_landing(&doc).unwrap();

        let mut out = Vec::new();
        render_profile(&mut out, &stats, RenderOptions::plain()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Catches"));
        assert!(text.contains("Omsk, RUS"));
        assert!(text.contains("No games played."));
    }
}
