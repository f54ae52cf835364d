use crate::data_fetcher::models::localized::text_or_blank;
use crate::data_fetcher::models::{RosterEntry, RosterPlayer, RosterResponse};
use crate::error::AppError;
use serde_json::Value;
use tracing::debug;

/// Shapes a `/v1/roster/{team}/{season}` document into one row per player.
///
/// Forwards, defensemen and goalies are merged and sorted by last name.
/// The sort is stable, so players sharing a last name keep API order.
pub fn shape_roster(doc: &Value) -> Result<Vec<RosterPlayer>, AppError> {
    let response: RosterResponse = serde_json::from_value(doc.clone())?;
    let mut players: Vec<RosterPlayer> = response.into_entries().map(shape_entry).collect();
    players.sort_by(|a, b| a.last_name.cmp(&b.last_name));

    debug!("Shaped roster with {} players", players.len());
    Ok(players)
}

/// Resolves the localized fields of one roster entry.
pub fn shape_entry(entry: RosterEntry) -> RosterPlayer {
    RosterPlayer {
        id: entry.id,
        first_name: entry.first_name.text_or("").to_string(),
        last_name: entry.last_name.text_or("").to_string(),
        sweater_number: entry.sweater_number,
        position_code: entry.position_code.unwrap_or_default(),
        shoots_catches: entry.shoots_catches.unwrap_or_default(),
        height_in_inches: entry.height_in_inches,
        weight_in_pounds: entry.weight_in_pounds,
        birth_date: entry.birth_date.unwrap_or_default(),
        birth_city: text_or_blank(entry.birth_city.as_ref()),
        birth_state_province: text_or_blank(entry.birth_state_province.as_ref()),
        birth_country: entry.birth_country.unwrap_or_default(),
        headshot: entry.headshot.unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::TestDataBuilder;
    use serde_json::json;

    #[test]
    fn test_roster_merges_groups_and_sorts_by_last_name() {
        let players = shape_roster(&TestDataBuilder::roster_doc()).unwrap();

        let last_names: Vec<&str> = players.iter().map(|p| p.last_name.as_str()).collect();
        let mut sorted = last_names.clone();
        sorted.sort();
        assert_eq!(last_names, sorted);
        assert_eq!(players.len(), 5);
        assert_eq!(players.iter().filter(|p| p.is_goalie()).count(), 1);
    }

    #[test]
    fn test_province_only_for_north_american_players() {
        let players = shape_roster(&TestDataBuilder::roster_doc()).unwrap();

        for player in &players {
            if !matches!(player.birth_country.as_str(), "USA" | "CAN") {
                assert_eq!(
                    player.birth_state_province, "",
                    "{} should have no province",
                    player.last_name
                );
            }
        }
        let celebrini = players.iter().find(|p| p.last_name == "Celebrini").unwrap();
        assert_eq!(celebrini.birth_state_province, "BC");
        assert_eq!(celebrini.birth_city, "Vancouver");
    }

    #[test]
    fn test_equal_last_names_keep_api_order() {
        let doc = json!({
            "forwards": [
                {"id": 1, "firstName": {"default": "Quinn"}, "lastName": {"default": "Hughes"}},
                {"id": 2, "firstName": {"default": "Anton"}, "lastName": {"default": "Abel"}}
            ],
            "defensemen": [
                {"id": 3, "firstName": {"default": "Jack"}, "lastName": {"default": "Hughes"}}
            ]
        });

        let players = shape_roster(&doc).unwrap();
        let ids: Vec<i64> = players.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_missing_groups_and_optional_fields() {
        let doc = json!({
            "goalies": [
                {"id": 9, "firstName": "Plain", "lastName": {"default": "Goalie"}, "positionCode": "G"}
            ]
        });

        let players = shape_roster(&doc).unwrap();
        assert_eq!(players.len(), 1);
        assert_eq!(players[0].first_name, "Plain");
        assert_eq!(players[0].sweater_number, None);
        assert_eq!(players[0].birth_city, "");
        assert_eq!(players[0].headshot, "");
    }

    #[test]
    fn test_empty_document() {
        assert!(shape_roster(&json!({})).unwrap().is_empty());
    }

    #[test]
    fn test_entry_without_names_is_kept_blank() {
        let doc = json!({"forwards": [
            {"id": 1, "lastName": {"default": "Zed"}},
            {"id": 2, "firstName": {"default": "A"}, "lastName": {"default": "Abe"}},
            {"id": 3, "firstName": {"default": "Nameless"}}
        ]});

        let roster = shape_roster(&doc).unwrap();
        let ids: Vec<i64> = roster.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        assert_eq!(roster[0].last_name, "");
        assert_eq!(roster[2].first_name, "");
        assert_eq!(roster[2].last_name, "Zed");
    }

    #[test]
    fn test_malformed_entry_is_parse_error() {
        let doc = json!({"forwards": [{"firstName": {"default": "No"}}]});
        let result = shape_roster(&doc);
        assert!(matches!(result, Err(AppError::ApiParse(_))));
    }
}
