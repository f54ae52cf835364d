use crate::data_fetcher::json_pointer::{PointerError, required_str, string_or_blank};
use serde_json::Value;
use std::fmt;

/// An NHL team as listed in the standings of a given date.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Team {
    pub abbr: String,
    pub name: String,
    pub common_name: String,
    pub logo_url: String,
    pub conference: String,
    pub division: String,
    pub division_abbr: String,
    pub conference_abbr: String,
}

impl Team {
    /// Builds a team from one `standings` record.
    ///
    /// Abbreviation and names are required; logo and league structure
    /// default to empty strings (older seasons have no conferences).
    pub fn from_standing(record: &Value) -> Result<Self, PointerError> {
        Ok(Team {
            abbr: required_str(record, "/teamAbbrev/default")?.to_string(),
            name: required_str(record, "/teamName/default")?.to_string(),
            common_name: required_str(record, "/teamCommonName/default")?.to_string(),
            logo_url: string_or_blank(record, "/teamLogo"),
            conference: string_or_blank(record, "/conferenceName"),
            division: string_or_blank(record, "/divisionName"),
            division_abbr: string_or_blank(record, "/divisionAbbrev"),
            conference_abbr: string_or_blank(record, "/conferenceAbbrev"),
        })
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.abbr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_team_from_standing() {
        let record = json!({
            "teamAbbrev": {"default": "SJS"},
            "teamName": {"default": "San Jose Sharks", "fr": "Sharks de San Jose"},
            "teamCommonName": {"default": "Sharks"},
            "teamLogo": "https://assets.nhle.com/logos/nhl/svg/SJS_light.svg",
            "conferenceName": "Western",
            "conferenceAbbrev": "W",
            "divisionName": "Pacific",
            "divisionAbbrev": "P"
        });

        let team = Team::from_standing(&record).unwrap();
        assert_eq!(team.abbr, "SJS");
        assert_eq!(team.common_name, "Sharks");
        assert_eq!(team.division_abbr, "P");
        assert_eq!(team.to_string(), "San Jose Sharks (SJS)");
    }

    #[test]
    fn test_team_without_conference() {
        let record = json!({
            "teamAbbrev": {"default": "QUE"},
            "teamName": {"default": "Quebec Nordiques"},
            "teamCommonName": {"default": "Nordiques"}
        });

        let team = Team::from_standing(&record).unwrap();
        assert_eq!(team.conference, "");
        assert_eq!(team.logo_url, "");
    }

    #[test]
    fn test_team_missing_abbrev_fails() {
        let record = json!({"teamName": {"default": "Nobody"}});
        assert!(Team::from_standing(&record).is_err());
    }
}
