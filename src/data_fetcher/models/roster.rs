use super::localized::LocalizedString;
use serde::{Deserialize, Serialize};

/// Roster document as returned by `/v1/roster/{team}/{season}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterResponse {
    #[serde(default)]
    pub forwards: Vec<RosterEntry>,
    #[serde(default)]
    pub defensemen: Vec<RosterEntry>,
    #[serde(default)]
    pub goalies: Vec<RosterEntry>,
}

impl RosterResponse {
    /// All players across the three position groups, in API order.
    pub fn into_entries(self) -> impl Iterator<Item = RosterEntry> {
        self.forwards
            .into_iter()
            .chain(self.defensemen)
            .chain(self.goalies)
    }
}

/// One player entry of a roster position group, with localized names.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: i64,
    #[serde(default)]
    pub headshot: Option<String>,
    #[serde(rename = "firstName", default)]
    pub first_name: LocalizedString,
    #[serde(rename = "lastName", default)]
    pub last_name: LocalizedString,
    #[serde(rename = "sweaterNumber", default)]
    pub sweater_number: Option<i64>,
    #[serde(rename = "positionCode", default)]
    pub position_code: Option<String>,
    #[serde(rename = "shootsCatches", default)]
    pub shoots_catches: Option<String>,
    #[serde(rename = "heightInInches", default)]
    pub height_in_inches: Option<i64>,
    #[serde(rename = "weightInPounds", default)]
    pub weight_in_pounds: Option<i64>,
    #[serde(rename = "birthDate", default)]
    pub birth_date: Option<String>,
    #[serde(rename = "birthCity", default)]
    pub birth_city: Option<LocalizedString>,
    #[serde(rename = "birthStateProvince", default)]
    pub birth_state_province: Option<LocalizedString>,
    #[serde(rename = "birthCountry", default)]
    pub birth_country: Option<String>,
}

/// A display-ready roster row with localized fields resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterPlayer {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub sweater_number: Option<i64>,
    pub position_code: String,
    pub shoots_catches: String,
    pub height_in_inches: Option<i64>,
    pub weight_in_pounds: Option<i64>,
    pub birth_date: String,
    pub birth_city: String,
    /// Empty unless the API reports one (USA and CAN only)
    pub birth_state_province: String,
    pub birth_country: String,
    pub headshot: String,
}

impl RosterPlayer {
    pub fn is_goalie(&self) -> bool {
        self.position_code == "G"
    }
}
