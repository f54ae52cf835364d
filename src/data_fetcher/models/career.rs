use super::localized::LocalizedString;
use crate::data_fetcher::json_pointer::{
    PointerError, i64_at, lookup, required_i64, required_str, str_at, string_or_blank,
};
use crate::data_fetcher::player_names::full_name;
use serde_json::{Map, Value};

/// A trophy or milestone badge shown on a player's landing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub logo_url: String,
    pub title: String,
}

/// One season/team/game-type line of a player's career totals.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonTotal {
    /// Season id such as `20232024`
    pub season: i64,
    pub game_type_id: i64,
    pub league_abbrev: String,
    pub team_name: String,
    /// The raw record, for stat columns that vary by position and era
    pub stats: Map<String, Value>,
}

impl SeasonTotal {
    fn from_record(record: &Value) -> Option<Self> {
        Some(SeasonTotal {
            season: i64_at(record, "/season")?,
            game_type_id: i64_at(record, "/gameTypeId")?,
            league_abbrev: string_or_blank(record, "/leagueAbbrev"),
            team_name: lookup(record, "/teamName")
                .and_then(LocalizedString::text_of)
                .unwrap_or_default()
                .to_string(),
            stats: record.as_object().cloned().unwrap_or_default(),
        })
    }

    /// A stat column of this line, if the API reported it.
    pub fn stat(&self, key: &str) -> Option<&Value> {
        self.stats.get(key).filter(|value| !value.is_null())
    }
}

/// Career statistics and biography from `/v1/player/{id}/landing`.
#[derive(Debug, Clone, PartialEq)]
pub struct CareerStats {
    pub player_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub position_code: String,
    pub shoots_catches: String,
    pub sweater_number: Option<i64>,
    pub height_in_inches: Option<i64>,
    pub weight_in_pounds: Option<i64>,
    pub birth_date: String,
    pub birth_city: String,
    pub birth_state_province: String,
    pub birth_country: String,
    pub headshot: Option<String>,
    pub hero_image: Option<String>,
    pub badges: Vec<Badge>,
    pub season_totals: Vec<SeasonTotal>,
}

impl CareerStats {
    /// Builds career stats from a landing document.
    ///
    /// Player id and names are required. Season lines without a season or
    /// game type are skipped.
    pub fn from_landing(doc: &Value) -> Result<Self, PointerError> {
        let localized = |pointer: &str| {
            lookup(doc, pointer)
                .and_then(LocalizedString::text_of)
                .unwrap_or_default()
                .to_string()
        };

        let badges = lookup(doc, "/badges")
            .and_then(Value::as_array)
            .map(|badges| {
                badges
                    .iter()
                    .map(|badge| Badge {
                        logo_url: string_or_blank(badge, "/logoUrl/default"),
                        title: string_or_blank(badge, "/title/default"),
                    })
                    .collect()
            })
            .unwrap_or_default();

        let season_totals = lookup(doc, "/seasonTotals")
            .and_then(Value::as_array)
            .map(|records| records.iter().filter_map(SeasonTotal::from_record).collect())
            .unwrap_or_default();

        Ok(CareerStats {
            player_id: required_i64(doc, "/playerId")?,
            first_name: required_str(doc, "/firstName/default")?.to_string(),
            last_name: required_str(doc, "/lastName/default")?.to_string(),
            position_code: string_or_blank(doc, "/position"),
            shoots_catches: string_or_blank(doc, "/shootsCatches"),
            sweater_number: i64_at(doc, "/sweaterNumber"),
            height_in_inches: i64_at(doc, "/heightInInches"),
            weight_in_pounds: i64_at(doc, "/weightInPounds"),
            birth_date: string_or_blank(doc, "/birthDate"),
            birth_city: localized("/birthCity"),
            birth_state_province: localized("/birthStateProvince"),
            birth_country: string_or_blank(doc, "/birthCountry"),
            headshot: str_at(doc, "/headshot").map(str::to_string),
            hero_image: str_at(doc, "/heroImage").map(str::to_string),
            badges,
            season_totals,
        })
    }

    pub fn is_goalie(&self) -> bool {
        self.position_code == "G"
    }

    pub fn full_name(&self) -> String {
        full_name(&self.first_name, &self.last_name)
    }

    /// Season lines of one game type, in API order.
    pub fn totals_for(&self, game_type_id: i64) -> impl Iterator<Item = &SeasonTotal> {
        self.season_totals
            .iter()
            .filter(move |total| total.game_type_id == game_type_id)
    }
}
