use serde_json::{Value, json};

/// Test utilities for building NHL API documents
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Common name for the team abbreviations used in tests
    pub fn common_name(abbrev: &str) -> &'static str {
        match abbrev {
            "ANA" => "Ducks",
            "CGY" => "Flames",
            "DAL" => "Stars",
            "EDM" => "Oilers",
            "LAK" => "Kings",
            "SEA" => "Kraken",
            "SJS" => "Sharks",
            "VAN" => "Canucks",
            "VGK" => "Golden Knights",
            _ => "Unknown",
        }
    }

    fn team_side(abbrev: &str, score: Option<i64>) -> Value {
        let mut side = json!({
            "id": 28,
            "abbrev": abbrev,
            "commonName": {"default": Self::common_name(abbrev)},
            "placeName": {"default": "Somewhere"},
            "logo": format!("https://assets.nhle.com/logos/nhl/svg/{abbrev}_light.svg")
        });
        if let Some(score) = score {
            side["score"] = json!(score);
        }
        side
    }

    /// Creates a finished regular season game
    pub fn played_game(
        id: i64,
        home: &str,
        home_score: i64,
        away: &str,
        away_score: i64,
        last_period_type: &str,
    ) -> Value {
        json!({
            "id": id,
            "season": 20242025,
            "gameType": 2,
            "gameDate": "2024-10-10",
            "startTimeUTC": "2024-10-11T02:30:00Z",
            "gameState": "OFF",
            "homeTeam": Self::team_side(home, Some(home_score)),
            "awayTeam": Self::team_side(away, Some(away_score)),
            "gameOutcome": {"lastPeriodType": last_period_type},
            "winningGoalie": {
                "playerId": 8480045,
                "firstInitial": {"default": "Y."},
                "lastName": {"default": "Askarov"}
            },
            "winningGoalScorer": {
                "playerId": 8484801,
                "firstInitial": {"default": "M."},
                "lastName": {"default": "Celebrini"}
            }
        })
    }

    /// Creates a scheduled regular season game
    pub fn future_game(id: i64, home: &str, away: &str) -> Value {
        json!({
            "id": id,
            "season": 20242025,
            "gameType": 2,
            "gameDate": "2025-04-15",
            "startTimeUTC": "2025-04-16T02:00:00Z",
            "gameState": "FUT",
            "homeTeam": Self::team_side(home, None),
            "awayTeam": Self::team_side(away, None)
        })
    }

    /// Wraps game records in a club schedule document
    pub fn schedule_doc(games: Vec<Value>) -> Value {
        json!({
            "previousSeason": 20232024,
            "currentSeason": 20242025,
            "clubTimezone": "America/Los_Angeles",
            "games": games
        })
    }

    #[allow(clippy::too_many_arguments)]
    fn roster_entry(
        id: i64,
        first: &str,
        last: &str,
        number: i64,
        position: &str,
        city: &str,
        province: Option<&str>,
        country: &str,
    ) -> Value {
        let mut entry = json!({
            "id": id,
            "headshot": format!("https://assets.nhle.com/mugs/nhl/20242025/SJS/{id}.png"),
            "firstName": {"default": first},
            "lastName": {"default": last},
            "sweaterNumber": number,
            "positionCode": position,
            "shootsCatches": "L",
            "heightInInches": 72,
            "weightInPounds": 190,
            "birthDate": "2004-06-13",
            "birthCity": {"default": city},
            "birthCountry": country
        });
        if let Some(province) = province {
            entry["birthStateProvince"] = json!({"default": province});
        }
        entry
    }

    /// A small roster with forwards, defensemen and one goalie
    pub fn roster_doc() -> Value {
        json!({
            "forwards": [
                Self::roster_entry(8484801, "Macklin", "Celebrini", 71, "C", "Vancouver", Some("BC"), "CAN"),
                Self::roster_entry(8482667, "William", "Eklund", 72, "L", "Haninge", None, "SWE"),
                Self::roster_entry(8482655, "Will", "Smith", 2, "C", "Lexington", Some("MA"), "USA")
            ],
            "defensemen": [
                Self::roster_entry(8480871, "Mario", "Ferraro", 38, "D", "Toronto", Some("ON"), "CAN")
            ],
            "goalies": [
                Self::roster_entry(8480045, "Yaroslav", "Askarov", 30, "G", "Omsk", None, "RUS")
            ]
        })
    }

    /// One entry of the season rules document
    pub fn season_rule(id: i32, formatted: &str, start_date: &str, games: i32) -> Value {
        json!({
            "id": id,
            "formattedSeasonId": formatted,
            "startDate": format!("{start_date}T00:00:00"),
            "endDate": format!("{}-04-30T00:00:00", id % 10000),
            "numberOfGames": games,
            "regularSeasonEndDate": format!("{}-04-15T00:00:00", id % 10000)
        })
    }

    /// Season rules document with the entries under `data`
    pub fn season_rules_doc(rules: Vec<Value>) -> Value {
        let total = rules.len();
        json!({"data": rules, "total": total})
    }

    /// One `standings` record with full league structure and goal totals
    pub fn standing_record(abbrev: &str, common_name: &str, full_name: &str) -> Value {
        json!({
            "date": "2025-04-17",
            "seasonId": 20242025,
            "teamAbbrev": {"default": abbrev},
            "teamName": {"default": full_name, "fr": full_name},
            "teamCommonName": {"default": common_name},
            "teamLogo": format!("https://assets.nhle.com/logos/nhl/svg/{abbrev}_light.svg"),
            "conferenceName": "Western",
            "conferenceAbbrev": "W",
            "conferenceSequence": 16,
            "divisionName": "Pacific",
            "divisionAbbrev": "P",
            "divisionSequence": 8,
            "leagueSequence": 32,
            "gamesPlayed": 82,
            "wins": 20,
            "losses": 50,
            "ties": 0,
            "otLosses": 12,
            "points": 52,
            "goalFor": 180,
            "goalAgainst": 260
        })
    }

    /// Standings document for the given records
    pub fn standings_doc(records: Vec<Value>) -> Value {
        json!({"wildCardIndicator": true, "standings": records})
    }

    /// `/v1/standings-season` manifest with `(season id, standingsEnd)` entries
    pub fn standings_manifest(seasons: &[(i32, &str)]) -> Value {
        let seasons: Vec<Value> = seasons
            .iter()
            .map(|(id, end)| {
                json!({
                    "id": id,
                    "standingsStart": format!("{}-10-01", id / 10000),
                    "standingsEnd": end,
                    "conferencesInUse": true,
                    "divisionsInUse": true
                })
            })
            .collect();
        json!({"currentDate": "2025-04-17", "seasons": seasons})
    }

    /// A player landing document.
    ///
    /// Position `"G"` builds a goalie with goalie stat lines, anything else a
    /// skater. Two regular season lines and one playoff line are included.
    pub fn career_landing(player_id: i64, position: &str) -> Value {
        let goalie = position == "G";
        let (first, last, number, city, province, country) = if goalie {
            ("Yaroslav", "Askarov", 30, "Omsk", None, "RUS")
        } else {
            ("Connor", "McDavid", 97, "Richmond Hill", Some("ON"), "CAN")
        };

        let line = |season: i64, game_type: i64, games: i64, goals: i64| {
            let mut record = json!({
                "season": season,
                "gameTypeId": game_type,
                "leagueAbbrev": "NHL",
                "teamName": {"default": "Edmonton Oilers"},
                "sequence": 1,
                "gamesPlayed": games
            });
            let stats = if goalie {
                json!({
                    "goalsAgainstAvg": 2.4567,
                    "savePctg": 0.915,
                    "goalsAgainst": goals,
                    "shutouts": 2,
                    "wins": 20,
                    "losses": 10,
                    "gamesStarted": games
                })
            } else {
                json!({
                    "goals": goals,
                    "assists": goals * 2,
                    "points": goals * 3,
                    "pim": 18,
                    "plusMinus": -1,
                    "shots": 105
                })
            };
            if let (Some(map), Some(extra)) = (record.as_object_mut(), stats.as_object()) {
                map.extend(extra.clone());
            }
            record
        };

        let mut landing = json!({
            "playerId": player_id,
            "isActive": true,
            "firstName": {"default": first},
            "lastName": {"default": last},
            "sweaterNumber": number,
            "position": position,
            "shootsCatches": "L",
            "heightInInches": 73,
            "weightInPounds": 194,
            "birthDate": "1997-01-13",
            "birthCity": {"default": city},
            "birthCountry": country,
            "headshot": format!("https://assets.nhle.com/mugs/nhl/20242025/EDM/{player_id}.png"),
            "heroImage": format!("https://assets.nhle.com/mugs/actionshots/1296x729/{player_id}.jpg"),
            "badges": [
                {
                    "logoUrl": {"default": "https://assets.nhle.com/badges/hart_trophy.svg"},
                    "title": {"default": "Hart Trophy"}
                }
            ],
            "seasonTotals": [
                line(20152016, 2, 45, 16),
                line(20162017, 2, 82, 30),
                line(20162017, 3, 5, 2)
            ]
        });
        if let Some(province) = province {
            landing["birthStateProvince"] = json!({"default": province});
        }
        landing
    }
}
