use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;


/// Treat an explicit `null` the same as a missing key.
fn de_null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Decoded body of the player gamelogs feed
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameLogIo {
    #[serde(default)]
    pub last_updated_on: Option<String>,
    #[serde(default, deserialize_with = "de_null_as_default")]
    pub gamelogs: Vec<GameLog>,
    #[serde(default)]
    pub references: Option<References>,
}

impl GameLogIo {
    pub fn is_empty(&self) -> bool {
        self.gamelogs.is_empty()
    }
}

/// One player's line for one game
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GameLog {
    #[serde(deserialize_with = "de_null_as_default")]
    pub game: GameRef,
    #[serde(deserialize_with = "de_null_as_default")]
    pub player: PlayerRef,
    #[serde(deserialize_with = "de_null_as_default")]
    pub team: TeamRef,
    /// Stat categories (`passing`, `rushing`, ...) keyed by stat name.
    /// Kept loose because the feed varies by sport.
    #[serde(deserialize_with = "de_null_as_default")]
    pub stats: BTreeMap<String, Value>,
}

impl GameLog {
    /// Look up a numeric stat, e.g. `stat("passing", "passYards")`.
    pub fn stat(&self, category: &str, name: &str) -> Option<f64> {
        self.stats.get(category)?.get(name)?.as_f64()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameRef {
    #[serde(deserialize_with = "de_null_as_default")]
    pub id: u64,
    pub week: Option<u16>,
    pub start_time: Option<String>,
    pub away_team_abbreviation: Option<String>,
    pub home_team_abbreviation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerRef {
    #[serde(deserialize_with = "de_null_as_default")]
    pub id: u64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub position: Option<String>,
    pub jersey_number: Option<u16>,
}

impl PlayerRef {
    pub fn full_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(name), None) | (None, Some(name)) => name.clone(),
            (None, None) => format!("Player {}", self.id),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TeamRef {
    #[serde(deserialize_with = "de_null_as_default")]
    pub id: u64,
    pub abbreviation: Option<String>,
}

/// Reference tables the feed attaches to the response
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct References {
    #[serde(deserialize_with = "de_null_as_default")]
    pub team_references: Vec<Value>,
    #[serde(deserialize_with = "de_null_as_default")]
    pub venue_references: Vec<Value>,
    #[serde(deserialize_with = "de_null_as_default")]
    pub player_references: Vec<Value>,
    #[serde(deserialize_with = "de_null_as_default")]
    pub player_stat_references: Vec<Value>,
}
