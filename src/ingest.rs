//! Source record parsing.
//!
//! The input is a JSON array of player-shaped records, each optionally
//! embedding `stats` (season rows) and `gamestats` (match rows). Parsing
//! keeps the nested shape; [`flatten`] then splits it into the independent
//! collections the queries run on, tagging every row with its owner.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::models::{MatchStat, Player, SeasonStat};

/// Errors raised while reading a source export.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The document as a whole is not a JSON array of records.
    #[error("input is not a JSON array of player records: {0}")]
    InvalidDocument(#[from] serde_json::Error),

    /// One record in the array has a malformed shape.
    #[error("invalid {record}: {source}")]
    InvalidRecord {
        /// Which record failed, e.g. "player record 3 (player_id 2845)"
        record: String,
        source: serde_json::Error,
    },
}

/// A player record as it appears in the export, nested rows included.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerRecord {
    /// Identity and profile columns
    #[serde(flatten)]
    pub player: Player,

    /// Nested season rows
    #[serde(default)]
    pub stats: Vec<SeasonStat>,

    /// Nested match rows, in source (chronological) order
    #[serde(default)]
    pub gamestats: Vec<MatchStat>,
}

/// Parse a JSON document holding the player array.
pub fn parse_players(raw: &str) -> Result<Vec<PlayerRecord>, RecordError> {
    let values: Vec<Value> = serde_json::from_str(raw)?;
    parse_player_records(values)
}

/// Parse already-decoded JSON values into typed player records.
///
/// Fails fast on the first malformed record, naming its position and id so
/// the offending entry can be found in the export.
pub fn parse_player_records(values: Vec<Value>) -> Result<Vec<PlayerRecord>, RecordError> {
    let mut records = Vec::with_capacity(values.len());
    for (position, value) in values.into_iter().enumerate() {
        let label = record_label(position, &value);
        let record: PlayerRecord = serde_json::from_value(value)
            .map_err(|source| RecordError::InvalidRecord { record: label, source })?;
        records.push(record);
    }
    debug!("parsed {} player records", records.len());
    Ok(records)
}

/// Split nested records into flat player/season/match collections.
///
/// Nested rows get their `player_id` overwritten with the owning record's
/// id; whatever id the row itself carried is not trusted.
pub fn flatten(records: Vec<PlayerRecord>) -> (Vec<Player>, Vec<SeasonStat>, Vec<MatchStat>) {
    let mut players = Vec::with_capacity(records.len());
    let mut season_stats = Vec::new();
    let mut match_stats = Vec::new();

    for record in records {
        let owner = record.player.player_id.clone();
        for mut stat in record.stats {
            stat.player_id = Some(owner.clone());
            season_stats.push(stat);
        }
        for mut game in record.gamestats {
            game.player_id = Some(owner.clone());
            match_stats.push(game);
        }
        players.push(record.player);
    }

    debug!(
        "flattened {} players into {} season rows and {} match rows",
        players.len(),
        season_stats.len(),
        match_stats.len()
    );
    (players, season_stats, match_stats)
}

fn record_label(position: usize, value: &Value) -> String {
    match value.get("player_id") {
        Some(Value::String(id)) => format!("player record {} (player_id {})", position, id),
        Some(Value::Number(id)) => format!("player record {} (player_id {})", position, id),
        _ => format!("player record {}", position),
    }
}
