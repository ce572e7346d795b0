//! Season-level statistics row.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::numeric;
use super::PlayerId;

/// One season/tournament row of counters for a player.
///
/// Every counter is optional end to end. The aggregation rule is uniform:
/// an absent counter contributes zero to sums and is left out of means.
/// Nothing here backfills zeros at load time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonStat {
    /// Owning player; filled from the parent record when rows arrive nested
    pub player_id: Option<PlayerId>,

    /// Season label (e.g. "23/24")
    pub season: Option<String>,

    /// Competition name
    #[serde(alias = "tournament_name")]
    pub tournament: Option<String>,

    /// Appearances
    #[serde(default, deserialize_with = "numeric::opt_u32")]
    pub presenze: Option<u32>,

    /// Goals scored
    #[serde(default, deserialize_with = "numeric::opt_u32")]
    pub gf: Option<u32>,

    /// Assists
    #[serde(default, deserialize_with = "numeric::opt_u32")]
    pub assist: Option<u32>,

    /// Yellow cards
    #[serde(default, deserialize_with = "numeric::opt_u32")]
    pub amm: Option<u32>,

    /// Red cards
    #[serde(default, deserialize_with = "numeric::opt_u32")]
    pub esp: Option<u32>,

    /// Minutes played over the season
    #[serde(default, deserialize_with = "numeric::opt_u32")]
    pub min_playing_time: Option<u32>,

    /// Shots attempted
    #[serde(default, deserialize_with = "numeric::opt_u32")]
    pub total_shots: Option<u32>,

    /// Shots on target
    #[serde(default, deserialize_with = "numeric::opt_u32")]
    pub shots_on_target: Option<u32>,

    /// Headed goals
    #[serde(default, deserialize_with = "numeric::opt_u32")]
    pub headed_goals: Option<u32>,

    /// Big chances missed
    #[serde(default, deserialize_with = "numeric::opt_u32")]
    pub big_chances_missed: Option<u32>,

    /// Key passes
    #[serde(default, deserialize_with = "numeric::opt_u32")]
    pub key_passes: Option<u32>,

    /// Dribble success rate for the season, already in percent
    #[serde(default, deserialize_with = "numeric::opt_f64")]
    pub successful_dribbles_percentage: Option<f64>,

    /// Fouls committed
    #[serde(default, deserialize_with = "numeric::opt_u32")]
    pub fouls: Option<u32>,

    /// Possession lost
    #[serde(default, deserialize_with = "numeric::opt_u32")]
    pub possession_lost: Option<u32>,

    /// Interceptions / recoveries
    #[serde(default, deserialize_with = "numeric::opt_u32")]
    pub interceptions: Option<u32>,

    /// Duels won, all kinds
    #[serde(default, deserialize_with = "numeric::opt_u32")]
    pub total_duels_won: Option<u32>,

    /// Aerial duels won
    #[serde(default, deserialize_with = "numeric::opt_u32")]
    pub aerial_duels_won: Option<u32>,

    /// Pass accuracy for the season, already in percent
    #[serde(default, deserialize_with = "numeric::opt_f64")]
    pub accurate_passes_percentage: Option<f64>,

    /// Matches started in the first eleven
    #[serde(default, deserialize_with = "numeric::opt_u32")]
    pub starts_eleven: Option<u32>,

    /// Source columns the engine does not interpret
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SeasonStat {
    /// Start an empty row for a player; counters are filled field by field.
    pub fn for_player(player_id: impl Into<PlayerId>) -> Self {
        Self {
            player_id: Some(player_id.into()),
            ..Self::default()
        }
    }

    /// Set the season label.
    pub fn with_season(mut self, season: impl Into<String>) -> Self {
        self.season = Some(season.into());
        self
    }

    /// Set the competition name.
    pub fn with_tournament(mut self, tournament: impl Into<String>) -> Self {
        self.tournament = Some(tournament.into());
        self
    }
}
