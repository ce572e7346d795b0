//! Immutable dataset snapshot and query surface.
//!
//! A [`Dataset`] holds one load of the source export: the player table plus
//! the flattened season and match collections. Queries borrow from the
//! snapshot and allocate fresh results, so independent dashboard requests
//! need no coordination.

use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::calculate;
use crate::ingest::{self, RecordError};
use crate::models::{MatchStat, Player, PlayerDashboard, PlayerId, SeasonStat};

/// Filter sentinel meaning "do not filter" (the UI's `All` option).
pub const FILTER_ALL: &str = "All";

/// Resolve a filter argument; `None` and the `All` sentinel both disable it.
fn active_filter(filter: Option<&str>) -> Option<&str> {
    filter.filter(|f| *f != FILTER_ALL)
}

/// Ranking metric for the leaderboard query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopMetric {
    /// Goals scored
    Goals,
    /// Assists
    Assists,
}

impl TopMetric {
    /// Source column key for this metric.
    pub fn key(&self) -> &'static str {
        match self {
            TopMetric::Goals => "gf",
            TopMetric::Assists => "assist",
        }
    }

    /// Parse a source column key.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "gf" => Some(TopMetric::Goals),
            "assist" => Some(TopMetric::Assists),
            _ => None,
        }
    }

    fn value(&self, stat: &SeasonStat) -> Option<u32> {
        match self {
            TopMetric::Goals => stat.gf,
            TopMetric::Assists => stat.assist,
        }
    }
}

/// One load of the source export, ready for queries.
pub struct Dataset {
    players: Vec<Player>,
    season_stats: Vec<SeasonStat>,
    match_stats: Vec<MatchStat>,
    by_id: HashMap<PlayerId, usize>,
}

impl Dataset {
    /// Load a dataset from the raw JSON export.
    pub fn from_json_str(raw: &str) -> Result<Self, RecordError> {
        let records = ingest::parse_players(raw)?;
        let (players, season_stats, match_stats) = ingest::flatten(records);
        Ok(Self::from_parts(players, season_stats, match_stats))
    }

    /// Load a dataset from already-decoded JSON values.
    pub fn from_records(values: Vec<Value>) -> Result<Self, RecordError> {
        let records = ingest::parse_player_records(values)?;
        let (players, season_stats, match_stats) = ingest::flatten(records);
        Ok(Self::from_parts(players, season_stats, match_stats))
    }

    /// Build a dataset from already-typed collections.
    ///
    /// Stat rows whose `player_id` matches no loaded player are dropped
    /// here, with a warning, so queries never have to re-check ownership.
    pub fn from_parts(
        players: Vec<Player>,
        season_stats: Vec<SeasonStat>,
        match_stats: Vec<MatchStat>,
    ) -> Self {
        let by_id: HashMap<PlayerId, usize> = players
            .iter()
            .enumerate()
            .map(|(index, player)| (player.player_id.clone(), index))
            .collect();

        let season_total = season_stats.len();
        let season_stats: Vec<SeasonStat> = season_stats
            .into_iter()
            .filter(|stat| owner_known(&by_id, stat.player_id.as_ref()))
            .collect();
        let match_total = match_stats.len();
        let match_stats: Vec<MatchStat> = match_stats
            .into_iter()
            .filter(|stat| owner_known(&by_id, stat.player_id.as_ref()))
            .collect();

        let dropped = (season_total - season_stats.len()) + (match_total - match_stats.len());
        if dropped > 0 {
            warn!("dropped {} stat rows without a matching player", dropped);
        }
        debug!(
            "dataset ready: {} players, {} season rows, {} match rows",
            players.len(),
            season_stats.len(),
            match_stats.len()
        );

        Self {
            players,
            season_stats,
            match_stats,
            by_id,
        }
    }

    /// Number of loaded players.
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Every loaded player, in load order.
    pub fn all_players(&self) -> &[Player] {
        &self.players
    }

    /// Every season row, in load order.
    pub fn all_season_stats(&self) -> &[SeasonStat] {
        &self.season_stats
    }

    /// Every match row, in load order.
    pub fn all_match_stats(&self) -> &[MatchStat] {
        &self.match_stats
    }

    /// Players, optionally filtered by exact team name (case-sensitive).
    pub fn players(&self, team_filter: Option<&str>) -> Vec<&Player> {
        match active_filter(team_filter) {
            None => self.players.iter().collect(),
            Some(team) => self
                .players
                .iter()
                .filter(|p| p.team.as_deref() == Some(team))
                .collect(),
        }
    }

    /// Season rows, optionally filtered by exact season label.
    pub fn season_stats(&self, season_filter: Option<&str>) -> Vec<&SeasonStat> {
        match active_filter(season_filter) {
            None => self.season_stats.iter().collect(),
            Some(season) => self
                .season_stats
                .iter()
                .filter(|s| s.season.as_deref() == Some(season))
                .collect(),
        }
    }

    /// Look up a player by id.
    pub fn player(&self, player_id: &PlayerId) -> Option<&Player> {
        self.by_id.get(player_id).map(|&index| &self.players[index])
    }

    /// Look up a player's display name.
    pub fn player_name(&self, player_id: &PlayerId) -> Option<&str> {
        self.player(player_id).map(|p| p.name.as_str())
    }

    /// Season rows for one player, optionally filtered by season label.
    pub fn season_stats_for(
        &self,
        player_id: &PlayerId,
        season_filter: Option<&str>,
    ) -> Vec<&SeasonStat> {
        let season = active_filter(season_filter);
        self.season_stats
            .iter()
            .filter(|s| s.player_id.as_ref() == Some(player_id))
            .filter(|s| match season {
                None => true,
                Some(label) => s.season.as_deref() == Some(label),
            })
            .collect()
    }

    /// Match rows for one player, in source order.
    ///
    /// Deliberately ignores the season filter: match drill-down always
    /// covers the full history, matching the season tables' behavior only
    /// at the season level.
    pub fn match_stats_for(&self, player_id: &PlayerId) -> Vec<&MatchStat> {
        self.match_stats
            .iter()
            .filter(|m| m.player_id.as_ref() == Some(player_id))
            .collect()
    }

    /// Distinct team names, in first-encounter order.
    pub fn teams(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.players
            .iter()
            .filter_map(|p| p.team.as_deref())
            .filter(|team| seen.insert(*team))
            .collect()
    }

    /// Distinct season labels, in first-encounter order.
    pub fn seasons(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.season_stats
            .iter()
            .filter_map(|s| s.season.as_deref())
            .filter(|season| seen.insert(*season))
            .collect()
    }

    /// The full dashboard for one player, or `None` for an unknown id.
    ///
    /// The season filter narrows the season rows only; match rows always
    /// cover the full history.
    pub fn player_dashboard(
        &self,
        player_id: &PlayerId,
        season_filter: Option<&str>,
    ) -> Option<PlayerDashboard> {
        let player = self.player(player_id)?;
        let seasons = self.season_stats_for(player_id, season_filter);
        let matches = self.match_stats_for(player_id);
        debug!(
            "dashboard for {} over {} season rows, {} match rows",
            player.name,
            seasons.len(),
            matches.len()
        );

        Some(PlayerDashboard {
            fantasy: calculate::fantasy_metrics(&matches),
            general: calculate::general_metrics(&seasons, &matches),
            offensive: calculate::offensive_metrics(&seasons),
            defensive: calculate::defensive_metrics(&seasons),
            indices: player.indices(),
        })
    }

    /// Leaderboard over the given season rows: player name and metric
    /// total, descending, ties kept in first-encounter order.
    ///
    /// Rows owned by a player missing from the table are skipped.
    pub fn top_players<S: Borrow<SeasonStat>>(
        &self,
        metric: TopMetric,
        n: usize,
        scope: &[S],
    ) -> Vec<(String, u32)> {
        let mut order: Vec<&str> = Vec::new();
        let mut totals: HashMap<&str, u32> = HashMap::new();

        for stat in scope {
            let stat = stat.borrow();
            let Some(player_id) = stat.player_id.as_ref() else {
                continue;
            };
            let Some(name) = self.player_name(player_id) else {
                continue;
            };
            let total = totals.entry(name).or_insert_with(|| {
                order.push(name);
                0
            });
            *total += metric.value(stat).unwrap_or(0);
        }

        let mut ranked: Vec<(String, u32)> = order
            .into_iter()
            .map(|name| (name.to_string(), totals[name]))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

fn owner_known(by_id: &HashMap<PlayerId, usize>, owner: Option<&PlayerId>) -> bool {
    owner.is_some_and(|id| by_id.contains_key(id))
}
