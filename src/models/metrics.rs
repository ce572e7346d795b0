//! Derived metric groups for the player dashboard.
//!
//! Each group mirrors one column of the dashboard layout. The typed fields
//! keep full precision for callers that post-process; `rows()` applies the
//! display contract (fixed label order, fixed rounding, `—` for averages
//! that have no data to average).

use serde::Serialize;

use super::PlayerIndices;

/// Placeholder shown where an average or share has no data behind it.
pub const EMPTY_METRIC: &str = "—";

fn fmt_vote(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => EMPTY_METRIC.to_string(),
    }
}

fn fmt_pct(value: f64) -> String {
    format!("{:.1}%", value)
}

fn fmt_pct_opt(value: Option<f64>) -> String {
    match value {
        Some(v) => fmt_pct(v),
        None => EMPTY_METRIC.to_string(),
    }
}

fn fmt_rate(value: f64) -> String {
    format!("{:.2}", value)
}

fn fmt_minutes(value: f64) -> String {
    format!("{:.1}", value)
}

/// Fantacalcio vote metrics, computed from match rows only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FantasyMetrics {
    /// Mean vote over every rated match
    pub mv: Option<f64>,

    /// Fantasy mean; the feed carries no bonus/malus breakdown, so this
    /// mirrors `mv`
    pub fmv: Option<f64>,

    /// Mean vote over the rated entries among the last 5 matches
    pub mv_last5: Option<f64>,

    /// Fantasy variant of `mv_last5`, same mirroring as `fmv`
    pub fmv_last5: Option<f64>,

    /// Share of rated matches with vote >= 6, in percent
    pub pct_vote_ge_6: Option<f64>,

    /// Share of rated matches with vote >= 6.5, in percent
    pub pct_vote_ge_6_5: Option<f64>,
}

impl FantasyMetrics {
    /// Label/value rows in dashboard order.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("MV", fmt_vote(self.mv)),
            ("FMV", fmt_vote(self.fmv)),
            ("MV Ultime 5", fmt_vote(self.mv_last5)),
            ("FMV Ultime 5", fmt_vote(self.fmv_last5)),
            ("% Partite Voto >= 6", fmt_pct_opt(self.pct_vote_ge_6)),
            ("% Partite Voto >= 6.5", fmt_pct_opt(self.pct_vote_ge_6_5)),
        ]
    }
}

/// General totals and availability metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneralMetrics {
    /// Goals across the selected season rows
    pub goals_total: u32,

    /// Assists across the selected season rows
    pub assists_total: u32,

    /// Number of match rows on record
    pub matches_rated: u32,

    /// Matches started in the first eleven
    pub starts: u32,

    /// Minutes played per appearance; 0 when there are no appearances
    pub minutes_per_match: f64,

    /// Mean season pass accuracy, in percent
    pub pass_accuracy_pct: Option<f64>,
}

impl GeneralMetrics {
    /// Label/value rows in dashboard order.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Gol Totali", self.goals_total.to_string()),
            ("Assist Totali", self.assists_total.to_string()),
            ("Partite A Voto", self.matches_rated.to_string()),
            ("Partite Da Titolare", self.starts.to_string()),
            ("Minuti A Partita", fmt_minutes(self.minutes_per_match)),
            ("Precisione Passaggi", fmt_pct_opt(self.pass_accuracy_pct)),
        ]
    }
}

/// Offensive production metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OffensiveMetrics {
    /// Shots attempted per appearance
    pub shots_per_match: f64,

    /// Shots on target per appearance
    pub shots_on_target_per_match: f64,

    /// Goals as a share of shots attempted, in percent; 0 with no shots
    pub goals_pct_of_shots: f64,

    /// Headed goals total
    pub headed_goals: u32,

    /// Big chances missed total
    pub big_chances_missed: u32,

    /// Key passes per appearance
    pub key_passes_per_match: f64,

    /// Mean season dribble success rate, in percent
    pub dribble_success_pct: Option<f64>,
}

impl OffensiveMetrics {
    /// Label/value rows in dashboard order.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Tiri a Partita", fmt_rate(self.shots_per_match)),
            ("Tiri in Porta/Partita", fmt_rate(self.shots_on_target_per_match)),
            ("% Gol su Tiri", fmt_pct(self.goals_pct_of_shots)),
            ("Gol di Testa", self.headed_goals.to_string()),
            ("Occasioni Mancate", self.big_chances_missed.to_string()),
            ("Passaggi Chiave/Partita", fmt_rate(self.key_passes_per_match)),
            ("% Dribbling Riusciti", fmt_pct_opt(self.dribble_success_pct)),
        ]
    }
}

/// Defensive and discipline metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefensiveMetrics {
    /// Yellow plus red cards total
    pub cards_total: u32,

    /// Cards per appearance
    pub cards_per_match: f64,

    /// Fouls committed per appearance
    pub fouls_per_match: f64,

    /// Possession lost per appearance
    pub possession_lost_per_match: f64,

    /// Interceptions per appearance
    pub recoveries_per_match: f64,

    /// Duels won per appearance
    pub duels_won_per_match: f64,

    /// Aerial duels won per appearance
    pub aerial_duels_won_per_match: f64,
}

impl DefensiveMetrics {
    /// Label/value rows in dashboard order.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Cartellini a Partita", fmt_rate(self.cards_per_match)),
            ("Numero di Cartellini", self.cards_total.to_string()),
            ("Falli a Partita", fmt_rate(self.fouls_per_match)),
            ("Palle Perse a Partita", fmt_rate(self.possession_lost_per_match)),
            ("Recuperi a Partita", fmt_rate(self.recoveries_per_match)),
            ("Duelli Vinti a Partita", fmt_rate(self.duels_won_per_match)),
            ("Duelli Aerei a Partita", fmt_rate(self.aerial_duels_won_per_match)),
        ]
    }
}

/// The full dashboard payload for one player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerDashboard {
    /// Vote-based metrics
    pub fantasy: FantasyMetrics,

    /// Totals and availability
    pub general: GeneralMetrics,

    /// Offensive production
    pub offensive: OffensiveMetrics,

    /// Defense and discipline
    pub defensive: DefensiveMetrics,

    /// Classified editorial indices
    pub indices: PlayerIndices,
}

impl PlayerDashboard {
    /// The four metric groups with their display titles, in layout order.
    pub fn groups(&self) -> Vec<(&'static str, Vec<(&'static str, String)>)> {
        vec![
            ("Fantacalcio", self.fantasy.rows()),
            ("Generali", self.general.rows()),
            ("Offensive", self.offensive.rows()),
            ("Difensive", self.defensive.rows()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_fantasy() -> FantasyMetrics {
        FantasyMetrics {
            mv: Some(6.8333),
            fmv: Some(6.8333),
            mv_last5: Some(7.0),
            fmv_last5: Some(7.0),
            pct_vote_ge_6: Some(83.3333),
            pct_vote_ge_6_5: Some(50.0),
        }
    }

    #[test]
    fn test_fantasy_rows_formatting() {
        let rows = sample_fantasy().rows();
        assert_eq!(rows[0], ("MV", "6.83".to_string()));
        assert_eq!(rows[2], ("MV Ultime 5", "7.00".to_string()));
        assert_eq!(rows[4], ("% Partite Voto >= 6", "83.3%".to_string()));
    }

    #[test]
    fn test_fantasy_rows_placeholders_when_absent() {
        let metrics = FantasyMetrics {
            mv: None,
            fmv: None,
            mv_last5: None,
            fmv_last5: None,
            pct_vote_ge_6: None,
            pct_vote_ge_6_5: None,
        };
        for (_, value) in metrics.rows() {
            assert_eq!(value, EMPTY_METRIC);
        }
    }

    #[test]
    fn test_general_rows_formatting() {
        let metrics = GeneralMetrics {
            goals_total: 5,
            assists_total: 2,
            matches_rated: 10,
            starts: 8,
            minutes_per_match: 90.0,
            pass_accuracy_pct: Some(81.44),
        };
        let rows = metrics.rows();
        assert_eq!(rows[0], ("Gol Totali", "5".to_string()));
        assert_eq!(rows[4], ("Minuti A Partita", "90.0".to_string()));
        assert_eq!(rows[5], ("Precisione Passaggi", "81.4%".to_string()));
    }

    #[test]
    fn test_offensive_rows_formatting() {
        let metrics = OffensiveMetrics {
            shots_per_match: 2.3456,
            shots_on_target_per_match: 1.0,
            goals_pct_of_shots: 21.739,
            headed_goals: 3,
            big_chances_missed: 7,
            key_passes_per_match: 0.5,
            dribble_success_pct: None,
        };
        let rows = metrics.rows();
        assert_eq!(rows[0], ("Tiri a Partita", "2.35".to_string()));
        assert_eq!(rows[2], ("% Gol su Tiri", "21.7%".to_string()));
        assert_eq!(rows[6], ("% Dribbling Riusciti", EMPTY_METRIC.to_string()));
    }

    #[test]
    fn test_defensive_rows_order() {
        let metrics = DefensiveMetrics {
            cards_total: 9,
            cards_per_match: 0.29,
            fouls_per_match: 1.2,
            possession_lost_per_match: 10.8,
            recoveries_per_match: 1.6,
            duels_won_per_match: 5.4,
            aerial_duels_won_per_match: 2.1,
        };
        let labels: Vec<&str> = metrics.rows().into_iter().map(|(label, _)| label).collect();
        assert_eq!(
            labels,
            vec![
                "Cartellini a Partita",
                "Numero di Cartellini",
                "Falli a Partita",
                "Palle Perse a Partita",
                "Recuperi a Partita",
                "Duelli Vinti a Partita",
                "Duelli Aerei a Partita",
            ]
        );
    }

    #[test]
    fn test_dashboard_group_titles() {
        let dashboard = PlayerDashboard {
            fantasy: sample_fantasy(),
            general: GeneralMetrics {
                goals_total: 0,
                assists_total: 0,
                matches_rated: 0,
                starts: 0,
                minutes_per_match: 0.0,
                pass_accuracy_pct: None,
            },
            offensive: OffensiveMetrics {
                shots_per_match: 0.0,
                shots_on_target_per_match: 0.0,
                goals_pct_of_shots: 0.0,
                headed_goals: 0,
                big_chances_missed: 0,
                key_passes_per_match: 0.0,
                dribble_success_pct: None,
            },
            defensive: DefensiveMetrics {
                cards_total: 0,
                cards_per_match: 0.0,
                fouls_per_match: 0.0,
                possession_lost_per_match: 0.0,
                recoveries_per_match: 0.0,
                duels_won_per_match: 0.0,
                aerial_duels_won_per_match: 0.0,
            },
            indices: crate::models::Player::new("1", "x").indices(),
        };
        let titles: Vec<&str> = dashboard
            .groups()
            .into_iter()
            .map(|(title, _)| title)
            .collect();
        assert_eq!(titles, vec!["Fantacalcio", "Generali", "Offensive", "Difensive"]);
    }
}
