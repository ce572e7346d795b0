//! Statistics aggregation engine.
//!
//! Computes the derived metric groups a player dashboard renders:
//! - Fantacalcio vote averages and last-5 form
//! - General totals and availability
//! - Offensive production rates
//! - Defensive and discipline rates
//!
//! Two policies apply uniformly. An absent counter contributes zero to
//! sums but is excluded from means, and every division guards its zero
//! denominator by resolving to 0 rather than NaN or an error.

use std::borrow::Borrow;

use crate::models::{
    DefensiveMetrics, FantasyMetrics, GeneralMetrics, IndexBand, MatchStat, OffensiveMetrics,
    SeasonStat,
};

/// How many trailing match entries the rolling vote average looks at.
pub const LAST_N_MATCHES: usize = 5;

/// Vote threshold for a sufficient performance.
pub const VOTE_SUFFICIENT: f64 = 6.0;

/// Vote threshold for a good performance (sufficiency plus a half point).
pub const VOTE_GOOD: f64 = 6.5;

/// Sum a counter across season rows; absent values count as zero.
pub fn sum_counter<S, F>(stats: &[S], field: F) -> u32
where
    S: Borrow<SeasonStat>,
    F: Fn(&SeasonStat) -> Option<u32>,
{
    stats.iter().filter_map(|s| field(s.borrow())).sum()
}

/// Mean of the values that are present; `None` when nothing is present.
pub fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for v in values {
        sum += v;
        count += 1;
    }
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Per-appearance rate; 0 when there are no appearances.
pub fn per_match(total: u32, appearances: u32) -> f64 {
    if appearances == 0 {
        0.0
    } else {
        f64::from(total) / f64::from(appearances)
    }
}

/// Percentage share; 0 when the denominator is zero.
pub fn ratio_pct(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        0.0
    } else {
        f64::from(part) / f64::from(whole) * 100.0
    }
}

/// Classify an editorial index value into its band.
pub fn classify_index(value: Option<f64>) -> IndexBand {
    IndexBand::classify(value)
}

/// Fantacalcio vote metrics over a player's full match history.
///
/// Match rows must arrive in source order, oldest first; the last-5 window
/// is taken from the tail of the slice. Unrated entries inside the window
/// still count toward the window size but not toward its average.
pub fn fantasy_metrics<M: Borrow<MatchStat>>(matches: &[M]) -> FantasyMetrics {
    let votes: Vec<f64> = matches.iter().filter_map(|m| m.borrow().vote).collect();
    let mv = mean(votes.iter().copied());

    let window_start = matches.len().saturating_sub(LAST_N_MATCHES);
    let mv_last5 = mean(matches[window_start..].iter().filter_map(|m| m.borrow().vote));

    let rated = votes.len() as u32;
    let share_at_least = |threshold: f64| {
        if rated == 0 {
            None
        } else {
            let hits = votes.iter().filter(|v| **v >= threshold).count() as u32;
            Some(ratio_pct(hits, rated))
        }
    };

    FantasyMetrics {
        mv,
        // No bonus/malus breakdown in the feed, so the fantasy mean
        // mirrors the plain vote mean.
        fmv: mv,
        pct_vote_ge_6: share_at_least(VOTE_SUFFICIENT),
        pct_vote_ge_6_5: share_at_least(VOTE_GOOD),
        mv_last5,
        fmv_last5: mv_last5,
    }
}

/// General totals and availability metrics.
pub fn general_metrics<S, M>(stats: &[S], matches: &[M]) -> GeneralMetrics
where
    S: Borrow<SeasonStat>,
    M: Borrow<MatchStat>,
{
    let presenze = sum_counter(stats, |s| s.presenze);
    let minutes = sum_counter(stats, |s| s.min_playing_time);

    GeneralMetrics {
        goals_total: sum_counter(stats, |s| s.gf),
        assists_total: sum_counter(stats, |s| s.assist),
        matches_rated: matches.len() as u32,
        starts: sum_counter(stats, |s| s.starts_eleven),
        minutes_per_match: per_match(minutes, presenze),
        pass_accuracy_pct: mean(
            stats
                .iter()
                .filter_map(|s| s.borrow().accurate_passes_percentage),
        ),
    }
}

/// Offensive production metrics.
pub fn offensive_metrics<S: Borrow<SeasonStat>>(stats: &[S]) -> OffensiveMetrics {
    let presenze = sum_counter(stats, |s| s.presenze);
    let shots = sum_counter(stats, |s| s.total_shots);
    let goals = sum_counter(stats, |s| s.gf);

    OffensiveMetrics {
        shots_per_match: per_match(shots, presenze),
        shots_on_target_per_match: per_match(sum_counter(stats, |s| s.shots_on_target), presenze),
        goals_pct_of_shots: ratio_pct(goals, shots),
        headed_goals: sum_counter(stats, |s| s.headed_goals),
        big_chances_missed: sum_counter(stats, |s| s.big_chances_missed),
        key_passes_per_match: per_match(sum_counter(stats, |s| s.key_passes), presenze),
        dribble_success_pct: mean(
            stats
                .iter()
                .filter_map(|s| s.borrow().successful_dribbles_percentage),
        ),
    }
}

/// Defensive and discipline metrics.
pub fn defensive_metrics<S: Borrow<SeasonStat>>(stats: &[S]) -> DefensiveMetrics {
    let presenze = sum_counter(stats, |s| s.presenze);
    let cards = sum_counter(stats, |s| s.amm) + sum_counter(stats, |s| s.esp);

    DefensiveMetrics {
        cards_total: cards,
        cards_per_match: per_match(cards, presenze),
        fouls_per_match: per_match(sum_counter(stats, |s| s.fouls), presenze),
        possession_lost_per_match: per_match(sum_counter(stats, |s| s.possession_lost), presenze),
        recoveries_per_match: per_match(sum_counter(stats, |s| s.interceptions), presenze),
        duels_won_per_match: per_match(sum_counter(stats, |s| s.total_duels_won), presenze),
        aerial_duels_won_per_match: per_match(sum_counter(stats, |s| s.aerial_duels_won), presenze),
    }
}
