//! Match-level statistics row.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::numeric;
use super::PlayerId;

/// One match entry for a player.
///
/// Collection order is the source order, oldest first, and the rolling
/// "last 5" window depends on it. Nothing in the crate re-sorts match rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchStat {
    /// Owning player; filled from the parent record when rows arrive nested
    pub player_id: Option<PlayerId>,

    /// Match rating; absent when the player went unrated or did not play
    #[serde(default, deserialize_with = "numeric::opt_f64")]
    pub vote: Option<f64>,

    /// Source columns the engine does not interpret
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MatchStat {
    /// A rated match entry.
    pub fn rated(vote: f64) -> Self {
        Self {
            vote: Some(vote),
            ..Self::default()
        }
    }

    /// A match entry without a rating.
    pub fn unrated() -> Self {
        Self::default()
    }

    /// Whether the entry carries a rating.
    pub fn is_rated(&self) -> bool {
        self.vote.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_rated() {
        let stat: MatchStat = serde_json::from_str(r#"{"vote": 6.5}"#).unwrap();
        assert_eq!(stat.vote, Some(6.5));
        assert!(stat.is_rated());
    }

    #[test]
    fn test_deserialize_vote_as_string() {
        let stat: MatchStat = serde_json::from_str(r#"{"vote": "7"}"#).unwrap();
        assert_eq!(stat.vote, Some(7.0));
    }

    #[test]
    fn test_deserialize_unrated() {
        let stat: MatchStat = serde_json::from_str(r#"{"vote": null}"#).unwrap();
        assert_eq!(stat.vote, None);
        assert!(!stat.is_rated());

        let stat: MatchStat = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(stat.vote, None);
    }

    #[test]
    fn test_nan_string_vote_rejected() {
        // A "NaN" cell must fail the record, not seep into the vote means.
        let result: Result<MatchStat, _> = serde_json::from_str(r#"{"vote": "NaN"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_columns_kept_in_extra() {
        let json = r#"{"vote": 6, "opponent": "SRN", "minutes": 90}"#;
        let stat: MatchStat = serde_json::from_str(json).unwrap();
        assert_eq!(stat.vote, Some(6.0));
        assert!(stat.extra.contains_key("opponent"));
        assert!(stat.extra.contains_key("minutes"));
    }

    #[test]
    fn test_constructors() {
        assert_eq!(MatchStat::rated(6.5).vote, Some(6.5));
        assert_eq!(MatchStat::unrated().vote, None);
    }
}
