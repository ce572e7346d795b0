//! Player identity and profile record.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::numeric;
use super::{IndexBadge, PlayerId, PlayerIndices};

/// A player as loaded from the source export.
///
/// Identity plus the free-form profile columns the export carries. A loaded
/// player is a read-only snapshot; nothing in the crate mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Unique identifier; season and match rows join on this
    pub player_id: PlayerId,

    /// Display name
    pub name: String,

    /// Role label (e.g. "P", "D", "C", "A")
    pub role: Option<String>,

    /// Short team name
    #[serde(alias = "team_name_short")]
    pub team: Option<String>,

    /// Country
    pub country: Option<String>,

    /// Height in centimetres
    #[serde(default, deserialize_with = "numeric::opt_f64")]
    pub height: Option<f64>,

    /// Affidabilita (reliability) index, nominally 0-5
    #[serde(default, deserialize_with = "numeric::opt_f64")]
    pub aff_index: Option<f64>,

    /// Titolarita (starter) index
    #[serde(default, deserialize_with = "numeric::opt_f64")]
    pub tit_index: Option<f64>,

    /// Integrita (fitness) index
    #[serde(default, deserialize_with = "numeric::opt_f64")]
    pub inf_index: Option<f64>,

    /// Free-text editorial comment
    pub comment: Option<String>,

    /// Profile columns the engine does not interpret, kept for raw display
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Player {
    /// Create a player with identity only; profile fields start absent.
    pub fn new(player_id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        Self {
            player_id: player_id.into(),
            name: name.into(),
            role: None,
            team: None,
            country: None,
            height: None,
            aff_index: None,
            tit_index: None,
            inf_index: None,
            comment: None,
            extra: Map::new(),
        }
    }

    /// Set the role label.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Set the team name.
    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    /// Set the country.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Set the reliability index.
    pub fn with_aff_index(mut self, value: f64) -> Self {
        self.aff_index = Some(value);
        self
    }

    /// Set the starter index.
    pub fn with_tit_index(mut self, value: f64) -> Self {
        self.tit_index = Some(value);
        self
    }

    /// Set the fitness index.
    pub fn with_inf_index(mut self, value: f64) -> Self {
        self.inf_index = Some(value);
        self
    }

    /// Set the editorial comment.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Classify the three editorial indices for badge rendering.
    pub fn indices(&self) -> PlayerIndices {
        PlayerIndices {
            aff: IndexBadge::classify(self.aff_index),
            tit: IndexBadge::classify(self.tit_index),
            inf: IndexBadge::classify(self.inf_index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::{ColorHint, IndexBand};
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_deserialize_full_profile() {
        let json = r#"{
            "player_id": 2845,
            "name": "Luca Ferrara",
            "role": "A",
            "team_name_short": "BRG",
            "country": "Italy",
            "height": "183",
            "aff_index": 4,
            "tit_index": 3,
            "inf_index": 2,
            "comment": "Rigorista designato."
        }"#;
        let player: Player = serde_json::from_str(json).unwrap();
        assert_eq!(player.player_id.as_str(), "2845");
        assert_eq!(player.name, "Luca Ferrara");
        assert_eq!(player.role.as_deref(), Some("A"));
        assert_eq!(player.team.as_deref(), Some("BRG"));
        assert_eq!(player.height, Some(183.0));
        assert_eq!(player.aff_index, Some(4.0));
    }

    #[test]
    fn test_deserialize_minimal_profile() {
        let json = r#"{"player_id": "9", "name": "Mattia Ricci"}"#;
        let player: Player = serde_json::from_str(json).unwrap();
        assert_eq!(player.name, "Mattia Ricci");
        assert_eq!(player.role, None);
        assert_eq!(player.team, None);
        assert_eq!(player.aff_index, None);
    }

    #[test]
    fn test_missing_name_is_an_error() {
        let result: Result<Player, _> = serde_json::from_str(r#"{"player_id": 1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_fields_kept_in_extra() {
        let json = r#"{
            "player_id": 1,
            "name": "Davide Bruno",
            "preferred_foot": "left",
            "market_value": 1200000
        }"#;
        let player: Player = serde_json::from_str(json).unwrap();
        assert_eq!(
            player.extra.get("preferred_foot"),
            Some(&Value::String("left".to_string()))
        );
        assert!(player.extra.contains_key("market_value"));
    }

    #[test]
    fn test_indices_classification() {
        let player = Player::new("1", "Luca Ferrara")
            .with_aff_index(4.0)
            .with_tit_index(3.0)
            .with_inf_index(2.0);
        let indices = player.indices();
        assert_eq!(indices.aff.band, IndexBand::High);
        assert_eq!(indices.aff.color, ColorHint::Green);
        assert_eq!(indices.tit.band, IndexBand::Mid);
        assert_eq!(indices.inf.band, IndexBand::Low);
    }

    #[test]
    fn test_indices_absent_are_unknown() {
        let player = Player::new("1", "Luca Ferrara");
        let indices = player.indices();
        assert_eq!(indices.aff.band, IndexBand::Unknown);
        assert_eq!(indices.tit.band, IndexBand::Unknown);
        assert_eq!(indices.inf.band, IndexBand::Unknown);
    }

    #[test]
    fn test_serialize_round_trip() {
        let player = Player::new("7", "Mattia Ricci")
            .with_role("C")
            .with_team("SRN");
        let json = serde_json::to_string(&player).unwrap();
        let back: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, back);
    }
}
