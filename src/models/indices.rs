//! Editorial index classification.
//!
//! Players carry three 0-5 editorial indices: affidabilita (reliability),
//! titolarita (likelihood of starting), and integrita (fitness). Dashboards
//! show each as a colored badge rather than a bare number.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Band for an editorial index value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexBand {
    /// Value at or below 2
    Low,
    /// Value exactly 3
    Mid,
    /// Any other real value, including between 2 and 3 or above the nominal scale
    High,
    /// No value recorded
    Unknown,
}

impl IndexBand {
    /// Classify a raw index value into its band.
    ///
    /// The banding is deliberately coarse: <= 2 is low, exactly 3 is mid,
    /// and everything else with a real value is high. No rounding, no
    /// range validation.
    pub fn classify(value: Option<f64>) -> Self {
        match value {
            None => IndexBand::Unknown,
            Some(v) if v.is_nan() => IndexBand::Unknown,
            Some(v) if v <= 2.0 => IndexBand::Low,
            Some(v) if v == 3.0 => IndexBand::Mid,
            Some(_) => IndexBand::High,
        }
    }

    /// Badge color conventionally paired with this band.
    pub fn color(&self) -> ColorHint {
        match self {
            IndexBand::Low => ColorHint::Red,
            IndexBand::Mid => ColorHint::Yellow,
            IndexBand::High => ColorHint::Green,
            IndexBand::Unknown => ColorHint::Grey,
        }
    }
}

impl fmt::Display for IndexBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            IndexBand::Low => "Low",
            IndexBand::Mid => "Mid",
            IndexBand::High => "High",
            IndexBand::Unknown => "Unknown",
        };
        write!(f, "{}", label)
    }
}

/// Suggested badge color for a classified index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorHint {
    Red,
    Yellow,
    Green,
    Grey,
}

impl fmt::Display for ColorHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ColorHint::Red => "red",
            ColorHint::Yellow => "yellow",
            ColorHint::Green => "green",
            ColorHint::Grey => "grey",
        };
        write!(f, "{}", label)
    }
}

/// A classified index ready for badge rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IndexBadge {
    /// Raw value as loaded, if any
    pub value: Option<f64>,

    /// Classified band
    pub band: IndexBand,

    /// Badge color matching the band
    pub color: ColorHint,
}

impl IndexBadge {
    /// Classify a raw value into a badge.
    pub fn classify(value: Option<f64>) -> Self {
        let band = IndexBand::classify(value);
        Self {
            value,
            band,
            color: band.color(),
        }
    }
}

/// The three per-player editorial indices, classified.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlayerIndices {
    /// Affidabilita (reliability)
    pub aff: IndexBadge,

    /// Titolarita (likelihood of starting)
    pub tit: IndexBadge,

    /// Integrita (fitness)
    pub inf: IndexBadge,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_low_at_two() {
        assert_eq!(IndexBand::classify(Some(2.0)), IndexBand::Low);
        assert_eq!(IndexBand::classify(Some(2.0)).color(), ColorHint::Red);
    }

    #[test]
    fn test_classify_low_below_two() {
        assert_eq!(IndexBand::classify(Some(0.0)), IndexBand::Low);
        assert_eq!(IndexBand::classify(Some(1.5)), IndexBand::Low);
    }

    #[test]
    fn test_classify_mid_exactly_three() {
        assert_eq!(IndexBand::classify(Some(3.0)), IndexBand::Mid);
        assert_eq!(IndexBand::classify(Some(3.0)).color(), ColorHint::Yellow);
    }

    #[test]
    fn test_classify_high_above_three() {
        assert_eq!(IndexBand::classify(Some(3.1)), IndexBand::High);
        assert_eq!(IndexBand::classify(Some(5.0)), IndexBand::High);
        assert_eq!(IndexBand::classify(Some(3.1)).color(), ColorHint::Green);
    }

    #[test]
    fn test_classify_between_two_and_three_is_high() {
        // Not low (above 2), not mid (not exactly 3), so high.
        assert_eq!(IndexBand::classify(Some(2.5)), IndexBand::High);
    }

    #[test]
    fn test_classify_absent_is_unknown() {
        assert_eq!(IndexBand::classify(None), IndexBand::Unknown);
        assert_eq!(IndexBand::classify(None).color(), ColorHint::Grey);
    }

    #[test]
    fn test_classify_nan_is_unknown() {
        assert_eq!(IndexBand::classify(Some(f64::NAN)), IndexBand::Unknown);
    }

    #[test]
    fn test_badge_carries_value_band_and_color() {
        let badge = IndexBadge::classify(Some(4.0));
        assert_eq!(badge.value, Some(4.0));
        assert_eq!(badge.band, IndexBand::High);
        assert_eq!(badge.color, ColorHint::Green);
    }

    #[test]
    fn test_band_display() {
        assert_eq!(IndexBand::Low.to_string(), "Low");
        assert_eq!(IndexBand::Unknown.to_string(), "Unknown");
    }

    #[test]
    fn test_color_display() {
        assert_eq!(ColorHint::Red.to_string(), "red");
        assert_eq!(ColorHint::Grey.to_string(), "grey");
    }
}
