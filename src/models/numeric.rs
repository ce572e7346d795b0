//! Lenient numeric field deserialization.
//!
//! Scraped exports are sloppy about numbers: a counter may arrive as an
//! integer, a float, or a digit string, and a missing value may be `null`,
//! `""`, or `"-"`. These helpers fold all of those shapes into `Option`
//! fields. Genuinely malformed values (non-numeric text, booleans,
//! negative or fractional counters) are still rejected so a bad record
//! fails loudly instead of skewing the aggregates.

use serde::de::{self, Visitor};
use serde::Deserializer;
use std::fmt;

/// Parse a string cell into an optional number.
///
/// `""` and `"-"` are the export's spellings of "no data"; a trailing `%`
/// is tolerated on percentage columns.
fn numeric_str(s: &str) -> Result<Option<f64>, ()> {
    let s = s.trim();
    if s.is_empty() || s == "-" {
        return Ok(None);
    }
    let s = s.strip_suffix('%').map(str::trim_end).unwrap_or(s);
    // f64 parsing accepts "NaN" and "inf" spellings; those are malformed
    // cells here, not numbers the aggregates can carry.
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(()),
    }
}

fn count_from_f64<E>(v: f64) -> Result<u32, E>
where
    E: de::Error,
{
    if v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v <= f64::from(u32::MAX) {
        Ok(v as u32)
    } else {
        Err(E::invalid_value(
            de::Unexpected::Float(v),
            &"a non-negative whole number",
        ))
    }
}

/// Deserialize an optional float that may be a number, a numeric string,
/// `null`, `""`, or `"-"`.
pub(crate) fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    struct FloatVisitor;

    impl<'de> Visitor<'de> for FloatVisitor {
        type Value = Option<f64>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a number, a numeric string, or null")
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(v))
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(v as f64))
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(v as f64))
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            numeric_str(v).map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
        }
    }

    deserializer.deserialize_any(FloatVisitor)
}

/// Deserialize an optional counter that may be an integer, a whole float,
/// a digit string, `null`, `""`, or `"-"`.
pub(crate) fn opt_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    struct CountVisitor;

    impl<'de> Visitor<'de> for CountVisitor {
        type Value = Option<u32>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a non-negative whole number, a digit string, or null")
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            u32::try_from(v)
                .map(Some)
                .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            u32::try_from(v)
                .map(Some)
                .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
        }

        fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            count_from_f64(v).map(Some)
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            match numeric_str(v) {
                Ok(None) => Ok(None),
                Ok(Some(parsed)) => count_from_f64(parsed).map(Some),
                Err(()) => Err(E::invalid_value(de::Unexpected::Str(v), &self)),
            }
        }
    }

    deserializer.deserialize_any(CountVisitor)
}
