//! # fantastats
//!
//! Per-player football statistics aggregation for fantacalcio dashboards.
//!
//! Loads a scraped player export (profiles with nested season and match
//! rows), flattens it into an immutable snapshot, and computes the derived
//! metric groups a dashboard renders: vote averages and last-5 form,
//! general totals, offensive and defensive per-match rates, plus the
//! classified editorial indices.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (players, season rows, match rows, metric groups)
//! - **ingest**: Parsing of the JSON export into typed records
//! - **calculate**: Pure aggregation functions for the derived metrics
//! - **dataset**: Immutable snapshot with the query surface dashboards use
//!
//! ## Example
//!
//! ```
//! use fantastats::{Dataset, PlayerId};
//!
//! let raw = r#"[{
//!     "player_id": 1,
//!     "name": "Luca Ferrara",
//!     "team_name_short": "BRG",
//!     "stats": [{"season": "23/24", "presenze": 10, "gf": 5, "min_playing_time": 900}],
//!     "gamestats": [{"vote": 6}, {"vote": 7}, {"vote": 5}]
//! }]"#;
//!
//! let dataset = Dataset::from_json_str(raw)?;
//! let dashboard = dataset
//!     .player_dashboard(&PlayerId::from("1"), None)
//!     .ok_or("unknown player")?;
//! assert_eq!(dashboard.general.goals_total, 5);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod calculate;
pub mod dataset;
pub mod ingest;
pub mod models;

pub use dataset::{Dataset, TopMetric, FILTER_ALL};
pub use ingest::{PlayerRecord, RecordError};
pub use models::*;
