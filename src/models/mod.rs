//! Core data models for the stats engine.

mod ids;
mod indices;
mod match_stat;
mod metrics;
mod numeric;
mod player;
mod season_stat;

pub use ids::*;
pub use indices::*;
pub use match_stat::*;
pub use metrics::*;
pub use player::*;
pub use season_stat::*;
