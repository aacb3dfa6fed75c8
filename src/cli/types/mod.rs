//! Type-safe wrappers for NHL stats API identifiers and seasons.

pub mod ids;
pub mod time;

pub use ids::{PlayerId, TeamId};
pub use time::Season;
