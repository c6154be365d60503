use crate::model::{Floor, NormalizedPoint};
use serde::Serialize;

/// Result of locating a room: the placement to render, or an explicit
/// not-found outcome. Not-found is an expected result, never an error.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LocateResult {
    Found(Placement),
    NotFound {
        /// The normalized form of the query that had no match.
        query: String,
    },
}

/// Everything the presentation layer needs to highlight a room and its
/// nearest ground-floor entrance.
#[derive(Debug, Clone, Serialize)]
pub struct Placement {
    /// Floor whose plan should be rendered.
    pub floor: Floor,
    /// Room name as stored in the index (trimmed, uppercased).
    pub room: String,
    pub room_position: NormalizedPoint,
    /// Nearest entrance on the ground floor, in the ground plan's frame.
    pub entrance: NormalizedPoint,
    /// Straight-line distance from room to entrance in normalized units.
    pub entrance_distance: f64,
}
