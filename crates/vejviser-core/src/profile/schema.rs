use serde::{Deserialize, Serialize};

/// A building profile: the scanning parameters for one building's set of
/// floor-plan documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildingProfileDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Document file name per floor, resolved against the building
    /// directory at load time.
    pub documents: FloorDocumentsDef,
    /// Labels marking a building entrance (case-insensitive substring
    /// match, e.g. "indgang").
    pub entrance_markers: Vec<String>,
    /// Patterns a label must match to count as a room name.
    pub room_patterns: Vec<PatternDef>,
    /// Patterns that disqualify a label even when a room pattern matches
    /// (area measurements, plan metadata).
    #[serde(default)]
    pub exclude_patterns: Vec<PatternDef>,
    #[serde(default = "default_min_label_len")]
    pub min_label_len: usize,
    #[serde(default = "default_max_label_len")]
    pub max_label_len: usize,
    /// Which page of each document holds the plan (1-based).
    #[serde(default = "default_page")]
    pub page: usize,
    /// Scale factor the presentation layer should render plans at.
    #[serde(default = "default_render_scale")]
    pub render_scale: f64,
}

/// File names of the three floor documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorDocumentsDef {
    pub ground: String,
    pub floor_1: String,
    pub floor_2: String,
}

/// A single label pattern within a profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternDef {
    /// Regular expression, matched case-insensitively against the
    /// trimmed label text.
    pub pattern: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_min_label_len() -> usize {
    1
}

fn default_max_label_len() -> usize {
    15
}

fn default_page() -> usize {
    1
}

fn default_render_scale() -> f64 {
    2.0
}

fn default_true() -> bool {
    true
}
