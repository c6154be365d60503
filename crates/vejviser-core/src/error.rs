use crate::model::Floor;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum VejviserError {
    #[error("failed to read floor plan document: {0}")]
    DocumentRead(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("document has no page {page}")]
    PageMissing { page: usize },

    #[error("floor '{floor}' yielded no room labels")]
    EmptyFloor { floor: Floor },

    #[error("ground floor has no entrance markers")]
    NoEntrances,

    #[error("label '{text}' normalizes outside the page to ({x}, {y})")]
    PointOutOfRange { text: String, x: f64, y: f64 },

    #[error("failed to load floor '{floor}': {source}")]
    BuildingLoad {
        floor: Floor,
        #[source]
        source: Box<VejviserError>,
    },

    #[error("failed to load building profile from {path}: {reason}")]
    ProfileLoad { path: PathBuf, reason: String },

    #[error("invalid building profile: {0}")]
    ProfileInvalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
