pub mod pdftotext;

use crate::error::VejviserError;
use serde::Serialize;

/// Bounding box of an extracted label, in document units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BBox {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl BBox {
    /// The label's raw position: the box origin.
    pub fn origin(&self) -> (f64, f64) {
        (self.x_min, self.y_min)
    }
}

/// One raw text token extracted from a plan document.
#[derive(Debug, Clone, Serialize)]
pub struct Label {
    pub text: String,
    pub bbox: BBox,
}

/// Everything extracted from a single plan page. Page dimensions travel
/// with the labels so downstream normalization is always possible.
#[derive(Debug, Clone, Serialize)]
pub struct PageLabels {
    pub page_width: f64,
    pub page_height: f64,
    pub labels: Vec<Label>,
}

/// Trait for floor-plan text extraction backends.
pub trait DocumentExtractor: Send + Sync {
    /// Extract labeled text with bounding boxes from one page (1-based)
    /// of a plan document.
    fn extract_page(&self, doc_bytes: &[u8], page_number: usize)
        -> Result<PageLabels, VejviserError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
