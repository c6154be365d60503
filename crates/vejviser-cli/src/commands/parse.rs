use std::path::PathBuf;
use vejviser_core::error::VejviserError;
use vejviser_core::extraction::pdftotext::PdftotextExtractor;
use vejviser_core::extraction::DocumentExtractor;
use vejviser_core::index_floor;
use vejviser_core::model::Floor;

use crate::output;

pub fn run(
    document: PathBuf,
    floor: Floor,
    profile_file: Option<PathBuf>,
    output_format: &str,
    raw: bool,
) -> Result<(), VejviserError> {
    let profile = super::profile_or_default(profile_file)?;
    let doc_bytes = std::fs::read(&document)
        .map_err(|e| VejviserError::DocumentRead(format!("{}: {}", document.display(), e)))?;
    let extractor = PdftotextExtractor::new();

    if raw {
        // Dump every extracted label before classification.
        let page = extractor.extract_page(&doc_bytes, profile.page())?;
        match output_format {
            "json" => output::json::print(&page)?,
            _ => output::table::print_raw(&page),
        }
        return Ok(());
    }

    let index = index_floor(floor, &doc_bytes, &extractor, &profile)?;
    match output_format {
        "json" => output::json::print(&index)?,
        _ => output::table::print_floor(&index),
    }

    Ok(())
}
