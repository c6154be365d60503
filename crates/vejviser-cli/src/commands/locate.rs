use std::path::{Path, PathBuf};
use vejviser_core::error::VejviserError;
use vejviser_core::extraction::pdftotext::PdftotextExtractor;
use vejviser_core::model::Floor;
use vejviser_core::profile::BuildingProfile;
use vejviser_core::{load_building, locate_room, FloorDocuments};

use crate::output;

pub fn run(
    query: &str,
    building_dir: PathBuf,
    profile_file: Option<PathBuf>,
    output_format: &str,
) -> Result<(), VejviserError> {
    let profile = super::profile_or_default(profile_file)?;

    let documents = FloorDocuments {
        ground: read_document(&building_dir, &profile, Floor::Ground)?,
        floor_1: read_document(&building_dir, &profile, Floor::Floor1)?,
        floor_2: read_document(&building_dir, &profile, Floor::Floor2)?,
    };

    let extractor = PdftotextExtractor::new();
    let index = load_building(&documents, &extractor, &profile)?;
    let result = locate_room(&index, query)?;

    match output_format {
        "json" => output::json::print(&result)?,
        _ => output::table::print_locate(&result, &index, &profile),
    }

    Ok(())
}

fn read_document(
    building_dir: &Path,
    profile: &BuildingProfile,
    floor: Floor,
) -> Result<Vec<u8>, VejviserError> {
    let path = building_dir.join(profile.document_file(floor));
    std::fs::read(&path)
        .map_err(|e| VejviserError::DocumentRead(format!("{}: {}", path.display(), e)))
}
