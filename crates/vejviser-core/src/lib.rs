pub mod error;
pub mod extraction;
pub mod index;
pub mod locate;
pub mod model;
pub mod profile;

use error::VejviserError;
use extraction::DocumentExtractor;
use locate::outcome::{LocateResult, Placement};
use model::{BuildingIndex, Floor, FloorIndex};
use tracing::debug;

/// Raw bytes of the three floor-plan documents.
pub struct FloorDocuments {
    pub ground: Vec<u8>,
    pub floor_1: Vec<u8>,
    pub floor_2: Vec<u8>,
}

impl FloorDocuments {
    fn bytes(&self, floor: Floor) -> &[u8] {
        match floor {
            Floor::Ground => &self.ground,
            Floor::Floor1 => &self.floor_1,
            Floor::Floor2 => &self.floor_2,
        }
    }
}

/// Build the whole building index from the three plan documents.
///
/// Runs the extractor and the floor index builder over each floor; the
/// first per-floor failure aborts the load wrapped as `BuildingLoad`, so
/// a partially built index is never observable. The ground floor must end
/// up with at least one entrance, otherwise loading fails with
/// `NoEntrances`. This is a load-time operation: run it once at startup,
/// then treat the returned index as read-only.
pub fn load_building(
    documents: &FloorDocuments,
    extractor: &dyn DocumentExtractor,
    profile: &profile::BuildingProfile,
) -> Result<BuildingIndex, VejviserError> {
    let load = |floor: Floor| -> Result<FloorIndex, VejviserError> {
        index_floor(floor, documents.bytes(floor), extractor, profile)
            .map_err(|e| wrap_load_error(floor, e))
    };

    let ground = load(Floor::Ground)?;
    let floor_1 = load(Floor::Floor1)?;
    let floor_2 = load(Floor::Floor2)?;

    if ground.entrances.is_empty() {
        return Err(wrap_load_error(Floor::Ground, VejviserError::NoEntrances));
    }

    let index = BuildingIndex {
        ground,
        floor_1,
        floor_2,
    };
    debug!(
        "building index loaded via {}: {} rooms total",
        extractor.backend_name(),
        index.room_count()
    );
    Ok(index)
}

/// Extract and index a single floor document.
pub fn index_floor(
    floor: Floor,
    doc_bytes: &[u8],
    extractor: &dyn DocumentExtractor,
    profile: &profile::BuildingProfile,
) -> Result<FloorIndex, VejviserError> {
    let page = extractor.extract_page(doc_bytes, profile.page())?;
    index::build_floor(floor, page, profile)
}

fn wrap_load_error(floor: Floor, source: VejviserError) -> VejviserError {
    VejviserError::BuildingLoad {
        floor,
        source: Box::new(source),
    }
}

/// Locate a room by query and pair it with the nearest ground-floor
/// entrance.
///
/// A query with no match is the `NotFound` outcome, not an error; the
/// only error path is the defensive empty-entrance check, unreachable for
/// an index produced by `load_building`.
pub fn locate_room(index: &BuildingIndex, query: &str) -> Result<LocateResult, VejviserError> {
    match locate::resolve(index, query) {
        None => Ok(LocateResult::NotFound {
            query: locate::engine::normalize_query(query),
        }),
        Some(room) => {
            let entrance = locate::nearest_entrance(room.position, &index.ground().entrances)?;
            let entrance_distance = room.position.squared_distance(entrance).sqrt();
            Ok(LocateResult::Found(Placement {
                floor: room.floor,
                room: room.name,
                room_position: room.position,
                entrance,
                entrance_distance,
            }))
        }
    }
}
