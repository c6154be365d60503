use crate::error::VejviserError;
use crate::model::{BuildingIndex, NormalizedPoint, ResolvedRoom};

/// Resolve a raw query to a room.
///
/// The query is normalized the same way room names were indexed (trim,
/// uppercase) and compared for exact equality; no substring or fuzzy
/// matching. Floors are scanned in `Floor::PRIORITY` order, so a name
/// that (due to a data error) exists on several floors deterministically
/// resolves to ground, then floor_1, then floor_2.
pub fn resolve(index: &BuildingIndex, query: &str) -> Option<ResolvedRoom> {
    let name = normalize_query(query);
    if name.is_empty() {
        return None;
    }

    for floor_index in index.floors() {
        if let Some(position) = floor_index.rooms.get(&name) {
            return Some(ResolvedRoom {
                floor: floor_index.floor,
                name,
                position: *position,
            });
        }
    }

    None
}

/// Normalize a query exactly like indexed room names.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_uppercase()
}

/// Select the entrance nearest to a room position.
///
/// Distances are squared Euclidean, computed in normalized coordinates;
/// both points must come from plans with a comparable aspect ratio (a
/// known limitation when storeys were drawn at different page shapes).
/// On exact ties the first entrance in iteration order wins. An empty
/// entrance set is a `NoEntrances` error; the building loader makes that
/// unreachable, but it is defended here independently.
pub fn nearest_entrance(
    room: NormalizedPoint,
    entrances: &[NormalizedPoint],
) -> Result<NormalizedPoint, VejviserError> {
    let mut best: Option<(f64, NormalizedPoint)> = None;

    for &entrance in entrances {
        let d = room.squared_distance(entrance);
        match best {
            Some((best_d, _)) if d >= best_d => {}
            _ => best = Some((d, entrance)),
        }
    }

    best.map(|(_, e)| e).ok_or(VejviserError::NoEntrances)
}
