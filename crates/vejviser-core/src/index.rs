use crate::error::VejviserError;
use crate::extraction::PageLabels;
use crate::model::{Floor, FloorIndex, NormalizedPoint};
use crate::profile::BuildingProfile;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Build a floor's index from the labels extracted off its plan page.
///
/// Labels are classified entrance-first against the profile's marker
/// vocabulary, then filtered through the profile's room patterns. Room
/// names are stored trimmed and uppercased; when a name occurs more than
/// once on the floor the first occurrence wins. Entrances are collected
/// only for the ground floor; entrance-like labels elsewhere are ignored.
pub fn build_floor(
    floor: Floor,
    page: PageLabels,
    profile: &BuildingProfile,
) -> Result<FloorIndex, VejviserError> {
    let mut rooms: BTreeMap<String, NormalizedPoint> = BTreeMap::new();
    let mut entrances: Vec<NormalizedPoint> = Vec::new();

    for label in &page.labels {
        let text = label.text.trim();
        if text.is_empty() {
            continue;
        }

        let (raw_x, raw_y) = label.bbox.origin();
        let point = NormalizedPoint::from_raw(raw_x, raw_y, page.page_width, page.page_height)
            .ok_or_else(|| VejviserError::PointOutOfRange {
                text: text.to_string(),
                x: raw_x / page.page_width,
                y: raw_y / page.page_height,
            })?;

        if profile.is_entrance(text) {
            if floor == Floor::Ground {
                entrances.push(point);
            } else {
                debug!("ignoring entrance label '{}' on {}", text, floor);
            }
        } else if profile.is_room(text) {
            let name = text.to_uppercase();
            if rooms.contains_key(&name) {
                warn!("duplicate room label '{}' on {}; keeping first", name, floor);
            } else {
                rooms.insert(name, point);
            }
        }
    }

    if rooms.is_empty() {
        return Err(VejviserError::EmptyFloor { floor });
    }

    debug!(
        "indexed {}: {} rooms, {} entrances",
        floor,
        rooms.len(),
        entrances.len()
    );

    Ok(FloorIndex {
        floor,
        page_width: page.page_width,
        page_height: page.page_height,
        rooms,
        entrances,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::{BBox, Label};
    use crate::profile::builtin::default_profile;

    fn label(text: &str, x: f64, y: f64) -> Label {
        Label {
            text: text.to_string(),
            bbox: BBox {
                x_min: x,
                y_min: y,
                x_max: x + 20.0,
                y_max: y + 10.0,
            },
        }
    }

    fn page(labels: Vec<Label>) -> PageLabels {
        PageLabels {
            page_width: 600.0,
            page_height: 1200.0,
            labels,
        }
    }

    #[test]
    fn test_build_ground_floor() {
        let profile = default_profile().unwrap();
        let index = build_floor(
            Floor::Ground,
            page(vec![
                label("A.0.01", 150.0, 300.0),
                label("A.0.02", 300.0, 300.0),
                label("Indgang", 60.0, 1080.0),
            ]),
            &profile,
        )
        .unwrap();

        assert_eq!(index.rooms.len(), 2);
        assert_eq!(index.entrances.len(), 1);
        let p = index.rooms.get("A.0.01").unwrap();
        assert_eq!(p.x(), 0.25);
        assert_eq!(p.y(), 0.25);
    }

    #[test]
    fn test_room_names_uppercased_and_trimmed() {
        let profile = default_profile().unwrap();
        let index = build_floor(
            Floor::Ground,
            page(vec![label("  a.0.01  ", 150.0, 300.0)]),
            &profile,
        )
        .unwrap();
        assert!(index.rooms.contains_key("A.0.01"));
    }

    #[test]
    fn test_entrance_on_upper_floor_ignored() {
        let profile = default_profile().unwrap();
        let index = build_floor(
            Floor::Floor1,
            page(vec![
                label("A.1.10", 150.0, 300.0),
                label("Indgang", 60.0, 1080.0),
            ]),
            &profile,
        )
        .unwrap();
        assert!(index.entrances.is_empty());
        assert_eq!(index.rooms.len(), 1);
    }

    #[test]
    fn test_duplicate_label_first_wins() {
        let profile = default_profile().unwrap();
        let index = build_floor(
            Floor::Ground,
            page(vec![
                label("A.0.01", 150.0, 300.0),
                label("A.0.01", 450.0, 900.0),
            ]),
            &profile,
        )
        .unwrap();
        let p = index.rooms.get("A.0.01").unwrap();
        assert_eq!(p.x(), 0.25);
        assert_eq!(p.y(), 0.25);
    }

    #[test]
    fn test_empty_floor_reported() {
        let profile = default_profile().unwrap();
        let result = build_floor(
            Floor::Floor2,
            page(vec![label("   ", 10.0, 10.0)]),
            &profile,
        );
        assert!(matches!(
            result,
            Err(VejviserError::EmptyFloor {
                floor: Floor::Floor2
            })
        ));
    }

    #[test]
    fn test_out_of_range_label_rejected_not_clamped() {
        let profile = default_profile().unwrap();
        let result = build_floor(
            Floor::Ground,
            page(vec![
                label("A.0.01", 150.0, 300.0),
                // Origin beyond the page width: corrupt extraction.
                label("A.0.99", 700.0, 300.0),
            ]),
            &profile,
        );
        match result {
            Err(VejviserError::PointOutOfRange { text, .. }) => assert_eq!(text, "A.0.99"),
            other => panic!("expected PointOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_non_room_labels_filtered() {
        let profile = default_profile().unwrap();
        let result = build_floor(
            Floor::Ground,
            page(vec![
                label("A.0.01", 150.0, 300.0),
                label("12.5m2", 200.0, 300.0),
                label("scale", 250.0, 300.0),
            ]),
            &profile,
        )
        .unwrap();
        assert_eq!(result.rooms.len(), 1);
    }
}
