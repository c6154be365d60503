use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Identifier for one of the building's three documented storeys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Floor {
    #[serde(rename = "ground")]
    Ground,
    #[serde(rename = "floor_1")]
    Floor1,
    #[serde(rename = "floor_2")]
    Floor2,
}

impl Floor {
    /// Fixed resolution order. When the same room name appears on more
    /// than one floor, the earliest floor in this list wins.
    pub const PRIORITY: [Floor; 3] = [Floor::Ground, Floor::Floor1, Floor::Floor2];

    pub fn as_str(&self) -> &'static str {
        match self {
            Floor::Ground => "ground",
            Floor::Floor1 => "floor_1",
            Floor::Floor2 => "floor_2",
        }
    }

    /// Parse a floor identifier from loose user input.
    ///
    /// Accepts the canonical identifiers plus the Danish storey names the
    /// plan documents use ("stueetage", "1. sal") and bare digits.
    pub fn from_str_loose(s: &str) -> Option<Floor> {
        let lower = s.trim().to_lowercase();
        if lower == "ground" || lower == "0" || lower.contains("stue") {
            Some(Floor::Ground)
        } else if lower == "floor_1" || lower == "1" || lower.starts_with("1.") || lower == "first"
        {
            Some(Floor::Floor1)
        } else if lower == "floor_2" || lower == "2" || lower.starts_with("2.") || lower == "second"
        {
            Some(Floor::Floor2)
        } else {
            None
        }
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A position expressed as fractions of a page's width and height.
///
/// Both components are in `[0, 1]`; constructors refuse anything else so a
/// corrupt extraction is caught at build time instead of mis-rendered.
/// Immutable once computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalizedPoint {
    x: f64,
    y: f64,
}

impl NormalizedPoint {
    pub fn new(x: f64, y: f64) -> Option<NormalizedPoint> {
        if (0.0..=1.0).contains(&x) && (0.0..=1.0).contains(&y) {
            Some(NormalizedPoint { x, y })
        } else {
            None
        }
    }

    /// Normalize a raw document-unit position against the page dimensions.
    ///
    /// The result is exactly `raw_x / page_width`, `raw_y / page_height`.
    pub fn from_raw(
        raw_x: f64,
        raw_y: f64,
        page_width: f64,
        page_height: f64,
    ) -> Option<NormalizedPoint> {
        if page_width <= 0.0 || page_height <= 0.0 {
            return None;
        }
        NormalizedPoint::new(raw_x / page_width, raw_y / page_height)
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Squared Euclidean distance to another point in the same frame.
    pub fn squared_distance(&self, other: NormalizedPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

impl fmt::Display for NormalizedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.x, self.y)
    }
}

/// Indexed content of one floor's plan document.
#[derive(Debug, Clone, Serialize)]
pub struct FloorIndex {
    pub floor: Floor,
    /// Page dimensions in document units, kept so the presentation layer
    /// can map normalized positions back to pixels.
    pub page_width: f64,
    pub page_height: f64,
    /// Room name (trimmed, uppercased) to normalized position.
    pub rooms: BTreeMap<String, NormalizedPoint>,
    /// Entrance positions in extraction order. Populated only for the
    /// ground floor.
    pub entrances: Vec<NormalizedPoint>,
}

/// The aggregated index over all three floors.
///
/// Holding exactly one `FloorIndex` per storey makes the "one index per
/// floor" and "ground floor always present" invariants structural. Built
/// once by `load_building` and read-only afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct BuildingIndex {
    pub ground: FloorIndex,
    pub floor_1: FloorIndex,
    pub floor_2: FloorIndex,
}

impl BuildingIndex {
    pub fn ground(&self) -> &FloorIndex {
        &self.ground
    }

    pub fn floor(&self, floor: Floor) -> &FloorIndex {
        match floor {
            Floor::Ground => &self.ground,
            Floor::Floor1 => &self.floor_1,
            Floor::Floor2 => &self.floor_2,
        }
    }

    /// Floors in resolution priority order.
    pub fn floors(&self) -> impl Iterator<Item = &FloorIndex> {
        Floor::PRIORITY.iter().map(|f| self.floor(*f))
    }

    pub fn room_count(&self) -> usize {
        self.floors().map(|f| f.rooms.len()).sum()
    }
}

/// A successfully resolved room: the floor that owns it and its position.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedRoom {
    pub floor: Floor,
    pub name: String,
    pub position: NormalizedPoint,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_from_str_loose() {
        assert_eq!(Floor::from_str_loose("ground"), Some(Floor::Ground));
        assert_eq!(Floor::from_str_loose("Stueetage"), Some(Floor::Ground));
        assert_eq!(Floor::from_str_loose("0"), Some(Floor::Ground));
        assert_eq!(Floor::from_str_loose("1. sal"), Some(Floor::Floor1));
        assert_eq!(Floor::from_str_loose("floor_2"), Some(Floor::Floor2));
        assert_eq!(Floor::from_str_loose("basement"), None);
    }

    #[test]
    fn test_priority_order() {
        assert_eq!(
            Floor::PRIORITY,
            [Floor::Ground, Floor::Floor1, Floor::Floor2]
        );
    }

    #[test]
    fn test_from_raw_exact_division() {
        let p = NormalizedPoint::from_raw(150.0, 300.0, 600.0, 1200.0).unwrap();
        assert_eq!(p.x(), 150.0 / 600.0);
        assert_eq!(p.y(), 300.0 / 1200.0);
        assert_eq!(p.x(), 0.25);
        assert_eq!(p.y(), 0.25);
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(NormalizedPoint::new(1.2, 0.5).is_none());
        assert!(NormalizedPoint::new(0.5, -0.1).is_none());
        assert!(NormalizedPoint::from_raw(700.0, 100.0, 600.0, 1200.0).is_none());
    }

    #[test]
    fn test_boundary_values_accepted() {
        assert!(NormalizedPoint::new(0.0, 0.0).is_some());
        assert!(NormalizedPoint::new(1.0, 1.0).is_some());
    }

    #[test]
    fn test_degenerate_page_rejected() {
        assert!(NormalizedPoint::from_raw(10.0, 10.0, 0.0, 100.0).is_none());
    }

    #[test]
    fn test_squared_distance() {
        let a = NormalizedPoint::new(0.1, 0.9).unwrap();
        let b = NormalizedPoint::new(0.12, 0.85).unwrap();
        let d = a.squared_distance(b);
        assert!((d - (0.02f64 * 0.02 + 0.05 * 0.05)).abs() < 1e-12);
    }
}
