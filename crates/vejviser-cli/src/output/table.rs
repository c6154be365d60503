use vejviser_core::extraction::PageLabels;
use vejviser_core::locate::LocateResult;
use vejviser_core::model::{BuildingIndex, FloorIndex, NormalizedPoint};
use vejviser_core::profile::BuildingProfile;

/// Print a locate result, including the pixel positions the presentation
/// layer would use at the profile's render scale
/// (pixel = normalized * page dimension * render_scale).
pub fn print_locate(result: &LocateResult, index: &BuildingIndex, profile: &BuildingProfile) {
    match result {
        LocateResult::NotFound { query } => {
            println!("Room '{}' was not found on any floor.", query);
        }
        LocateResult::Found(p) => {
            let floor_index = index.floor(p.floor);
            let scale = profile.render_scale();

            println!("Found '{}' on {}\n", p.room, p.floor);
            print_marker("room", p.room_position, floor_index, scale);
            print_marker("entrance", p.entrance, index.ground(), scale);
            println!(
                "\n  straight-line distance to entrance: {:.4} (normalized units)",
                p.entrance_distance
            );
            println!(
                "  render {} at {:.1}x ({} x {} px)",
                p.floor,
                scale,
                (floor_index.page_width * scale).round() as i64,
                (floor_index.page_height * scale).round() as i64
            );
        }
    }
}

fn print_marker(kind: &str, point: NormalizedPoint, floor_index: &FloorIndex, scale: f64) {
    let px = point.x() * floor_index.page_width * scale;
    let py = point.y() * floor_index.page_height * scale;
    println!(
        "  {:<9} {}  ->  pixel ({:.0}, {:.0}) on {}",
        kind, point, px, py, floor_index.floor
    );
}

/// Print one floor's index: its rooms and entrance positions.
pub fn print_floor(index: &FloorIndex) {
    println!(
        "=== {} ({} x {} document units) ===\n",
        index.floor, index.page_width, index.page_height
    );

    println!("{} room(s):", index.rooms.len());
    let max_name = index.rooms.keys().map(|n| n.len()).max().unwrap_or(10);
    for (name, point) in &index.rooms {
        println!("  {:<width$}  {}", name, point, width = max_name);
    }

    if index.entrances.is_empty() {
        println!("\nno entrances");
    } else {
        println!("\n{} entrance(s):", index.entrances.len());
        for point in &index.entrances {
            println!("  {}", point);
        }
    }
}

/// Dump raw extracted labels before classification.
pub fn print_raw(page: &PageLabels) {
    println!(
        "page {} x {} document units, {} label(s):\n",
        page.page_width,
        page.page_height,
        page.labels.len()
    );
    for label in &page.labels {
        println!(
            "  {:<20} bbox ({:.1}, {:.1}) - ({:.1}, {:.1})",
            label.text, label.bbox.x_min, label.bbox.y_min, label.bbox.x_max, label.bbox.y_max
        );
    }
}
