use std::path::Path;
use vejviser_core::error::VejviserError;
use vejviser_core::model::Floor;
use vejviser_core::profile::{builtin, load_profile};

pub fn list() -> Result<(), VejviserError> {
    println!("Available building profiles:\n");
    for name in builtin::PROFILES {
        let profile = builtin::load_builtin(name)?;
        println!("  {:<16} {}", name, profile.name());
        if let Some(desc) = &profile.def().description {
            println!("                   {}", desc);
        }
        println!(
            "                   documents: {}, {}, {}",
            profile.document_file(Floor::Ground),
            profile.document_file(Floor::Floor1),
            profile.document_file(Floor::Floor2)
        );
        println!();
    }
    Ok(())
}

pub fn show(name: &str) -> Result<(), VejviserError> {
    let profile = builtin::load_builtin(name)?;
    let json = serde_json::to_string_pretty(profile.def())?;
    println!("{json}");
    Ok(())
}

pub fn schema() -> Result<(), VejviserError> {
    println!("A building profile is a JSON object with these fields:\n");
    println!("  name              Display name of the building");
    println!("  description       Optional free-text description");
    println!("  documents         Object with the plan file name per floor:");
    println!("                    ground, floor_1, floor_2 (resolved against");
    println!("                    the --building directory)");
    println!("  entrance_markers  Words marking an entrance label, matched");
    println!("                    case-insensitively as substrings");
    println!("  room_patterns     Regex list; a label must match one to be");
    println!("                    indexed as a room. Each entry has pattern,");
    println!("                    optional description, optional enabled flag");
    println!("  exclude_patterns  Regex list; a matching label is never a room");
    println!("  min_label_len     Minimum label length (default 1)");
    println!("  max_label_len     Maximum label length (default 15)");
    println!("  page              1-based page of each document to index");
    println!("                    (default 1)");
    println!("  render_scale      Advisory render scale for the presentation");
    println!("                    layer (default 2.0)");
    println!();
    println!("Example:\n");
    let example = builtin::default_profile()?;
    let json = serde_json::to_string_pretty(example.def())?;
    println!("{json}");
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), VejviserError> {
    let profile = load_profile(file)?;
    println!(
        "OK: profile '{}' is valid ({} entrance markers, {} room patterns)",
        profile.name(),
        profile.def().entrance_markers.len(),
        profile.def().room_patterns.len()
    );
    Ok(())
}
