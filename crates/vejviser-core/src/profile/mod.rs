pub mod builtin;
pub mod schema;

use crate::error::VejviserError;
use crate::model::Floor;
use regex::{Regex, RegexBuilder};
use schema::{BuildingProfileDef, PatternDef};
use std::path::Path;

/// Load and compile a building profile from a JSON file.
pub fn load_profile(path: &Path) -> Result<BuildingProfile, VejviserError> {
    let content = std::fs::read_to_string(path).map_err(|e| VejviserError::ProfileLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let def: BuildingProfileDef =
        serde_json::from_str(&content).map_err(|e| VejviserError::ProfileLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    BuildingProfile::compile(def)
}

/// Parse and compile a building profile from a JSON string.
pub fn parse_profile_str(json: &str) -> Result<BuildingProfile, VejviserError> {
    let def: BuildingProfileDef = serde_json::from_str(json)?;
    BuildingProfile::compile(def)
}

/// A validated building profile with its patterns compiled.
#[derive(Debug, Clone)]
pub struct BuildingProfile {
    def: BuildingProfileDef,
    entrance_markers: Vec<String>,
    room_patterns: Vec<Regex>,
    exclude_patterns: Vec<Regex>,
}

impl BuildingProfile {
    /// Validate a profile definition and compile its patterns.
    pub fn compile(def: BuildingProfileDef) -> Result<BuildingProfile, VejviserError> {
        if def.entrance_markers.iter().all(|m| m.trim().is_empty()) {
            return Err(VejviserError::ProfileInvalid(
                "entrance_markers must not be empty".into(),
            ));
        }
        if def.room_patterns.iter().filter(|p| p.enabled).count() == 0 {
            return Err(VejviserError::ProfileInvalid(
                "room_patterns must contain at least one enabled pattern".into(),
            ));
        }
        if def.page == 0 {
            return Err(VejviserError::ProfileInvalid(
                "page is 1-based and must be >= 1".into(),
            ));
        }
        if !def.render_scale.is_finite() || def.render_scale <= 0.0 {
            return Err(VejviserError::ProfileInvalid(format!(
                "render_scale must be a positive number, got {}",
                def.render_scale
            )));
        }
        if def.min_label_len > def.max_label_len {
            return Err(VejviserError::ProfileInvalid(format!(
                "min_label_len {} exceeds max_label_len {}",
                def.min_label_len, def.max_label_len
            )));
        }
        for (floor, file) in [
            (Floor::Ground, &def.documents.ground),
            (Floor::Floor1, &def.documents.floor_1),
            (Floor::Floor2, &def.documents.floor_2),
        ] {
            if file.trim().is_empty() {
                return Err(VejviserError::ProfileInvalid(format!(
                    "document file name for floor '{}' must not be empty",
                    floor
                )));
            }
        }

        let entrance_markers = def
            .entrance_markers
            .iter()
            .map(|m| m.trim().to_lowercase())
            .filter(|m| !m.is_empty())
            .collect();
        let room_patterns = compile_patterns(&def.room_patterns)?;
        let exclude_patterns = compile_patterns(&def.exclude_patterns)?;

        Ok(BuildingProfile {
            def,
            entrance_markers,
            room_patterns,
            exclude_patterns,
        })
    }

    /// True if the label marks a building entrance.
    pub fn is_entrance(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        self.entrance_markers.iter().any(|m| lower.contains(m))
    }

    /// True if the label looks like a room name: length within bounds, no
    /// exclude pattern matches, and at least one room pattern matches.
    pub fn is_room(&self, text: &str) -> bool {
        let len = text.chars().count();
        if len < self.def.min_label_len || len > self.def.max_label_len {
            return false;
        }
        if self.exclude_patterns.iter().any(|re| re.is_match(text)) {
            return false;
        }
        self.room_patterns.iter().any(|re| re.is_match(text))
    }

    pub fn name(&self) -> &str {
        &self.def.name
    }

    pub fn page(&self) -> usize {
        self.def.page
    }

    pub fn render_scale(&self) -> f64 {
        self.def.render_scale
    }

    pub fn document_file(&self, floor: Floor) -> &str {
        match floor {
            Floor::Ground => &self.def.documents.ground,
            Floor::Floor1 => &self.def.documents.floor_1,
            Floor::Floor2 => &self.def.documents.floor_2,
        }
    }

    pub fn def(&self) -> &BuildingProfileDef {
        &self.def
    }
}

fn compile_patterns(defs: &[PatternDef]) -> Result<Vec<Regex>, VejviserError> {
    let mut compiled = Vec::new();
    for p in defs.iter().filter(|p| p.enabled) {
        let re = RegexBuilder::new(&p.pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| {
                VejviserError::ProfileInvalid(format!("bad pattern '{}': {}", p.pattern, e))
            })?;
        compiled.push(re);
    }
    Ok(compiled)
}
