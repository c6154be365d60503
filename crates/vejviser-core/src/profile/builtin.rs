use crate::error::VejviserError;
use crate::profile::{parse_profile_str, BuildingProfile};

const PORCELAENSHAVEN_JSON: &str = include_str!("../../../../profiles/porcelaenshaven.json");

/// Available predefined building profiles.
pub const PROFILES: &[&str] = &["porcelaenshaven"];

/// Load a predefined building profile by name.
pub fn load_builtin(name: &str) -> Result<BuildingProfile, VejviserError> {
    match name {
        "porcelaenshaven" => parse_profile_str(PORCELAENSHAVEN_JSON),
        _ => Err(VejviserError::ProfileInvalid(format!(
            "unknown profile '{}'. Available: {}",
            name,
            PROFILES.join(", ")
        ))),
    }
}

/// The profile used when no profile is specified.
pub fn default_profile() -> Result<BuildingProfile, VejviserError> {
    load_builtin("porcelaenshaven")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_builtin_profile() {
        let profile = load_builtin("porcelaenshaven").unwrap();
        assert_eq!(profile.name(), "Porcelænshaven");
        assert!(profile.is_entrance("Indgang"));
        assert!(profile.is_room("A.1.10"));
        assert!(profile.is_room("PH-D1.11_01"));
        // Area measurements and plan metadata are excluded.
        assert!(!profile.is_room("12.5m2"));
        assert!(!profile.is_room("scale"));
    }

    #[test]
    fn test_unknown_profile() {
        assert!(load_builtin("xyz").is_err());
    }

    #[test]
    fn test_default_profile_documents() {
        let profile = default_profile().unwrap();
        assert_eq!(
            profile.document_file(crate::model::Floor::Ground),
            "stueetage.pdf"
        );
    }
}
