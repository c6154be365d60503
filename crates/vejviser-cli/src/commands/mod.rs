pub mod locate;
pub mod parse;
pub mod profile;

use std::path::PathBuf;
use vejviser_core::error::VejviserError;
use vejviser_core::profile::{builtin, load_profile, BuildingProfile};

/// Load the profile named on the command line, or fall back to the
/// builtin default.
pub fn profile_or_default(file: Option<PathBuf>) -> Result<BuildingProfile, VejviserError> {
    match file {
        Some(path) => load_profile(&path),
        None => builtin::default_profile(),
    }
}
