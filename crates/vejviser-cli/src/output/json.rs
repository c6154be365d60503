use serde::Serialize;
use vejviser_core::error::VejviserError;

pub fn print<T: Serialize>(value: &T) -> Result<(), VejviserError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
