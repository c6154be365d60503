pub mod engine;
pub mod outcome;

pub use engine::{nearest_entrance, resolve};
pub use outcome::{LocateResult, Placement};
