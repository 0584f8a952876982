//! Parameter definitions with physical units and documented semantics.

mod flight;
mod tube;

// Re-export all types
pub use flight::{FlightParams, DEFAULT_PATH_GAIN};
pub use tube::{FrontFace, TubeConfig, MIN_TUBE_RING_VERTICES};
