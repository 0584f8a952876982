//! Procedural flight path: seeded noise field, path sampling and a follower.

mod follower;
mod generator;

pub use follower::{FlightSample, PathFollower};
pub use generator::{limit_slope, AxisSample, NoiseField, PathGenerator};
