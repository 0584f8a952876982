//! Tubeway library - procedural flight path and streaming tube mesh
//!
//! A seeded noise field describes a wandering 3D path. A follower travels
//! along it, and a segment stream wraps the trail in ring-capped cylinder
//! meshes, keeping a bounded window of the most recent segments alive.

pub mod cli;
pub mod error;
pub mod mesh;
pub mod params;
pub mod path;
pub mod tube;

pub use error::{TubeError, TubeResult};
