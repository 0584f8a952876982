//! Ring and cylinder mesh construction for tube segments.

mod cylinder;
mod export;
mod ring;

use bytemuck::{Pod, Zeroable};

pub use cylinder::{build_cylinder, build_cylinder_wound, CylinderSegment};
pub use export::{save_obj, write_obj};
pub use ring::{circle_points, Ring, RingBuilder, CANONICAL_FACING, MIN_RING_VERTICES};

/// Vertex data for tube meshes (position + normal + UV coordinates)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}
