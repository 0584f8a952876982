//! Tube geometry and segment window configuration.

use crate::error::{TubeError, TubeResult};

/// Minimum ring vertex count accepted for a tube (a triangle cross-section).
pub const MIN_TUBE_RING_VERTICES: usize = 3;

/// Triangle winding treated as front-facing by the host renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrontFace {
    /// Counter-clockwise front faces (glam / wgpu default).
    #[default]
    Ccw,
    /// Clockwise front faces.
    Cw,
}

/// Tube segment stream parameters, fixed at construction
#[derive(Debug, Clone)]
pub struct TubeConfig {
    /// Distance the tracked point must travel before a new segment is emitted (meters)
    pub segment_length_m: f32,

    /// Number of live segments kept before the oldest is evicted
    pub segment_max: usize,

    /// Vertices per ring cross-section
    pub ring_vertex_count: usize,

    /// Tube radius (meters)
    pub radius_m: f32,

    /// Winding used for emitted cylinder triangles
    pub front_face: FrontFace,
}

impl Default for TubeConfig {
    fn default() -> Self {
        Self {
            segment_length_m: 0.1,
            segment_max: 10,
            ring_vertex_count: 12,
            radius_m: 1.0,
            front_face: FrontFace::Ccw,
        }
    }
}

impl TubeConfig {
    /// Validate configuration ranges
    pub fn validate(&self) -> TubeResult<()> {
        if !(self.segment_length_m > 0.0 && self.segment_length_m.is_finite()) {
            return Err(TubeError::InvalidSegmentLength(self.segment_length_m));
        }
        if self.segment_max < 1 {
            return Err(TubeError::InvalidSegmentMax(self.segment_max));
        }
        if self.ring_vertex_count < MIN_TUBE_RING_VERTICES {
            return Err(TubeError::InvalidRingVertexCount {
                min: MIN_TUBE_RING_VERTICES,
                actual: self.ring_vertex_count,
            });
        }
        if !(self.radius_m > 0.0 && self.radius_m.is_finite()) {
            return Err(TubeError::InvalidRadius(self.radius_m));
        }
        Ok(())
    }
}
