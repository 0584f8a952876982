//! Ring cross-sections: regular polygons of vertices and normals in 3D.

use std::f32::consts::TAU;

use glam::{Quat, Vec3};
use tracing::trace;

use crate::error::{TubeError, TubeResult};

/// Smallest vertex count `RingBuilder` accepts.
pub const MIN_RING_VERTICES: usize = 1;

/// Direction the canonical circle faces before rotation.
pub const CANONICAL_FACING: Vec3 = Vec3::Z;

/// Regular polygon of vertices lying in a plane, used as a cylinder end cap.
///
/// Normals point outward, from the center toward each vertex, and are unit
/// length. Use [`Ring::inverted`] for inward-facing normals.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    pub center: Vec3,
    /// Unit normal of the ring plane
    pub facing: Vec3,
    pub vertices: Vec<Vec3>,
    pub normals: Vec<Vec3>,
}

impl Ring {
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Same ring with normals pointing toward the center
    pub fn inverted(mut self) -> Self {
        for normal in &mut self.normals {
            *normal = -*normal;
        }
        self
    }
}

/// Points evenly spaced on a circle of `radius` in the XY plane, centered on
/// the origin, counter-clockwise when viewed from +Z.
pub fn circle_points(count: usize, radius: f32) -> TubeResult<Vec<Vec3>> {
    if count < MIN_RING_VERTICES {
        return Err(TubeError::InvalidRingVertexCount {
            min: MIN_RING_VERTICES,
            actual: count,
        });
    }
    if !(radius > 0.0 && radius.is_finite()) {
        return Err(TubeError::InvalidRadius(radius));
    }

    let spacing = TAU / count as f32;
    Ok((0..count)
        .map(|i| {
            let theta = i as f32 * spacing;
            Vec3::new(radius * theta.cos(), radius * theta.sin(), 0.0)
        })
        .collect())
}

/// Memoized canonical circle, keyed by `(count, radius)`.
#[derive(Debug, Clone, PartialEq)]
struct CanonicalCircle {
    count: usize,
    radius: f32,
    points: Vec<Vec3>,
}

impl CanonicalCircle {
    fn matches(&self, count: usize, radius: f32) -> bool {
        self.count == count && self.radius == radius
    }
}

/// Builds rings by rotating and translating a cached canonical circle.
///
/// The cache belongs to the builder instance; separate builders never share
/// or invalidate each other's circles.
#[derive(Debug, Default)]
pub struct RingBuilder {
    cache: Option<CanonicalCircle>,
}

impl RingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ring of `count` vertices at `radius` around `center`, with its
    /// plane facing `facing`.
    ///
    /// # Errors
    ///
    /// - `InvalidRingVertexCount` if `count` is zero
    /// - `InvalidRadius` if `radius` is not a positive finite value
    /// - `DegenerateFacing` if `facing` cannot be normalized
    pub fn build_ring(
        &mut self,
        center: Vec3,
        facing: Vec3,
        count: usize,
        radius: f32,
    ) -> TubeResult<Ring> {
        let facing = facing.try_normalize().ok_or(TubeError::DegenerateFacing)?;
        let circle = self.canonical(count, radius)?;

        // Shortest arc from the canonical facing to the requested one
        let rotation = Quat::from_rotation_arc(CANONICAL_FACING, facing);

        let mut vertices = Vec::with_capacity(count);
        let mut normals = Vec::with_capacity(count);
        for &point in circle {
            let offset = rotation * point;
            vertices.push(center + offset);
            normals.push(offset / radius);
        }

        Ok(Ring {
            center,
            facing,
            vertices,
            normals,
        })
    }

    /// Canonical circle points for `(count, radius)`.
    ///
    /// The cached circle is replaced whenever either key differs. Invalid
    /// input fails before the existing cache is touched.
    fn canonical(&mut self, count: usize, radius: f32) -> TubeResult<&[Vec3]> {
        let fresh = self
            .cache
            .as_ref()
            .is_some_and(|circle| circle.matches(count, radius));

        if !fresh {
            let points = circle_points(count, radius)?;
            trace!(count, radius, "regenerating canonical circle");
            self.cache = Some(CanonicalCircle {
                count,
                radius,
                points,
            });
        }

        Ok(self
            .cache
            .as_ref()
            .map(|circle| circle.points.as_slice())
            .unwrap_or_default())
    }
}
