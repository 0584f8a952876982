//! Cylinder segments stitched between two rings.

use glam::{Vec2, Vec3};

use super::ring::Ring;
use super::Vertex;
use crate::error::{TubeError, TubeResult};
use crate::params::FrontFace;

/// Open cylinder connecting two rings of equal vertex count.
///
/// Vertices and normals are `ring0` followed by `ring1`. UVs are zero-filled:
/// texture coordinates are not generated, so textured rendering of segments
/// is unsupported.
#[derive(Debug, Clone, PartialEq)]
pub struct CylinderSegment {
    pub vertices: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    /// Triangle list, 6 indices per lateral quad
    pub indices: Vec<u32>,
    pub uvs: Vec<Vec2>,
    /// Center of the first ring
    pub start: Vec3,
    /// Center of the second ring
    pub end: Vec3,
}

impl CylinderSegment {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Interleaved vertex buffer ready for `bytemuck::cast_slice`
    pub fn to_vertices(&self) -> Vec<Vertex> {
        self.vertices
            .iter()
            .zip(&self.normals)
            .zip(&self.uvs)
            .map(|((position, normal), uv)| Vertex {
                position: position.to_array(),
                normal: normal.to_array(),
                uv: uv.to_array(),
            })
            .collect()
    }
}

/// Stitch two rings into a cylinder with counter-clockwise front faces.
///
/// See [`build_cylinder_wound`].
pub fn build_cylinder(ring0: &Ring, ring1: &Ring) -> TubeResult<CylinderSegment> {
    build_cylinder_wound(ring0, ring1, FrontFace::Ccw)
}

/// Stitch two rings into a cylinder.
///
/// Each lateral quad `ring0[i], ring0[i+1], ring1[i], ring1[i+1]` becomes two
/// triangles, with the last quad wrapping back to index 0. When the rings are
/// wound counter-clockwise about their facing and `ring1` lies ahead of
/// `ring0`, faces wound per `front_face` point away from the tube axis.
///
/// # Errors
///
/// Returns `MismatchedRingSizes` if the rings differ in vertex count.
pub fn build_cylinder_wound(
    ring0: &Ring,
    ring1: &Ring,
    front_face: FrontFace,
) -> TubeResult<CylinderSegment> {
    if ring0.len() != ring1.len() {
        return Err(TubeError::MismatchedRingSizes {
            first: ring0.len(),
            second: ring1.len(),
        });
    }

    let n = ring0.len();
    let mut vertices = Vec::with_capacity(n * 2);
    vertices.extend_from_slice(&ring0.vertices);
    vertices.extend_from_slice(&ring1.vertices);

    let mut normals = Vec::with_capacity(n * 2);
    normals.extend_from_slice(&ring0.normals);
    normals.extend_from_slice(&ring1.normals);

    let mut indices = Vec::with_capacity(n * 6);
    for i in 0..n {
        let j = (i + 1) % n;
        let a0 = i as u32;
        let a1 = j as u32;
        let b0 = (i + n) as u32;
        let b1 = (j + n) as u32;

        match front_face {
            FrontFace::Ccw => indices.extend_from_slice(&[a0, a1, b0, a1, b1, b0]),
            FrontFace::Cw => indices.extend_from_slice(&[a0, b0, a1, a1, b0, b1]),
        }
    }

    let uvs = vec![Vec2::ZERO; vertices.len()];

    Ok(CylinderSegment {
        vertices,
        normals,
        indices,
        uvs,
        start: ring0.center,
        end: ring1.center,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::RingBuilder;

    fn rings(
        builder: &mut RingBuilder,
        start: Vec3,
        axis: Vec3,
        length: f32,
        count: usize,
    ) -> (Ring, Ring) {
        let ring0 = builder.build_ring(start, axis, count, 1.0).unwrap();
        let ring1 = builder
            .build_ring(start + axis.normalize() * length, axis, count, 1.0)
            .unwrap();
        (ring0, ring1)
    }

    /// Signed count of triangles whose face normal points away from the axis
    fn outward_faces(segment: &CylinderSegment) -> (usize, usize) {
        let axis = (segment.end - segment.start).normalize();
        let mut outward = 0;
        let mut inward = 0;

        for tri in segment.indices.chunks(3) {
            let a = segment.vertices[tri[0] as usize];
            let b = segment.vertices[tri[1] as usize];
            let c = segment.vertices[tri[2] as usize];
            let face_normal = (b - a).cross(c - a);

            let centroid = (a + b + c) / 3.0;
            let along = (centroid - segment.start).dot(axis);
            let radial = centroid - (segment.start + axis * along);

            if face_normal.dot(radial) > 0.0 {
                outward += 1;
            } else {
                inward += 1;
            }
        }
        (outward, inward)
    }

    #[test]
    fn test_cylinder_counts_and_indices() {
        let mut builder = RingBuilder::new();
        for n in 1..16 {
            let (ring0, ring1) = rings(&mut builder, Vec3::ZERO, Vec3::Z, 2.0, n);
            let segment = build_cylinder(&ring0, &ring1).unwrap();

            assert_eq!(segment.vertex_count(), 2 * n);
            assert_eq!(segment.normals.len(), 2 * n);
            assert_eq!(segment.indices.len(), 6 * n);
            assert_eq!(segment.triangle_count(), 2 * n);
            assert!(segment.indices.iter().all(|&i| (i as usize) < 2 * n));
        }
    }

    #[test]
    fn test_vertices_concatenated_ring0_first() {
        let mut builder = RingBuilder::new();
        let (ring0, ring1) = rings(&mut builder, Vec3::new(1.0, 2.0, 3.0), Vec3::X, 1.5, 6);
        let segment = build_cylinder(&ring0, &ring1).unwrap();

        assert_eq!(&segment.vertices[..6], ring0.vertices.as_slice());
        assert_eq!(&segment.vertices[6..], ring1.vertices.as_slice());
        assert_eq!(&segment.normals[..6], ring0.normals.as_slice());
        assert_eq!(&segment.normals[6..], ring1.normals.as_slice());
        assert_eq!(segment.start, ring0.center);
        assert_eq!(segment.end, ring1.center);
    }

    #[test]
    fn test_last_quad_wraps_to_first_vertex() {
        let mut builder = RingBuilder::new();
        let (ring0, ring1) = rings(&mut builder, Vec3::ZERO, Vec3::Z, 1.0, 5);
        let segment = build_cylinder(&ring0, &ring1).unwrap();

        let last_quad = &segment.indices[6 * 4..];
        assert_eq!(last_quad, &[4, 0, 9, 0, 5, 9]);
    }

    #[test]
    fn test_mismatched_rings_rejected() {
        let mut builder = RingBuilder::new();
        let ring0 = builder.build_ring(Vec3::ZERO, Vec3::Z, 6, 1.0).unwrap();
        let ring1 = builder.build_ring(Vec3::Z, Vec3::Z, 8, 1.0).unwrap();

        assert!(matches!(
            build_cylinder(&ring0, &ring1),
            Err(TubeError::MismatchedRingSizes {
                first: 6,
                second: 8
            })
        ));
    }

    #[test]
    fn test_ccw_winding_faces_outward() {
        let mut builder = RingBuilder::new();
        let axes = [
            Vec3::Z,
            -Vec3::Z,
            Vec3::Y,
            Vec3::new(1.0, -2.0, 0.5),
            Vec3::new(-3.0, 0.1, -1.0),
        ];
        for &axis in &axes {
            for n in 3..13 {
                let start = Vec3::new(5.0, -1.0, 2.0);
                let (ring0, ring1) = rings(&mut builder, start, axis, 0.8, n);
                let segment = build_cylinder(&ring0, &ring1).unwrap();
                assert_eq!(
                    outward_faces(&segment),
                    (2 * n, 0),
                    "axis {:?}, n {}",
                    axis,
                    n
                );
            }
        }
    }

    #[test]
    fn test_cw_winding_flips_every_face() {
        let mut builder = RingBuilder::new();
        let (ring0, ring1) = rings(&mut builder, Vec3::ZERO, Vec3::new(0.0, 1.0, 1.0), 1.0, 10);
        let segment = build_cylinder_wound(&ring0, &ring1, FrontFace::Cw).unwrap();
        assert_eq!(outward_faces(&segment), (0, 20));
    }

    #[test]
    fn test_face_normals_agree_with_vertex_normals() {
        let mut builder = RingBuilder::new();
        let (ring0, ring1) = rings(&mut builder, Vec3::ZERO, Vec3::X, 1.0, 12);
        let segment = build_cylinder(&ring0, &ring1).unwrap();

        for tri in segment.indices.chunks(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| segment.vertices[i as usize]);
            let face_normal = (b - a).cross(c - a);
            for &i in tri {
                assert!(face_normal.dot(segment.normals[i as usize]) > 0.0);
            }
        }
    }

    #[test]
    fn test_uvs_zero_filled() {
        let mut builder = RingBuilder::new();
        let (ring0, ring1) = rings(&mut builder, Vec3::ZERO, Vec3::Z, 1.0, 7);
        let segment = build_cylinder(&ring0, &ring1).unwrap();
        assert_eq!(segment.uvs.len(), segment.vertex_count());
        assert!(segment.uvs.iter().all(|uv| *uv == Vec2::ZERO));
    }

    #[test]
    fn test_interleaved_vertices() {
        let mut builder = RingBuilder::new();
        let (ring0, ring1) = rings(&mut builder, Vec3::ZERO, Vec3::Z, 1.0, 4);
        let segment = build_cylinder(&ring0, &ring1).unwrap();

        let vertices = segment.to_vertices();
        assert_eq!(vertices.len(), 8);
        assert_eq!(vertices[5].position, segment.vertices[5].to_array());
        assert_eq!(vertices[5].normal, segment.normals[5].to_array());

        let bytes: &[u8] = bytemuck::cast_slice(&vertices);
        assert_eq!(bytes.len(), 8 * std::mem::size_of::<Vertex>());
        assert_eq!(std::mem::size_of::<Vertex>(), 32);
    }
}
