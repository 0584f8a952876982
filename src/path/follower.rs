//! Point that travels along the procedural path and faces its direction of travel.

use glam::Vec3;

use super::generator::PathGenerator;
use crate::error::TubeResult;
use crate::params::FlightParams;

/// One step of the follower: where it is and which way it faces
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightSample {
    /// Path parameter the position was sampled at
    pub w: f32,
    pub position: Vec3,
    /// Unit direction of travel
    pub forward: Vec3,
}

/// Drives a point along a `PathGenerator` path at constant w-speed
pub struct PathFollower {
    path: PathGenerator,
    params: FlightParams,
    w: f32,
    position: Vec3,
    forward: Vec3,
}

impl PathFollower {
    /// Create a follower at the path origin, facing +Z
    pub fn new(params: FlightParams) -> TubeResult<Self> {
        params.validate()?;
        let path = PathGenerator::with_gain(&params.seed, params.gain);
        Ok(Self {
            path,
            params,
            w: 0.0,
            position: Vec3::ZERO,
            forward: Vec3::Z,
        })
    }

    /// Current sample without advancing
    pub fn sample(&self) -> FlightSample {
        FlightSample {
            w: self.w,
            position: self.position,
            forward: self.forward,
        }
    }

    /// Advance the follower by `dt_s` seconds
    ///
    /// The facing direction only changes when the step has non-zero length,
    /// so a stalled follower keeps looking where it was going.
    pub fn advance(&mut self, dt_s: f32) -> FlightSample {
        self.w += self.params.speed_w_per_s * dt_s;

        let next = match self.params.max_slope {
            Some(max_slope) => {
                self.path
                    .get_point_with_limited_slope(self.w, self.position, max_slope)
            }
            None => self.path.get_point(self.w),
        };

        if let Some(direction) = (next - self.position).try_normalize() {
            self.forward = direction;
        }
        self.position = next;

        self.sample()
    }
}
