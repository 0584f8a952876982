//! Path follower configuration.

use crate::error::{TubeError, TubeResult};

/// Gain applied to raw noise samples when mapping them to path offsets
pub const DEFAULT_PATH_GAIN: f32 = 1000.0;

/// Parameters for a follower travelling along the procedural path
#[derive(Debug, Clone)]
pub struct FlightParams {
    /// Path determinism key
    pub seed: String,

    /// Rate at which the w-parameter advances (w units per second)
    /// With the default gain, 0.01 w/s is roughly 10 m/s of travel.
    pub speed_w_per_s: f32,

    /// Noise gain (meters per unit of noise)
    pub gain: f32,

    /// Optional bound on |Δy| / |Δxz| between successive samples
    pub max_slope: Option<f32>,
}

impl Default for FlightParams {
    fn default() -> Self {
        Self {
            seed: "seed".to_string(),
            speed_w_per_s: 0.01,
            gain: DEFAULT_PATH_GAIN,
            max_slope: None,
        }
    }
}

impl FlightParams {
    /// Validate configuration ranges
    pub fn validate(&self) -> TubeResult<()> {
        if !(self.speed_w_per_s > 0.0 && self.speed_w_per_s.is_finite()) {
            return Err(TubeError::InvalidSpeed(self.speed_w_per_s));
        }
        if !(self.gain != 0.0 && self.gain.is_finite()) {
            return Err(TubeError::InvalidGain(self.gain));
        }
        if let Some(slope) = self.max_slope {
            if !(slope >= 0.0 && slope.is_finite()) {
                return Err(TubeError::InvalidMaxSlope(slope));
            }
        }
        Ok(())
    }
}
