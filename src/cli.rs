//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::params::{FlightParams, FrontFace, TubeConfig, DEFAULT_PATH_GAIN};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "Tubeway")]
#[command(
    about = "Headless flight along a procedural path, streaming tube segments",
    long_about = None
)]
pub struct Args {
    /// Path seed
    #[arg(long, default_value = "seed")]
    pub seed: String,

    /// Follower speed (w units per second)
    #[arg(long, value_name = "W_PER_S", default_value = "0.01")]
    pub speed: f32,

    /// Noise gain (meters per unit of noise)
    #[arg(long, default_value_t = DEFAULT_PATH_GAIN)]
    pub gain: f32,

    /// Limit climb/descent to this |dy| / |dxz| ratio
    #[arg(long, value_name = "RATIO")]
    pub max_slope: Option<f32>,

    /// Simulated flight time (seconds)
    #[arg(long, value_name = "SECONDS", default_value = "10")]
    pub duration: f32,

    /// Simulation tick rate (ticks per second)
    #[arg(long, default_value = "60", value_parser = clap::value_parser!(u32).range(1..))]
    pub fps: u32,

    /// Distance between emitted segments (meters)
    #[arg(long, value_name = "METERS", default_value = "0.1")]
    pub segment_length: f32,

    /// Live segments kept before the oldest is evicted
    #[arg(long, default_value = "10")]
    pub segment_max: usize,

    /// Vertices per ring
    #[arg(long, default_value = "12")]
    pub ring_vertices: usize,

    /// Tube radius (meters)
    #[arg(long, value_name = "METERS", default_value = "1")]
    pub radius: f32,

    /// Emit clockwise triangles instead of counter-clockwise
    #[arg(long)]
    pub clockwise: bool,

    /// Write the live segments to this Wavefront OBJ file when done
    #[arg(long, value_name = "PATH")]
    pub obj: Option<PathBuf>,
}

impl Args {
    /// Follower parameters from command-line arguments
    pub fn flight_params(&self) -> FlightParams {
        FlightParams {
            seed: self.seed.clone(),
            speed_w_per_s: self.speed,
            gain: self.gain,
            max_slope: self.max_slope,
        }
    }

    /// Tube parameters from command-line arguments
    pub fn tube_config(&self) -> TubeConfig {
        TubeConfig {
            segment_length_m: self.segment_length,
            segment_max: self.segment_max,
            ring_vertex_count: self.ring_vertices,
            radius_m: self.radius,
            front_face: if self.clockwise {
                FrontFace::Cw
            } else {
                FrontFace::Ccw
            },
        }
    }

    /// Number of fixed-rate ticks to simulate
    pub fn total_ticks(&self) -> usize {
        (self.duration.max(0.0) * self.fps as f32).ceil() as usize
    }
}
