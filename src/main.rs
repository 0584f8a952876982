//! Tubeway - fly a procedural path and stream a tube mesh behind it
//!
//! Runs headless at a fixed tick rate and reports what the segment stream
//! emitted. The live window can be exported as OBJ for inspection.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use tubeway::cli::Args;
use tubeway::mesh::save_obj;
use tubeway::path::PathFollower;
use tubeway::tube::{RetainedMeshes, TubeSegmentStream};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut follower =
        PathFollower::new(args.flight_params()).context("invalid flight parameters")?;
    let mut tube = TubeSegmentStream::new(args.tube_config(), RetainedMeshes::new())
        .context("invalid tube configuration")?;

    info!(seed = %args.seed, ticks = args.total_ticks(), "starting flight");

    let dt = 1.0 / args.fps as f32;
    let start = follower.sample();
    tube.tick(start.position, start.forward, 0.0)?;

    let mut emitted = 0u64;
    let mut evicted = 0u64;
    for _ in 0..args.total_ticks() {
        let sample = follower.advance(dt);
        let report = tube.tick(sample.position, sample.forward, dt)?;
        emitted += report.emitted.is_some() as u64;
        evicted += report.evicted.is_some() as u64;
    }

    let end = follower.sample();
    info!(
        elapsed_s = tube.elapsed_s(),
        w = end.w,
        position = ?end.position,
        emitted,
        evicted,
        live = tube.window().len(),
        capacity = tube.window().capacity(),
        "flight finished"
    );

    if let Some(path) = &args.obj {
        save_obj(path, tube.sink().segments())
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "exported live segments");
    }

    Ok(())
}
