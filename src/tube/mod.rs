//! Continuously extending tube built from cylinder segments behind a moving point.

mod sink;
mod stream;
mod window;

pub use sink::{RetainedMeshes, SegmentSink};
pub use stream::{StreamState, TickReport, TubeSegmentStream};
pub use window::{SegmentId, SegmentWindow};
