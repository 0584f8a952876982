//! Tube segment emission behind a moving point.

use glam::Vec3;
use tracing::{debug, info};

use super::sink::SegmentSink;
use super::window::{SegmentId, SegmentWindow};
use crate::error::TubeResult;
use crate::mesh::{build_cylinder_wound, RingBuilder};
use crate::params::TubeConfig;

/// Stream lifecycle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StreamState {
    /// No reference point yet
    Idle,
    /// Tracking from the start of the next segment
    Streaming {
        segment_start: Vec3,
        previous_facing: Vec3,
    },
}

/// What a single tick did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub emitted: Option<SegmentId>,
    pub evicted: Option<SegmentId>,
}

/// Emits cylinder segments as a tracked point moves and keeps at most
/// `segment_max` of them alive, destroying the oldest first.
pub struct TubeSegmentStream<S: SegmentSink> {
    config: TubeConfig,
    rings: RingBuilder,
    window: SegmentWindow<S::Handle>,
    sink: S,
    state: StreamState,
    next_id: u64,
    elapsed_s: f32,
}

impl<S: SegmentSink> TubeSegmentStream<S> {
    /// Create a stream that hands segments to `sink`
    pub fn new(config: TubeConfig, sink: S) -> TubeResult<Self> {
        config.validate()?;
        let window = SegmentWindow::new(config.segment_max);
        Ok(Self {
            config,
            rings: RingBuilder::new(),
            window,
            sink,
            state: StreamState::Idle,
            next_id: 0,
            elapsed_s: 0.0,
        })
    }

    pub fn config(&self) -> &TubeConfig {
        &self.config
    }

    pub fn state(&self) -> StreamState {
        self.state
    }

    pub fn window(&self) -> &SegmentWindow<S::Handle> {
        &self.window
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Total time fed through `tick` (seconds)
    pub fn elapsed_s(&self) -> f32 {
        self.elapsed_s
    }

    /// Feed one position sample
    ///
    /// The first tick only establishes the reference point. Afterwards a
    /// segment is emitted whenever the point is more than `segment_length_m`
    /// from the current segment start, then the window is trimmed.
    pub fn tick(&mut self, position: Vec3, forward: Vec3, dt_s: f32) -> TubeResult<TickReport> {
        self.elapsed_s += dt_s;
        let mut report = TickReport::default();

        match self.state {
            StreamState::Idle => {
                info!(?position, "tube stream started");
                self.state = StreamState::Streaming {
                    segment_start: position,
                    previous_facing: forward,
                };
            }
            StreamState::Streaming {
                segment_start,
                previous_facing,
            } => {
                if segment_start.distance(position) > self.config.segment_length_m {
                    report.emitted =
                        Some(self.emit(segment_start, previous_facing, position, forward)?);
                    self.state = StreamState::Streaming {
                        segment_start: position,
                        previous_facing: forward,
                    };
                }
            }
        }

        if let Some((id, handle)) = self.window.evict_overflow() {
            debug!(id = id.0, "evicting tube segment");
            self.sink.detach(handle);
            report.evicted = Some(id);
        }

        Ok(report)
    }

    /// Build the segment from `start` to `end` and hand it to the sink
    fn emit(
        &mut self,
        start: Vec3,
        start_facing: Vec3,
        end: Vec3,
        end_facing: Vec3,
    ) -> TubeResult<SegmentId> {
        let count = self.config.ring_vertex_count;
        let radius = self.config.radius_m;

        let ring0 = self.rings.build_ring(start, start_facing, count, radius)?;
        let ring1 = self.rings.build_ring(end, end_facing, count, radius)?;
        let segment = build_cylinder_wound(&ring0, &ring1, self.config.front_face)?;

        let id = SegmentId(self.next_id);
        self.next_id += 1;

        debug!(
            id = id.0,
            ?start,
            ?end,
            at_s = self.elapsed_s,
            "emitting tube segment"
        );
        let handle = self.sink.attach(id, segment);
        self.window.push(id, handle);
        Ok(id)
    }
}
