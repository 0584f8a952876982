//! Boundary between the segment stream and whatever renders the segments.

use std::collections::BTreeMap;

use super::window::SegmentId;
use crate::mesh::CylinderSegment;

/// Receives emitted segments and releases them on eviction.
///
/// The sink owns each segment from `attach` onward; the stream keeps only the
/// returned handle and never touches the geometry again.
pub trait SegmentSink {
    /// Token the stream holds to request destruction later
    type Handle;

    /// Take ownership of a newly emitted segment
    fn attach(&mut self, id: SegmentId, segment: CylinderSegment) -> Self::Handle;

    /// Destroy the segment behind `handle`
    fn detach(&mut self, handle: Self::Handle);
}

/// In-memory sink that keeps live segments for inspection or export
#[derive(Debug, Default)]
pub struct RetainedMeshes {
    live: BTreeMap<SegmentId, CylinderSegment>,
    attached: u64,
    detached: u64,
}

impl RetainedMeshes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: SegmentId) -> Option<&CylinderSegment> {
        self.live.get(&id)
    }

    /// Live segments in creation order
    pub fn segments(&self) -> impl Iterator<Item = &CylinderSegment> + '_ {
        self.live.values()
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Total segments ever attached
    pub fn attached(&self) -> u64 {
        self.attached
    }

    /// Total segments destroyed
    pub fn detached(&self) -> u64 {
        self.detached
    }
}

impl SegmentSink for RetainedMeshes {
    type Handle = SegmentId;

    fn attach(&mut self, id: SegmentId, segment: CylinderSegment) -> SegmentId {
        self.live.insert(id, segment);
        self.attached += 1;
        id
    }

    fn detach(&mut self, handle: SegmentId) {
        if self.live.remove(&handle).is_some() {
            self.detached += 1;
        }
    }
}
