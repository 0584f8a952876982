//! Bounded FIFO of live segment handles.

use std::collections::VecDeque;

/// Identifier assigned to each emitted segment, in creation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SegmentId(pub u64);

/// Live segments in creation order, oldest first.
///
/// Holds at most `capacity` entries once `evict_overflow` has run; a push may
/// momentarily leave one extra entry.
#[derive(Debug)]
pub struct SegmentWindow<H> {
    entries: VecDeque<(SegmentId, H)>,
    capacity: usize,
}

impl<H> SegmentWindow<H> {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push(&mut self, id: SegmentId, handle: H) {
        self.entries.push_back((id, handle));
    }

    /// Remove the oldest entry if the window is over capacity
    pub fn evict_overflow(&mut self) -> Option<(SegmentId, H)> {
        if self.entries.len() > self.capacity {
            self.entries.pop_front()
        } else {
            None
        }
    }

    /// Live segment ids, oldest first
    pub fn ids(&self) -> impl Iterator<Item = SegmentId> + '_ {
        self.entries.iter().map(|(id, _)| *id)
    }

    pub fn handles(&self) -> impl Iterator<Item = &H> + '_ {
        self.entries.iter().map(|(_, handle)| handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_eviction_order() {
        let mut window = SegmentWindow::new(2);
        assert_eq!(window.capacity(), 2);
        assert!(window.evict_overflow().is_none());

        for i in 0..2 {
            window.push(SegmentId(i), format!("mesh-{}", i));
            assert!(window.evict_overflow().is_none());
        }

        window.push(SegmentId(2), "mesh-2".to_string());
        assert_eq!(window.len(), 3);
        assert_eq!(
            window.evict_overflow(),
            Some((SegmentId(0), "mesh-0".to_string()))
        );
        assert_eq!(window.len(), 2);
        assert!(window.evict_overflow().is_none());

        let ids: Vec<_> = window.ids().collect();
        assert_eq!(ids, vec![SegmentId(1), SegmentId(2)]);
        let handles: Vec<_> = window.handles().cloned().collect();
        assert_eq!(handles, vec!["mesh-1".to_string(), "mesh-2".to_string()]);
    }

    #[test]
    fn test_huge_capacity_allocates_lazily() {
        let mut window = SegmentWindow::new(usize::MAX);
        assert_eq!(window.capacity(), usize::MAX);
        assert!(window.is_empty());

        window.push(SegmentId(0), ());
        assert!(window.evict_overflow().is_none());
        assert_eq!(window.len(), 1);
    }
}
