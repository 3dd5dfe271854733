//! Direction-free segment identity.

use std::fmt;

use fm_core::VertexId;
use fm_graph::Lane;

/// Unordered pair of vertex indices naming one physical segment.
///
/// `SegmentKey::from(Lane::new(a, b)) == SegmentKey::from(Lane::new(b, a))`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegmentKey {
    lo: VertexId,
    hi: VertexId,
}

impl SegmentKey {
    pub fn new(a: VertexId, b: VertexId) -> Self {
        if a <= b { Self { lo: a, hi: b } } else { Self { lo: b, hi: a } }
    }

    /// The endpoints, lower index first.
    pub fn endpoints(self) -> (VertexId, VertexId) {
        (self.lo, self.hi)
    }
}

impl From<Lane> for SegmentKey {
    #[inline]
    fn from(lane: Lane) -> Self {
        Self::new(lane.from, lane.to)
    }
}

impl fmt::Display for SegmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}<->{}", self.lo.0, self.hi.0)
    }
}
