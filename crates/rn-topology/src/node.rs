//! Topology nodes (junctions).

use rn_core::{NodeId, NodeKind, SegmentId};

/// A junction connecting outer segments.
///
/// Created once per distinct identity by the builder's get-or-build
/// accessor; mutated only by edge registration during graph construction,
/// read-only afterwards.
#[derive(Debug)]
pub struct Node {
    pub id: NodeId,
    /// Stable configuration identity.
    pub pid: String,
    pub kind: NodeKind,
    /// Outer segments leaving this node, in first-discovery order.
    departing: Vec<SegmentId>,
    /// Outer segments arriving at this node, in first-discovery order.
    arriving: Vec<SegmentId>,
    /// Inner segments contained within this node's area.
    inner: Vec<SegmentId>,
}

impl Node {
    pub(crate) fn new(id: NodeId, pid: String, kind: NodeKind) -> Self {
        Self {
            id,
            pid,
            kind,
            departing: Vec::new(),
            arriving: Vec::new(),
            inner: Vec::new(),
        }
    }

    pub fn departing(&self) -> &[SegmentId] {
        &self.departing
    }

    pub fn arriving(&self) -> &[SegmentId] {
        &self.arriving
    }

    pub fn inner(&self) -> &[SegmentId] {
        &self.inner
    }

    // Registration during graph construction.  Duplicate registration is a
    // no-op, not an error.

    pub(crate) fn add_departing(&mut self, segment: SegmentId) {
        if !self.departing.contains(&segment) {
            self.departing.push(segment);
        }
    }

    pub(crate) fn add_arriving(&mut self, segment: SegmentId) {
        if !self.arriving.contains(&segment) {
            self.arriving.push(segment);
        }
    }

    pub(crate) fn add_inner(&mut self, segment: SegmentId) {
        if !self.inner.contains(&segment) {
            self.inner.push(segment);
        }
    }

    // ── Kind predicates ───────────────────────────────────────────────────

    pub fn is_interchange(&self) -> bool {
        self.kind == NodeKind::Interchange
    }

    pub fn is_triangle(&self) -> bool {
        self.kind == NodeKind::Triangle
    }

    pub fn is_terminus(&self) -> bool {
        self.kind == NodeKind::Terminus
    }

    pub fn is_ramp_junction(&self) -> bool {
        self.kind == NodeKind::RampJunction
    }
}
