//! Road segments: the common data bag plus the outer/inner variants.
//!
//! A segment's four neighbor lists partition its direct neighbors per
//! direction: every predecessor appears in exactly one of `predecessors` /
//! `predecessors_same_road`, and symmetrically for successors.  The
//! partition is decided at link time by the same-road test and never
//! revisited.

use rn_core::{NodeId, PointKind, RoadRef, SegmentId};

use crate::cross_section::{CrossSectionIndex, MeasurementPoint};

// ── SubSegment ────────────────────────────────────────────────────────────────

/// A fixed-geometry portion of a segment.
///
/// `offset` is the cumulative distance from the start of the owning segment,
/// computed once at segment initialization by accumulating lengths in
/// declared order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubSegment {
    /// Stable configuration identity.
    pub pid: String,
    /// Length in metres.
    pub length: u64,
    /// Number of lanes.
    pub lanes: u8,
    /// Slope/grade tag; absent when not surveyed.
    pub slope: Option<String>,
    /// Metres from the start of the owning segment to this sub-segment.
    pub offset: u64,
}

// ── Segment variants ──────────────────────────────────────────────────────────

/// Outer-variant data: explicit start/end topology and road identity.
#[derive(Clone, Debug)]
pub struct OuterLinks {
    /// Node the segment departs from.
    pub from_node: Option<NodeId>,
    /// Node the segment arrives at.
    pub to_node: Option<NodeId>,
    /// Road identity; absent when the record lacks either component, in
    /// which case the segment never satisfies the same-road relation.
    pub road: Option<RoadRef>,
}

/// Inner-variant data: the bounding outer segments.  An inner segment with
/// both absent is discarded during the build — it is unreachable from the
/// outer topology.
#[derive(Clone, Debug)]
pub struct InnerLinks {
    /// Outer segment this segment continues from.
    pub from_segment: Option<SegmentId>,
    /// Outer segment this segment leads into.
    pub to_segment: Option<SegmentId>,
}

/// Variant-specific data of a [`Segment`].
#[derive(Clone, Debug)]
pub enum SegmentKind {
    Outer(OuterLinks),
    Inner(InnerLinks),
}

// ── Segment ───────────────────────────────────────────────────────────────────

/// A road segment, outer or inner.
#[derive(Debug)]
pub struct Segment {
    pub id: SegmentId,
    /// Stable configuration identity.
    pub pid: String,
    /// Physical length in metres.
    pub length: u64,
    pub kind: SegmentKind,
    /// Sub-segments in driving order, offsets pre-computed.
    sub_segments: Vec<SubSegment>,
    /// Measurement points, sorted ascending by offset.
    points: CrossSectionIndex,
    predecessors: Vec<SegmentId>,
    predecessors_same_road: Vec<SegmentId>,
    successors: Vec<SegmentId>,
    successors_same_road: Vec<SegmentId>,
}

impl Segment {
    pub(crate) fn new(
        id: SegmentId,
        pid: String,
        length: u64,
        sub_segments: Vec<SubSegment>,
        kind: SegmentKind,
    ) -> Self {
        Self {
            id,
            pid,
            length,
            kind,
            sub_segments,
            points: CrossSectionIndex::default(),
            predecessors: Vec::new(),
            predecessors_same_road: Vec::new(),
            successors: Vec::new(),
            successors_same_road: Vec::new(),
        }
    }

    pub fn is_outer(&self) -> bool {
        matches!(self.kind, SegmentKind::Outer(_))
    }

    pub fn is_inner(&self) -> bool {
        matches!(self.kind, SegmentKind::Inner(_))
    }

    pub fn as_outer(&self) -> Option<&OuterLinks> {
        match &self.kind {
            SegmentKind::Outer(o) => Some(o),
            SegmentKind::Inner(_) => None,
        }
    }

    pub fn as_inner(&self) -> Option<&InnerLinks> {
        match &self.kind {
            SegmentKind::Inner(i) => Some(i),
            SegmentKind::Outer(_) => None,
        }
    }

    /// Road identity; always absent for inner segments.
    pub fn road(&self) -> Option<&RoadRef> {
        self.as_outer().and_then(|o| o.road.as_ref())
    }

    // ── Sub-segments ──────────────────────────────────────────────────────

    pub fn sub_segments(&self) -> &[SubSegment] {
        &self.sub_segments
    }

    /// Sub-segments whose [start, start+length) interval overlaps
    /// [offset, offset+span).  The per-segment half of the span query; the
    /// graph handles recursion into same-road successors.
    pub(crate) fn sub_segments_in_local_window(
        &self,
        offset: u64,
        span: u64,
    ) -> impl Iterator<Item = &SubSegment> {
        self.sub_segments
            .iter()
            .filter(move |s| s.offset + s.length > offset && s.offset < offset + span)
    }

    /// Sub-segments that extend past `offset` (their end lies after it).
    pub fn sub_segments_from_offset(&self, offset: u64) -> impl Iterator<Item = &SubSegment> {
        self.sub_segments
            .iter()
            .filter(move |s| s.offset + s.length > offset)
    }

    /// Sub-segments that begin before `offset`.
    pub fn sub_segments_to_offset(&self, offset: u64) -> impl Iterator<Item = &SubSegment> {
        self.sub_segments.iter().filter(move |s| s.offset < offset)
    }

    // ── Measurement points ────────────────────────────────────────────────

    pub fn points(&self) -> &CrossSectionIndex {
        &self.points
    }

    pub(crate) fn points_mut(&mut self) -> &mut CrossSectionIndex {
        &mut self.points
    }

    /// Entry/exit/carriageway classification: a segment *is* an entry iff at
    /// least one attached point is an entry detector, and so on.
    pub fn is_entry(&self) -> bool {
        self.points.has_kind(PointKind::Entry)
    }

    pub fn is_exit(&self) -> bool {
        self.points.has_kind(PointKind::Exit)
    }

    pub fn is_main_carriageway(&self) -> bool {
        self.points.has_kind(PointKind::MainCarriageway)
    }

    pub fn is_aux_carriageway(&self) -> bool {
        self.points.has_kind(PointKind::AuxCarriageway)
    }

    pub fn is_other_carriageway(&self) -> bool {
        self.points.has_kind(PointKind::Other)
    }

    /// Points of the given kind attached to this segment, in offset order.
    pub fn points_of_kind(&self, kind: PointKind) -> impl Iterator<Item = &MeasurementPoint> {
        self.points.of_kind(kind)
    }

    // ── Neighbor lists ────────────────────────────────────────────────────

    /// Predecessors on a different road.
    pub fn predecessors(&self) -> &[SegmentId] {
        &self.predecessors
    }

    /// Predecessors on the same road.
    pub fn predecessors_same_road(&self) -> &[SegmentId] {
        &self.predecessors_same_road
    }

    /// Successors on a different road.
    pub fn successors(&self) -> &[SegmentId] {
        &self.successors
    }

    /// Successors on the same road.
    pub fn successors_same_road(&self) -> &[SegmentId] {
        &self.successors_same_road
    }

    // Link registration during graph construction.  First-discovery order is
    // preserved; duplicate registration is a no-op.

    pub(crate) fn add_predecessor(&mut self, segment: SegmentId) {
        if !self.predecessors.contains(&segment) {
            self.predecessors.push(segment);
        }
    }

    pub(crate) fn add_predecessor_same_road(&mut self, segment: SegmentId) {
        if !self.predecessors_same_road.contains(&segment) {
            self.predecessors_same_road.push(segment);
        }
    }

    pub(crate) fn add_successor(&mut self, segment: SegmentId) {
        if !self.successors.contains(&segment) {
            self.successors.push(segment);
        }
    }

    pub(crate) fn add_successor_same_road(&mut self, segment: SegmentId) {
        if !self.successors_same_road.contains(&segment) {
            self.successors_same_road.push(segment);
        }
    }

    /// Replace the same-road predecessor list with the single bounding outer
    /// segment of an inner segment.
    pub(crate) fn set_sole_predecessor_same_road(&mut self, segment: SegmentId) {
        self.predecessors_same_road.clear();
        self.predecessors_same_road.push(segment);
    }

    /// Replace the same-road successor list with the single bounding outer
    /// segment of an inner segment.
    pub(crate) fn set_sole_successor_same_road(&mut self, segment: SegmentId) {
        self.successors_same_road.clear();
        self.successors_same_road.push(segment);
    }
}

impl std::fmt::Display for Segment {
    /// The pid, extended with the road identity for outer segments.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.road() {
            Some(road) => write!(f, "{} ({road})", self.pid),
            None => f.write_str(&self.pid),
        }
    }
}
