//! The finished segment graph and its query surface.
//!
//! # Data layout
//!
//! Nodes and segments live in arenas (`Vec`s) indexed by `NodeId` /
//! `SegmentId`; every reference between entities is an arena id, so the
//! mutually referential topology carries no ownership cycles.  Stable-id
//! lookup maps sit beside the arenas.
//!
//! After construction the graph is read-only: every query takes `&self`, so
//! a built graph can be shared across threads freely.

use rustc_hash::FxHashMap;

use rn_core::{NodeId, PointKind, SegmentId};

use crate::cross_section::{CrossSectionIndex, MeasurementPoint};
use crate::node::Node;
use crate::segment::{Segment, SegmentKind, SubSegment};
use crate::TopologyError;

/// The in-memory topology model: node and segment arenas, stable-id lookup,
/// and the derived-point identity table.
///
/// Construct via [`build_topology`](crate::build_topology); there is no
/// public constructor and no post-build mutation.
#[derive(Debug)]
pub struct SegmentGraph {
    nodes: Vec<Node>,
    segments: Vec<Segment>,
    node_ids: FxHashMap<String, NodeId>,
    segment_ids: FxHashMap<String, SegmentId>,
    /// Measurement-point pid → derived identity pid.
    derived_points: FxHashMap<String, String>,
}

impl SegmentGraph {
    pub(crate) fn new(
        nodes: Vec<Node>,
        segments: Vec<Segment>,
        node_ids: FxHashMap<String, NodeId>,
        segment_ids: FxHashMap<String, SegmentId>,
        derived_points: FxHashMap<String, String>,
    ) -> Self {
        Self { nodes, segments, node_ids, segment_ids, derived_points }
    }

    // ── Arena access ──────────────────────────────────────────────────────

    /// The node behind an id handed out by this graph.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// The segment behind an id handed out by this graph.
    #[inline]
    pub fn segment(&self, id: SegmentId) -> &Segment {
        &self.segments[id.index()]
    }

    pub fn node_by_pid(&self, pid: &str) -> Option<&Node> {
        self.node_ids.get(pid).map(|&id| self.node(id))
    }

    pub fn segment_by_pid(&self, pid: &str) -> Option<&Segment> {
        self.segment_ids.get(pid).map(|&id| self.segment(id))
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    pub fn outer_segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter().filter(|s| s.is_outer())
    }

    pub fn inner_segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter().filter(|s| s.is_inner())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn outer_count(&self) -> usize {
        self.outer_segments().count()
    }

    pub fn inner_count(&self) -> usize {
        self.inner_segments().count()
    }

    // ── Measurement points ────────────────────────────────────────────────

    /// The cross-section index of the segment with the given stable id.
    pub fn points_of(&self, segment_pid: &str) -> Option<&CrossSectionIndex> {
        self.segment_by_pid(segment_pid).map(Segment::points)
    }

    /// The derived secondary identity of a measurement point, if one is
    /// configured.
    pub fn derived_point_of(&self, point_pid: &str) -> Option<&str> {
        self.derived_points.get(point_pid).map(String::as_str)
    }

    /// Reverse lookup: the measurement point a derived identity stems from.
    pub fn point_of_derived(&self, derived_pid: &str) -> Option<&str> {
        self.derived_points
            .iter()
            .find(|(_, derived)| derived.as_str() == derived_pid)
            .map(|(point, _)| point.as_str())
    }

    // ── Node-kind predicates ──────────────────────────────────────────────
    //
    // Inner segments have no node reference of their own; they answer via
    // the bounding outer segments (preferring the following segment's start,
    // falling back to the preceding segment's end).

    /// Does the segment begin in an interchange or triangle?  For inner
    /// segments: does the node they sit inside have one of those kinds?
    pub fn starts_in_interchange_or_triangle(&self, seg: SegmentId) -> bool {
        match &self.segment(seg).kind {
            SegmentKind::Outer(o) => o.from_node.is_some_and(|n| {
                let node = self.node(n);
                node.is_interchange() || node.is_triangle()
            }),
            SegmentKind::Inner(i) => {
                if let Some(to) = i.to_segment {
                    self.starts_in_interchange_or_triangle(to)
                } else if let Some(from) = i.from_segment {
                    self.ends_in_interchange_or_triangle(from)
                } else {
                    false
                }
            }
        }
    }

    /// Does the segment end in an interchange or triangle?
    pub fn ends_in_interchange_or_triangle(&self, seg: SegmentId) -> bool {
        match &self.segment(seg).kind {
            SegmentKind::Outer(o) => o.to_node.is_some_and(|n| {
                let node = self.node(n);
                node.is_interchange() || node.is_triangle()
            }),
            // An inner segment lies entirely within one node area; begin and
            // end need not be distinguished.
            SegmentKind::Inner(_) => self.starts_in_interchange_or_triangle(seg),
        }
    }

    /// Does the segment begin at a highway terminus?
    pub fn starts_at_terminus(&self, seg: SegmentId) -> bool {
        match &self.segment(seg).kind {
            SegmentKind::Outer(o) => o.from_node.is_some_and(|n| self.node(n).is_terminus()),
            SegmentKind::Inner(i) => {
                i.to_segment.is_some_and(|to| self.starts_at_terminus(to))
            }
        }
    }

    /// Does the segment end at a highway terminus?
    pub fn ends_at_terminus(&self, seg: SegmentId) -> bool {
        match &self.segment(seg).kind {
            SegmentKind::Outer(o) => o.to_node.is_some_and(|n| self.node(n).is_terminus()),
            SegmentKind::Inner(i) => {
                i.from_segment.is_some_and(|from| self.ends_at_terminus(from))
            }
        }
    }

    // ── Neighbor-derived queries ──────────────────────────────────────────

    /// The same-road predecessor with the shortest length; the first
    /// discovered wins on ties.
    pub fn shortest_same_road_predecessor(&self, seg: SegmentId) -> Option<SegmentId> {
        let mut shortest: Option<SegmentId> = None;
        for &pred in self.segment(seg).predecessors_same_road() {
            match shortest {
                None => shortest = Some(pred),
                Some(best) if self.segment(pred).length < self.segment(best).length => {
                    shortest = Some(pred);
                }
                Some(_) => {}
            }
        }
        shortest
    }

    /// Predecessor segments that act as entries into this segment.
    pub fn entering_segments(&self, seg: SegmentId) -> Vec<SegmentId> {
        let s = self.segment(seg);
        s.predecessors()
            .iter()
            .chain(s.predecessors_same_road())
            .copied()
            .filter(|&p| self.segment(p).is_entry())
            .collect()
    }

    /// Successor segments that act as exits out of this segment.
    pub fn exiting_segments(&self, seg: SegmentId) -> Vec<SegmentId> {
        let s = self.segment(seg);
        s.successors()
            .iter()
            .chain(s.successors_same_road())
            .copied()
            .filter(|&p| self.segment(p).is_exit())
            .collect()
    }

    /// Entry-kind measurement points on the segments entering this one.
    pub fn entering_points(&self, seg: SegmentId) -> Vec<&MeasurementPoint> {
        self.entering_segments(seg)
            .into_iter()
            .flat_map(|p| self.segment(p).points_of_kind(PointKind::Entry))
            .collect()
    }

    /// Exit-kind measurement points on the segments exiting this one.
    pub fn exiting_points(&self, seg: SegmentId) -> Vec<&MeasurementPoint> {
        self.exiting_segments(seg)
            .into_iter()
            .flat_map(|p| self.segment(p).points_of_kind(PointKind::Exit))
            .collect()
    }

    /// Every sub-segment in the graph, outer segments first, each segment's
    /// sub-segments in driving order.
    pub fn all_sub_segments(&self) -> Vec<&SubSegment> {
        self.outer_segments()
            .chain(self.inner_segments())
            .flat_map(|s| s.sub_segments())
            .collect()
    }

    // ── Span query ────────────────────────────────────────────────────────

    /// Every sub-segment whose [start, start+length) interval overlaps the
    /// window [offset, offset+span) measured from the start of `seg`.
    ///
    /// A window extending past the segment's length continues into every
    /// same-road successor with the window reduced by the remaining length,
    /// recursively.  Results keep current-segment-first order and are
    /// deduplicated.  Termination relies on segment lengths being positive;
    /// zero-length segments end the recursion and are reported by
    /// [`validate`](Self::validate).
    pub fn sub_segments_in_window(
        &self,
        seg: SegmentId,
        offset: u64,
        span: u64,
    ) -> Vec<&SubSegment> {
        let mut out = Vec::new();
        self.collect_window(seg, offset, span, &mut out);
        out
    }

    fn collect_window<'a>(
        &'a self,
        seg: SegmentId,
        offset: u64,
        span: u64,
        out: &mut Vec<&'a SubSegment>,
    ) {
        let segment = self.segment(seg);

        for sub in segment.sub_segments_in_local_window(offset, span) {
            if !out.iter().any(|s| std::ptr::eq(*s, sub)) {
                out.push(sub);
            }
        }

        // Without a positive length the window below would not shrink.
        if segment.length == 0 {
            return;
        }

        // Window reaches past this segment: continue on the same road.
        if offset + span > segment.length {
            let remaining = offset + span - segment.length;
            for &next in segment.successors_same_road() {
                self.collect_window(next, 0, remaining, out);
            }
        }
    }

    // ── Validation ────────────────────────────────────────────────────────

    /// Configuration findings that violate query preconditions.  Currently:
    /// segments that decoded with zero length (span-query recursion treats
    /// them as terminators).
    pub fn validate(&self) -> Vec<TopologyError> {
        self.segments
            .iter()
            .filter(|s| s.length == 0)
            .map(|s| TopologyError::ZeroLengthSegment { pid: s.pid.clone() })
            .collect()
    }
}
