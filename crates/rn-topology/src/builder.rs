//! Topology construction: the build context and the `build_topology` entry
//! point.
//!
//! # Build sequence
//!
//! 1. Resolve the network container into outer-segment pids and build every
//!    outer segment, lazily creating its start/end nodes and registering the
//!    departing/arriving edges on them.
//! 2. Build every inner segment in the configuration, wiring the
//!    predecessor/successor links between it and its bounding outer
//!    segments.  An inner segment bounded by nothing is discarded.
//! 3. Attach measurement points (restricted to the requested configuration
//!    areas) to the segment each one lies on.
//! 4. Record the derived-point identity mapping.
//!
//! The whole sequence is single-threaded and synchronous; the finished
//! [`SegmentGraph`] is read-only.
//!
//! # Failure semantics
//!
//! One bad record never aborts the build.  A missing record behind a known
//! identity yields an entity with default attributes; an unknown identity
//! yields an absent reference; both are logged.  Callers treat absent fields
//! as "unknown" — in particular the same-road test answers `false` when
//! either side has no road identity.

use rustc_hash::FxHashMap;

use rn_config::{
    objects_of_kind, ConfigSource, InnerSegmentRecord, OuterSegmentRecord, PointRecord, Record,
    RecordKind, SubSegmentRecord,
};
use rn_core::{same_road, NodeId, NodeKind, RoadRef, SegmentId};

use crate::cross_section::MeasurementPoint;
use crate::graph::SegmentGraph;
use crate::node::Node;
use crate::resolver::resolve_outer_segments;
use crate::segment::{InnerLinks, OuterLinks, Segment, SegmentKind, SubSegment};
use crate::{TopologyError, TopologyResult};

// ── Entry point ───────────────────────────────────────────────────────────────

/// Build the full topology model for the network container `network_pid`.
///
/// `point_areas` restricts which measurement points are attached: a
/// `:`-separated list of configuration-area pids, empty for no restriction.
///
/// # Errors
///
/// [`TopologyError::UnknownNetwork`] when `network_pid` does not name a
/// configured network container.  Everything else degrades and continues.
pub fn build_topology<S: ConfigSource + ?Sized>(
    source: &S,
    network_pid: &str,
    point_areas: &str,
) -> TopologyResult<SegmentGraph> {
    if source.kind_of(network_pid) != Some(RecordKind::Network) {
        return Err(TopologyError::UnknownNetwork(network_pid.to_owned()));
    }

    let mut builder = TopologyBuilder::new(source);
    builder.build_outer_segments(network_pid);
    builder.build_inner_segments();
    builder.attach_points(point_areas);
    builder.map_derived_points();
    Ok(builder.finish())
}

// ── TopologyBuilder ───────────────────────────────────────────────────────────

/// The build context: arenas under construction plus the pid → id registry.
///
/// All get-or-build accessors ([`node_id`](Self::node_id),
/// [`outer_segment_id`](Self::outer_segment_id)) are idempotent — a second
/// call with the same identity returns the id built by the first.  The
/// context is created at the start of [`build_topology`] and consumed by
/// [`finish`](Self::finish); there is no process-wide state.
pub struct TopologyBuilder<'a, S: ConfigSource + ?Sized> {
    source: &'a S,
    nodes: Vec<Node>,
    segments: Vec<Segment>,
    node_ids: FxHashMap<String, NodeId>,
    segment_ids: FxHashMap<String, SegmentId>,
    /// Measurement-point pid → derived identity pid.
    derived_points: FxHashMap<String, String>,
}

impl<'a, S: ConfigSource + ?Sized> TopologyBuilder<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            nodes: Vec::new(),
            segments: Vec::new(),
            node_ids: FxHashMap::default(),
            segment_ids: FxHashMap::default(),
            derived_points: FxHashMap::default(),
        }
    }

    /// Phase 1: resolve the network container and build every outer segment.
    pub fn build_outer_segments(&mut self, network_pid: &str) {
        for pid in resolve_outer_segments(self.source, network_pid) {
            self.outer_segment_id(&pid);
        }
    }

    /// Phase 2: build every inner segment in the configuration and wire its
    /// links.  Inner segments referencing an outer segment not yet built
    /// trigger lazy construction of that outer segment.
    pub fn build_inner_segments(&mut self) {
        for pid in self.source.ids_of_kind(RecordKind::InnerSegment) {
            self.build_inner_segment(&pid);
        }
    }

    /// Phase 3: attach measurement points from the given configuration areas
    /// (`:`-separated, empty = all) to the segments they lie on.
    pub fn attach_points(&mut self, point_areas: &str) {
        for pid in objects_of_kind(self.source, RecordKind::MeasurementPoint, point_areas) {
            let record = match self.source.record(&pid, RecordKind::MeasurementPoint) {
                Some(Record::MeasurementPoint(r)) => r.clone(),
                _ => {
                    log::warn!("measurement point {pid} has no record, built with defaults");
                    PointRecord::default()
                }
            };

            // The owning segment is decided here, once; a point whose
            // reference does not resolve to a built segment cannot be placed.
            let segment = record
                .segment
                .as_deref()
                .and_then(|p| self.segment_ids.get(p).copied());
            let Some(segment) = segment else {
                log::warn!("measurement point {pid} lies on no resolvable segment, dropped");
                continue;
            };

            self.segments[segment.index()].points_mut().attach(MeasurementPoint {
                pid,
                offset: record.offset,
                kind: record.kind,
            });
        }
    }

    /// Phase 4: record the mapping from measurement points to their derived
    /// secondary identities.
    pub fn map_derived_points(&mut self) {
        for pid in self.source.ids_of_kind(RecordKind::DerivedPoint) {
            let Some(Record::DerivedPoint(record)) =
                self.source.record(&pid, RecordKind::DerivedPoint)
            else {
                continue;
            };
            if record.source.is_empty() {
                log::warn!("derived point {pid} references no measurement point, skipped");
                continue;
            }
            self.derived_points.insert(record.source.clone(), pid);
        }
    }

    /// Consume the context and produce the finished, read-only graph.
    pub fn finish(self) -> SegmentGraph {
        SegmentGraph::new(
            self.nodes,
            self.segments,
            self.node_ids,
            self.segment_ids,
            self.derived_points,
        )
    }

    // ── Get-or-build accessors ────────────────────────────────────────────

    /// Get or build the node `pid`.  `None` when the identity is not a
    /// configured node.
    pub fn node_id(&mut self, pid: &str) -> Option<NodeId> {
        if let Some(&id) = self.node_ids.get(pid) {
            return Some(id);
        }
        if self.source.kind_of(pid) != Some(RecordKind::Node) {
            log::warn!("node {pid} not present in configuration");
            return None;
        }

        let kind = match self.source.record(pid, RecordKind::Node) {
            Some(Record::Node(r)) => r.kind,
            _ => {
                log::warn!("node {pid} has no record, built with defaults");
                NodeKind::Other
            }
        };

        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::new(id, pid.to_owned(), kind));
        self.node_ids.insert(pid.to_owned(), id);
        Some(id)
    }

    /// Get or build the outer segment `pid`.  `None` when the identity is
    /// not a configured outer segment.
    pub fn outer_segment_id(&mut self, pid: &str) -> Option<SegmentId> {
        if let Some(&id) = self.segment_ids.get(pid) {
            return self.segments[id.index()].is_outer().then_some(id);
        }
        if self.source.kind_of(pid) != Some(RecordKind::OuterSegment) {
            return None;
        }

        let record = match self.source.record(pid, RecordKind::OuterSegment) {
            Some(Record::OuterSegment(r)) => r.clone(),
            _ => {
                log::warn!("outer segment {pid} has no record, built with defaults");
                OuterSegmentRecord::default()
            }
        };

        let sub_segments = self.decode_sub_segments(pid, &record.sub_segments);
        let from_node = record.from_node.as_deref().and_then(|n| self.node_id(n));
        let to_node = record.to_node.as_deref().and_then(|n| self.node_id(n));
        let road = match (record.road, record.direction) {
            (Some(road), Some(direction)) => Some(RoadRef::new(road, direction)),
            _ => None,
        };
        if record.length == 0 {
            log::warn!("outer segment {pid} decoded with zero length");
        }

        let id = SegmentId(self.segments.len() as u32);
        self.segments.push(Segment::new(
            id,
            pid.to_owned(),
            record.length,
            sub_segments,
            SegmentKind::Outer(OuterLinks { from_node, to_node, road }),
        ));
        self.segment_ids.insert(pid.to_owned(), id);

        if let Some(node) = from_node {
            self.nodes[node.index()].add_departing(id);
        }
        if let Some(node) = to_node {
            self.nodes[node.index()].add_arriving(id);
        }
        Some(id)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn build_inner_segment(&mut self, pid: &str) {
        if self.segment_ids.contains_key(pid) {
            return;
        }

        let record = match self.source.record(pid, RecordKind::InnerSegment) {
            Some(Record::InnerSegment(r)) => r.clone(),
            _ => {
                log::warn!("inner segment {pid} has no record, built with defaults");
                InnerSegmentRecord::default()
            }
        };

        let from_outer = record.from_segment.as_deref().and_then(|p| self.outer_segment_id(p));
        let to_outer = record.to_segment.as_deref().and_then(|p| self.outer_segment_id(p));

        // Unreachable from the outer topology, carries no useful links.
        if from_outer.is_none() && to_outer.is_none() {
            log::debug!("inner segment {pid} bounded by no outer segment, discarded");
            return;
        }

        let sub_segments = self.decode_sub_segments(pid, &record.sub_segments);
        if record.length == 0 {
            log::warn!("inner segment {pid} decoded with zero length");
        }

        let id = SegmentId(self.segments.len() as u32);
        self.segments.push(Segment::new(
            id,
            pid.to_owned(),
            record.length,
            sub_segments,
            SegmentKind::Inner(InnerLinks { from_segment: from_outer, to_segment: to_outer }),
        ));
        self.segment_ids.insert(pid.to_owned(), id);

        // The same-road test for each side compares the two *bounding outer*
        // segments' road identities — inner segments carry none of their own.
        let from_road: Option<RoadRef> =
            from_outer.and_then(|s| self.segments[s.index()].road().cloned());
        let to_road: Option<RoadRef> =
            to_outer.and_then(|s| self.segments[s.index()].road().cloned());

        if let Some(from_id) = from_outer {
            self.segments[id.index()].set_sole_predecessor_same_road(from_id);

            // Contained in the node where the preceding outer segment ends.
            if let Some(node) = self.segments[from_id.index()].as_outer().and_then(|o| o.to_node) {
                self.nodes[node.index()].add_inner(id);
            }

            if same_road(from_road.as_ref(), to_road.as_ref()) {
                self.segments[from_id.index()].add_successor_same_road(id);
            } else {
                self.segments[from_id.index()].add_successor(id);
            }
        }

        if let Some(to_id) = to_outer {
            self.segments[id.index()].set_sole_successor_same_road(to_id);

            // Contained in the node where the following outer segment starts.
            if let Some(node) = self.segments[to_id.index()].as_outer().and_then(|o| o.from_node) {
                self.nodes[node.index()].add_inner(id);
            }

            if same_road(to_road.as_ref(), from_road.as_ref()) {
                self.segments[to_id.index()].add_predecessor_same_road(id);
            } else {
                self.segments[to_id.index()].add_predecessor(id);
            }
        }
    }

    /// Decode a segment's sub-segment references and compute each offset by
    /// accumulating lengths in declared order.
    fn decode_sub_segments(&self, owner: &str, pids: &[String]) -> Vec<SubSegment> {
        let mut subs = Vec::with_capacity(pids.len());
        let mut offset = 0u64;

        for pid in pids {
            if self.source.kind_of(pid) != Some(RecordKind::SubSegment) {
                log::warn!("sub-segment {pid} of {owner} not present in configuration, skipped");
                continue;
            }
            let record = match self.source.record(pid, RecordKind::SubSegment) {
                Some(Record::SubSegment(r)) => r.clone(),
                _ => {
                    log::warn!("sub-segment {pid} of {owner} has no record, built with defaults");
                    SubSegmentRecord::default()
                }
            };

            subs.push(SubSegment {
                pid: pid.clone(),
                length: record.length,
                lanes: record.lanes,
                slope: record.slope,
                offset,
            });
            offset += record.length;
        }

        subs
    }
}
