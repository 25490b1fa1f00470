//! Typed configuration records.
//!
//! Every configuration object is identified by a stable string id (its
//! *pid*) and carries one record.  Optional fields model attribute groups
//! that may be absent in real configurations; decoding never fails on a
//! missing field — downstream consumers treat `None` as "unknown" and
//! degrade (e.g. the same-road test answers `false` for a segment without a
//! road identity).

use rn_core::{NodeKind, PointKind};

// ── RecordKind ────────────────────────────────────────────────────────────────

/// Discriminates the record types known to the configuration model.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecordKind {
    /// Network container: a named set of outer segments and nested networks.
    Network,
    /// Outer road segment with explicit start/end nodes.
    OuterSegment,
    /// Inner road segment bounded by two outer segments within a node area.
    InnerSegment,
    /// Topology node (junction).
    Node,
    /// Physical sub-segment with fixed geometry.
    SubSegment,
    /// Measurement point (cross-section) placed on a segment.
    MeasurementPoint,
    /// Secondary identity derived from a measurement point.
    DerivedPoint,
    /// Configuration area grouping objects for filtered listings.
    ConfigArea,
}

impl RecordKind {
    /// Parse an external type name.  Returns `None` for names the model does
    /// not know — callers surface that as [`ConfigError::UnknownTypeName`]
    /// (an invalid-argument condition, not a build failure).
    ///
    /// [`ConfigError::UnknownTypeName`]: crate::ConfigError::UnknownTypeName
    pub fn from_name(name: &str) -> Option<RecordKind> {
        match name.trim() {
            "network"           => Some(RecordKind::Network),
            "outer-segment"     => Some(RecordKind::OuterSegment),
            "inner-segment"     => Some(RecordKind::InnerSegment),
            "node"              => Some(RecordKind::Node),
            "sub-segment"       => Some(RecordKind::SubSegment),
            "measurement-point" => Some(RecordKind::MeasurementPoint),
            "derived-point"     => Some(RecordKind::DerivedPoint),
            "config-area"       => Some(RecordKind::ConfigArea),
            _                   => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Network          => "network",
            RecordKind::OuterSegment     => "outer-segment",
            RecordKind::InnerSegment     => "inner-segment",
            RecordKind::Node             => "node",
            RecordKind::SubSegment       => "sub-segment",
            RecordKind::MeasurementPoint => "measurement-point",
            RecordKind::DerivedPoint     => "derived-point",
            RecordKind::ConfigArea       => "config-area",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Record structs ────────────────────────────────────────────────────────────

/// A network container: members are pids of outer segments or nested
/// networks (any other kind is a configuration anomaly the resolver skips).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NetworkRecord {
    pub members: Vec<String>,
}

/// An outer road segment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OuterSegmentRecord {
    /// Physical length in metres.
    pub length: u64,
    /// Pids of the sub-segments in driving order.
    pub sub_segments: Vec<String>,
    /// Pid of the node the segment departs from.
    pub from_node: Option<String>,
    /// Pid of the node the segment arrives at.
    pub to_node: Option<String>,
    /// Road designation, e.g. `"A8"`.
    pub road: Option<String>,
    /// Direction tag along the road, e.g. `"east"`.
    pub direction: Option<String>,
}

/// An inner road segment bounded by two outer segments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InnerSegmentRecord {
    /// Physical length in metres.
    pub length: u64,
    /// Pids of the sub-segments in driving order.
    pub sub_segments: Vec<String>,
    /// Pid of the outer segment this segment continues from.
    pub from_segment: Option<String>,
    /// Pid of the outer segment this segment leads into.
    pub to_segment: Option<String>,
}

/// A topology node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeRecord {
    pub kind: NodeKind,
}

/// A physical sub-segment with fixed geometry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubSegmentRecord {
    /// Length in metres.
    pub length: u64,
    /// Number of lanes.
    pub lanes: u8,
    /// Slope/grade tag, e.g. `"+4%"`.  Free-form; absent when not surveyed.
    pub slope: Option<String>,
}

/// A measurement point (cross-section).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointRecord {
    /// Pid of the segment (outer or inner) the point lies on.
    pub segment: Option<String>,
    /// Offset from the segment start in metres.
    pub offset: u64,
    pub kind: PointKind,
}

/// A secondary identity derived from a measurement point, used by downstream
/// consumers that address points under an alternate naming scheme.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedPointRecord {
    /// Pid of the measurement point this identity derives from.
    pub source: String,
}

// ── Record ────────────────────────────────────────────────────────────────────

/// A configuration record of any kind.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Record {
    Network(NetworkRecord),
    OuterSegment(OuterSegmentRecord),
    InnerSegment(InnerSegmentRecord),
    Node(NodeRecord),
    SubSegment(SubSegmentRecord),
    MeasurementPoint(PointRecord),
    DerivedPoint(DerivedPointRecord),
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Network(_)          => RecordKind::Network,
            Record::OuterSegment(_)     => RecordKind::OuterSegment,
            Record::InnerSegment(_)     => RecordKind::InnerSegment,
            Record::Node(_)             => RecordKind::Node,
            Record::SubSegment(_)       => RecordKind::SubSegment,
            Record::MeasurementPoint(_) => RecordKind::MeasurementPoint,
            Record::DerivedPoint(_)     => RecordKind::DerivedPoint,
        }
    }
}
