//! Topology-subsystem error type.

use thiserror::Error;

/// Errors produced by `rn-topology`.
///
/// The build path itself degrades and continues on bad records; these errors
/// cover invalid caller arguments and post-build validation findings.
#[derive(Debug, Error)]
pub enum TopologyError {
    /// The pid passed to `build_topology` does not name a configured network
    /// container.
    #[error("network container {0:?} not present in configuration")]
    UnknownNetwork(String),

    /// A segment decoded with length zero.  Span queries treat such a
    /// segment as a recursion terminator; the configuration should be fixed.
    #[error("segment {pid:?} has zero length")]
    ZeroLengthSegment { pid: String },
}

pub type TopologyResult<T> = Result<T, TopologyError>;
