//! `rn-topology` — network resolution, graph construction, and spatial
//! queries.
//!
//! The crate turns a declarative configuration (via `rn-config`'s
//! [`ConfigSource`](rn_config::ConfigSource)) into a read-only
//! [`SegmentGraph`]: outer segments linked through shared nodes, inner
//! segments chained between them, measurement points indexed by offset.
//! [`build_topology`] is the single entry point.
//!
//! # Crate layout
//!
//! | Module            | Contents                                              |
//! |-------------------|-------------------------------------------------------|
//! | [`resolver`]      | recursive network-container resolution                |
//! | [`builder`]       | `TopologyBuilder`, `build_topology`                   |
//! | [`graph`]         | `SegmentGraph` and all queries (incl. span query)     |
//! | [`segment`]       | `Segment`, `SegmentKind`, `SubSegment`                |
//! | [`node`]          | `Node`                                                |
//! | [`cross_section`] | `MeasurementPoint`, `CrossSectionIndex`               |
//! | [`error`]         | `TopologyError`, `TopologyResult<T>`                  |

pub mod builder;
pub mod cross_section;
pub mod error;
pub mod graph;
pub mod node;
pub mod resolver;
pub mod segment;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::{build_topology, TopologyBuilder};
pub use cross_section::{CrossSectionIndex, MeasurementPoint};
pub use error::{TopologyError, TopologyResult};
pub use graph::SegmentGraph;
pub use node::Node;
pub use resolver::resolve_outer_segments;
pub use segment::{InnerLinks, OuterLinks, Segment, SegmentKind, SubSegment};
