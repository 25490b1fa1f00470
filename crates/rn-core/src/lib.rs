//! `rn-core` — foundational types for the `roadnet` topology model.
//!
//! This crate is a dependency of every other `rn-*` crate.  It intentionally
//! has no `rn-*` dependencies and no required external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                          |
//! |-----------|---------------------------------------------------|
//! | [`ids`]   | `NodeId`, `SegmentId`                             |
//! | [`kinds`] | `NodeKind`, `PointKind`                           |
//! | [`road`]  | `RoadRef` (road name + direction), same-road test |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod ids;
pub mod kinds;
pub mod road;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{NodeId, SegmentId};
pub use kinds::{NodeKind, PointKind};
pub use road::{same_road, RoadRef};
