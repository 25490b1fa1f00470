//! `rn-config` — the declarative configuration model the topology is built
//! from.
//!
//! The real configuration lives in external middleware; this crate defines
//! the record types, the [`ConfigSource`] trait the topology builder consumes,
//! an in-memory implementation used by tests and demos, and a CSV loader for
//! measurement-point records.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                |
//! |------------|---------------------------------------------------------|
//! | [`record`] | `RecordKind`, `Record`, and the typed record structs    |
//! | [`source`] | `ConfigSource` trait, `objects_in_areas` area filtering |
//! | [`memory`] | `MemoryConfig` (in-memory `ConfigSource`)               |
//! | [`loader`] | `load_points_csv` / `load_points_reader`                |
//! | [`error`]  | `ConfigError`, `ConfigResult<T>`                        |

pub mod error;
pub mod loader;
pub mod memory;
pub mod record;
pub mod source;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{ConfigError, ConfigResult};
pub use loader::{load_points_csv, load_points_reader};
pub use memory::MemoryConfig;
pub use record::{
    DerivedPointRecord, InnerSegmentRecord, NetworkRecord, NodeRecord, OuterSegmentRecord,
    PointRecord, Record, RecordKind, SubSegmentRecord,
};
pub use source::{objects_in_areas, objects_of_kind, ConfigSource};
