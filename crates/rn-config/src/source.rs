//! The `ConfigSource` trait and area-restricted object listing.
//!
//! The topology builder is generic over `ConfigSource` so the middleware
//! client that feeds real deployments and the in-memory store used by tests
//! plug into the same build path.

use rustc_hash::FxHashSet;

use crate::record::{Record, RecordKind};
use crate::{ConfigError, ConfigResult};

// ── ConfigSource ──────────────────────────────────────────────────────────────

/// Read access to typed configuration records.
///
/// All methods are infallible lookups: an unknown pid answers `None` (or an
/// empty slice), never an error.  Implementations must return `ids_of_kind`
/// in a stable order so topology builds are deterministic.
pub trait ConfigSource {
    /// The record kind of `pid`, or `None` if the pid is not configured.
    fn kind_of(&self, pid: &str) -> Option<RecordKind>;

    /// The record stored for `pid`, if present *and* of the requested kind.
    fn record(&self, pid: &str, kind: RecordKind) -> Option<&Record>;

    /// The declared members of a network container; empty for anything that
    /// is not a container.
    fn members(&self, pid: &str) -> &[String];

    /// All configured pids of the given kind, in stable (declaration) order.
    fn ids_of_kind(&self, kind: RecordKind) -> Vec<String>;

    /// The configuration area `pid` belongs to, if any.
    fn area_of(&self, pid: &str) -> Option<&str>;
}

// ── Area-restricted listing ───────────────────────────────────────────────────

/// List objects of the type named `kind_name`, restricted to the
/// configuration areas in `areas` (a `:`-separated pid list).
///
/// # Errors
///
/// [`ConfigError::UnknownTypeName`] when `kind_name` does not name a known
/// record type — this aborts the listing only, not the caller's wider build.
pub fn objects_in_areas<S: ConfigSource + ?Sized>(
    source: &S,
    kind_name: &str,
    areas: &str,
) -> ConfigResult<Vec<String>> {
    let kind = RecordKind::from_name(kind_name)
        .ok_or_else(|| ConfigError::UnknownTypeName(kind_name.to_owned()))?;
    Ok(objects_of_kind(source, kind, areas))
}

/// Like [`objects_in_areas`], for callers that already hold a [`RecordKind`].
///
/// An empty `areas` string means "no restriction" and yields every object of
/// the kind.  Entries in `areas` may also name a single object of the
/// requested kind directly, which selects just that object.  Entries of any
/// other kind, and entries not present in the configuration, are logged and
/// skipped.
pub fn objects_of_kind<S: ConfigSource + ?Sized>(
    source: &S,
    kind: RecordKind,
    areas: &str,
) -> Vec<String> {
    if areas.trim().is_empty() {
        return source.ids_of_kind(kind);
    }

    let mut out: Vec<String> = Vec::new();
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut push = |out: &mut Vec<String>, pid: String| {
        if seen.insert(pid.clone()) {
            out.push(pid);
        }
    };

    for entry in areas.split(':').map(str::trim).filter(|s| !s.is_empty()) {
        match source.kind_of(entry) {
            // A single object of the requested kind, selected directly.
            Some(k) if k == kind => push(&mut out, entry.to_owned()),

            // A configuration area: take every object of the kind inside it.
            Some(RecordKind::ConfigArea) => {
                for pid in source.ids_of_kind(kind) {
                    if source.area_of(&pid) == Some(entry) {
                        push(&mut out, pid);
                    }
                }
            }

            Some(other) => {
                log::error!("object {entry} has unexpected kind {other}, skipped");
            }
            None => {
                log::warn!("object {entry} not present in configuration, skipped");
            }
        }
    }

    out
}
