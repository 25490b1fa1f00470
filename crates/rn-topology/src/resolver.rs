//! Recursive network-container resolution.
//!
//! A network container declares outer segments directly and may nest further
//! containers to arbitrary depth.  Resolution flattens that tree into the
//! ordered set of outer-segment pids.  Configuration data is not trusted to
//! be acyclic: a visited set over container pids bounds the recursion.

use rustc_hash::FxHashSet;

use rn_config::{ConfigSource, RecordKind};

/// Collect the pids of all outer segments reachable from the network
/// container `network_pid`, in first-discovery order, deduplicated.
///
/// Members that are neither outer segments nor nested networks are a
/// configuration anomaly: logged and skipped, never fatal.  A missing or
/// non-network `network_pid` yields an empty result.
pub fn resolve_outer_segments<S: ConfigSource + ?Sized>(
    source: &S,
    network_pid: &str,
) -> Vec<String> {
    let mut out = Vec::new();
    let mut seen = FxHashSet::default();
    let mut visited = FxHashSet::default();
    walk(source, network_pid, &mut out, &mut seen, &mut visited);
    out
}

fn walk<S: ConfigSource + ?Sized>(
    source: &S,
    network_pid: &str,
    out: &mut Vec<String>,
    seen: &mut FxHashSet<String>,
    visited: &mut FxHashSet<String>,
) {
    if !visited.insert(network_pid.to_owned()) {
        log::warn!("network {network_pid} already visited, circular container reference");
        return;
    }

    if source.kind_of(network_pid) != Some(RecordKind::Network) {
        log::warn!("network {network_pid} not present in configuration");
        return;
    }

    for member in source.members(network_pid) {
        match source.kind_of(member) {
            Some(RecordKind::OuterSegment) => {
                if seen.insert(member.clone()) {
                    out.push(member.clone());
                }
            }
            Some(RecordKind::Network) => {
                walk(source, member, out, seen, visited);
            }
            Some(other) => {
                log::warn!(
                    "member {member} of network {network_pid} has unexpected kind {other}, skipped"
                );
            }
            None => {
                log::warn!(
                    "member {member} of network {network_pid} not present in configuration, skipped"
                );
            }
        }
    }
}
