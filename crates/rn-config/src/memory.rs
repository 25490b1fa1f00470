//! In-memory `ConfigSource` implementation.
//!
//! `MemoryConfig` is the store behind unit tests, demos, and the CSV loader.
//! Production deployments implement [`ConfigSource`] over the middleware
//! client instead; nothing in the topology builder distinguishes the two.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::record::{Record, RecordKind};
use crate::source::ConfigSource;

/// A configuration held entirely in memory.
///
/// Insertion order is preserved per record kind, so `ids_of_kind` — and
/// therefore a topology built from this store — is deterministic.
#[derive(Default)]
pub struct MemoryConfig {
    records: FxHashMap<String, Record>,
    /// Pids in insertion order (the declaration order of the configuration).
    order: Vec<String>,
    /// Pid → configuration area.
    areas: FxHashMap<String, String>,
    /// Pids that name configuration areas.
    area_ids: FxHashSet<String>,
}

impl MemoryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under `pid`.  Re-inserting a pid replaces the record
    /// but keeps its original declaration order.
    pub fn insert(&mut self, pid: impl Into<String>, record: Record) -> &mut Self {
        let pid = pid.into();
        if self.records.insert(pid.clone(), record).is_none() {
            self.order.push(pid);
        }
        self
    }

    /// Insert a record under `pid`, assigned to configuration area `area`.
    pub fn insert_in_area(
        &mut self,
        pid: impl Into<String>,
        area: impl Into<String>,
        record: Record,
    ) -> &mut Self {
        let pid = pid.into();
        let area = area.into();
        self.area_ids.insert(area.clone());
        self.areas.insert(pid.clone(), area);
        self.insert(pid, record)
    }

    /// Declare a configuration area without assigning any object to it.
    pub fn declare_area(&mut self, area: impl Into<String>) -> &mut Self {
        self.area_ids.insert(area.into());
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ConfigSource for MemoryConfig {
    fn kind_of(&self, pid: &str) -> Option<RecordKind> {
        if let Some(r) = self.records.get(pid) {
            return Some(r.kind());
        }
        if self.area_ids.contains(pid) {
            return Some(RecordKind::ConfigArea);
        }
        None
    }

    fn record(&self, pid: &str, kind: RecordKind) -> Option<&Record> {
        self.records.get(pid).filter(|r| r.kind() == kind)
    }

    fn members(&self, pid: &str) -> &[String] {
        match self.records.get(pid) {
            Some(Record::Network(n)) => &n.members,
            _ => &[],
        }
    }

    fn ids_of_kind(&self, kind: RecordKind) -> Vec<String> {
        self.order
            .iter()
            .filter(|pid| self.records[*pid].kind() == kind)
            .cloned()
            .collect()
    }

    fn area_of(&self, pid: &str) -> Option<&str> {
        self.areas.get(pid).map(String::as_str)
    }
}
