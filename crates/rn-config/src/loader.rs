//! CSV measurement-point loader.
//!
//! Detector placements usually arrive as flat exports, one row per point,
//! separate from the structural network configuration.  This loader turns
//! such an export into `MeasurementPoint` records in a [`MemoryConfig`].
//!
//! # CSV format
//!
//! ```csv
//! pid,segment,offset,kind,area
//! mq.a8.e.01,seg.a8.e.1,250,main-carriageway,kb.south
//! mq.a8.e.02,seg.a8.e.1,900,exit,kb.south
//! mq.ramp.03,,0,entry,
//! ```
//!
//! | Column    | Meaning                                                    |
//! |-----------|------------------------------------------------------------|
//! | `pid`     | stable identity of the point                               |
//! | `segment` | pid of the segment the point lies on; may be empty         |
//! | `offset`  | metres from the segment start                              |
//! | `kind`    | point role tag; unknown tags decode to `other`             |
//! | `area`    | configuration area; empty = none                           |
//!
//! A row with an empty `segment` still loads — the builder drops such points
//! later, when the reference fails to resolve, with a log line.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use rn_core::PointKind;

use crate::memory::MemoryConfig;
use crate::record::{PointRecord, Record};
use crate::{ConfigError, ConfigResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct PointRow {
    pid:     String,
    segment: String,
    offset:  u64,
    kind:    String,
    area:    String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load measurement-point records from a CSV file into `config`.
///
/// Returns the number of rows loaded.
pub fn load_points_csv(path: &Path, config: &mut MemoryConfig) -> ConfigResult<usize> {
    let file = std::fs::File::open(path).map_err(ConfigError::Io)?;
    load_points_reader(file, config)
}

/// Like [`load_points_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from network
/// streams.
pub fn load_points_reader<R: Read>(
    reader: R,
    config: &mut MemoryConfig,
) -> ConfigResult<usize> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut count = 0;

    for result in csv_reader.deserialize::<PointRow>() {
        let row = result.map_err(|e| ConfigError::Parse(e.to_string()))?;

        let record = PointRecord {
            segment: non_empty(row.segment),
            offset:  row.offset,
            kind:    PointKind::from_name(&row.kind),
        };

        match non_empty(row.area) {
            Some(area) => config.insert_in_area(row.pid, area, Record::MeasurementPoint(record)),
            None => config.insert(row.pid, Record::MeasurementPoint(record)),
        };
        count += 1;
    }

    Ok(count)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn non_empty(s: String) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
