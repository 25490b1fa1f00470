//! Measurement points and the per-segment cross-section index.
//!
//! Each segment owns one [`CrossSectionIndex`]: its measurement points kept
//! sorted ascending by offset.  The sort is *stable on ties* — a point
//! attached later with an equal offset lands after the points already there,
//! and ties are never reordered afterwards.

use rn_core::PointKind;

// ── MeasurementPoint ──────────────────────────────────────────────────────────

/// A measurement point (cross-section) placed at an offset on its owning
/// segment.  The owning segment is decided once, at attach time, and never
/// changes; secondary/derived identities live in a lookup table on the
/// graph, not here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MeasurementPoint {
    /// Stable configuration identity.
    pub pid: String,
    /// Metres from the start of the owning segment.
    pub offset: u64,
    pub kind: PointKind,
}

impl MeasurementPoint {
    pub fn is_entry(&self) -> bool {
        self.kind == PointKind::Entry
    }

    pub fn is_exit(&self) -> bool {
        self.kind == PointKind::Exit
    }

    pub fn is_main_carriageway(&self) -> bool {
        self.kind == PointKind::MainCarriageway
    }

    pub fn is_aux_carriageway(&self) -> bool {
        self.kind == PointKind::AuxCarriageway
    }
}

impl std::fmt::Display for MeasurementPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} @ {})", self.pid, self.kind, self.offset)
    }
}

// ── CrossSectionIndex ─────────────────────────────────────────────────────────

/// Measurement points of one segment, sorted ascending by offset.
///
/// Expected to stay small (a handful of points per segment), so the nearest-
/// point queries are plain linear scans.
#[derive(Debug, Default)]
pub struct CrossSectionIndex {
    points: Vec<MeasurementPoint>,
}

impl CrossSectionIndex {
    /// Insert `point` keeping the list non-decreasing by offset.  Equal
    /// offsets are appended after the existing entries (stable ties).
    pub(crate) fn attach(&mut self, point: MeasurementPoint) {
        let at = self.points.partition_point(|p| p.offset <= point.offset);
        self.points.insert(at, point);
    }

    pub fn as_slice(&self) -> &[MeasurementPoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MeasurementPoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First point in driving direction.
    pub fn first(&self) -> Option<&MeasurementPoint> {
        self.points.first()
    }

    /// Last point in driving direction.
    pub fn last(&self) -> Option<&MeasurementPoint> {
        self.points.last()
    }

    // ── Nearest-point queries ─────────────────────────────────────────────

    /// The point with the greatest offset strictly less than `offset`.
    /// On equal offsets the latest-attached such point wins.
    pub fn last_before(&self, offset: u64) -> Option<&MeasurementPoint> {
        self.points.iter().take_while(|p| p.offset < offset).last()
    }

    /// The point with the least offset `>= offset`.
    pub fn first_at_or_after(&self, offset: u64) -> Option<&MeasurementPoint> {
        self.points.iter().find(|p| p.offset >= offset)
    }

    // ── Kind filters ──────────────────────────────────────────────────────

    /// All points of the given kind, in offset order.
    pub fn of_kind(&self, kind: PointKind) -> impl Iterator<Item = &MeasurementPoint> {
        self.points.iter().filter(move |p| p.kind == kind)
    }

    /// `true` iff at least one attached point has the given kind.
    pub fn has_kind(&self, kind: PointKind) -> bool {
        self.points.iter().any(|p| p.kind == kind)
    }
}

impl<'a> IntoIterator for &'a CrossSectionIndex {
    type Item = &'a MeasurementPoint;
    type IntoIter = std::slice::Iter<'a, MeasurementPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
