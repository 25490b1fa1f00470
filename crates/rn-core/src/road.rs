//! Road identity: the (road name, direction tag) pair that decides whether
//! two outer segments belong to the same directed road.

/// Road name plus direction tag of an outer segment.
///
/// Both components come from configuration records; a segment whose record
/// lacks either carries no `RoadRef` at all (`Option<RoadRef>` on the
/// segment), and the same-road test then answers `false`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoadRef {
    /// Road designation, e.g. `"A8"`.
    pub road: String,
    /// Direction tag along the road, e.g. `"east"`.
    pub direction: String,
}

impl RoadRef {
    pub fn new(road: impl Into<String>, direction: impl Into<String>) -> Self {
        Self { road: road.into(), direction: direction.into() }
    }
}

impl std::fmt::Display for RoadRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.road, self.direction)
    }
}

/// `true` iff both sides carry a road identity and the identities are equal.
///
/// Absence on either side means "unknown road", which never matches — an
/// unattributed segment ends up in the cross-road neighbor lists.
#[inline]
pub fn same_road(a: Option<&RoadRef>, b: Option<&RoadRef>) -> bool {
    matches!((a, b), (Some(x), Some(y)) if x == y)
}
