//! Kind tags for topology nodes and measurement points.
//!
//! Both enums carry an `Other` catch-all so that records with missing or
//! unrecognized tags still decode to a usable entity (the build path degrades
//! and continues rather than aborting on one bad record).

/// The junction type of a topology node.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum NodeKind {
    /// Motorway interchange (two highways crossing).
    Interchange,
    /// Motorway triangle (one highway merging into another).
    Triangle,
    /// Start or end of a highway.
    Terminus,
    /// Junction where an entry/exit ramp meets the carriageway.
    RampJunction,
    /// Any other junction, and the fallback for missing node records.
    #[default]
    Other,
}

impl NodeKind {
    /// Parse the tag used in configuration records.  Unknown tags map to
    /// `Other` so a misspelled record degrades instead of failing the build.
    pub fn from_name(name: &str) -> NodeKind {
        match name.trim() {
            "interchange"   => NodeKind::Interchange,
            "triangle"      => NodeKind::Triangle,
            "terminus"      => NodeKind::Terminus,
            "ramp-junction" => NodeKind::RampJunction,
            _               => NodeKind::Other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Interchange  => "interchange",
            NodeKind::Triangle     => "triangle",
            NodeKind::Terminus     => "terminus",
            NodeKind::RampJunction => "ramp-junction",
            NodeKind::Other        => "other",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The role of a measurement point (cross-section) on its segment.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum PointKind {
    /// Entry ramp detector.
    Entry,
    /// Exit ramp detector.
    Exit,
    /// Main carriageway detector.
    MainCarriageway,
    /// Auxiliary (parallel) carriageway detector.
    AuxCarriageway,
    /// Any other detector role, and the fallback for missing tags.
    #[default]
    Other,
}

impl PointKind {
    /// Parse the tag used in configuration records; unknown tags map to `Other`.
    pub fn from_name(name: &str) -> PointKind {
        match name.trim() {
            "entry"            => PointKind::Entry,
            "exit"             => PointKind::Exit,
            "main-carriageway" => PointKind::MainCarriageway,
            "aux-carriageway"  => PointKind::AuxCarriageway,
            _                  => PointKind::Other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PointKind::Entry           => "entry",
            PointKind::Exit            => "exit",
            PointKind::MainCarriageway => "main-carriageway",
            PointKind::AuxCarriageway  => "aux-carriageway",
            PointKind::Other           => "other",
        }
    }
}

impl std::fmt::Display for PointKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
