//! Unit tests for rn-core primitives.

#[cfg(test)]
mod ids {
    use crate::{NodeId, SegmentId};

    #[test]
    fn index_roundtrip() {
        let id = SegmentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(SegmentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(SegmentId(0) < SegmentId(1));
        assert!(NodeId(100) > NodeId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(NodeId::INVALID.0, u32::MAX);
        assert_eq!(SegmentId::INVALID.0, u32::MAX);
        assert_eq!(NodeId::default(), NodeId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
    }
}

#[cfg(test)]
mod kinds {
    use crate::{NodeKind, PointKind};

    #[test]
    fn node_kind_roundtrip() {
        for kind in [
            NodeKind::Interchange,
            NodeKind::Triangle,
            NodeKind::Terminus,
            NodeKind::RampJunction,
            NodeKind::Other,
        ] {
            assert_eq!(NodeKind::from_name(kind.as_str()), kind);
        }
    }

    #[test]
    fn unknown_tags_degrade_to_other() {
        assert_eq!(NodeKind::from_name("Autobahnkreuz"), NodeKind::Other);
        assert_eq!(NodeKind::from_name(""), NodeKind::Other);
        assert_eq!(PointKind::from_name("loop-detector"), PointKind::Other);
    }

    #[test]
    fn tags_are_trimmed() {
        assert_eq!(NodeKind::from_name(" interchange "), NodeKind::Interchange);
        assert_eq!(PointKind::from_name("exit\n"), PointKind::Exit);
    }

    #[test]
    fn display() {
        assert_eq!(NodeKind::RampJunction.to_string(), "ramp-junction");
        assert_eq!(PointKind::MainCarriageway.to_string(), "main-carriageway");
    }
}

#[cfg(test)]
mod road {
    use crate::{same_road, RoadRef};

    #[test]
    fn equal_identity_matches() {
        let a = RoadRef::new("A8", "east");
        let b = RoadRef::new("A8", "east");
        assert!(same_road(Some(&a), Some(&b)));
    }

    #[test]
    fn direction_must_match() {
        let a = RoadRef::new("A8", "east");
        let b = RoadRef::new("A8", "west");
        assert!(!same_road(Some(&a), Some(&b)));
    }

    #[test]
    fn road_must_match() {
        let a = RoadRef::new("A8", "east");
        let b = RoadRef::new("A5", "east");
        assert!(!same_road(Some(&a), Some(&b)));
    }

    #[test]
    fn absent_side_never_matches() {
        let a = RoadRef::new("A8", "east");
        assert!(!same_road(Some(&a), None));
        assert!(!same_road(None, Some(&a)));
        assert!(!same_road(None, None));
    }

    #[test]
    fn display() {
        assert_eq!(RoadRef::new("A8", "east").to_string(), "A8/east");
    }
}
