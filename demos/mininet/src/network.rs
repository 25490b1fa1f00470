//! Synthetic network configuration for the mininet demo.
//!
//! Three outer segments of the A9/north carriageway chained through two
//! junctions, plus an entry ramp joining at the second junction:
//!
//! ```text
//! node.nbg ── seg.n1 ──▶ node.x9 ── seg.n2 ──▶ node.ac ── seg.n3 ──▶ node.muc
//! (terminus)  (2.0 km)  (triangle) (3.5 km)     │(ramp     (1.5 km)  (terminus)
//!                │ iss.12                       │ junction)
//!                └──────────────────────────────┴─ iss.23, iss.r3
//!                                       seg.ramp (0.4 km) ──▲
//! ```

use rn_config::{
    InnerSegmentRecord, MemoryConfig, NetworkRecord, NodeRecord, OuterSegmentRecord, Record,
    SubSegmentRecord,
};
use rn_core::NodeKind;

fn sub(length: u64, lanes: u8, slope: Option<&str>) -> Record {
    Record::SubSegment(SubSegmentRecord {
        length,
        lanes,
        slope: slope.map(str::to_owned),
    })
}

fn node(kind: NodeKind) -> Record {
    Record::Node(NodeRecord { kind })
}

fn outer(
    length: u64,
    subs: &[&str],
    from: &str,
    to: &str,
    road: Option<(&str, &str)>,
) -> Record {
    Record::OuterSegment(OuterSegmentRecord {
        length,
        sub_segments: subs.iter().map(|s| s.to_string()).collect(),
        from_node: Some(from.into()),
        to_node: Some(to.into()),
        road: road.map(|(r, _)| r.into()),
        direction: road.map(|(_, d)| d.into()),
    })
}

fn inner(length: u64, subs: &[&str], from: Option<&str>, to: Option<&str>) -> Record {
    Record::InnerSegment(InnerSegmentRecord {
        length,
        sub_segments: subs.iter().map(|s| s.to_string()).collect(),
        from_segment: from.map(str::to_owned),
        to_segment: to.map(str::to_owned),
    })
}

/// Build the demo configuration.  Measurement points are loaded separately
/// from the inline CSV in `main.rs`.
pub fn build_config() -> MemoryConfig {
    let mut cfg = MemoryConfig::new();

    // The network tree: the main container nests the southern half.
    cfg.insert("net.a9", Record::Network(NetworkRecord {
        members: vec!["seg.n1".into(), "seg.n2".into(), "net.a9.south".into()],
    }))
    .insert("net.a9.south", Record::Network(NetworkRecord {
        members: vec!["seg.n3".into(), "seg.ramp".into()],
    }));

    cfg.insert("node.nbg", node(NodeKind::Terminus))
        .insert("node.x9", node(NodeKind::Triangle))
        .insert("node.ac", node(NodeKind::RampJunction))
        .insert("node.muc", node(NodeKind::Terminus))
        .insert("node.feeder", node(NodeKind::Other));

    cfg.insert("sts.n1a", sub(1_200, 3, None))
        .insert("sts.n1b", sub(800, 2, Some("-2%")))
        .insert("sts.n2a", sub(3_500, 2, None))
        .insert("sts.n3a", sub(900, 2, Some("+4%")))
        .insert("sts.n3b", sub(600, 3, None))
        .insert("sts.ra", sub(400, 1, None))
        .insert("sts.i12", sub(250, 2, None))
        .insert("sts.i23", sub(180, 2, None))
        .insert("sts.ir3", sub(120, 1, None));

    cfg.insert(
        "seg.n1",
        outer(2_000, &["sts.n1a", "sts.n1b"], "node.nbg", "node.x9", Some(("A9", "north"))),
    )
    .insert(
        "seg.n2",
        outer(3_500, &["sts.n2a"], "node.x9", "node.ac", Some(("A9", "north"))),
    )
    .insert(
        "seg.n3",
        outer(1_500, &["sts.n3a", "sts.n3b"], "node.ac", "node.muc", Some(("A9", "north"))),
    )
    .insert(
        "seg.ramp",
        outer(400, &["sts.ra"], "node.feeder", "node.ac", None),
    );

    cfg.insert("iss.12", inner(250, &["sts.i12"], Some("seg.n1"), Some("seg.n2")))
        .insert("iss.23", inner(180, &["sts.i23"], Some("seg.n2"), Some("seg.n3")))
        .insert("iss.r3", inner(120, &["sts.ir3"], Some("seg.ramp"), Some("seg.n3")));

    cfg
}
