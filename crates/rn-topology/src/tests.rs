//! Unit tests for rn-topology.
//!
//! All tests run against hand-crafted in-memory configurations; no external
//! middleware is involved.

#[cfg(test)]
mod helpers {
    use rn_config::{
        DerivedPointRecord, InnerSegmentRecord, MemoryConfig, NetworkRecord, NodeRecord,
        OuterSegmentRecord, PointRecord, Record, SubSegmentRecord,
    };
    use rn_core::{NodeKind, PointKind};

    use crate::{build_topology, SegmentGraph};

    pub fn sub(length: u64, lanes: u8) -> Record {
        Record::SubSegment(SubSegmentRecord { length, lanes, slope: None })
    }

    pub fn node(kind: NodeKind) -> Record {
        Record::Node(NodeRecord { kind })
    }

    pub fn point(segment: &str, offset: u64, kind: PointKind) -> Record {
        Record::MeasurementPoint(PointRecord {
            segment: if segment.is_empty() { None } else { Some(segment.into()) },
            offset,
            kind,
        })
    }

    /// A small synthetic motorway:
    ///
    /// ```text
    ///                 node.ramp (ramp-junction)
    ///                     │ seg.ramp (no road identity, 250 m)
    ///                     ▼  iss.rb
    /// node.start ── seg.a ──▶ node.mid ── seg.b ──▶ node.end
    /// (terminus)   (A8/east      │(interchange)  (A8/east   (terminus)
    ///               500 m)       └─ iss.ab        700 m)
    /// ```
    ///
    /// `seg.a` and `seg.b` share road A8/east, so `iss.ab` chains them as a
    /// same-road link; `seg.ramp` carries no road identity, so `iss.rb`
    /// lands in the cross-road lists.  `seg.b` lives in a nested network.
    pub fn motorway_config() -> MemoryConfig {
        let mut cfg = MemoryConfig::new();

        cfg.insert("net.main", Record::Network(NetworkRecord {
            members: vec!["seg.a".into(), "net.sub".into()],
        }))
        .insert("net.sub", Record::Network(NetworkRecord {
            members: vec!["seg.b".into(), "seg.ramp".into()],
        }));

        cfg.insert("node.start", node(NodeKind::Terminus))
            .insert("node.mid", node(NodeKind::Interchange))
            .insert("node.end", node(NodeKind::Terminus))
            .insert("node.ramp", node(NodeKind::RampJunction));

        cfg.insert("sts.a1", sub(200, 2))
            .insert("sts.a2", sub(300, 3))
            .insert("sts.b1", sub(400, 2))
            .insert("sts.b2", sub(300, 2))
            .insert("sts.r1", sub(250, 1))
            .insert("sts.i1", sub(150, 2))
            .insert("sts.i2", sub(100, 1));

        cfg.insert("seg.a", Record::OuterSegment(OuterSegmentRecord {
            length: 500,
            sub_segments: vec!["sts.a1".into(), "sts.a2".into()],
            from_node: Some("node.start".into()),
            to_node: Some("node.mid".into()),
            road: Some("A8".into()),
            direction: Some("east".into()),
        }))
        .insert("seg.b", Record::OuterSegment(OuterSegmentRecord {
            length: 700,
            sub_segments: vec!["sts.b1".into(), "sts.b2".into()],
            from_node: Some("node.mid".into()),
            to_node: Some("node.end".into()),
            road: Some("A8".into()),
            direction: Some("east".into()),
        }))
        .insert("seg.ramp", Record::OuterSegment(OuterSegmentRecord {
            length: 250,
            sub_segments: vec!["sts.r1".into()],
            from_node: Some("node.ramp".into()),
            to_node: Some("node.mid".into()),
            road: None,
            direction: None,
        }));

        cfg.insert("iss.ab", Record::InnerSegment(InnerSegmentRecord {
            length: 150,
            sub_segments: vec!["sts.i1".into()],
            from_segment: Some("seg.a".into()),
            to_segment: Some("seg.b".into()),
        }))
        .insert("iss.rb", Record::InnerSegment(InnerSegmentRecord {
            length: 100,
            sub_segments: vec!["sts.i2".into()],
            from_segment: Some("seg.ramp".into()),
            to_segment: Some("seg.b".into()),
        }));

        cfg.insert_in_area("mq.a1", "kb.1", point("seg.a", 100, PointKind::MainCarriageway))
            .insert_in_area("mq.a2", "kb.1", point("seg.a", 450, PointKind::Exit))
            .insert_in_area("mq.b1", "kb.2", point("seg.b", 50, PointKind::MainCarriageway))
            .insert_in_area("mq.rb", "kb.2", point("iss.rb", 10, PointKind::Entry))
            .insert("mq.ghost", point("seg.ghost", 0, PointKind::Entry));

        cfg.insert("nba.a1", Record::DerivedPoint(DerivedPointRecord {
            source: "mq.a1".into(),
        }));

        cfg
    }

    pub fn motorway_graph() -> SegmentGraph {
        build_topology(&motorway_config(), "net.main", "").unwrap()
    }

    /// Pids of the sub-segments in a span-query result, in result order.
    pub fn pids(subs: &[&crate::SubSegment]) -> Vec<String> {
        subs.iter().map(|s| s.pid.clone()).collect()
    }
}

// ── Network resolution ────────────────────────────────────────────────────────

#[cfg(test)]
mod resolver {
    use rn_config::{MemoryConfig, NetworkRecord, OuterSegmentRecord, Record};
    use rn_core::NodeKind;

    use crate::resolve_outer_segments;

    #[test]
    fn flattens_nested_networks() {
        let cfg = super::helpers::motorway_config();
        let pids = resolve_outer_segments(&cfg, "net.main");
        assert_eq!(pids, vec!["seg.a".to_owned(), "seg.b".to_owned(), "seg.ramp".to_owned()]);
    }

    #[test]
    fn deduplicates_repeated_members() {
        let mut cfg = MemoryConfig::new();
        cfg.insert("net.a", Record::Network(NetworkRecord {
            members: vec!["seg.x".into(), "net.b".into()],
        }))
        .insert("net.b", Record::Network(NetworkRecord {
            members: vec!["seg.x".into()],
        }))
        .insert("seg.x", Record::OuterSegment(OuterSegmentRecord::default()));

        assert_eq!(resolve_outer_segments(&cfg, "net.a"), vec!["seg.x".to_owned()]);
    }

    #[test]
    fn circular_containers_terminate() {
        let mut cfg = MemoryConfig::new();
        cfg.insert("net.a", Record::Network(NetworkRecord {
            members: vec!["net.b".into()],
        }))
        .insert("net.b", Record::Network(NetworkRecord {
            members: vec!["net.a".into(), "seg.x".into()],
        }))
        .insert("seg.x", Record::OuterSegment(OuterSegmentRecord::default()));

        assert_eq!(resolve_outer_segments(&cfg, "net.a"), vec!["seg.x".to_owned()]);
    }

    #[test]
    fn unexpected_member_kinds_are_skipped() {
        let mut cfg = MemoryConfig::new();
        cfg.insert("net.a", Record::Network(NetworkRecord {
            members: vec!["node.k".into(), "ghost".into(), "seg.x".into()],
        }))
        .insert("node.k", super::helpers::node(NodeKind::Other))
        .insert("seg.x", Record::OuterSegment(OuterSegmentRecord::default()));

        assert_eq!(resolve_outer_segments(&cfg, "net.a"), vec!["seg.x".to_owned()]);
    }

    #[test]
    fn missing_network_is_empty() {
        let cfg = MemoryConfig::new();
        assert!(resolve_outer_segments(&cfg, "net.none").is_empty());
    }
}

// ── Builder / registry ────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use rn_config::{InnerSegmentRecord, MemoryConfig, NetworkRecord, OuterSegmentRecord, Record};

    use crate::{build_topology, TopologyBuilder, TopologyError};

    #[test]
    fn unknown_network_is_an_error() {
        let cfg = MemoryConfig::new();
        let err = build_topology(&cfg, "net.none", "").unwrap_err();
        assert!(matches!(err, TopologyError::UnknownNetwork(_)));
    }

    #[test]
    fn get_or_build_is_idempotent() {
        let cfg = super::helpers::motorway_config();
        let mut builder = TopologyBuilder::new(&cfg);

        let a1 = builder.outer_segment_id("seg.a").unwrap();
        let a2 = builder.outer_segment_id("seg.a").unwrap();
        assert_eq!(a1, a2);

        let n1 = builder.node_id("node.mid").unwrap();
        let n2 = builder.node_id("node.mid").unwrap();
        assert_eq!(n1, n2);
    }

    #[test]
    fn non_outer_identities_resolve_to_none() {
        let cfg = super::helpers::motorway_config();
        let mut builder = TopologyBuilder::new(&cfg);
        assert!(builder.outer_segment_id("node.mid").is_none());
        assert!(builder.outer_segment_id("ghost").is_none());
        assert!(builder.node_id("seg.a").is_none());
    }

    #[test]
    fn arena_counts() {
        let graph = super::helpers::motorway_graph();
        assert_eq!(graph.outer_count(), 3);
        assert_eq!(graph.inner_count(), 2);
        assert_eq!(graph.node_count(), 4);
    }

    #[test]
    fn sub_segment_offsets_partition_the_segment() {
        let graph = super::helpers::motorway_graph();

        for seg in graph.segments() {
            let mut expected = 0u64;
            for sub in seg.sub_segments() {
                assert_eq!(sub.offset, expected, "sub {} of {}", sub.pid, seg.pid);
                expected += sub.length;
            }
            assert_eq!(expected, seg.length, "length mismatch for {}", seg.pid);
        }
    }

    #[test]
    fn inner_without_any_outer_is_discarded() {
        let mut cfg = super::helpers::motorway_config();
        cfg.insert("iss.orphan", Record::InnerSegment(InnerSegmentRecord {
            length: 80,
            ..Default::default()
        }));

        let graph = build_topology(&cfg, "net.main", "").unwrap();
        assert!(graph.segment_by_pid("iss.orphan").is_none());
    }

    #[test]
    fn inner_reference_triggers_lazy_outer_build() {
        let mut cfg = MemoryConfig::new();
        cfg.insert("net.main", Record::Network(NetworkRecord {
            members: vec!["seg.a".into()],
        }))
        .insert("seg.a", Record::OuterSegment(OuterSegmentRecord {
            length: 500,
            ..Default::default()
        }))
        // seg.c is configured but not a member of any network.
        .insert("seg.c", Record::OuterSegment(OuterSegmentRecord {
            length: 300,
            ..Default::default()
        }))
        .insert("iss.ac", Record::InnerSegment(InnerSegmentRecord {
            length: 100,
            from_segment: Some("seg.a".into()),
            to_segment: Some("seg.c".into()),
            ..Default::default()
        }));

        let graph = build_topology(&cfg, "net.main", "").unwrap();
        assert!(graph.segment_by_pid("seg.c").is_some());
    }

    #[test]
    fn empty_records_degrade_to_defaults() {
        // seg.x resolves as an outer segment but its record carries nothing;
        // the build must still produce a queryable entity.
        let mut cfg = MemoryConfig::new();
        cfg.insert("net.main", Record::Network(NetworkRecord {
            members: vec!["seg.x".into()],
        }))
        .insert("seg.x", Record::OuterSegment(OuterSegmentRecord::default()));

        let graph = build_topology(&cfg, "net.main", "").unwrap();
        let seg = graph.segment_by_pid("seg.x").unwrap();
        assert_eq!(seg.length, 0);
        assert!(seg.road().is_none());
        assert!(seg.sub_segments().is_empty());
        assert!(!graph.starts_in_interchange_or_triangle(seg.id));
    }

    #[test]
    fn zero_length_segments_fail_validation() {
        let mut cfg = MemoryConfig::new();
        cfg.insert("net.main", Record::Network(NetworkRecord {
            members: vec!["seg.x".into()],
        }))
        .insert("seg.x", Record::OuterSegment(OuterSegmentRecord::default()));

        let graph = build_topology(&cfg, "net.main", "").unwrap();
        let findings = graph.validate();
        assert_eq!(findings.len(), 1);
        assert!(matches!(
            &findings[0],
            TopologyError::ZeroLengthSegment { pid } if pid == "seg.x"
        ));

        assert!(super::helpers::motorway_graph().validate().is_empty());
    }
}

// ── Node wiring ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod nodes {
    #[test]
    fn departing_and_arriving_registration() {
        let graph = super::helpers::motorway_graph();
        let mid = graph.node_by_pid("node.mid").unwrap();
        let a = graph.segment_by_pid("seg.a").unwrap().id;
        let b = graph.segment_by_pid("seg.b").unwrap().id;
        let ramp = graph.segment_by_pid("seg.ramp").unwrap().id;

        assert_eq!(mid.arriving(), [a, ramp]);
        assert_eq!(mid.departing(), [b]);
    }

    #[test]
    fn inner_containment_registered_once() {
        let graph = super::helpers::motorway_graph();
        let mid = graph.node_by_pid("node.mid").unwrap();
        let ab = graph.segment_by_pid("iss.ab").unwrap().id;
        let rb = graph.segment_by_pid("iss.rb").unwrap().id;

        // iss.ab touches node.mid from both sides but appears exactly once.
        assert_eq!(mid.inner(), [ab, rb]);
    }

    #[test]
    fn outer_segment_node_references() {
        let graph = super::helpers::motorway_graph();
        let a = graph.segment_by_pid("seg.a").unwrap();
        let outer = a.as_outer().unwrap();
        assert_eq!(outer.from_node, graph.node_by_pid("node.start").map(|n| n.id));
        assert_eq!(outer.to_node, graph.node_by_pid("node.mid").map(|n| n.id));
    }
}

// ── Segment linking ───────────────────────────────────────────────────────────

#[cfg(test)]
mod linking {
    #[test]
    fn same_road_chain_through_inner_segment() {
        let graph = super::helpers::motorway_graph();
        let a = graph.segment_by_pid("seg.a").unwrap();
        let b = graph.segment_by_pid("seg.b").unwrap();
        let ab = graph.segment_by_pid("iss.ab").unwrap();

        // seg.a ──iss.ab──▶ seg.b, all on A8/east.
        assert_eq!(a.successors_same_road(), [ab.id]);
        assert!(a.successors().is_empty());
        assert_eq!(b.predecessors_same_road(), [ab.id]);

        // The inner segment points back at its bounding outer segments.
        assert_eq!(ab.predecessors_same_road(), [a.id]);
        assert_eq!(ab.successors_same_road(), [b.id]);
    }

    #[test]
    fn cross_road_link_for_unattributed_ramp() {
        let graph = super::helpers::motorway_graph();
        let ramp = graph.segment_by_pid("seg.ramp").unwrap();
        let b = graph.segment_by_pid("seg.b").unwrap();
        let rb = graph.segment_by_pid("iss.rb").unwrap();

        // seg.ramp has no road identity, so the same-road test fails on both
        // sides and iss.rb lands in the plain lists.
        assert_eq!(ramp.successors(), [rb.id]);
        assert!(ramp.successors_same_road().is_empty());
        assert_eq!(b.predecessors(), [rb.id]);

        // The inner segment still records its bounding outer segments as
        // same-road neighbors of its own.
        assert_eq!(rb.predecessors_same_road(), [ramp.id]);
        assert_eq!(rb.successors_same_road(), [b.id]);
    }

    #[test]
    fn neighbor_lists_partition_per_direction() {
        let graph = super::helpers::motorway_graph();
        for seg in graph.segments() {
            for id in seg.predecessors() {
                assert!(!seg.predecessors_same_road().contains(id), "{}", seg.pid);
            }
            for id in seg.successors() {
                assert!(!seg.successors_same_road().contains(id), "{}", seg.pid);
            }
        }
    }

    #[test]
    fn inner_variant_links() {
        let graph = super::helpers::motorway_graph();
        let ab = graph.segment_by_pid("iss.ab").unwrap();
        let inner = ab.as_inner().unwrap();
        assert_eq!(inner.from_segment, graph.segment_by_pid("seg.a").map(|s| s.id));
        assert_eq!(inner.to_segment, graph.segment_by_pid("seg.b").map(|s| s.id));
        assert!(ab.road().is_none());
    }
}

// ── Node-kind predicates ──────────────────────────────────────────────────────

#[cfg(test)]
mod predicates {
    #[test]
    fn outer_segment_node_kinds() {
        let graph = super::helpers::motorway_graph();
        let a = graph.segment_by_pid("seg.a").unwrap().id;
        let b = graph.segment_by_pid("seg.b").unwrap().id;

        assert!(graph.starts_at_terminus(a));
        assert!(!graph.ends_at_terminus(a));
        assert!(graph.ends_in_interchange_or_triangle(a));
        assert!(graph.starts_in_interchange_or_triangle(b));
        assert!(graph.ends_at_terminus(b));
    }

    #[test]
    fn inner_segments_delegate_to_bounding_outers() {
        let graph = super::helpers::motorway_graph();
        let ab = graph.segment_by_pid("iss.ab").unwrap().id;

        // iss.ab sits inside node.mid (an interchange); begin and end answer
        // alike.
        assert!(graph.starts_in_interchange_or_triangle(ab));
        assert!(graph.ends_in_interchange_or_triangle(ab));
        assert!(!graph.starts_at_terminus(ab));
        assert!(!graph.ends_at_terminus(ab));
    }
}

// ── Cross-section index ───────────────────────────────────────────────────────

#[cfg(test)]
mod cross_sections {
    use rn_config::Record;
    use rn_core::PointKind;

    use crate::build_topology;

    #[test]
    fn points_sorted_by_offset() {
        let graph = super::helpers::motorway_graph();
        let a = graph.segment_by_pid("seg.a").unwrap();

        let offsets: Vec<u64> = a.points().iter().map(|p| p.offset).collect();
        assert_eq!(offsets, [100, 450]);
    }

    #[test]
    fn equal_offsets_keep_attach_order() {
        let mut cfg = super::helpers::motorway_config();
        cfg.insert("mq.t1", super::helpers::point("seg.b", 50, PointKind::Other))
            .insert("mq.t2", super::helpers::point("seg.b", 50, PointKind::Other));

        let graph = build_topology(&cfg, "net.main", "").unwrap();
        let pids: Vec<&str> = graph
            .points_of("seg.b")
            .unwrap()
            .iter()
            .map(|p| p.pid.as_str())
            .collect();
        // mq.b1 was attached first, the tied points follow in attach order.
        assert_eq!(pids, ["mq.b1", "mq.t1", "mq.t2"]);
    }

    #[test]
    fn unresolvable_points_are_dropped() {
        let graph = super::helpers::motorway_graph();
        let attached: usize = graph.segments().map(|s| s.points().len()).sum();
        // mq.ghost references seg.ghost and cannot be placed.
        assert_eq!(attached, 4);
    }

    #[test]
    fn area_restriction_limits_attachment() {
        let cfg = super::helpers::motorway_config();
        let graph = build_topology(&cfg, "net.main", "kb.1").unwrap();

        assert_eq!(graph.points_of("seg.a").unwrap().len(), 2);
        assert!(graph.points_of("seg.b").unwrap().is_empty());
        assert!(graph.points_of("iss.rb").unwrap().is_empty());
    }

    #[test]
    fn nearest_point_queries() {
        let graph = super::helpers::motorway_graph();
        let points = graph.points_of("seg.a").unwrap();

        assert_eq!(points.last_before(450).unwrap().pid, "mq.a1");
        assert_eq!(points.last_before(451).unwrap().pid, "mq.a2");
        assert!(points.last_before(100).is_none());
        assert_eq!(points.first_at_or_after(450).unwrap().pid, "mq.a2");
        assert_eq!(points.first_at_or_after(0).unwrap().pid, "mq.a1");
        assert!(points.first_at_or_after(451).is_none());
    }

    #[test]
    fn first_and_last() {
        let graph = super::helpers::motorway_graph();
        let points = graph.points_of("seg.a").unwrap();
        assert_eq!(points.first().unwrap().pid, "mq.a1");
        assert_eq!(points.last().unwrap().pid, "mq.a2");
        assert!(graph.points_of("seg.ramp").unwrap().first().is_none());
    }

    #[test]
    fn segment_classifiers_follow_point_kinds() {
        let graph = super::helpers::motorway_graph();
        let a = graph.segment_by_pid("seg.a").unwrap();
        let rb = graph.segment_by_pid("iss.rb").unwrap();
        let ramp = graph.segment_by_pid("seg.ramp").unwrap();

        assert!(a.is_main_carriageway());
        assert!(a.is_exit());
        assert!(!a.is_entry());
        assert!(rb.is_entry());
        assert!(!ramp.is_entry()); // no points attached at all
    }

    #[test]
    fn derived_point_lookups() {
        let graph = super::helpers::motorway_graph();
        assert_eq!(graph.derived_point_of("mq.a1"), Some("nba.a1"));
        assert_eq!(graph.point_of_derived("nba.a1"), Some("mq.a1"));
        assert_eq!(graph.derived_point_of("mq.b1"), None);
        assert_eq!(graph.point_of_derived("nba.none"), None);
    }

    #[test]
    fn derived_point_without_source_is_skipped() {
        let mut cfg = super::helpers::motorway_config();
        cfg.insert("nba.bad", Record::DerivedPoint(Default::default()));
        let graph = build_topology(&cfg, "net.main", "").unwrap();
        assert_eq!(graph.point_of_derived("nba.bad"), None);
    }
}

// ── Neighbor-derived queries ──────────────────────────────────────────────────

#[cfg(test)]
mod neighbor_queries {
    #[test]
    fn entering_segments_and_points() {
        let graph = super::helpers::motorway_graph();
        let b = graph.segment_by_pid("seg.b").unwrap().id;
        let rb = graph.segment_by_pid("iss.rb").unwrap().id;

        // iss.rb carries an entry point, iss.ab does not.
        assert_eq!(graph.entering_segments(b), [rb]);
        let points = graph.entering_points(b);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].pid, "mq.rb");
    }

    #[test]
    fn exiting_segments_empty_without_exit_points() {
        let graph = super::helpers::motorway_graph();
        let a = graph.segment_by_pid("seg.a").unwrap().id;
        // seg.a's only successor is iss.ab, which has no exit point.
        assert!(graph.exiting_segments(a).is_empty());
        assert!(graph.exiting_points(a).is_empty());
    }

    #[test]
    fn shortest_same_road_predecessor() {
        let graph = super::helpers::motorway_graph();
        let ab = graph.segment_by_pid("iss.ab").unwrap().id;
        let b = graph.segment_by_pid("seg.b").unwrap().id;
        let a = graph.segment_by_pid("seg.a").unwrap().id;

        assert_eq!(graph.shortest_same_road_predecessor(ab), Some(a));
        assert_eq!(graph.shortest_same_road_predecessor(b), Some(ab));
        assert_eq!(graph.shortest_same_road_predecessor(a), None);
    }

    #[test]
    fn all_sub_segments_outer_first() {
        let graph = super::helpers::motorway_graph();
        let pids: Vec<&str> = graph.all_sub_segments().iter().map(|s| s.pid.as_str()).collect();
        assert_eq!(
            pids,
            ["sts.a1", "sts.a2", "sts.b1", "sts.b2", "sts.r1", "sts.i1", "sts.i2"]
        );
    }
}

// ── Span queries ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod span {
    use rn_config::{InnerSegmentRecord, MemoryConfig, NetworkRecord, OuterSegmentRecord, Record};

    use crate::build_topology;

    #[test]
    fn window_inside_one_segment() {
        let graph = super::helpers::motorway_graph();
        let a = graph.segment_by_pid("seg.a").unwrap().id;

        // [150, 250) straddles the sts.a1/sts.a2 boundary at 200.
        let subs = graph.sub_segments_in_window(a, 150, 100);
        assert_eq!(super::helpers::pids(&subs), ["sts.a1", "sts.a2"]);
    }

    #[test]
    fn window_crossing_into_same_road_successor() {
        let graph = super::helpers::motorway_graph();
        let a = graph.segment_by_pid("seg.a").unwrap().id;

        // [450, 550) leaves seg.a (length 500) with 50 m remaining, which
        // lands on iss.ab's single sub-segment.
        let subs = graph.sub_segments_in_window(a, 450, 100);
        assert_eq!(super::helpers::pids(&subs), ["sts.a2", "sts.i1"]);
    }

    #[test]
    fn window_crossing_two_boundaries() {
        let graph = super::helpers::motorway_graph();
        let a = graph.segment_by_pid("seg.a").unwrap().id;

        // [450, 1100): 50 m of seg.a, all of iss.ab (150 m), 450 m into
        // seg.b — which covers sts.b1 and reaches 50 m into sts.b2.
        let subs = graph.sub_segments_in_window(a, 450, 650);
        assert_eq!(
            super::helpers::pids(&subs),
            ["sts.a2", "sts.i1", "sts.b1", "sts.b2"]
        );
    }

    #[test]
    fn cross_road_successors_are_not_followed() {
        let graph = super::helpers::motorway_graph();
        let ramp = graph.segment_by_pid("seg.ramp").unwrap().id;

        // seg.ramp's only successor (iss.rb) is a cross-road link; the
        // window past the ramp's end finds nothing further.
        let subs = graph.sub_segments_in_window(ramp, 200, 500);
        assert_eq!(super::helpers::pids(&subs), ["sts.r1"]);
    }

    #[test]
    fn zero_span_covers_at_most_the_containing_sub_segment() {
        let graph = super::helpers::motorway_graph();
        let a = graph.segment_by_pid("seg.a").unwrap().id;

        let subs = graph.sub_segments_in_window(a, 150, 0);
        assert_eq!(super::helpers::pids(&subs), ["sts.a1"]);
        // At an exact boundary a zero-width window covers nothing.
        let subs = graph.sub_segments_in_window(a, 200, 0);
        assert!(subs.is_empty());
    }

    #[test]
    fn growing_span_never_loses_results() {
        let graph = super::helpers::motorway_graph();
        let a = graph.segment_by_pid("seg.a").unwrap().id;

        let mut previous: Vec<String> = Vec::new();
        for span in [0, 10, 60, 360, 700, 1200] {
            let current = super::helpers::pids(&graph.sub_segments_in_window(a, 150, span));
            for pid in &previous {
                assert!(current.contains(pid), "span {span} lost {pid}");
            }
            previous = current;
        }
    }

    #[test]
    fn zero_length_cycle_terminates() {
        // A zero-length outer segment chained to itself through an inner
        // segment would recurse forever without the length guard.
        let mut cfg = MemoryConfig::new();
        cfg.insert("net.main", Record::Network(NetworkRecord {
            members: vec!["seg.z".into()],
        }))
        .insert("seg.z", Record::OuterSegment(OuterSegmentRecord {
            length: 0,
            road: Some("A0".into()),
            direction: Some("east".into()),
            ..Default::default()
        }))
        .insert("iss.z", Record::InnerSegment(InnerSegmentRecord {
            length: 0,
            from_segment: Some("seg.z".into()),
            to_segment: Some("seg.z".into()),
            ..Default::default()
        }));

        let graph = build_topology(&cfg, "net.main", "").unwrap();
        let z = graph.segment_by_pid("seg.z").unwrap().id;
        assert!(graph.sub_segments_in_window(z, 0, 100).is_empty());
        assert!(!graph.validate().is_empty());
    }
}

// ── End-to-end scenario ───────────────────────────────────────────────────────

#[cfg(test)]
mod scenario {
    use rn_config::{
        InnerSegmentRecord, MemoryConfig, NetworkRecord, NodeRecord, OuterSegmentRecord, Record,
    };
    use rn_core::NodeKind;

    use crate::{build_topology, resolve_outer_segments};

    /// Container C has members [OuterA, NetX]; NetX has [OuterB].  OuterA's
    /// end node equals OuterB's start node and both run R1/north; an inner
    /// segment from OuterA to OuterB must land in OuterA's same-road
    /// successors, OuterB's same-road predecessors, and the shared node's
    /// inner list exactly once.
    fn config() -> MemoryConfig {
        let mut cfg = MemoryConfig::new();
        cfg.insert("c", Record::Network(NetworkRecord {
            members: vec!["outer.a".into(), "net.x".into()],
        }))
        .insert("net.x", Record::Network(NetworkRecord {
            members: vec!["outer.b".into()],
        }))
        .insert("node.shared", Record::Node(NodeRecord { kind: NodeKind::RampJunction }))
        .insert("outer.a", Record::OuterSegment(OuterSegmentRecord {
            length: 1000,
            to_node: Some("node.shared".into()),
            road: Some("R1".into()),
            direction: Some("north".into()),
            ..Default::default()
        }))
        .insert("outer.b", Record::OuterSegment(OuterSegmentRecord {
            length: 800,
            from_node: Some("node.shared".into()),
            road: Some("R1".into()),
            direction: Some("north".into()),
            ..Default::default()
        }))
        .insert("iss.link", Record::InnerSegment(InnerSegmentRecord {
            length: 50,
            from_segment: Some("outer.a".into()),
            to_segment: Some("outer.b".into()),
            ..Default::default()
        }));
        cfg
    }

    #[test]
    fn resolution_covers_nested_members() {
        let cfg = config();
        assert_eq!(
            resolve_outer_segments(&cfg, "c"),
            vec!["outer.a".to_owned(), "outer.b".to_owned()]
        );
    }

    #[test]
    fn linking_matches_expectations() {
        let graph = build_topology(&config(), "c", "").unwrap();
        let a = graph.segment_by_pid("outer.a").unwrap();
        let b = graph.segment_by_pid("outer.b").unwrap();
        let link = graph.segment_by_pid("iss.link").unwrap();

        assert_eq!(a.successors_same_road(), [link.id]);
        assert_eq!(b.predecessors_same_road(), [link.id]);

        let shared = graph.node_by_pid("node.shared").unwrap();
        assert_eq!(shared.inner(), [link.id]);
    }
}
