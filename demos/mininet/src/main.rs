//! mininet — smallest runnable example for the roadnet topology model.
//!
//! Builds a synthetic stretch of the A9/north carriageway from an in-memory
//! configuration, attaches detector cross-sections from an inline CSV, and
//! walks through the query surface: counts, neighbor chains, nearest-point
//! lookups, and a span query that crosses segment boundaries.
//!
//! Run with `RUST_LOG=warn cargo run -p mininet` to see the degrade-and-
//! continue diagnostics for the intentionally broken rows below.

mod network;

use std::io::Cursor;

use anyhow::Result;

use rn_config::load_points_reader;
use rn_topology::build_topology;

use network::build_config;

// ── Detector export ───────────────────────────────────────────────────────────

// One deliberately unplaceable row (mq.lost) exercises the drop path.
const POINTS_CSV: &str = "\
pid,segment,offset,kind,area
mq.n1.1,seg.n1,400,main-carriageway,kb.north
mq.n1.2,seg.n1,1850,exit,kb.north
mq.n2.1,seg.n2,1200,main-carriageway,kb.north
mq.n2.2,seg.n2,3300,aux-carriageway,kb.north
mq.n3.1,seg.n3,700,main-carriageway,kb.south
mq.r3.1,iss.r3,60,entry,kb.south
mq.lost,seg.gone,10,entry,kb.south
";

fn main() -> Result<()> {
    env_logger::init();

    // ── Build ─────────────────────────────────────────────────────────────
    let mut config = build_config();
    let loaded = load_points_reader(Cursor::new(POINTS_CSV), &mut config)?;
    println!("loaded {loaded} measurement-point records");

    let graph = build_topology(&config, "net.a9", "")?;
    println!(
        "built topology: {} outer / {} inner segments, {} nodes",
        graph.outer_count(),
        graph.inner_count(),
        graph.node_count()
    );
    for finding in graph.validate() {
        println!("validation: {finding}");
    }

    // ── Per-segment overview ──────────────────────────────────────────────
    for seg in graph.segments() {
        println!("\n{seg}  ({} m, {} sub-segments)", seg.length, seg.sub_segments().len());
        for point in seg.points() {
            println!("  point {point}");
        }
        let same_road: Vec<String> = seg
            .successors_same_road()
            .iter()
            .map(|&s| graph.segment(s).pid.clone())
            .collect();
        if !same_road.is_empty() {
            println!("  same-road successors: {}", same_road.join(", "));
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────
    let n1 = graph.segment_by_pid("seg.n1").expect("seg.n1 built");
    let n3 = graph.segment_by_pid("seg.n3").expect("seg.n3 built");

    println!("\nseg.n1 starts at terminus: {}", graph.starts_at_terminus(n1.id));
    println!("seg.n3 entries: {:?}",
        graph.entering_points(n3.id).iter().map(|p| p.pid.as_str()).collect::<Vec<_>>());

    if let Some(point) = n1.points().last_before(1_900) {
        println!("last detector before km 1.9 on seg.n1: {point}");
    }

    // A 2 km window starting 1.5 km into seg.n1 runs across iss.12 into
    // seg.n2.
    let window = graph.sub_segments_in_window(n1.id, 1_500, 2_000);
    println!("sub-segments in [1500, 3500) from seg.n1:");
    for sub in window {
        println!("  {} (offset {}, {} m, {} lanes)", sub.pid, sub.offset, sub.length, sub.lanes);
    }

    Ok(())
}
