//! Phase 2 tests: swing arithmetic and topology generators.

use swing_topology::topology::{
    distance, honeycomb, rec_torus, supertorus, target, Topology, TopologyKind,
};
use swing_topology::types::{TopoError, MAX_STEP};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ==================== Swing Arithmetic ====================

#[test]
fn test_distance_sequence() {
    let got: Vec<i64> = (0..7).map(|s| distance(s).unwrap()).collect();
    assert_eq!(got, vec![1, -1, 3, -5, 11, -21, 43]);
}

#[test]
fn test_distance_is_partial_sum_of_powers() {
    let mut sum: i128 = 0;
    for step in 0..=MAX_STEP {
        sum += (-2i128).pow(step);
        assert_eq!(i128::from(distance(step).unwrap()), sum, "step {}", step);
    }
}

#[test]
fn test_distance_out_of_range() {
    match distance(MAX_STEP + 1) {
        Err(TopoError::StepOutOfRange { step, max }) => {
            assert_eq!(step, MAX_STEP + 1);
            assert_eq!(max, MAX_STEP);
        }
        other => panic!("Expected StepOutOfRange, got {:?}", other),
    }
}

#[test]
fn test_target_in_range() {
    for n in 1..20 {
        for u in 0..n {
            for step in 0..8 {
                let t = target(u, step, n).unwrap();
                assert!(t < n, "target({}, {}, {}) = {}", u, step, n, t);
            }
        }
    }
}

#[test]
fn test_target_pairs_are_mutual() {
    let n = 16;
    for step in 0..4 {
        for u in 0..n {
            let t = target(u, step, n).unwrap();
            assert_eq!(target(t, step, n).unwrap(), u);
        }
    }
}

#[test]
fn test_target_known_values() {
    assert_eq!(target(0, 0, 8).unwrap(), 1);
    assert_eq!(target(1, 0, 8).unwrap(), 0);
    assert_eq!(target(0, 1, 8).unwrap(), 7);
    assert_eq!(target(3, 2, 8).unwrap(), 0);
}

#[test]
fn test_target_rejects_empty_ring() {
    assert!(matches!(
        target(0, 0, 0),
        Err(TopoError::InvalidArgument { name: "n", .. })
    ));
}

// ==================== Supertorus ====================

#[test]
fn test_supertorus_single_step() {
    init_logging();
    let g = supertorus(8, 1).unwrap();
    assert_eq!(g.node_count(), 8);
    assert_eq!(g.edges(), &[(0, 1), (2, 3), (4, 5), (6, 7)]);
    assert!(g.all_queues_empty());
}

#[test]
fn test_supertorus_two_steps_is_ring() {
    let g = supertorus(8, 2).unwrap();
    assert_eq!(g.edge_count(), 8);
    for u in 0..8 {
        assert_eq!(g.degree(&u), 2);
        assert!(g.contains_edge(&u, &((u + 1) % 8)));
    }
}

#[test]
fn test_supertorus_links_every_swing_pair() {
    let (n, k) = (16, 4);
    let g = supertorus(n, k).unwrap();
    for step in 0..k {
        for u in 0..n {
            let t = target(u, step, n).unwrap();
            assert!(g.contains_edge(&u, &t), "missing {}-{} at step {}", u, t, step);
        }
    }
    assert_eq!(g.edge_count(), k as usize * n / 2);
    assert_eq!(g.summary().max_degree, k as usize);
}

#[test]
fn test_supertorus_zero_steps() {
    let g = supertorus(5, 0).unwrap();
    assert_eq!(g.node_count(), 5);
    assert_eq!(g.edge_count(), 0);
    assert_eq!(g.shortest_queue(), None);
}

#[test]
fn test_supertorus_rejects_empty_ring() {
    assert!(supertorus(0, 2).is_err());
}

// ==================== Grid Tori ====================

#[test]
fn test_rec_torus_2x2() {
    let g = rec_torus(2, 2).unwrap();
    assert_eq!(g.node_count(), 4);
    assert_eq!(g.edge_count(), 4);
    assert_eq!(g.longest_queue(), 0);
    assert_eq!(g.shortest_queue(), Some(0));
}

#[test]
fn test_rec_torus_is_4_regular() {
    init_logging();
    let g = rec_torus(4, 5).unwrap();
    assert_eq!(g.node_count(), 20);
    assert_eq!(g.edge_count(), 40);
    for node in g.nodes() {
        assert_eq!(g.degree(node), 4);
    }
    assert!(g.contains_edge(&(0, 0), &(3, 0)));
    assert!(g.contains_edge(&(0, 0), &(0, 4)));
}

#[test]
fn test_honeycomb_2x2() {
    let g = honeycomb(2, 2).unwrap();
    assert_eq!(g.node_count(), 4);
    assert_eq!(g.edge_count(), 4);
    // On a 2x2 grid both horizontal neighbors coincide.
    for node in g.nodes() {
        assert_eq!(g.neighbors(node).unwrap().len(), 2);
    }
}

#[test]
fn test_honeycomb_is_3_regular() {
    let g = honeycomb(4, 4).unwrap();
    assert_eq!(g.node_count(), 16);
    assert_eq!(g.edge_count(), 24);
    for node in g.nodes() {
        assert_eq!(g.degree(node), 3);
    }
    assert!(g.contains_edge(&(0, 0), &(0, 1)));
    assert!(!g.contains_edge(&(0, 1), &(0, 2)));
    assert!(g.contains_edge(&(1, 0), &(1, 3)));
}

#[test]
fn test_grids_reject_zero_dimensions() {
    assert!(matches!(
        honeycomb(0, 3),
        Err(TopoError::InvalidArgument { name: "b", .. })
    ));
    assert!(matches!(
        rec_torus(3, 0),
        Err(TopoError::InvalidArgument { name: "h", .. })
    ));
}

#[test]
fn test_generators_are_deterministic() {
    let a = honeycomb(6, 4).unwrap();
    let b = honeycomb(6, 4).unwrap();
    assert_eq!(a.nodes(), b.nodes());
    assert_eq!(a.edges(), b.edges());

    let a = supertorus(12, 3).unwrap();
    let b = supertorus(12, 3).unwrap();
    assert_eq!(a.edges(), b.edges());
}

#[test]
fn test_generated_graphs_have_empty_queues() {
    assert!(supertorus(10, 3).unwrap().all_queues_empty());
    assert!(honeycomb(3, 4).unwrap().all_queues_empty());
    assert!(rec_torus(3, 3).unwrap().all_queues_empty());
}

// ==================== Topology Selector ====================

#[test]
fn test_topology_kind_from_name() {
    assert_eq!(TopologyKind::from_name("supertorus"), Some(TopologyKind::Supertorus));
    assert_eq!(TopologyKind::from_name("Honeycomb"), Some(TopologyKind::Honeycomb));
    assert_eq!(TopologyKind::from_name("rec-torus"), Some(TopologyKind::RecTorus));
    assert_eq!(TopologyKind::from_name("mesh"), None);
}

#[test]
fn test_topology_summary() {
    let topology = TopologyKind::Honeycomb.with_dimensions(4, 4).unwrap();
    assert_eq!(topology, Topology::Honeycomb { b: 4, h: 4 });
    assert_eq!(topology.to_string(), "honeycomb(4, 4)");

    let summary = topology.summary().unwrap();
    assert_eq!(summary.nodes, 16);
    assert_eq!(summary.edges, 24);
    assert_eq!((summary.min_degree, summary.max_degree), (3, 3));
    assert_eq!(summary.queues, 48);
}

#[test]
fn test_topology_json_export() {
    let json = Topology::Supertorus { n: 4, k: 1 }.to_json(false).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["topology"], "supertorus(4, 1)");
    assert_eq!(value["nodes"], serde_json::json!([0, 1, 2, 3]));
    assert_eq!(value["edges"], serde_json::json!([[0, 1], [2, 3]]));

    let json = Topology::RecTorus { b: 2, h: 1 }.to_json(true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    // A single row wraps onto itself, leaving one self-loop per column.
    assert_eq!(
        value["edges"],
        serde_json::json!([[[0, 0], [1, 0]], [[0, 0], [0, 0]], [[1, 0], [1, 0]]])
    );
}
