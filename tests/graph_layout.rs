// tests/graph_layout.rs

use social_dash::{
    api::types::{Network, NetworkEdge, NetworkNode},
    graph::ForceGraph,
};

fn net(ids: &[&str], edges: &[(&str, &str)]) -> Network {
    Network {
        nodes: ids.iter().map(|id| NetworkNode { id: id.to_string() }).collect(),
        edges: edges
            .iter()
            .map(|(s, t)| NetworkEdge { source: s.to_string(), target: t.to_string(), weight: 1.0 })
            .collect(),
    }
}

#[test]
fn bad_edges_and_duplicate_nodes_are_dropped() {
    let g = ForceGraph::from_network(&net(
        &["a", "b", "a", "c"],
        &[("a", "b"), ("a", "zzz"), ("c", "c"), ("b", "c")],
    ));

    assert_eq!(g.nodes.len(), 3);
    assert_eq!(g.links.len(), 2);
    assert_eq!(g.nodes[1].degree, 2);
}

#[test]
fn layout_is_deterministic() {
    let n = net(&["a", "b", "c", "d"], &[("a", "b"), ("b", "c"), ("c", "d"), ("d", "a")]);
    let mut g1 = ForceGraph::from_network(&n);
    let mut g2 = ForceGraph::from_network(&n);
    g1.step_n(50);
    g2.step_n(50);
    assert_eq!(g1, g2);
}

#[test]
fn layout_cools_and_settles() {
    let mut g = ForceGraph::from_network(&net(&["a", "b", "c"], &[("a", "b"), ("b", "c")]));
    assert!(!g.is_settled());

    let mut ticks = 0;
    while g.step() {
        ticks += 1;
        assert!(ticks < 10_000, "layout never settled");
    }
    assert!(g.is_settled());
    assert!(!g.step());

    g.reheat();
    assert!(!g.is_settled());
}

#[test]
fn linked_nodes_end_near_link_distance() {
    let mut g = ForceGraph::from_network(&net(&["a", "b"], &[("a", "b")]));
    while g.step() {}
    let (a, b) = (g.nodes[0].pos, g.nodes[1].pos);
    let d = ((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2)).sqrt();
    assert!(d > 10.0 && d < 80.0, "distance {d}");
}

#[test]
fn positions_stay_finite_and_centered() {
    let ids: Vec<String> = (0..40).map(|i| format!("w{i}")).collect();
    let id_refs: Vec<&str> = ids.iter().map(String::as_str).collect();
    let edges: Vec<(&str, &str)> = id_refs.windows(2).map(|w| (w[0], w[1])).collect();

    let mut g = ForceGraph::from_network(&net(&id_refs, &edges));
    g.step_n(300);

    assert!(g.nodes.iter().all(|n| n.pos[0].is_finite() && n.pos[1].is_finite()));
    let (cx, cy) = g
        .nodes
        .iter()
        .fold((0.0f32, 0.0f32), |(x, y), n| (x + n.pos[0], y + n.pos[1]));
    assert!((cx / 40.0).abs() < 1e-2 && (cy / 40.0).abs() < 1e-2);
}

#[test]
fn empty_network_has_no_bounds() {
    let mut g = ForceGraph::default();
    assert!(g.is_empty());
    assert!(g.bounds().is_none());
    assert!(!g.step());
}
