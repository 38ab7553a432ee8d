use weft::graphlib::{Link, Network, Node, NodeId};
use weft::{
    Algorithm, CriteriaViolation, Error, HierarchicalOptions, LayoutParams, Orientation,
    SilentMonitor, layout,
};

fn n(id: u32) -> NodeId {
    NodeId(id)
}

fn dag(names: &[&str], links: &[(u32, u32)], isolated: &[u32]) -> Network {
    let nodes: Vec<Node> = names
        .iter()
        .enumerate()
        .map(|(i, name)| Node::new(n(i as u32), *name))
        .collect();
    let links: Vec<Link> = links
        .iter()
        .map(|&(s, t)| Link::new(n(s), n(t), "r").directed(true))
        .collect();
    Network::new(nodes, links, isolated.iter().map(|&i| n(i)))
}

fn hierarchical(orientation: Orientation) -> Algorithm {
    Algorithm::Hierarchical(HierarchicalOptions { orientation })
}

fn row_names(result: &weft::LayoutResult, net: &Network) -> Vec<String> {
    result
        .node_order
        .rows()
        .iter()
        .map(|&id| net.name(id).unwrap().to_string())
        .collect()
}

#[test]
fn diamond_orders_ancestors_before_descendants() {
    let net = dag(&["A", "B", "C", "D"], &[(0, 1), (0, 2), (1, 3), (2, 3)], &[]);
    let result = layout(
        &net,
        hierarchical(Orientation::Down),
        LayoutParams::default(),
        &mut SilentMonitor,
    )
    .unwrap();

    assert_eq!(row_names(&result, &net), vec!["A", "B", "C", "D"]);
}

#[test]
fn levels_follow_the_longest_ancestor_chain() {
    // A -> B -> C plus the chord A -> C: C sits below B, not beside it.
    let net = dag(&["A", "B", "C"], &[(0, 1), (1, 2), (0, 2)], &[]);
    let result = layout(
        &net,
        hierarchical(Orientation::Down),
        LayoutParams::default(),
        &mut SilentMonitor,
    )
    .unwrap();

    assert_eq!(row_names(&result, &net), vec!["A", "B", "C"]);
}

#[test]
fn point_up_orientation_inverts_the_hierarchy() {
    let net = dag(&["A", "B", "C"], &[(0, 2), (1, 2)], &[]);
    let result = layout(
        &net,
        hierarchical(Orientation::Up),
        LayoutParams::default(),
        &mut SilentMonitor,
    )
    .unwrap();

    // With arrows pointing up, C is the root.
    assert_eq!(row_names(&result, &net), vec!["C", "A", "B"]);
}

#[test]
fn cycle_fails_the_criteria() {
    let net = dag(&["A", "B", "C"], &[(0, 1), (1, 2), (2, 0)], &[]);
    let err = layout(
        &net,
        hierarchical(Orientation::Down),
        LayoutParams::default(),
        &mut SilentMonitor,
    )
    .unwrap_err();

    assert!(matches!(
        err,
        Error::CriteriaNotMet(CriteriaViolation::Cycle { .. })
    ));
}

#[test]
fn undirected_link_fails_the_criteria() {
    let nodes = vec![Node::new(n(0), "A"), Node::new(n(1), "B")];
    let net = Network::new(nodes, vec![Link::new(n(0), n(1), "r")], []);
    let err = layout(
        &net,
        hierarchical(Orientation::Down),
        LayoutParams::default(),
        &mut SilentMonitor,
    )
    .unwrap_err();

    assert!(matches!(
        err,
        Error::CriteriaNotMet(CriteriaViolation::UndirectedLink { .. })
    ));
}

#[test]
fn self_loops_do_not_count_as_cycles() {
    let net = dag(&["A", "B"], &[(0, 0), (0, 1)], &[]);
    let result = layout(
        &net,
        hierarchical(Orientation::Down),
        LayoutParams::default(),
        &mut SilentMonitor,
    )
    .unwrap();

    assert_eq!(row_names(&result, &net), vec!["A", "B"]);
}

#[test]
fn isolated_nodes_trail_in_name_order() {
    let net = dag(&["A", "B", "z", "m"], &[(0, 1)], &[2, 3]);
    let result = layout(
        &net,
        hierarchical(Orientation::Down),
        LayoutParams::default(),
        &mut SilentMonitor,
    )
    .unwrap();

    assert_eq!(row_names(&result, &net), vec!["A", "B", "m", "z"]);
}
