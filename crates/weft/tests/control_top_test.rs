use weft::graphlib::{Link, Network, Node, NodeId};
use weft::{
    Algorithm, ControlTopOptions, CriteriaViolation, Error, LayoutParams, SilentMonitor, layout,
};

fn n(id: u32) -> NodeId {
    NodeId(id)
}

fn small_net() -> Network {
    let nodes = vec![
        Node::new(n(0), "A"),
        Node::new(n(1), "B"),
        Node::new(n(2), "C"),
    ];
    let links = vec![Link::new(n(0), n(1), "r"), Link::new(n(1), n(2), "r")];
    Network::new(nodes, links, [])
}

fn forced(order: &[u32]) -> Algorithm {
    Algorithm::ControlTop(ControlTopOptions {
        order: order.iter().map(|&i| n(i)).collect(),
    })
}

#[test]
fn forced_order_is_published_verbatim() {
    let net = small_net();
    let result = layout(
        &net,
        forced(&[2, 0, 1]),
        LayoutParams::default(),
        &mut SilentMonitor,
    )
    .unwrap();

    assert_eq!(result.node_order.row(n(2)), Some(0));
    assert_eq!(result.node_order.row(n(0)), Some(1));
    assert_eq!(result.node_order.row(n(1)), Some(2));
}

#[test]
fn columns_still_follow_the_forced_rows() {
    let net = small_net();
    let result = layout(
        &net,
        forced(&[2, 0, 1]),
        LayoutParams::default(),
        &mut SilentMonitor,
    )
    .unwrap();

    // Rows C=0, A=1, B=2: spans are B-C (0,2) and A-B (1,2).
    let cols: Vec<(u32, u32, bool)> = result
        .link_order
        .columns()
        .map(|l| (l.src.0, l.trg.0, l.shadow))
        .collect();
    assert_eq!(
        cols,
        vec![(1, 2, false), (1, 2, true), (0, 1, false), (0, 1, true)]
    );
}

#[test]
fn unknown_node_fails_the_criteria() {
    let net = small_net();
    let err = layout(
        &net,
        forced(&[0, 1, 9]),
        LayoutParams::default(),
        &mut SilentMonitor,
    )
    .unwrap_err();

    assert!(matches!(
        err,
        Error::CriteriaNotMet(CriteriaViolation::UnknownForcedNode { node }) if node == n(9)
    ));
}

#[test]
fn duplicate_node_fails_the_criteria() {
    let net = small_net();
    let err = layout(
        &net,
        forced(&[0, 1, 0]),
        LayoutParams::default(),
        &mut SilentMonitor,
    )
    .unwrap_err();

    assert!(matches!(
        err,
        Error::CriteriaNotMet(CriteriaViolation::DuplicateForcedNode { node }) if node == n(0)
    ));
}

#[test]
fn incomplete_order_fails_the_criteria() {
    let net = small_net();
    let err = layout(
        &net,
        forced(&[0, 1]),
        LayoutParams::default(),
        &mut SilentMonitor,
    )
    .unwrap_err();

    assert!(matches!(
        err,
        Error::CriteriaNotMet(CriteriaViolation::IncompleteForcedOrder { missing: 1 })
    ));
}
