use weft_graphlib::{Adjacency, Link, Node, NodeId, Network};

fn n(id: u32) -> NodeId {
    NodeId(id)
}

fn link(src: u32, trg: u32) -> Link {
    Link::new(n(src), n(trg), "r")
}

#[test]
fn every_node_appears_even_when_isolated() {
    let links = vec![link(0, 1)];
    let adj = Adjacency::build(&links, [n(0), n(1), n(2)]);

    assert_eq!(adj.node_count(), 3);
    assert!(adj.contains(n(2)));
    assert_eq!(adj.degree(n(2)), 0);
    assert!(adj.links_of(n(2)).is_empty());
}

#[test]
fn links_register_on_both_endpoints() {
    let links = vec![link(0, 1), link(1, 2)];
    let adj = Adjacency::build(&links, [n(0), n(1), n(2)]);

    assert_eq!(adj.degree(n(1)), 2);
    assert_eq!(adj.links_of(n(1)).len(), 2);
    assert_eq!(
        adj.neighbors(n(1)).iter().copied().collect::<Vec<_>>(),
        vec![n(0), n(2)]
    );
}

#[test]
fn shadow_links_do_not_contribute() {
    let mut links = vec![link(0, 1)];
    links.push(links[0].shadow_twin());
    let adj = Adjacency::build(&links, [n(0), n(1)]);

    assert_eq!(adj.degree(n(0)), 1);
    assert_eq!(adj.links_of(n(0)).len(), 1);
}

#[test]
fn feedback_links_are_incident_but_add_no_degree() {
    let links = vec![link(0, 0), link(0, 1)];
    let adj = Adjacency::build(&links, [n(0), n(1)]);

    assert_eq!(adj.degree(n(0)), 1);
    assert_eq!(adj.links_of(n(0)).len(), 2);
}

#[test]
fn network_deduplicates_node_ids_and_resolves_names() {
    let net = Network::new(
        [
            Node::new(n(0), "alpha"),
            Node::new(n(1), "beta"),
            Node::new(n(0), "alpha-again"),
        ],
        vec![link(0, 1)],
        [],
    );

    assert_eq!(net.node_count(), 2);
    assert_eq!(net.name(n(0)), Some("alpha"));
    assert_eq!(net.node_ids(), vec![n(0), n(1)]);
}

#[test]
fn flipped_and_shadow_preserve_relation() {
    let l = Link::new(n(3), n(7), "binds").directed(true);
    let f = l.flipped();
    assert_eq!(f.src, n(7));
    assert_eq!(f.trg, n(3));
    assert_eq!(f.relation, "binds");
    assert!(f.directed);

    let s = l.shadow_twin();
    assert!(s.shadow);
    assert_eq!(s.src, l.src);
    assert_eq!(s.other_end(n(3)), Some(n(7)));
}
