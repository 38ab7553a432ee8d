use weft::graphlib::{Link, Network, Node, NodeId};
use weft::monitor::{LoopReporter, Monitor, Window};
use weft::{Algorithm, CancelFlag, Error, FlagMonitor, LayoutParams, layout};

fn n(id: u32) -> NodeId {
    NodeId(id)
}

fn chain(len: u32) -> Network {
    let nodes: Vec<Node> = (0..len).map(|i| Node::new(n(i), format!("n{i:04}"))).collect();
    let links: Vec<Link> = (0..len - 1)
        .map(|i| Link::new(n(i), n(i + 1), "r"))
        .collect();
    Network::new(nodes, links, [])
}

/// Allows a fixed number of progress reports, then demands abort.
struct CancelAfter {
    calls: usize,
    allow: usize,
}

impl Monitor for CancelAfter {
    fn progress(&mut self, _fraction: f64) -> bool {
        self.calls += 1;
        self.calls < self.allow
    }
}

#[test]
fn cancel_on_third_report_aborts_the_layout() {
    let net = chain(200);
    let mut monitor = CancelAfter { calls: 0, allow: 3 };

    let err = layout(
        &net,
        Algorithm::DefaultBfs,
        LayoutParams::default(),
        &mut monitor,
    )
    .unwrap_err();

    assert!(matches!(err, Error::Cancelled));
    assert!(err.is_cancelled());
    assert_eq!(monitor.calls, 3);
}

#[test]
fn pre_cancelled_flag_aborts_at_the_first_checkpoint() {
    let net = chain(200);
    let flag = CancelFlag::new();
    flag.cancel();
    let mut monitor = FlagMonitor::new(flag);

    let err = layout(
        &net,
        Algorithm::DefaultBfs,
        LayoutParams::default(),
        &mut monitor,
    )
    .unwrap_err();
    assert!(err.is_cancelled());
}

#[test]
fn uncancelled_flag_lets_the_layout_complete() {
    let net = chain(50);
    let flag = CancelFlag::new();
    let mut monitor = FlagMonitor::new(flag.clone());

    let result = layout(
        &net,
        Algorithm::DefaultBfs,
        LayoutParams::default(),
        &mut monitor,
    )
    .unwrap();
    assert_eq!(result.node_order.len(), 50);
    assert!(!flag.is_cancelled());
}

/// Records every fraction it sees.
#[derive(Default)]
struct Recorder {
    seen: Vec<f64>,
}

impl Monitor for Recorder {
    fn progress(&mut self, fraction: f64) -> bool {
        self.seen.push(fraction);
        true
    }
}

#[test]
fn loop_fractions_map_into_the_caller_window() {
    let mut recorder = Recorder::default();
    {
        let mut rep = LoopReporter::new(&mut recorder, Window::new(0.25, 0.5), 100);
        for _ in 0..100 {
            rep.tick().unwrap();
        }
        rep.finish().unwrap();
    }

    assert!(!recorder.seen.is_empty());
    for pair in recorder.seen.windows(2) {
        assert!(pair[0] <= pair[1], "progress went backwards");
    }
    for &f in &recorder.seen {
        assert!((0.25..=0.5).contains(&f), "fraction {f} escaped the window");
    }
    assert_eq!(*recorder.seen.last().unwrap(), 0.5);
}

#[test]
fn whole_layout_reports_monotone_progress_up_to_one() {
    let net = chain(100);
    let mut recorder = Recorder::default();

    layout(
        &net,
        Algorithm::DefaultBfs,
        LayoutParams::default(),
        &mut recorder,
    )
    .unwrap();

    for pair in recorder.seen.windows(2) {
        assert!(pair[0] <= pair[1], "progress went backwards");
    }
    assert_eq!(*recorder.seen.last().unwrap(), 1.0);
}
