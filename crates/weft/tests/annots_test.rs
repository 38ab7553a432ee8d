use weft::annots::scan_runs;

#[test]
fn runs_tile_the_index_space_exactly() {
    let annots = scan_runs(0, 10, 0, |i| i / 3);

    let mut covered = 0usize;
    for (k, a) in annots.iter().enumerate() {
        assert_eq!(a.start, covered, "gap or overlap before run {k}");
        assert!(a.end >= a.start);
        covered = a.end + 1;
    }
    assert_eq!(covered, 10);
}

#[test]
fn final_run_closes_at_the_last_index() {
    let annots = scan_runs(0, 10, 0, |i| i / 3);

    assert_eq!(annots.len(), 4);
    let last = annots.last().unwrap();
    assert_eq!(last.label, "3");
    assert_eq!((last.start, last.end), (9, 9));
}

#[test]
fn constant_tag_yields_a_single_run() {
    let annots = scan_runs(0, 5, 2, |_| "all");

    assert_eq!(annots.len(), 1);
    assert_eq!(annots[0].label, "all");
    assert_eq!((annots[0].start, annots[0].end), (0, 4));
    assert_eq!(annots[0].layer, 2);
}

#[test]
fn alternating_tags_yield_one_run_each() {
    let annots = scan_runs(0, 6, 0, |i| i % 2);

    assert_eq!(annots.len(), 6);
    assert!(annots.iter().all(|a| a.start == a.end));
}

#[test]
fn a_tag_may_recur_in_separate_runs() {
    let tags = ["a", "a", "b", "a"];
    let annots = scan_runs(0, tags.len(), 0, |i| tags[i]);

    let labels: Vec<&str> = annots.iter().map(|a| a.label.as_str()).collect();
    assert_eq!(labels, vec!["a", "b", "a"]);
}

#[test]
fn offset_shifts_every_run() {
    let annots = scan_runs(7, 4, 0, |i| i / 2);

    assert_eq!((annots[0].start, annots[0].end), (7, 8));
    assert_eq!((annots[1].start, annots[1].end), (9, 10));
}

#[test]
fn empty_scan_yields_no_runs() {
    let annots = scan_runs(0, 0, 0, |_| 0);
    assert!(annots.is_empty());
}
