//! Annotation bands: labeled contiguous intervals over rows or columns.

use serde::Serialize;
use std::fmt::Display;

/// A labeled closed interval `[start, end]` over one axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annot {
    pub label: String,
    pub start: usize,
    pub end: usize,
    pub layer: u32,
}

/// The two column annotation tracks. Both index the shadow-inclusive column
/// numbering; when shadows are disabled the shadow track is empty and the
/// numbering coincides with the plain one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnnotTracks {
    pub plain: Vec<Annot>,
    pub shadow: Vec<Annot>,
}

/// Detects maximal runs of equal tags over `offset..offset + len` and emits
/// one [`Annot`] per run. Runs exactly tile the scanned range; the final run
/// closes at the last index.
pub fn scan_runs<T, F>(offset: usize, len: usize, layer: u32, tag: F) -> Vec<Annot>
where
    T: PartialEq + Display,
    F: Fn(usize) -> T,
{
    let mut out: Vec<Annot> = Vec::new();
    if len == 0 {
        return out;
    }

    let mut run_start = 0usize;
    let mut run_tag = tag(0);
    for i in 1..len {
        let t = tag(i);
        if t != run_tag {
            out.push(Annot {
                label: run_tag.to_string(),
                start: offset + run_start,
                end: offset + i - 1,
                layer,
            });
            run_start = i;
            run_tag = t;
        }
    }
    out.push(Annot {
        label: run_tag.to_string(),
        start: offset + run_start,
        end: offset + len - 1,
        layer,
    });
    out
}
