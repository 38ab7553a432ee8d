//! Progress reporting and cooperative cancellation.
//!
//! A layout runs as one long CPU-bound pass on a worker thread. The only
//! cross-thread surface is here: the caller holds a [`CancelFlag`] handle and
//! may set it at any time; the worker observes it at progress-report points
//! and unwinds with [`Error::Cancelled`]. Cancellation is cooperative, not
//! preemptive: the algorithm reaches the next checkpoint before aborting,
//! and no partial order is ever published.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{Error, Result};

/// Sink for progress fractions. `progress` returns `false` to request abort.
pub trait Monitor {
    fn progress(&mut self, fraction: f64) -> bool;
}

/// Monitor that swallows reports and never cancels.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentMonitor;

impl Monitor for SilentMonitor {
    fn progress(&mut self, _fraction: f64) -> bool {
        true
    }
}

/// Shared cancel switch. Clone one handle per interested thread.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Monitor backed by a [`CancelFlag`] and an optional progress callback.
pub struct FlagMonitor {
    flag: CancelFlag,
    sink: Option<Box<dyn FnMut(f64) + Send>>,
}

impl FlagMonitor {
    pub fn new(flag: CancelFlag) -> Self {
        Self { flag, sink: None }
    }

    pub fn with_sink(flag: CancelFlag, sink: impl FnMut(f64) + Send + 'static) -> Self {
        Self {
            flag,
            sink: Some(Box::new(sink)),
        }
    }
}

impl Monitor for FlagMonitor {
    fn progress(&mut self, fraction: f64) -> bool {
        if let Some(sink) = self.sink.as_mut() {
            sink(fraction);
        }
        !self.flag.is_cancelled()
    }
}

/// A sub-range of the overall [0, 1] progress axis. Multi-phase layouts give
/// each phase its own window so the caller sees one smooth ramp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    pub start: f64,
    pub end: f64,
}

impl Window {
    pub const FULL: Window = Window {
        start: 0.0,
        end: 1.0,
    };

    pub fn new(start: f64, end: f64) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// The sub-window covering `[lo, hi]` of this window, both in [0, 1].
    pub fn sub(self, lo: f64, hi: f64) -> Self {
        let span = self.end - self.start;
        Window {
            start: self.start + span * lo,
            end: self.start + span * hi,
        }
    }

    fn at(self, fraction: f64) -> f64 {
        self.start + (self.end - self.start) * fraction.clamp(0.0, 1.0)
    }
}

/// Reports fractional progress over one loop of known size, at a bounded
/// cadence (at most ~20 reports per loop), and checks for cancellation on
/// every report.
pub struct LoopReporter<'a> {
    monitor: &'a mut dyn Monitor,
    window: Window,
    total: usize,
    done: usize,
    stride: usize,
}

impl<'a> LoopReporter<'a> {
    pub fn new(monitor: &'a mut dyn Monitor, window: Window, total: usize) -> Self {
        Self {
            monitor,
            window,
            total: total.max(1),
            done: 0,
            stride: (total / 20).max(1),
        }
    }

    /// One unit of work finished. Cheap when no report is due.
    pub fn tick(&mut self) -> Result<()> {
        self.done += 1;
        if self.done % self.stride == 0 {
            self.report()?;
        }
        Ok(())
    }

    /// Overwrite the done-count, e.g. when a loop skips items in bulk.
    pub fn set_done(&mut self, done: usize) -> Result<()> {
        self.done = done;
        if self.done % self.stride == 0 {
            self.report()?;
        }
        Ok(())
    }

    /// Pin this loop's window to 100%.
    pub fn finish(&mut self) -> Result<()> {
        self.done = self.total;
        self.report()
    }

    fn report(&mut self) -> Result<()> {
        let fraction = self.done as f64 / self.total as f64;
        if self.monitor.progress(self.window.at(fraction)) {
            Ok(())
        } else {
            Err(Error::Cancelled)
        }
    }
}
