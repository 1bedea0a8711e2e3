//! Observer trait for progress reporting and data collection.

use epi_core::{StageCounts, Tick};

use crate::Snapshot;

/// Callbacks invoked by [`EpidemicEngine::run_ticks`][crate::EpidemicEngine::run_ticks].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Observers only watch; nothing they do
/// feeds back into the simulation.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl TickObserver for ProgressPrinter {
///     fn on_snapshot(&mut self, snapshot: &Snapshot) {
///         if snapshot.tick.0 % self.interval == 0 {
///             println!("{}: {}", snapshot.tick, snapshot.counts());
///         }
///     }
/// }
/// ```
pub trait TickObserver {
    /// Called before the engine computes `tick`.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called with the state produced by each tick.
    fn on_snapshot(&mut self, _snapshot: &Snapshot) {}

    /// Called once when `run_ticks` returns; `next_tick` is the tick the
    /// engine would compute next.
    fn on_run_end(&mut self, _next_tick: Tick) {}
}

/// A [`TickObserver`] that does nothing.
pub struct NoopObserver;

impl TickObserver for NoopObserver {}

// ── StageHistory ──────────────────────────────────────────────────────────────

/// Records stage counts for every observed tick: the time series behind a
/// dashboard's epidemic curve.
#[derive(Clone, Debug, Default)]
pub struct StageHistory {
    series: Vec<(Tick, StageCounts)>,
}

impl StageHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded `(tick, counts)` pairs in tick order.
    pub fn series(&self) -> &[(Tick, StageCounts)] {
        &self.series
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn latest(&self) -> Option<&(Tick, StageCounts)> {
        self.series.last()
    }

    /// Tick with the most infectious agents (earliest on ties).
    pub fn peak_infectious(&self) -> Option<(Tick, usize)> {
        self.series
            .iter()
            .map(|(t, c)| (*t, c.infectious()))
            .fold(None, |best, cur| match best {
                Some((_, n)) if n >= cur.1 => best,
                _ => Some(cur),
            })
    }
}

impl TickObserver for StageHistory {
    fn on_snapshot(&mut self, snapshot: &Snapshot) {
        self.series.push((snapshot.tick, snapshot.counts()));
    }
}
