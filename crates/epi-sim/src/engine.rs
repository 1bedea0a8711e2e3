//! The `EpidemicEngine` struct and its tick pipeline.

use epi_agent::Population;
use epi_core::{EpidemicConfig, Position, SimRng, Stage, StageCounts, Tick};
use epi_disease::ContagionModel;
use epi_mobility::MobilityModel;

use crate::{SimResult, Snapshot, TickObserver};

/// The simulation runner.
///
/// `EpidemicEngine` owns all simulation state and drives a fixed per-tick
/// pipeline:
///
/// 1. **Contagion + progression**: [`ContagionModel::step`] on the current
///    positions yields this tick's stages.
/// 2. **Mobility**: [`MobilityModel::step`] moves agents using those stages
///    (immobilized agents stay put).
/// 3. **Yield**: a fresh [`Snapshot`] of positions and stages.
///
/// There is no end condition.  The engine is an infinite [`Iterator`]; stop
/// pulling to stop the run.
///
/// Create via [`EngineBuilder`][crate::EngineBuilder].
pub struct EpidemicEngine {
    pub(crate) config:     EpidemicConfig,
    pub(crate) seed:       u64,
    pub(crate) next_tick:  Tick,
    pub(crate) population: Population,
    pub(crate) contagion:  ContagionModel,
    pub(crate) mobility:   MobilityModel,
    pub(crate) rng:        SimRng,
}

impl EpidemicEngine {
    // ── Read-only state ───────────────────────────────────────────────────

    pub fn config(&self) -> &EpidemicConfig {
        &self.config
    }

    /// The seed actually used (drawn from entropy if none was configured).
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The tick the next [`step`](Self::step) will produce.
    pub fn current_tick(&self) -> Tick {
        self.next_tick
    }

    pub fn positions(&self) -> &[Position] {
        &self.population.positions
    }

    pub fn stages(&self) -> &[Stage] {
        &self.population.stages
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    /// The contagion model, including its elapsed-tick counters.
    pub fn contagion(&self) -> &ContagionModel {
        &self.contagion
    }

    pub fn counts(&self) -> StageCounts {
        self.population.counts()
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Advance exactly one tick and return its snapshot.
    pub fn step(&mut self) -> SimResult<Snapshot> {
        let tick = self.next_tick;

        let stages = self.contagion.step(&self.population.positions, &mut self.rng)?;
        self.mobility.step(&mut self.population.positions, &stages, &mut self.rng)?;
        self.population.stages = stages;
        self.next_tick = tick.next();

        log::debug!("{tick}: {}", self.population.counts());

        Ok(Snapshot {
            tick,
            positions: self.population.positions.clone(),
            stages:    self.population.stages.clone(),
        })
    }

    /// Run exactly `n` ticks, reporting each to `observer`.
    pub fn run_ticks<O: TickObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            observer.on_tick_start(self.next_tick);
            let snapshot = self.step()?;
            observer.on_snapshot(&snapshot);
        }
        observer.on_run_end(self.next_tick);
        Ok(())
    }
}

impl Iterator for EpidemicEngine {
    type Item = Snapshot;

    /// Never returns `None` for an engine built by `EngineBuilder`: every
    /// length the pipeline checks is fixed at build time.  A failure is logged
    /// and ends the stream.
    fn next(&mut self) -> Option<Snapshot> {
        match self.step() {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                log::error!("{}: tick failed: {e}", self.next_tick);
                None
            }
        }
    }
}
