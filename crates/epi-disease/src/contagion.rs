//! Spatial contagion: which susceptible agents become infected this tick.

use epi_core::{AgentId, EpidemicConfig, Position, SimRng, Stage};

use crate::{AgentMask, DiseaseError, DiseaseResult, StageTransitionModel};

/// Decides new infections from proximity to infectious agents, then hands
/// the updated stages to a [`StageTransitionModel`] for time-driven
/// progression.
///
/// Holds the authoritative stage vector plus two index-aligned caches:
/// the infectious set (`Infected ..= Immobilized`) and the recovered set.
/// Recovered agents are permanently immune and never transmit.
///
/// The pairwise scan is O(N²) per tick.  That is fine for populations in the
/// low thousands; a grid or k-d tree over positions is the place to start if
/// N grows further.
pub struct ContagionModel {
    radius_sq:   f64,
    probability: f64,
    stages:      Vec<Stage>,
    infectious:  AgentMask,
    recovered:   AgentMask,
    transitions: StageTransitionModel,
}

impl ContagionModel {
    /// Build the model from a validated config and the tick-0 stages.
    ///
    /// Samples every agent's transition thresholds from `rng`.
    pub fn new(
        config:         &EpidemicConfig,
        initial_stages: Vec<Stage>,
        rng:            &mut SimRng,
    ) -> DiseaseResult<Self> {
        config.validate()?;
        if initial_stages.len() != config.population_size {
            return Err(DiseaseError::AgentCountMismatch {
                expected: config.population_size,
                got:      initial_stages.len(),
                what:     "initial stages",
            });
        }

        let n = initial_stages.len();
        let transitions = StageTransitionModel::new(&config.transitions, n, rng)?;

        let mut model = Self {
            radius_sq:   config.radius_sq(),
            probability: config.transmission_probability,
            stages:      initial_stages,
            infectious:  AgentMask::new(n),
            recovered:   AgentMask::new(n),
            transitions,
        };
        model.sync_masks();
        Ok(model)
    }

    // ── Read-only accessors ───────────────────────────────────────────────

    /// Stages as of the end of the last step (or tick 0 before any step).
    #[inline]
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    #[inline]
    pub fn infectious(&self) -> &AgentMask {
        &self.infectious
    }

    #[inline]
    pub fn recovered(&self) -> &AgentMask {
        &self.recovered
    }

    /// The progression model (elapsed counters are readable through it).
    #[inline]
    pub fn transitions(&self) -> &StageTransitionModel {
        &self.transitions
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Run one contagion + progression tick and return the new stages.
    ///
    /// # Errors
    ///
    /// [`DiseaseError::AgentCountMismatch`] if `positions` is not one per agent.
    pub fn step(&mut self, positions: &[Position], rng: &mut SimRng) -> DiseaseResult<Vec<Stage>> {
        if positions.len() != self.stages.len() {
            return Err(DiseaseError::AgentCountMismatch {
                expected: self.stages.len(),
                got:      positions.len(),
                what:     "positions",
            });
        }

        let newly_infected = self.newly_infected(positions, rng);
        if !newly_infected.is_empty() {
            log::trace!("{} new infections", newly_infected.len());
            for &agent in &newly_infected {
                self.stages[agent.index()] = Stage::Infected;
                self.infectious.insert(agent);
            }
            self.transitions.reset_counter(&newly_infected);
        }

        // Recovered agents leave the infectious set before progression so the
        // next tick's scan never sees them.
        self.sync_masks();

        self.stages = self.transitions.advance(&self.stages)?;
        self.sync_masks();

        Ok(self.stages.clone())
    }

    /// Susceptible agents infected this tick, ascending.
    ///
    /// Every at-risk (infectious, susceptible) pair gets one Bernoulli trial;
    /// a column is infected as soon as one of its trials succeeds, so later
    /// pairs for an already-infected column draw nothing.
    fn newly_infected(&self, positions: &[Position], rng: &mut SimRng) -> Vec<AgentId> {
        if self.infectious.is_empty() || self.probability <= 0.0 {
            return Vec::new();
        }

        let mut hit = AgentMask::new(self.stages.len());

        for contacts in self.at_risk_pairs(positions) {
            for b in contacts {
                if hit.contains(b) {
                    continue;
                }
                if rng.gen_bool(self.probability) {
                    hit.insert(b);
                }
            }
        }

        hit.iter().collect()
    }

    /// For each infectious agent (ascending), the susceptible agents within
    /// the contagion radius (ascending).  Rows come back in source order with
    /// or without the `parallel` feature.
    pub(crate) fn at_risk_pairs(&self, positions: &[Position]) -> Vec<Vec<AgentId>> {
        let sources: Vec<AgentId> = self.infectious.iter().collect();
        let row = |&a: &AgentId| contacts_within(a, positions, &self.stages, self.radius_sq);

        #[cfg(not(feature = "parallel"))]
        {
            sources.iter().map(row).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            sources.par_iter().map(row).collect()
        }
    }

    /// Rebuild the infectious and recovered caches from `stages`.
    ///
    /// The recovered set only grows; membership in it always wins over the
    /// infectious set.
    fn sync_masks(&mut self) {
        for (i, &stage) in self.stages.iter().enumerate() {
            let agent = AgentId(i as u32);
            if stage.is_recovered() || self.recovered.contains(agent) {
                if self.recovered.insert(agent) {
                    log::trace!("{agent} recovered");
                }
                self.infectious.remove(agent);
            } else if stage.is_infectious() {
                self.infectious.insert(agent);
            } else {
                self.infectious.remove(agent);
            }
        }
    }
}

/// Susceptible agents strictly inside `radius_sq` of `source`.
pub(crate) fn contacts_within(
    source:    AgentId,
    positions: &[Position],
    stages:    &[Stage],
    radius_sq: f64,
) -> Vec<AgentId> {
    let origin = positions[source.index()];
    positions
        .iter()
        .zip(stages)
        .enumerate()
        .filter(|(_, (p, s))| s.is_susceptible() && origin.distance_sq(**p) < radius_sq)
        .map(|(i, _)| AgentId(i as u32))
        .collect()
}
