//! Fluent builder for constructing an [`EpidemicEngine`].

use epi_agent::PopulationBuilder;
use epi_core::{AgentId, EpidemicConfig, Position, SimRng, Tick};
use epi_disease::ContagionModel;
use epi_mobility::MobilityModel;

use crate::{EpidemicEngine, SimResult};

/// Fluent builder for [`EpidemicEngine`].
///
/// # Required inputs
///
/// - [`EpidemicConfig`] — population size, radius, probability, dwell times, …
///
/// # Optional inputs (have defaults)
///
/// | Method                   | Default                                            |
/// |--------------------------|----------------------------------------------------|
/// | `.initial_positions(v)`  | Uniform in `[-domain_size/2, domain_size/2)²`      |
/// | `.initial_infected(v)`   | `config.initial_infected` agents chosen at random  |
///
/// # Example
///
/// ```rust,ignore
/// let mut engine = EngineBuilder::new(config)
///     .initial_infected(vec![AgentId(0)])
///     .build()?;
/// let first = engine.step()?;
/// ```
pub struct EngineBuilder {
    config:    EpidemicConfig,
    positions: Option<Vec<Position>>,
    infected:  Option<Vec<AgentId>>,
}

impl EngineBuilder {
    pub fn new(config: EpidemicConfig) -> Self {
        Self {
            config,
            positions: None,
            infected:  None,
        }
    }

    /// Supply every agent's starting position (must be length
    /// `population_size`).
    pub fn initial_positions(mut self, positions: Vec<Position>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Start exactly these agents as `Infected`.  Takes precedence over
    /// `config.initial_infected`.
    pub fn initial_infected(mut self, agents: Vec<AgentId>) -> Self {
        self.infected = Some(agents);
        self
    }

    /// Validate inputs, place the population, sample transition thresholds,
    /// and return a ready-to-step [`EpidemicEngine`].
    ///
    /// Random draws happen in a fixed order from the single engine RNG:
    /// positions, initial infected, then thresholds.
    pub fn build(self) -> SimResult<EpidemicEngine> {
        self.config.validate()?;

        let seed = match self.config.seed {
            Some(s) => s,
            None => {
                let s = SimRng::entropy_seed();
                log::info!("no seed configured; using {s}");
                s
            }
        };
        let mut rng = SimRng::new(seed);

        // ── Population ────────────────────────────────────────────────────
        let mut population = PopulationBuilder::new(self.config.population_size)
            .domain_size(self.config.domain_size);
        if let Some(p) = self.positions {
            population = population.positions(p);
        }
        population = match self.infected {
            Some(agents) => population.infected(agents),
            None => population.random_infected(self.config.initial_infected),
        };
        let population = population.build(&mut rng)?;

        // ── Models ────────────────────────────────────────────────────────
        let contagion = ContagionModel::new(&self.config, population.stages.clone(), &mut rng)?;
        let mobility = MobilityModel::new(self.config.movement_scale)?;

        log::info!(
            "engine ready: {} agents, {} infected, radius {}, p={}, seed {seed}",
            population.count,
            population.counts().infectious(),
            self.config.contagion_radius,
            self.config.transmission_probability,
        );

        Ok(EpidemicEngine {
            config: self.config,
            seed,
            next_tick: Tick::ZERO,
            population,
            contagion,
            mobility,
            rng,
        })
    }
}
