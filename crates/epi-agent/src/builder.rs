//! Fluent builder for constructing a [`Population`].
//!
//! # Usage
//!
//! ```rust
//! use epi_agent::PopulationBuilder;
//! use epi_core::{SimRng, Stage};
//!
//! let mut rng = SimRng::new(42);
//! let population = PopulationBuilder::new(1_000)
//!     .domain_size(20.0)
//!     .random_infected(5)
//!     .build(&mut rng)
//!     .unwrap();
//!
//! assert_eq!(population.count, 1_000);
//! assert_eq!(population.counts().get(Stage::Infected), 5);
//! ```

use std::collections::HashSet;

use epi_core::{AgentId, EpiError, EpiResult, Position, SimRng, Stage};

use crate::Population;

/// Who starts the run infected.
#[derive(Clone, Debug)]
enum InitialInfected {
    /// `n` agents chosen uniformly without replacement.
    Random(usize),
    /// An explicit list of agents.
    Explicit(Vec<AgentId>),
}

/// Fluent builder for [`Population`].
///
/// Positions default to uniform placement in the square
/// `[-domain_size/2, domain_size/2)²`; pass [`positions`](Self::positions)
/// to place agents by hand.  Random draws are taken from the caller's
/// [`SimRng`] in a fixed order (all positions, then the infected sample).
pub struct PopulationBuilder {
    count:       usize,
    domain_size: f64,
    positions:   Option<Vec<Position>>,
    infected:    InitialInfected,
}

impl PopulationBuilder {
    /// Create a builder for `count` agents, none infected, in a 20×20 domain.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            domain_size: 20.0,
            positions:   None,
            infected:    InitialInfected::Random(0),
        }
    }

    /// Side length of the initial placement square.
    pub fn domain_size(mut self, side: f64) -> Self {
        self.domain_size = side;
        self
    }

    /// Supply every agent's starting position (must be length `count`).
    pub fn positions(mut self, positions: Vec<Position>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Infect `n` agents chosen uniformly at random, without replacement.
    pub fn random_infected(mut self, n: usize) -> Self {
        self.infected = InitialInfected::Random(n);
        self
    }

    /// Infect exactly these agents.
    pub fn infected(mut self, agents: Vec<AgentId>) -> Self {
        self.infected = InitialInfected::Explicit(agents);
        self
    }

    /// Validate inputs and construct the [`Population`].
    pub fn build(self, rng: &mut SimRng) -> EpiResult<Population> {
        let count = self.count;

        let positions = match self.positions {
            Some(p) => {
                if p.len() != count {
                    return Err(EpiError::Config(format!(
                        "initial positions length {} does not match agent count {count}",
                        p.len()
                    )));
                }
                if let Some(bad) = p.iter().position(|q| !q.x.is_finite() || !q.y.is_finite()) {
                    return Err(EpiError::Config(format!(
                        "initial position of agent {bad} is not finite"
                    )));
                }
                p
            }
            None => {
                if !self.domain_size.is_finite() || self.domain_size <= 0.0 {
                    return Err(EpiError::Config("domain_size must be finite and > 0".into()));
                }
                let half = self.domain_size * 0.5;
                (0..count)
                    .map(|_| {
                        let x = rng.gen_range(-half..half);
                        let y = rng.gen_range(-half..half);
                        Position::new(x, y)
                    })
                    .collect()
            }
        };

        let infected: Vec<AgentId> = match self.infected {
            InitialInfected::Random(n) => {
                if n > count {
                    return Err(EpiError::Config(format!(
                        "cannot infect {n} agents in a population of {count}"
                    )));
                }
                rng.sample_indices(count, n)
                    .into_iter()
                    .map(|i| AgentId(i as u32))
                    .collect()
            }
            InitialInfected::Explicit(agents) => {
                let mut seen = HashSet::with_capacity(agents.len());
                for &a in &agents {
                    if a.index() >= count {
                        return Err(EpiError::AgentNotFound(a));
                    }
                    if !seen.insert(a) {
                        return Err(EpiError::Config(format!("{a} listed twice as initially infected")));
                    }
                }
                agents
            }
        };

        let mut stages = vec![Stage::NotInfected; count];
        for a in &infected {
            stages[a.index()] = Stage::Infected;
        }
        log::debug!("placed {count} agents, {} initially infected", infected.len());

        Ok(Population::new(positions, stages))
    }
}
