//! Run configuration.
//!
//! `EpidemicConfig` is immutable once an engine is built.  Applications
//! typically load it from a JSON file (with the `serde` feature) and override
//! individual fields from the command line.

use crate::{EpiError, EpiResult, TransitionKind};

// ── TransitionParams ──────────────────────────────────────────────────────────

/// Normal(mean, std) dwell-time parameters for one [`TransitionKind`], in ticks.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionParams {
    pub mean: f64,
    pub std:  f64,
}

impl TransitionParams {
    #[inline]
    pub const fn new(mean: f64, std: f64) -> Self {
        Self { mean, std }
    }

    /// A fixed dwell time (zero spread).
    #[inline]
    pub const fn fixed(ticks: f64) -> Self {
        Self { mean: ticks, std: 0.0 }
    }
}

// ── EpidemicConfig ────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EpidemicConfig {
    /// Number of agents N.  Constant for the whole run.
    pub population_size: usize,

    /// Agents set to `Infected` at tick 0, chosen without replacement.
    pub initial_infected: usize,

    /// Contact distance.  A pair is at risk iff `distance² < radius²`.
    pub contagion_radius: f64,

    /// Per-contact, per-tick Bernoulli success probability in `[0, 1]`.
    pub transmission_probability: f64,

    /// Scale of the uniform random step each tick.
    pub movement_scale: f64,

    /// Side length of the square agents are initially placed in.
    pub domain_size: f64,

    /// Dwell-time parameters indexed by [`TransitionKind::index`].
    pub transitions: [TransitionParams; TransitionKind::COUNT],

    /// Master RNG seed.  `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl Default for EpidemicConfig {
    fn default() -> Self {
        Self {
            population_size:          100,
            initial_infected:         5,
            contagion_radius:         1.0,
            transmission_probability: 0.1,
            movement_scale:           0.15,
            domain_size:              20.0,
            transitions: [
                TransitionParams::new(20.0, 5.0),
                TransitionParams::new(50.0, 5.0),
                TransitionParams::new(5.0, 2.0),
                TransitionParams::new(100.0, 5.0),
            ],
            seed: None,
        }
    }
}

impl EpidemicConfig {
    /// Parameters for one transition kind.
    #[inline]
    pub fn transition(&self, kind: TransitionKind) -> TransitionParams {
        self.transitions[kind.index()]
    }

    /// Set the parameters for one transition kind.
    pub fn with_transition(mut self, kind: TransitionKind, params: TransitionParams) -> Self {
        self.transitions[kind.index()] = params;
        self
    }

    /// `radius²`, the threshold contact checks compare against.
    #[inline]
    pub fn radius_sq(&self) -> f64 {
        self.contagion_radius * self.contagion_radius
    }

    /// Reject configurations the engine cannot run.  Nothing is clamped.
    pub fn validate(&self) -> EpiResult<()> {
        if self.population_size == 0 {
            return Err(EpiError::Config("population_size must be > 0".into()));
        }
        if u32::try_from(self.population_size).is_err() {
            return Err(EpiError::Config(format!(
                "population_size {} exceeds the AgentId range",
                self.population_size
            )));
        }
        if self.initial_infected > self.population_size {
            return Err(EpiError::Config(format!(
                "initial_infected ({}) exceeds population_size ({})",
                self.initial_infected, self.population_size
            )));
        }
        if !self.contagion_radius.is_finite() || self.contagion_radius <= 0.0 {
            return Err(EpiError::Config(
                "contagion_radius must be finite and > 0".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.transmission_probability) {
            return Err(EpiError::Config(format!(
                "transmission_probability must be in [0, 1], got {}",
                self.transmission_probability
            )));
        }
        if !self.movement_scale.is_finite() || self.movement_scale < 0.0 {
            return Err(EpiError::Config(
                "movement_scale must be finite and >= 0".into(),
            ));
        }
        if !self.domain_size.is_finite() || self.domain_size <= 0.0 {
            return Err(EpiError::Config("domain_size must be finite and > 0".into()));
        }
        for kind in TransitionKind::ALL {
            let p = self.transition(kind);
            if !p.mean.is_finite() {
                return Err(EpiError::Config(format!("{kind}: mean must be finite")));
            }
            if !p.std.is_finite() || p.std < 0.0 {
                return Err(EpiError::Config(format!(
                    "{kind}: std must be finite and >= 0, got {}",
                    p.std
                )));
            }
        }
        Ok(())
    }
}
