//! Time-driven stage progression.

use epi_core::{AgentId, SimRng, Stage, TransitionKind, TransitionParams};
use rand_distr::Normal;

use crate::{AgentMask, DiseaseError, DiseaseResult};

/// Owns each agent's sampled dwell-time thresholds and elapsed-tick counter,
/// and decides every tick which agents move one stage forward.
///
/// Thresholds are drawn once at construction from `Normal(mean, std)` per
/// [`TransitionKind`] and never change.  They are not clamped: a negative
/// draw simply means the agent leaves that stage on its first eligible tick.
///
/// `NotInfected` has no time-driven exit and `Recovered` is terminal, so
/// agents in those stages never advance here.
pub struct StageTransitionModel {
    /// Per-agent threshold row indexed by [`TransitionKind::index`].
    pub(crate) thresholds: Vec<[f64; TransitionKind::COUNT]>,

    /// Ticks since the agent's last stage change.
    elapsed: Vec<u64>,

    /// Agents whose stage was changed externally this tick (new infections).
    /// They are skipped by the next `advance` and end the tick at counter 0.
    changed_externally: AgentMask,
}

impl StageTransitionModel {
    /// Sample thresholds for `agent_count` agents.
    ///
    /// Draw order is kind-major: every agent's first threshold, then every
    /// agent's second, and so on.
    ///
    /// # Errors
    ///
    /// [`DiseaseError::InvalidParams`] if any `mean` is non-finite or any
    /// `std` is negative or non-finite.
    pub fn new(
        params:      &[TransitionParams; TransitionKind::COUNT],
        agent_count: usize,
        rng:         &mut SimRng,
    ) -> DiseaseResult<Self> {
        let mut thresholds = vec![[0.0_f64; TransitionKind::COUNT]; agent_count];

        for kind in TransitionKind::ALL {
            let p = params[kind.index()];
            // `Normal::new` accepts a negative std and mirrors it.
            if !p.mean.is_finite() || !p.std.is_finite() || p.std < 0.0 {
                return Err(DiseaseError::InvalidParams { kind, mean: p.mean, std: p.std });
            }
            let dist = Normal::new(p.mean, p.std)
                .map_err(|source| DiseaseError::Distribution { kind, source })?;

            let mut negative = 0usize;
            for row in thresholds.iter_mut() {
                let t: f64 = rng.sample(&dist);
                if t < 0.0 {
                    negative += 1;
                }
                row[kind.index()] = t;
            }
            if negative > 0 {
                log::debug!(
                    "{kind}: {negative} of {agent_count} sampled thresholds are negative \
                     (mean={}, std={}); those agents advance on their first eligible tick",
                    p.mean,
                    p.std
                );
            }
        }

        Ok(Self {
            thresholds,
            elapsed:            vec![0; agent_count],
            changed_externally: AgentMask::new(agent_count),
        })
    }

    /// Number of agents tracked.
    #[inline]
    pub fn len(&self) -> usize {
        self.elapsed.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elapsed.is_empty()
    }

    /// Ticks since `agent` last changed stage.
    #[inline]
    pub fn elapsed_ticks(&self, agent: AgentId) -> u64 {
        self.elapsed[agent.index()]
    }

    /// Force the counter of each listed agent to 0.
    ///
    /// Used for the `NotInfected → Infected` transition, which contagion
    /// drives rather than a threshold.  The agents are treated as having
    /// changed stage this tick: the next [`advance`](Self::advance) leaves
    /// their stage alone and their counter at 0.
    pub fn reset_counter(&mut self, agents: &[AgentId]) {
        for &a in agents {
            self.elapsed[a.index()] = 0;
            self.changed_externally.insert(a);
        }
    }

    /// Advance every qualifying agent by exactly one stage.
    ///
    /// An agent qualifies iff its stage has a time-driven exit and
    /// `elapsed > threshold` for that exit.  Agents that change stage have
    /// their counter reset to 0; every other counter increments by 1.
    ///
    /// # Errors
    ///
    /// [`DiseaseError::AgentCountMismatch`] if `current` is not one stage per
    /// tracked agent.
    pub fn advance(&mut self, current: &[Stage]) -> DiseaseResult<Vec<Stage>> {
        if current.len() != self.len() {
            return Err(DiseaseError::AgentCountMismatch {
                expected: self.len(),
                got:      current.len(),
                what:     "stage vector",
            });
        }

        let mut next = Vec::with_capacity(current.len());
        for (i, &stage) in current.iter().enumerate() {
            if self.changed_externally.as_slice()[i] {
                self.elapsed[i] = 0;
                next.push(stage);
                continue;
            }

            let qualifies = match stage.outgoing() {
                Some(kind) => self.elapsed[i] as f64 > self.thresholds[i][kind.index()],
                None => false,
            };

            if qualifies {
                let to = stage.next();
                log::trace!("agent {i}: {stage} -> {to} after {} ticks", self.elapsed[i]);
                self.elapsed[i] = 0;
                next.push(to);
            } else {
                self.elapsed[i] += 1;
                next.push(stage);
            }
        }

        self.changed_externally.clear();
        Ok(next)
    }
}
