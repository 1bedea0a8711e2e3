//! Core agent storage: `Population`.
//!
//! Every `Vec` field has exactly `count` elements and the `AgentId` value is
//! the index into all of them:
//!
//! ```ignore
//! let pos = population.positions[agent.index()];  // O(1), cache-friendly
//! ```
//!
//! Agents are never created or destroyed after build, so the arrays keep
//! their length for the whole run.

use epi_core::{AgentId, Position, Stage, StageCounts};

/// Structure-of-Arrays storage for the observable agent state.
///
/// Private disease bookkeeping (elapsed counters, sampled thresholds) lives
/// in `epi-disease`, not here.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Population {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Current position, unconstrained.
    pub positions: Vec<Position>,

    /// Current disease stage.
    pub stages: Vec<Stage>,
}

impl Population {
    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        AgentId::range(self.count)
    }

    #[inline]
    pub fn position(&self, agent: AgentId) -> Position {
        self.positions[agent.index()]
    }

    #[inline]
    pub fn stage(&self, agent: AgentId) -> Stage {
        self.stages[agent.index()]
    }

    /// Agents currently in an infectious stage, ascending.
    pub fn infectious_ids(&self) -> Vec<AgentId> {
        self.agent_ids()
            .filter(|a| self.stages[a.index()].is_infectious())
            .collect()
    }

    /// Stage tally for the whole population.
    pub fn counts(&self) -> StageCounts {
        StageCounts::from_stages(&self.stages)
    }

    // ── Package-private constructor used by PopulationBuilder ─────────────

    pub(crate) fn new(positions: Vec<Position>, stages: Vec<Stage>) -> Self {
        debug_assert_eq!(positions.len(), stages.len());
        Self {
            count: positions.len(),
            positions,
            stages,
        }
    }
}
