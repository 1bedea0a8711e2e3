//! The per-tick value handed to renderers and dashboards.

use epi_core::{AgentId, Position, Stage, StageCounts, Tick};

/// Positions and stages of every agent after one tick.
///
/// Both vectors are freshly allocated per tick and indexed by `AgentId`, so a
/// consumer may keep a snapshot for as long as it likes without aliasing the
/// engine's working state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub tick:      Tick,
    pub positions: Vec<Position>,
    pub stages:    Vec<Stage>,
}

impl Snapshot {
    /// Number of agents (constant across a run).
    #[inline]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    #[inline]
    pub fn position(&self, agent: AgentId) -> Position {
        self.positions[agent.index()]
    }

    #[inline]
    pub fn stage(&self, agent: AgentId) -> Stage {
        self.stages[agent.index()]
    }

    /// Stage tally for this tick.
    pub fn counts(&self) -> StageCounts {
        StageCounts::from_stages(&self.stages)
    }

    /// Stages as integer codes `0..=5`, the form plotting code consumes.
    pub fn stage_codes(&self) -> Vec<u8> {
        self.stages.iter().map(|s| s.code()).collect()
    }
}
