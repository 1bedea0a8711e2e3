//! Index-aligned agent sets.

use epi_core::AgentId;

/// A boolean per agent; `mask[agent.index()]` is membership.
///
/// O(1) insert / remove / lookup, and iteration in ascending `AgentId` order.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AgentMask {
    bits:  Vec<bool>,
    count: usize,
}

impl AgentMask {
    /// An empty set over `len` agents.
    pub fn new(len: usize) -> Self {
        Self { bits: vec![false; len], count: 0 }
    }

    /// Membership decided by `pred(index)` for every agent.
    pub fn from_fn(len: usize, mut pred: impl FnMut(usize) -> bool) -> Self {
        let bits: Vec<bool> = (0..len).map(&mut pred).collect();
        let count = bits.iter().filter(|&&b| b).count();
        Self { bits, count }
    }

    /// Number of agents the mask covers (members or not).
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of members.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn contains(&self, agent: AgentId) -> bool {
        self.bits[agent.index()]
    }

    /// Add `agent`; returns `true` if it was not already a member.
    #[inline]
    pub fn insert(&mut self, agent: AgentId) -> bool {
        let slot = &mut self.bits[agent.index()];
        if *slot {
            return false;
        }
        *slot = true;
        self.count += 1;
        true
    }

    /// Remove `agent`; returns `true` if it was a member.
    #[inline]
    pub fn remove(&mut self, agent: AgentId) -> bool {
        let slot = &mut self.bits[agent.index()];
        if !*slot {
            return false;
        }
        *slot = false;
        self.count -= 1;
        true
    }

    /// Remove every member.
    pub fn clear(&mut self) {
        self.bits.iter_mut().for_each(|b| *b = false);
        self.count = 0;
    }

    /// Members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter(|(_, b)| **b)
            .map(|(i, _)| AgentId(i as u32))
    }

    /// Raw per-agent flags.
    #[inline]
    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }
}
