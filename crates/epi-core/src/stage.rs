//! Disease stages and the four time-driven transitions between them.
//!
//! ```text
//! NotInfected ─contagion→ Infected ─①→ Contagious ─②→ Diagnosed ─③→ Immobilized ─④→ Recovered
//! ```
//!
//! Only the first edge is driven by contact; ① … ④ fire when an agent's
//! elapsed ticks exceed its sampled threshold for that [`TransitionKind`].

use std::fmt;

use crate::EpiError;

// ── Stage ─────────────────────────────────────────────────────────────────────

/// An agent's point in the fixed disease progression.
///
/// The discriminant is the wire/integer code (`0..=5`) that renderers and
/// dashboards consume.  Ordering follows progression, so `a < b` means `a`
/// comes earlier in the disease.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Stage {
    #[default]
    NotInfected = 0,
    Infected    = 1,
    Contagious  = 2,
    Diagnosed   = 3,
    Immobilized = 4,
    Recovered   = 5,
}

impl Stage {
    /// Number of stages.
    pub const COUNT: usize = 6;

    /// All stages in progression order.
    pub const ALL: [Stage; Stage::COUNT] = [
        Stage::NotInfected,
        Stage::Infected,
        Stage::Contagious,
        Stage::Diagnosed,
        Stage::Immobilized,
        Stage::Recovered,
    ];

    /// Integer code `0..=5`.
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Position in [`Stage::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Can be infected by contact.
    #[inline]
    pub fn is_susceptible(self) -> bool {
        self == Stage::NotInfected
    }

    /// Capable of transmitting: `Infected ..= Immobilized`.
    #[inline]
    pub fn is_infectious(self) -> bool {
        matches!(
            self,
            Stage::Infected | Stage::Contagious | Stage::Diagnosed | Stage::Immobilized
        )
    }

    #[inline]
    pub fn is_recovered(self) -> bool {
        self == Stage::Recovered
    }

    /// The stage one step further along, saturating at `Recovered`.
    pub fn next(self) -> Stage {
        match self {
            Stage::NotInfected => Stage::Infected,
            Stage::Infected    => Stage::Contagious,
            Stage::Contagious  => Stage::Diagnosed,
            Stage::Diagnosed   => Stage::Immobilized,
            Stage::Immobilized => Stage::Recovered,
            Stage::Recovered   => Stage::Recovered,
        }
    }

    /// The time-driven transition leaving this stage, if any.
    ///
    /// `NotInfected` leaves by contagion and `Recovered` is terminal, so both
    /// return `None`.
    pub fn outgoing(self) -> Option<TransitionKind> {
        match self {
            Stage::Infected    => Some(TransitionKind::InfectedToContagious),
            Stage::Contagious  => Some(TransitionKind::ContagiousToDiagnosed),
            Stage::Diagnosed   => Some(TransitionKind::DiagnosedToImmobilized),
            Stage::Immobilized => Some(TransitionKind::ImmobilizedToRecovered),
            Stage::NotInfected | Stage::Recovered => None,
        }
    }

    /// Snake-case name used in logs and legends.
    pub fn label(self) -> &'static str {
        match self {
            Stage::NotInfected => "not_infected",
            Stage::Infected    => "infected",
            Stage::Contagious  => "contagious",
            Stage::Diagnosed   => "diagnosed",
            Stage::Immobilized => "immobilized",
            Stage::Recovered   => "recovered",
        }
    }
}

impl TryFrom<u8> for Stage {
    type Error = EpiError;

    fn try_from(code: u8) -> Result<Stage, EpiError> {
        Stage::ALL
            .get(code as usize)
            .copied()
            .ok_or(EpiError::InvalidStage(code))
    }
}

impl From<Stage> for u8 {
    #[inline]
    fn from(stage: Stage) -> u8 {
        stage.code()
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── TransitionKind ────────────────────────────────────────────────────────────

/// One of the four ordered, time-driven stage transitions.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionKind {
    InfectedToContagious,
    ContagiousToDiagnosed,
    DiagnosedToImmobilized,
    ImmobilizedToRecovered,
}

impl TransitionKind {
    pub const COUNT: usize = 4;

    pub const ALL: [TransitionKind; TransitionKind::COUNT] = [
        TransitionKind::InfectedToContagious,
        TransitionKind::ContagiousToDiagnosed,
        TransitionKind::DiagnosedToImmobilized,
        TransitionKind::ImmobilizedToRecovered,
    ];

    /// Column in the per-agent threshold row.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Stage the transition leaves.
    pub fn from_stage(self) -> Stage {
        match self {
            TransitionKind::InfectedToContagious   => Stage::Infected,
            TransitionKind::ContagiousToDiagnosed  => Stage::Contagious,
            TransitionKind::DiagnosedToImmobilized => Stage::Diagnosed,
            TransitionKind::ImmobilizedToRecovered => Stage::Immobilized,
        }
    }

    /// Stage the transition enters.
    #[inline]
    pub fn to_stage(self) -> Stage {
        self.from_stage().next()
    }
}

impl fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from_stage(), self.to_stage())
    }
}

// ── StageCounts ───────────────────────────────────────────────────────────────

/// Number of agents in each stage at one tick.
///
/// This is the aggregate a dashboard plots over time.  The counts always sum
/// to the population size.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StageCounts {
    counts: [usize; Stage::COUNT],
}

impl StageCounts {
    /// Tally a stage slice.  O(N).
    pub fn from_stages(stages: &[Stage]) -> Self {
        let mut counts = [0usize; Stage::COUNT];
        for &s in stages {
            counts[s.index()] += 1;
        }
        Self { counts }
    }

    #[inline]
    pub fn get(&self, stage: Stage) -> usize {
        self.counts[stage.index()]
    }

    /// Total agents counted.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Agents in `Infected ..= Immobilized`.
    pub fn infectious(&self) -> usize {
        Stage::ALL
            .iter()
            .filter(|s| s.is_infectious())
            .map(|&s| self.get(s))
            .sum()
    }

    /// `(stage, count)` pairs in progression order.
    pub fn iter(&self) -> impl Iterator<Item = (Stage, usize)> + '_ {
        Stage::ALL.iter().map(|&s| (s, self.get(s)))
    }
}

impl fmt::Display for StageCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (stage, n) in self.iter() {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            write!(f, "{stage}={n}")?;
        }
        Ok(())
    }
}
