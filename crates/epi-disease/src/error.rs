use epi_core::{EpiError, TransitionKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiseaseError {
    #[error(transparent)]
    Core(#[from] EpiError),

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("invalid dwell-time parameters for {kind}: mean={mean}, std={std}")]
    InvalidParams {
        kind: TransitionKind,
        mean: f64,
        std:  f64,
    },

    #[error("invalid dwell-time distribution for {kind}: {source}")]
    Distribution {
        kind:   TransitionKind,
        source: rand_distr::NormalError,
    },
}

pub type DiseaseResult<T> = Result<T, DiseaseError>;
