use thiserror::Error;

#[derive(Debug, Error)]
pub enum MobilityError {
    #[error("movement_scale must be finite and >= 0, got {0}")]
    InvalidScale(f64),

    #[error("{got} stages supplied for {expected} positions")]
    AgentCountMismatch { expected: usize, got: usize },
}

pub type MobilityResult<T> = Result<T, MobilityError>;
