use epi_core::EpiError;
use epi_disease::DiseaseError;
use epi_mobility::MobilityError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] EpiError),

    #[error("disease model error: {0}")]
    Disease(#[from] DiseaseError),

    #[error("mobility error: {0}")]
    Mobility(#[from] MobilityError),
}

pub type SimResult<T> = Result<T, SimError>;
