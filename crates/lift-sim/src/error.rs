use lift_core::{LiftError, PassengerId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] LiftError),

    #[error("pre-seeded passenger {id} rejected: {source}")]
    SeedRejected {
        id:     PassengerId,
        source: LiftError,
    },
}

pub type SimResult<T> = Result<T, SimError>;
