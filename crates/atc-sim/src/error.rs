use atc_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("run configuration rejected: {0}")]
    Config(#[from] CoreError),

    #[error("failed to spawn actor task: {0}")]
    Spawn(#[from] std::io::Error),
}

pub type SimResult<T> = Result<T, SimError>;
