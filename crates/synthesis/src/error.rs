//! Error type for the synthesis pipeline.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SynthesisError {
    /// Bad run parameters, reported before any sampling begins.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// An accept/reject loop ran out of attempts. Unbounded retry is a
    /// correctness risk, so exhaustion is fatal: it means the density or
    /// mass parameters are pathological, not that the run was unlucky.
    #[error("rejection sampling for {stage} gave up after {attempts} attempts")]
    RejectionExhausted { stage: &'static str, attempts: u32 },

    #[error(transparent)]
    Galactic(#[from] galactic::GalacticError),
}
