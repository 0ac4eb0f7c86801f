//! Error type for the survey layer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SurveyError {
    /// A selection mode string that names no known mode.
    #[error("unknown selection mode: {0:?}")]
    UnknownMode(String),

    /// Bad binning or normalization parameters.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
