//! Initial mass function sampling.

use rand::Rng;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};

use crate::error::SynthesisError;

/// Single power-law IMF, p(m) proportional to m^exponent with a negative
/// exponent (Salpeter: -2.35).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImfParams {
    /// Lower progenitor mass bound, solar masses.
    pub min_mass: f64,
    /// Upper progenitor mass bound, solar masses.
    pub max_mass: f64,
    /// Power-law exponent, must be negative.
    pub exponent: f64,
    /// Attempt ceiling for the rejection loop.
    pub max_attempts: u32,
}

impl ImfParams {
    pub fn validate(&self) -> Result<(), SynthesisError> {
        if !(self.min_mass > 0.0) || self.max_mass <= self.min_mass {
            return Err(SynthesisError::InvalidConfig(format!(
                "IMF mass range [{}, {}] is empty or non-positive",
                self.min_mass, self.max_mass
            )));
        }
        if self.exponent >= 0.0 {
            return Err(SynthesisError::InvalidConfig(format!(
                "IMF exponent must be negative, got {}",
                self.exponent
            )));
        }
        if self.max_attempts == 0 {
            return Err(SynthesisError::InvalidConfig(
                "IMF attempt ceiling must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Rejection-sample one progenitor mass.
    ///
    /// The envelope is p(min_mass): the distribution's maximum, since the
    /// exponent is negative. A candidate mass drawn uniformly over the
    /// range is accepted when a uniform draw under the envelope falls below
    /// its probability.
    pub fn sample(&self, rng: &mut ChaChaRng) -> Result<f64, SynthesisError> {
        let envelope = self.min_mass.powf(self.exponent);
        for _ in 0..self.max_attempts {
            let mass = rng.random_range(self.min_mass..=self.max_mass);
            let threshold = rng.random_range(0.0..envelope);
            if threshold <= mass.powf(self.exponent) {
                return Ok(mass);
            }
        }
        Err(SynthesisError::RejectionExhausted {
            stage: "progenitor mass",
            attempts: self.max_attempts,
        })
    }
}
