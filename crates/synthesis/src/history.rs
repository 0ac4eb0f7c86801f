//! Star-formation history sampling, one rate law per population.
//!
//! None of the rate laws needs symbolic inversion: each cumulative
//! distribution is tabulated once on a fixed grid and inverted by binary
//! search plus linear interpolation, which keeps the sampler exactly
//! reproducible under a fixed seed.

use rand::Rng;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};

use crate::error::SynthesisError;
use crate::star::Population;

/// Grid resolution for the tabulated cumulative distributions.
const CDF_GRID_POINTS: usize = 1000;

/// Parameters of the three population formation histories. Times in Gyr
/// since galaxy formation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryParams {
    /// Age of the galaxy; birth times run over [0, galaxy_age].
    pub galaxy_age: f64,
    /// Thin disk: time at which star formation switches on.
    pub thin_onset: f64,
    /// Thin disk: start of the late burst window.
    pub burst_start: f64,
    /// Thin disk: rate multiplier inside the burst window.
    pub burst_strength: f64,
    /// Thick disk: formation delay before the rate rises.
    pub thick_shift: f64,
    /// Thick disk: e-folding timescale of the declining rate.
    pub thick_tau: f64,
    /// Halo: start of the uniform formation window.
    pub halo_start: f64,
    /// Halo: end of the uniform formation window.
    pub halo_end: f64,
}

impl HistoryParams {
    pub fn validate(&self) -> Result<(), SynthesisError> {
        if !(self.galaxy_age > 0.0) {
            return Err(SynthesisError::InvalidConfig(format!(
                "galaxy age must be positive, got {}",
                self.galaxy_age
            )));
        }
        if self.thin_onset < 0.0
            || self.burst_start < self.thin_onset
            || self.burst_start > self.galaxy_age
        {
            return Err(SynthesisError::InvalidConfig(format!(
                "thin disk windows (onset {}, burst {}) must sit inside [0, {}]",
                self.thin_onset, self.burst_start, self.galaxy_age
            )));
        }
        if !(self.burst_strength > 0.0) || !(self.thick_tau > 0.0) {
            return Err(SynthesisError::InvalidConfig(
                "burst strength and thick disk tau must be positive".into(),
            ));
        }
        if self.halo_start < 0.0 || self.halo_end <= self.halo_start {
            return Err(SynthesisError::InvalidConfig(format!(
                "halo window [{}, {}] is empty",
                self.halo_start, self.halo_end
            )));
        }
        Ok(())
    }

    /// Star-formation rate for one population at time `t`, in arbitrary
    /// units; only the shape matters, the CDF normalizes it away.
    pub fn rate(&self, population: Population, t: f64) -> f64 {
        match population {
            Population::ThinDisk => {
                if t < self.thin_onset {
                    0.0
                } else if t < self.burst_start {
                    1.0
                } else {
                    self.burst_strength
                }
            }
            Population::ThickDisk => {
                let offset = t - self.thick_shift;
                if offset <= 0.0 {
                    0.0
                } else {
                    offset * (-offset / self.thick_tau).exp()
                }
            }
            Population::Halo => {
                if t >= self.halo_start && t <= self.halo_end {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }

    /// Tabulate the birth-time CDF for one population.
    pub fn cdf(&self, population: Population) -> Result<TabulatedCdf, SynthesisError> {
        self.validate()?;
        TabulatedCdf::from_rate(0.0, self.galaxy_age, CDF_GRID_POINTS, |t| {
            self.rate(population, t)
        })
    }
}

/// A cumulative distribution tabulated on an equidistant grid, inverted by
/// binary search plus linear interpolation.
#[derive(Debug, Clone, PartialEq)]
pub struct TabulatedCdf {
    start: f64,
    step: f64,
    cumulative: Vec<f64>,
}

impl TabulatedCdf {
    /// Accumulate `rate` over [start, end] with the trapezoid rule and
    /// normalize. A rate that integrates to zero is a configuration error.
    pub fn from_rate(
        start: f64,
        end: f64,
        points: usize,
        rate: impl Fn(f64) -> f64,
    ) -> Result<Self, SynthesisError> {
        let step = (end - start) / points as f64;
        let mut cumulative = Vec::with_capacity(points + 1);
        cumulative.push(0.0);
        let mut previous = rate(start);
        let mut running = 0.0;
        for i in 1..=points {
            let current = rate(start + i as f64 * step);
            running += 0.5 * (previous + current) * step;
            cumulative.push(running);
            previous = current;
        }

        let total = running;
        if !(total > 0.0) {
            return Err(SynthesisError::InvalidConfig(
                "star-formation rate integrates to zero over the window".into(),
            ));
        }
        for value in &mut cumulative {
            *value /= total;
        }

        Ok(Self {
            start,
            step,
            cumulative,
        })
    }

    /// Invert the CDF at quantile `q` in [0, 1).
    pub fn invert(&self, q: f64) -> f64 {
        let q = q.clamp(0.0, 1.0);
        let upper = self.cumulative.partition_point(|&c| c < q);
        if upper == 0 {
            return self.start;
        }
        let upper = upper.min(self.cumulative.len() - 1);
        let lower = upper - 1;

        let span = self.cumulative[upper] - self.cumulative[lower];
        // A flat segment of the rate law collapses to its left edge.
        let fraction = if span > 0.0 {
            (q - self.cumulative[lower]) / span
        } else {
            0.0
        };
        self.start + (lower as f64 + fraction) * self.step
    }

    /// Draw one birth time.
    pub fn sample(&self, rng: &mut ChaChaRng) -> f64 {
        self.invert(rng.random())
    }
}
