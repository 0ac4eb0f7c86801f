//! Pencil-beam cone geometry and its analytic mass normalization.
//!
//! The mass budget that stops spatial sampling is the closed-form integral
//! of `rho0 * r^2 * exp(-r*|sin b|/H)` over the cone's angular patch out to
//! the normalization height. Substituting `t = sin b` makes the latitude
//! integral elementary, and the result branches into exactly three cases
//! depending on where the latitude bin sits relative to the galactic plane.

use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, TAU};

use crate::GalacticError;

/// Angular box and depth of one observation cone. Angles in radians,
/// heights in kpc.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConeGeometry {
    pub longitude_min: f64,
    pub longitude_max: f64,
    pub latitude_min: f64,
    pub latitude_max: f64,
    /// Depth out to which positions are drawn.
    pub height: f64,
    /// Depth over which the progenitor mass budget is metered. Usually at
    /// or below `height`.
    pub normalization_height: f64,
}

impl ConeGeometry {
    pub fn validate(&self) -> Result<(), GalacticError> {
        if self.longitude_min >= self.longitude_max
            || self.longitude_min < 0.0
            || self.longitude_max > TAU
        {
            return Err(GalacticError::EmptyRange {
                name: "longitude",
                min: self.longitude_min,
                max: self.longitude_max,
            });
        }
        if self.latitude_min >= self.latitude_max {
            return Err(GalacticError::EmptyRange {
                name: "latitude",
                min: self.latitude_min,
                max: self.latitude_max,
            });
        }
        if self.latitude_min < -FRAC_PI_2 || self.latitude_max > FRAC_PI_2 {
            return Err(GalacticError::LatitudeOutOfRange {
                min: self.latitude_min,
                max: self.latitude_max,
            });
        }
        for (name, value) in [
            ("cone height", self.height),
            ("normalization height", self.normalization_height),
        ] {
            if !(value > 0.0) {
                return Err(GalacticError::NonPositive { name, value });
            }
        }
        Ok(())
    }
}

/// Antiderivative of the latitude integral: G(t) = integral of
/// `int_0^L r^2 exp(-r*u/H) dr` in `du` from 0 to t, for t = sin b >= 0.
///
/// With x = t*L/H this collapses to `H*L^2 * ((e^-x (x+1) - 1)/x^2 + 1/2)`;
/// the bracket tends to 0 as x -> 0, handled by its series expansion to keep
/// the quotient well conditioned.
fn mass_kernel(t: f64, height: f64, scale_height: f64) -> f64 {
    let x = t * height / scale_height;
    let bracket = if x < 1e-4 {
        x / 3.0 - x * x / 8.0
    } else {
        ((-x).exp() * (x + 1.0) - 1.0) / (x * x) + 0.5
    };
    scale_height * height * height * bracket
}

/// Analytic mass of the cone's normalization volume, used as the stopping
/// budget for spatial sampling.
///
/// Branches on the position of the latitude bin relative to the plane:
/// fully above, fully below, or straddling. The split matters: evaluating
/// the kernel with a signed argument would silently mis-normalize the whole
/// population.
pub fn cone_mass(geometry: &ConeGeometry, scale_height: f64, rho0: f64) -> f64 {
    let height = geometry.normalization_height;
    let t_low = geometry.latitude_min.sin();
    let t_high = geometry.latitude_max.sin();
    let kernel = |t: f64| mass_kernel(t, height, scale_height);

    let vertical = if t_low >= 0.0 && t_high >= 0.0 {
        // Fully above the plane.
        kernel(t_high) - kernel(t_low)
    } else if t_low <= 0.0 && t_high <= 0.0 {
        // Fully below the plane; mirror through t -> -t.
        kernel(-t_low) - kernel(-t_high)
    } else {
        // Straddles the plane; the two halves add.
        kernel(-t_low) + kernel(t_high)
    };

    rho0 * (geometry.longitude_max - geometry.longitude_min) * vertical
}
