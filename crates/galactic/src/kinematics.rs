//! Space velocities from the Galactic velocity ellipsoid.
//!
//! Velocities are drawn from a Gaussian ellipsoid around the differential
//! rotation curve (first-order Oort expansion), then decomposed into the
//! observables: proper motion in longitude and latitude, and radial
//! velocity.

use nalgebra::Vector3;
use rand::Rng;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::constants::ASTROMETRIC_K;
use crate::coordinates::SkyPosition;

/// Empirical asymmetric-drift divisor: the lag of the mean rotation behind
/// the local standard of rest scales as sigma_u^2 / 120.
const ASYMMETRIC_DRIFT_DIVISOR: f64 = 120.0;

/// Draw from N(mean, std_dev^2) using the Box-Muller transform.
pub fn sample_gaussian(rng: &mut ChaChaRng, mean: f64, std_dev: f64) -> f64 {
    if std_dev == 0.0 {
        return mean;
    }
    let u1: f64 = rng.random();
    let u2: f64 = rng.random();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
    mean + std_dev * z
}

/// Velocity-ellipsoid parameters for one population.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KinematicsModel {
    /// Velocity dispersions (sigma_u, sigma_v, sigma_w) in km/s.
    pub dispersions: Vector3<f64>,
    /// Solar peculiar velocity (u, v, w) in km/s.
    pub peculiar_solar: Vector3<f64>,
    /// Oort constant A in km/s/kpc.
    pub oort_a: f64,
    /// Oort constant B in km/s/kpc.
    pub oort_b: f64,
    /// Galactocentric distance of the Sun in kpc.
    pub solar_distance: f64,
}

/// Full space motion of one star: the (u, v, w) triple, set atomically,
/// plus its observable decomposition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceMotion {
    /// (u, v, w) in km/s.
    pub velocity: Vector3<f64>,
    /// Proper motion in galactic longitude, arcsec/yr.
    pub proper_motion_longitude: f64,
    /// Proper motion in galactic latitude, arcsec/yr.
    pub proper_motion_latitude: f64,
    /// Total proper motion, arcsec/yr.
    pub proper_motion: f64,
    /// Radial velocity, km/s.
    pub radial_velocity: f64,
}

impl KinematicsModel {
    /// Assign a space velocity to a star at cylindrical position (`r`,
    /// `theta`) seen at `sky`, and decompose it into observables.
    ///
    /// With all dispersions zero this is deterministic and reduces exactly
    /// to the rotation-curve plus peculiar-velocity value.
    pub fn assign(
        &self,
        r: f64,
        theta: f64,
        sky: &SkyPosition,
        rng: &mut ChaChaRng,
    ) -> SpaceMotion {
        let rotation =
            ((3.0 - 2.0 * r / self.solar_distance) * self.oort_a - self.oort_b) * r;

        let u = self.peculiar_solar.x
            + rotation * theta.sin()
            + sample_gaussian(rng, 0.0, self.dispersions.x);
        let v = self.peculiar_solar.y
            + rotation * theta.cos()
            - (self.oort_a - self.oort_b) * self.solar_distance
            + sample_gaussian(rng, 0.0, self.dispersions.y)
            - self.dispersions.x * self.dispersions.x / ASYMMETRIC_DRIFT_DIVISOR;
        let w = self.peculiar_solar.z + sample_gaussian(rng, 0.0, self.dispersions.z);

        decompose(Vector3::new(u, v, w), sky)
    }
}

/// Project a space velocity onto the observables at the given sky position.
pub fn decompose(velocity: Vector3<f64>, sky: &SkyPosition) -> SpaceMotion {
    let distance_pc = sky.distance * 1000.0;
    let k = 1.0 / (ASTROMETRIC_K * distance_pc);
    let (sin_l, cos_l) = sky.longitude.sin_cos();
    let (sin_b, cos_b) = sky.latitude.sin_cos();
    let (u, v, w) = (velocity.x, velocity.y, velocity.z);

    let proper_motion_longitude = k * (-u * sin_l + v * cos_l) / cos_b;
    let proper_motion_latitude =
        k * (-u * cos_l * sin_b - v * sin_b * sin_l + w * cos_b);
    let radial_velocity = u * cos_b * cos_l + v * cos_b * sin_l + w * sin_b;
    let proper_motion = (proper_motion_longitude * proper_motion_longitude
        + proper_motion_latitude * proper_motion_latitude)
        .sqrt();

    SpaceMotion {
        velocity,
        proper_motion_longitude,
        proper_motion_latitude,
        proper_motion,
        radial_velocity,
    }
}
