//! Galactic geometry for white dwarf population synthesis.
//!
//! This crate contains the purely geometric and kinematic half of the
//! pipeline: exponential disk density profiles, analytic cone mass budgets,
//! the cylindrical-to-sky coordinate transform, and the velocity-ellipsoid
//! kinematics with differential rotation.

pub mod cone;
pub mod constants;
pub mod coordinates;
pub mod density;
pub mod kinematics;
pub mod trig;

#[cfg(test)]
mod cone_test;
#[cfg(test)]
mod coordinates_test;
#[cfg(test)]
mod density_test;

pub use cone::{cone_mass, ConeGeometry};
pub use coordinates::{cylindrical_from_sky, cylindrical_to_sky, SkyPosition};
pub use density::DiskProfile;
pub use kinematics::{KinematicsModel, SpaceMotion};

use thiserror::Error;

/// Configuration errors for the geometric model. All of these are reported
/// before any sampling begins.
#[derive(Debug, Error)]
pub enum GalacticError {
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("{name} range is empty: [{min}, {max}]")]
    EmptyRange {
        name: &'static str,
        min: f64,
        max: f64,
    },

    #[error("latitude range [{min}, {max}] exceeds [-pi/2, pi/2]")]
    LatitudeOutOfRange { min: f64, max: f64 },
}
