//! The Star record and its population tags.
//!
//! A `Star` is created positioned by the spatial sampler and then enriched
//! in place by the later passes; the observational fields below the
//! position block stay at their zero defaults until the pass that owns them
//! runs.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use galactic::coordinates::SkyPosition;
use galactic::kinematics::SpaceMotion;

/// Galactic population a star belongs to. Exactly one per star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Population {
    ThinDisk,
    ThickDisk,
    Halo,
}

impl Population {
    /// Short tag used in flat output records.
    pub fn tag(&self) -> &'static str {
        match self {
            Population::ThinDisk => "thin",
            Population::ThickDisk => "thick",
            Population::Halo => "halo",
        }
    }
}

/// White dwarf atmosphere class: hydrogen-rich DA or everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpectralType {
    Da,
    NonDa,
}

impl SpectralType {
    pub fn tag(&self) -> &'static str {
        match self {
            SpectralType::Da => "DA",
            SpectralType::NonDa => "nonDA",
        }
    }
}

/// Apparent Johnson-Cousins magnitudes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Ubvri {
    pub u: f64,
    pub b: f64,
    pub v: f64,
    pub r: f64,
    pub i: f64,
}

/// One synthetic white dwarf (or its progenitor, before the evolution pass
/// decides it has had time to become one).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Star {
    /// Progenitor mass in solar masses.
    pub progenitor_mass: f64,
    /// Birth time in Gyr since galaxy formation.
    pub birth_time: f64,
    pub population: Population,

    /// Galactocentric cylindrical radius, kpc.
    pub r: f64,
    /// Galactocentric azimuth measured from the Sun's azimuth, radians.
    pub theta: f64,
    /// Height above the plane, kpc.
    pub z: f64,

    /// Heliocentric cartesian position, kpc. Filled by the transform pass.
    pub cartesian: Vector3<f64>,
    /// Sky coordinates. Filled by the transform pass.
    pub sky: SkyPosition,
    /// Space motion, the (u, v, w) triple set atomically with its
    /// observable decomposition. Filled by the kinematic pass.
    pub motion: SpaceMotion,

    /// Apparent UBVRI magnitudes. Filled by the cooling model.
    pub photometry: Ubvri,
    /// Luminosity in solar luminosities. Filled by the cooling model.
    pub luminosity: f64,
    /// Bolometric magnitude, a pure function of the luminosity.
    pub bolometric_magnitude: f64,
    pub spectral_type: SpectralType,
    /// White dwarf mass from the initial-final mass relation, solar masses.
    pub final_mass: f64,
    /// Time spent cooling as a white dwarf, Gyr. Non-positive means the
    /// progenitor is still on the main sequence.
    pub cooling_time: f64,
}

impl Star {
    /// A freshly sampled, positioned progenitor. Everything downstream of
    /// the position block starts zeroed and is filled by enrichment.
    pub fn new(
        progenitor_mass: f64,
        birth_time: f64,
        population: Population,
        r: f64,
        theta: f64,
        z: f64,
    ) -> Self {
        Self {
            progenitor_mass,
            birth_time,
            population,
            r,
            theta,
            z,
            cartesian: Vector3::zeros(),
            sky: SkyPosition::default(),
            motion: SpaceMotion::default(),
            photometry: Ubvri::default(),
            luminosity: 0.0,
            bolometric_magnitude: 0.0,
            spectral_type: SpectralType::Da,
            final_mass: 0.0,
            cooling_time: 0.0,
        }
    }
}
