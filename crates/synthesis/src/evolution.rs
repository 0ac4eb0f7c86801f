//! Progenitor-to-white-dwarf evolution: main-sequence lifetimes, the
//! initial-final mass relation, and a simple analytic cooling model.
//!
//! Production runs substitute tabulated cooling tracks and color tables
//! through the [`CoolingModel`] seam; the built-in Mestel-style law exists
//! so the pipeline, demos and tests are self-contained.

use rand::Rng;
use rand_chacha::ChaChaRng;

use crate::star::{SpectralType, Ubvri};

/// Solar bolometric magnitude, the zero point of the magnitude scale.
const SOLAR_BOLOMETRIC_MAGNITUDE: f64 = 4.75;

/// Fraction of white dwarfs born with hydrogen-rich (DA) atmospheres.
const DA_FRACTION: f64 = 0.8;

/// Main-sequence lifetime in Gyr for a progenitor of `mass` solar masses;
/// power-law fit anchored to a 10 Gyr solar lifetime.
pub fn main_sequence_lifetime(mass: f64) -> f64 {
    10.0 * mass.powf(-2.5)
}

/// Initial-final mass relation, piecewise linear (Catalan et al. 2008).
pub fn initial_final_mass(mass: f64) -> f64 {
    if mass < 2.7 {
        0.096 * mass + 0.429
    } else {
        0.137 * mass + 0.318
    }
}

/// Bolometric magnitude from luminosity in solar luminosities.
pub fn bolometric_magnitude(luminosity: f64) -> f64 {
    SOLAR_BOLOMETRIC_MAGNITUDE - 2.5 * luminosity.log10()
}

/// Draw the atmosphere class.
pub fn sample_spectral_type(rng: &mut ChaChaRng) -> SpectralType {
    if rng.random::<f64>() < DA_FRACTION {
        SpectralType::Da
    } else {
        SpectralType::NonDa
    }
}

/// Seam for externally supplied cooling tracks and color lookup tables.
pub trait CoolingModel: Sync {
    /// Luminosity in solar luminosities after `cooling_time` Gyr for a
    /// white dwarf of `final_mass` solar masses.
    fn luminosity(&self, final_mass: f64, cooling_time: f64) -> f64;

    /// Apparent UBVRI magnitudes at heliocentric `distance` kpc.
    fn apparent_magnitudes(&self, final_mass: f64, luminosity: f64, distance: f64) -> Ubvri;
}

/// Mestel-style power-law cooling with a crude color sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct MestelCooling;

impl CoolingModel for MestelCooling {
    fn luminosity(&self, final_mass: f64, cooling_time: f64) -> f64 {
        // L proportional to M * t^(-7/5), normalized so a 0.6 solar-mass
        // dwarf shines at 1e-3 L_sun after 1 Gyr.
        let t = cooling_time.max(1e-4);
        (final_mass / 0.6) * 1e-3 * t.powf(-1.4)
    }

    fn apparent_magnitudes(&self, _final_mass: f64, luminosity: f64, distance: f64) -> Ubvri {
        let absolute = bolometric_magnitude(luminosity);
        // Fainter (cooler) dwarfs are redder; all colors keyed linearly to
        // the bolometric magnitude.
        let b_v = (0.12 * (absolute - 10.0)).clamp(-0.3, 1.6);
        let u_b = 0.5 * b_v - 0.1;
        let v_r = 0.6 * b_v;
        let r_i = 0.5 * b_v;
        let v_absolute = absolute - 0.25;

        let distance_pc = (distance * 1000.0).max(f64::MIN_POSITIVE);
        let modulus = 5.0 * distance_pc.log10() - 5.0;

        let v = v_absolute + modulus;
        Ubvri {
            u: v + b_v + u_b,
            b: v + b_v,
            v,
            r: v - v_r,
            i: v - v_r - r_i,
        }
    }
}
