//! Exponential disk number density.

use serde::{Deserialize, Serialize};

use crate::trig::law_of_cosines_side;
use crate::GalacticError;

/// Double-exponential disk profile parameters.
///
/// The same struct describes the thin disk, the thick disk and (with a
/// suitably large scale height) a spheroid-like halo; only the scale
/// parameters differ between populations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiskProfile {
    /// Vertical scale height in kpc.
    pub scale_height: f64,
    /// Galactocentric distance of the Sun in kpc.
    pub solar_distance: f64,
    /// Radial scale length of the disk in kpc.
    pub scale_length: f64,
}

impl DiskProfile {
    pub fn validate(&self) -> Result<(), GalacticError> {
        for (name, value) in [
            ("scale height", self.scale_height),
            ("solar distance", self.solar_distance),
            ("scale length", self.scale_length),
        ] {
            if !(value > 0.0) {
                return Err(GalacticError::NonPositive { name, value });
            }
        }
        Ok(())
    }

    /// Stellar number density at heliocentric distance `d` (kpc) toward
    /// galactic coordinates (`longitude`, `latitude`), in radians.
    ///
    /// The d^2 factor is the volume element of the pencil beam, folded in so
    /// that rejection sampling uniform in distance reproduces the density
    /// per unit volume.
    pub fn evaluate(&self, distance: f64, longitude: f64, latitude: f64) -> f64 {
        let pole_projection = distance * latitude.sin().abs();
        let plane_projection = distance * latitude.cos().abs();
        let galactocentric =
            law_of_cosines_side(plane_projection, self.solar_distance, longitude);

        distance
            * distance
            * (-pole_projection.abs() / self.scale_height).exp()
            * (-galactocentric.abs() / self.scale_length).exp()
    }
}
