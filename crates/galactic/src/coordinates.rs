//! Coordinate transforms between galactocentric cylindrical positions and
//! sky coordinates.
//!
//! The forward transform goes cylindrical (r, theta, z) -> galactic
//! (distance, l, b) -> equatorial (alpha, delta). The right-ascension
//! conversion resolves inverse-trig quadrant ambiguity with a four-branch
//! split on two auxiliary sign quantities; a wrong branch is off by a
//! multiple of pi, not a small numeric error, so the split is load-bearing.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use serde::{Deserialize, Serialize};

use crate::constants::{
    NGP_DECLINATION_DEG, NGP_POSITION_ANGLE_DEG, NGP_RIGHT_ASCENSION_DEG,
};
use crate::trig::{
    clamped_acos, clamped_asin, law_of_cosines_side, triangle_angle, wrap_two_pi,
};

/// Below this plane projection (kpc) the star sits at the observer's own
/// position and the latitude division is bypassed.
const PLANE_EPSILON: f64 = 1e-12;

/// Heliocentric sky coordinates of one star. Distance in kpc, all angles in
/// radians; longitude and right ascension in [0, 2*pi).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkyPosition {
    pub distance: f64,
    pub longitude: f64,
    pub latitude: f64,
    pub right_ascension: f64,
    pub declination: f64,
}

/// Transform a galactocentric cylindrical position to sky coordinates.
///
/// `r` and `z` in kpc, `theta` in radians measured at the galactic center
/// from the Sun's azimuth, `solar_distance` in kpc.
pub fn cylindrical_to_sky(r: f64, theta: f64, z: f64, solar_distance: f64) -> SkyPosition {
    let plane_projection = law_of_cosines_side(solar_distance, r, theta);
    let distance = (plane_projection * plane_projection + z * z).sqrt();

    // The triangle angle is a 0..pi principal value; stars past the
    // anticenter azimuth fold onto the 0..2pi range by adding pi.
    let mut longitude = triangle_angle(solar_distance, plane_projection, r);
    if theta > PI {
        longitude += PI;
    }
    let longitude = wrap_two_pi(longitude);

    let latitude = if plane_projection < PLANE_EPSILON {
        // Observer's own position: the star is at the pole, or at the
        // origin when z also vanishes. Never divide here.
        if z == 0.0 {
            0.0
        } else {
            FRAC_PI_2.copysign(z)
        }
    } else {
        (z / plane_projection).abs().atan().copysign(z)
    };

    let (right_ascension, declination) = galactic_to_equatorial(longitude, latitude);

    SkyPosition {
        distance,
        longitude,
        latitude,
        right_ascension,
        declination,
    }
}

/// Inverse of [`cylindrical_to_sky`]'s positional half: recover the
/// galactocentric cylindrical position from sampled galactic coordinates.
///
/// Exact inverse of the forward fold: longitudes past pi map back through
/// the mirrored triangle, so a round trip reproduces (distance, l, b).
pub fn cylindrical_from_sky(
    distance: f64,
    longitude: f64,
    latitude: f64,
    solar_distance: f64,
) -> (f64, f64, f64) {
    let plane_projection = distance * latitude.cos();
    let z = distance * latitude.sin();

    let principal = if longitude > PI {
        longitude - PI
    } else {
        longitude
    };
    let r = law_of_cosines_side(solar_distance, plane_projection, principal);
    let mut theta = triangle_angle(solar_distance, r, plane_projection);
    if longitude > PI {
        theta = TAU - theta;
    }
    (r, theta, z)
}

/// Convert galactic (l, b) to equatorial (right ascension, declination),
/// both in radians, using the fixed north-galactic-pole constants.
pub fn galactic_to_equatorial(longitude: f64, latitude: f64) -> (f64, f64) {
    let pole_declination = NGP_DECLINATION_DEG.to_radians();
    let pole_right_ascension = NGP_RIGHT_ASCENSION_DEG.to_radians();
    let position_angle = NGP_POSITION_ANGLE_DEG.to_radians();

    let (sin_b, cos_b) = latitude.sin_cos();
    let offset = position_angle - longitude;

    // Spherical law of cosines for the declination.
    let declination = clamped_asin(
        pole_declination.sin() * sin_b + pole_declination.cos() * cos_b * offset.cos(),
    );

    let cos_declination = declination.cos();
    if cos_declination.abs() < PLANE_EPSILON {
        // At the celestial pole right ascension is degenerate.
        return (0.0, declination);
    }

    let xs = cos_b * offset.sin() / cos_declination;
    let xc = (pole_declination.cos() * sin_b
        - pole_declination.sin() * cos_b * offset.cos())
        / cos_declination;

    // Quadrant resolution: each sign pair picks its own inverse-trig branch
    // and additive term.
    let hour_angle = if xs >= 0.0 && xc >= 0.0 {
        clamped_asin(xs)
    } else if xs >= 0.0 {
        clamped_acos(xc)
    } else if xc < 0.0 {
        PI - clamped_asin(xs)
    } else {
        TAU + clamped_asin(xs)
    };

    (wrap_two_pi(hour_angle + pole_right_ascension), declination)
}
