//! Synthetic SDSS photometry from Johnson-Cousins magnitudes.

use synthesis::star::Ubvri;

/// Jester et al. (2005) stellar transformation coefficients.
const G_FROM_BV_SLOPE: f64 = 0.60;
const G_OFFSET: f64 = -0.12;
const R_FROM_BV_SLOPE: f64 = -0.42;
const R_OFFSET: f64 = 0.11;
const RZ_FROM_RI_SLOPE: f64 = 1.72;
const RZ_OFFSET: f64 = -0.41;

/// Synthetic (g, z) magnitudes from UBVRI via the fixed linear transform.
pub fn synthetic_gz(photometry: &Ubvri) -> (f64, f64) {
    let b_v = photometry.b - photometry.v;
    let r_i = photometry.r - photometry.i;

    let g = photometry.v + G_FROM_BV_SLOPE * b_v + G_OFFSET;
    let r = photometry.v + R_FROM_BV_SLOPE * b_v + R_OFFSET;
    let z = r - (RZ_FROM_RI_SLOPE * r_i + RZ_OFFSET);
    (g, z)
}

/// Reduced proper motion: a luminosity proxy built from the apparent
/// magnitude and the total proper motion in arcsec/yr.
pub fn reduced_proper_motion(apparent: f64, proper_motion: f64) -> f64 {
    apparent + 5.0 * proper_motion.log10() + 5.0
}
