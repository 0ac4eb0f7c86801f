//! Fixed astronomical constants.

/// Declination of the north galactic pole, degrees (B1950 pole as used by
/// the classic transformation).
pub const NGP_DECLINATION_DEG: f64 = 27.128;

/// Right ascension of the north galactic pole, degrees.
pub const NGP_RIGHT_ASCENSION_DEG: f64 = 192.86;

/// Position angle of the galactic plane at the pole (theta_0), degrees.
pub const NGP_POSITION_ANGLE_DEG: f64 = 122.93;

/// Conversion factor between tangential velocity in km/s and proper motion:
/// v_t = 4.74 * mu[arcsec/yr] * d[pc].
pub const ASTROMETRIC_K: f64 = 4.74;
