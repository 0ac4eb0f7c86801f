use std::f64::consts::{FRAC_PI_2, PI, TAU};

use approx::assert_relative_eq;

use crate::constants::{NGP_DECLINATION_DEG, NGP_RIGHT_ASCENSION_DEG};
use crate::coordinates::{
    cylindrical_from_sky, cylindrical_to_sky, galactic_to_equatorial,
};
use crate::trig::wrap_two_pi;

const SOLAR_DISTANCE: f64 = 8.5;

#[test]
fn observer_position_is_guarded() {
    // r = solar distance, theta = 0, z = 0 is the Sun itself: distance must
    // collapse to zero without any division blowing up.
    let sky = cylindrical_to_sky(SOLAR_DISTANCE, 0.0, 0.0, SOLAR_DISTANCE);
    assert!(sky.distance.abs() < 1e-9);
    assert_eq!(sky.latitude, 0.0);
    assert!(sky.longitude.is_finite());
    assert!(sky.right_ascension.is_finite());
    assert!(sky.declination.is_finite());
}

#[test]
fn star_straight_above_the_sun_sits_at_the_pole() {
    let sky = cylindrical_to_sky(SOLAR_DISTANCE, 0.0, 0.4, SOLAR_DISTANCE);
    assert_relative_eq!(sky.latitude, FRAC_PI_2);
    assert_relative_eq!(sky.distance, 0.4, max_relative = 1e-9);

    let below = cylindrical_to_sky(SOLAR_DISTANCE, 0.0, -0.4, SOLAR_DISTANCE);
    assert_relative_eq!(below.latitude, -FRAC_PI_2);
}

#[test]
fn sky_round_trip_recovers_galactic_coordinates() {
    // Both longitude hemispheres, both latitude signs.
    let cases = [
        (0.8, 0.3, 0.2),
        (1.5, 2.9, -0.6),
        (0.5, PI + 0.7, 0.45),
        (2.2, TAU - 0.2, -0.1),
    ];
    for &(distance, longitude, latitude) in &cases {
        let (r, theta, z) =
            cylindrical_from_sky(distance, longitude, latitude, SOLAR_DISTANCE);
        let sky = cylindrical_to_sky(r, theta, z, SOLAR_DISTANCE);
        assert_relative_eq!(sky.distance, distance, max_relative = 1e-9);
        assert_relative_eq!(sky.longitude, longitude, max_relative = 1e-9);
        assert_relative_eq!(sky.latitude, latitude, max_relative = 1e-9);
    }
}

#[test]
fn north_galactic_pole_maps_to_pole_constants() {
    let (right_ascension, declination) = galactic_to_equatorial(1.234, FRAC_PI_2);
    assert_relative_eq!(
        declination,
        NGP_DECLINATION_DEG.to_radians(),
        max_relative = 1e-9
    );
    assert_relative_eq!(
        right_ascension,
        NGP_RIGHT_ASCENSION_DEG.to_radians(),
        max_relative = 1e-9
    );
}

#[test]
fn galactic_center_lands_in_sagittarius() {
    let (right_ascension, declination) = galactic_to_equatorial(0.0, 0.0);
    // The l = b = 0 direction, in the B1950-pole frame these constants
    // encode: alpha ~ 266.4 deg, delta ~ -28.9 deg.
    assert_relative_eq!(right_ascension.to_degrees(), 266.44, epsilon = 0.1);
    assert_relative_eq!(declination.to_degrees(), -28.94, epsilon = 0.1);
}

#[test]
fn right_ascension_branches_agree_with_atan2() {
    // Sweep the sky: every quadrant of the (xs, xc) plane must agree with
    // the atan2 reference, not just the principal branch.
    let pole_declination = NGP_DECLINATION_DEG.to_radians();
    let position_angle = crate::constants::NGP_POSITION_ANGLE_DEG.to_radians();
    let pole_right_ascension = NGP_RIGHT_ASCENSION_DEG.to_radians();

    let mut branches_seen = [false; 4];
    for i in 0..36 {
        for j in 1..17 {
            let longitude = TAU * i as f64 / 36.0;
            let latitude = -FRAC_PI_2 + PI * j as f64 / 18.0;
            let (right_ascension, _) = galactic_to_equatorial(longitude, latitude);

            let offset = position_angle - longitude;
            let xs = latitude.cos() * offset.sin();
            let xc = pole_declination.cos() * latitude.sin()
                - pole_declination.sin() * latitude.cos() * offset.cos();
            let reference = wrap_two_pi(xs.atan2(xc) + pole_right_ascension);

            let index = match (xs >= 0.0, xc >= 0.0) {
                (true, true) => 0,
                (true, false) => 1,
                (false, false) => 2,
                (false, true) => 3,
            };
            branches_seen[index] = true;

            let difference = (right_ascension - reference).abs();
            let wrapped = difference.min(TAU - difference);
            assert!(
                wrapped < 1e-9,
                "RA mismatch at l={longitude} b={latitude}: {right_ascension} vs {reference}"
            );
        }
    }
    assert_eq!(branches_seen, [true; 4], "sweep failed to hit all quadrants");
}

#[test]
fn legacy_longitude_fold_adds_pi_past_the_anticenter_azimuth() {
    let near = cylindrical_to_sky(4.0, 0.5, 0.0, SOLAR_DISTANCE);
    let far = cylindrical_to_sky(4.0, 0.5 + PI, 0.0, SOLAR_DISTANCE);
    assert!(near.longitude <= PI);
    assert!(far.longitude > PI);
}
