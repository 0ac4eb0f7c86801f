use std::f64::consts::PI;

use approx::assert_relative_eq;

use crate::density::DiskProfile;

fn profile() -> DiskProfile {
    DiskProfile {
        scale_height: 0.25,
        solar_distance: 8.5,
        scale_length: 3.5,
    }
}

#[test]
fn validate_rejects_non_positive_parameters() {
    let mut bad = profile();
    bad.scale_height = 0.0;
    assert!(bad.validate().is_err());

    let mut bad = profile();
    bad.scale_length = -1.0;
    assert!(bad.validate().is_err());

    assert!(profile().validate().is_ok());
}

#[test]
fn density_is_positive_inside_the_disk() {
    let profile = profile();
    for &(d, l, b) in &[(0.1, 0.0, 0.0), (1.0, PI, 0.3), (2.5, 4.0, -0.8)] {
        assert!(profile.evaluate(d, l, b) > 0.0);
    }
}

#[test]
fn density_falls_away_from_the_plane() {
    let profile = profile();
    let in_plane = profile.evaluate(1.0, 0.5, 0.0);
    let above = profile.evaluate(1.0, 0.5, 0.4);
    let far_above = profile.evaluate(1.0, 0.5, 0.9);
    assert!(in_plane > above);
    assert!(above > far_above);
}

#[test]
fn density_favors_the_galactic_center_direction() {
    let profile = profile();
    // Same distance, same latitude: the line of sight toward the center
    // reaches smaller galactocentric radii than the anticenter.
    let toward = profile.evaluate(2.0, 0.0, 0.1);
    let away = profile.evaluate(2.0, PI, 0.1);
    assert!(toward > away);
}

#[test]
fn density_matches_closed_form_at_a_hand_point() {
    let profile = profile();
    // At l = 0, b = 0, d = 1: pole term 1, R = 8.5 - 1 = 7.5.
    let expected = 1.0 * (-7.5f64 / 3.5).exp();
    assert_relative_eq!(profile.evaluate(1.0, 0.0, 0.0), expected, max_relative = 1e-12);
}

#[test]
fn latitude_sign_is_irrelevant() {
    let profile = profile();
    assert_relative_eq!(
        profile.evaluate(1.3, 1.0, 0.35),
        profile.evaluate(1.3, 1.0, -0.35),
        max_relative = 1e-12
    );
}
