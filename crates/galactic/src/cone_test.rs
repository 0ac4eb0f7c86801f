use approx::assert_relative_eq;

use crate::cone::{cone_mass, ConeGeometry};

fn geometry(latitude_min: f64, latitude_max: f64) -> ConeGeometry {
    ConeGeometry {
        longitude_min: 0.1,
        longitude_max: 0.3,
        latitude_min,
        latitude_max,
        height: 2.0,
        normalization_height: 1.5,
    }
}

/// Brute-force quadrature of rho0 * r^2 * exp(-r |sin b| / H) over the
/// patch, for checking the closed form.
fn quadrature(geometry: &ConeGeometry, scale_height: f64, rho0: f64) -> f64 {
    let steps = 4000;
    let db = (geometry.latitude_max - geometry.latitude_min) / steps as f64;
    let dr = geometry.normalization_height / steps as f64;
    let mut total = 0.0;
    for i in 0..steps {
        let b = geometry.latitude_min + (i as f64 + 0.5) * db;
        let mut radial = 0.0;
        for j in 0..steps {
            let r = (j as f64 + 0.5) * dr;
            radial += r * r * (-r * b.sin().abs() / scale_height).exp() * dr;
        }
        total += radial * b.cos() * db;
    }
    rho0 * (geometry.longitude_max - geometry.longitude_min) * total
}

#[test]
fn cone_mass_above_the_plane_matches_quadrature() {
    let geometry = geometry(0.2, 0.6);
    let analytic = cone_mass(&geometry, 0.25, 3.0e6);
    let numeric = quadrature(&geometry, 0.25, 3.0e6);
    assert_relative_eq!(analytic, numeric, max_relative = 1e-4);
}

#[test]
fn cone_mass_below_the_plane_matches_quadrature() {
    let geometry = geometry(-0.7, -0.1);
    let analytic = cone_mass(&geometry, 0.3, 1.0);
    let numeric = quadrature(&geometry, 0.3, 1.0);
    assert_relative_eq!(analytic, numeric, max_relative = 1e-4);
}

#[test]
fn cone_mass_straddling_the_plane_matches_quadrature() {
    let geometry = geometry(-0.25, 0.45);
    let analytic = cone_mass(&geometry, 0.25, 1.0);
    let numeric = quadrature(&geometry, 0.25, 1.0);
    assert_relative_eq!(analytic, numeric, max_relative = 1e-4);
}

#[test]
fn mirrored_bins_carry_equal_mass() {
    let above = cone_mass(&geometry(0.1, 0.5), 0.25, 1.0);
    let below = cone_mass(&geometry(-0.5, -0.1), 0.25, 1.0);
    assert_relative_eq!(above, below, max_relative = 1e-12);
}

#[test]
fn straddling_bin_is_the_sum_of_its_halves() {
    let whole = cone_mass(&geometry(-0.3, 0.4), 0.25, 1.0);
    let lower = cone_mass(&geometry(-0.3, -1e-14), 0.25, 1.0);
    let upper = cone_mass(&geometry(1e-14, 0.4), 0.25, 1.0);
    assert_relative_eq!(whole, lower + upper, max_relative = 1e-8);
}

#[test]
fn cone_mass_is_positive_and_grows_with_depth() {
    let shallow = cone_mass(&geometry(-0.2, 0.2), 0.25, 1.0);
    let mut deeper_geometry = geometry(-0.2, 0.2);
    deeper_geometry.normalization_height = 3.0;
    let deeper = cone_mass(&deeper_geometry, 0.25, 1.0);
    assert!(shallow > 0.0);
    assert!(deeper > shallow);
}

#[test]
fn validate_rejects_empty_and_out_of_range_boxes() {
    let mut bad = geometry(0.2, 0.6);
    bad.longitude_max = bad.longitude_min;
    assert!(bad.validate().is_err());

    let mut bad = geometry(0.6, 0.2);
    assert!(bad.validate().is_err());
    bad.latitude_min = -2.0;
    bad.latitude_max = 0.2;
    assert!(bad.validate().is_err());

    let mut bad = geometry(0.2, 0.6);
    bad.height = 0.0;
    assert!(bad.validate().is_err());

    assert!(geometry(0.2, 0.6).validate().is_ok());
}
