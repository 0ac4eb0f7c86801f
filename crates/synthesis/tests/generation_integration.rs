//! Integration tests for the full generation pipeline.

use nalgebra::Vector3;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use galactic::cone::ConeGeometry;
use galactic::density::DiskProfile;
use galactic::kinematics::KinematicsModel;
use synthesis::history::HistoryParams;
use synthesis::imf::ImfParams;
use synthesis::{synthesize, synthesize_cones, GenerationParams, Population, SynthesisError};

fn thin_disk_params() -> GenerationParams {
    GenerationParams {
        population: Population::ThinDisk,
        geometry: ConeGeometry {
            longitude_min: 0.5,
            longitude_max: 0.7,
            latitude_min: 0.3,
            latitude_max: 0.5,
            height: 0.5,
            normalization_height: 0.4,
        },
        profile: DiskProfile {
            scale_height: 0.25,
            solar_distance: 8.5,
            scale_length: 3.5,
        },
        imf: ImfParams {
            min_mass: 0.8,
            max_mass: 10.0,
            exponent: -2.35,
            max_attempts: 10_000,
        },
        history: HistoryParams {
            galaxy_age: 13.0,
            thin_onset: 0.0,
            burst_start: 12.4,
            burst_strength: 5.0,
            thick_shift: 1.0,
            thick_tau: 2.0,
            halo_start: 0.0,
            halo_end: 1.5,
        },
        kinematics: KinematicsModel {
            dispersions: Vector3::new(32.4, 23.0, 18.1),
            peculiar_solar: Vector3::new(-8.5, -13.38, -3.7),
            oort_a: 14.4,
            oort_b: -12.8,
            solar_distance: 8.5,
        },
        local_mass_density: 1.5e5,
        max_attempts: 100_000,
    }
}

#[test]
fn full_generation_produces_enriched_white_dwarfs() {
    let params = thin_disk_params();
    let mut rng = ChaChaRng::seed_from_u64(42);
    let stars = synthesize(&params, &mut rng).unwrap();
    assert!(!stars.is_empty(), "cone produced no white dwarfs");

    for star in &stars {
        // Only stars past their main-sequence lifetime survive the pass.
        assert!(star.cooling_time > 0.0);
        assert!(star.final_mass > 0.0);
        assert!(star.final_mass < star.progenitor_mass);
        assert!(star.luminosity > 0.0);
        assert!(star.bolometric_magnitude.is_finite());

        // Sky block was filled in.
        assert!(star.sky.distance > 0.0);
        assert!(star.sky.distance <= params.geometry.height);
        assert!(star.sky.declination.is_finite());

        // Cartesian position is consistent with the sky coordinates.
        assert!((star.cartesian.norm() - star.sky.distance).abs() < 1e-9);

        // Velocity triple and its decomposition are set together.
        assert!(star.motion.velocity.norm() > 0.0);
        assert!(star.motion.proper_motion >= 0.0);
        assert!(star.motion.radial_velocity.is_finite());
    }
}

#[test]
fn fixed_seed_reproduces_a_full_run() {
    let params = thin_disk_params();
    let mut rng_a = ChaChaRng::seed_from_u64(7);
    let mut rng_b = ChaChaRng::seed_from_u64(7);
    let run_a = synthesize(&params, &mut rng_a).unwrap();
    let run_b = synthesize(&params, &mut rng_b).unwrap();
    assert_eq!(run_a, run_b);
}

#[test]
fn parallel_cones_match_their_sequential_streams() {
    let mut high_latitude = thin_disk_params();
    high_latitude.geometry.latitude_min = -0.5;
    high_latitude.geometry.latitude_max = -0.3;
    let cones = vec![thin_disk_params(), high_latitude];

    let parallel = synthesize_cones(&cones, 1000).unwrap();
    assert_eq!(parallel.len(), 2);

    for (index, (group, stars)) in parallel.iter().enumerate() {
        assert_eq!(group.seed, 1000 + index as u64);
        let mut rng = ChaChaRng::seed_from_u64(group.seed);
        let sequential = synthesize(&cones[index], &mut rng).unwrap();
        assert_eq!(*stars, sequential);
    }
}

#[test]
fn invalid_parameters_fail_before_sampling() {
    let mut bad = thin_disk_params();
    bad.profile.scale_height = -0.25;
    let mut rng = ChaChaRng::seed_from_u64(1);
    assert!(synthesize(&bad, &mut rng).is_err());

    let mut bad = thin_disk_params();
    bad.local_mass_density = 0.0;
    let mut rng = ChaChaRng::seed_from_u64(1);
    assert!(matches!(
        synthesize(&bad, &mut rng),
        Err(SynthesisError::InvalidConfig(_))
    ));
}
