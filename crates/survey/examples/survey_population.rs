//! Generate a thin-disk cone, push it through the full selection function
//! and print the surviving star records plus the binned statistics.
//!
//! Usage: cargo run -p survey --example survey_population

use nalgebra::Vector3;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use galactic::cone::ConeGeometry;
use galactic::density::DiskProfile;
use galactic::kinematics::KinematicsModel;
use synthesis::history::HistoryParams;
use synthesis::imf::ImfParams;
use synthesis::{synthesize, GenerationParams, Population};

use survey::{
    aggregate, apply, cloud_points, luminosity_function, star_record, BinningConfig,
    CloudPoint, LuminosityConfig, SelectionLimits, SelectionMode,
};

fn main() {
    let params = GenerationParams {
        population: Population::ThinDisk,
        geometry: ConeGeometry {
            longitude_min: 0.4,
            longitude_max: 0.6,
            latitude_min: 0.5,
            latitude_max: 0.7,
            height: 0.6,
            normalization_height: 0.5,
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
        local_mass_density: 5.0e5,
        max_attempts: 100_000,
    };

    let limits = SelectionLimits {
        min_parallax: 0.005,
        min_declination: (-30.0_f64).to_radians(),
        max_velocity: 500.0,
        min_proper_motion: 0.16,
    };

    let mut rng = ChaChaRng::seed_from_u64(42);
    let stars = synthesize(&params, &mut rng).expect("generation failed");
    let (survivors, counters) = apply(stars, &limits, SelectionMode::Full);

    for star in &survivors {
        println!("{}", star_record(star));
    }

    let grid = BinningConfig {
        min_magnitude: 5.0,
        bin_size: 0.5,
        bins_count: 25,
    };
    let points: Vec<CloudPoint> = survivors.iter().flat_map(cloud_points).collect();
    let bins = aggregate(&grid, &points);

    eprintln!("{:?}", counters.summary());
    for bin in &bins {
        eprintln!(
            "bin {:2} ({}) mbol {:5.2}: mean {:7.2} std {:6.2} n {}",
            bin.index,
            bin.axis.name(),
            bin.magnitude,
            bin.mean,
            bin.std,
            bin.count
        );
    }

    let mut counts = vec![0usize; grid.bins_count];
    for star in &survivors {
        if let Some(index) = grid.bin_index(star.bolometric_magnitude) {
            counts[index] += 1;
        }
    }
    let luminosity = LuminosityConfig {
        reference_volume: 400.0,
        trusted_bins: [15, 16, 17],
        reference_trusted_count: 1.0e-3,
    };
    let function =
        luminosity_function(&luminosity, &grid, &counts).expect("bad luminosity config");
    for point in function.iter().filter(|p| p.count > 0) {
        eprintln!(
            "lf mbol {:5.2}: log n {:7.3} [{:7.3}, {:7.3}] from {} stars",
            point.magnitude, point.log_count, point.log_lower, point.log_upper, point.count
        );
    }
}
