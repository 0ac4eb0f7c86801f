//! Generate a thin-disk white dwarf cone and print one CSV row per star.
//!
//! Usage: cargo run -p synthesis --example generate_population

use nalgebra::Vector3;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use galactic::cone::ConeGeometry;
use galactic::density::DiskProfile;
use galactic::kinematics::KinematicsModel;
use synthesis::history::HistoryParams;
use synthesis::imf::ImfParams;
use synthesis::{synthesize, GenerationParams, Population};

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

    let mut rng = ChaChaRng::seed_from_u64(42);
    let stars = synthesize(&params, &mut rng).expect("generation failed");

    println!("mbol,distance_kpc,l_deg,b_deg,ra_deg,dec_deg,pm_arcsec_yr,vrad_km_s,type,population");
    for star in &stars {
        println!(
            "{:.3},{:.4},{:.3},{:.3},{:.3},{:.3},{:.5},{:.2},{},{}",
            star.bolometric_magnitude,
            star.sky.distance,
            star.sky.longitude.to_degrees(),
            star.sky.latitude.to_degrees(),
            star.sky.right_ascension.to_degrees(),
            star.sky.declination.to_degrees(),
            star.motion.proper_motion,
            star.motion.radial_velocity,
            star.spectral_type.tag(),
            star.population.tag(),
        );
    }

    eprintln!("Generated {} white dwarfs", stars.len());
}
