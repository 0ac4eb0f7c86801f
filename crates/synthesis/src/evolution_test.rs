use approx::assert_relative_eq;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::evolution::{
    bolometric_magnitude, initial_final_mass, main_sequence_lifetime, sample_spectral_type,
    CoolingModel, MestelCooling,
};
use crate::star::SpectralType;

#[test]
fn lifetime_shrinks_with_mass() {
    assert_relative_eq!(main_sequence_lifetime(1.0), 10.0);
    assert!(main_sequence_lifetime(2.0) < main_sequence_lifetime(1.0));
    assert!(main_sequence_lifetime(8.0) < 0.1);
}

#[test]
fn ifmr_is_monotonic_and_continuous_enough() {
    assert_relative_eq!(initial_final_mass(1.0), 0.525);
    let mut previous = 0.0;
    for step in 0..90 {
        let mass = 1.0 + step as f64 * 0.1;
        let final_mass = initial_final_mass(mass);
        assert!(final_mass > previous, "IFMR not increasing at {}", mass);
        previous = final_mass;
    }
    // Stays below the Chandrasekhar limit over the progenitor range.
    assert!(initial_final_mass(8.0) < 1.44);
}

#[test]
fn bolometric_magnitude_is_a_pure_function_of_luminosity() {
    assert_relative_eq!(bolometric_magnitude(1.0), 4.75);
    assert_relative_eq!(bolometric_magnitude(1.0e-4), 14.75);
    assert_eq!(
        bolometric_magnitude(3.2e-5).to_bits(),
        bolometric_magnitude(3.2e-5).to_bits()
    );
}

#[test]
fn mestel_cooling_fades_with_time() {
    let cooling = MestelCooling;
    let young = cooling.luminosity(0.6, 0.5);
    let old = cooling.luminosity(0.6, 5.0);
    assert!(young > old);
    assert_relative_eq!(cooling.luminosity(0.6, 1.0), 1.0e-3, max_relative = 1e-12);
}

#[test]
fn apparent_magnitudes_follow_the_distance_modulus() {
    let cooling = MestelCooling;
    let near = cooling.apparent_magnitudes(0.6, 1.0e-3, 0.01); // 10 pc
    let far = cooling.apparent_magnitudes(0.6, 1.0e-3, 0.1); // 100 pc

    // 10x the distance is exactly +5 magnitudes in every band.
    assert_relative_eq!(far.v - near.v, 5.0, max_relative = 1e-9);
    assert_relative_eq!(far.b - near.b, 5.0, max_relative = 1e-9);
    // At 10 pc apparent equals absolute: V = Mbol - 0.25.
    assert_relative_eq!(near.v, bolometric_magnitude(1.0e-3) - 0.25, max_relative = 1e-9);
}

#[test]
fn spectral_type_split_is_roughly_eighty_twenty() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let da_count = (0..2000)
        .filter(|_| sample_spectral_type(&mut rng) == SpectralType::Da)
        .count();
    assert!(
        (1500..1900).contains(&da_count),
        "DA count {} far from the 80% split",
        da_count
    );
}
