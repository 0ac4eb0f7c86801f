//! Generation pipeline: sample positions, then enrich each star in place
//! with sky coordinates, kinematics and white dwarf evolution.

use nalgebra::Vector3;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use galactic::cone::ConeGeometry;
use galactic::coordinates::cylindrical_to_sky;
use galactic::density::DiskProfile;
use galactic::kinematics::KinematicsModel;

use crate::error::SynthesisError;
use crate::evolution::{self, CoolingModel, MestelCooling};
use crate::history::HistoryParams;
use crate::imf::ImfParams;
use crate::spatial::SpatialSampler;
use crate::star::{Population, Star};

/// Everything one generation run needs. Validated as a whole before any
/// sampling begins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationParams {
    pub population: Population,
    pub geometry: ConeGeometry,
    pub profile: DiskProfile,
    pub imf: ImfParams,
    pub history: HistoryParams,
    pub kinematics: KinematicsModel,
    /// Local mass density normalizing the cone mass budget.
    pub local_mass_density: f64,
    /// Attempt ceiling for the spatial accept/reject loop.
    pub max_attempts: u32,
}

impl GenerationParams {
    pub fn validate(&self) -> Result<(), SynthesisError> {
        self.geometry.validate()?;
        self.profile.validate()?;
        self.imf.validate()?;
        self.history.validate()?;
        if !(self.local_mass_density > 0.0) {
            return Err(SynthesisError::InvalidConfig(format!(
                "local mass density must be positive, got {}",
                self.local_mass_density
            )));
        }
        if self.max_attempts == 0 {
            return Err(SynthesisError::InvalidConfig(
                "attempt ceiling must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Identity and provenance of one generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: Uuid,
    /// Seed of the random stream that produced this batch.
    pub seed: u64,
    pub params: GenerationParams,
}

/// Generate one cone with the built-in analytic cooling model.
pub fn synthesize(
    params: &GenerationParams,
    rng: &mut ChaChaRng,
) -> Result<Vec<Star>, SynthesisError> {
    synthesize_with(params, &MestelCooling, rng)
}

/// Generate one cone, evolving white dwarfs through `cooling`.
///
/// Progenitors that have not yet left the main sequence are dropped from
/// the output; their mass still counted toward the cone budget, since the
/// budget calibrates the formed population, not the observable one.
pub fn synthesize_with<C: CoolingModel>(
    params: &GenerationParams,
    cooling: &C,
    rng: &mut ChaChaRng,
) -> Result<Vec<Star>, SynthesisError> {
    params.validate()?;
    let birth_cdf = params.history.cdf(params.population)?;

    let sampler = SpatialSampler::new(
        params.geometry,
        params.profile,
        params.population,
        params.imf,
        birth_cdf,
        params.local_mass_density,
        params.max_attempts,
        rng,
    )?;
    let mut stars = sampler.collect::<Result<Vec<Star>, SynthesisError>>()?;

    for star in &mut stars {
        enrich(star, params, cooling, rng);
    }
    let sampled = stars.len();
    stars.retain(|star| star.cooling_time > 0.0);
    log::debug!(
        "cone produced {} white dwarfs from {sampled} progenitors",
        stars.len()
    );
    Ok(stars)
}

/// Generate several cones in parallel. Cone `i` draws from its own stream
/// seeded `base_seed + i`, so a run is reproducible regardless of how the
/// worker pool schedules it.
pub fn synthesize_cones(
    params_list: &[GenerationParams],
    base_seed: u64,
) -> Result<Vec<(Group, Vec<Star>)>, SynthesisError> {
    params_list
        .par_iter()
        .enumerate()
        .map(|(index, params)| {
            let seed = base_seed.wrapping_add(index as u64);
            let mut rng = ChaChaRng::seed_from_u64(seed);
            let stars = synthesize(params, &mut rng)?;
            let group = Group {
                id: Uuid::new_v4(),
                seed,
                params: params.clone(),
            };
            Ok((group, stars))
        })
        .collect()
}

/// Fill in every field downstream of the sampled position. The star record
/// is enriched, never replaced.
fn enrich<C: CoolingModel>(
    star: &mut Star,
    params: &GenerationParams,
    cooling: &C,
    rng: &mut ChaChaRng,
) {
    let sky = cylindrical_to_sky(star.r, star.theta, star.z, params.profile.solar_distance);
    let (sin_b, cos_b) = sky.latitude.sin_cos();
    let (sin_l, cos_l) = sky.longitude.sin_cos();
    star.cartesian = Vector3::new(
        sky.distance * cos_b * cos_l,
        sky.distance * cos_b * sin_l,
        sky.distance * sin_b,
    );
    star.sky = sky;
    star.motion = params.kinematics.assign(star.r, star.theta, &star.sky, rng);

    star.final_mass = evolution::initial_final_mass(star.progenitor_mass);
    let total_age = params.history.galaxy_age - star.birth_time;
    star.cooling_time = total_age - evolution::main_sequence_lifetime(star.progenitor_mass);
    if star.cooling_time > 0.0 {
        star.spectral_type = evolution::sample_spectral_type(rng);
        star.luminosity = cooling.luminosity(star.final_mass, star.cooling_time);
        star.bolometric_magnitude = evolution::bolometric_magnitude(star.luminosity);
        star.photometry =
            cooling.apparent_magnitudes(star.final_mass, star.luminosity, star.sky.distance);
    }
}
