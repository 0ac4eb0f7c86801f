//! Rejection sampling of positioned progenitors inside an observation cone.
//!
//! Generation is a lazy sequence: the sampler is an iterator that draws an
//! angular direction, draws a radial distance, tests the acceptance ratio
//! against a precomputed density envelope, and hands out one star per
//! acceptance. The only exit condition is the mass budget: once the
//! cumulative progenitor mass accepted inside the normalization depth
//! exceeds the analytic cone mass, the sequence ends.

use rand::Rng;
use rand_chacha::ChaChaRng;

use galactic::cone::{cone_mass, ConeGeometry};
use galactic::coordinates::cylindrical_from_sky;
use galactic::density::DiskProfile;

use crate::error::SynthesisError;
use crate::history::TabulatedCdf;
use crate::imf::ImfParams;
use crate::star::{Population, Star};

/// Equal distance steps scanned when bounding the density along a line of
/// sight.
const ENVELOPE_STEPS: usize = 1000;

/// Inflation applied to the scanned maximum so the envelope strictly
/// dominates the density everywhere in the cone. Empirical legacy value.
const ENVELOPE_SAFETY: f64 = 1.1;

/// Phases of the accept/reject cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    DrawingAngle,
    DrawingRadius {
        longitude: f64,
        latitude: f64,
    },
    TestingAccept {
        longitude: f64,
        latitude: f64,
        distance: f64,
    },
    Exhausted,
}

/// Lazy generator of positioned progenitors for one cone and population.
///
/// Owns exactly two pieces of run state: the cumulative mass accumulator
/// and the precomputed envelope. Neither is shared across cones, so
/// independent cones parallelize freely.
pub struct SpatialSampler<'a> {
    geometry: ConeGeometry,
    profile: DiskProfile,
    population: Population,
    imf: ImfParams,
    birth_cdf: TabulatedCdf,
    rng: &'a mut ChaChaRng,
    max_density: f64,
    target_mass: f64,
    accumulated_mass: f64,
    max_attempts: u32,
    rejected_attempts: u32,
    phase: Phase,
}

impl<'a> SpatialSampler<'a> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        geometry: ConeGeometry,
        profile: DiskProfile,
        population: Population,
        imf: ImfParams,
        birth_cdf: TabulatedCdf,
        local_mass_density: f64,
        max_attempts: u32,
        rng: &'a mut ChaChaRng,
    ) -> Result<Self, SynthesisError> {
        geometry.validate()?;
        profile.validate()?;
        imf.validate()?;
        if !(local_mass_density > 0.0) {
            return Err(SynthesisError::InvalidConfig(format!(
                "local mass density must be positive, got {local_mass_density}"
            )));
        }
        if max_attempts == 0 {
            return Err(SynthesisError::InvalidConfig(
                "spatial attempt ceiling must be positive".into(),
            ));
        }

        let max_density = bound_density(&geometry, &profile);
        let target_mass = cone_mass(&geometry, profile.scale_height, local_mass_density);
        if !(target_mass > 0.0) {
            return Err(SynthesisError::InvalidConfig(
                "cone mass budget is zero; check the cone geometry".into(),
            ));
        }
        log::debug!(
            "cone budget: target mass {target_mass:.4}, density envelope {max_density:.4e}"
        );

        Ok(Self {
            geometry,
            profile,
            population,
            imf,
            birth_cdf,
            rng,
            max_density,
            target_mass,
            accumulated_mass: 0.0,
            max_attempts,
            rejected_attempts: 0,
            phase: Phase::DrawingAngle,
        })
    }

    /// The precomputed envelope; density/envelope is in (0, 1] for every
    /// accepted position.
    pub fn max_density(&self) -> f64 {
        self.max_density
    }

    /// The analytic mass budget this sampler works through.
    pub fn target_mass(&self) -> f64 {
        self.target_mass
    }

    fn accept(
        &mut self,
        longitude: f64,
        latitude: f64,
        distance: f64,
    ) -> Result<Star, SynthesisError> {
        let mass = self.imf.sample(self.rng)?;
        let birth_time = self.birth_cdf.sample(self.rng);

        // Only mass accepted inside the normalization depth is metered
        // against the budget; the cone may extend deeper.
        if distance < self.geometry.normalization_height {
            self.accumulated_mass += mass;
        }

        let (r, theta, z) =
            cylindrical_from_sky(distance, longitude, latitude, self.profile.solar_distance);
        Ok(Star::new(mass, birth_time, self.population, r, theta, z))
    }
}

impl Iterator for SpatialSampler<'_> {
    type Item = Result<Star, SynthesisError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.phase {
                Phase::Exhausted => return None,
                Phase::DrawingAngle => {
                    if self.accumulated_mass >= self.target_mass {
                        self.phase = Phase::Exhausted;
                        return None;
                    }
                    let longitude = self
                        .rng
                        .random_range(self.geometry.longitude_min..self.geometry.longitude_max);
                    let latitude = self
                        .rng
                        .random_range(self.geometry.latitude_min..self.geometry.latitude_max);
                    self.phase = Phase::DrawingRadius {
                        longitude,
                        latitude,
                    };
                }
                Phase::DrawingRadius {
                    longitude,
                    latitude,
                } => {
                    let distance = self.rng.random_range(0.0..self.geometry.height);
                    self.phase = Phase::TestingAccept {
                        longitude,
                        latitude,
                        distance,
                    };
                }
                Phase::TestingAccept {
                    longitude,
                    latitude,
                    distance,
                } => {
                    let ratio =
                        self.profile.evaluate(distance, longitude, latitude) / self.max_density;
                    if self.rng.random::<f64>() <= ratio {
                        self.rejected_attempts = 0;
                        self.phase = Phase::DrawingAngle;
                        return Some(self.accept(longitude, latitude, distance));
                    }

                    self.rejected_attempts += 1;
                    if self.rejected_attempts >= self.max_attempts {
                        self.phase = Phase::Exhausted;
                        return Some(Err(SynthesisError::RejectionExhausted {
                            stage: "cone position",
                            attempts: self.max_attempts,
                        }));
                    }
                    self.phase = Phase::DrawingAngle;
                }
            }
        }
    }
}

/// Upper-bound the density over the cone by scanning equal distance steps
/// along the most favorable lines of sight: the latitude edge nearest the
/// plane (or the plane itself when straddled) and the longitude endpoints,
/// whichever lies nearest the galactic center. The scanned maximum is then
/// inflated by the safety factor.
fn bound_density(geometry: &ConeGeometry, profile: &DiskProfile) -> f64 {
    let mut latitudes = vec![geometry.latitude_min, geometry.latitude_max];
    if geometry.latitude_min < 0.0 && geometry.latitude_max > 0.0 {
        latitudes.push(0.0);
    }
    let longitudes = [geometry.longitude_min, geometry.longitude_max];

    let mut maximum = 0.0f64;
    for &latitude in &latitudes {
        for &longitude in &longitudes {
            for step in 1..=ENVELOPE_STEPS {
                let distance = geometry.height * step as f64 / ENVELOPE_STEPS as f64;
                maximum = maximum.max(profile.evaluate(distance, longitude, latitude));
            }
        }
    }
    maximum * ENVELOPE_SAFETY
}
