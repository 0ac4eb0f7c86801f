//! Monte Carlo synthesis of the Galactic white dwarf population.
//!
//! A batch is generated in two passes. Spatial sampling draws positioned
//! progenitors inside an observation cone until the analytic mass budget is
//! spent; enrichment then fills in sky coordinates, kinematics and white
//! dwarf evolution for each star in place. Every sampling call takes an
//! explicit `ChaChaRng` so fixed seeds reproduce a run exactly, including
//! across parallel cones.

pub mod error;
pub mod evolution;
pub mod history;
pub mod imf;
pub mod pipeline;
pub mod spatial;
pub mod star;

#[cfg(test)]
mod evolution_test;

pub use error::SynthesisError;
pub use pipeline::{synthesize, synthesize_cones, synthesize_with, GenerationParams, Group};
pub use spatial::SpatialSampler;
pub use star::{Population, SpectralType, Star, Ubvri};
