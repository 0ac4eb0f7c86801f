//! The white dwarf luminosity function: number density per magnitude bin,
//! normalized against a set of trusted bins with a known reference density.
//!
//! All logarithm domain errors here are expected (empty bins, vanished
//! normalization) and recovered locally with a 0.0 sentinel, never
//! propagated as failures.

use serde::{Deserialize, Serialize};

use crate::binning::BinningConfig;
use crate::error::SurveyError;

/// Normalization parameters of the luminosity function.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LuminosityConfig {
    /// Effective survey volume in pc^3.
    pub reference_volume: f64,
    /// The three bin indices whose summed count anchors the normalization.
    pub trusted_bins: [usize; 3],
    /// Observed number density summed over the trusted bins, stars/pc^3.
    pub reference_trusted_count: f64,
}

impl LuminosityConfig {
    pub fn validate(&self) -> Result<(), SurveyError> {
        if self.reference_volume <= 0.0 {
            return Err(SurveyError::InvalidConfig(format!(
                "reference volume must be positive, got {}",
                self.reference_volume
            )));
        }
        if self.reference_trusted_count <= 0.0 {
            return Err(SurveyError::InvalidConfig(format!(
                "reference trusted count must be positive, got {}",
                self.reference_trusted_count
            )));
        }
        Ok(())
    }
}

/// One luminosity-function point. The error bounds are the log densities of
/// the `sqrt(count)`-shifted counts, not offsets from `log_count`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LuminosityPoint {
    pub index: usize,
    /// Nominal bin-center magnitude.
    pub magnitude: f64,
    pub count: usize,
    pub log_count: f64,
    pub log_lower: f64,
    pub log_upper: f64,
}

/// log10 with the local domain-error sentinel: non-positive or non-finite
/// arguments map to 0.0.
fn safe_log10(value: f64) -> f64 {
    if value > 0.0 && value.is_finite() {
        value.log10()
    } else {
        0.0
    }
}

/// Build the luminosity function from per-bin star counts, indexed by bin.
///
/// `normalization = reference_volume * (sum over trusted bins) /
/// reference_trusted_count`; each point is `log10(count / normalization)`
/// with asymmetric bounds from `count +/- sqrt(count)`.
pub fn luminosity_function(
    config: &LuminosityConfig,
    binning: &BinningConfig,
    counts: &[usize],
) -> Result<Vec<LuminosityPoint>, SurveyError> {
    config.validate()?;
    binning.validate()?;

    let trusted: usize = config
        .trusted_bins
        .iter()
        .map(|&bin| counts.get(bin).copied().unwrap_or(0))
        .sum();
    let normalization =
        config.reference_volume * trusted as f64 / config.reference_trusted_count;

    let points = counts
        .iter()
        .enumerate()
        .map(|(index, &count)| {
            let count_f = count as f64;
            let spread = count_f.sqrt();
            LuminosityPoint {
                index,
                magnitude: binning.bin_center(index),
                count,
                log_count: safe_log10(count_f / normalization),
                log_lower: safe_log10((count_f - spread) / normalization),
                log_upper: safe_log10((count_f + spread) / normalization),
            }
        })
        .collect();

    Ok(points)
}
