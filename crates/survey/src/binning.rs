//! Magnitude binning of surviving stars and per-bin velocity statistics.
//!
//! Each surviving star is routed to exactly one axis pair by its dominant
//! heliocentric cartesian coordinate, producing two (magnitude, velocity)
//! cloud points. Points are then grouped per (axis, magnitude bin) and each
//! group reports mean, standard deviation, and count.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use synthesis::star::Star;

use crate::error::SurveyError;

/// Sentinel standard deviation for a bin with exactly one member, large
/// enough to visually suppress the point downstream.
pub const SINGLETON_STD: f64 = 100.0;

/// One component of the (u, v, w) space velocity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum VelocityAxis {
    U,
    V,
    W,
}

impl VelocityAxis {
    pub fn name(&self) -> &'static str {
        match self {
            VelocityAxis::U => "u",
            VelocityAxis::V => "v",
            VelocityAxis::W => "w",
        }
    }

    fn component(&self, star: &Star) -> f64 {
        match self {
            VelocityAxis::U => star.motion.velocity.x,
            VelocityAxis::V => star.motion.velocity.y,
            VelocityAxis::W => star.motion.velocity.z,
        }
    }
}

/// The two velocity axes a star contributes to. A star lying mostly along
/// one cartesian axis carries little proper-motion information about the
/// velocity component parallel to the line of sight, so that component is
/// the one left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AxisPair {
    Vw,
    Uw,
    Uv,
}

impl AxisPair {
    pub fn axes(&self) -> [VelocityAxis; 2] {
        match self {
            AxisPair::Vw => [VelocityAxis::V, VelocityAxis::W],
            AxisPair::Uw => [VelocityAxis::U, VelocityAxis::W],
            AxisPair::Uv => [VelocityAxis::U, VelocityAxis::V],
        }
    }
}

/// Pick the axis pair by the dominant absolute cartesian coordinate.
pub fn route_axis_pair(star: &Star) -> AxisPair {
    let x = star.cartesian.x.abs();
    let y = star.cartesian.y.abs();
    let z = star.cartesian.z.abs();

    if x >= y && x >= z {
        AxisPair::Vw
    } else if y >= z {
        AxisPair::Uw
    } else {
        AxisPair::Uv
    }
}

/// One surviving star's contribution to one velocity axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudPoint {
    pub axis: VelocityAxis,
    pub magnitude: f64,
    pub velocity: f64,
}

/// The two cloud points a star contributes, one per axis of its pair.
pub fn cloud_points(star: &Star) -> [CloudPoint; 2] {
    route_axis_pair(star).axes().map(|axis| CloudPoint {
        axis,
        magnitude: star.bolometric_magnitude,
        velocity: axis.component(star),
    })
}

/// Magnitude-grid layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinningConfig {
    /// Bright edge of the grid, bolometric magnitudes.
    pub min_magnitude: f64,
    /// Bin width in magnitudes.
    pub bin_size: f64,
    /// Number of bins on the grid.
    pub bins_count: usize,
}

impl BinningConfig {
    pub fn validate(&self) -> Result<(), SurveyError> {
        if self.bin_size <= 0.0 {
            return Err(SurveyError::InvalidConfig(format!(
                "bin size must be positive, got {}",
                self.bin_size
            )));
        }
        if self.bins_count == 0 {
            return Err(SurveyError::InvalidConfig(
                "bins count must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Grid index for a magnitude, or `None` (with a warning) when it falls
    /// off the grid. Never an error: out-of-range stars are simply dropped.
    pub fn bin_index(&self, magnitude: f64) -> Option<usize> {
        let index = ((magnitude - self.min_magnitude) / self.bin_size).ceil();
        if index < 0.0 || index >= self.bins_count as f64 {
            log::warn!(
                "magnitude {} outside binning grid [{}, {}), dropped",
                magnitude,
                self.min_magnitude,
                self.min_magnitude + self.bin_size * self.bins_count as f64
            );
            return None;
        }
        Some(index as usize)
    }

    /// Nominal magnitude at the center of bin `index`.
    pub fn bin_center(&self, index: usize) -> f64 {
        self.min_magnitude + (index as f64 - 0.5) * self.bin_size
    }
}

/// Aggregated statistics of one (axis, magnitude bin) group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bin {
    pub axis: VelocityAxis,
    pub index: usize,
    /// Nominal bin-center magnitude.
    pub magnitude: f64,
    pub mean: f64,
    pub std: f64,
    pub count: usize,
}

/// Group cloud points per (axis, bin) and report mean/std/count for each
/// non-empty group. Empty bins never appear in the output; single-member
/// bins report [`SINGLETON_STD`] instead of a variance.
pub fn aggregate(config: &BinningConfig, points: &[CloudPoint]) -> Vec<Bin> {
    let mut groups: BTreeMap<(VelocityAxis, usize), Vec<f64>> = BTreeMap::new();
    for point in points {
        if let Some(index) = config.bin_index(point.magnitude) {
            groups
                .entry((point.axis, index))
                .or_default()
                .push(point.velocity);
        }
    }

    groups
        .into_iter()
        .map(|((axis, index), velocities)| {
            let count = velocities.len();
            let mean = velocities.iter().sum::<f64>() / count as f64;
            let std = if count == 1 {
                SINGLETON_STD
            } else {
                let sum_squares: f64 = velocities
                    .iter()
                    .map(|v| (v - mean) * (v - mean))
                    .sum();
                (sum_squares / (count as f64 - 1.0)).max(0.0).sqrt()
            };
            Bin {
                axis,
                index,
                magnitude: config.bin_center(index),
                mean,
                std,
                count,
            }
        })
        .collect()
}
