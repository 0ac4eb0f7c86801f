//! The observational selection function.
//!
//! An ordered sequence of cuts encoding an empirical survey footprint. The
//! order and the numeric thresholds are part of the published selection
//! function: they must not be rearranged or "simplified". A star is
//! eliminated by the first matching cut only, so per-cause counts always
//! sum to raw minus surviving.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use synthesis::star::Star;

use crate::error::SurveyError;
use crate::photometry::{reduced_proper_motion, synthetic_gz};

/// Reduced-proper-motion cut constants. Empirical, of undocumented origin;
/// preserved verbatim.
pub const RPM_COLOR_KNEE: f64 = -0.33;
pub const RPM_MAGNITUDE_KNEE: f64 = 14.0;
pub const RPM_SLOPE: f64 = 3.559;
pub const RPM_INTERCEPT: f64 = 15.17;

/// Faint apparent-magnitude survey limit in V.
pub const APPARENT_LIMIT_V: f64 = 19.0;

/// Which cuts run. Raw applies only the astrometric/kinematic cuts; Full
/// adds the photometric cuts; Restricted additionally demands a minimum
/// proper motion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectionMode {
    #[default]
    Raw,
    Restricted,
    Full,
}

impl FromStr for SelectionMode {
    type Err = SurveyError;

    fn from_str(s: &str) -> Result<Self, SurveyError> {
        match s {
            "" | "raw" => Ok(SelectionMode::Raw),
            "restricted" => Ok(SelectionMode::Restricted),
            "full" => Ok(SelectionMode::Full),
            other => Err(SurveyError::UnknownMode(other.to_string())),
        }
    }
}

/// Why a star was removed. Exactly one cause per eliminated star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Cause {
    Parallax,
    Declination,
    Velocity,
    ProperMotion,
    ReducedProperMotion,
    ApparentMagnitude,
}

impl Cause {
    pub fn name(&self) -> &'static str {
        match self {
            Cause::Parallax => "parallax",
            Cause::Declination => "declination",
            Cause::Velocity => "velocity",
            Cause::ProperMotion => "proper_motion",
            Cause::ReducedProperMotion => "reduced_proper_motion",
            Cause::ApparentMagnitude => "apparent_magnitude",
        }
    }
}

/// Thresholds of the astrometric and kinematic cuts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionLimits {
    /// Minimum parallax in arcsec.
    pub min_parallax: f64,
    /// Minimum declination in radians.
    pub min_declination: f64,
    /// Maximum total space velocity in km/s.
    pub max_velocity: f64,
    /// Minimum total proper motion in arcsec/yr (restricted mode only).
    pub min_proper_motion: f64,
}

/// Apply the selection function to one star.
///
/// Pure and total: returns the first matching elimination cause, or `None`
/// when the star survives; the caller folds verdicts into its own
/// [`EliminationCounters`].
pub fn check(star: &Star, limits: &SelectionLimits, mode: SelectionMode) -> Option<Cause> {
    let parallax = 1.0 / (star.sky.distance * 1000.0);
    if parallax < limits.min_parallax {
        return Some(Cause::Parallax);
    }

    if star.sky.declination < limits.min_declination {
        return Some(Cause::Declination);
    }

    if star.motion.velocity.norm_squared() > limits.max_velocity * limits.max_velocity {
        return Some(Cause::Velocity);
    }

    if mode == SelectionMode::Restricted && star.motion.proper_motion < limits.min_proper_motion
    {
        return Some(Cause::ProperMotion);
    }

    if mode != SelectionMode::Raw {
        let (g, z) = synthetic_gz(&star.photometry);
        let color = g - z;
        let hrm = reduced_proper_motion(g, star.motion.proper_motion);
        if (color < RPM_COLOR_KNEE && hrm < RPM_MAGNITUDE_KNEE)
            || hrm < RPM_SLOPE * color + RPM_INTERCEPT
        {
            return Some(Cause::ReducedProperMotion);
        }

        if star.photometry.v >= APPARENT_LIMIT_V {
            return Some(Cause::ApparentMagnitude);
        }
    }

    None
}

/// Per-batch elimination bookkeeping. Fresh per batch; owned by the caller,
/// never by the filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EliminationCounters {
    raw: u64,
    surviving: u64,
    causes: BTreeMap<Cause, u64>,
}

impl EliminationCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one verdict in. Returns whether the star was eliminated.
    pub fn record(&mut self, verdict: Option<Cause>) -> bool {
        self.raw += 1;
        match verdict {
            Some(cause) => {
                *self.causes.entry(cause).or_insert(0) += 1;
                true
            }
            None => {
                self.surviving += 1;
                false
            }
        }
    }

    pub fn raw(&self) -> u64 {
        self.raw
    }

    pub fn surviving(&self) -> u64 {
        self.surviving
    }

    pub fn eliminated(&self) -> u64 {
        self.causes.values().sum()
    }

    pub fn count(&self, cause: Cause) -> u64 {
        self.causes.get(&cause).copied().unwrap_or(0)
    }

    /// Flat summary handed to persistence.
    pub fn summary(&self) -> SelectionSummary {
        SelectionSummary {
            raw: self.raw,
            surviving: self.surviving,
            causes: self
                .causes
                .iter()
                .map(|(cause, &count)| (cause.name().to_string(), count))
                .collect(),
        }
    }
}

/// Serializable counters summary: raw count, per-cause counts, survivors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionSummary {
    pub raw: u64,
    pub surviving: u64,
    pub causes: BTreeMap<String, u64>,
}

/// Filter a batch, folding every verdict into fresh counters. Returns the
/// survivors and the counters.
pub fn apply(
    stars: Vec<Star>,
    limits: &SelectionLimits,
    mode: SelectionMode,
) -> (Vec<Star>, EliminationCounters) {
    let mut counters = EliminationCounters::new();
    let survivors = stars
        .into_iter()
        .filter(|star| !counters.record(check(star, limits, mode)))
        .collect();
    (survivors, counters)
}
