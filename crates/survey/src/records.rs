//! Flat output records handed to external persistence and plotting.
//!
//! The star record's field order is fixed; downstream column-positional
//! readers depend on it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use synthesis::star::Star;

use crate::binning::{Bin, CloudPoint};
use crate::selection::SelectionSummary;

/// One star, whitespace-delimited, in the fixed column order: luminosity,
/// total/latitude/longitude proper motion, radial velocity, right ascension,
/// declination, distance, galactic latitude and longitude, B V R I, u v w,
/// spectral type, population tag.
pub fn star_record(star: &Star) -> String {
    format!(
        "{} {} {} {} {} {} {} {} {} {} {} {} {} {} {} {} {} {} {}",
        star.luminosity,
        star.motion.proper_motion,
        star.motion.proper_motion_latitude,
        star.motion.proper_motion_longitude,
        star.motion.radial_velocity,
        star.sky.right_ascension,
        star.sky.declination,
        star.sky.distance,
        star.sky.latitude,
        star.sky.longitude,
        star.photometry.b,
        star.photometry.v,
        star.photometry.r,
        star.photometry.i,
        star.motion.velocity.x,
        star.motion.velocity.y,
        star.motion.velocity.z,
        star.spectral_type.tag(),
        star.population.tag(),
    )
}

/// Everything a run produces for persistence, keyed by its group id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyRecords {
    pub group_id: Uuid,
    pub selection: SelectionSummary,
    pub cloud_points: Vec<CloudPoint>,
    pub bins: Vec<Bin>,
}
