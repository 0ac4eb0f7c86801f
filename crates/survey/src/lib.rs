//! Observational side of the population synthesis: an empirical selection
//! function with per-cause elimination counting, magnitude-binned velocity
//! statistics, and luminosity-function normalization.

pub mod binning;
pub mod error;
pub mod luminosity;
pub mod photometry;
pub mod records;
pub mod selection;


pub use binning::{
    aggregate, cloud_points, route_axis_pair, AxisPair, Bin, BinningConfig, CloudPoint,
    VelocityAxis, SINGLETON_STD,
};
pub use error::SurveyError;
pub use luminosity::{luminosity_function, LuminosityConfig, LuminosityPoint};
pub use records::{star_record, SurveyRecords};
pub use selection::{
    apply, check, Cause, EliminationCounters, SelectionLimits, SelectionMode,
    SelectionSummary,
};
