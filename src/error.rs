use thiserror::Error;

use crate::Num;

/// Rejected orbit shapes.
///
/// A closed (elliptical) orbit requires an eccentricity in `[0, 1)` and a
/// positive perihelion.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum InvalidOrbit {
    /// At eccentricity 1 the orbit is parabolic and the semi-major-axis
    /// denominator is zero.
    #[error("the eccentricity can not be 1: the orbit is unbounded")]
    UnboundedOrbit,

    #[error("the eccentricity must be in [0, 1), got {0}")]
    EccentricityOutOfRange(Num),

    #[error("the perihelion must be positive, got {0} AU")]
    NonPositivePerihelion(Num),
}

/// Failures of the analysis layer driving the orbit calculation.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum AnalysisError {
    #[error("select a planet")]
    MissingSelection,

    #[error(transparent)]
    InvalidOrbit(#[from] InvalidOrbit),
}
