//! Planetary orbit properties and plot curves.
//!
//! Given the shape of a closed orbit (eccentricity and perihelion) and the
//! masses of the two bodies, this crate derives the orbit's axes, period and
//! aphelion, and samples the orbit as a polar curve for plotting.
//!
//! The scalar precision is selected with the mutually exclusive `f32`
//! (default) and `f64` features and exposed as the crate-wide [`Num`] alias.

pub mod analysis;
pub mod astro;
pub mod constants;
pub mod curve;
pub mod error;
pub mod orbit;

#[cfg(feature = "f32")]
mod precision {
    pub type Num = f32;
    pub type Vec2 = glam::Vec2;
    pub use glam::vec2;
}

#[cfg(feature = "f64")]
mod precision {
    pub type Num = f64;
    pub type Vec2 = glam::DVec2;
    pub use glam::dvec2 as vec2;
}

pub use constants::{AU, G, PI, TWO_PI, YEAR};
pub use precision::{vec2, Num, Vec2};

pub use crate::analysis::{AnalysisInputs, OrbitReport, Planet, Star};
pub use crate::curve::{OrbitCurve, OrbitSample};
pub use crate::error::{AnalysisError, InvalidOrbit};
pub use crate::orbit::{Orbit, OrbitProperties};
