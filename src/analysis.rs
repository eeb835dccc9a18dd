//! The driving layer of an orbit analysis.
//!
//! The host application resolves the star, the user's planet selection and
//! the orbit parameters, and hands them in here as plain values; no entity
//! lookups happen on this side of the boundary. The result is a labeled set
//! of numbers ready for tabular display.

use crate::error::AnalysisError;
use crate::orbit::{Orbit, OrbitProperties};
use crate::Num;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A star, as resolved by the host from the planet's parent system.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Star {
    pub name: String,
    /// Mass in kg
    pub mass: Num,
}

/// A planet, as resolved by the host from the user's selection.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Planet {
    pub name: String,
    /// Mass in kg
    pub mass: Num,
}

/// Everything one analysis run needs.
///
/// `planet` stays optional because the selection is user input; a missing
/// selection is an expected failure, not a programming error.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnalysisInputs {
    pub star: Star,
    pub planet: Option<Planet>,
    pub eccentricity: Num,
    /// Closest point to the star in AU
    pub perihelion: Num,
}

/// The resulting orbit of a planet analysis.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct OrbitReport {
    pub star_name: String,
    pub planet_name: String,
    pub properties: OrbitProperties,
}

/// A single labeled value of the result table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ReportItem {
    pub label: &'static str,
    pub value: ReportValue,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum ReportValue {
    Text(String),
    Number {
        value: Num,
        unit: &'static str,
        decimals: u8,
    },
}

/// Runs the analysis: validates the selection and the orbit shape, then
/// computes the orbit properties for the selected planet around the star.
pub fn evaluate(inputs: &AnalysisInputs) -> Result<OrbitReport, AnalysisError> {
    let planet = inputs
        .planet
        .as_ref()
        .ok_or(AnalysisError::MissingSelection)?;

    let orbit = Orbit::new(inputs.eccentricity, inputs.perihelion)?;
    let properties = orbit.properties(planet.mass, inputs.star.mass);

    Ok(OrbitReport {
        star_name: inputs.star.name.clone(),
        planet_name: planet.name.clone(),
        properties,
    })
}

impl OrbitReport {
    /// Rows of the result table, in display order.
    pub fn rows(&self) -> Vec<ReportItem> {
        let number = |value| ReportValue::Number {
            value,
            unit: "AU",
            decimals: 3,
        };

        vec![
            ReportItem {
                label: "Star name",
                value: ReportValue::Text(self.star_name.clone()),
            },
            ReportItem {
                label: "Planet name",
                value: ReportValue::Text(self.planet_name.clone()),
            },
            ReportItem {
                label: "Orbit Period",
                value: ReportValue::Number {
                    value: self.properties.period,
                    unit: "years",
                    decimals: 3,
                },
            },
            ReportItem {
                label: "Semi-major axis",
                value: number(self.properties.semi_major_axis),
            },
            ReportItem {
                label: "Semi-minor axis",
                value: number(self.properties.semi_minor_axis),
            },
            ReportItem {
                label: "Furthest point from star",
                value: number(self.properties.max_distance),
            },
        ]
    }
}
