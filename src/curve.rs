use crate::orbit::Orbit;
use crate::{vec2, Num, Vec2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Samples per full turn, one per whole degree.
pub const SAMPLES_PER_TURN: u16 = 360;

/// One point of an orbit's polar plot curve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrbitSample {
    /// Angle from perihelion in whole degrees, `0..360`
    pub angle: u16,
    /// Distance from the star in AU
    pub radius: Num,
}

impl OrbitSample {
    /// Cartesian position in AU with the star at the origin, for plotting
    /// layers that don't speak polar coordinates.
    pub fn position(&self) -> Vec2 {
        let theta = (self.angle as Num).to_radians();

        vec2(self.radius * theta.cos(), self.radius * theta.sin())
    }
}

/// Lazy polar samples of an orbit, ordered by increasing angle from
/// perihelion.
///
/// The curve holds no state beyond the orbit and a cursor: cloning it (or
/// calling [`Orbit::curve`] again) restarts an identical sequence.
#[derive(Debug, Clone)]
pub struct OrbitCurve {
    orbit: Orbit,
    angle: u16,
}

impl OrbitCurve {
    pub(crate) fn new(orbit: Orbit) -> Self {
        Self { orbit, angle: 0 }
    }
}

impl Iterator for OrbitCurve {
    type Item = OrbitSample;

    fn next(&mut self) -> Option<Self::Item> {
        if self.angle >= SAMPLES_PER_TURN {
            return None;
        }

        let angle = self.angle;
        self.angle += 1;

        Some(OrbitSample {
            angle,
            radius: self.orbit.radius_at((angle as Num).to_radians()),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(SAMPLES_PER_TURN - self.angle);

        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for OrbitCurve {}
