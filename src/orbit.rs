use crate::constants::{AU, YEAR};
use crate::curve::OrbitCurve;
use crate::error::InvalidOrbit;
use crate::{astro, Num};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Shape of a closed orbit around a star.
///
/// Construction through [`Orbit::new`] guarantees `0 <= eccentricity < 1`
/// and `perihelion > 0`, so every method on a constructed orbit is total.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Orbit {
    eccentricity: Num,
    perihelion: Num,
}

/// The derived properties of an orbit, bundled for display.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrbitProperties {
    /// Semi-major axis in AU
    pub semi_major_axis: Num,
    /// Semi-minor axis in AU
    pub semi_minor_axis: Num,
    /// Orbital period in years
    pub period: Num,
    /// Aphelion, the farthest distance from the star, in AU
    pub max_distance: Num,
}

impl OrbitProperties {
    /// One-shot form of [`Orbit::properties`] for callers holding raw
    /// scalars. Masses in kg, perihelion in AU.
    pub fn compute(
        mass_planet: Num,
        mass_star: Num,
        eccentricity: Num,
        perihelion: Num,
    ) -> Result<Self, InvalidOrbit> {
        Ok(Orbit::new(eccentricity, perihelion)?.properties(mass_planet, mass_star))
    }
}

impl Orbit {
    /// Validates the orbit shape.
    ///
    /// `eccentricity == 1` is reported separately from other out-of-range
    /// values: it is the parabolic case the closed-form ellipse formulas
    /// divide by zero on.
    pub fn new(eccentricity: Num, perihelion: Num) -> Result<Self, InvalidOrbit> {
        if eccentricity == 1.0 {
            return Err(InvalidOrbit::UnboundedOrbit);
        }

        if !(0.0..1.0).contains(&eccentricity) {
            return Err(InvalidOrbit::EccentricityOutOfRange(eccentricity));
        }

        if perihelion <= 0.0 {
            return Err(InvalidOrbit::NonPositivePerihelion(perihelion));
        }

        Ok(Self {
            eccentricity,
            perihelion,
        })
    }

    pub fn eccentricity(&self) -> Num {
        self.eccentricity
    }

    /// Perihelion in AU
    pub fn perihelion(&self) -> Num {
        self.perihelion
    }

    /// Semi-latus rectum in AU
    ///
    /// https://en.wikipedia.org/wiki/Conic_section#Conic_parameters
    pub fn semi_latus_rectum(&self) -> Num {
        self.perihelion * (1.0 + self.eccentricity)
    }

    /// Semi-major axis in AU
    pub fn semi_major_axis(&self) -> Num {
        self.semi_latus_rectum() / (1.0 - self.eccentricity.powi(2))
    }

    /// Semi-minor axis in AU
    pub fn semi_minor_axis(&self) -> Num {
        self.semi_latus_rectum() / (1.0 - self.eccentricity.powi(2)).sqrt()
    }

    /// Aphelion in AU, the farthest point of the orbit from the star.
    pub fn aphelion(&self) -> Num {
        2.0 * self.semi_major_axis() - self.perihelion
    }

    /// Orbital period in years.
    pub fn period(&self, mass_planet: Num, mass_star: Num) -> Num {
        astro::period(self.semi_major_axis() * AU, mass_star, mass_planet) / YEAR
    }

    /// Orbit radius in AU at true anomaly `theta` (radians, measured from
    /// perihelion).
    ///
    /// https://en.wikipedia.org/wiki/Ellipse#Polar_form_relative_to_focus
    pub fn radius_at(&self, theta: Num) -> Num {
        self.semi_latus_rectum() / (1.0 + self.eccentricity * theta.cos())
    }

    /// All derived properties at once. Masses are in kg.
    pub fn properties(&self, mass_planet: Num, mass_star: Num) -> OrbitProperties {
        OrbitProperties {
            semi_major_axis: self.semi_major_axis(),
            semi_minor_axis: self.semi_minor_axis(),
            period: self.period(mass_planet, mass_star),
            max_distance: self.aphelion(),
        }
    }

    /// The orbit as a polar plot curve at 1° resolution.
    pub fn curve(&self) -> OrbitCurve {
        OrbitCurve::new(*self)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use test_case::test_case;

    use super::*;

    const EARTH_MASS: Num = 5.972e24;
    const SUN_MASS: Num = 1.9885e30;

    #[test_case(0.0, 1.0)]
    #[test_case(0.0167, 0.983)]
    #[test_case(0.5, 2.5)]
    #[test_case(0.9, 30.0)]
    fn properties_are_physical(eccentricity: Num, perihelion: Num) {
        let orbit = Orbit::new(eccentricity, perihelion).unwrap();
        let props = orbit.properties(EARTH_MASS, SUN_MASS);

        assert!(props.semi_major_axis > 0.0);
        assert!(props.semi_minor_axis > 0.0);
        assert!(props.semi_major_axis >= props.semi_minor_axis);
        assert!(props.period > 0.0);
        assert!(props.max_distance >= perihelion);
    }

    #[test]
    fn circular_orbit_collapses_to_perihelion() {
        let orbit = Orbit::new(0.0, 1.0).unwrap();
        let props = orbit.properties(EARTH_MASS, SUN_MASS);

        assert_eq!(props.semi_major_axis, 1.0);
        assert_eq!(props.semi_minor_axis, 1.0);
        assert_eq!(props.max_distance, 1.0);
    }

    #[test]
    fn earth_orbits_in_one_year() {
        let orbit = Orbit::new(0.0167, 0.983).unwrap();
        let props = orbit.properties(EARTH_MASS, SUN_MASS);

        assert_relative_eq!(props.period, 1.0, max_relative = 0.01);
        assert_relative_eq!(props.semi_major_axis, 1.0, max_relative = 0.01);
    }

    #[test]
    fn eccentric_orbit_axes() {
        let orbit = Orbit::new(0.1, 1.0).unwrap();

        assert_relative_eq!(orbit.semi_major_axis(), 1.111, max_relative = 1e-3);
        assert_relative_eq!(orbit.semi_minor_axis(), 1.106, max_relative = 1e-3);
    }

    #[test]
    fn properties_are_deterministic() {
        let orbit = Orbit::new(0.3, 1.7).unwrap();

        assert_eq!(
            orbit.properties(EARTH_MASS, SUN_MASS),
            orbit.properties(EARTH_MASS, SUN_MASS)
        );
    }

    #[test_case(0.0 => matches Ok(_) ; "circular")]
    #[test_case(0.999 => matches Ok(_) ; "barely closed")]
    #[test_case(1.0 => matches Err(InvalidOrbit::UnboundedOrbit) ; "parabolic")]
    #[test_case(1.0001 => matches Err(InvalidOrbit::EccentricityOutOfRange(_)) ; "hyperbolic")]
    #[test_case(-0.0001 => matches Err(InvalidOrbit::EccentricityOutOfRange(_)) ; "negative")]
    fn eccentricity_domain(eccentricity: Num) -> Result<Orbit, InvalidOrbit> {
        Orbit::new(eccentricity, 1.0)
    }

    #[test_case(0.0 ; "zero")]
    #[test_case(-1.0 ; "negative")]
    fn perihelion_must_be_positive(perihelion: Num) {
        assert!(matches!(
            Orbit::new(0.1, perihelion),
            Err(InvalidOrbit::NonPositivePerihelion(_))
        ));
    }

    #[test]
    fn one_shot_compute_matches_the_builder() {
        let props = OrbitProperties::compute(EARTH_MASS, SUN_MASS, 0.0167, 0.983).unwrap();

        assert_eq!(
            props,
            Orbit::new(0.0167, 0.983)
                .unwrap()
                .properties(EARTH_MASS, SUN_MASS)
        );
        assert!(matches!(
            OrbitProperties::compute(EARTH_MASS, SUN_MASS, 1.0, 0.983),
            Err(InvalidOrbit::UnboundedOrbit)
        ));
    }

    #[test]
    fn aphelion_matches_polar_form() {
        let orbit = Orbit::new(0.4, 1.3).unwrap();

        // r(180°) = p / (1 - e) is the same point as 2a - perihelion
        assert_relative_eq!(
            orbit.radius_at(crate::PI),
            orbit.aphelion(),
            max_relative = 1e-5
        );
    }
}
