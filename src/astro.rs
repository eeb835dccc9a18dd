use crate::constants::{G, TWO_PI};
use crate::Num;

/// Gravitational parameter of the two-body system, both masses in kg.
///
/// https://en.wikipedia.org/wiki/Standard_gravitational_parameter
#[inline]
pub fn standard_gravitational_parameter(mass_star: Num, mass_planet: Num) -> Num {
    G * (mass_star + mass_planet)
}

/// Orbital period in seconds for a semi-major axis `a` in meters.
///
/// https://en.wikipedia.org/wiki/Orbital_period
pub fn period(a: Num, mass_star: Num, mass_planet: Num) -> Num {
    let μ = standard_gravitational_parameter(mass_star, mass_planet);

    // a * sqrt(a / μ) == sqrt(a³ / μ), but stays in f32 range even for
    // orbits hundreds of AU out
    TWO_PI * a * (a / μ).sqrt()
}
