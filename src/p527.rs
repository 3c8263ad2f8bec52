//! Electrical characteristics of the surface of the Earth (ITU-R P.527-4).
//!
//! Frequency and temperature dependent complex relative permittivity of pure
//! water, saline water, and soil. All results use the `e_real - j * e_imag`
//! notation of the Recommendation, so the imaginary part of the returned
//! [`Complex64`](num_complex::Complex64) is the *negated* loss.

mod debye;
mod pure_water;
mod salt_water;
mod soil;
mod soils;

#[cfg(test)]
mod tests;

pub use self::{
    debye::DebyeParameters,
    pure_water::pure_water_permittivity,
    salt_water::{salt_water_permittivity, SEAWATER_SALINITY},
    soil::{
        soil_permittivity, Advisories, Advisory, Constituent, Soil, SoilMixture,
        DEFAULT_SPECIFIC_GRAVITY, MIXING_ALPHA,
    },
    soils::SoilType,
};
