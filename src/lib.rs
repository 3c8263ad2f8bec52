//! Electrical characteristics of the surface of the Earth
//!
//! Complex relative permittivity of pure water, saline water, and soil at
//! microwave frequencies, following ITU-R P.527-4, along with the free-space
//! attenuation and field strength conversions of ITU-R P.525.
//!
//! All permittivities are returned as `e_real - j * e_imag`: the imaginary
//! part of the [`Complex64`](num_complex::Complex64) is the negated loss.
//!
//! With the `python` feature, the crate builds as a Python extension module.

pub mod batch;
pub mod error;
pub mod p525;
pub mod p527;

#[cfg(feature = "python")]
mod python;

pub use crate::{
    batch::{pure_water_spectrum, salt_water_spectrum, soil_spectrum},
    error::DielectricError,
    p525::{
        field_strength_at_distance, field_strength_to_power_flux, free_space_path_loss,
        power_flux_at_distance, power_flux_to_field_strength, PowerUnit,
    },
    p527::{
        pure_water_permittivity, salt_water_permittivity, soil_permittivity, Soil, SoilMixture,
        SoilType,
    },
};
