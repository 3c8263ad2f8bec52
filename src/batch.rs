//! Evaluate the permittivity models over many frequencies.
//!
//! The work is split across the current rayon thread pool. Results are in
//! the same order as the input frequencies. Any error aborts the whole
//! evaluation; which one is reported is unspecified if several frequencies
//! fail.

use log::info;
use num_complex::Complex64;
use rayon::prelude::*;

use crate::error::DielectricError;
use crate::p527::{pure_water_permittivity, salt_water_permittivity, SoilMixture};

/// Evaluate `model` at every frequency, in parallel.
fn spectrum<F>(freqs: &[f64], model: F) -> Result<Vec<Complex64>, DielectricError>
where
    F: Fn(f64) -> Result<Complex64, DielectricError> + Sync,
{
    info!(
        "Computing permittivity at {} frequencies with {} threads",
        freqs.len(),
        rayon::current_num_threads()
    );
    freqs.par_iter().map(|&freq| model(freq)).collect()
}

/// Pure water permittivity at each of `freqs` (GHz) for a `temperature` in °C.
pub fn pure_water_spectrum(
    freqs: &[f64],
    temperature: f64,
) -> Result<Vec<Complex64>, DielectricError> {
    spectrum(freqs, |freq| pure_water_permittivity(freq, temperature))
}

/// Saline water permittivity at each of `freqs` (GHz) for a `temperature` in
/// °C and `salinity` in g/kg.
pub fn salt_water_spectrum(
    freqs: &[f64],
    temperature: f64,
    salinity: f64,
) -> Result<Vec<Complex64>, DielectricError> {
    spectrum(freqs, |freq| {
        salt_water_permittivity(freq, temperature, salinity)
    })
}

/// Soil permittivity at each of `freqs` (GHz) for a `temperature` in °C.
pub fn soil_spectrum(
    freqs: &[f64],
    temperature: f64,
    mixture: &SoilMixture,
) -> Result<Vec<Complex64>, DielectricError> {
    spectrum(freqs, |freq| mixture.permittivity(freq, temperature))
}
