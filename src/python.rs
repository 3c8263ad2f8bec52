//! Python interface.
//!
//! NOTE: this module is only the interface between Rust and Python. The real
//! work happens in the other modules, and they do not use `pyo3`, it's only
//! used here.

use std::collections::HashMap;
use std::ffi::CString;

use log::debug;
use ndarray::Array1;
use num_complex::Complex64;
use numpy::prelude::*;
use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::exceptions::{PyRuntimeError, PyRuntimeWarning, PyValueError, PyZeroDivisionError};
use pyo3::prelude::*;

use crate::error::DielectricError;
use crate::p527::{Soil, SoilMixture, SoilType};
use crate::{batch, p525, p527};

impl From<DielectricError> for PyErr {
    fn from(e: DielectricError) -> Self {
        match e {
            DielectricError::AbsoluteZero(_)
            | DielectricError::TemperatureOutOfRange(_)
            | DielectricError::ZeroPercentage(_)
            | DielectricError::Frequency(_)
            | DielectricError::WaterContent(_)
            | DielectricError::SpecificGravity(_) => PyZeroDivisionError::new_err(e.to_string()),
            DielectricError::CompositionSum(_)
            | DielectricError::NegativePercentage(_)
            | DielectricError::UnsupportedUnit(_) => PyRuntimeError::new_err(e.to_string()),
            DielectricError::Distance(_)
            | DielectricError::Power(_)
            | DielectricError::PowerFlux(_)
            | DielectricError::UnknownSoilType(_) => PyValueError::new_err(e.to_string()),
        }
    }
}

/// Validate a soil mixture, turning any advisories into Python
/// `RuntimeWarning`s.
fn prepare_soil(
    py: Python<'_>,
    p_sand: f64,
    p_clay: f64,
    p_silt: f64,
    water_vol: f64,
    rho_s: f64,
) -> PyResult<SoilMixture> {
    let mixture = SoilMixture::new(Soil::new(p_sand, p_clay, p_silt), water_vol, rho_s)?;
    let category = py.get_type::<PyRuntimeWarning>();
    for advisory in mixture.advisories() {
        let message = CString::new(advisory.to_string())?;
        PyErr::warn(py, category.as_any(), &message, 1)?;
    }
    Ok(mixture)
}

/// Run `work` on a thread pool with `num_threads` workers (`None` to choose
/// automatically), without holding the GIL.
fn in_pool<F>(py: Python<'_>, num_threads: Option<usize>, work: F) -> PyResult<Vec<Complex64>>
where
    F: FnOnce() -> Result<Vec<Complex64>, DielectricError> + Send,
{
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads.unwrap_or(0))
        .build()
        .map_err(|e| PyValueError::new_err(e.to_string()))?;

    Ok(py.allow_threads(|| pool.install(work))?)
}

/// Complex relative permittivity of pure water.
///
/// `freq` is in GHz and `temperature` in °C. The result is of the form
/// `e_real - j * e_imag`, so the imaginary part has the negative sign applied.
#[pyfunction]
fn pure_water_permittivity(freq: f64, temperature: f64) -> PyResult<Complex64> {
    Ok(p527::pure_water_permittivity(freq, temperature)?)
}

/// Complex relative permittivity of salt water.
///
/// `freq` is in GHz, `temperature` in °C, and `salinity` in g/kg. The default
/// salinity is that of sea water.
#[pyfunction]
#[pyo3(signature = (freq, temperature, salinity = p527::SEAWATER_SALINITY))]
fn salt_water_permittivity(freq: f64, temperature: f64, salinity: f64) -> PyResult<Complex64> {
    Ok(p527::salt_water_permittivity(freq, temperature, salinity)?)
}

/// Complex relative permittivity of soil.
///
/// `freq` is in GHz and `temperature` in °C. The soil is given by its sand,
/// clay, and silt percentages (which must sum to 100), the volumetric water
/// content `water_vol` as a ratio, and the specific gravity `rho_s` of the dry
/// solids.
///
/// A `RuntimeWarning` is issued for each percentage below 1%.
#[pyfunction]
#[pyo3(signature = (freq, temperature, p_sand, p_clay, p_silt, water_vol, rho_s = p527::DEFAULT_SPECIFIC_GRAVITY))]
#[allow(clippy::too_many_arguments)]
fn soil_permittivity(
    py: Python<'_>,
    freq: f64,
    temperature: f64,
    p_sand: f64,
    p_clay: f64,
    p_silt: f64,
    water_vol: f64,
    rho_s: f64,
) -> PyResult<Complex64> {
    let mixture = prepare_soil(py, p_sand, p_clay, p_silt, water_vol, rho_s)?;
    Ok(mixture.permittivity(freq, temperature)?)
}

/// Example soil mixtures as a mapping of name to `(p_sand, p_clay, p_silt)`.
#[pyfunction]
fn soil_types() -> HashMap<&'static str, (f64, f64, f64)> {
    SoilType::ALL
        .into_iter()
        .map(|soil_type| {
            let Soil {
                p_sand,
                p_clay,
                p_silt,
            } = soil_type.composition();
            (soil_type.name(), (p_sand, p_clay, p_silt))
        })
        .collect()
}

/// Pure water permittivity for a 1-d array of frequencies in GHz.
///
/// The number of worker threads is controlled by `num_threads`. It must be a
/// positive integer, or `None` to automatically choose the number of threads.
#[pyfunction]
#[pyo3(signature = (freq, temperature, num_threads = None))]
fn pure_water_permittivity_array<'py>(
    py: Python<'py>,
    freq: PyReadonlyArray1<'py, f64>,
    temperature: f64,
    num_threads: Option<usize>,
) -> PyResult<Bound<'py, PyArray1<Complex64>>> {
    let freqs = freq.as_slice()?;
    let values = in_pool(py, num_threads, || {
        batch::pure_water_spectrum(freqs, temperature)
    })?;
    Ok(Array1::from_vec(values).into_pyarray(py))
}

/// Salt water permittivity for a 1-d array of frequencies in GHz.
#[pyfunction]
#[pyo3(signature = (freq, temperature, salinity = p527::SEAWATER_SALINITY, num_threads = None))]
fn salt_water_permittivity_array<'py>(
    py: Python<'py>,
    freq: PyReadonlyArray1<'py, f64>,
    temperature: f64,
    salinity: f64,
    num_threads: Option<usize>,
) -> PyResult<Bound<'py, PyArray1<Complex64>>> {
    let freqs = freq.as_slice()?;
    let values = in_pool(py, num_threads, || {
        batch::salt_water_spectrum(freqs, temperature, salinity)
    })?;
    Ok(Array1::from_vec(values).into_pyarray(py))
}

/// Soil permittivity for a 1-d array of frequencies in GHz.
///
/// The soil is validated once, so advisories are only issued once.
#[pyfunction]
#[pyo3(signature = (freq, temperature, p_sand, p_clay, p_silt, water_vol, rho_s = p527::DEFAULT_SPECIFIC_GRAVITY, num_threads = None))]
#[allow(clippy::too_many_arguments)]
fn soil_permittivity_array<'py>(
    py: Python<'py>,
    freq: PyReadonlyArray1<'py, f64>,
    temperature: f64,
    p_sand: f64,
    p_clay: f64,
    p_silt: f64,
    water_vol: f64,
    rho_s: f64,
    num_threads: Option<usize>,
) -> PyResult<Bound<'py, PyArray1<Complex64>>> {
    let mixture = prepare_soil(py, p_sand, p_clay, p_silt, water_vol, rho_s)?;
    debug!("prepared soil mixture {mixture:?}");

    let freqs = freq.as_slice()?;
    let values = in_pool(py, num_threads, || {
        batch::soil_spectrum(freqs, temperature, &mixture)
    })?;
    Ok(Array1::from_vec(values).into_pyarray(py))
}

/// Free-space path loss in dB for a frequency in GHz and a distance in m.
#[pyfunction]
fn free_space_path_loss(freq: f64, distance: f64) -> PyResult<f64> {
    Ok(p525::free_space_path_loss(freq, distance)?)
}

/// Electric field strength in dBµV/m at a distance in km.
///
/// `mode` gives the units of `power`: dBW, dBm, W, or mW.
#[pyfunction]
#[pyo3(signature = (power, distance, mode = "dBW"))]
fn field_strength_at_distance(power: f64, distance: f64, mode: &str) -> PyResult<f64> {
    Ok(p525::field_strength_at_distance(
        power,
        distance,
        mode.parse()?,
    )?)
}

/// Power flux in dBW/m² at a distance in km.
///
/// `mode` gives the units of `power`: dBW, dBm, W, or mW.
#[pyfunction]
#[pyo3(signature = (power, distance, mode = "dBW"))]
fn power_flux_at_distance(power: f64, distance: f64, mode: &str) -> PyResult<f64> {
    Ok(p525::power_flux_at_distance(power, distance, mode.parse()?)?)
}

/// Electric field strength in V/m from a power flux in W/m².
#[pyfunction]
fn power_flux_to_field_strength(power: f64) -> PyResult<f64> {
    Ok(p525::power_flux_to_field_strength(power)?)
}

/// Average power flux in W/m² from an electric field amplitude in V/m.
#[pyfunction]
fn field_strength_to_power_flux(field: f64) -> f64 {
    p525::field_strength_to_power_flux(field)
}

/// A Python module implemented in Rust.
#[pymodule]
fn surface_dielectric(m: &Bound<'_, PyModule>) -> PyResult<()> {
    pyo3_log::init();

    m.add_function(wrap_pyfunction!(pure_water_permittivity, m)?)?;
    m.add_function(wrap_pyfunction!(salt_water_permittivity, m)?)?;
    m.add_function(wrap_pyfunction!(soil_permittivity, m)?)?;
    m.add_function(wrap_pyfunction!(soil_types, m)?)?;
    m.add_function(wrap_pyfunction!(pure_water_permittivity_array, m)?)?;
    m.add_function(wrap_pyfunction!(salt_water_permittivity_array, m)?)?;
    m.add_function(wrap_pyfunction!(soil_permittivity_array, m)?)?;
    m.add_function(wrap_pyfunction!(free_space_path_loss, m)?)?;
    m.add_function(wrap_pyfunction!(field_strength_at_distance, m)?)?;
    m.add_function(wrap_pyfunction!(power_flux_at_distance, m)?)?;
    m.add_function(wrap_pyfunction!(power_flux_to_field_strength, m)?)?;
    m.add_function(wrap_pyfunction!(field_strength_to_power_flux, m)?)?;
    Ok(())
}
