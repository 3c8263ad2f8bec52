use log::debug;
use num_complex::Complex64;

use super::debye::DebyeParameters;
use crate::error::DielectricError;

/// Salinity of sea water in g/kg
pub const SEAWATER_SALINITY: f64 = 35.0;

/// Complex relative permittivity of saline water.
///
/// For a frequency `freq` in GHz, a `temperature` in °C, and a `salinity` in
/// g/kg (parts per thousand), compute the complex relative permittivity
/// `e_real - j * e_imag`. The imaginary part of the result has the negative
/// sign applied. Use [`SEAWATER_SALINITY`] for sea water.
///
/// The pure water Debye parameters are scaled by salinity dependent factors
/// and an ionic conductivity loss is added. With a salinity of zero the
/// result equals [`pure_water_permittivity`](super::pure_water_permittivity).
///
/// Fails on the same temperatures as the pure water model, and if `freq` is
/// not a positive, finite value (the conductivity term divides by it).
pub fn salt_water_permittivity(
    freq: f64,
    temperature: f64,
    salinity: f64,
) -> Result<Complex64, DielectricError> {
    if !(freq > 0.) || freq.is_infinite() {
        return Err(DielectricError::Frequency(freq));
    }

    let parameters = saline_parameters(temperature, salinity)?;
    let sigma = conductivity(temperature, salinity);
    debug!("saline water parameters {parameters:?}, conductivity {sigma} S/m");

    let (real, loss) = parameters.relaxation(freq, temperature)?;
    let loss = loss + 18. * sigma / freq;

    Ok(Complex64::new(real, -loss))
}

/// Scale the pure water Debye parameters for salinity.
fn saline_parameters(temperature: f64, salinity: f64) -> Result<DebyeParameters, DielectricError> {
    #![allow(clippy::excessive_precision)]
    let pure = DebyeParameters::pure_water(temperature)?;

    let t = temperature;
    let s = salinity;
    let t2 = t.powi(2);
    let s2 = s.powi(2);

    let eps_inf = pure.eps_inf * (1. + s * (1.57883e-4 * t - 2.04265e-3));
    let relax_freq_1 =
        pure.relax_freq_1 * (1. + s * (2.39357e-3 - 3.13530e-5 * t + 2.52477e-7 * t2));
    let relax_freq_2 = pure.relax_freq_2 * (1. + s * (1.81176e-4 * t - 1.99723e-2));
    let eps_pole =
        pure.eps_pole * f64::exp(1.76032e-4 * s2 - 9.22144e-5 * t * s - 6.28908e-3 * s);
    let eps_static =
        pure.eps_static * f64::exp(4.74868e-6 * s2 + 1.15574e-5 * t * s - 3.56417e-3 * s);

    let parameters = DebyeParameters {
        relax_freq_1,
        relax_freq_2,
        eps_inf,
        eps_static,
        eps_pole,
    };
    parameters.check(temperature)?;
    Ok(parameters)
}

/// Ionic conductivity of saline water in S/m.
///
/// The conductivity of standard sea water at 35 g/kg is scaled to the given
/// salinity, and then corrected for temperature relative to 15 °C.
fn conductivity(temperature: f64, salinity: f64) -> f64 {
    #![allow(clippy::excessive_precision)]
    let t = temperature;
    let s = salinity;
    let s2 = s.powi(2);

    let sigma_35 = 2.903602 + 8.607e-2 * t + 4.738817e-4 * t.powi(2) - 2.991e-6 * t.powi(3)
        + 4.3047e-9 * t.powi(4);

    let r_15 = s * (37.5109 + 5.45216 * s + 1.4409e-2 * s2) / (1004.75 + 182.283 * s + s2);

    let alpha_0 = (6.9431 + 3.2841 * s - 9.9486e-2 * s2) / (84.85 + 69.024 * s + s2);
    let alpha_1 = 49.843 - 0.2276 * s + 0.198e-2 * s2;
    let r_t15 = 1. + alpha_0 * (t - 15.) / (alpha_1 + t);

    sigma_35 * r_15 * r_t15
}
