use num_complex::Complex64;

use super::debye::DebyeParameters;
use crate::error::DielectricError;

/// Complex relative permittivity of pure water.
///
/// For a frequency `freq` in GHz and a `temperature` in °C, compute the
/// complex relative permittivity `e_real - j * e_imag`. The imaginary part of
/// the result has the negative sign applied.
///
/// Fails if the temperature is at or below 0 K, or if the Debye relaxation
/// terms can't be evaluated for it.
pub fn pure_water_permittivity(freq: f64, temperature: f64) -> Result<Complex64, DielectricError> {
    let parameters = DebyeParameters::pure_water(temperature)?;
    let (real, loss) = parameters.relaxation(freq, temperature)?;

    Ok(Complex64::new(real, -loss))
}
