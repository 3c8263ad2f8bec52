//! Double Debye relaxation model for water.

use crate::error::DielectricError;

/// Offset from °C to K
const KELVIN_OFFSET: f64 = 273.15;

/// Parameters of the two-pole Debye relaxation model.
///
/// Relaxation frequencies are in GHz, the permittivity limits are
/// dimensionless.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebyeParameters {
    /// First (principal) relaxation frequency
    pub relax_freq_1: f64,
    /// Second relaxation frequency
    pub relax_freq_2: f64,
    /// High frequency limit
    pub eps_inf: f64,
    /// Static (zero frequency) limit
    pub eps_static: f64,
    /// Permittivity between the two poles
    pub eps_pole: f64,
}

impl DebyeParameters {
    /// Parameters for pure water at `temperature` in °C.
    ///
    /// Fails if the temperature is at or below 0 K, or if it is so close to 0
    /// K that the relaxation frequencies are no longer finite.
    pub fn pure_water(temperature: f64) -> Result<Self, DielectricError> {
        let theta = inverse_temperature(temperature)?;

        let relax_freq_1 = 20.20 - 146.4 * theta + 316. * theta.powi(2);
        let eps_static = 77.66 + 103.3 * theta;

        let parameters = Self {
            relax_freq_1,
            relax_freq_2: 39.8 * relax_freq_1,
            eps_inf: 3.52 - 7.52 * theta,
            eps_static,
            eps_pole: 0.0671 * eps_static,
        };
        parameters.check(temperature)?;
        Ok(parameters)
    }

    /// Verify that the relaxation frequencies can be divided by.
    pub(super) fn check(&self, temperature: f64) -> Result<(), DielectricError> {
        let usable = |freq: f64| freq.is_finite() && freq != 0.;
        if usable(self.relax_freq_1) && usable(self.relax_freq_2) {
            Ok(())
        } else {
            Err(DielectricError::TemperatureOutOfRange(temperature))
        }
    }

    /// Evaluate both relaxation terms at `freq` in GHz.
    ///
    /// Returns `(real, loss)`, where the loss is the positive magnitude of the
    /// imaginary part. A NaN or infinite `freq` is reported as a frequency
    /// error, anything else non-finite as a temperature error.
    pub(super) fn relaxation(
        &self,
        freq: f64,
        temperature: f64,
    ) -> Result<(f64, f64), DielectricError> {
        if !freq.is_finite() {
            return Err(DielectricError::Frequency(freq));
        }

        let ratio_1 = freq / self.relax_freq_1;
        let ratio_2 = freq / self.relax_freq_2;
        let denom_1 = 1. + ratio_1.powi(2);
        let denom_2 = 1. + ratio_2.powi(2);

        let num_1 = self.eps_static - self.eps_pole;
        let num_2 = self.eps_pole - self.eps_inf;

        let real = self.eps_inf + num_1 / denom_1 + num_2 / denom_2;
        let loss = ratio_1 * num_1 / denom_1 + ratio_2 * num_2 / denom_2;

        if real.is_finite() && loss.is_finite() {
            Ok((real, loss))
        } else {
            Err(DielectricError::TemperatureOutOfRange(temperature))
        }
    }
}

/// Reduced inverse temperature, `theta = 300 / T_K - 1`.
fn inverse_temperature(temperature: f64) -> Result<f64, DielectricError> {
    let kelvin = temperature + KELVIN_OFFSET;
    if kelvin <= 0. {
        return Err(DielectricError::AbsoluteZero(temperature));
    }
    Ok(300. / kelvin - 1.)
}
