//! Free-space attenuation and field strength conversions (ITU-R P.525).
//!
//! These are strictly only valid for propagation in vacuum.

use std::str::FromStr;

use crate::error::DielectricError;

/// Speed of light in m/s
const SPEED_OF_LIGHT: f64 = 299_792_458.;

/// Vacuum permittivity in F/m
const EPSILON_0: f64 = 8.854_187_812_8e-12;

/// Units a transmitter power can be given in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PowerUnit {
    /// Decibels relative to 1 W
    #[default]
    DBW,
    /// Decibels relative to 1 mW
    DBm,
    /// Watts
    W,
    /// Milliwatts
    MilliW,
}

impl PowerUnit {
    /// Convert `power` in this unit to dBW.
    pub fn to_dbw(self, power: f64) -> Result<f64, DielectricError> {
        let linear_to_db = |watts: f64| {
            if watts > 0. {
                Ok(10. * watts.log10())
            } else {
                Err(DielectricError::Power(power))
            }
        };

        match self {
            PowerUnit::DBW => Ok(power),
            PowerUnit::DBm => Ok(power - 30.),
            PowerUnit::W => linear_to_db(power),
            PowerUnit::MilliW => linear_to_db(power / 1e3),
        }
    }
}

impl FromStr for PowerUnit {
    type Err = DielectricError;

    /// Parse a unit label, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dbw" => Ok(PowerUnit::DBW),
            "dbm" => Ok(PowerUnit::DBm),
            "w" => Ok(PowerUnit::W),
            "mw" => Ok(PowerUnit::MilliW),
            _ => Err(DielectricError::UnsupportedUnit(s.to_string())),
        }
    }
}

/// Free-space path loss in dB.
///
/// For a frequency `freq` in GHz and a path length `distance` in m, this is
/// the Friis formula `20 log10(4 π d / λ)`.
pub fn free_space_path_loss(freq: f64, distance: f64) -> Result<f64, DielectricError> {
    if !(freq > 0.) {
        return Err(DielectricError::Frequency(freq));
    }
    if !(distance > 0.) {
        return Err(DielectricError::Distance(distance));
    }

    let wavelength = SPEED_OF_LIGHT / (freq * 1e9);
    Ok(20. * f64::log10(4. * std::f64::consts::PI * distance / wavelength))
}

/// Electric field strength in dBµV/m at a distance from a transmitter.
///
/// `power` is the EIRP of the transmitter in `unit`, and `distance` is in km.
pub fn field_strength_at_distance(
    power: f64,
    distance: f64,
    unit: PowerUnit,
) -> Result<f64, DielectricError> {
    let power = unit.to_dbw(power)?;
    if !(distance > 0.) {
        return Err(DielectricError::Distance(distance));
    }

    Ok(power - 20. * distance.log10() + 74.8)
}

/// Power flux in dBW/m² at a distance from a transmitter.
///
/// `power` is the EIRP of the transmitter in `unit`, and `distance` is in km.
pub fn power_flux_at_distance(
    power: f64,
    distance: f64,
    unit: PowerUnit,
) -> Result<f64, DielectricError> {
    Ok(field_strength_at_distance(power, distance, unit)? - 145.8)
}

/// Electric field strength in V/m from an average power flux in W/m².
pub fn power_flux_to_field_strength(power: f64) -> Result<f64, DielectricError> {
    if power < 0. {
        return Err(DielectricError::PowerFlux(power));
    }
    Ok(f64::sqrt(2. * power / (SPEED_OF_LIGHT * EPSILON_0)))
}

/// Average power flux in W/m² from an electric field amplitude in V/m.
///
/// This is the Poynting relation for a plane wave in vacuum.
pub fn field_strength_to_power_flux(field: f64) -> f64 {
    0.5 * SPEED_OF_LIGHT * EPSILON_0 * field.powi(2)
}
