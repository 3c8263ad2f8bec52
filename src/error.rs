//! Error type shared by all models.

use crate::p527::Constituent;

/// Possible errors from the dielectric and propagation models.
#[derive(Debug, Clone, PartialEq)]
pub enum DielectricError {
    /// Temperature (°C) is at or below absolute zero
    AbsoluteZero(f64),
    /// Temperature (°C) gives an undefined relaxation frequency
    TemperatureOutOfRange(f64),
    /// Soil constituent percentages don't sum to 100
    CompositionSum(f64),
    /// A soil constituent percentage is zero
    ZeroPercentage(Constituent),
    /// A soil constituent percentage is negative
    NegativePercentage(Constituent),
    /// Frequency (GHz) is not positive where it is used as a divisor
    Frequency(f64),
    /// Volumetric water content is not positive
    WaterContent(f64),
    /// Specific gravity of the dry soil solids is not positive
    SpecificGravity(f64),
    /// Distance is not positive
    Distance(f64),
    /// Transmitter power in linear units is not positive
    Power(f64),
    /// Power flux (W/m²) is negative
    PowerFlux(f64),
    /// Power unit label is not one of dBW, dBm, W, or mW
    UnsupportedUnit(String),
    /// Name is not in the soil catalog
    UnknownSoilType(String),
}

impl DielectricError {
    /// Whether the error comes from an input outside the physical domain of
    /// a model, as opposed to an unrecognized label.
    pub fn is_domain_error(&self) -> bool {
        !matches!(
            self,
            DielectricError::UnsupportedUnit(_) | DielectricError::UnknownSoilType(_)
        )
    }
}

impl std::fmt::Display for DielectricError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DielectricError::AbsoluteZero(t) => {
                write!(f, "temperature must be > 0 K, got {t} °C")
            }
            DielectricError::TemperatureOutOfRange(t) => {
                write!(f, "check temperature value, {t} °C is out of range")
            }
            DielectricError::CompositionSum(sum) => {
                write!(f, "the constituent percentages must sum to 100, got {sum}")
            }
            DielectricError::ZeroPercentage(c) => write!(f, "{c} percentage must be > 0"),
            DielectricError::NegativePercentage(c) => {
                write!(f, "{c} percentage cannot be negative")
            }
            DielectricError::Frequency(freq) => {
                write!(f, "frequency must be > 0 GHz, got {freq}")
            }
            DielectricError::WaterContent(v) => {
                write!(f, "volumetric water content must be > 0, got {v}")
            }
            DielectricError::SpecificGravity(rho) => {
                write!(f, "specific gravity of soil solids must be > 0, got {rho}")
            }
            DielectricError::Distance(d) => write!(f, "distance must be > 0, got {d}"),
            DielectricError::Power(p) => {
                write!(f, "power in linear units must be > 0, got {p}")
            }
            DielectricError::PowerFlux(s) => write!(f, "power flux must be >= 0, got {s}"),
            DielectricError::UnsupportedUnit(unit) => {
                write!(f, "unsupported power unit '{unit}'")
            }
            DielectricError::UnknownSoilType(name) => write!(f, "unknown soil type '{name}'"),
        }
    }
}

impl std::error::Error for DielectricError {}
