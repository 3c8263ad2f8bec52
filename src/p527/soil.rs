//! Complex permittivity of soil.
//!
//! Soil is treated as a mixture of air, dry solids, and free water, combined
//! with a refractive (Lichtenecker style) mixing law. The solid fraction is
//! characterised by its sand, clay, and silt percentages.

use log::{debug, warn};
use num_complex::Complex64;
use smallvec::SmallVec;

use super::pure_water::pure_water_permittivity;
use crate::error::DielectricError;

/// Typical specific gravity of the dry soil solids
pub const DEFAULT_SPECIFIC_GRAVITY: f64 = 2.65;

/// Exponent of the refractive mixing law
pub const MIXING_ALPHA: f64 = 0.65;

/// Allowed deviation of the constituent sum from 100%
pub(super) const SUM_TOLERANCE: f64 = 1e-8 + 1e-5 * 100.;

/// Constituent percentages below this are accepted with an advisory
pub(super) const LOW_PERCENTAGE: f64 = 1.0;

/// Relaxation frequency in GHz of the effective soil conductivity
const CONDUCTIVITY_RELAX_FREQ: f64 = 1.35;

/// One of the solid constituents of soil.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constituent {
    /// Sand
    Sand,
    /// Clay
    Clay,
    /// Silt
    Silt,
}

impl std::fmt::Display for Constituent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Constituent::Sand => write!(f, "sand"),
            Constituent::Clay => write!(f, "clay"),
            Constituent::Silt => write!(f, "silt"),
        }
    }
}

/// Non-fatal notice about a soil mixture. The computation goes ahead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Advisory {
    /// A constituent is below 1% of the mixture
    LowPercentage {
        /// Which constituent
        constituent: Constituent,
        /// Its percentage
        percent: f64,
    },
}

impl std::fmt::Display for Advisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Advisory::LowPercentage {
                constituent,
                percent,
            } => write!(f, "{constituent} percentage too low ({percent}%)"),
        }
    }
}

/// Advisories collected while preparing a soil mixture.
pub type Advisories = SmallVec<[Advisory; 3]>;

/// Composition of the solid part of a soil, as percentages that sum to 100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Soil {
    /// Percentage of sand
    pub p_sand: f64,
    /// Percentage of clay
    pub p_clay: f64,
    /// Percentage of silt
    pub p_silt: f64,
}

impl Soil {
    /// Soil from its sand, clay, and silt percentages.
    ///
    /// Nothing is checked here; see [`Soil::check`].
    pub const fn new(p_sand: f64, p_clay: f64, p_silt: f64) -> Self {
        Self {
            p_sand,
            p_clay,
            p_silt,
        }
    }

    fn percentages(&self) -> [(Constituent, f64); 3] {
        [
            (Constituent::Sand, self.p_sand),
            (Constituent::Clay, self.p_clay),
            (Constituent::Silt, self.p_silt),
        ]
    }

    /// Sum of the three percentages.
    pub fn total(&self) -> f64 {
        self.p_sand + self.p_clay + self.p_silt
    }

    /// Validate the composition.
    ///
    /// The percentages must sum to 100 (within a small tolerance) and each
    /// must be positive. Constituents below 1% are reported as advisories.
    pub fn check(&self) -> Result<Advisories, DielectricError> {
        let total = self.total();
        // Written so that a NaN total also fails
        if !((total - 100.).abs() <= SUM_TOLERANCE) {
            return Err(DielectricError::CompositionSum(total));
        }

        let advisories = self
            .percentages()
            .into_iter()
            .filter(|&(_, percent)| percent < LOW_PERCENTAGE)
            .map(|(constituent, percent)| Advisory::LowPercentage {
                constituent,
                percent,
            })
            .collect();

        // Zeros take precedence over negative values
        let percentages = self.percentages();
        if let Some(&(constituent, _)) = percentages.iter().find(|(_, percent)| *percent == 0.) {
            return Err(DielectricError::ZeroPercentage(constituent));
        }
        if let Some(&(constituent, _)) = percentages.iter().find(|(_, percent)| *percent < 0.) {
            return Err(DielectricError::NegativePercentage(constituent));
        }

        Ok(advisories)
    }

    /// Bulk density of the dry soil in g/cm³.
    ///
    /// Only defined once [`Soil::check`] has passed, so that every logarithm
    /// has a positive argument.
    fn bulk_density(&self) -> f64 {
        1.07256
            + 0.078886 * self.p_sand.ln()
            + 0.038753 * self.p_clay.ln()
            + 0.032732 * self.p_silt.ln()
    }
}

/// A validated soil with the quantities that only depend on its composition,
/// water content, and specific gravity.
///
/// Preparing a mixture once and calling [`SoilMixture::permittivity`] for
/// each frequency/temperature avoids repeating the validation.
#[derive(Debug, Clone)]
pub struct SoilMixture {
    soil: Soil,
    /// Volumetric water content, as a ratio
    water_vol: f64,
    /// Specific gravity of the dry solids
    rho_s: f64,
    /// Bulk density in g/cm³
    rho_b: f64,
    /// Conductivity terms, aka σ₁ and σ₂
    sigma_1: f64,
    sigma_2: f64,
    /// Shape exponents for the real and imaginary parts
    beta_prime: f64,
    beta_second: f64,
    /// Permittivity of the dry solids
    eps_sm: f64,
    advisories: Advisories,
}

impl SoilMixture {
    /// Validate and prepare a soil mixture.
    ///
    /// `water_vol` is the volumetric water content as a ratio and `rho_s` the
    /// specific gravity of the dry solids (normally 2.5 to 2.7, see
    /// [`DEFAULT_SPECIFIC_GRAVITY`]). Advisories are logged and kept in
    /// [`SoilMixture::advisories`].
    pub fn new(soil: Soil, water_vol: f64, rho_s: f64) -> Result<Self, DielectricError> {
        let advisories = soil.check()?;
        for advisory in &advisories {
            warn!("{advisory}");
        }

        let rho_b = soil.bulk_density();

        if !(water_vol > 0.) {
            return Err(DielectricError::WaterContent(water_vol));
        }
        if !(rho_s > 0.) {
            return Err(DielectricError::SpecificGravity(rho_s));
        }

        let Soil { p_sand, p_clay, .. } = soil;

        let sigma_1 = 0.0467 + 0.2204 * rho_b - 0.004111 * p_sand - 0.006614 * p_clay;
        let sigma_2 = -1.645 + 1.939 * rho_b - 0.0225622 * p_sand + 0.01594 * p_clay;

        let beta_prime = 1.2748 - 0.00519 * p_sand - 0.00152 * p_clay;
        let beta_second = 1.33797 - 0.00603 * p_sand - 0.00166 * p_clay;

        let eps_sm = (1.01 + 0.44 * rho_s).powi(2) - 0.062;

        debug!("soil {soil:?}: bulk density {rho_b} g/cm³, sigma_1 {sigma_1}, sigma_2 {sigma_2}");

        Ok(Self {
            soil,
            water_vol,
            rho_s,
            rho_b,
            sigma_1,
            sigma_2,
            beta_prime,
            beta_second,
            eps_sm,
            advisories,
        })
    }

    /// The soil composition.
    pub fn soil(&self) -> &Soil {
        &self.soil
    }

    /// Bulk density in g/cm³.
    pub fn bulk_density(&self) -> f64 {
        self.rho_b
    }

    /// Advisories raised while validating the composition.
    pub fn advisories(&self) -> &[Advisory] {
        &self.advisories
    }

    /// Complex relative permittivity of the soil.
    ///
    /// For a frequency `freq` in GHz and a `temperature` in °C, compute
    /// `e_real - j * e_imag`. The imaginary part has the negative sign
    /// applied.
    pub fn permittivity(&self, freq: f64, temperature: f64) -> Result<Complex64, DielectricError> {
        if !(freq > 0.) || freq.is_infinite() {
            return Err(DielectricError::Frequency(freq));
        }

        // Effective conductivity, single pole relaxation
        let ratio = freq / CONDUCTIVITY_RELAX_FREQ;
        let sigma_common = (self.sigma_1 - self.sigma_2) / (1. + ratio.powi(2));
        let sigma_eff_prime = sigma_common * ratio;
        let sigma_eff_second = sigma_common + self.sigma_2;

        // Free water is pure water plus a conductivity correction
        let eps_fw_corr = (self.rho_s - self.rho_b) / (self.rho_s * self.water_vol) * (18. / freq);
        let eps_pw = pure_water_permittivity(freq, temperature)?;
        let eps_fw_real = eps_pw.re + sigma_eff_prime * eps_fw_corr;
        let eps_fw_imag = eps_pw.im.abs() + sigma_eff_second * eps_fw_corr;

        let alpha = MIXING_ALPHA;
        let water_vol = self.water_vol;

        let imag = signed_powf(
            water_vol.powf(self.beta_second) * signed_powf(eps_fw_imag, alpha),
            alpha.recip(),
        );

        let real = signed_powf(
            1. - water_vol
                + water_vol.powf(self.beta_prime) * signed_powf(eps_fw_real, alpha)
                + (self.rho_b / self.rho_s) * (self.eps_sm.powf(alpha) - 1.),
            alpha.recip(),
        );

        Ok(Complex64::new(real, -imag))
    }
}

/// Complex relative permittivity of soil.
///
/// For a frequency `freq` in GHz, a `temperature` in °C, a `soil`
/// composition, the volumetric water content `water_vol` as a ratio, and the
/// specific gravity `rho_s` of the dry solids, compute `e_real - j * e_imag`.
/// The imaginary part has the negative sign applied.
///
/// Constituents below 1% are logged as warnings; use [`SoilMixture`] to
/// inspect them.
pub fn soil_permittivity(
    freq: f64,
    temperature: f64,
    soil: Soil,
    water_vol: f64,
    rho_s: f64,
) -> Result<Complex64, DielectricError> {
    SoilMixture::new(soil, water_vol, rho_s)?.permittivity(freq, temperature)
}

/// Raise `x` to `exponent` keeping the sign of `x`.
///
/// A negative base with a fractional exponent has no real principal value,
/// and `powf` gives NaN. The mixing law instead takes the real root of the
/// magnitude, with the sign carried through.
pub(super) fn signed_powf(x: f64, exponent: f64) -> f64 {
    x.signum() * x.abs().powf(exponent)
}
