use approx::{assert_abs_diff_eq, assert_relative_eq};
use num_complex::Complex64;

use super::soil::signed_powf;
use super::*;
use crate::error::DielectricError;

/// Check some values for the pure water permittivity at (frequency in GHz,
/// temperature in °C).
#[test]
fn pure_water() {
    let inputs_and_outputs = [
        (2.0, 0.0, Complex64::new(83.84423644223946, -17.608964484976216)),
        (1.4, 20.0, Complex64::new(79.56772434996094, -6.1318033651836625)),
        (10.0, 20.0, Complex64::new(60.7886338659253, -32.7208017094769)),
        (100.0, 30.0, Complex64::new(8.347447271609557, -15.016865787777792)),
    ];

    for (freq, temp, expected_output) in inputs_and_outputs {
        let actual_output = pure_water_permittivity(freq, temp).unwrap();
        assert_relative_eq!(actual_output.re, expected_output.re, max_relative = 1e-12);
        assert_relative_eq!(actual_output.im, expected_output.im, max_relative = 1e-12);
    }
}

#[test]
fn pure_water_static_limit() {
    // No loss at zero frequency, and the real part is the static permittivity
    let eps = pure_water_permittivity(0.0, 25.0).unwrap();
    let parameters = DebyeParameters::pure_water(25.0).unwrap();
    assert_relative_eq!(eps.re, parameters.eps_static, max_relative = 1e-12);
    assert_abs_diff_eq!(eps.im, 0.0);
}

#[test]
fn pure_water_sign_convention() {
    for temp in [-20.0, 0.0, 10.0, 25.0, 40.0, 60.0] {
        for freq in [0.1, 1.0, 10.0, 50.0, 300.0] {
            let eps = pure_water_permittivity(freq, temp).unwrap();
            assert!(eps.re > 0., "real part at {freq} GHz, {temp} °C: {eps}");
            assert!(eps.im <= 0., "imaginary part at {freq} GHz, {temp} °C: {eps}");
        }
    }
}

#[test]
fn absolute_zero() {
    assert_eq!(
        pure_water_permittivity(1.0, -273.15),
        Err(DielectricError::AbsoluteZero(-273.15))
    );
    assert_eq!(
        pure_water_permittivity(1.0, -300.0),
        Err(DielectricError::AbsoluteZero(-300.0))
    );
    assert_eq!(
        salt_water_permittivity(1.0, -273.15, SEAWATER_SALINITY),
        Err(DielectricError::AbsoluteZero(-273.15))
    );
}

#[test]
fn undefined_relaxation_frequency() {
    let mut parameters = DebyeParameters::pure_water(20.0).unwrap();
    parameters.relax_freq_2 = 0.0;
    assert_eq!(
        parameters.check(20.0),
        Err(DielectricError::TemperatureOutOfRange(20.0))
    );

    assert!(matches!(
        pure_water_permittivity(1.0, f64::NAN),
        Err(DielectricError::TemperatureOutOfRange(_))
    ));
}

/// Check some values for sea water at (frequency in GHz, temperature in °C).
#[test]
fn sea_water() {
    let inputs_and_outputs = [
        (2.0, 0.0, Complex64::new(74.97023174867621, -40.583393091354424)),
        (1.4, 20.0, Complex64::new(71.27448394985554, -66.74599613012668)),
        (10.0, 20.0, Complex64::new(56.02893020667155, -36.92631665957816)),
    ];

    for (freq, temp, expected_output) in inputs_and_outputs {
        let actual_output = salt_water_permittivity(freq, temp, SEAWATER_SALINITY).unwrap();
        assert_relative_eq!(actual_output.re, expected_output.re, max_relative = 1e-12);
        assert_relative_eq!(actual_output.im, expected_output.im, max_relative = 1e-12);
    }
}

#[test]
fn fresh_water_limit() {
    for (freq, temp) in [(1.4, 20.0), (10.0, 5.0), (37.0, 30.0)] {
        let pure = pure_water_permittivity(freq, temp).unwrap();

        let fresh = salt_water_permittivity(freq, temp, 0.0).unwrap();
        assert_relative_eq!(fresh.re, pure.re, max_relative = 1e-12);
        assert_relative_eq!(fresh.im, pure.im, max_relative = 1e-12);

        let nearly_fresh = salt_water_permittivity(freq, temp, 1e-6).unwrap();
        assert_relative_eq!(nearly_fresh.re, pure.re, max_relative = 1e-6);
        assert_relative_eq!(nearly_fresh.im, pure.im, max_relative = 1e-5);
    }
}

#[test]
fn salinity_increases_loss() {
    let fresh = salt_water_permittivity(1.4, 20.0, 5.0).unwrap();
    let salty = salt_water_permittivity(1.4, 20.0, 35.0).unwrap();
    assert!(salty.im < fresh.im);
    assert!(salty.re < fresh.re);
}

#[test]
fn salt_water_zero_frequency() {
    assert_eq!(
        salt_water_permittivity(0.0, 20.0, SEAWATER_SALINITY),
        Err(DielectricError::Frequency(0.0))
    );
}

/// Check some values for soil at (frequency in GHz, temperature in °C, soil,
/// volumetric water content) with the default specific gravity.
#[test]
fn soil() {
    let inputs_and_outputs = [
        (
            1.4,
            20.0,
            SoilType::Sand.composition(),
            0.1,
            Complex64::new(11.781703022797375, 0.6852068639624045),
        ),
        (
            1.4,
            20.0,
            Soil::new(0.5, 49.5, 50.0),
            0.2,
            Complex64::new(7.04744174830501, -1.5379005504547518),
        ),
        (
            10.0,
            23.0,
            SoilType::Loam.composition(),
            0.3,
            Complex64::new(15.476186384539648, -4.60739120070738),
        ),
        // The free water real part is negative here
        (
            0.5,
            10.0,
            SoilType::Clay.composition(),
            0.05,
            Complex64::new(1.23943465288781, -0.27711225937190753),
        ),
    ];

    for (freq, temp, soil, water_vol, expected_output) in inputs_and_outputs {
        let actual_output =
            soil_permittivity(freq, temp, soil, water_vol, DEFAULT_SPECIFIC_GRAVITY).unwrap();
        assert_relative_eq!(actual_output.re, expected_output.re, max_relative = 1e-10);
        assert_relative_eq!(actual_output.im, expected_output.im, max_relative = 1e-10);
    }
}

#[test]
fn sand_in_plausible_range() {
    let eps = soil_permittivity(1.4, 20.0, SoilType::Sand.into(), 0.1, DEFAULT_SPECIFIC_GRAVITY)
        .unwrap();
    assert!(eps.re > 2.0 && eps.re < 30.0, "{eps}");
    assert!(eps.re.is_finite() && eps.im.is_finite());
}

#[test]
fn composition_must_sum_to_100() {
    assert_eq!(
        soil_permittivity(1.4, 20.0, Soil::new(30., 30., 30.), 0.1, DEFAULT_SPECIFIC_GRAVITY),
        Err(DielectricError::CompositionSum(90.0))
    );
    assert!(matches!(
        Soil::new(40.0, 40.0, 21.0).check(),
        Err(DielectricError::CompositionSum(_))
    ));
    assert!(Soil::new(40.0, 20.0, 39.9995).check().is_ok());
    assert!(Soil::new(f64::NAN, 50.0, 50.0).check().is_err());
}

#[test]
fn low_percentage_advisory() {
    let mixture =
        SoilMixture::new(Soil::new(0.5, 49.5, 50.0), 0.2, DEFAULT_SPECIFIC_GRAVITY).unwrap();
    assert_eq!(
        mixture.advisories(),
        &[Advisory::LowPercentage {
            constituent: Constituent::Sand,
            percent: 0.5,
        }]
    );
    assert_eq!(
        mixture.advisories()[0].to_string(),
        "sand percentage too low (0.5%)"
    );

    let eps = mixture.permittivity(1.4, 20.0).unwrap();
    assert!(eps.re.is_finite() && eps.im.is_finite());

    let mixture =
        SoilMixture::new(Soil::new(0.5, 0.5, 99.0), 0.2, DEFAULT_SPECIFIC_GRAVITY).unwrap();
    assert_eq!(mixture.advisories().len(), 2);
}

#[test]
fn non_positive_percentages() {
    assert_eq!(
        Soil::new(0.0, 50.0, 50.0).check(),
        Err(DielectricError::ZeroPercentage(Constituent::Sand))
    );
    assert_eq!(
        Soil::new(50.0, 60.0, -10.0).check(),
        Err(DielectricError::NegativePercentage(Constituent::Silt))
    );
    // A zero is reported even when an earlier constituent is negative
    assert_eq!(
        Soil::new(-10.0, 110.0, 0.0).check(),
        Err(DielectricError::ZeroPercentage(Constituent::Silt))
    );
    assert_eq!(
        soil_permittivity(1.4, 20.0, Soil::new(50.0, 0.0, 50.0), 0.1, DEFAULT_SPECIFIC_GRAVITY),
        Err(DielectricError::ZeroPercentage(Constituent::Clay))
    );
}

#[test]
fn water_and_frequency_divisors() {
    let soil = SoilType::Loam.composition();
    assert_eq!(
        soil_permittivity(1.4, 20.0, soil, 0.0, DEFAULT_SPECIFIC_GRAVITY),
        Err(DielectricError::WaterContent(0.0))
    );
    assert_eq!(
        soil_permittivity(0.0, 20.0, soil, 0.1, DEFAULT_SPECIFIC_GRAVITY),
        Err(DielectricError::Frequency(0.0))
    );
    assert_eq!(
        soil_permittivity(1.4, 20.0, soil, 0.1, 0.0),
        Err(DielectricError::SpecificGravity(0.0))
    );
}

#[test]
fn non_finite_frequency() {
    let soil = SoilType::Loam.composition();
    for freq in [f64::NAN, f64::INFINITY] {
        assert!(matches!(
            pure_water_permittivity(freq, 20.0),
            Err(DielectricError::Frequency(_))
        ));
        assert!(matches!(
            salt_water_permittivity(freq, 20.0, SEAWATER_SALINITY),
            Err(DielectricError::Frequency(_))
        ));
        assert!(matches!(
            soil_permittivity(freq, 20.0, soil, 0.2, DEFAULT_SPECIFIC_GRAVITY),
            Err(DielectricError::Frequency(_))
        ));
    }
    assert!(matches!(
        pure_water_permittivity(f64::NEG_INFINITY, 20.0),
        Err(DielectricError::Frequency(_))
    ));
}

#[test]
fn soil_temperature_errors_pass_through() {
    assert_eq!(
        soil_permittivity(1.4, -273.15, SoilType::Silt.into(), 0.1, DEFAULT_SPECIFIC_GRAVITY),
        Err(DielectricError::AbsoluteZero(-273.15))
    );
}

#[test]
fn mixture_matches_one_shot() {
    let mixture = SoilMixture::new(SoilType::SiltyClay.into(), 0.25, 2.6).unwrap();
    assert!(mixture.advisories().is_empty());
    assert!(mixture.bulk_density() > 1.0 && mixture.bulk_density() < 2.0);

    for freq in [0.3, 1.4, 5.0, 20.0] {
        assert_eq!(
            mixture.permittivity(freq, 15.0),
            soil_permittivity(freq, 15.0, SoilType::SiltyClay.into(), 0.25, 2.6)
        );
    }
}

#[test]
fn negative_base_keeps_sign() {
    assert_relative_eq!(signed_powf(-8.0, 1.0 / 3.0), -2.0, max_relative = 1e-12);
    assert_relative_eq!(signed_powf(8.0, 1.0 / 3.0), 2.0, max_relative = 1e-12);
    assert_relative_eq!(
        signed_powf(-2.0, MIXING_ALPHA.recip()),
        -(2f64.powf(MIXING_ALPHA.recip())),
        max_relative = 1e-12
    );
    assert_eq!(signed_powf(0.0, MIXING_ALPHA), 0.0);
    assert!((-2f64).powf(MIXING_ALPHA).is_nan());
}
